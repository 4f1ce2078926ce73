//! Metric tree as JSON

use super::{output_path, ReportWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tscan_api::Report;

/// Writes `<stem>.metrics.json`
pub struct MetricsWriter {
    dir: PathBuf,
}

impl MetricsWriter {
    /// Writer into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportWriter for MetricsWriter {
    fn write(&self, stem: &str, report: &Report) -> Result<Vec<PathBuf>> {
        let path = output_path(&self.dir, stem, "metrics.json");
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &report.metrics)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(vec![path])
    }
}

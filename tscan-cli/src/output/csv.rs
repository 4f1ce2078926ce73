//! CSV report files

use super::{output_path, ReportWriter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tscan_api::{write_problems, Report};

/// Writes `<stem>.document.csv`, `.paragraphs.csv`, `.sentences.csv` and `.words.csv`
pub struct CsvWriter {
    dir: PathBuf,
}

impl CsvWriter {
    /// Writer into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportWriter for CsvWriter {
    fn write(&self, stem: &str, report: &Report) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (suffix, table) in report.tables() {
            let path = output_path(&self.dir, stem, &format!("{suffix}.csv"));
            let file = File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            table
                .write_to(BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Writes `<stem>.problems.csv` with the lexicon misses
pub struct ProblemWriter {
    dir: PathBuf,
}

impl ProblemWriter {
    /// Writer into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportWriter for ProblemWriter {
    fn write(&self, stem: &str, report: &Report) -> Result<Vec<PathBuf>> {
        let path = output_path(&self.dir, stem, "problems.csv");
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        write_problems(&report.problems, BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !report.problems.is_empty() {
            log::info!("{} lexicon misses logged to {}", report.problems.len(), path.display());
        }
        Ok(vec![path])
    }
}

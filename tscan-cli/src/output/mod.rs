//! Report file writers

use anyhow::Result;
use std::path::{Path, PathBuf};
use tscan_api::Report;

pub mod csv;
pub mod json;

pub use csv::{CsvWriter, ProblemWriter};
pub use json::MetricsWriter;

/// Something that turns a report into files
pub trait ReportWriter {
    /// Write the files for one report; returns the paths written
    fn write(&self, stem: &str, report: &Report) -> Result<Vec<PathBuf>>;
}

/// `<dir>/<stem>.<suffix>`
pub fn output_path(dir: &Path, stem: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{stem}.{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("out"), "brief", "sentences.csv");
        assert_eq!(path, Path::new("out").join("brief.sentences.csv"));
    }
}

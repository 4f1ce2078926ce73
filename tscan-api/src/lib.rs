//! Public API for T-scan readability analysis
//!
//! Wraps the engine behind a small, stable surface: build a
//! [`ReadabilityAnalyzer`] from settings, hand it annotated documents and
//! get back a [`Report`] with the CSV tables, the metric tree and the
//! lexicon misses.

#![warn(missing_docs)]

pub mod dto;
pub mod error;

use std::path::Path;
use std::sync::Arc;
use tscan_core::{document_table, metric_tree, paragraph_table, sentence_table, word_table};
use tscan_engine::{Analysis, Analyzer};

pub use dto::{write_problems, Metadata, Problem, Report, PROBLEMS_HEADER};
pub use error::{ApiError, Result};
pub use tscan_core::annotation::AnnotatedDocument;
pub use tscan_core::{AnalysisConfig, CsvTable, MetricNode};
pub use tscan_engine::{ExecutionMode, Input, Settings};

/// Main entry point for readability analysis
pub struct ReadabilityAnalyzer {
    inner: Arc<Analyzer>,
}

impl ReadabilityAnalyzer {
    /// Analyzer with default settings and empty lexicons
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Analyzer::builder().build()),
        }
    }

    /// Analyzer configured by settings; loads every configured lexicon
    pub fn with_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Analyzer::from_settings(settings)?),
        })
    }

    /// Analyzer configured by a TOML settings file
    pub fn from_settings_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Settings::from_file(path.as_ref())?;
        Self::with_settings(&settings)
    }

    /// Wrap an engine analyzer built elsewhere
    pub fn from_engine(analyzer: Analyzer) -> Self {
        Self {
            inner: Arc::new(analyzer),
        }
    }

    /// Analysis thresholds in use
    pub fn config(&self) -> &AnalysisConfig {
        self.inner.config()
    }

    /// Analyse an input, naming rows after the input
    pub fn analyze(&self, input: Input) -> Result<Report> {
        let name = input.name();
        self.analyze_named(&name, input)
    }

    /// Analyse an input under an explicit document name
    pub fn analyze_named(&self, name: &str, input: Input) -> Result<Report> {
        let analysis = self.inner.analyze(name, input)?;
        Ok(report(name, analysis))
    }

    /// Analyse a document already in memory
    pub fn analyze_document(&self, name: &str, document: &AnnotatedDocument) -> Result<Report> {
        let analysis = self.inner.analyze_document(name, document)?;
        Ok(report(name, analysis))
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn report(name: &str, analysis: Analysis) -> Report {
    let Analysis {
        tree,
        problems,
        metadata,
    } = analysis;
    Report {
        name: name.to_string(),
        document: document_table(&tree),
        paragraphs: paragraph_table(&tree),
        sentences: sentence_table(&tree),
        words: word_table(&tree),
        metrics: metric_tree(&tree),
        problems: problems.iter().map(Problem::from).collect(),
        metadata: Metadata {
            paragraphs: metadata.paragraphs,
            sentences: metadata.sentences,
            words: tree.totals.counts.words,
            parse_status: metadata.parse_status,
            mode_used: metadata.execution_mode.to_string(),
            processing_time_ms: metadata.processing_time_ms,
        },
    }
}

// Convenience functions

/// Analyse annotated JSON text with default settings
pub fn analyze_json(json: &str) -> Result<Report> {
    ReadabilityAnalyzer::new().analyze(Input::from_json(json))
}

/// Analyse an annotated JSON file with default settings
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<Report> {
    ReadabilityAnalyzer::new().analyze(Input::from_file(path.as_ref().to_path_buf()))
}

/// Analyse a file with settings read from a TOML file
pub fn analyze_file_with_settings<P: AsRef<Path>, S: AsRef<Path>>(
    path: P,
    settings: S,
) -> Result<Report> {
    ReadabilityAnalyzer::from_settings_file(settings)?
        .analyze(Input::from_file(path.as_ref().to_path_buf()))
}

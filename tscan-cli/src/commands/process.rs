//! Process command implementation

use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{CsvWriter, MetricsWriter, ProblemWriter, ReportWriter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tscan_api::{ExecutionMode, Input, ReadabilityAnalyzer, Settings};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Annotated JSON documents or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Directory for the report files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip parts: c=CSV output, l=LSA, w=language model, a/p=parser
    #[arg(long, value_name = "[clwap]")]
    pub skip: Option<String>,

    /// Override the execution mode from the settings
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Execution modes selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// One sentence at a time
    Sequential,
    /// Sentences across threads
    Parallel,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => ExecutionMode::Sequential,
            Mode::Parallel => ExecutionMode::Parallel,
        }
    }
}

/// What `--skip` turns off
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Skip {
    /// No CSV files
    pub csv: bool,
    /// No language model
    pub language_model: bool,
    /// No parser
    pub parser: bool,
}

impl Skip {
    /// Parse the letters of `--skip`
    pub fn parse(letters: &str) -> Result<Self, CliError> {
        let mut skip = Skip::default();
        for c in letters.chars() {
            match c {
                'c' => skip.csv = true,
                'w' => skip.language_model = true,
                'a' | 'p' => skip.parser = true,
                'l' => log::info!("LSA is not supported, nothing to skip"),
                other => return Err(CliError::InvalidSkip(other)),
            }
        }
        Ok(skip)
    }

    /// Turn off the skipped services
    pub fn apply(&self, settings: &mut Settings) {
        if self.parser {
            settings.services.use_parser = false;
        }
        if self.language_model {
            settings.services.use_language_model = false;
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.verbose);
        log::debug!("Arguments: {self:?}");

        let skip = Skip::parse(self.skip.as_deref().unwrap_or(""))?;
        let settings = self.settings(&skip)?;
        let analyzer = ReadabilityAnalyzer::with_settings(&settings)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let files = resolve_patterns(&self.input)?;
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })?;

        let mut writers: Vec<Box<dyn ReportWriter>> = Vec::new();
        if !skip.csv {
            writers.push(Box::new(CsvWriter::new(&self.output_dir)));
        }
        writers.push(Box::new(MetricsWriter::new(&self.output_dir)));
        if settings.analysis.log_problems {
            writers.push(Box::new(ProblemWriter::new(&self.output_dir)));
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(files.len() as u64);
        log::info!("Processing {} documents", files.len());

        for path in &files {
            let report = analyzer
                .analyze(Input::from_file(path))
                .map_err(|e| CliError::ProcessingError(format!("{}: {e}", path.display())))?;
            let stem = stem(path);
            for writer in &writers {
                for written in writer.write(&stem, &report)? {
                    log::info!("wrote {}", written.display());
                }
            }
            log::info!(
                "{}: {} words, {} sentences, parser status {}",
                report.name,
                report.metadata.words,
                report.metadata.sentences,
                report.metadata.parse_status
            );
            progress.document_completed(&report.name);
        }

        progress.finish();
        Ok(())
    }

    fn settings(&self, skip: &Skip) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };
        skip.apply(&mut settings);
        if let Some(mode) = self.mode {
            settings.services.execution = mode.into();
        }
        Ok(settings)
    }
}

/// Output file stem: the input file name without its extension
fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_letters() {
        let skip = Skip::parse("cwa").unwrap();
        assert!(skip.csv && skip.language_model && skip.parser);
        assert_eq!(Skip::parse("l").unwrap(), Skip::default());
        assert!(matches!(Skip::parse("cx"), Err(CliError::InvalidSkip('x'))));
    }

    #[test]
    fn test_skip_disables_services() {
        let mut settings = Settings::default();
        Skip::parse("p").unwrap().apply(&mut settings);
        assert!(!settings.services.use_parser);
        assert!(settings.services.use_language_model);
    }

    #[test]
    fn test_stem() {
        assert_eq!(stem(Path::new("corpus/brief.json")), "brief");
        assert_eq!(stem(Path::new("notes")), "notes");
    }
}

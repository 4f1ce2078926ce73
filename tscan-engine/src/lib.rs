//! Orchestration of T-scan document analysis
//!
//! Loads settings and lexicons, reads annotated documents, asks the syntax
//! parser and language model about every sentence and builds the statistics
//! tree with `tscan-core`.
//!
//! ```no_run
//! use tscan_engine::{Analyzer, Input, Settings};
//!
//! let settings = Settings::from_file("tscan.toml".as_ref())?;
//! let analyzer = Analyzer::from_settings(&settings)?;
//! let analysis = analyzer.analyze("brief.json", Input::from_file("brief.json"))?;
//! println!("{} words", analysis.tree.totals.counts.words);
//! # Ok::<(), tscan_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod executor;
pub mod input;
pub mod services;
pub mod settings;

pub use analyzer::{Analysis, AnalysisMetadata, Analyzer, AnalyzerBuilder};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::Input;
pub use services::{LanguageModel, SyntaxParser};
pub use settings::{LexiconPaths, ServiceSettings, Settings};

pub use tscan_core::{AnalysisConfig, LexiconMiss, LexiconStore, StatsNode};

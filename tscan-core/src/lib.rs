//! Feature classification and hierarchical aggregation for Dutch readability
//! analysis
//!
//! The crate turns an annotated document (tokens with part-of-speech tags,
//! lemmas, morphology and optional parser and language-model replies) into a
//! tree of statistics with one node per word, sentence, paragraph and
//! document. Every node carries additive totals, so a parent is the merge of
//! its children plus its own contribution.
//!
//! # Architecture
//!
//! - **Lexicon Store**: immutable lookup tables, loaded once
//! - **Word Classifier**: one annotated word to one [`WordFact`]
//! - **Multi-word Resolver**: connectives, situations and expressions that
//!   span several tokens
//! - **Referential Overlap**: argument and lemma overlap between sentences
//! - **MTLD**: lexical diversity
//! - **Aggregation Tree**: [`StatsNode`] and its merge
//! - **Report Projection**: CSV tables and metric trees
//!
//! # Example
//!
//! ```rust
//! use tscan_core::annotation::{AnnotatedDocument, AnnotatedParagraph, AnnotatedSentence, AnnotatedWord, PosTag};
//! use tscan_core::{build_annotated, document_table, AnalysisConfig, LexiconStore};
//!
//! let word = |text: &str, head: &str| AnnotatedWord {
//!     text: text.to_string(),
//!     pos: Some(PosTag { head: head.to_string(), features: Vec::new() }),
//!     lemma: text.to_lowercase(),
//!     ..Default::default()
//! };
//! let doc = AnnotatedDocument {
//!     paragraphs: vec![AnnotatedParagraph {
//!         sentences: vec![AnnotatedSentence {
//!             words: vec![word("De", "LID"), word("kat", "N"), word(".", "LET")],
//!             ..Default::default()
//!         }],
//!     }],
//! };
//!
//! let lex = LexiconStore::default();
//! let tree = build_annotated("demo", &doc, &lex, &AnalysisConfig::default()).unwrap();
//! assert_eq!(tree.totals.counts.words, 2);
//! assert_eq!(document_table(&tree).len(), 1);
//! ```

pub mod annotation;
pub mod classify;
pub mod config;
pub mod domain;
pub mod error;
pub mod lexicon;
pub mod mtld;
pub mod overlap;
pub mod report;
pub mod resolve;
pub mod stats;

pub use classify::{classify_word, LexiconMiss, WordFact};
pub use config::AnalysisConfig;
pub use error::{CoreError, LexiconError, Result};
pub use lexicon::{LexiconKind, LexiconStore};
pub use report::{
    document_table, metric_tree, paragraph_table, sentence_table, word_table, CsvTable, Metric,
    MetricNode,
};
pub use stats::build::build_annotated;
pub use stats::{NodeKind, StatsNode, Totals, TreeBuilder};

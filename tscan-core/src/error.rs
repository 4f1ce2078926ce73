//! Error types for the analysis core
//!
//! Lexicon misses are not errors: they resolve to sentinel categories and
//! are recorded on the word. Only structural precondition violations,
//! malformed lexicon files and invalid configuration end up here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading lexicon files
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The lexicon file could not be opened or read
    #[error("problem opening {path}: {source}")]
    Open {
        /// Path of the lexicon file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line did not have the expected shape
    #[error("{lexicon}, line {line}: expected {expected}, got '{content}'")]
    MalformedLine {
        /// Name of the lexicon being read
        lexicon: String,
        /// One-based line number
        line: usize,
        /// Description of the accepted shapes
        expected: &'static str,
        /// The offending line
        content: String,
    },

    /// A numeric field could not be parsed
    #[error("{lexicon}, line {line}: invalid number '{value}'")]
    InvalidNumber {
        /// Name of the lexicon being read
        lexicon: String,
        /// One-based line number
        line: usize,
        /// The field that failed to parse
        value: String,
    },

    /// Reading the stream failed part-way
    #[error("{lexicon}: read error: {source}")]
    Read {
        /// Name of the lexicon being read
        lexicon: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by classification and aggregation
#[derive(Error, Debug)]
pub enum CoreError {
    /// A word lacks annotation that classification cannot do without
    #[error("word {index} ('{text}') doesn't have POS tag info")]
    MissingPos {
        /// Position of the word in its sentence
        index: usize,
        /// Surface text of the word
        text: String,
    },

    /// The external parse does not line up with the sentence
    #[error("parse has {parsed} words but the sentence has {words}")]
    ParseMismatch {
        /// Number of words in the parse reply
        parsed: usize,
        /// Number of words in the sentence
        words: usize,
    },

    /// Configuration value out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Lexicon loading failed
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pos_display() {
        let err = CoreError::MissingPos {
            index: 3,
            text: "fiets".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "word 3 ('fiets') doesn't have POS tag info"
        );
    }

    #[test]
    fn test_malformed_line_display() {
        let err = LexiconError::MalformedLine {
            lexicon: "verbs".to_string(),
            line: 12,
            expected: "3 tab separated fields",
            content: "lopen".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "verbs, line 12: expected 3 tab separated fields, got 'lopen'"
        );
    }

    #[test]
    fn test_lexicon_error_converts() {
        let err: CoreError = LexiconError::InvalidNumber {
            lexicon: "freq".to_string(),
            line: 1,
            value: "x".to_string(),
        }
        .into();
        assert!(matches!(err, CoreError::Lexicon(_)));
        assert!(err.to_string().contains("invalid number 'x'"));
    }
}

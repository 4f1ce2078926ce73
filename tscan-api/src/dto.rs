//! Data Transfer Objects for API

use std::io::{self, Write};
use tscan_core::{CsvTable, LexiconMiss, MetricNode};

/// Header of the problem log
pub const PROBLEMS_HEADER: &str = "missing,word,lemma,voll_lemma";

/// A word whose semantic class was not found in the lexicons
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    /// Lexicon axis that missed: `noun`, `adjective` or `verb`
    pub missing: String,
    /// Lowercase surface word
    pub word: String,
    /// Lemma
    pub lemma: String,
    /// Full lemma of a separable verb, empty otherwise
    pub voll_lemma: String,
}

impl From<&LexiconMiss> for Problem {
    fn from(miss: &LexiconMiss) -> Self {
        Self {
            missing: miss.axis.to_string(),
            word: miss.word.clone(),
            lemma: miss.lemma.clone(),
            voll_lemma: miss.full_lemma.clone().unwrap_or_default(),
        }
    }
}

impl Problem {
    /// One CSV line without a trailing newline
    pub fn to_csv_line(&self) -> String {
        [&self.missing, &self.word, &self.lemma, &self.voll_lemma]
            .iter()
            .map(|field| quote(field))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write the problem log with its header
pub fn write_problems<W: Write>(problems: &[Problem], mut out: W) -> io::Result<()> {
    writeln!(out, "{PROBLEMS_HEADER}")?;
    for problem in problems {
        writeln!(out, "{}", problem.to_csv_line())?;
    }
    out.flush()
}

/// Run statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Paragraphs in the document
    pub paragraphs: usize,
    /// Sentences in the document
    pub sentences: usize,
    /// Words in the document, punctuation excluded
    pub words: u32,
    /// `-1` without parser, otherwise the number of failed parses
    pub parse_status: i64,
    /// Execution mode used for the service calls
    pub mode_used: String,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Everything T-scan reports about one document
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Document name used in the `Inputfile` column
    pub name: String,
    /// One row for the document
    pub document: CsvTable,
    /// One row per paragraph
    pub paragraphs: CsvTable,
    /// One row per sentence
    pub sentences: CsvTable,
    /// One row per word
    pub words: CsvTable,
    /// Metric tree rooted at the document
    pub metrics: MetricNode,
    /// Lexicon misses
    pub problems: Vec<Problem>,
    /// Run statistics
    pub metadata: Metadata,
}

impl Report {
    /// The metric tree as pretty JSON
    #[cfg(feature = "serde")]
    pub fn metrics_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(&self.metrics)?)
    }

    /// The four structural tables with their file suffixes
    pub fn tables(&self) -> [(&'static str, &CsvTable); 4] {
        [
            ("document", &self.document),
            ("paragraphs", &self.paragraphs),
            ("sentences", &self.sentences),
            ("words", &self.words),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_from_miss() {
        let miss = LexiconMiss {
            axis: "verb",
            word: "belt".to_string(),
            lemma: "bellen".to_string(),
            full_lemma: Some("opbellen".to_string()),
        };
        let problem = Problem::from(&miss);
        assert_eq!(problem.to_csv_line(), "verb,belt,bellen,opbellen");
    }

    #[test]
    fn test_problem_fields_are_quoted() {
        let problem = Problem {
            missing: "noun".to_string(),
            word: "a,b".to_string(),
            lemma: "\"x\"".to_string(),
            voll_lemma: String::new(),
        };
        assert_eq!(problem.to_csv_line(), "noun,\"a,b\",\"\"\"x\"\"\",");
    }

    #[test]
    fn test_write_problems() {
        let mut out = Vec::new();
        write_problems(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "missing,word,lemma,voll_lemma\n");
    }
}

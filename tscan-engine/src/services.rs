//! External syntax parser and language model
//!
//! Both services sit behind traits so the pipeline does not care whether a
//! reply was computed on the fly or stored with the input. The embedded
//! implementations read the replies stored on each sentence.

use tracing::warn;
use tscan_core::annotation::{AnnotatedSentence, LmScores, ParseOutcome};

/// Syntax parser
pub trait SyntaxParser: Send + Sync {
    /// Parse one sentence
    fn parse(&self, sentence: &AnnotatedSentence) -> ParseOutcome;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Language model
pub trait LanguageModel: Send + Sync {
    /// Score one sentence; `None` when the model gave no reply
    fn score(&self, sentence: &AnnotatedSentence) -> Option<LmScores>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Reads the parse stored on the sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedParser;

impl SyntaxParser for EmbeddedParser {
    fn parse(&self, sentence: &AnnotatedSentence) -> ParseOutcome {
        match &sentence.parse {
            Some(parse) => ParseOutcome::Parsed(parse.clone()),
            None => {
                warn!(sentence = %sentence.text(), "no stored parse");
                ParseOutcome::Failed("no stored parse".to_string())
            }
        }
    }

    fn name(&self) -> &'static str {
        "embedded"
    }
}

/// Reads the language model scores stored on the sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLanguageModel;

impl LanguageModel for EmbeddedLanguageModel {
    fn score(&self, sentence: &AnnotatedSentence) -> Option<LmScores> {
        if sentence.lm.is_none() {
            warn!(sentence = %sentence.text(), "no stored language model scores");
        }
        sentence.lm.clone()
    }

    fn name(&self) -> &'static str {
        "embedded"
    }
}

/// Parser that is never asked
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledParser;

impl SyntaxParser for DisabledParser {
    fn parse(&self, _sentence: &AnnotatedSentence) -> ParseOutcome {
        ParseOutcome::NotRequested
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Language model that is never asked
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLanguageModel;

impl LanguageModel for DisabledLanguageModel {
    fn score(&self, _sentence: &AnnotatedSentence) -> Option<LmScores> {
        None
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tscan_core::annotation::SentenceParse;

    #[test]
    fn test_embedded_parser_reads_stored_parse() {
        let mut sentence = AnnotatedSentence::default();
        assert!(matches!(EmbeddedParser.parse(&sentence), ParseOutcome::Failed(_)));

        sentence.parse = Some(SentenceParse {
            d_level: Some(2),
            ..Default::default()
        });
        let outcome = EmbeddedParser.parse(&sentence);
        assert_eq!(outcome.parse().and_then(|p| p.d_level), Some(2));
    }

    #[test]
    fn test_disabled_services() {
        let sentence = AnnotatedSentence {
            lm: Some(LmScores::default()),
            ..Default::default()
        };
        assert_eq!(DisabledParser.parse(&sentence), ParseOutcome::NotRequested);
        assert!(DisabledLanguageModel.score(&sentence).is_none());
        assert!(EmbeddedLanguageModel.score(&sentence).is_some());
    }
}

//! Annotated input model
//!
//! Tokenisation, tagging, lemmatisation and morphological analysis happen
//! upstream. This module only describes what those annotators hand over,
//! plus the optional replies of the syntax parser and the language model.

use crate::domain::{DistKind, VerbForm};
use serde::{Deserialize, Serialize};

/// Log-probability sentinel used by the language model for "no value"
pub const LM_NO_VALUE: f64 = -99.0;

/// A whole annotated document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    /// Paragraphs in document order
    #[serde(default)]
    pub paragraphs: Vec<AnnotatedParagraph>,
}

impl AnnotatedDocument {
    /// Total number of sentences
    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.sentences.len()).sum()
    }
}

/// One paragraph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedParagraph {
    /// Sentences in document order
    #[serde(default)]
    pub sentences: Vec<AnnotatedSentence>,
}

/// One sentence with its words and optional service replies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedSentence {
    /// Words in sentence order
    pub words: Vec<AnnotatedWord>,
    /// Shallow-parse chunks
    #[serde(default)]
    pub chunks: Vec<Chunk>,
    /// Pre-computed syntax parser reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse: Option<SentenceParse>,
    /// Pre-computed language model reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lm: Option<LmScores>,
}

impl AnnotatedSentence {
    /// The tokenised sentence, words joined by single spaces
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Part-of-speech annotation: CGN head plus features
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTag {
    /// Head such as `N`, `WW` or `VNW`
    pub head: String,
    /// Features such as `soort`, `ev`, `pv`, `tgw`
    #[serde(default)]
    pub features: Vec<String>,
}

impl PosTag {
    /// True when the feature list contains `feature`
    pub fn has(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// One annotated word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedWord {
    /// Surface text
    pub text: String,
    /// POS annotation; required for every word
    #[serde(default)]
    pub pos: Option<PosTag>,
    /// Lemma
    #[serde(default)]
    pub lemma: String,
    /// Alternative morpheme segmentations
    #[serde(default)]
    pub morphemes: Vec<Vec<String>>,
    /// Compound analyses reported by the morphological analyser
    #[serde(default)]
    pub compounds: Vec<String>,
    /// IOB named-entity tag such as `B-PER`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ner: Option<String>,
}

/// A shallow-parse chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk class, e.g. `NP`
    pub class: String,
    /// Index of the first word
    pub start: usize,
    /// Number of words
    pub len: usize,
}

/// Parser information about one word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordParse {
    /// Role in the verb cluster
    pub verb_form: VerbForm,
    /// Full lemma of a separable verb
    pub full_lemma: Option<String>,
    /// Head of an imperative clause
    pub imperative: bool,
    /// Nominalisation
    pub nominal: bool,
    /// Sits in a modifier position
    pub modifier: bool,
    /// Head-dependent distances this word is the head of
    pub distances: Vec<(DistKind, u32)>,
}

/// Parser reply for one sentence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceParse {
    /// Per-word information, aligned with the sentence words
    pub words: Vec<WordParse>,
    /// Syntactic complexity level
    pub d_level: Option<u32>,
    /// Main clauses
    pub smain: u32,
    /// Subordinate clauses
    pub ssub: u32,
    /// Verb-first clauses
    pub sv1: u32,
    /// Conjoined main clauses
    pub smain_cnj: u32,
    /// Conjoined subordinate clauses
    pub ssub_cnj: u32,
    /// Conjoined verb-first clauses
    pub sv1_cnj: u32,
    /// Finite clauses in total
    pub clause: u32,
    /// Relative clauses
    pub betr: u32,
    /// Adverbial clauses
    pub bijw: u32,
    /// Complement clauses
    pub compl: u32,
    /// Multiple finite embeddings
    pub mv_fin_inbed: u32,
    /// Infinitival complements
    pub infin_compl: u32,
    /// Multiple embeddings
    pub mv_inbed: u32,
    /// Loose relative clauses
    pub los_betr: u32,
    /// Loose adverbial clauses
    pub los_bijw: u32,
    /// Verb-cluster modifiers
    pub vc_mod: u32,
    /// Verb-cluster modifiers of a single general adverb
    pub vc_mod_single: u32,
    /// Adjectival NP modifiers
    pub adj_np_mod: u32,
    /// NP modifiers
    pub np_mod: u32,
}

/// Language model reply for one sentence; `-99` means "no value"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LmScores {
    /// log10 probability per word
    pub word_logprobs: Vec<f64>,
    /// Average log10 probability of the sentence
    pub avg_prob10: f64,
    /// Entropy
    pub entropy: f64,
    /// Perplexity
    pub perplexity: f64,
}

fn lm_value(value: f64) -> Option<f64> {
    (value != LM_NO_VALUE && value.is_finite()).then_some(value)
}

impl LmScores {
    /// log10 probability of word `index`
    pub fn word_logprob(&self, index: usize) -> Option<f64> {
        self.word_logprobs.get(index).copied().and_then(lm_value)
    }

    /// Sentence average log10 probability
    pub fn avg_prob(&self) -> Option<f64> {
        lm_value(self.avg_prob10)
    }

    /// Sentence entropy
    pub fn entropy(&self) -> Option<f64> {
        lm_value(self.entropy)
    }

    /// Sentence perplexity
    pub fn perplexity(&self) -> Option<f64> {
        lm_value(self.perplexity)
    }
}

/// Result of asking the syntax parser about a sentence
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// No parser configured
    NotRequested,
    /// The parser was asked and failed
    Failed(String),
    /// A usable parse
    Parsed(SentenceParse),
}

impl ParseOutcome {
    /// The parse, when there is one
    pub fn parse(&self) -> Option<&SentenceParse> {
        match self {
            ParseOutcome::Parsed(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_word_deserializes() {
        let word: AnnotatedWord =
            serde_json::from_str(r#"{"text":"fiets","pos":{"head":"N","features":["soort","ev"]},"lemma":"fiets"}"#)
                .unwrap();
        assert_eq!(word.text, "fiets");
        assert!(word.pos.as_ref().unwrap().has("soort"));
        assert!(word.morphemes.is_empty());
        assert!(word.ner.is_none());
    }

    #[test]
    fn test_lm_sentinel() {
        let lm = LmScores {
            word_logprobs: vec![-2.5, -99.0],
            avg_prob10: -99.0,
            entropy: 4.0,
            perplexity: 16.0,
        };
        assert_eq!(lm.word_logprob(0), Some(-2.5));
        assert_eq!(lm.word_logprob(1), None);
        assert_eq!(lm.word_logprob(7), None);
        assert_eq!(lm.avg_prob(), None);
        assert_eq!(lm.entropy(), Some(4.0));
    }

    #[test]
    fn test_parse_defaults_and_distances() {
        let parse: SentenceParse = serde_json::from_str(
            r#"{"words":[{"verb_form":"head","distances":[["sub_verb",2]]}],"clause":1,"d_level":3}"#,
        )
        .unwrap();
        assert_eq!(parse.words[0].verb_form, VerbForm::Head);
        assert_eq!(parse.words[0].distances, vec![(DistKind::SubVerb, 2)]);
        assert_eq!(parse.d_level, Some(3));
        assert_eq!(parse.smain, 0);
    }

    #[test]
    fn test_sentence_text() {
        let sentence = AnnotatedSentence {
            words: ["Hij", "fietst", "."]
                .iter()
                .map(|t| AnnotatedWord {
                    text: t.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        };
        assert_eq!(sentence.text(), "Hij fietst .");
    }
}

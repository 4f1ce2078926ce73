//! Lexicon Store
//!
//! Immutable lookup tables loaded once at startup. All lookups are pure and
//! return a "not found" sentinel instead of failing; after
//! [`LexiconBuilder::build`] the store is read-only and can be shared
//! between threads without synchronisation.

pub mod loader;

use crate::domain::{Adverb, Afk, Cgn, Conn, General, Intensify, Position, SemType, Situation, TopTier, WordProp};
use crate::error::LexiconError;
use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::path::Path;

/// Compound decomposition of a noun
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    /// Head morpheme
    pub head: String,
    /// Satellite as written in the compound
    pub satellite: String,
    /// Satellite without linking morphemes
    pub satellite_clean: String,
    /// Number of parts
    pub parts: u32,
}

/// A noun lexicon entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounEntry {
    /// Semantic class
    pub sem: SemType,
    /// Decomposition, for compounds
    pub compound: Option<Compound>,
}

/// A frequency lexicon row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreqEntry {
    /// Absolute corpus count
    pub count: u64,
    /// Relative frequency (percentile for the staphorst list)
    pub freq: f64,
}

/// Laplace-smoothed log10 frequency per billion words
pub fn freq_log(count: u64, total: u64) -> f64 {
    (((count + 1) as f64 / total as f64) * 1e9).log10()
}

/// Frequency table with its corpus total
#[derive(Debug, Clone, Default)]
pub struct FreqTable {
    entries: HashMap<String, FreqEntry>,
    total: u64,
}

impl FreqTable {
    /// Add a row; counts of keys that collide after case folding are summed
    pub fn insert(&mut self, key: String, entry: FreqEntry) {
        self.total += entry.count;
        self.entries
            .entry(key)
            .and_modify(|e| e.count += entry.count)
            .or_insert(entry);
    }

    /// Row for a key
    pub fn get(&self, key: &str) -> Option<&FreqEntry> {
        self.entries.get(key)
    }

    /// Count for a key, zero when absent
    pub fn count(&self, key: &str) -> u64 {
        self.get(key).map_or(0, |e| e.count)
    }

    /// Log frequency of a key; absent keys get the smoothed value of a zero
    /// count. Without a loaded table there is no meaningful value.
    pub fn log_freq(&self, key: &str) -> Option<f64> {
        (self.total > 0).then(|| freq_log(self.count(key), self.total))
    }

    /// Sum of all loaded counts
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was loaded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Connector or situation lexicon with POS-restricted single words
/// and untagged multi-word expressions
#[derive(Debug, Clone, Default)]
pub struct ConnectorTable {
    single: HashMap<Cgn, HashSet<String>>,
    multi: HashSet<String>,
}

impl ConnectorTable {
    /// Add a single word under a POS category (`Unass` matches any)
    pub fn insert_single(&mut self, tag: Cgn, word: &str) {
        self.single.entry(tag).or_default().insert(word.to_string());
    }

    /// Add a space-joined multi-word expression
    pub fn insert_multi(&mut self, expression: String) {
        self.multi.insert(expression);
    }

    /// Tag-specific match, then the wildcard category
    pub fn contains_single(&self, tag: Cgn, word: &str) -> bool {
        [tag, Cgn::Unass]
            .iter()
            .any(|t| self.single.get(t).is_some_and(|set| set.contains(word)))
    }

    /// Multi-word match
    pub fn contains_multi(&self, expression: &str) -> bool {
        self.multi.contains(expression)
    }

    /// Number of single-word entries
    pub fn single_len(&self) -> usize {
        self.single.values().map(HashSet::len).sum()
    }

    /// Number of multi-word entries
    pub fn multi_len(&self) -> usize {
        self.multi.len()
    }
}

/// Preposition expressions, one set per length 2, 3 and 4
#[derive(Debug, Clone, Default)]
pub struct PrepExprTable {
    by_len: [HashSet<String>; 3],
}

impl PrepExprTable {
    /// Add an expression; returns false for unsupported lengths
    pub fn insert(&mut self, words: &[String]) -> bool {
        match words.len() {
            n @ 2..=4 => {
                self.by_len[n - 2].insert(words.join(" "));
                true
            }
            _ => false,
        }
    }

    /// Lookup in the table for `len` words
    pub fn contains(&self, len: usize, expression: &str) -> bool {
        (2..=4).contains(&len) && self.by_len[len - 2].contains(expression)
    }

    /// Total number of expressions
    pub fn len(&self) -> usize {
        self.by_len.iter().map(HashSet::len).sum()
    }

    /// True when no expression is loaded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every lexicon file the store knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconKind {
    /// Adjective semantic types
    AdjSemtypes,
    /// Noun semantic types and compounds
    NounSemtypes,
    /// Verb semantic types
    VerbSemtypes,
    /// Intensifiers
    Intensify,
    /// General nouns
    GeneralNouns,
    /// General verbs
    GeneralVerbs,
    /// Adverb classes
    Adverbs,
    /// Staphorst word percentiles
    StaphWordFreq,
    /// Word frequencies
    WordFreq,
    /// Lemma frequencies
    LemmaFreq,
    /// Top-20000 ranks
    TopFreq,
    /// Connectives of one class
    Connectives(Conn),
    /// Situation words of one class
    Situations(Situation),
    /// Preposition expressions
    PrepExpressions,
    /// Abbreviations
    Abbreviations,
}

/// The loaded lexicons
#[derive(Debug, Clone, Default)]
pub struct LexiconStore {
    nouns: HashMap<String, NounEntry>,
    adjectives: HashMap<String, SemType>,
    verbs: HashMap<String, SemType>,
    intensifiers: HashMap<String, Intensify>,
    general_nouns: HashMap<String, General>,
    general_verbs: HashMap<String, General>,
    adverbs: HashMap<String, Adverb>,
    abbreviations: HashMap<String, Afk>,
    word_freq: FreqTable,
    lemma_freq: FreqTable,
    staph_freq: FreqTable,
    top_freq: HashMap<String, TopTier>,
    connectives: HashMap<Conn, ConnectorTable>,
    situations: HashMap<Situation, ConnectorTable>,
    prep_exprs: PrepExprTable,
}

impl LexiconStore {
    /// Start loading lexicons
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Noun entry for a lowercase lemma
    pub fn classify_noun(&self, lemma: &str) -> Option<&NounEntry> {
        self.nouns.get(lemma)
    }

    /// Adjective type by lemma, falling back to the surface word
    pub fn classify_adj(&self, lemma: &str, word: &str) -> SemType {
        self.adjectives
            .get(lemma)
            .or_else(|| self.adjectives.get(word))
            .copied()
            .unwrap_or(SemType::UnfoundAdj)
    }

    /// Verb type, trying in order:
    /// 1. the full lemma of a separable verb,
    /// 2. the adjective lexicon for attributive participles,
    /// 3. the plain lemma.
    pub fn classify_verb(
        &self,
        full_lemma: Option<&str>,
        lemma: &str,
        word: &str,
        position: Position,
        prop: WordProp,
    ) -> SemType {
        if let Some(sem) = full_lemma.and_then(|full| self.verbs.get(full)) {
            return *sem;
        }
        if position == Position::Prenominal
            && matches!(prop, WordProp::PastParticiple | WordProp::PresentParticiple)
        {
            if let Some(sem) = self.adjectives.get(word) {
                return *sem;
            }
        }
        self.verbs.get(lemma).copied().unwrap_or(SemType::UnfoundVerb)
    }

    /// Intensifier class of a lowercase lemma or expression
    pub fn intensify(&self, key: &str) -> Intensify {
        self.intensifiers.get(key).copied().unwrap_or(Intensify::None)
    }

    /// True when the expression is a listed intensifier
    pub fn is_intensifier(&self, key: &str) -> bool {
        self.intensifiers.contains_key(key)
    }

    /// General-noun class of a lowercase lemma
    pub fn general_noun(&self, lemma: &str) -> General {
        self.general_nouns.get(lemma).copied().unwrap_or(General::None)
    }

    /// General-verb class of a lowercase lemma
    pub fn general_verb(&self, lemma: &str) -> General {
        self.general_verbs.get(lemma).copied().unwrap_or(General::None)
    }

    /// Adverb class of a lowercase word
    pub fn adverb(&self, word: &str) -> Adverb {
        self.adverbs.get(word).copied().unwrap_or(Adverb::None)
    }

    /// Abbreviation domain of a surface form or expression (case sensitive)
    pub fn abbreviation(&self, text: &str) -> Afk {
        self.abbreviations.get(text).copied().unwrap_or(Afk::None)
    }

    /// Word count and log frequency
    pub fn frequency(&self, word: &str) -> (u64, Option<f64>) {
        (self.word_freq.count(word), self.word_freq.log_freq(word))
    }

    /// Log frequency of a lemma, trying the full lemma first
    pub fn lemma_frequency(&self, full_lemma: Option<&str>, lemma: &str) -> Option<f64> {
        let key = full_lemma
            .filter(|full| self.lemma_freq.get(full).is_some())
            .unwrap_or(lemma);
        self.lemma_freq.log_freq(key)
    }

    /// Staphorst percentile of a word
    pub fn staph_percentile(&self, word: &str) -> Option<f64> {
        self.staph_freq.get(word).map(|e| e.freq)
    }

    /// Top-frequency tier of a lowercase word
    pub fn top_tier(&self, word: &str) -> TopTier {
        self.top_freq.get(word).copied().unwrap_or(TopTier::NotFound)
    }

    /// Single-word connective class; only conjunctions, prepositions and
    /// adverbs can be connectives
    pub fn connective(&self, tag: Cgn, word: &str) -> Conn {
        if !matches!(tag, Cgn::Vg | Cgn::Vz | Cgn::Bw) {
            return Conn::None;
        }
        Conn::CLASSES
            .into_iter()
            .find(|c| {
                self.connectives
                    .get(c)
                    .is_some_and(|t| t.contains_single(tag, word))
            })
            .unwrap_or(Conn::None)
    }

    /// Multi-word connective class
    pub fn multi_connective(&self, expression: &str) -> Conn {
        Conn::CLASSES
            .into_iter()
            .find(|c| {
                self.connectives
                    .get(c)
                    .is_some_and(|t| t.contains_multi(expression))
            })
            .unwrap_or(Conn::None)
    }

    /// Single-word situation class of a lemma
    pub fn situation(&self, tag: Cgn, lemma: &str) -> Situation {
        Situation::CLASSES
            .into_iter()
            .find(|s| {
                self.situations
                    .get(s)
                    .is_some_and(|t| t.contains_single(tag, lemma))
            })
            .unwrap_or(Situation::None)
    }

    /// Multi-word situation class of a lemma sequence
    pub fn multi_situation(&self, expression: &str) -> Situation {
        Situation::MULTI_CLASSES
            .into_iter()
            .find(|s| {
                self.situations
                    .get(s)
                    .is_some_and(|t| t.contains_multi(expression))
            })
            .unwrap_or(Situation::None)
    }

    /// Preposition expression lookup for a given length
    pub fn is_prep_expression(&self, len: usize, expression: &str) -> bool {
        self.prep_exprs.contains(len, expression)
    }

    /// Corpus totals of the word and lemma frequency tables
    pub fn totals(&self) -> (u64, u64) {
        (self.word_freq.total(), self.lemma_freq.total())
    }

    /// Entry counts per lexicon, for diagnostics
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let conn: usize = self
            .connectives
            .values()
            .map(|t| t.single_len() + t.multi_len())
            .sum();
        let sits: usize = self
            .situations
            .values()
            .map(|t| t.single_len() + t.multi_len())
            .sum();
        vec![
            ("nouns", self.nouns.len()),
            ("adjectives", self.adjectives.len()),
            ("verbs", self.verbs.len()),
            ("intensifiers", self.intensifiers.len()),
            ("general nouns", self.general_nouns.len()),
            ("general verbs", self.general_verbs.len()),
            ("adverbs", self.adverbs.len()),
            ("abbreviations", self.abbreviations.len()),
            ("word frequencies", self.word_freq.len()),
            ("lemma frequencies", self.lemma_freq.len()),
            ("staphorst frequencies", self.staph_freq.len()),
            ("top frequencies", self.top_freq.len()),
            ("connectives", conn),
            ("situations", sits),
            ("preposition expressions", self.prep_exprs.len()),
        ]
    }
}

/// Loads lexicons into a [`LexiconStore`]
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    store: LexiconStore,
    frequency_clip: f64,
}

impl LexiconBuilder {
    /// Relative-frequency clip applied to the frequency lexicons
    pub fn frequency_clip(mut self, clip: f64) -> Self {
        self.frequency_clip = clip;
        self
    }

    /// Read one lexicon file
    pub fn load(self, kind: LexiconKind, path: &Path) -> Result<Self, LexiconError> {
        let reader = loader::open(path)?;
        let name = path.display().to_string();
        self.read(kind, &name, reader)
    }

    /// Read one lexicon from any buffered reader
    pub fn read<R: BufRead>(
        mut self,
        kind: LexiconKind,
        name: &str,
        reader: R,
    ) -> Result<Self, LexiconError> {
        let store = &mut self.store;
        match kind {
            LexiconKind::AdjSemtypes => store.adjectives = loader::read_adjectives(name, reader)?,
            LexiconKind::NounSemtypes => store.nouns = loader::read_nouns(name, reader)?,
            LexiconKind::VerbSemtypes => store.verbs = loader::read_verbs(name, reader)?,
            LexiconKind::Intensify => store.intensifiers = loader::read_intensifiers(name, reader)?,
            LexiconKind::GeneralNouns => store.general_nouns = loader::read_general(name, reader)?,
            LexiconKind::GeneralVerbs => store.general_verbs = loader::read_general(name, reader)?,
            LexiconKind::Adverbs => store.adverbs = loader::read_adverbs(name, reader)?,
            LexiconKind::StaphWordFreq => {
                // percentiles, never clipped
                store.staph_freq = loader::read_frequencies(name, reader, 0.0)?
            }
            LexiconKind::WordFreq => {
                store.word_freq = loader::read_frequencies(name, reader, self.frequency_clip)?
            }
            LexiconKind::LemmaFreq => {
                store.lemma_freq = loader::read_frequencies(name, reader, self.frequency_clip)?
            }
            LexiconKind::TopFreq => store.top_freq = loader::read_top_frequencies(name, reader)?,
            LexiconKind::Connectives(conn) => {
                store.connectives.insert(conn, loader::read_connectors(name, reader)?);
            }
            LexiconKind::Situations(sit) => {
                store.situations.insert(sit, loader::read_connectors(name, reader)?);
            }
            LexiconKind::PrepExpressions => {
                store.prep_exprs = loader::read_prep_expressions(name, reader)?
            }
            LexiconKind::Abbreviations => {
                store.abbreviations = loader::read_abbreviations(name, reader)?
            }
        }
        Ok(self)
    }

    /// Finish loading
    pub fn build(self) -> LexiconStore {
        self.store
    }
}

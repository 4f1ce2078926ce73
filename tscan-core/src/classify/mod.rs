//! Word Classifier
//!
//! Turns one annotated word into an immutable [`WordFact`]: morphology
//! counts, the semantic type on the word's axis, the independent
//! classification axes, frequency information and overlap candidacy.

pub mod morphosyntax;

use crate::annotation::{AnnotatedWord, WordParse};
use crate::domain::{
    Adverb, Afk, Cgn, Conn, DistKind, General, Intensify, Ner, Position, SemAxis, SemType,
    Situation, TopTier, VerbForm, WordProp,
};
use crate::error::{CoreError, Result};
use crate::lexicon::LexiconStore;
use morphosyntax::CgnProps;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

/// Staphorst percentile cutoffs
pub const STAPH_CUTOFFS: [f64; 4] = [50.0, 65.0, 77.0, 80.0];

/// A lexicon miss on a semantic axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconMiss {
    /// Axis that was looked up
    pub axis: &'static str,
    /// Surface word
    pub word: String,
    /// Lemma
    pub lemma: String,
    /// Full lemma of a separable verb
    pub full_lemma: Option<String>,
}

/// Compound information of a noun
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundFacts {
    /// Number of parts
    pub parts: u32,
    /// Characters in the head
    pub char_head: u32,
    /// Characters in the satellite
    pub char_sat: u32,
    /// Log frequency of the head
    pub head_freq_log: Option<f64>,
    /// Log frequency of the clean satellite
    pub sat_freq_log: Option<f64>,
    /// Mean of head and satellite log frequency
    pub head_sat_freq_log: Option<f64>,
    /// Frequency tier of the head
    pub head_tier: TopTier,
    /// Frequency tier of the satellite
    pub sat_tier: TopTier,
}

/// Everything known about a single word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordFact {
    /// Surface text
    pub text: String,
    /// Lowercase surface text
    pub l_word: String,
    /// POS head
    pub tag: Cgn,
    /// Lowercase lemma
    pub lemma: String,
    /// Full lemma of a separable verb
    pub full_lemma: Option<String>,
    /// Most specific CGN property
    pub prop: WordProp,
    /// Syntactic position
    pub position: Position,
    /// Archaic case form
    pub archaic: bool,
    /// Named-entity class
    pub ner: Ner,
    /// Verb cluster role
    pub verb_form: VerbForm,
    /// Morphemes of the longest reading
    pub morphemes: Vec<String>,
    /// Compound analysis from the morphological analyser
    pub compound_label: Option<String>,
    /// Characters
    pub char_cnt: u32,
    /// Morphemes
    pub morph_cnt: u32,
    /// Content word
    pub content: bool,
    /// Proposition negation
    pub prop_neg: bool,
    /// Morphological negation
    pub morph_neg: bool,
    /// Personal reference
    pub pers_ref: bool,
    /// Pronominal reference
    pub pron_ref: bool,
    /// Head of an imperative
    pub imperative: bool,
    /// Nominalisation
    pub nominal: bool,
    /// Semantic type
    pub sem: SemType,
    /// Compound decomposition of a noun
    pub compound: Option<CompoundFacts>,
    /// Connective class
    pub conn: Conn,
    /// Part of a multi-word connective
    pub multi_conn: bool,
    /// Multi-word connective expression ending at this word
    pub conn_expression: Option<String>,
    /// Situation class
    pub sit: Situation,
    /// Multi-word situation expression ending at this word
    pub sit_expression: Option<String>,
    /// Intensifier class
    pub intensify: Intensify,
    /// General noun class
    pub general_noun: General,
    /// General verb class
    pub general_verb: General,
    /// Adverb class
    pub adverb: Adverb,
    /// Abbreviation domain
    pub afk: Afk,
    /// Word count in the frequency lexicon
    pub word_freq: u64,
    /// Word log frequency (content words only)
    pub word_freq_log: Option<f64>,
    /// Lemma log frequency (content words only)
    pub lemma_freq_log: Option<f64>,
    /// Top-frequency tier
    pub top_tier: TopTier,
    /// Staphorst flags at 50/65/77/80
    pub staph: [bool; 4],
    /// Takes part in argument overlap
    pub overlap_candidate: bool,
    /// Dependency distances headed by this word
    pub distances: SmallVec<[(DistKind, u32); 4]>,
    /// Language model log10 probability
    pub logprob10: Option<f64>,
    /// Word overlap with the previous sentence
    pub word_overlap: u32,
    /// Lemma overlap with the previous sentence
    pub lemma_overlap: u32,
    /// Lexicon miss on the semantic axis
    pub miss: Option<LexiconMiss>,
}

impl WordFact {
    /// Punctuation token
    pub fn is_punctuation(&self) -> bool {
        self.tag == Cgn::Let
    }

    /// Proper name
    pub fn is_name(&self) -> bool {
        self.prop == WordProp::Name
    }

    /// Characters, not counting names
    pub fn char_cnt_ex_names(&self) -> u32 {
        if self.is_name() {
            0
        } else {
            self.char_cnt
        }
    }

    /// Morphemes, not counting names
    pub fn morph_cnt_ex_names(&self) -> u32 {
        if self.is_name() {
            0
        } else {
            self.morph_cnt
        }
    }
}

fn is_content(tag: Cgn, prop: WordProp, verb_form: VerbForm, parsed: bool) -> bool {
    match tag {
        Cgn::N | Cgn::Adj | Cgn::Bw => true,
        Cgn::Ww => !parsed || verb_form == VerbForm::Head,
        _ => prop == WordProp::Name,
    }
}

fn is_overlap_candidate(tag: Cgn, prop: WordProp, verb_form: VerbForm) -> bool {
    match tag {
        Cgn::N => true,
        Cgn::Vnw => prop != WordProp::Demonstrative,
        Cgn::Ww => verb_form == VerbForm::Head,
        _ => prop == WordProp::Name,
    }
}

/// Classify one word
///
/// `parse` is the parser's information for this word, when the sentence was
/// parsed. A word without POS annotation is a structural error.
pub fn classify_word(
    word: &AnnotatedWord,
    index: usize,
    parse: Option<&WordParse>,
    logprob10: Option<f64>,
    lex: &LexiconStore,
) -> Result<WordFact> {
    let pos = word.pos.as_ref().ok_or_else(|| CoreError::MissingPos {
        index,
        text: word.text.clone(),
    })?;
    let tag = Cgn::from_head(&pos.head);
    let CgnProps {
        prop,
        position,
        archaic,
    } = CgnProps::from_tag(tag, pos);
    let l_word = word.text.to_lowercase();
    let lemma = word.lemma.to_lowercase();
    let ner = word.ner.as_deref().map_or(Ner::None, Ner::from_tag);

    let verb_form = parse.map_or(VerbForm::NoVerb, |p| p.verb_form);
    let full_lemma = if tag == Cgn::Ww {
        parse
            .and_then(|p| p.full_lemma.as_deref())
            .map(str::to_lowercase)
    } else {
        None
    };
    let imperative = parse.is_some_and(|p| p.imperative)
        && matches!(prop, WordProp::PresentFinite | WordProp::PastFinite)
        && verb_form != VerbForm::Passive;
    let nominal = parse.is_some_and(|p| p.nominal);
    let distances = parse
        .map(|p| p.distances.iter().copied().collect())
        .unwrap_or_default();

    let mut fact = WordFact {
        text: word.text.clone(),
        char_cnt: word.text.chars().count() as u32,
        l_word,
        tag,
        lemma,
        full_lemma,
        prop,
        position,
        archaic,
        ner,
        verb_form,
        morphemes: Vec::new(),
        compound_label: word.compounds.first().cloned(),
        morph_cnt: 0,
        content: is_content(tag, prop, verb_form, parse.is_some()),
        prop_neg: false,
        morph_neg: false,
        pers_ref: false,
        pron_ref: false,
        imperative,
        nominal,
        sem: SemType::NoSemType,
        compound: None,
        conn: Conn::None,
        multi_conn: false,
        conn_expression: None,
        sit: Situation::None,
        sit_expression: None,
        intensify: Intensify::None,
        general_noun: General::None,
        general_verb: General::None,
        adverb: Adverb::None,
        afk: Afk::None,
        word_freq: 0,
        word_freq_log: None,
        lemma_freq_log: None,
        top_tier: TopTier::NotFound,
        staph: [false; 4],
        overlap_candidate: false,
        distances,
        logprob10,
        word_overlap: 0,
        lemma_overlap: 0,
        miss: None,
    };
    if tag == Cgn::Let {
        return Ok(fact);
    }

    fact.morphemes = morphosyntax::longest_reading(&word.morphemes);
    fact.morph_cnt = fact.morphemes.len() as u32;
    fact.prop_neg = morphosyntax::is_prop_neg(&fact.l_word);
    fact.morph_neg = morphosyntax::is_morph_neg(&fact.morphemes);
    fact.conn = lex.connective(tag, &fact.l_word);
    fact.sit = lex.situation(tag, &fact.lemma);

    resolve_semantics(&mut fact, lex);

    fact.pers_ref = matches!(prop, WordProp::Pron1 | WordProp::Pron2)
        || ner == Ner::Person
        || fact.sem == SemType::HumanNoun;
    fact.pron_ref = prop == WordProp::Pron3 || (tag == Cgn::Vnw && prop == WordProp::Demonstrative);

    fact.intensify = match lex.intensify(&fact.lemma) {
        Intensify::Bvbw if !parse.is_some_and(|p| p.modifier) => Intensify::None,
        other => other,
    };
    if tag == Cgn::N {
        fact.general_noun = lex.general_noun(&fact.lemma);
    }
    if tag == Cgn::Ww {
        fact.general_verb = lex.general_verb(&fact.lemma);
    }
    if tag == Cgn::Bw {
        fact.adverb = lex.adverb(&fact.l_word);
    }
    if matches!(tag, Cgn::N | Cgn::Spec) {
        fact.afk = lex.abbreviation(&fact.text);
    }

    fact.top_tier = lex.top_tier(&fact.l_word);
    if let Some(percentile) = lex.staph_percentile(&fact.l_word) {
        fact.staph = STAPH_CUTOFFS.map(|cutoff| percentile <= cutoff);
    }
    if fact.content {
        let (count, log) = lex.frequency(&fact.l_word);
        fact.word_freq = count;
        fact.word_freq_log = log;
        fact.lemma_freq_log = lex.lemma_frequency(fact.full_lemma.as_deref(), &fact.lemma);
    }
    fact.overlap_candidate = is_overlap_candidate(tag, prop, verb_form);
    Ok(fact)
}

fn resolve_semantics(fact: &mut WordFact, lex: &LexiconStore) {
    let axis = match fact.tag {
        Cgn::N => SemAxis::Noun,
        _ if fact.is_name() => SemAxis::Noun,
        Cgn::Adj => SemAxis::Adjective,
        Cgn::Ww => SemAxis::Verb,
        _ => SemAxis::None,
    };
    fact.sem = match axis {
        SemAxis::Noun => match lex.classify_noun(&fact.lemma) {
            Some(entry) => {
                fact.compound = entry
                    .compound
                    .as_ref()
                    .filter(|_| fact.tag == Cgn::N)
                    .map(|c| {
                        let head_freq_log = lex.frequency(&c.head).1;
                        let sat_freq_log = lex.frequency(&c.satellite_clean).1;
                        CompoundFacts {
                            parts: c.parts,
                            char_head: c.head.chars().count() as u32,
                            char_sat: c.satellite_clean.chars().count() as u32,
                            head_freq_log,
                            sat_freq_log,
                            head_sat_freq_log: head_freq_log
                                .zip(sat_freq_log)
                                .map(|(h, s)| (h + s) / 2.0),
                            head_tier: lex.top_tier(&c.head),
                            sat_tier: lex.top_tier(&c.satellite_clean),
                        }
                    });
                entry.sem
            }
            None => SemType::UnfoundNoun,
        },
        SemAxis::Adjective => lex.classify_adj(&fact.lemma, &fact.l_word),
        SemAxis::Verb => lex.classify_verb(
            fact.full_lemma.as_deref(),
            &fact.lemma,
            &fact.l_word,
            fact.position,
            fact.prop,
        ),
        SemAxis::None => SemType::NoSemType,
    };
    // names still count as uncovered nouns but stay out of the problem log
    if fact.sem.is_unfound() && !fact.is_name() {
        let label = axis.as_str();
        debug!(
            axis = label,
            word = %fact.l_word,
            lemma = %fact.lemma,
            "lexicon miss"
        );
        fact.miss = Some(LexiconMiss {
            axis: label,
            word: fact.l_word.clone(),
            lemma: fact.lemma.clone(),
            full_lemma: fact.full_lemma.clone(),
        });
    }
}

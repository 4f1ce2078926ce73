//! Mergeable totals of a statistics node

use super::tally::{additive_struct, Additive, Tally};
use crate::annotation::{Chunk, LmScores, SentenceParse};
use crate::classify::WordFact;
use crate::domain::{
    Adverb, Afk, Cgn, Conn, DistKind, GeneralAspects, Intensify, Measure, Monoid, Ner, Position,
    SemType, Situation, TopTier, VerbForm, WordProp,
};
use crate::resolve::MultiWordHits;
use std::collections::BTreeMap;

/// Slot of a participle or infinitive position: prenominal, nominal, free
fn position_slot(position: Position) -> Option<usize> {
    match position {
        Position::Prenominal => Some(0),
        Position::Nominal => Some(1),
        Position::Free => Some(2),
        Position::None => None,
    }
}

/// Slots of a general noun or verb: the total, then one per aspect
fn general_slots(aspects: GeneralAspects) -> [u32; 7] {
    [
        1,
        u32::from(aspects.separate),
        u32::from(aspects.related),
        u32::from(aspects.acting),
        u32::from(aspects.knowledge),
        u32::from(aspects.discussion),
        u32::from(aspects.development),
    ]
}

fn add_tier(slot: &mut [u32; 6], tier: TopTier) {
    for (count, member) in slot.iter_mut().zip(tier.memberships()) {
        *count += u32::from(member);
    }
}

additive_struct! {
    /// Plain counters
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Counts {
        /// Words, punctuation excluded
        pub words: u32,
        /// Sentences with at least one word
        pub sentences: u32,
        /// Paragraphs
        pub paragraphs: u32,
        /// Characters
        pub chars: u32,
        /// Characters outside names
        pub chars_ex_names: u32,
        /// Morphemes
        pub morphs: u32,
        /// Morphemes outside names
        pub morphs_ex_names: u32,
        /// Proper names
        pub names: u32,
        /// Content words
        pub contents: u32,
        /// Staphorst flags at 50/65/77/80
        pub staph: [u32; 4],
        /// Compound nouns
        pub compounds: u32,
        /// Compound nouns of three parts
        pub compounds3: u32,
        /// Characters of nouns
        pub char_noun: u32,
        /// Characters of non-compound nouns
        pub char_non_comp: u32,
        /// Characters of compound nouns
        pub char_comp: u32,
        /// Characters of compound heads
        pub char_head: u32,
        /// Characters of compound satellites
        pub char_sat: u32,
        /// Noun characters, compounds counted by their head
        pub char_noun_corr: u32,
        /// Word characters, compounds counted by their head
        pub char_corr: u32,
        /// Finite present tense verbs
        pub present: u32,
        /// Finite past tense verbs
        pub past: u32,
        /// Subjunctives
        pub subjunctive: u32,
        /// First person pronouns
        pub pron1: u32,
        /// Second person pronouns
        pub pron2: u32,
        /// Third person pronouns
        pub pron3: u32,
        /// Passive auxiliaries
        pub passive: u32,
        /// Modal auxiliaries
        pub modal: u32,
        /// Temporal auxiliaries
        pub time_verb: u32,
        /// Copulas
        pub copula: u32,
        /// Infinitives by position: prenominal, nominal, free
        pub infinitive: [u32; 3],
        /// Past participles by position
        pub past_participle: [u32; 3],
        /// Present participles by position
        pub present_participle: [u32; 3],
        /// Personal references
        pub pers_ref: u32,
        /// Pronominal references
        pub pron_ref: u32,
        /// Archaic case forms
        pub archaic: u32,
        /// Nominalisations
        pub nominal: u32,
        /// Imperatives
        pub imperative: u32,
        /// Questions
        pub questions: u32,
        /// Proposition negations, long negative expressions included
        pub prop_neg: u32,
        /// Morphological negations
        pub morph_neg: u32,
        /// Sentences with more than one negation
        pub multi_neg: u32,
        /// Word overlap with the previous sentence
        pub word_overlap: u32,
        /// Lemma overlap with the previous sentence
        pub lemma_overlap: u32,
        /// Preposition expressions
        pub prep_exprs: u32,
        /// Noun phrase chunks
        pub np: u32,
        /// Words inside noun phrase chunks
        pub np_size: u32,
        /// Indefinite noun phrases
        pub indef_np: u32,
        /// General nouns: total, then sep/rel/act/know/disc/deve
        pub general_noun: [u32; 7],
        /// General verbs: total, then sep/rel/act/know/disc/deve
        pub general_verb: [u32; 7],
        /// General adverbs
        pub general_adverb: u32,
        /// Specific adverbs
        pub specific_adverb: u32,
        /// Named entities of any class
        pub ner_total: u32,
        /// Summed D-level
        pub d_level: u32,
        /// Sentences with a D-level above 4
        pub d_level_gt4: u32,
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
        /// Finite clauses
        pub clauses: u32,
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
        /// Single-word verb-cluster modifiers
        pub vc_mod_single: u32,
        /// Adjectival NP modifiers
        pub adj_np_mod: u32,
        /// NP modifiers
        pub np_mod: u32,
    }
}

impl Counts {
    /// Clause count used as a denominator; never zero
    pub fn corrected_clauses(&self) -> u32 {
        self.clauses.max(1)
    }
}

additive_struct! {
    /// Cumulative top-frequency tier counters per word set
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct TierCounts {
        /// All words
        pub all: [u32; 6],
        /// Content words
        pub content: [u32; 6],
        /// Nouns
        pub noun: [u32; 6],
        /// Non-compound nouns
        pub non_comp: [u32; 6],
        /// Compound nouns
        pub comp: [u32; 6],
        /// Compound heads
        pub head: [u32; 6],
        /// Compound satellites
        pub sat: [u32; 6],
        /// Nouns, compounds by their head
        pub noun_corr: [u32; 6],
        /// Words, compounds by their head
        pub corr: [u32; 6],
    }
}

additive_struct! {
    /// Running sums that may hold no data
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Sums {
        /// Word log frequency of content words
        pub word_freq_log: Measure,
        /// Word log frequency of content words that are not names
        pub word_freq_log_n: Measure,
        /// Lemma log frequency of content words
        pub lemma_freq_log: Measure,
        /// Lemma log frequency of content words that are not names
        pub lemma_freq_log_n: Measure,
        /// Noun log frequency
        pub freq_noun: Measure,
        /// Non-compound noun log frequency
        pub freq_non_comp: Measure,
        /// Compound noun log frequency
        pub freq_comp: Measure,
        /// Compound head log frequency
        pub freq_head: Measure,
        /// Compound satellite log frequency
        pub freq_sat: Measure,
        /// Mean of head and satellite log frequency
        pub freq_head_sat: Measure,
        /// Noun log frequency, compounds by their head
        pub freq_noun_corr: Measure,
        /// Content word log frequency, compounds by their head
        pub freq_corr: Measure,
        /// Sentence average log10 probability
        pub lm_avg_prob: Measure,
        /// Sentence entropy
        pub lm_entropy: Measure,
        /// Sentence perplexity
        pub lm_perplexity: Measure,
        /// Word log10 probabilities
        pub lm_word_logprob: Measure,
    }
}

additive_struct! {
    /// Category tallies
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Tallies {
        /// POS heads
        pub heads: Tally<Cgn>,
        /// Semantic types
        pub sem: Tally<SemType>,
        /// Connective classes
        pub conn: Tally<Conn>,
        /// Situation classes
        pub sit: Tally<Situation>,
        /// Intensifier classes, multi-word spans under `Combi`
        pub intensify: Tally<Intensify>,
        /// Abbreviation domains
        pub afk: Tally<Afk>,
        /// Named-entity classes
        pub ner: Tally<Ner>,
    }
}

additive_struct! {
    /// Occurrence counts of distinct forms, for type-token ratios
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Uniques {
        /// Lowercase words
        pub words: Tally<String>,
        /// Lemmas
        pub lemmas: Tally<String>,
        /// Names
        pub names: Tally<String>,
        /// Content words
        pub contents: Tally<String>,
        /// Connective forms per class
        pub conns: Tally<(Conn, String)>,
        /// Situation forms per class
        pub sits: Tally<(Situation, String)>,
    }
}

/// Whether and how the syntax parser answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// No parser was configured somewhere below this node
    NotRequested,
    /// Parsed, with this many failed sentences
    Parsed {
        /// Failed sentences
        failures: u32,
    },
}

impl Default for ParseStatus {
    fn default() -> Self {
        ParseStatus::Parsed { failures: 0 }
    }
}

impl ParseStatus {
    /// Parse-dependent values are meaningless below this node
    pub fn is_unusable(self) -> bool {
        !matches!(self, ParseStatus::Parsed { failures: 0 })
    }

    /// Value of the `Alpino_status` column
    pub fn code(self) -> i64 {
        match self {
            ParseStatus::NotRequested => -1,
            ParseStatus::Parsed { failures } => i64::from(failures),
        }
    }
}

impl Additive for ParseStatus {
    fn add_from(&mut self, other: &Self) {
        *self = match (*self, *other) {
            (ParseStatus::Parsed { failures: a }, ParseStatus::Parsed { failures: b }) => {
                ParseStatus::Parsed { failures: a + b }
            }
            _ => ParseStatus::NotRequested,
        };
    }
}

additive_struct! {
    /// Everything a node accumulates from its children
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Totals {
        /// Counters
        pub counts: Counts,
        /// Frequency tier counters
        pub tiers: TierCounts,
        /// Optional sums
        pub sums: Sums,
        /// Category tallies
        pub tallies: Tallies,
        /// Distinct forms
        pub uniques: Uniques,
        /// Head-dependent distances per relation kind
        pub distances: BTreeMap<DistKind, Vec<u32>>,
        /// Parser status
        pub parse: ParseStatus,
    }
}

impl Monoid for Totals {
    fn identity() -> Self {
        Totals::default()
    }

    fn absorb(&mut self, other: &Self) {
        self.add_from(other);
    }
}

/// Form under which a connective is tracked for diversity
pub fn conn_form(w: &WordFact) -> &str {
    w.conn_expression.as_deref().unwrap_or(&w.l_word)
}

/// Form under which a situation is tracked for diversity
pub fn sit_form(w: &WordFact) -> &str {
    w.sit_expression.as_deref().unwrap_or(&w.lemma)
}

impl Totals {
    /// Contribution of a single word
    pub fn from_word(w: &WordFact) -> Totals {
        let mut t = Totals::default();
        if w.is_punctuation() {
            t.tallies.heads.add(Cgn::Let);
            return t;
        }
        let c = &mut t.counts;
        c.words = 1;
        c.chars = w.char_cnt;
        c.chars_ex_names = w.char_cnt_ex_names();
        c.morphs = w.morph_cnt;
        c.morphs_ex_names = w.morph_cnt_ex_names();
        c.staph = w.staph.map(u32::from);
        c.pers_ref = u32::from(w.pers_ref);
        c.pron_ref = u32::from(w.pron_ref);
        c.archaic = u32::from(w.archaic);
        c.nominal = u32::from(w.nominal);
        c.imperative = u32::from(w.imperative);
        c.prop_neg = u32::from(w.prop_neg);
        c.morph_neg = u32::from(w.morph_neg);
        c.word_overlap = w.word_overlap;
        c.lemma_overlap = w.lemma_overlap;

        match w.prop {
            WordProp::Name => {
                c.names = 1;
                t.uniques.names.add(w.l_word.clone());
            }
            WordProp::PresentFinite => c.present = 1,
            WordProp::PastFinite => c.past = 1,
            WordProp::Subjunctive => c.subjunctive = 1,
            WordProp::Pron1 => c.pron1 = 1,
            WordProp::Pron2 => c.pron2 = 1,
            WordProp::Pron3 => c.pron3 = 1,
            WordProp::Infinitive => {
                if let Some(slot) = position_slot(w.position) {
                    c.infinitive[slot] = 1;
                }
            }
            WordProp::PastParticiple => {
                if let Some(slot) = position_slot(w.position) {
                    c.past_participle[slot] = 1;
                }
            }
            WordProp::PresentParticiple => {
                if let Some(slot) = position_slot(w.position) {
                    c.present_participle[slot] = 1;
                }
            }
            _ => {}
        }
        match w.verb_form {
            VerbForm::Passive => c.passive = 1,
            VerbForm::Modal => c.modal = 1,
            VerbForm::Time => c.time_verb = 1,
            VerbForm::Copula => c.copula = 1,
            VerbForm::Head | VerbForm::NoVerb => {}
        }
        if let Some(aspects) = w.general_noun.aspects() {
            c.general_noun = general_slots(aspects);
        }
        if let Some(aspects) = w.general_verb.aspects() {
            c.general_verb = general_slots(aspects);
        }
        match w.adverb {
            Adverb::General => c.general_adverb = 1,
            Adverb::Specific => c.specific_adverb = 1,
            Adverb::None => {}
        }
        if w.ner != Ner::None {
            c.ner_total = 1;
            t.tallies.ner.add(w.ner);
        }

        add_tier(&mut t.tiers.all, w.top_tier);
        let word_log = w.word_freq_log.map_or(Measure::NONE, Measure::of);
        let lemma_log = w.lemma_freq_log.map_or(Measure::NONE, Measure::of);
        if w.content {
            c.contents = 1;
            add_tier(&mut t.tiers.content, w.top_tier);
            t.uniques.contents.add(w.l_word.clone());
            t.sums.word_freq_log = word_log;
            t.sums.lemma_freq_log = lemma_log;
            if !w.is_name() {
                t.sums.word_freq_log_n = word_log;
                t.sums.lemma_freq_log_n = lemma_log;
            }
        }

        if w.tag == Cgn::N {
            c.char_noun = w.char_cnt;
            t.sums.freq_noun = word_log;
            add_tier(&mut t.tiers.noun, w.top_tier);
            match &w.compound {
                Some(compound) => {
                    c.compounds = 1;
                    c.compounds3 = u32::from(compound.parts == 3);
                    c.char_comp = w.char_cnt;
                    c.char_head = compound.char_head;
                    c.char_sat = compound.char_sat;
                    c.char_noun_corr = compound.char_head;
                    c.char_corr = compound.char_head;
                    let head_log = Measure::from_option(compound.head_freq_log);
                    t.sums.freq_comp = word_log;
                    t.sums.freq_head = head_log;
                    t.sums.freq_sat = Measure::from_option(compound.sat_freq_log);
                    t.sums.freq_head_sat = Measure::from_option(compound.head_sat_freq_log);
                    t.sums.freq_noun_corr = head_log;
                    t.sums.freq_corr = head_log;
                    add_tier(&mut t.tiers.comp, w.top_tier);
                    add_tier(&mut t.tiers.head, compound.head_tier);
                    add_tier(&mut t.tiers.sat, compound.sat_tier);
                    add_tier(&mut t.tiers.noun_corr, compound.head_tier);
                    add_tier(&mut t.tiers.corr, compound.head_tier);
                }
                None => {
                    c.char_non_comp = w.char_cnt;
                    c.char_noun_corr = w.char_cnt;
                    c.char_corr = w.char_cnt;
                    t.sums.freq_non_comp = word_log;
                    t.sums.freq_noun_corr = word_log;
                    t.sums.freq_corr = word_log;
                    add_tier(&mut t.tiers.non_comp, w.top_tier);
                    add_tier(&mut t.tiers.noun_corr, w.top_tier);
                    add_tier(&mut t.tiers.corr, w.top_tier);
                }
            }
        } else {
            c.char_corr = w.char_cnt;
            if w.content {
                t.sums.freq_corr = word_log;
            }
            add_tier(&mut t.tiers.corr, w.top_tier);
        }

        t.sums.lm_word_logprob = Measure::from_option(w.logprob10);

        let tallies = &mut t.tallies;
        tallies.heads.add(w.tag);
        if w.sem != SemType::NoSemType {
            tallies.sem.add(w.sem);
        }
        if w.conn != Conn::None {
            tallies.conn.add(w.conn);
            t.uniques.conns.add((w.conn, conn_form(w).to_string()));
        }
        if w.sit != Situation::None {
            tallies.sit.add(w.sit);
            t.uniques.sits.add((w.sit, sit_form(w).to_string()));
        }
        if w.intensify != Intensify::None {
            tallies.intensify.add(w.intensify);
        }
        if w.afk != Afk::None {
            tallies.afk.add(w.afk);
        }
        t.uniques.words.add(w.l_word.clone());
        t.uniques.lemmas.add(w.lemma.clone());
        for &(kind, dist) in &w.distances {
            t.distances.entry(kind).or_default().push(dist);
        }
        t
    }

    /// Sentence-level contributions that do not belong to a single word
    pub fn sentence_extras(
        words: &[WordFact],
        chunks: &[Chunk],
        hits: &MultiWordHits,
        parse: Option<&SentenceParse>,
        status: ParseStatus,
        lm: Option<&LmScores>,
    ) -> Totals {
        let mut t = Totals {
            parse: status,
            ..Totals::default()
        };
        let c = &mut t.counts;
        c.questions = u32::from(
            words
                .iter()
                .any(|w| w.lemma.ends_with('?') || w.text.ends_with('?')),
        );
        c.prop_neg = hits.long_negations;
        c.prep_exprs = hits.prep_exprs;
        t.tallies
            .intensify
            .add_n(Intensify::Combi, hits.intensify_tokens);
        for &afk in &hits.afks {
            t.tallies.afk.add(afk);
        }

        for chunk in chunks.iter().filter(|ch| ch.class.eq_ignore_ascii_case("NP")) {
            c.np += 1;
            c.np_size += chunk.len as u32;
            let indefinite = words
                .get(chunk.start)
                .is_some_and(|w| w.tag == Cgn::Lid && w.l_word == "een");
            c.indef_np += u32::from(indefinite);
        }

        if let Some(p) = parse {
            let d_level = p.d_level.unwrap_or(0);
            c.d_level = d_level;
            c.d_level_gt4 = u32::from(d_level > 4);
            c.smain = p.smain;
            c.ssub = p.ssub;
            c.sv1 = p.sv1;
            c.smain_cnj = p.smain_cnj;
            c.ssub_cnj = p.ssub_cnj;
            c.sv1_cnj = p.sv1_cnj;
            c.clauses = p.clause;
            c.betr = p.betr;
            c.bijw = p.bijw;
            c.compl = p.compl;
            c.mv_fin_inbed = p.mv_fin_inbed;
            c.infin_compl = p.infin_compl;
            c.mv_inbed = p.mv_inbed;
            c.los_betr = p.los_betr;
            c.los_bijw = p.los_bijw;
            c.vc_mod = p.vc_mod;
            c.vc_mod_single = p.vc_mod_single;
            c.adj_np_mod = p.adj_np_mod;
            c.np_mod = p.np_mod;
        }

        if let Some(lm) = lm {
            t.sums.lm_avg_prob = Measure::from_option(lm.avg_prob());
            t.sums.lm_entropy = Measure::from_option(lm.entropy());
            t.sums.lm_perplexity = Measure::from_option(lm.perplexity());
        }
        t
    }

    /// Number of words tagged `tag`
    pub fn head(&self, tag: Cgn) -> u32 {
        self.tallies.heads.get(&tag)
    }

    /// Number of words of semantic type `sem`
    pub fn sem(&self, sem: SemType) -> u32 {
        self.tallies.sem.get(&sem)
    }

    /// Number of words whose semantic type matches `pred`
    pub fn sem_where(&self, pred: impl Fn(SemType) -> bool) -> u32 {
        self.tallies.sem.sum_where(|s| pred(*s))
    }

    /// Nouns and names the noun lexicon knew
    pub fn covered_nouns(&self) -> u32 {
        (self.head(Cgn::N) + self.counts.names).saturating_sub(self.sem(SemType::UnfoundNoun))
    }

    /// Adjectives the adjective lexicon knew
    pub fn covered_adjectives(&self) -> u32 {
        self.head(Cgn::Adj)
            .saturating_sub(self.sem(SemType::UnfoundAdj))
    }

    /// Verbs the verb lexicon knew
    pub fn covered_verbs(&self) -> u32 {
        self.head(Cgn::Ww).saturating_sub(self.sem(SemType::UnfoundVerb))
    }

    /// Connectives of class `conn`
    pub fn conn(&self, conn: Conn) -> u32 {
        self.tallies.conn.get(&conn)
    }

    /// Situations of class `sit`
    pub fn sit(&self, sit: Situation) -> u32 {
        self.tallies.sit.get(&sit)
    }

    /// Every intensifier, multi-word spans included
    pub fn intensifiers(&self) -> u32 {
        self.tallies.intensify.total()
    }

    /// Mean over every recorded distance, if any
    pub fn mean_distance(&self) -> Option<f64> {
        let (sum, n) = self
            .distances
            .values()
            .flatten()
            .fold((0u64, 0u32), |(s, n), &d| (s + u64::from(d), n + 1));
        (n > 0).then(|| sum as f64 / f64::from(n))
    }

    /// Largest recorded distance, 0 when there are none
    pub fn max_distance(&self) -> u32 {
        self.distances.values().flatten().copied().max().unwrap_or(0)
    }

    /// Mean distance of one relation kind
    pub fn mean_distance_of(&self, kind: DistKind) -> Option<f64> {
        let values = self.distances.get(&kind)?;
        if values.is_empty() {
            return None;
        }
        let sum: u64 = values.iter().map(|&d| u64::from(d)).sum();
        Some(sum as f64 / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_not_requested_absorbs() {
        let mut s = ParseStatus::Parsed { failures: 2 };
        s.add_from(&ParseStatus::Parsed { failures: 1 });
        assert_eq!(s, ParseStatus::Parsed { failures: 3 });
        s.add_from(&ParseStatus::NotRequested);
        assert_eq!(s, ParseStatus::NotRequested);
        s.add_from(&ParseStatus::Parsed { failures: 0 });
        assert_eq!(s.code(), -1);
        assert!(!ParseStatus::default().is_unusable());
    }

    #[test]
    fn test_clause_floor() {
        let counts = Counts::default();
        assert_eq!(counts.corrected_clauses(), 1);
        let counts = Counts {
            clauses: 3,
            ..Counts::default()
        };
        assert_eq!(counts.corrected_clauses(), 3);
    }

    #[test]
    fn test_tier_counts_are_cumulative() {
        let mut slot = [0u32; 6];
        add_tier(&mut slot, TopTier::Top2000);
        add_tier(&mut slot, TopTier::Top1000);
        add_tier(&mut slot, TopTier::NotFound);
        assert_eq!(slot, [1, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_distances_summary() {
        let mut t = Totals::default();
        t.distances.insert(DistKind::SubVerb, vec![1, 3]);
        t.distances.insert(DistKind::Obj1, vec![5]);
        assert_eq!(t.mean_distance(), Some(3.0));
        assert_eq!(t.max_distance(), 5);
        assert_eq!(t.mean_distance_of(DistKind::SubVerb), Some(2.0));
        assert_eq!(t.mean_distance_of(DistKind::CrdCnj), None);
        assert_eq!(Totals::default().max_distance(), 0);
    }
}

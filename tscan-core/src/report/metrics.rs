//! Metric tree: named values attached to every node
//!
//! Counters are always emitted; optional features and undefined ratios
//! are left out rather than written as zero or false.

use super::format_number;
use crate::classify::WordFact;
use crate::domain::{
    Adverb, Afk, Cgn, Conn, DistKind, General, Intensify, Ner, SemType, Situation, TopTier,
    VerbForm, WordProp,
};
use crate::mtld::ttr;
use crate::stats::{NodeKind, StatsNode, Totals};
use serde::Serialize;

/// One `(class, value)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    /// Metric name
    pub class: String,
    /// Rendered value
    pub value: String,
}

/// Metrics of one node and its children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricNode {
    /// `document`, `paragraph`, `sentence` or `word`
    pub level: &'static str,
    /// Position among its siblings
    pub index: usize,
    /// Metrics in emission order
    pub metrics: Vec<Metric>,
    /// Child nodes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MetricNode>,
}

impl MetricNode {
    /// Look up a metric by name
    pub fn get(&self, class: &str) -> Option<&str> {
        self.metrics
            .iter()
            .find(|m| m.class == class)
            .map(|m| m.value.as_str())
    }
}

#[derive(Default)]
struct Emit(Vec<Metric>);

impl Emit {
    fn text(&mut self, class: impl Into<String>, value: impl Into<String>) {
        self.0.push(Metric {
            class: class.into(),
            value: value.into(),
        });
    }

    fn count(&mut self, class: impl Into<String>, value: u32) {
        self.text(class, value.to_string());
    }

    fn count_if(&mut self, class: impl Into<String>, value: u32) {
        if value > 0 {
            self.count(class, value);
        }
    }

    fn num(&mut self, class: impl Into<String>, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.text(class, format_number(v));
        }
    }

    fn flag(&mut self, class: &str, on: bool) {
        if on {
            self.text(class, "true");
        }
    }
}

const POSITION_NAMES: [&str; 3] = ["bv", "nw", "vrij"];
const GENERAL_NAMES: [&str; 7] = ["all", "sep", "rel", "act", "know", "disc", "deve"];
const STAPH_NAMES: [&str; 4] = ["freq50", "freq65", "freq77", "freq80"];

fn emit_totals(t: &Totals, out: &mut Emit) {
    let c = &t.counts;
    out.count("word_count", c.words);
    out.count("name_count", c.names);
    out.count("content_count", c.contents);
    out.count("character_count", c.chars);
    out.count("character_count_min_names", c.chars_ex_names);
    out.count("morpheme_count", c.morphs);
    out.count("morpheme_count_min_names", c.morphs_ex_names);

    for (i, slot) in POSITION_NAMES.iter().enumerate() {
        out.count(format!("{slot}_vd_count"), c.past_participle[i]);
        out.count(format!("{slot}_od_count"), c.present_participle[i]);
        out.count(format!("{slot}_inf_count"), c.infinitive[i]);
    }
    out.count("present_verb_count", c.present);
    out.count("past_verb_count", c.past);
    out.count("subjonct_count", c.subjunctive);
    out.count("pers_pron_1_count", c.pron1);
    out.count("pers_pron_2_count", c.pron2);
    out.count("pers_pron_3_count", c.pron3);
    out.count("pers_ref_count", c.pers_ref);
    out.count("pron_ref_count", c.pron_ref);
    out.count("archaic_count", c.archaic);
    out.count("prop_neg_count", c.prop_neg);
    out.count("morph_neg_count", c.morph_neg);
    out.count("multiple_neg_count", c.multi_neg);
    out.count("voorzetsel_expression_count", c.prep_exprs);
    out.count("word_overlap_count", c.word_overlap);
    out.count("lemma_overlap_count", c.lemma_overlap);
    out.count("compound_count", c.compounds);
    out.count("compound3_count", c.compounds3);

    for (tag, name) in [
        (Cgn::Adj, "adj"),
        (Cgn::Vg, "vg"),
        (Cgn::Vnw, "vnw"),
        (Cgn::Lid, "lid"),
        (Cgn::Vz, "vz"),
        (Cgn::Bw, "bw"),
        (Cgn::Tw, "tw"),
        (Cgn::N, "noun"),
        (Cgn::Ww, "verb"),
        (Cgn::Tsw, "tsw"),
        (Cgn::Spec, "spec"),
        (Cgn::Let, "let"),
    ] {
        out.count(format!("{name}_count"), t.head(tag));
    }

    for (class, name) in [
        (Ner::Person, "personal_name_count"),
        (Ner::Location, "location_name_count"),
        (Ner::Organization, "organization_name_count"),
        (Ner::Product, "product_name_count"),
        (Ner::Event, "event_name_count"),
        (Ner::Misc, "misc_name_count"),
    ] {
        out.count(name, t.tallies.ner.get(&class));
    }
    for domain in Afk::DOMAINS {
        out.count_if(format!("{}_afk_count", domain.as_str()), t.tallies.afk.get(&domain));
    }

    for (class, name) in [
        (Conn::Temporal, "temporal"),
        (Conn::EnumPhrase, "reeks_wg"),
        (Conn::EnumClause, "reeks_zin"),
        (Conn::Contrastive, "contrast"),
        (Conn::Comparative, "comparatief"),
        (Conn::Causal, "causaal"),
    ] {
        out.count(format!("{name}_connector_count"), t.conn(class));
    }
    for class in Situation::CLASSES {
        out.count(format!("{}_situation_count", class.as_str()), t.sit(class));
    }

    for (flag, name) in c.staph.iter().zip(STAPH_NAMES) {
        out.count(name, *flag);
    }
    for (i, tier) in TopTier::TIERS.iter().enumerate() {
        if let Some(size) = tier.size() {
            out.count(format!("top{size}"), t.tiers.all[i]);
            out.count(format!("top{size}Content"), t.tiers.content[i]);
        }
    }
    let plain_contents = c.contents.saturating_sub(c.names);
    out.num("log_word_freq", t.sums.word_freq_log.mean(c.contents).value());
    out.num("log_word_freq_no_names", t.sums.word_freq_log_n.mean(plain_contents).value());
    out.num("log_lemma_freq", t.sums.lemma_freq_log.mean(c.contents).value());
    out.num("log_lemma_freq_no_names", t.sums.lemma_freq_log_n.mean(plain_contents).value());

    for (sem, n) in t.tallies.sem.iter() {
        if *sem != SemType::NoSemType {
            out.count(format!("{}_count", sem.as_str().replace('-', "_")), n);
        }
    }
    out.count("strict_noun_count", t.sem_where(SemType::is_strict_noun));
    out.count("broad_noun_count", t.sem_where(SemType::is_broad_noun));
    out.count("covered_nouns_count", t.covered_nouns());
    out.count("uncovered_nouns_count", t.sem(SemType::UnfoundNoun));
    out.count("covered_adj_count", t.covered_adjectives());
    out.count("uncovered_adj_count", t.sem(SemType::UnfoundAdj));
    out.count("abstract_ww_count", t.sem_where(SemType::is_abstract_verb));
    out.count("concrete_ww_count", t.sem_where(SemType::is_concrete_verb));
    out.count("undefined_ww_count", t.sem_where(SemType::is_undefined_verb));
    out.count("state_count", t.sem_where(SemType::is_state));
    out.count("action_count", t.sem_where(SemType::is_action));
    out.count("process_count", t.sem_where(SemType::is_process));
    out.count("covered_verb_count", t.covered_verbs());
    out.count("uncovered_verb_count", t.sem(SemType::UnfoundVerb));

    out.count("intens_count", t.intensifiers());
    for (class, n) in t.tallies.intensify.iter() {
        out.count(format!("intens_{}_count", class.as_str()), n);
    }
    for (i, name) in GENERAL_NAMES.iter().enumerate() {
        out.count(format!("general_noun_{name}_count"), c.general_noun[i]);
        out.count(format!("general_verb_{name}_count"), c.general_verb[i]);
    }
    out.count("general_adverb_count", c.general_adverb);
    out.count("specific_adverb_count", c.specific_adverb);

    out.count("np_count", c.np);
    out.count("np_size", c.np_size);
    out.count("indef_np_count", c.indef_np);

    out.count_if("question_count", c.questions);

    out.num("wopr_logprob", t.sums.lm_avg_prob.value());
    out.num("wopr_entropy", t.sums.lm_entropy.value());
    out.num("wopr_perplexity", t.sums.lm_perplexity.value());

    out.text("alpino_status", t.parse.code().to_string());
    if t.parse.is_unusable() {
        return;
    }
    out.count("smain_count", c.smain);
    out.count("ssub_count", c.ssub);
    out.count("sv1_count", c.sv1);
    out.count("smain_cnj_count", c.smain_cnj);
    out.count("ssub_cnj_count", c.ssub_cnj);
    out.count("sv1_cnj_count", c.sv1_cnj);
    out.count("clause_count", c.clauses);
    out.count("corrected_clause_count", c.corrected_clauses());
    out.count("passive_count", c.passive);
    out.count("modal_count", c.modal);
    out.count("time_count", c.time_verb);
    out.count("koppel_count", c.copula);
    out.count("nominal_count", c.nominal);
    out.count_if("imperative_count", c.imperative);
    out.count("vc_modifier_count", c.vc_mod);
    out.count("vc_modifier_single_count", c.vc_mod_single);
    out.count("adj_np_modifier_count", c.adj_np_mod);
    out.count("np_modifier_count", c.np_mod);
    for kind in DistKind::ALL {
        out.num(kind.metric_name(), t.mean_distance_of(kind));
    }
}

fn emit_structure(node: &StatsNode, out: &mut Emit) {
    let t = &node.totals;
    let c = &t.counts;
    emit_totals(t, out);
    if !t.parse.is_unusable() {
        out.num("deplen", node.derived.mean_dep_len);
        if node.derived.mean_dep_len.is_some() {
            out.count("max_deplen", node.derived.max_dep_len);
        }
    }
    out.num("rarity", node.derived.rarity);

    match &node.kind {
        NodeKind::Sentence { .. } => {
            if t.parse.is_unusable() {
                out.text("d_level", "missing");
            } else {
                out.count("d_level", c.d_level);
            }
            out.flag("isPassive", c.passive > 0 && !t.parse.is_unusable());
            out.flag("isQuestion", c.questions > 0);
            out.flag("isImperative", c.imperative > 0 && !t.parse.is_unusable());
        }
        NodeKind::Paragraph | NodeKind::Document { .. } => {
            if !t.parse.is_unusable() {
                out.count("d_level", c.d_level);
                out.count_if("d_level_gt4", c.d_level_gt4);
            }
            out.count("sentence_count", c.sentences);
            if let NodeKind::Document {
                word_overlap,
                lemma_overlap,
                ..
            } = &node.kind
            {
                out.count("paragraph_count", c.paragraphs);
                out.count("doc_word_overlap_count", *word_overlap);
                out.count("doc_lemma_overlap_count", *lemma_overlap);
            }
            emit_diversity(node, out);
        }
        NodeKind::Word(_) => {}
    }
}

fn emit_diversity(node: &StatsNode, out: &mut Emit) {
    let t = &node.totals;
    let c = &t.counts;
    let u = &t.uniques;
    let ratio = |unique: usize, n: u32| ttr(unique, n as usize);
    out.num("word_ttr", ratio(u.words.distinct(), c.words));
    out.num("lemma_ttr", ratio(u.lemmas.distinct(), c.words));
    if c.names > 0 {
        out.num("names_ttr", ratio(u.names.distinct(), c.names));
    }
    out.num("content_word_ttr", ratio(u.contents.distinct(), c.contents));
    for (class, name) in [
        (Situation::Time, "time"),
        (Situation::Space, "space"),
        (Situation::Causal, "cause"),
        (Situation::Emotion, "emotion"),
    ] {
        let distinct = u.sits.distinct_where(|k| k.0 == class);
        out.num(format!("{name}_sit_ttr"), ratio(distinct, t.sit(class)));
    }
    for class in Conn::CLASSES {
        let distinct = u.conns.distinct_where(|k| k.0 == class);
        out.num(format!("{}_conn_ttr", class.as_str()), ratio(distinct, t.conn(class)));
    }

    let Some(d) = &node.derived.diversity else {
        return;
    };
    out.num("word_mtld", Some(d.words));
    out.num("lemma_mtld", Some(d.lemmas));
    out.num("name_mtld", Some(d.names));
    out.num("content_mtld", Some(d.contents));
    for (class, name) in [
        (Situation::Time, "tijd"),
        (Situation::Space, "ruimte"),
        (Situation::Causal, "cause"),
        (Situation::Emotion, "emotion"),
    ] {
        out.num(format!("{name}_sit_mtld"), d.sits.get(&class).copied());
    }
    for class in Conn::CLASSES {
        out.num(format!("{}_conn_mtld", class.as_str()), d.conns.get(&class).copied());
    }
}

fn emit_word(w: &WordFact, out: &mut Emit) {
    out.text("pos", w.tag.as_str());
    if w.is_punctuation() {
        return;
    }
    if w.tag == Cgn::Ww && w.verb_form != VerbForm::NoVerb {
        out.text("wwform", w.verb_form.as_str());
    }
    if let Some(full) = &w.full_lemma {
        out.text("full-lemma", full.as_str());
    }
    if w.prop != WordProp::JustAWord {
        out.text("property", w.prop.as_str());
    }
    if w.sem != SemType::NoSemType {
        out.text("semtype", w.sem.as_str());
    }
    out.flag("pers_ref", w.pers_ref);
    out.flag("pron_ref", w.pron_ref);
    out.flag("archaic", w.archaic);
    out.flag("content_word", w.content);
    out.flag("nominalization", w.nominal);
    out.flag("imperative", w.imperative);
    out.flag("proper_negative", w.prop_neg);
    out.flag("morph_negative", w.morph_neg);
    if w.conn != Conn::None {
        out.text("connective", w.conn.as_str());
    }
    out.flag("multi_connective", w.multi_conn);
    if w.sit != Situation::None {
        out.text("situation", w.sit.as_str());
    }
    if w.intensify != Intensify::None {
        out.text("intensifytype", w.intensify.as_str());
    }
    if w.general_noun != General::None {
        out.text("generalnountype", w.general_noun.label());
    }
    if w.general_verb != General::None {
        out.text("generalverbtype", w.general_verb.label());
    }
    if w.adverb != Adverb::None {
        out.text("adverbtype", w.adverb.as_str());
    }
    if w.afk != Afk::None {
        out.text("afktype", w.afk.as_str());
    }
    if let Some(c) = &w.compound {
        out.count("compound_parts", c.parts);
    }
    for (on, name) in w.staph.iter().zip(["f50", "f65", "f77", "f80"]) {
        out.flag(name, *on);
    }
    if let Some(size) = w.top_tier.size() {
        out.text("top_freq", format!("top{size}"));
    }
    if w.content {
        out.text("word_freq", w.word_freq.to_string());
    }
    out.num("log_word_freq", w.word_freq_log);
    out.num("log_lemma_freq", w.lemma_freq_log);
    out.count_if("word_overlap_count", w.word_overlap);
    out.count_if("lemma_overlap_count", w.lemma_overlap);
    out.num("lprob10", w.logprob10);
}

fn build(node: &StatsNode) -> MetricNode {
    let mut out = Emit::default();
    match node.fact() {
        Some(fact) => emit_word(fact, &mut out),
        None => emit_structure(node, &mut out),
    }
    MetricNode {
        level: node.kind.level(),
        index: node.index,
        metrics: out.0,
        children: node.children.iter().map(build).collect(),
    }
}

/// Metrics for a finished tree
pub fn metric_tree(doc: &StatsNode) -> MetricNode {
    build(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ParseStatus;

    fn sentence() -> StatsNode {
        let mut node = StatsNode::new(0, NodeKind::Sentence { text: "x".into() });
        node.totals.counts.words = 4;
        node.totals.counts.sentences = 1;
        node.totals.counts.passive = 1;
        node
    }

    #[test]
    fn test_sentence_flags() {
        let tree = metric_tree(&sentence());
        assert_eq!(tree.level, "sentence");
        assert_eq!(tree.get("word_count"), Some("4"));
        assert_eq!(tree.get("isPassive"), Some("true"));
        assert_eq!(tree.get("isQuestion"), None);
        assert_eq!(tree.get("question_count"), None);
        assert_eq!(tree.get("d_level"), Some("0"));
    }

    #[test]
    fn test_unparsed_sentence_hides_parse_counts() {
        let mut node = sentence();
        node.totals.parse = ParseStatus::NotRequested;
        let tree = metric_tree(&node);
        assert_eq!(tree.get("d_level"), Some("missing"));
        assert_eq!(tree.get("passive_count"), None);
        assert_eq!(tree.get("isPassive"), None);
        assert_eq!(tree.get("alpino_status"), Some("-1"));
    }

    #[test]
    fn test_absent_lm_values_are_omitted() {
        let tree = metric_tree(&sentence());
        assert_eq!(tree.get("wopr_logprob"), None);
    }
}

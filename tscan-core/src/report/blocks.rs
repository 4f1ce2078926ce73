//! Thematic CSV blocks shared by the document, paragraph and sentence tables
//!
//! Each block pairs one header with one row function; both must list the
//! same columns in the same order.

use super::{density, mean_of, proportion, Cell};
use crate::domain::{Afk, Cgn, Conn, DistKind, Intensify, Ner, SemType, Situation};
use crate::stats::{Counts, NodeKind, StatsNode, Totals};

/// Granularity of a CSV row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Sentence row
    Sentence,
    /// Paragraph row
    Paragraph,
    /// Document row
    Document,
}

/// Read access to one node while rendering its row
pub struct View<'a> {
    /// The node
    pub node: &'a StatsNode,
    /// Its totals
    pub t: &'a Totals,
    /// Its counters
    pub c: &'a Counts,
    /// Row granularity
    pub level: Level,
}

impl<'a> View<'a> {
    /// View a structural node; words have no block row
    pub fn new(node: &'a StatsNode) -> Option<Self> {
        let level = match node.kind {
            NodeKind::Sentence { .. } => Level::Sentence,
            NodeKind::Paragraph => Level::Paragraph,
            NodeKind::Document { .. } => Level::Document,
            NodeKind::Word(_) => return None,
        };
        Some(Self {
            node,
            t: &node.totals,
            c: &node.totals.counts,
            level,
        })
    }

    fn unparsed(&self) -> bool {
        self.t.parse.is_unusable()
    }

    /// NA when the parse is missing or failed below this node
    fn parsed(&self, cell: Cell) -> Cell {
        if self.unparsed() {
            Cell::Na
        } else {
            cell
        }
    }

    /// Per thousand words
    fn d(&self, a: u32) -> Cell {
        density(a, self.c.words)
    }

    /// Per corrected clause
    fn dz(&self, a: u32) -> Cell {
        self.parsed(proportion(a, self.c.corrected_clauses()))
    }

    /// Per sentence
    fn per_sent(&self, a: u32) -> Cell {
        proportion(a, self.c.sentences)
    }

    fn d_dz(&self, a: u32, out: &mut Vec<Cell>) {
        out.push(self.d(a));
        out.push(self.dz(a));
    }

    /// Parse-derived count: density and per-clause, both NA without a parse
    fn parsed_d_dz(&self, a: u32, out: &mut Vec<Cell>) {
        out.push(self.parsed(self.d(a)));
        out.push(self.dz(a));
    }

    fn mtld(&self, pick: impl Fn(&crate::stats::Diversity) -> f64) -> Cell {
        self.node
            .derived
            .diversity
            .as_ref()
            .map_or(Cell::Na, |d| Cell::num(pick(d)))
    }
}

/// A header and its row function
pub struct Block {
    /// Block name
    pub name: &'static str,
    /// Comma-terminated header
    pub header: fn(Level) -> String,
    /// Row cells
    pub row: fn(&View<'_>, &mut Vec<Cell>),
}

/// Blocks in column order
pub const BLOCKS: [Block; 13] = [
    Block {
        name: "word difficulties",
        header: |_| WORD_DIFFICULTIES.to_string(),
        row: word_difficulties,
    },
    Block {
        name: "compound",
        header: |_| COMPOUND.to_string(),
        row: compound,
    },
    Block {
        name: "sentence difficulties",
        header: sent_difficulties_header,
        row: sent_difficulties,
    },
    Block {
        name: "information density",
        header: |_| INFO.to_string(),
        row: info,
    },
    Block {
        name: "coherence",
        header: |_| COHERENCE.to_string(),
        row: coherence,
    },
    Block {
        name: "concreteness",
        header: |_| CONCREET.to_string(),
        row: concreet,
    },
    Block {
        name: "personalness",
        header: |_| PERSOONLIJKHEID.to_string(),
        row: persoonlijkheid,
    },
    Block {
        name: "verb",
        header: |_| VERB.to_string(),
        row: verb,
    },
    Block {
        name: "imperative",
        header: |_| IMPERATIVE.to_string(),
        row: imperative,
    },
    Block {
        name: "word sort",
        header: |_| WORD_SORT.to_string(),
        row: word_sort,
    },
    Block {
        name: "prepositional phrase",
        header: |_| PREP_PHRASE.to_string(),
        row: prep_phrase,
    },
    Block {
        name: "intensity",
        header: |_| INTENS.to_string(),
        row: intens,
    },
    Block {
        name: "misc",
        header: |_| MISC.to_string(),
        row: misc,
    },
];

const WORD_DIFFICULTIES: &str = "Let_per_wrd,Wrd_per_let,Let_per_wrd_zn,Wrd_per_let_zn,\
Morf_per_wrd,Wrd_per_morf,Morf_per_wrd_zn,Wrd_per_morf_zn,Namen_p,Namen_d,\
Freq50_staph,Freq65_Staph,Freq77_Staph,Freq80_Staph,\
Wrd_freq_log,Wrd_freq_zn_log,Lem_freq_log,Lem_freq_zn_log,\
Freq1000,Freq2000,Freq3000,Freq5000,Freq10000,Freq20000,\
Freq1000_inhwrd,Freq2000_inhwrd,Freq3000_inhwrd,Freq5000_inhwrd,Freq10000_inhwrd,Freq20000_inhwrd,";

fn word_difficulties(v: &View<'_>, out: &mut Vec<Cell>) {
    let c = v.c;
    let t = v.t;
    let plain_words = c.words.saturating_sub(c.names);
    out.push(proportion(c.chars, c.words));
    out.push(proportion(c.words, c.chars));
    out.push(proportion(c.chars_ex_names, plain_words));
    out.push(proportion(plain_words, c.chars_ex_names));
    out.push(proportion(c.morphs, c.words));
    out.push(proportion(c.words, c.morphs));
    out.push(proportion(c.morphs_ex_names, plain_words));
    out.push(proportion(plain_words, c.morphs_ex_names));
    out.push(proportion(c.names, c.names + t.head(Cgn::N)));
    out.push(v.d(c.names));
    for flag in c.staph {
        out.push(proportion(flag, c.words));
    }
    let plain_contents = c.contents.saturating_sub(c.names);
    out.push(t.sums.word_freq_log.mean(c.contents).into());
    out.push(t.sums.word_freq_log_n.mean(plain_contents).into());
    out.push(t.sums.lemma_freq_log.mean(c.contents).into());
    out.push(t.sums.lemma_freq_log_n.mean(plain_contents).into());
    for tier in t.tiers.all {
        out.push(proportion(tier, c.words));
    }
    for tier in t.tiers.content {
        out.push(proportion(tier, c.contents));
    }
}

const COMPOUND: &str = "Samenst_d,Samenst_p,Samenst3_d,Samenst3_p,\
Let_per_wrd_nw,Let_per_wrd_nsam,Let_per_wrd_sam,Let_per_wrd_hfdwrd,Let_per_wrd_satwrd,Let_per_wrd_nw_corr,Let_per_wrd_corr,\
Wrd_freq_log_nw,Wrd_freq_log_ong_nw,Wrd_freq_log_sam_nw,Wrd_freq_log_hfdwrd,Wrd_freq_log_satwrd,Wrd_freq_log_(hfd_sat),Wrd_freq_log_nw_corr,Wrd_freq_log_corr,\
Freq1000_nw,Freq5000_nw,Freq20000_nw,Freq1000_nsam_nw,Freq5000_nsam_nw,Freq20000_nsam_nw,\
Freq1000_sam_nw,Freq5000_sam_nw,Freq20000_sam_nw,Freq1000_hfdwrd_nw,Freq5000_hfdwrd_nw,Freq20000_hfdwrd_nw,\
Freq1000_satwrd_nw,Freq5000_satwrd_nw,Freq20000_satwrd_nw,Freq1000_nw_corr,Freq5000_nw_corr,Freq20000_nw_corr,\
Freq1000_corr,Freq5000_corr,Freq20000_corr,";

/// Tier indexes of the 1000, 5000 and 20000 tiers
const COMPOUND_TIERS: [usize; 3] = [0, 3, 5];

fn compound(v: &View<'_>, out: &mut Vec<Cell>) {
    let c = v.c;
    let s = &v.t.sums;
    let tiers = &v.t.tiers;
    let nouns = v.t.head(Cgn::N);
    let non_comp = nouns.saturating_sub(c.compounds);
    out.push(v.d(c.compounds));
    out.push(proportion(c.compounds, nouns));
    out.push(v.d(c.compounds3));
    out.push(proportion(c.compounds3, nouns));

    out.push(proportion(c.char_noun, nouns));
    out.push(proportion(c.char_non_comp, non_comp));
    out.push(proportion(c.char_comp, c.compounds));
    out.push(proportion(c.char_head, c.compounds));
    out.push(proportion(c.char_sat, c.compounds));
    out.push(proportion(c.char_noun_corr, nouns));
    out.push(proportion(c.char_corr, c.words));

    out.push(mean_of(s.freq_noun, nouns));
    out.push(mean_of(s.freq_non_comp, non_comp));
    out.push(mean_of(s.freq_comp, c.compounds));
    out.push(mean_of(s.freq_head, c.compounds));
    out.push(mean_of(s.freq_sat, c.compounds));
    out.push(mean_of(s.freq_head_sat, c.compounds));
    out.push(mean_of(s.freq_noun_corr, nouns));
    out.push(mean_of(s.freq_corr, c.contents));

    for (set, base) in [
        (&tiers.noun, nouns),
        (&tiers.non_comp, non_comp),
        (&tiers.comp, c.compounds),
        (&tiers.head, c.compounds),
        (&tiers.sat, c.compounds),
        (&tiers.noun_corr, nouns),
        (&tiers.corr, c.words),
    ] {
        for i in COMPOUND_TIERS {
            out.push(proportion(set[i], base));
        }
    }
}

const SENT_DIFFICULTIES_A: &str = "Wrd_per_zin,Wrd_per_dz,Zin_per_wrd,Dzin_per_wrd,Wrd_per_nwg,\
Betr_bijzin_per_zin,Bijw_bijzin_per_zin,Compl_bijzin_per_zin,Fin_bijzin_per_zin,Mv_fin_inbed_per_zin,\
Infin_compl_per_zin,Bijzin_per_zin,Mv_inbed_per_zin,Betr_bijzin_los,Bijw_compl_bijzin_los,\
Pv_hzin_per_zin,Pv_bijzin_per_zin,Pv_ww1_per_zin,Hzin_conj,Bijzin_conj,Ww1_conj,Pv_Alpino_per_zin,\
Pv_Frog_d,Pv_Frog_per_zin,";

const SENT_DIFFICULTIES_B: &str = "Nom_d,Lijdv_d,Lijdv_dz,Ontk_zin_d,Ontk_zin_dz,Ontk_morf_d,Ontk_morf_dz,\
Ontk_tot_d,Ontk_tot_dz,Meerv_ontk_d,Meerv_ontk_dz,\
AL_sub_ww,AL_ob_ww,AL_indirob_ww,AL_ww_vzg,AL_lidw_znw,AL_vz_znw,AL_ww_wwvc,AL_vg_wwbijzin,AL_vg_conj,\
AL_vg_wwhoofdzin,AL_znw_bijzin,AL_ww_schdw,AL_ww_znwpred,AL_ww_bnwpred,AL_ww_bnwbwp,AL_ww_bwbwp,AL_ww_znwbwp,\
AL_gem,AL_max,";

fn sent_difficulties_header(level: Level) -> String {
    let d_level = match level {
        Level::Sentence => "D_level,",
        _ => "D_level,D_level_gt4_p,",
    };
    format!("{SENT_DIFFICULTIES_A}{d_level}{SENT_DIFFICULTIES_B}")
}

fn sent_difficulties(v: &View<'_>, out: &mut Vec<Cell>) {
    let c = v.c;
    let clauses = c.corrected_clauses();
    out.push(v.parsed(v.per_sent(c.words)));
    out.push(v.parsed(proportion(c.words, clauses)));
    out.push(proportion(c.sentences, c.words));
    out.push(v.parsed(proportion(clauses, c.words)));
    out.push(proportion(c.words, c.np));

    let bijzin = c.betr + c.bijw + c.compl;
    for n in [
        c.betr,
        c.bijw,
        c.compl,
        bijzin,
        c.mv_fin_inbed,
        c.infin_compl,
        bijzin + c.infin_compl,
        c.mv_inbed,
        c.los_betr,
        c.los_bijw,
    ] {
        out.push(v.parsed(v.per_sent(n)));
    }
    for n in [
        c.smain,
        c.ssub,
        c.sv1,
        c.smain_cnj,
        c.ssub_cnj,
        c.sv1_cnj,
        c.clauses,
    ] {
        out.push(v.parsed(v.per_sent(n)));
    }
    let finite = c.past + c.present;
    out.push(v.d(finite));
    out.push(v.per_sent(finite));

    out.push(v.parsed(v.per_sent(c.d_level)));
    if v.level != Level::Sentence {
        out.push(v.parsed(v.per_sent(c.d_level_gt4)));
    }

    out.push(v.parsed(v.d(c.nominal)));
    v.parsed_d_dz(c.passive, out);
    v.d_dz(c.prop_neg, out);
    v.d_dz(c.morph_neg, out);
    v.d_dz(c.prop_neg + c.morph_neg, out);
    v.d_dz(c.multi_neg, out);

    for kind in DistKind::ALL {
        out.push(v.parsed(Cell::opt(v.t.mean_distance_of(kind))));
    }
    out.push(v.parsed(Cell::opt(v.node.derived.mean_dep_len)));
    out.push(v.parsed(Cell::count(v.node.derived.max_dep_len)));
}

const INFO: &str = "Bijw_bep_d,Bijw_bep_dz,Bijw_bep_alg_d,Bijw_bep_alg_dz,Bijv_bep_d,Bijv_bep_dz,\
Attr_bijv_nw_d,Attr_bijv_nw_dz,Ov_bijv_bep_d,Ov_bijv_bep_dz,\
TTR_wrd,MTLD_wrd,TTR_lem,MTLD_lem,TTR_namen,MTLD_namen,TTR_inhwrd,MTLD_inhwrd,\
Inhwrd_d,Inhwrd_dz,Zeldz_index,Vnw_ref_d,Vnw_ref_dz,\
Arg_over_vzin_d,Arg_over_vzin_dz,Lem_over_vzin_d,Lem_over_vzin_dz,\
Arg_over_buf_d,Arg_over_buf_dz,Lem_over_buf_d,Lem_over_buf_dz,Onbep_nwg_p,Onbep_nwg_dz,";

fn info(v: &View<'_>, out: &mut Vec<Cell>) {
    let c = v.c;
    let u = &v.t.uniques;
    v.parsed_d_dz(c.vc_mod, out);
    v.parsed_d_dz(c.vc_mod_single, out);
    v.parsed_d_dz(c.np_mod, out);
    v.parsed_d_dz(c.adj_np_mod, out);
    v.parsed_d_dz(c.np_mod.saturating_sub(c.adj_np_mod), out);

    out.push(proportion(u.words.distinct() as f64, c.words));
    out.push(v.mtld(|d| d.words));
    out.push(proportion(u.lemmas.distinct() as f64, c.words));
    out.push(v.mtld(|d| d.lemmas));
    out.push(proportion(u.names.distinct() as f64, c.names));
    out.push(v.mtld(|d| d.names));
    out.push(proportion(u.contents.distinct() as f64, c.contents));
    out.push(v.mtld(|d| d.contents));

    v.d_dz(c.contents, out);
    out.push(Cell::opt(v.node.derived.rarity));
    v.d_dz(c.pron_ref, out);

    match v.level {
        Level::Sentence if v.node.index == 0 => out.extend([Cell::Na, Cell::Na, Cell::Na, Cell::Na]),
        Level::Sentence => {
            out.extend([v.d(c.word_overlap), Cell::Na, v.d(c.lemma_overlap), Cell::Na]);
        }
        _ => {
            v.d_dz(c.word_overlap, out);
            v.d_dz(c.lemma_overlap, out);
        }
    }

    match &v.node.kind {
        NodeKind::Document {
            word_overlap,
            lemma_overlap,
            window,
            ..
        } => {
            let window = u32::try_from(*window).unwrap_or(u32::MAX);
            let base = c.words.saturating_sub(window);
            out.push(density(*word_overlap, base));
            out.push(v.dz(*word_overlap));
            out.push(density(*lemma_overlap, base));
            out.push(v.dz(*lemma_overlap));
        }
        _ => out.extend([Cell::Na, Cell::Na, Cell::Na, Cell::Na]),
    }

    out.push(proportion(c.indef_np, c.np));
    out.push(v.dz(c.indef_np));
}

const COHERENCE: &str = "Conn_temp_d,Conn_temp_dz,Conn_temp_TTR,Conn_temp_MTLD,\
Conn_reeks_wg_d,Conn_reeks_wg_dz,Conn_reeks_wg_TTR,Conn_reeks_wg_MTLD,\
Conn_reeks_zin_d,Conn_reeks_zin_dz,Conn_reeks_zin_TTR,Conn_reeks_zin_MTLD,\
Conn_contr_d,Conn_contr_dz,Conn_contr_TTR,Conn_contr_MTLD,\
Conn_comp_d,Conn_comp_dz,Conn_comp_TTR,Conn_comp_MTLD,\
Conn_caus_d,Conn_caus_dz,Conn_caus_TTR,Conn_caus_MTLD,\
Causaal_d,Ruimte_d,Tijd_d,Emotie_d,\
Causaal_TTR,Causaal_MTLD,Ruimte_TTR,Ruimte_MTLD,Tijd_TTR,Tijd_MTLD,Emotie_TTR,Emotie_MTLD,";

/// Situation classes in column order
const SITUATION_COLUMNS: [Situation; 4] = [
    Situation::Causal,
    Situation::Space,
    Situation::Time,
    Situation::Emotion,
];

fn coherence(v: &View<'_>, out: &mut Vec<Cell>) {
    let u = &v.t.uniques;
    for class in Conn::CLASSES {
        let n = v.t.conn(class);
        v.d_dz(n, out);
        out.push(proportion(u.conns.distinct_where(|k| k.0 == class) as f64, n));
        out.push(v.mtld(|d| d.conns.get(&class).copied().unwrap_or(0.0)));
    }
    for class in SITUATION_COLUMNS {
        out.push(v.d(v.t.sit(class)));
    }
    for class in SITUATION_COLUMNS {
        let n = v.t.sit(class);
        out.push(proportion(u.sits.distinct_where(|k| k.0 == class) as f64, n));
        out.push(v.mtld(|d| d.sits.get(&class).copied().unwrap_or(0.0)));
    }
}

const CONCREET: &str = "Conc_nw_strikt_p,Conc_nw_strikt_d,Conc_nw_ruim_p,Conc_nw_ruim_d,\
Pers_nw_p,Pers_nw_d,PlantDier_nw_p,PlantDier_nw_d,Gebr_vw_nw_p,Gebr_vw_nw_d,\
Subst_conc_nw_p,Subst_conc_nw_d,Voed_verz_nw_p,Voed_verz_nw_d,Concr_ov_nw_p,Concr_ov_nw_d,\
Gebeuren_conc_nw_p,Gebeuren_conc_nw_d,Plaats_nw_p,Plaats_nw_d,Tijd_nw_p,Tijd_nw_d,Maat_nw_p,Maat_nw_d,\
Subst_abstr_nw_p,Subst_abstr_nw_d,Gebeuren_abstr_nw_p,Gebeuren_abstr_nw_d,\
Organisatie_nw_p,Organisatie_nw_d,Ov_abstr_nw_p,Ov_abstr_nw_d,Undefined_nw_p,Gedekte_nw_p,\
Alg_nw_d,Alg_nw_p,Alg_nw_afz_sit_d,Alg_nw_afz_sit_p,Alg_nw_rel_sit_d,Alg_nw_rel_sit_p,\
Alg_nw_hand_d,Alg_nw_hand_p,Alg_nw_kenn_d,Alg_nw_kenn_p,Alg_nw_disc_caus_d,Alg_nw_disc_caus_p,\
Alg_nw_ontw_d,Alg_nw_ontw_p,\
Waarn_mens_bvnw_p,Waarn_mens_bvnw_d,Emosoc_bvnw_p,Emosoc_bvnw_d,Waarn_nmens_bvnw_p,Waarn_nmens_bvnw_d,\
Vorm_omvang_bvnw_p,Vorm_omvang_bvnw_d,Kleur_bvnw_p,Kleur_bvnw_d,Stof_bvnw_p,Stof_bvnw_d,\
Geluid_bvnw_p,Geluid_bvnw_d,Waarn_nmens_ov_bvnw_p,Waarn_nmens_ov_bvnw_d,Technisch_bvnw_p,Technisch_bvnw_d,\
Tijd_bvnw_p,Tijd_bvnw_d,Plaats_bvnw_p,Plaats_bvnw_d,Spec_positief_bvnw_p,Spec_positief_bvnw_d,\
Spec_negatief_bvnw_p,Spec_negatief_bvnw_d,Alg_positief_bvnw_p,Alg_positief_bvnw_d,\
Alg_negatief_bvnw_p,Alg_negatief_bvnw_d,Alg_ev_zr_bvnw_p,Alg_ev_zr_bvnw_d,\
Ep_positief_bvnw_p,Ep_positief_bvnw_d,Ep_negatief_bvnw_p,Ep_negatief_bvnw_d,\
Ov_abstr_bvnw_p,Ov_abstr_bvnw_d,Spec_ev_bvnw_p,Spec_ev_bvnw_d,Alg_ev_bvnw_p,Alg_ev_bvnw_d,\
Ep_ev_bvnw_p,Ep_ev_bvnw_d,Conc_bvnw_strikt_p,Conc_bvnw_strikt_d,Conc_bvnw_ruim_p,Conc_bvnw_ruim_d,\
Subj_bvnw_p,Subj_bvnw_d,Undefined_bvnw_p,Gelabeld_bvnw_p,Gedekte_bvnw_p,\
Conc_ww_p,Conc_ww_d,Abstr_ww_p,Abstr_ww_d,Undefined_ww_p,Gedekte_ww_p,\
Alg_ww_d,Alg_ww_p,Alg_ww_afz_sit_d,Alg_ww_afz_sit_p,Alg_ww_rel_sit_d,Alg_ww_rel_sit_p,\
Alg_ww_hand_d,Alg_ww_hand_p,Alg_ww_kenn_d,Alg_ww_kenn_p,Alg_ww_disc_caus_d,Alg_ww_disc_caus_p,\
Alg_ww_ontw_d,Alg_ww_ontw_p,Conc_tot_p,Conc_tot_d,\
Alg_bijw_d,Alg_bijw_p,Spec_bijw_d,Spec_bijw_p,Gedekte_bw_p,";

/// Noun types with their own column pair, after the strict and broad groups
const NOUN_COLUMNS: [SemType; 14] = [
    SemType::HumanNoun,
    SemType::NonhumanNoun,
    SemType::ArtefactNoun,
    SemType::SubstanceConcNoun,
    SemType::FoodCareNoun,
    SemType::ConcreteOtherNoun,
    SemType::DynamicConcNoun,
    SemType::PlaceNoun,
    SemType::TimeNoun,
    SemType::MeasureNoun,
    SemType::SubstanceAbstrNoun,
    SemType::DynamicAbstrNoun,
    SemType::InstitutNoun,
    SemType::NondynamicNoun,
];

fn concreet(v: &View<'_>, out: &mut Vec<Cell>) {
    let t = v.t;
    let c = v.c;
    let p_d = |n: u32, base: u32, out: &mut Vec<Cell>| {
        out.push(proportion(n, base));
        out.push(v.d(n));
    };
    let d_p = |n: u32, base: u32, out: &mut Vec<Cell>| {
        out.push(v.d(n));
        out.push(proportion(n, base));
    };

    let nouns = t.covered_nouns();
    p_d(t.sem_where(SemType::is_strict_noun), nouns, out);
    p_d(t.sem_where(SemType::is_broad_noun), nouns, out);
    for sem in NOUN_COLUMNS {
        p_d(t.sem(sem), nouns, out);
    }
    out.push(proportion(t.sem(SemType::UndefinedNoun), nouns));
    out.push(proportion(nouns, t.head(Cgn::N) + c.names));
    for n in c.general_noun {
        d_p(n, nouns, out);
    }

    let adjs = t.covered_adjectives();
    let adj = |s: SemType| t.sem(s);
    let spec = adj(SemType::SpecPosAdj) + adj(SemType::SpecNegAdj);
    let general = adj(SemType::PosAdj) + adj(SemType::NegAdj) + adj(SemType::EvaluativeAdj);
    let epistemic = adj(SemType::EpiPosAdj) + adj(SemType::EpiNegAdj);
    for n in [
        adj(SemType::HumanAdj),
        adj(SemType::EmoAdj),
        t.sem_where(SemType::is_nonhuman_adj),
        adj(SemType::ShapeAdj),
        adj(SemType::ColorAdj),
        adj(SemType::MatterAdj),
        adj(SemType::SoundAdj),
        adj(SemType::NonhumanOtherAdj),
        adj(SemType::TechAdj),
        adj(SemType::TimeAdj),
        adj(SemType::PlaceAdj),
        adj(SemType::SpecPosAdj),
        adj(SemType::SpecNegAdj),
        adj(SemType::PosAdj),
        adj(SemType::NegAdj),
        adj(SemType::EvaluativeAdj),
        adj(SemType::EpiPosAdj),
        adj(SemType::EpiNegAdj),
        adj(SemType::AbstractAdj),
        spec,
        general,
        epistemic,
        t.sem_where(SemType::is_strict_adj),
        t.sem_where(SemType::is_broad_adj),
        t.sem_where(SemType::is_subjective_adj),
    ] {
        p_d(n, adjs, out);
    }
    let undefined_adj = adj(SemType::UndefinedAdj);
    out.push(proportion(undefined_adj, adjs));
    out.push(proportion(adjs.saturating_sub(undefined_adj), adjs));
    out.push(proportion(adjs, t.head(Cgn::Adj)));

    let verbs = t.covered_verbs();
    let concrete_verbs = t.sem_where(SemType::is_concrete_verb);
    p_d(concrete_verbs, verbs, out);
    p_d(t.sem_where(SemType::is_abstract_verb), verbs, out);
    out.push(proportion(t.sem_where(SemType::is_undefined_verb), verbs));
    out.push(proportion(verbs, t.head(Cgn::Ww)));
    for n in c.general_verb {
        d_p(n, verbs, out);
    }

    let concrete = t.sem_where(SemType::is_strict_noun)
        + t.sem_where(SemType::is_strict_adj)
        + concrete_verbs;
    p_d(concrete, nouns + adjs + verbs, out);

    let adverbs = c.general_adverb + c.specific_adverb;
    d_p(c.general_adverb, adverbs, out);
    d_p(c.specific_adverb, adverbs, out);
    out.push(proportion(adverbs, t.head(Cgn::Bw)));
}

const PERSOONLIJKHEID: &str = "Pers_ref_d,Pers_vnw1_d,Pers_vnw2_d,Pers_vnw3_d,Pers_vnw_d,\
Pers_namen_p, Pers_namen_p2, Pers_namen_d, Plaatsnamen_d,Org_namen_d, Prod_namen_d, Event_namen_d,";

fn persoonlijkheid(v: &View<'_>, out: &mut Vec<Cell>) {
    let c = v.c;
    let ner = |class: Ner| v.t.tallies.ner.get(&class);
    let persons = ner(Ner::Person);
    out.push(v.d(c.pers_ref));
    out.push(v.d(c.pron1));
    out.push(v.d(c.pron2));
    out.push(v.d(c.pron3));
    out.push(v.d(c.pron1 + c.pron2 + c.pron3));
    out.push(proportion(persons, c.ner_total));
    out.push(proportion(persons, v.t.head(Cgn::N) + c.names));
    out.push(v.d(persons));
    out.push(v.d(ner(Ner::Location)));
    out.push(v.d(ner(Ner::Organization)));
    out.push(v.d(ner(Ner::Product)));
    out.push(v.d(ner(Ner::Event)));
}

const VERB: &str = "Actieww_p,Actieww_d,Toestww_p,Toestww_d,Procesww_p,Procesww_d,\
Undefined_ATP_ww_p,Ww_tt_p,Ww_tt_dz,Ww_mod_d_,Ww_mod_dz,Huww_tijd_d,Huww_tijd_dz,\
Koppelww_d,Koppelww_dz,Infin_bv_d,Infin_bv_dz,Infin_nw_d,Infin_nw_dz,Infin_vrij_d,Infin_vrij_dz,\
Vd_bv_d,Vd_bv_dz,Vd_nw_d,Vd_nw_dz,Vd_vrij_d,Vd_vrij_dz,\
Ovd_bv_d,Ovd_bv_dz,Ovd_nw_d,Ovd_nw_dz,Ovd_vrij_d,Ovd_vrij_dz,";

fn verb(v: &View<'_>, out: &mut Vec<Cell>) {
    let t = v.t;
    let c = v.c;
    let verbs = t.head(Cgn::Ww);
    for n in [
        t.sem_where(SemType::is_action),
        t.sem_where(SemType::is_state),
        t.sem_where(SemType::is_process),
    ] {
        out.push(proportion(n, verbs));
        out.push(v.d(n));
    }
    out.push(proportion(t.sem(SemType::UndefinedVerb), t.covered_verbs()));
    v.d_dz(c.present, out);
    v.parsed_d_dz(c.modal, out);
    v.parsed_d_dz(c.time_verb, out);
    v.parsed_d_dz(c.copula, out);
    for set in [c.infinitive, c.past_participle, c.present_participle] {
        for n in set {
            v.d_dz(n, out);
        }
    }
}

const IMPERATIVE: &str = "Imp_ellips_p,Imp_ellips_d,Vragen_p,Vragen_d,";

fn imperative(v: &View<'_>, out: &mut Vec<Cell>) {
    let c = v.c;
    out.push(v.parsed(v.per_sent(c.imperative)));
    out.push(v.parsed(v.d(c.imperative)));
    out.push(v.per_sent(c.questions));
    out.push(v.d(c.questions));
}

const WORD_SORT: &str = "Bvnw_d,Vg_d,Vnw_d,Lidw_d,Vz_d,Bijw_d,Tw_d,Nw_d,Ww_d,Tuss_d,Spec_d,Interp_d,\
Afk_d,Afk_gen_d,Afk_int_d,Afk_jur_d,Afk_med_d,Afk_ond_d,Afk_pol_d,Afk_ov_d,Afk_zorg_d,";

fn word_sort(v: &View<'_>, out: &mut Vec<Cell>) {
    let t = v.t;
    for tag in [
        Cgn::Adj,
        Cgn::Vg,
        Cgn::Vnw,
        Cgn::Lid,
        Cgn::Vz,
        Cgn::Bw,
        Cgn::Tw,
        Cgn::N,
        Cgn::Ww,
        Cgn::Tsw,
        Cgn::Spec,
        Cgn::Let,
    ] {
        out.push(v.d(t.head(tag)));
    }
    let afk = |domain: Afk| t.tallies.afk.get(&domain);
    out.push(v.d(t.tallies.afk.total()));
    for domain in [
        Afk::Generiek,
        Afk::Internationaal,
        Afk::Juridisch,
        Afk::Media,
        Afk::Onderwijs,
        Afk::Overheid,
        Afk::Overige,
        Afk::Zorg,
    ] {
        out.push(v.d(afk(domain)));
    }
}

const PREP_PHRASE: &str = "Vzu_d,Vzu_dz,Arch_d,";

fn prep_phrase(v: &View<'_>, out: &mut Vec<Cell>) {
    v.d_dz(v.c.prep_exprs, out);
    out.push(v.d(v.c.archaic));
}

const INTENS: &str = "Int_d,Int_bvnw_d,Int_bvbw_d,Int_bw_d,Int_combi_d,Int_nw_d,Int_tuss_d,Int_ww_d,";

fn intens(v: &View<'_>, out: &mut Vec<Cell>) {
    let tally = &v.t.tallies.intensify;
    out.push(v.d(v.t.intensifiers()));
    for class in [
        Intensify::Bvnw,
        Intensify::Bvbw,
        Intensify::Bw,
        Intensify::Combi,
        Intensify::Nw,
        Intensify::Tuss,
        Intensify::Ww,
    ] {
        out.push(v.d(tally.get(&class)));
    }
}

const MISC: &str = "Log_prob,Entropie,Perplexiteit,";

fn misc(v: &View<'_>, out: &mut Vec<Cell>) {
    let s = &v.t.sums;
    for sum in [s.lm_avg_prob, s.lm_entropy, s.lm_perplexity] {
        out.push(mean_of(sum, v.c.sentences));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(header: &str) -> usize {
        header.trim_end_matches(',').split(',').count()
    }

    #[test]
    fn test_every_block_is_column_aligned() {
        let mut doc = StatsNode::new(
            0,
            NodeKind::Document {
                name: "d".into(),
                word_overlap: 0,
                lemma_overlap: 0,
                window: 50,
            },
        );
        doc.totals.counts.words = 10;
        let sentence = StatsNode::new(0, NodeKind::Sentence { text: "x".into() });
        let paragraph = StatsNode::new(0, NodeKind::Paragraph);
        for node in [&doc, &paragraph, &sentence] {
            let view = View::new(node).unwrap();
            for block in &BLOCKS {
                let mut cells = Vec::new();
                (block.row)(&view, &mut cells);
                assert_eq!(
                    cells.len(),
                    columns(&(block.header)(view.level)),
                    "{} at {:?}",
                    block.name,
                    view.level
                );
            }
        }
    }

    #[test]
    fn test_sentence_has_no_gt4_column() {
        assert!(!sent_difficulties_header(Level::Sentence).contains("gt4"));
        assert!(sent_difficulties_header(Level::Document).contains("D_level_gt4_p"));
    }

    #[test]
    fn test_unparsed_node_hides_clause_columns() {
        let mut node = StatsNode::new(1, NodeKind::Sentence { text: "x".into() });
        node.totals.parse = crate::stats::ParseStatus::NotRequested;
        node.totals.counts.words = 4;
        node.totals.counts.sentences = 1;
        let view = View::new(&node).unwrap();
        let mut cells = Vec::new();
        sent_difficulties(&view, &mut cells);
        assert_eq!(cells[0], Cell::Na);
        assert_eq!(cells[1], Cell::Na);
        // Zin_per_wrd does not depend on the parse
        assert_eq!(cells[2], Cell::Num(0.25));
    }

    #[test]
    fn test_first_sentence_has_no_overlap() {
        let mut node = StatsNode::new(0, NodeKind::Sentence { text: "x".into() });
        node.totals.counts.words = 2;
        let view = View::new(&node).unwrap();
        let mut cells = Vec::new();
        info(&view, &mut cells);
        assert_eq!(&cells[23..27], &[Cell::Na, Cell::Na, Cell::Na, Cell::Na]);
    }
}

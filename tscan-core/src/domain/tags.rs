//! Morphosyntactic tags: CGN part of speech, word properties, positions,
//! named-entity classes, verb forms and dependency relation kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Head of a CGN part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cgn {
    /// Noun (zelfstandig naamwoord)
    N,
    /// Adjective (bijvoeglijk naamwoord)
    Adj,
    /// Verb (werkwoord)
    Ww,
    /// Numeral (telwoord)
    Tw,
    /// Pronoun (voornaamwoord)
    Vnw,
    /// Article (lidwoord)
    Lid,
    /// Preposition (voorzetsel)
    Vz,
    /// Conjunction (voegwoord)
    Vg,
    /// Adverb (bijwoord)
    Bw,
    /// Interjection (tussenwerpsel)
    Tsw,
    /// Special token (foreign words, symbols, name parts)
    Spec,
    /// Punctuation (leesteken)
    Let,
    /// Not assigned; also the wildcard category for untagged lexicon entries
    Unass,
}

impl Cgn {
    /// Map a POS head such as `WW` or `VNW` onto its tag
    pub fn from_head(head: &str) -> Self {
        match head.trim().to_ascii_uppercase().as_str() {
            "N" => Cgn::N,
            "ADJ" => Cgn::Adj,
            "WW" => Cgn::Ww,
            "TW" | "NUM" => Cgn::Tw,
            "VNW" => Cgn::Vnw,
            "LID" => Cgn::Lid,
            "VZ" => Cgn::Vz,
            "VG" => Cgn::Vg,
            "BW" => Cgn::Bw,
            "TSW" => Cgn::Tsw,
            "SPEC" => Cgn::Spec,
            "LET" => Cgn::Let,
            _ => Cgn::Unass,
        }
    }

    /// The canonical head string
    pub fn as_str(self) -> &'static str {
        match self {
            Cgn::N => "N",
            Cgn::Adj => "ADJ",
            Cgn::Ww => "WW",
            Cgn::Tw => "TW",
            Cgn::Vnw => "VNW",
            Cgn::Lid => "LID",
            Cgn::Vz => "VZ",
            Cgn::Vg => "VG",
            Cgn::Bw => "BW",
            Cgn::Tsw => "TSW",
            Cgn::Spec => "SPEC",
            Cgn::Let => "LET",
            Cgn::Unass => "UNASS",
        }
    }
}

impl fmt::Display for Cgn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single most specific property derived from the CGN features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordProp {
    /// Nothing special
    JustAWord,
    /// Proper name
    Name,
    /// Past participle (voltooid deelwoord)
    PastParticiple,
    /// Present participle (onvoltooid deelwoord)
    PresentParticiple,
    /// Infinitive
    Infinitive,
    /// Finite verb, present tense
    PresentFinite,
    /// Finite verb, past tense
    PastFinite,
    /// Finite verb, subjunctive
    Subjunctive,
    /// First person pronoun
    Pron1,
    /// Second person pronoun
    Pron2,
    /// Third person pronoun
    Pron3,
    /// Demonstrative pronoun
    Demonstrative,
    /// Punctuation
    Punctuation,
}

impl WordProp {
    /// Label used in word metrics
    pub fn as_str(self) -> &'static str {
        match self {
            WordProp::JustAWord => "word",
            WordProp::Name => "name",
            WordProp::PastParticiple => "past-participle",
            WordProp::PresentParticiple => "present-participle",
            WordProp::Infinitive => "infinitive",
            WordProp::PresentFinite => "present-tense",
            WordProp::PastFinite => "past-tense",
            WordProp::Subjunctive => "subjunctive",
            WordProp::Pron1 => "first-person",
            WordProp::Pron2 => "second-person",
            WordProp::Pron3 => "third-person",
            WordProp::Demonstrative => "demonstrative",
            WordProp::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for WordProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syntactic position of adjectives and participles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Used as a noun
    Nominal,
    /// Attributive, before a noun
    Prenominal,
    /// Predicative or adverbial
    Free,
    /// No position feature
    None,
}

impl Position {
    /// Label used in the word CSV
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Nominal => "nom",
            Position::Prenominal => "prenom",
            Position::Free => "vrij",
            Position::None => "",
        }
    }
}

/// Named-entity class of a B-tagged token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ner {
    /// Person
    Person,
    /// Location
    Location,
    /// Organisation
    Organization,
    /// Product
    Product,
    /// Event
    Event,
    /// Anything else
    Misc,
    /// Not the first token of an entity
    None,
}

impl Ner {
    /// Short class name, as in the IOB tag
    pub fn as_str(self) -> &'static str {
        match self {
            Ner::Person => "PER",
            Ner::Location => "LOC",
            Ner::Organization => "ORG",
            Ner::Product => "PRO",
            Ner::Event => "EVE",
            Ner::Misc => "MISC",
            Ner::None => "",
        }
    }

    /// Parse an IOB tag such as `B-PER`; only begin tags count
    pub fn from_tag(tag: &str) -> Self {
        let upper = tag.trim().to_ascii_uppercase();
        let Some(class) = upper.strip_prefix("B-") else {
            return Ner::None;
        };
        match class {
            "PER" => Ner::Person,
            "LOC" => Ner::Location,
            "ORG" => Ner::Organization,
            "PRO" => Ner::Product,
            "EVE" => Ner::Event,
            "MISC" => Ner::Misc,
            _ => Ner::None,
        }
    }
}

/// Role of a verb in its verb cluster, as reported by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbForm {
    /// Not a verb, or no parse available
    #[default]
    NoVerb,
    /// Main verb
    Head,
    /// Passive auxiliary
    Passive,
    /// Modal auxiliary
    Modal,
    /// Temporal auxiliary
    Time,
    /// Copula
    Copula,
}

impl VerbForm {
    /// Label used in word metrics
    pub fn as_str(self) -> &'static str {
        match self {
            VerbForm::NoVerb => "no_verb",
            VerbForm::Head => "head",
            VerbForm::Passive => "passive",
            VerbForm::Modal => "modal",
            VerbForm::Time => "time",
            VerbForm::Copula => "copula",
        }
    }
}

/// Dependency relation kinds for which head-dependent distances are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistKind {
    /// Subject to verb
    SubVerb,
    /// Direct object to verb
    Obj1,
    /// Indirect object to verb
    Obj2,
    /// Verb to prepositional complement
    VerbPp,
    /// Determiner to noun
    NounDet,
    /// Preposition to object
    PrepObj1,
    /// Verb to verbal complement
    VerbVc,
    /// Complementizer to clause body
    CompBody,
    /// Coordinator to conjunct
    CrdCnj,
    /// Verb to complementizer
    VerbComp,
    /// Noun to verbal complement
    NounVc,
    /// Verb to separable particle
    VerbSvp,
    /// Verb to nominal predicate
    PredcN,
    /// Verb to adjectival predicate
    PredcA,
    /// Verb to adjectival modifier
    VerbModA,
    /// Verb to adverbial modifier
    VerbModBw,
    /// Verb to nominal modifier
    VerbNoun,
}

impl DistKind {
    /// Every kind, in metric order
    pub const ALL: [DistKind; 17] = [
        DistKind::SubVerb,
        DistKind::Obj1,
        DistKind::Obj2,
        DistKind::VerbPp,
        DistKind::NounDet,
        DistKind::PrepObj1,
        DistKind::VerbVc,
        DistKind::CompBody,
        DistKind::CrdCnj,
        DistKind::VerbComp,
        DistKind::NounVc,
        DistKind::VerbSvp,
        DistKind::PredcN,
        DistKind::PredcA,
        DistKind::VerbModA,
        DistKind::VerbModBw,
        DistKind::VerbNoun,
    ];

    /// Metric class name
    pub fn metric_name(self) -> &'static str {
        match self {
            DistKind::SubVerb => "sub_verb_dist",
            DistKind::Obj1 => "obj_verb_dist",
            DistKind::Obj2 => "lijdend_verb_dist",
            DistKind::VerbPp => "verb_pp_dist",
            DistKind::NounDet => "noun_det_dist",
            DistKind::PrepObj1 => "prep_obj_dist",
            DistKind::VerbVc => "verb_vc_dist",
            DistKind::CompBody => "comp_body_dist",
            DistKind::CrdCnj => "crd_cnj_dist",
            DistKind::VerbComp => "verb_comp_dist",
            DistKind::NounVc => "noun_vc_dist",
            DistKind::VerbSvp => "verb_svp_dist",
            DistKind::PredcN => "verb_cop_dist",
            DistKind::PredcA => "verb_adj_dist",
            DistKind::VerbModA => "verb_adv_mod_dist",
            DistKind::VerbModBw => "verb_bw_mod_dist",
            DistKind::VerbNoun => "verb_noun_dist",
        }
    }
}

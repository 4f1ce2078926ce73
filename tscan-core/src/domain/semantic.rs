//! Semantic types for nouns, adjectives and verbs
//!
//! Each axis keeps three distinct "no information" states apart:
//! `Undefined*` (the lexicon knows the word but gives no class),
//! `Unfound*` (the lexicon does not know the word) and [`SemType::NoSemType`]
//! (the word is not on a semantic axis at all). Coverage statistics
//! depend on the difference.

use serde::{Deserialize, Serialize};

/// The axis a semantic type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemAxis {
    /// Noun semantics (also used for proper names)
    Noun,
    /// Adjective semantics
    Adjective,
    /// Verb semantics
    Verb,
    /// Not classified on any axis
    None,
}

impl SemAxis {
    /// Label used in the problem log
    pub fn as_str(self) -> &'static str {
        match self {
            SemAxis::Noun => "noun",
            SemAxis::Adjective => "adjective",
            SemAxis::Verb => "verb",
            SemAxis::None => "none",
        }
    }
}

/// Semantic classification of a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SemType {
    // nouns
    /// Concrete, human
    HumanNoun,
    /// Concrete, plant or animal
    NonhumanNoun,
    /// Concrete, artefact
    ArtefactNoun,
    /// Concrete substance
    SubstanceConcNoun,
    /// Concrete, food or care
    FoodCareNoun,
    /// Concrete, other
    ConcreteOtherNoun,
    /// Place (broadly concrete)
    PlaceNoun,
    /// Time (broadly concrete)
    TimeNoun,
    /// Measure (broadly concrete)
    MeasureNoun,
    /// Concrete event
    DynamicConcNoun,
    /// Abstract substance
    SubstanceAbstrNoun,
    /// Abstract event
    DynamicAbstrNoun,
    /// Abstract, non-dynamic
    NondynamicNoun,
    /// Institution or organisation
    InstitutNoun,
    /// Known noun without a class
    UndefinedNoun,
    /// Noun missing from the lexicon
    UnfoundNoun,

    // adjectives
    /// Perceivable human property
    HumanAdj,
    /// Emotional or social property
    EmoAdj,
    /// Shape or size
    ShapeAdj,
    /// Colour
    ColorAdj,
    /// Material
    MatterAdj,
    /// Sound
    SoundAdj,
    /// Other perceivable non-human property
    NonhumanOtherAdj,
    /// Technical
    TechAdj,
    /// Time
    TimeAdj,
    /// Place
    PlaceAdj,
    /// Specific positive
    SpecPosAdj,
    /// Specific negative
    SpecNegAdj,
    /// General positive
    PosAdj,
    /// General negative
    NegAdj,
    /// General evaluative
    EvaluativeAdj,
    /// Epistemic positive
    EpiPosAdj,
    /// Epistemic negative
    EpiNegAdj,
    /// Other abstract
    AbstractAdj,
    /// Known adjective without a class
    UndefinedAdj,
    /// Adjective missing from the lexicon
    UnfoundAdj,

    // verbs
    /// Abstract state
    AbstractState,
    /// Abstract action
    AbstractAction,
    /// Abstract process
    AbstractProcess,
    /// Concrete state
    ConcreteState,
    /// Concrete action
    ConcreteAction,
    /// Concrete process
    ConcreteProcess,
    /// State, concreteness undefined
    UndefinedState,
    /// Action, concreteness undefined
    UndefinedAction,
    /// Process, concreteness undefined
    UndefinedProcess,
    /// Abstract, aktionsart undefined
    AbstractUndefined,
    /// Concrete, aktionsart undefined
    ConcreteUndefined,
    /// Known verb without a class
    UndefinedVerb,
    /// Verb missing from the lexicon
    UnfoundVerb,

    /// Not on a semantic axis
    NoSemType,
}

impl SemType {
    /// Parse a noun lexicon code
    pub fn noun_from_code(code: &str) -> Option<Self> {
        let sem = match code.trim().to_lowercase().as_str() {
            "human" => SemType::HumanNoun,
            "nonhuman" => SemType::NonhumanNoun,
            "artefact" => SemType::ArtefactNoun,
            "substance_conc" => SemType::SubstanceConcNoun,
            "foodcare" => SemType::FoodCareNoun,
            "concrother" => SemType::ConcreteOtherNoun,
            "place" => SemType::PlaceNoun,
            "time" => SemType::TimeNoun,
            "measure" => SemType::MeasureNoun,
            "dynamic_conc" => SemType::DynamicConcNoun,
            "substance_abstr" => SemType::SubstanceAbstrNoun,
            "dynamic_abstr" => SemType::DynamicAbstrNoun,
            "nondynamic" => SemType::NondynamicNoun,
            "institut" => SemType::InstitutNoun,
            "undefined" => SemType::UndefinedNoun,
            _ => return None,
        };
        Some(sem)
    }

    /// Parse an adjective lexicon code
    pub fn adjective_from_code(code: &str) -> Option<Self> {
        let sem = match code.trim().to_lowercase().as_str() {
            "human" => SemType::HumanAdj,
            "emo" => SemType::EmoAdj,
            "shape" => SemType::ShapeAdj,
            "color" => SemType::ColorAdj,
            "matter" => SemType::MatterAdj,
            "sound" => SemType::SoundAdj,
            "nonhuman_other" => SemType::NonhumanOtherAdj,
            "tech" => SemType::TechAdj,
            "time" => SemType::TimeAdj,
            "place" => SemType::PlaceAdj,
            "spec_pos" => SemType::SpecPosAdj,
            "spec_neg" => SemType::SpecNegAdj,
            "pos" => SemType::PosAdj,
            "neg" => SemType::NegAdj,
            "evaluative" => SemType::EvaluativeAdj,
            "epi_pos" => SemType::EpiPosAdj,
            "epi_neg" => SemType::EpiNegAdj,
            "abstract" => SemType::AbstractAdj,
            "undefined" => SemType::UndefinedAdj,
            _ => return None,
        };
        Some(sem)
    }

    /// Combine a concreteness code and an aktionsart code into a verb type
    pub fn verb_from_codes(concreteness: &str, aktionsart: &str) -> Option<Self> {
        let c = concreteness.trim().to_lowercase();
        let a = aktionsart.trim().to_lowercase();
        let sem = match (c.as_str(), a.as_str()) {
            ("abstract", "state") => SemType::AbstractState,
            ("abstract", "action") => SemType::AbstractAction,
            ("abstract", "process") => SemType::AbstractProcess,
            ("abstract", "undefined") => SemType::AbstractUndefined,
            ("concrete", "state") => SemType::ConcreteState,
            ("concrete", "action") => SemType::ConcreteAction,
            ("concrete", "process") => SemType::ConcreteProcess,
            ("concrete", "undefined") => SemType::ConcreteUndefined,
            ("undefined", "state") => SemType::UndefinedState,
            ("undefined", "action") => SemType::UndefinedAction,
            ("undefined", "process") => SemType::UndefinedProcess,
            ("undefined", "undefined") => SemType::UndefinedVerb,
            _ => return None,
        };
        Some(sem)
    }

    /// Which axis this type lives on
    pub fn axis(self) -> SemAxis {
        use SemType::*;
        match self {
            HumanNoun | NonhumanNoun | ArtefactNoun | SubstanceConcNoun | FoodCareNoun
            | ConcreteOtherNoun | PlaceNoun | TimeNoun | MeasureNoun | DynamicConcNoun
            | SubstanceAbstrNoun | DynamicAbstrNoun | NondynamicNoun | InstitutNoun
            | UndefinedNoun | UnfoundNoun => SemAxis::Noun,
            HumanAdj | EmoAdj | ShapeAdj | ColorAdj | MatterAdj | SoundAdj
            | NonhumanOtherAdj | TechAdj | TimeAdj | PlaceAdj | SpecPosAdj | SpecNegAdj
            | PosAdj | NegAdj | EvaluativeAdj | EpiPosAdj | EpiNegAdj | AbstractAdj
            | UndefinedAdj | UnfoundAdj => SemAxis::Adjective,
            AbstractState | AbstractAction | AbstractProcess | ConcreteState
            | ConcreteAction | ConcreteProcess | UndefinedState | UndefinedAction
            | UndefinedProcess | AbstractUndefined | ConcreteUndefined | UndefinedVerb
            | UnfoundVerb => SemAxis::Verb,
            NoSemType => SemAxis::None,
        }
    }

    /// The lexicon did not know the word
    pub fn is_unfound(self) -> bool {
        matches!(
            self,
            SemType::UnfoundNoun | SemType::UnfoundAdj | SemType::UnfoundVerb
        )
    }

    /// The lexicon knew the word but gave no class
    pub fn is_undefined(self) -> bool {
        matches!(self, SemType::UndefinedNoun | SemType::UndefinedAdj)
    }

    /// Strictly concrete noun
    pub fn is_strict_noun(self) -> bool {
        use SemType::*;
        matches!(
            self,
            HumanNoun
                | NonhumanNoun
                | ArtefactNoun
                | SubstanceConcNoun
                | FoodCareNoun
                | ConcreteOtherNoun
                | DynamicConcNoun
        )
    }

    /// Broadly concrete noun: strict, plus place, time and measure
    pub fn is_broad_noun(self) -> bool {
        self.is_strict_noun()
            || matches!(
                self,
                SemType::PlaceNoun | SemType::TimeNoun | SemType::MeasureNoun
            )
    }

    /// Perceivable non-human adjective
    pub fn is_nonhuman_adj(self) -> bool {
        use SemType::*;
        matches!(
            self,
            ShapeAdj | ColorAdj | MatterAdj | SoundAdj | NonhumanOtherAdj
        )
    }

    /// Strictly concrete adjective
    pub fn is_strict_adj(self) -> bool {
        matches!(self, SemType::HumanAdj | SemType::EmoAdj) || self.is_nonhuman_adj()
    }

    /// Broadly concrete adjective: strict, plus time and place
    pub fn is_broad_adj(self) -> bool {
        self.is_strict_adj() || matches!(self, SemType::TimeAdj | SemType::PlaceAdj)
    }

    /// Subjective (evaluating) adjective
    pub fn is_subjective_adj(self) -> bool {
        use SemType::*;
        matches!(
            self,
            SpecPosAdj | SpecNegAdj | PosAdj | NegAdj | EvaluativeAdj | EpiPosAdj | EpiNegAdj
        )
    }

    /// Concrete verb, whatever its aktionsart
    pub fn is_concrete_verb(self) -> bool {
        use SemType::*;
        matches!(
            self,
            ConcreteState | ConcreteAction | ConcreteProcess | ConcreteUndefined
        )
    }

    /// Abstract verb, whatever its aktionsart
    pub fn is_abstract_verb(self) -> bool {
        use SemType::*;
        matches!(
            self,
            AbstractState | AbstractAction | AbstractProcess | AbstractUndefined
        )
    }

    /// Verb with undefined concreteness
    pub fn is_undefined_verb(self) -> bool {
        use SemType::*;
        matches!(
            self,
            UndefinedState | UndefinedAction | UndefinedProcess | UndefinedVerb
        )
    }

    /// State verb
    pub fn is_state(self) -> bool {
        use SemType::*;
        matches!(self, AbstractState | ConcreteState | UndefinedState)
    }

    /// Action verb
    pub fn is_action(self) -> bool {
        use SemType::*;
        matches!(self, AbstractAction | ConcreteAction | UndefinedAction)
    }

    /// Process verb
    pub fn is_process(self) -> bool {
        use SemType::*;
        matches!(self, AbstractProcess | ConcreteProcess | UndefinedProcess)
    }

    /// Label used in word metrics and the word CSV
    pub fn as_str(self) -> &'static str {
        use SemType::*;
        match self {
            HumanNoun => "human-noun",
            NonhumanNoun => "nonhuman-noun",
            ArtefactNoun => "artefact-noun",
            SubstanceConcNoun => "substance-conc-noun",
            FoodCareNoun => "foodcare-noun",
            ConcreteOtherNoun => "concrother-noun",
            PlaceNoun => "place-noun",
            TimeNoun => "time-noun",
            MeasureNoun => "measure-noun",
            DynamicConcNoun => "dynamic-conc-noun",
            SubstanceAbstrNoun => "substance-abstr-noun",
            DynamicAbstrNoun => "dynamic-abstr-noun",
            NondynamicNoun => "nondynamic-noun",
            InstitutNoun => "institut-noun",
            UndefinedNoun => "undefined-noun",
            UnfoundNoun => "unfound-noun",
            HumanAdj => "human-adj",
            EmoAdj => "emo-adj",
            ShapeAdj => "shape-adj",
            ColorAdj => "color-adj",
            MatterAdj => "matter-adj",
            SoundAdj => "sound-adj",
            NonhumanOtherAdj => "nonhuman-other-adj",
            TechAdj => "tech-adj",
            TimeAdj => "time-adj",
            PlaceAdj => "place-adj",
            SpecPosAdj => "spec-pos-adj",
            SpecNegAdj => "spec-neg-adj",
            PosAdj => "pos-adj",
            NegAdj => "neg-adj",
            EvaluativeAdj => "evaluative-adj",
            EpiPosAdj => "epi-pos-adj",
            EpiNegAdj => "epi-neg-adj",
            AbstractAdj => "abstract-adj",
            UndefinedAdj => "undefined-adj",
            UnfoundAdj => "unfound-adj",
            AbstractState => "abstract-state",
            AbstractAction => "abstract-action",
            AbstractProcess => "abstract-process",
            ConcreteState => "concrete-state",
            ConcreteAction => "concrete-action",
            ConcreteProcess => "concrete-process",
            UndefinedState => "undefined-state",
            UndefinedAction => "undefined-action",
            UndefinedProcess => "undefined-process",
            AbstractUndefined => "abstract-undefined",
            ConcreteUndefined => "concrete-undefined",
            UndefinedVerb => "undefined-verb",
            UnfoundVerb => "unfound-verb",
            NoSemType => "none",
        }
    }
}

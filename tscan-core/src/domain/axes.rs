//! Independent classification axes: intensifiers, general nouns and verbs,
//! adverbs, abbreviations, connectives and situations.

use serde::{Deserialize, Serialize};

/// Intensifier class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Intensify {
    /// Adjective
    Bvnw,
    /// Adjective or adverb, only counted in modifier position
    Bvbw,
    /// Adverb
    Bw,
    /// Multi-word combination
    Combi,
    /// Noun
    Nw,
    /// Interjection
    Tuss,
    /// Verb
    Ww,
    /// Not an intensifier
    None,
}

impl Intensify {
    /// Parse an intensifier lexicon code
    pub fn from_code(code: &str) -> Option<Self> {
        let t = match code.trim().to_lowercase().as_str() {
            "bvnw" => Intensify::Bvnw,
            "bvbw" => Intensify::Bvbw,
            "bw" => Intensify::Bw,
            "combi" => Intensify::Combi,
            "nw" => Intensify::Nw,
            "tuss" => Intensify::Tuss,
            "ww" => Intensify::Ww,
            _ => return None,
        };
        Some(t)
    }

    /// Label used in metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Intensify::Bvnw => "bvnw",
            Intensify::Bvbw => "bvbw",
            Intensify::Bw => "bw",
            Intensify::Combi => "combi",
            Intensify::Nw => "nw",
            Intensify::Tuss => "tuss",
            Intensify::Ww => "ww",
            Intensify::None => "none",
        }
    }
}

/// Aspects a general noun or verb can carry; several may apply at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GeneralAspects {
    /// Separates a situation (afzonderlijke situatie)
    pub separate: bool,
    /// Relates situations
    pub related: bool,
    /// Refers to acting
    pub acting: bool,
    /// Refers to knowledge
    pub knowledge: bool,
    /// Refers to discussion or causation
    pub discussion: bool,
    /// Refers to development
    pub development: bool,
}

/// General-noun or general-verb classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum General {
    /// Listed as general, with its aspects
    General(GeneralAspects),
    /// Not a general word
    None,
}

impl General {
    /// Parse a code such as `sep+act` or `gen`
    pub fn from_code(code: &str) -> Option<Self> {
        let mut aspects = GeneralAspects::default();
        for part in code.trim().to_lowercase().split(['+', ',']) {
            match part.trim() {
                "gen" | "general" => {}
                "sep" => aspects.separate = true,
                "rel" => aspects.related = true,
                "act" => aspects.acting = true,
                "know" => aspects.knowledge = true,
                "disc" => aspects.discussion = true,
                "deve" => aspects.development = true,
                _ => return None,
            }
        }
        Some(General::General(aspects))
    }

    /// Aspects when this is a general word
    pub fn aspects(self) -> Option<GeneralAspects> {
        match self {
            General::General(a) => Some(a),
            General::None => None,
        }
    }

    /// Label used in metrics
    pub fn label(self) -> String {
        match self {
            General::None => "none".to_string(),
            General::General(a) => {
                let mut parts = vec!["general"];
                for (on, name) in [
                    (a.separate, "sep"),
                    (a.related, "rel"),
                    (a.acting, "act"),
                    (a.knowledge, "know"),
                    (a.discussion, "disc"),
                    (a.development, "deve"),
                ] {
                    if on {
                        parts.push(name);
                    }
                }
                parts.join("+")
            }
        }
    }
}

/// Adverb class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adverb {
    /// General adverb
    General,
    /// Specific adverb
    Specific,
    /// Not a listed adverb
    None,
}

impl Adverb {
    /// Parse an adverb lexicon code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "general" | "alg" => Some(Adverb::General),
            "specific" | "spec" => Some(Adverb::Specific),
            _ => None,
        }
    }

    /// Label used in metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Adverb::General => "general",
            Adverb::Specific => "specific",
            Adverb::None => "none",
        }
    }
}

/// Abbreviation domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Afk {
    /// Government
    Overheid,
    /// Legal
    Juridisch,
    /// Education
    Onderwijs,
    /// Media
    Media,
    /// Generic
    Generiek,
    /// Other
    Overige,
    /// International
    Internationaal,
    /// Healthcare
    Zorg,
    /// Not an abbreviation
    None,
}

impl Afk {
    /// Every real domain, in metric order
    pub const DOMAINS: [Afk; 8] = [
        Afk::Overheid,
        Afk::Juridisch,
        Afk::Onderwijs,
        Afk::Media,
        Afk::Generiek,
        Afk::Overige,
        Afk::Internationaal,
        Afk::Zorg,
    ];

    /// Parse an abbreviation lexicon code
    pub fn from_code(code: &str) -> Option<Self> {
        let t = match code.trim().to_lowercase().as_str() {
            "overheid" => Afk::Overheid,
            "juridisch" => Afk::Juridisch,
            "onderwijs" => Afk::Onderwijs,
            "media" => Afk::Media,
            "generiek" => Afk::Generiek,
            "overige" => Afk::Overige,
            "internationaal" => Afk::Internationaal,
            "zorg" => Afk::Zorg,
            _ => return None,
        };
        Some(t)
    }

    /// Label used in metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Afk::Overheid => "overheid",
            Afk::Juridisch => "juridisch",
            Afk::Onderwijs => "onderwijs",
            Afk::Media => "media",
            Afk::Generiek => "generiek",
            Afk::Overige => "overige",
            Afk::Internationaal => "internationaal",
            Afk::Zorg => "zorg",
            Afk::None => "none",
        }
    }
}

/// Discourse connective class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Conn {
    /// Temporal
    Temporal,
    /// Enumerating within a phrase (reeks woordgroep)
    EnumPhrase,
    /// Enumerating clauses (reeks zin)
    EnumClause,
    /// Contrastive
    Contrastive,
    /// Comparative
    Comparative,
    /// Causal
    Causal,
    /// Not a connective
    None,
}

impl Conn {
    /// Classes tried in lookup order
    pub const CLASSES: [Conn; 6] = [
        Conn::Temporal,
        Conn::EnumPhrase,
        Conn::EnumClause,
        Conn::Contrastive,
        Conn::Comparative,
        Conn::Causal,
    ];

    /// Label used in metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Conn::Temporal => "temporal",
            Conn::EnumPhrase => "reeks_wg",
            Conn::EnumClause => "reeks_zin",
            Conn::Contrastive => "contrastive",
            Conn::Comparative => "comparative",
            Conn::Causal => "causal",
            Conn::None => "none",
        }
    }
}

/// Situation class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Situation {
    /// Time
    Time,
    /// Cause
    Causal,
    /// Space
    Space,
    /// Emotion
    Emotion,
    /// Not a situation word
    None,
}

impl Situation {
    /// Classes tried in single-word lookup order
    pub const CLASSES: [Situation; 4] = [
        Situation::Time,
        Situation::Causal,
        Situation::Space,
        Situation::Emotion,
    ];

    /// Classes tried in multi-word lookup order
    pub const MULTI_CLASSES: [Situation; 4] = [
        Situation::Time,
        Situation::Space,
        Situation::Causal,
        Situation::Emotion,
    ];

    /// Label used in metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Situation::Time => "time",
            Situation::Causal => "cause",
            Situation::Space => "space",
            Situation::Emotion => "emotion",
            Situation::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_aspects() {
        let general = General::from_code("sep+act").unwrap();
        let aspects = general.aspects().unwrap();
        assert!(aspects.separate);
        assert!(aspects.acting);
        assert!(!aspects.knowledge);
        assert_eq!(general.label(), "general+sep+act");

        let plain = General::from_code("gen").unwrap();
        assert_eq!(plain.aspects(), Some(GeneralAspects::default()));
        assert!(General::from_code("sep+bogus").is_none());
    }

    #[test]
    fn test_afk_codes() {
        assert_eq!(Afk::from_code("Zorg"), Some(Afk::Zorg));
        assert_eq!(Afk::from_code("onbekend"), None);
        assert_eq!(Afk::DOMAINS.len(), 8);
    }

    #[test]
    fn test_intensify_codes() {
        assert_eq!(Intensify::from_code("BVBW"), Some(Intensify::Bvbw));
        assert_eq!(Intensify::from_code("x"), None);
    }
}

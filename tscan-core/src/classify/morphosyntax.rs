//! CGN feature interpretation and word-local morphology rules

use crate::annotation::PosTag;
use crate::domain::{Cgn, Position, WordProp};

/// Words that negate a proposition on their own
const NEGATORS: &[&str] = &[
    "niet", "geen", "nooit", "niemand", "niets", "nergens", "noch", "nimmer", "geenszins",
    "nee", "allerminst",
];

/// Morphemes that negate the stem they attach to
const NEGATING_PREFIXES: &[&str] = &["on", "niet", "non", "anti"];
const NEGATING_SUFFIX: &str = "loos";

/// Properties read off the CGN feature list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CgnProps {
    /// Most specific word property
    pub prop: WordProp,
    /// Syntactic position for adjectives, participles and infinitives
    pub position: Position,
    /// Archaic case form (genitive or dative)
    pub archaic: bool,
}

impl CgnProps {
    /// Interpret a POS tag
    pub fn from_tag(tag: Cgn, pos: &PosTag) -> Self {
        let position = if pos.has("prenom") {
            Position::Prenominal
        } else if pos.has("nom") {
            Position::Nominal
        } else if pos.has("vrij") {
            Position::Free
        } else {
            Position::None
        };
        let archaic = pos.has("gen") || pos.has("dat");
        Self {
            prop: word_prop(tag, pos),
            position,
            archaic,
        }
    }
}

fn word_prop(tag: Cgn, pos: &PosTag) -> WordProp {
    match tag {
        Cgn::Let => WordProp::Punctuation,
        Cgn::N if pos.has("eigen") => WordProp::Name,
        Cgn::Spec if pos.has("deeleigen") => WordProp::Name,
        Cgn::Ww => {
            if pos.has("vd") {
                WordProp::PastParticiple
            } else if pos.has("od") {
                WordProp::PresentParticiple
            } else if pos.has("inf") {
                WordProp::Infinitive
            } else if pos.has("pv") {
                if pos.has("tgw") {
                    WordProp::PresentFinite
                } else if pos.has("verl") {
                    WordProp::PastFinite
                } else if pos.has("conj") {
                    WordProp::Subjunctive
                } else {
                    WordProp::JustAWord
                }
            } else {
                WordProp::JustAWord
            }
        }
        Cgn::Vnw => {
            if pos.has("aanw") {
                WordProp::Demonstrative
            } else if pos.has("pers") || pos.has("pr") || pos.has("bez") {
                person(pos)
            } else {
                WordProp::JustAWord
            }
        }
        _ => WordProp::JustAWord,
    }
}

fn person(pos: &PosTag) -> WordProp {
    for feature in &pos.features {
        match feature.as_bytes().first() {
            Some(b'1') => return WordProp::Pron1,
            Some(b'2') => return WordProp::Pron2,
            Some(b'3') => return WordProp::Pron3,
            _ => {}
        }
    }
    WordProp::JustAWord
}

/// The longest morpheme segmentation, lowercased
pub fn longest_reading(readings: &[Vec<String>]) -> Vec<String> {
    readings
        .iter()
        .max_by_key(|r| r.len())
        .map(|r| r.iter().map(|m| m.to_lowercase()).collect())
        .unwrap_or_default()
}

/// A negating word such as "niet" or "nooit"
pub fn is_prop_neg(l_word: &str) -> bool {
    NEGATORS.contains(&l_word)
}

/// A negation expressed inside the word, such as "onmogelijk" or "hopeloos"
pub fn is_morph_neg(morphemes: &[String]) -> bool {
    if morphemes.len() < 2 {
        return false;
    }
    let first = morphemes[0].as_str();
    NEGATING_PREFIXES.contains(&first)
        || morphemes.last().is_some_and(|m| m == NEGATING_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(head: &str, features: &[&str]) -> (Cgn, PosTag) {
        (
            Cgn::from_head(head),
            PosTag {
                head: head.to_string(),
                features: features.iter().map(|f| f.to_string()).collect(),
            },
        )
    }

    #[test]
    fn test_verb_props() {
        let (t, p) = tag("WW", &["pv", "verl", "ev"]);
        assert_eq!(CgnProps::from_tag(t, &p).prop, WordProp::PastFinite);

        let (t, p) = tag("WW", &["vd", "prenom", "zonder"]);
        let props = CgnProps::from_tag(t, &p);
        assert_eq!(props.prop, WordProp::PastParticiple);
        assert_eq!(props.position, Position::Prenominal);

        let (t, p) = tag("WW", &["inf", "nom", "zonder"]);
        let props = CgnProps::from_tag(t, &p);
        assert_eq!(props.prop, WordProp::Infinitive);
        assert_eq!(props.position, Position::Nominal);
    }

    #[test]
    fn test_pronoun_person() {
        let (t, p) = tag("VNW", &["pers", "pron", "nomin", "vol", "1", "ev"]);
        assert_eq!(CgnProps::from_tag(t, &p).prop, WordProp::Pron1);
        let (t, p) = tag("VNW", &["bez", "det", "stan", "vol", "2v", "ev"]);
        assert_eq!(CgnProps::from_tag(t, &p).prop, WordProp::Pron2);
        let (t, p) = tag("VNW", &["pers", "pron", "obl", "vol", "3", "ev", "masc"]);
        assert_eq!(CgnProps::from_tag(t, &p).prop, WordProp::Pron3);
        let (t, p) = tag("VNW", &["aanw", "det", "stan", "prenom"]);
        assert_eq!(CgnProps::from_tag(t, &p).prop, WordProp::Demonstrative);
    }

    #[test]
    fn test_names_and_archaic() {
        let (t, p) = tag("N", &["eigen", "ev", "basis", "gen"]);
        let props = CgnProps::from_tag(t, &p);
        assert_eq!(props.prop, WordProp::Name);
        assert!(props.archaic);
        let (t, p) = tag("SPEC", &["deeleigen"]);
        assert_eq!(CgnProps::from_tag(t, &p).prop, WordProp::Name);
    }

    #[test]
    fn test_negation() {
        assert!(is_prop_neg("nooit"));
        assert!(!is_prop_neg("altijd"));
        let m = |parts: &[&str]| parts.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(is_morph_neg(&m(&["on", "mogelijk"])));
        assert!(is_morph_neg(&m(&["hoop", "loos"])));
        assert!(!is_morph_neg(&m(&["on"])));
        assert!(!is_morph_neg(&m(&["fiets", "en"])));
    }

    #[test]
    fn test_longest_reading() {
        let readings = vec![
            vec!["Appeltaart".to_string()],
            vec!["appel".to_string(), "taart".to_string()],
        ];
        assert_eq!(longest_reading(&readings), vec!["appel", "taart"]);
        assert!(longest_reading(&[]).is_empty());
    }
}

//! Multi-word Resolver
//!
//! Sentence scans over already-classified words. Each scan tries the
//! longest window first at every start position and consumes the window on
//! a hit, so expressions never overlap within one scan.

use crate::classify::WordFact;
use crate::domain::{Afk, Cgn, Conn, Situation};
use crate::lexicon::LexiconStore;
use smallvec::SmallVec;
use tracing::trace;

/// Longest multi-word intensifier, in tokens
pub const MAX_INTENSIFY_SPAN: usize = 5;

/// Words that make a later "als" comparative ("evenmin ... als")
const COMPARATIVE_ALS: &[&str] = &["net", "evenmin", "zo", "zomin"];
/// Words that make a later "als" enumerative ("zowel ... als")
const ENUMERATIVE_ALS: &[&str] = &["zowel"];
/// Negations spread over several words
const LONG_NEGATIONS: &[&str] = &["afgezien van", "zomin als", "met uitzondering van"];

/// Sentence-level hits that do not belong to a single word
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiWordHits {
    /// Tokens covered by multi-word intensifiers
    pub intensify_tokens: u32,
    /// Preposition expressions
    pub prep_exprs: u32,
    /// Long negative expressions
    pub long_negations: u32,
    /// Domains of multi-word abbreviations
    pub afks: SmallVec<[Afk; 2]>,
}

fn window(words: &[WordFact], start: usize, len: usize, key: fn(&WordFact) -> &str) -> String {
    words[start..start + len]
        .iter()
        .map(key)
        .collect::<Vec<_>>()
        .join(" ")
}

fn surface(w: &WordFact) -> &str {
    &w.l_word
}

fn raw(w: &WordFact) -> &str {
    &w.text
}

fn lemma(w: &WordFact) -> &str {
    &w.lemma
}

/// Run every scan over one sentence
pub fn resolve_sentence(words: &mut [WordFact], lex: &LexiconStore) -> MultiWordHits {
    resolve_connectives(words, lex);
    resolve_situations(words, lex);
    MultiWordHits {
        intensify_tokens: resolve_intensify(words, lex),
        prep_exprs: resolve_prep_expressions(words, lex),
        long_negations: count_long_negations(words),
        afks: resolve_afks(words, lex),
    }
}

/// Disambiguate "als" at `index` when no multi-word connective covers it
fn resolve_als(words: &mut [WordFact], index: usize) {
    for j in (0..index).rev() {
        let conn = if COMPARATIVE_ALS.contains(&words[j].l_word.as_str()) {
            Conn::Comparative
        } else if ENUMERATIVE_ALS.contains(&words[j].l_word.as_str()) {
            Conn::EnumPhrase
        } else {
            continue;
        };
        words[j].conn = conn;
        words[index].conn = conn;
        return;
    }
    if words.get(index + 1).is_some_and(|w| w.tag == Cgn::Tw) {
        // "als eerste"
        words[index].conn = Conn::Comparative;
    } else if index == 0 {
        words[index].conn = Conn::Causal;
    } else if words[index].tag == Cgn::Vg {
        // "groter als"
        words[index].conn = if words[index - 1].tag == Cgn::Adj {
            Conn::Comparative
        } else {
            Conn::Causal
        };
    }
}

/// Multi-word connectives over lowercase surface forms, windows 3 then 2
///
/// An "als" that starts no expression falls back to [`resolve_als`].
pub fn resolve_connectives(words: &mut [WordFact], lex: &LexiconStore) {
    let mut i = 0;
    while i < words.len() {
        let hit = [3, 2].into_iter().find_map(|len| {
            if i + len > words.len() {
                return None;
            }
            let key = window(words, i, len, surface);
            match lex.multi_connective(&key) {
                Conn::None => None,
                conn => Some((len, key, conn)),
            }
        });
        let Some((len, key, conn)) = hit else {
            if words[i].l_word == "als" {
                resolve_als(words, i);
            }
            i += 1;
            continue;
        };
        trace!(expression = %key, class = conn.as_str(), "multi-word connective");
        for w in &mut words[i..i + len] {
            w.multi_conn = true;
            w.conn = Conn::None;
        }
        let last = &mut words[i + len - 1];
        last.conn = conn;
        last.conn_expression = Some(key);
        i += len;
    }
}

/// Multi-word situations over lowercase lemmas, windows 4, 3 then 2
pub fn resolve_situations(words: &mut [WordFact], lex: &LexiconStore) {
    let mut i = 0;
    while i < words.len() {
        let mut consumed = 1;
        for len in [4, 3, 2] {
            if i + len > words.len() {
                continue;
            }
            let key = window(words, i, len, lemma);
            let sit = lex.multi_situation(&key);
            if sit == Situation::None {
                continue;
            }
            for w in &mut words[i..i + len] {
                w.sit = Situation::None;
            }
            let last = &mut words[i + len - 1];
            last.sit = sit;
            last.sit_expression = Some(key);
            consumed = len;
            break;
        }
        i += consumed;
    }
}

/// Greedy multi-word intensifiers; returns the number of covered tokens
pub fn resolve_intensify(words: &[WordFact], lex: &LexiconStore) -> u32 {
    let mut covered = 0;
    let mut i = 0;
    while i < words.len() {
        let mut key = words[i].l_word.clone();
        let mut consumed = 1;
        for j in 1..MAX_INTENSIFY_SPAN {
            let Some(next) = words.get(i + j) else {
                break;
            };
            key.push(' ');
            key.push_str(&next.l_word);
            if lex.is_intensifier(&key) {
                covered += (j + 1) as u32;
                consumed = j + 1;
                break;
            }
        }
        i += consumed;
    }
    covered
}

/// Preposition expressions, windows 4, 3 then 2
pub fn resolve_prep_expressions(words: &[WordFact], lex: &LexiconStore) -> u32 {
    let mut found = 0;
    let mut i = 0;
    while i < words.len() {
        let hit = [4, 3, 2].into_iter().find(|&len| {
            i + len <= words.len() && lex.is_prep_expression(len, &window(words, i, len, surface))
        });
        match hit {
            Some(len) => {
                found += 1;
                i += len;
            }
            None => i += 1,
        }
    }
    found
}

/// Multi-word abbreviations over raw text, windows 3 then 2
pub fn resolve_afks(words: &[WordFact], lex: &LexiconStore) -> SmallVec<[Afk; 2]> {
    let mut hits = SmallVec::new();
    let mut i = 0;
    while i < words.len() {
        let hit = [3, 2].into_iter().find_map(|len| {
            if i + len > words.len() {
                return None;
            }
            match lex.abbreviation(&window(words, i, len, raw)) {
                Afk::None => None,
                afk => Some((len, afk)),
            }
        });
        match hit {
            Some((len, afk)) => {
                hits.push(afk);
                i += len;
            }
            None => i += 1,
        }
    }
    hits
}

/// Long negative expressions, counted at every start position
pub fn count_long_negations(words: &[WordFact]) -> u32 {
    let mut found = 0;
    for i in 0..words.len() {
        for len in [2, 3] {
            if i + len <= words.len() && LONG_NEGATIONS.contains(&window(words, i, len, surface).as_str()) {
                found += 1;
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{AnnotatedWord, PosTag};
    use crate::classify::classify_word;
    use crate::lexicon::LexiconKind;
    use std::io::Cursor;

    fn sentence(tokens: &[(&str, &str)], lex: &LexiconStore) -> Vec<WordFact> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, (text, head))| {
                let w = AnnotatedWord {
                    text: text.to_string(),
                    pos: Some(PosTag {
                        head: head.to_string(),
                        features: vec![],
                    }),
                    lemma: text.to_lowercase(),
                    ..Default::default()
                };
                classify_word(&w, i, None, None, lex).unwrap()
            })
            .collect()
    }

    fn lexicon() -> LexiconStore {
        LexiconStore::builder()
            .read(
                LexiconKind::Connectives(Conn::Temporal),
                "temp",
                Cursor::new("a b c\n"),
            )
            .unwrap()
            .read(
                LexiconKind::Connectives(Conn::Causal),
                "caus",
                Cursor::new("a b\nals gevolg van\nomdat\tVG\n"),
            )
            .unwrap()
            .read(
                LexiconKind::Situations(Situation::Time),
                "tijd",
                Cursor::new("op het moment dat\nna afloop\n"),
            )
            .unwrap()
            .read(
                LexiconKind::Situations(Situation::Causal),
                "oorzaak",
                Cursor::new("op het moment\n"),
            )
            .unwrap()
            .read(LexiconKind::Situations(Situation::Space), "ruimte", Cursor::new("op het\n"))
            .unwrap()
            .read(LexiconKind::Intensify, "int", Cursor::new("heel erg\tcombi\nerg\tbw\n"))
            .unwrap()
            .read(
                LexiconKind::PrepExpressions,
                "vz",
                Cursor::new("in plaats\nin plaats van\nvan tevoren\n"),
            )
            .unwrap()
            .read(LexiconKind::Abbreviations, "afk", Cursor::new("t.a.v. de\tgeneriek\n"))
            .unwrap()
            .build()
    }

    #[test]
    fn test_longest_connective_wins() {
        let lex = lexicon();
        let mut words = sentence(&[("a", "BW"), ("b", "BW"), ("c", "BW"), ("d", "N")], &lex);
        resolve_connectives(&mut words, &lex);
        // "a b" alone would be causal
        assert_eq!(words[2].conn, Conn::Temporal);
        assert_eq!(words[2].conn_expression.as_deref(), Some("a b c"));
        assert_eq!(words[0].conn, Conn::None);
        assert_eq!(words[1].conn, Conn::None);
        assert!(words[..3].iter().all(|w| w.multi_conn));
        assert!(!words[3].multi_conn);
    }

    #[test]
    fn test_consumed_tokens_not_retagged() {
        let lex = lexicon();
        let mut words = sentence(&[("a", "BW"), ("b", "BW"), ("a", "BW"), ("b", "BW")], &lex);
        resolve_connectives(&mut words, &lex);
        assert_eq!(words[1].conn, Conn::Causal);
        assert_eq!(words[3].conn, Conn::Causal);
        assert_eq!(words[2].conn, Conn::None);
    }

    #[test]
    fn test_als_inside_expression_keeps_expression() {
        let lex = lexicon();
        let mut words = sentence(
            &[("Hij", "VNW"), ("viel", "WW"), ("als", "VG"), ("gevolg", "N"), ("van", "VZ"), ("ijs", "N")],
            &lex,
        );
        resolve_connectives(&mut words, &lex);
        assert_eq!(words[4].conn, Conn::Causal);
        assert_eq!(words[4].conn_expression.as_deref(), Some("als gevolg van"));
        assert_eq!(words[2].conn, Conn::None);
        assert!(words[2..5].iter().all(|w| w.multi_conn));
    }

    #[test]
    fn test_als_comparative_lookback() {
        let lex = lexicon();
        let mut words = sentence(
            &[("Hij", "VNW"), ("is", "WW"), ("evenmin", "BW"), ("rijk", "ADJ"), ("als", "VG"), ("zij", "VNW")],
            &lex,
        );
        resolve_connectives(&mut words, &lex);
        assert_eq!(words[2].conn, Conn::Comparative);
        assert_eq!(words[4].conn, Conn::Comparative);
    }

    #[test]
    fn test_als_enumerative_and_numeral() {
        let lex = lexicon();
        let mut words = sentence(&[("zowel", "VG"), ("jij", "VNW"), ("als", "VG"), ("ik", "VNW")], &lex);
        resolve_connectives(&mut words, &lex);
        assert_eq!(words[0].conn, Conn::EnumPhrase);
        assert_eq!(words[2].conn, Conn::EnumPhrase);

        let mut words = sentence(&[("Hij", "VNW"), ("kwam", "WW"), ("als", "VZ"), ("eerste", "TW")], &lex);
        resolve_connectives(&mut words, &lex);
        assert_eq!(words[2].conn, Conn::Comparative);
    }

    #[test]
    fn test_als_conjunction_fallback() {
        let lex = lexicon();
        let mut words = sentence(&[("groter", "ADJ"), ("als", "VG"), ("een", "LID"), ("huis", "N")], &lex);
        resolve_connectives(&mut words, &lex);
        assert_eq!(words[1].conn, Conn::Comparative);

        let mut words = sentence(&[("Als", "VG"), ("het", "VNW"), ("regent", "WW")], &lex);
        resolve_connectives(&mut words, &lex);
        assert_eq!(words[0].conn, Conn::Causal);

        let mut words = sentence(&[("ik", "VNW"), ("kom", "WW"), ("als", "VG"), ("het", "VNW")], &lex);
        resolve_connectives(&mut words, &lex);
        assert_eq!(words[2].conn, Conn::Causal);
    }

    #[test]
    fn test_situation_four_word_window() {
        let lex = lexicon();
        let mut words = sentence(
            &[("op", "VZ"), ("het", "LID"), ("moment", "N"), ("dat", "VG"), ("hij", "VNW")],
            &lex,
        );
        resolve_situations(&mut words, &lex);
        assert_eq!(words[3].sit, Situation::Time);
        assert_eq!(words[3].sit_expression.as_deref(), Some("op het moment dat"));
        assert!(words[..3].iter().all(|w| w.sit == Situation::None));
    }

    #[test]
    fn test_situation_windows_shrink_in_order() {
        let lex = lexicon();
        let mut words = sentence(&[("op", "VZ"), ("het", "LID"), ("moment", "N"), ("zelf", "BW")], &lex);
        resolve_situations(&mut words, &lex);
        assert_eq!(words[2].sit, Situation::Causal);
        assert_eq!(words[2].sit_expression.as_deref(), Some("op het moment"));
        assert_eq!(words[1].sit, Situation::None);

        let mut words = sentence(&[("op", "VZ"), ("het", "LID"), ("dak", "N")], &lex);
        resolve_situations(&mut words, &lex);
        assert_eq!(words[1].sit, Situation::Space);
        assert_eq!(words[1].sit_expression.as_deref(), Some("op het"));
        assert_eq!(words[0].sit, Situation::None);
        assert_eq!(words[2].sit_expression, None);
    }

    #[test]
    fn test_intensify_span_credit() {
        let lex = lexicon();
        let words = sentence(&[("Heel", "BW"), ("erg", "BW"), ("mooi", "ADJ")], &lex);
        assert_eq!(resolve_intensify(&words, &lex), 2);
        let words = sentence(&[("mooi", "ADJ")], &lex);
        assert_eq!(resolve_intensify(&words, &lex), 0);
    }

    #[test]
    fn test_prep_expressions_prefer_longest() {
        let lex = lexicon();
        let words = sentence(&[("in", "VZ"), ("plaats", "N"), ("van", "VZ"), ("koffie", "N")], &lex);
        assert_eq!(resolve_prep_expressions(&words, &lex), 1);

        // shortest-first would find "in plaats" and "van tevoren"
        let words = sentence(&[("in", "VZ"), ("plaats", "N"), ("van", "VZ"), ("tevoren", "BW")], &lex);
        assert_eq!(resolve_prep_expressions(&words, &lex), 1);
    }

    #[test]
    fn test_afks_and_long_negations() {
        let lex = lexicon();
        let words = sentence(
            &[("t.a.v.", "SPEC"), ("de", "LID"), ("afgezien", "WW"), ("van", "VZ"), ("alles", "VNW")],
            &lex,
        );
        assert_eq!(resolve_afks(&words, &lex).as_slice(), &[Afk::Generiek]);
        assert_eq!(count_long_negations(&words), 1);
    }
}

//! Property-based tests for tree merging, lexical diversity and frequency
//! lookups

use proptest::prelude::*;
use tscan_core::annotation::{
    AnnotatedSentence, AnnotatedWord, LmScores, ParseOutcome, PosTag, SentenceParse, WordParse,
};
use tscan_core::domain::{DistKind, Monoid, TopTier, VerbForm};
use tscan_core::lexicon::freq_log;
use tscan_core::mtld::{average_mtld, calculate_mtld};
use tscan_core::overlap::OverlapBuffer;
use tscan_core::stats::build_sentence;
use tscan_core::{LexiconStore, Totals};

const VOCAB: &[(&str, &str, &[&str])] = &[
    ("de", "LID", &["bep"]),
    ("kat", "N", &["soort", "ev"]),
    ("Jan", "N", &["eigen", "ev"]),
    ("loopt", "WW", &["pv", "tgw", "met-t"]),
    ("liep", "WW", &["pv", "verl", "ev"]),
    ("gelopen", "WW", &["vd", "vrij"]),
    ("mooie", "ADJ", &["prenom", "basis"]),
    ("niet", "BW", &[]),
    ("hij", "VNW", &["pers", "pron", "3", "ev"]),
    ("omdat", "VG", &["onder"]),
    (".", "LET", &[]),
    ("?", "LET", &[]),
];

fn word(i: usize) -> AnnotatedWord {
    let (text, head, features) = VOCAB[i];
    AnnotatedWord {
        text: text.to_string(),
        pos: Some(PosTag {
            head: head.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }),
        lemma: text.to_lowercase(),
        ..Default::default()
    }
}

fn parse_for(len: usize, dist: u32, clauses: u32, d_level: u32) -> SentenceParse {
    SentenceParse {
        words: (0..len)
            .map(|i| WordParse {
                verb_form: if i % 3 == 0 { VerbForm::Head } else { VerbForm::NoVerb },
                distances: vec![(DistKind::SubVerb, dist + i as u32)],
                ..Default::default()
            })
            .collect(),
        d_level: Some(d_level),
        smain: clauses,
        clause: clauses,
        ..Default::default()
    }
}

/// Totals of one random sentence; logprobs are whole numbers so float sums
/// stay exact under regrouping
fn sentence_totals() -> impl Strategy<Value = Totals> {
    (
        prop::collection::vec(0..VOCAB.len(), 1..8),
        0u8..3,
        1u32..6,
        0u32..3,
        0u32..7,
        prop::option::of(-6i32..0),
    )
        .prop_map(|(ids, outcome, dist, clauses, d_level, lm)| {
            let sentence = AnnotatedSentence {
                words: ids.iter().map(|&i| word(i)).collect(),
                ..Default::default()
            };
            let outcome = match outcome {
                0 => ParseOutcome::NotRequested,
                1 => ParseOutcome::Failed("timeout".into()),
                _ => ParseOutcome::Parsed(parse_for(ids.len(), dist, clauses, d_level)),
            };
            let lm = lm.map(|v| LmScores {
                word_logprobs: vec![f64::from(v); ids.len()],
                avg_prob10: f64::from(v),
                entropy: f64::from(-v),
                perplexity: f64::from(-v * 2),
            });
            let lex = LexiconStore::default();
            build_sentence(
                0,
                &sentence,
                &outcome,
                lm.as_ref(),
                &OverlapBuffer::default(),
                &lex,
            )
            .unwrap()
            .totals
        })
}

proptest! {
    #[test]
    fn merge_is_associative(a in sentence_totals(), b in sentence_totals(), c in sentence_totals()) {
        let left = a.combine(&b).combine(&c);
        let right = a.combine(&b.combine(&c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn identity_is_neutral(a in sentence_totals()) {
        prop_assert_eq!(a.combine(&Totals::identity()), a.clone());
        prop_assert_eq!(Totals::identity().combine(&a), a);
    }

    #[test]
    fn merge_adds_word_counts(a in sentence_totals(), b in sentence_totals()) {
        let merged = a.combine(&b);
        prop_assert_eq!(merged.counts.words, a.counts.words + b.counts.words);
        prop_assert_eq!(merged.counts.sentences, a.counts.sentences + b.counts.sentences);
    }

    #[test]
    fn corrected_clauses_never_zero(a in sentence_totals()) {
        prop_assert!(a.counts.corrected_clauses() >= 1);
    }

    #[test]
    fn mtld_average_is_mean_of_both_directions(tokens in prop::collection::vec(0u8..6, 0..60)) {
        let forward = calculate_mtld(tokens.iter(), 0.72);
        let backward = calculate_mtld(tokens.iter().rev(), 0.72);
        let avg = average_mtld(&tokens, 0.72);
        prop_assert!((avg - (forward + backward) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn mtld_is_non_negative(tokens in prop::collection::vec(0u8..20, 0..80)) {
        prop_assert!(average_mtld(&tokens, 0.72) >= 0.0);
    }

    #[test]
    fn tiers_nest(rank in 1usize..=20000) {
        let tier = TopTier::from_rank(rank);
        for bound in TopTier::TIERS {
            let size = bound.size().unwrap() as usize;
            prop_assert_eq!(tier.within(bound), rank <= size);
        }
        let flags = tier.memberships();
        prop_assert!(flags.windows(2).all(|w| !w[0] || w[1]));
        prop_assert!(flags[5]);
    }

    #[test]
    fn freq_log_grows_with_count(a in 0u64..1_000_000, b in 0u64..1_000_000, total in 1u64..1_000_000_000_000) {
        prop_assume!(a != b);
        let (low, high) = (a.min(b), a.max(b));
        prop_assert!(freq_log(low, total) < freq_log(high, total));
    }

    #[test]
    fn freq_log_shrinks_with_total(count in 0u64..1_000_000, a in 1u64..1_000_000_000, b in 1u64..1_000_000_000) {
        prop_assume!(a != b);
        let (small, large) = (a.min(b), a.max(b));
        prop_assert!(freq_log(count, small) > freq_log(count, large));
        prop_assert!(freq_log(count, large).is_finite());
    }
}

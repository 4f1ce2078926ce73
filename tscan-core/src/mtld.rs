//! Lexical Diversity Engine
//!
//! MTLD (measure of textual lexical diversity) splits a token sequence into
//! factors: a factor closes whenever the running type-token ratio drops to
//! the threshold. The score is the token count divided by the number of
//! factors, averaged over a forward and a backward pass.

use std::collections::HashSet;
use std::hash::Hash;

/// Type-token ratio, or `None` for an empty sequence
pub fn ttr(unique: usize, tokens: usize) -> Option<f64> {
    (tokens > 0).then(|| unique as f64 / tokens as f64)
}

/// One directional MTLD pass
///
/// An empty sequence scores 0. A sequence that never closes a factor and
/// leaves no partial factor (a single token) counts as one factor.
pub fn calculate_mtld<T, I>(tokens: I, threshold: f64) -> f64
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut total = 0usize;
    let mut count = 0usize;
    let mut seen = HashSet::new();
    let mut ratio = 1.0;
    let mut factor = 0.0;

    for token in tokens {
        total += 1;
        count += 1;
        seen.insert(token);
        ratio = seen.len() as f64 / count as f64;
        if ratio <= threshold {
            count = 0;
            ratio = 1.0;
            seen.clear();
            factor += 1.0;
        }
    }
    if count > 0 {
        factor += (1.0 - ratio) / (1.0 - threshold);
    }
    if factor == 0.0 {
        factor = 1.0;
    }
    total as f64 / factor
}

/// Mean of the forward and the reversed MTLD pass
pub fn average_mtld<T>(tokens: &[T], threshold: f64) -> f64
where
    T: Eq + Hash,
{
    let forward = calculate_mtld(tokens.iter(), threshold);
    let backward = calculate_mtld(tokens.iter().rev(), threshold);
    (forward + backward) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.72;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calculate_mtld(Vec::<&str>::new(), THRESHOLD), 0.0);
        assert_eq!(average_mtld::<&str>(&[], THRESHOLD), 0.0);
    }

    #[test]
    fn test_single_token_is_one() {
        assert_eq!(calculate_mtld(["fiets"], THRESHOLD), 1.0);
    }

    #[test]
    fn test_repetition_closes_factors() {
        // a a: ratio 0.5 closes a factor after two tokens, twice
        let tokens = ["a", "a", "a", "a"];
        assert_eq!(calculate_mtld(tokens, THRESHOLD), 2.0);
    }

    #[test]
    fn test_partial_factor() {
        // a b c a: ratio 0.75 stays above the threshold
        let tokens = ["a", "b", "c", "a"];
        let expected = 4.0 / ((1.0 - 0.75) / (1.0 - THRESHOLD));
        assert!((calculate_mtld(tokens, THRESHOLD) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_all_distinct_tokens() {
        // ratio stays 1.0; no factor closes and the partial adds nothing
        let tokens = ["a", "b", "c", "d", "e"];
        assert_eq!(calculate_mtld(tokens, THRESHOLD), 5.0);
    }

    #[test]
    fn test_ttr() {
        assert_eq!(ttr(0, 0), None);
        assert_eq!(ttr(3, 4), Some(0.75));
    }
}

//! Frequency-rank tiers of the top-20000 lexicon

use serde::{Deserialize, Serialize};

/// Rank bucket of a word in the top-frequency lexicon
///
/// Tiers nest: a word in the 1000 tier is also counted in every looser
/// tier. Use [`TopTier::within`] rather than comparing variants directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TopTier {
    /// Rank 1..=1000
    Top1000,
    /// Rank 1001..=2000
    Top2000,
    /// Rank 2001..=3000
    Top3000,
    /// Rank 3001..=5000
    Top5000,
    /// Rank 5001..=10000
    Top10000,
    /// Rank 10001..=20000
    Top20000,
    /// Not in the lexicon
    NotFound,
}

impl TopTier {
    /// The six real tiers, tightest first
    pub const TIERS: [TopTier; 6] = [
        TopTier::Top1000,
        TopTier::Top2000,
        TopTier::Top3000,
        TopTier::Top5000,
        TopTier::Top10000,
        TopTier::Top20000,
    ];

    /// Tier for a one-based rank
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0..=1000 => TopTier::Top1000,
            1001..=2000 => TopTier::Top2000,
            2001..=3000 => TopTier::Top3000,
            3001..=5000 => TopTier::Top5000,
            5001..=10000 => TopTier::Top10000,
            _ => TopTier::Top20000,
        }
    }

    /// True when a word in this tier also belongs to `bound`
    pub fn within(self, bound: TopTier) -> bool {
        self != TopTier::NotFound && bound != TopTier::NotFound && self <= bound
    }

    /// Cumulative membership flags for the six tiers, tightest first
    pub fn memberships(self) -> [bool; 6] {
        Self::TIERS.map(|t| self.within(t))
    }

    /// Number used in metric names (`top1000` etc.)
    pub fn size(self) -> Option<u32> {
        match self {
            TopTier::Top1000 => Some(1000),
            TopTier::Top2000 => Some(2000),
            TopTier::Top3000 => Some(3000),
            TopTier::Top5000 => Some(5000),
            TopTier::Top10000 => Some(10000),
            TopTier::Top20000 => Some(20000),
            TopTier::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rank_boundaries() {
        assert_eq!(TopTier::from_rank(1), TopTier::Top1000);
        assert_eq!(TopTier::from_rank(1000), TopTier::Top1000);
        assert_eq!(TopTier::from_rank(1001), TopTier::Top2000);
        assert_eq!(TopTier::from_rank(5000), TopTier::Top5000);
        assert_eq!(TopTier::from_rank(10001), TopTier::Top20000);
        assert_eq!(TopTier::from_rank(25000), TopTier::Top20000);
    }

    #[test]
    fn test_top1000_is_in_every_tier() {
        assert_eq!(TopTier::Top1000.memberships(), [true; 6]);
        assert_eq!(
            TopTier::Top5000.memberships(),
            [false, false, false, true, true, true]
        );
        assert_eq!(TopTier::NotFound.memberships(), [false; 6]);
    }

    #[test]
    fn test_within_is_monotone() {
        for tier in TopTier::TIERS {
            let flags = tier.memberships();
            // once a tier is reached, every looser tier follows
            let first = flags.iter().position(|&b| b).unwrap();
            assert!(flags[first..].iter().all(|&b| b));
        }
    }
}

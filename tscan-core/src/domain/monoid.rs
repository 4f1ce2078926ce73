//! Monoid trait behind the aggregation tree
//!
//! Every mergeable part of a statistics node is a monoid: merging is
//! associative and has an identity, so sibling totals can be combined in
//! any grouping with the same result.

use smallvec::SmallVec;

/// An associative combine with an identity element
///
/// - Associativity: (a ⊕ b) ⊕ c = a ⊕ (b ⊕ c)
/// - Identity: a ⊕ identity = identity ⊕ a = a
pub trait Monoid: Clone + Send + Sync {
    /// Returns the identity element
    fn identity() -> Self;

    /// Folds `other` into `self`
    fn absorb(&mut self, other: &Self);

    /// Combines two elements into a new one
    fn combine(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.absorb(other);
        out
    }
}

/// Extension trait for monoids that can be reduced from collections
pub trait MonoidReduce: Monoid {
    /// Reduces a collection of monoid elements to a single result
    ///
    /// Uses tree reduction to keep the combine depth logarithmic.
    fn reduce<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut items: SmallVec<[Self; 16]> = iter.into_iter().collect();

        while items.len() > 1 {
            let mut next_level = SmallVec::<[Self; 16]>::new();
            let mut pairs = items.into_iter();
            while let Some(mut left) = pairs.next() {
                if let Some(right) = pairs.next() {
                    left.absorb(&right);
                }
                next_level.push(left);
            }
            items = next_level;
        }

        items.into_iter().next().unwrap_or_else(Self::identity)
    }
}

impl<T: Monoid> MonoidReduce for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Concat(Vec<u8>);

    impl Monoid for Concat {
        fn identity() -> Self {
            Concat(Vec::new())
        }

        fn absorb(&mut self, other: &Self) {
            self.0.extend_from_slice(&other.0);
        }
    }

    #[test]
    fn test_identity_property() {
        let a = Concat(vec![4, 2]);
        let id = Concat::identity();

        assert_eq!(a.combine(&id), a);
        assert_eq!(id.combine(&a), a);
    }

    #[test]
    fn test_reduce_empty() {
        let empty: Vec<Concat> = vec![];
        assert_eq!(Concat::reduce(empty), Concat::identity());
    }

    #[test]
    fn test_reduce_keeps_order() {
        let values: Vec<Concat> = (0..21).map(|i| Concat(vec![i])).collect();
        let result = Concat::reduce(values);
        assert_eq!(result, Concat((0..21).collect()));
    }
}

//! Additive building blocks of the statistics totals
//!
//! Everything a node accumulates is a counter, a fixed array of counters, a
//! keyed tally, an occurrence list or an optional sum. All of them merge by
//! plain addition, which keeps the merge associative.

use crate::domain::Measure;
use std::collections::BTreeMap;

/// Field-wise addition
pub trait Additive {
    /// Add `other` into `self`
    fn add_from(&mut self, other: &Self);
}

impl Additive for u32 {
    fn add_from(&mut self, other: &Self) {
        *self += *other;
    }
}

impl<const N: usize> Additive for [u32; N] {
    fn add_from(&mut self, other: &Self) {
        for (mine, theirs) in self.iter_mut().zip(other) {
            *mine += *theirs;
        }
    }
}

impl Additive for Measure {
    fn add_from(&mut self, other: &Self) {
        self.absorb(*other);
    }
}

impl<T: Clone> Additive for Vec<T> {
    fn add_from(&mut self, other: &Self) {
        self.extend_from_slice(other);
    }
}

impl<K: Ord + Clone, V: Additive + Clone> Additive for BTreeMap<K, V> {
    fn add_from(&mut self, other: &Self) {
        for (key, value) in other {
            match self.get_mut(key) {
                Some(mine) => mine.add_from(value),
                None => {
                    self.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// Occurrence counts keyed by category or form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K: Ord>(BTreeMap<K, u32>);

impl<K: Ord> Default for Tally<K> {
    fn default() -> Self {
        Tally(BTreeMap::new())
    }
}

impl<K: Ord + Clone> Tally<K> {
    /// Count one occurrence of `key`
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Count `n` occurrences of `key`
    pub fn add_n(&mut self, key: K, n: u32) {
        if n > 0 {
            *self.0.entry(key).or_insert(0) += n;
        }
    }

    /// Occurrences of `key`
    pub fn get(&self, key: &K) -> u32 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Number of distinct keys matching `pred`
    pub fn distinct_where(&self, pred: impl Fn(&K) -> bool) -> usize {
        self.0.keys().filter(|k| pred(k)).count()
    }

    /// Total occurrences of keys matching `pred`
    pub fn sum_where(&self, pred: impl Fn(&K) -> bool) -> u32 {
        self.0.iter().filter(|(k, _)| pred(k)).map(|(_, n)| n).sum()
    }

    /// All occurrences
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Keys and counts in key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.0.iter().map(|(k, n)| (k, *n))
    }
}

impl<K: Ord + Clone> Additive for Tally<K> {
    fn add_from(&mut self, other: &Self) {
        self.0.add_from(&other.0);
    }
}

/// Declare a struct whose fields are all [`Additive`], plus its field-wise impl
macro_rules! additive_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::stats::tally::Additive for $name {
            fn add_from(&mut self, other: &Self) {
                $(
                    $crate::stats::tally::Additive::add_from(&mut self.$field, &other.$field);
                )*
            }
        }
    };
}

pub(crate) use additive_struct;

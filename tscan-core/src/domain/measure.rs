//! Optional numeric accumulator
//!
//! Values coming from external services or averaging may be missing.
//! [`Measure`] keeps "no data" apart from zero and implements the single
//! adopt-or-add rule used when sums are merged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A running sum that may hold no data yet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measure(Option<f64>);

impl Measure {
    /// No data
    pub const NONE: Measure = Measure(None);

    /// Wrap a value; NaN and infinities become "no data"
    pub fn of(value: f64) -> Self {
        if value.is_finite() {
            Measure(Some(value))
        } else {
            Measure(None)
        }
    }

    /// Wrap an optional value with the same finiteness guard
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Measure::NONE, Measure::of)
    }

    /// The value, if any
    pub fn value(self) -> Option<f64> {
        self.0
    }

    /// The value, or zero
    pub fn or_zero(self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    /// True when no data has been absorbed
    pub fn is_none(self) -> bool {
        self.0.is_none()
    }

    /// Adopt the other value if this one is empty, otherwise add
    pub fn absorb(&mut self, other: Measure) {
        if let Some(v) = other.0 {
            self.0 = Some(self.0.map_or(v, |mine| mine + v));
        }
    }

    /// Add a plain value with the same rules
    pub fn add(&mut self, value: f64) {
        self.absorb(Measure::of(value));
    }

    /// Mean over `count` items, or no data when either side is empty
    pub fn mean(self, count: u32) -> Measure {
        match self.0 {
            Some(sum) if count > 0 && sum != 0.0 => Measure(Some(sum / f64::from(count))),
            _ => Measure::NONE,
        }
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::of(value)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("NA"),
        }
    }
}

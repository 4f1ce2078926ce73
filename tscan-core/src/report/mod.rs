//! Report Projection
//!
//! Turns a finished statistics tree into CSV tables and metric lists.
//! Ratios whose denominator is zero come out as `NA`.

pub mod blocks;
pub mod csv;
pub mod metrics;
pub mod words;

pub use csv::{document_table, paragraph_table, sentence_table, CsvTable};
pub use metrics::{metric_tree, Metric, MetricNode};
pub use words::word_table;

use crate::domain::Measure;
use std::fmt;

/// One CSV cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Undefined value
    Na,
    /// Integer
    Int(i64),
    /// Real number
    Num(f64),
    /// Quoted text
    Text(String),
    /// Unquoted text
    Raw(String),
}

impl Cell {
    /// A real number, `NA` when not finite
    pub fn num(value: f64) -> Cell {
        if value.is_finite() {
            Cell::Num(value)
        } else {
            Cell::Na
        }
    }

    /// An optional real number
    pub fn opt(value: Option<f64>) -> Cell {
        value.map_or(Cell::Na, Cell::num)
    }

    /// A count
    pub fn count(value: u32) -> Cell {
        Cell::Int(i64::from(value))
    }
}

impl From<Measure> for Cell {
    fn from(m: Measure) -> Self {
        Cell::opt(m.value())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Na => f.write_str("NA"),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Num(v) => f.write_str(&format_number(*v)),
            Cell::Text(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            Cell::Raw(s) => f.write_str(s),
        }
    }
}

/// `a / b`, or `NA` when `b` is zero
pub fn proportion(a: impl Into<f64>, b: impl Into<f64>) -> Cell {
    let b = b.into();
    if b == 0.0 {
        Cell::Na
    } else {
        Cell::num(a.into() / b)
    }
}

/// `a / b * 1000`, or `NA` when `b` is zero
pub fn density(a: impl Into<f64>, b: impl Into<f64>) -> Cell {
    let b = b.into();
    if b == 0.0 {
        Cell::Na
    } else {
        Cell::num(a.into() / b * 1000.0)
    }
}

/// Optional sum over `b`, `NA` when either is missing or zero
pub fn mean_of(sum: Measure, b: u32) -> Cell {
    match sum.value() {
        Some(v) if b > 0 => Cell::num(v / f64::from(b)),
        _ => Cell::Na,
    }
}

/// Six significant digits, trailing zeros dropped, exponent form below 1e-4
/// and from 1e6 on
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return "NA".to_string();
    }
    let sci = format!("{value:.5e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs());
    }
    let decimals = (5 - exp).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

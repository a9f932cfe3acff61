//! IEC 60063 preferred-number series (E3 … E96).
//!
//! Tables hold the mantissas of one decade scaled to 10..100 (E3 … E24) or
//! 100..1000 (E48, E96) so the entries are exact integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::QuizError;

const E3: [u16; 3] = [10, 22, 47];
const E6: [u16; 6] = [10, 15, 22, 33, 47, 68];
const E12: [u16; 12] = [10, 12, 15, 18, 22, 27, 33, 39, 47, 56, 68, 82];
const E24: [u16; 24] = [
    10, 11, 12, 13, 15, 16, 18, 20, 22, 24, 27, 30, 33, 36, 39, 43, 47, 51, 56, 62, 68, 75, 82, 91,
];
const E48: [u16; 48] = [
    100, 105, 110, 115, 121, 127, 133, 140, 147, 154, 162, 169, 178, 187, 196, 205, 215, 226, 237,
    249, 261, 274, 287, 301, 316, 332, 348, 365, 383, 402, 422, 442, 464, 487, 511, 536, 562, 590,
    619, 649, 681, 715, 750, 787, 825, 866, 909, 953,
];
const E96: [u16; 96] = [
    100, 102, 105, 107, 110, 113, 115, 118, 121, 124, 127, 130, 133, 137, 140, 143, 147, 150, 154,
    158, 162, 165, 169, 174, 178, 182, 187, 191, 196, 200, 205, 210, 215, 221, 226, 232, 237, 243,
    249, 255, 261, 267, 274, 280, 287, 294, 301, 309, 316, 324, 332, 340, 348, 357, 365, 374, 383,
    392, 402, 412, 422, 432, 442, 453, 464, 475, 487, 499, 511, 523, 536, 549, 562, 576, 590, 604,
    619, 634, 649, 665, 681, 698, 715, 732, 750, 768, 787, 806, 825, 845, 866, 887, 909, 931, 953,
    976,
];

/// Relative slack used when testing series membership of computed values.
const MEMBERSHIP_EPSILON: f64 = 1e-9;

/// A preferred-value series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ESeries {
    E3,
    #[default]
    E6,
    E12,
    E24,
    E48,
    E96,
}

impl ESeries {
    fn table(self) -> &'static [u16] {
        match self {
            ESeries::E3 => &E3,
            ESeries::E6 => &E6,
            ESeries::E12 => &E12,
            ESeries::E24 => &E24,
            ESeries::E48 => &E48,
            ESeries::E96 => &E96,
        }
    }

    /// Decimal places of the table entries' mantissas.
    fn table_digits(self) -> i32 {
        match self {
            ESeries::E48 | ESeries::E96 => 2,
            _ => 1,
        }
    }

    /// Number of values per decade.
    pub fn len(self) -> usize {
        self.table().len()
    }

    /// Mantissas of one decade, in `[1, 10)`.
    pub fn values(self) -> Vec<f64> {
        let digits = self.table_digits();
        self.table().iter().map(|&v| member(v, digits, 0)).collect()
    }

    /// Series members from one decade below `value` through one decade above,
    /// ascending.
    fn candidates(self, value: f64) -> Vec<f64> {
        let decade = value.log10().floor() as i32;
        let digits = self.table_digits();
        let table = self.table();
        let mut out = Vec::with_capacity(table.len() * 3);
        for exp in (decade - 1)..=(decade + 1) {
            out.extend(table.iter().map(|&v| member(v, digits, exp)));
        }
        out
    }

    /// Member of the series closest to `value` by absolute difference.
    ///
    /// Returns `None` for zero, negative or non-finite input.
    pub fn nearest(self, value: f64) -> Option<f64> {
        if !(value.is_finite() && value > 0.0) {
            return None;
        }
        closest(self.candidates(value), value)
    }

    /// Member closest to `value` among those lying in `[low, high]`.
    ///
    /// Only the two members bracketing `value` can win, so `value` is
    /// expected to lie in the range itself.
    pub fn nearest_in_range(self, value: f64, low: f64, high: f64) -> Option<f64> {
        if !(value.is_finite() && value > 0.0) {
            return None;
        }
        let candidates = self.candidates(value);
        let below = candidates.iter().copied().filter(|&c| c <= value).last();
        let above = candidates.iter().copied().find(|&c| c >= value);
        let in_range = [below, above]
            .into_iter()
            .flatten()
            .filter(|&c| c >= low && c <= high)
            .collect();
        closest(in_range, value)
    }

    /// Whether `value` is a member of this series (within floating slack).
    pub fn contains(self, value: f64) -> bool {
        match self.nearest(value) {
            Some(n) => ((n - value) / value).abs() < MEMBERSHIP_EPSILON,
            None => false,
        }
    }
}

/// `entry` scaled so its mantissa has `digits` decimals, times `10^exp`.
///
/// Dividing the integer entry by an exact power of ten keeps results such
/// as 0.047 bit-identical to the literal.
fn member(entry: u16, digits: i32, exp: i32) -> f64 {
    let n = f64::from(entry);
    let k = exp - digits;
    if k >= 0 {
        n * 10f64.powi(k)
    } else {
        n / 10f64.powi(-k)
    }
}

fn closest(candidates: Vec<f64>, value: f64) -> Option<f64> {
    candidates.into_iter().min_by(|a, b| {
        (a - value)
            .abs()
            .partial_cmp(&(b - value).abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

impl fmt::Display for ESeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.len())
    }
}

impl FromStr for ESeries {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E3" => Ok(ESeries::E3),
            "E6" => Ok(ESeries::E6),
            "E12" => Ok(ESeries::E12),
            "E24" => Ok(ESeries::E24),
            "E48" => Ok(ESeries::E48),
            "E96" => Ok(ESeries::E96),
            _ => Err(QuizError::UnknownSeries(s.to_string())),
        }
    }
}

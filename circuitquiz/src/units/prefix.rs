//! Metric prefixes from yocto (10⁻²⁴) to yotta (10²⁴).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::QuizError;

/// A metric prefix, one step per power of 1000.
///
/// `Prefix::None` is the unscaled case (a blank in the prefix slot).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Prefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    #[default]
    None,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl Prefix {
    /// Every prefix, smallest first.
    pub const ALL: [Prefix; 17] = [
        Prefix::Yocto,
        Prefix::Zepto,
        Prefix::Atto,
        Prefix::Femto,
        Prefix::Pico,
        Prefix::Nano,
        Prefix::Micro,
        Prefix::Milli,
        Prefix::None,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Tera,
        Prefix::Peta,
        Prefix::Exa,
        Prefix::Zetta,
        Prefix::Yotta,
    ];

    /// Decimal exponent of the scale factor (a multiple of 3).
    pub fn exponent(self) -> i32 {
        match self {
            Prefix::Yocto => -24,
            Prefix::Zepto => -21,
            Prefix::Atto => -18,
            Prefix::Femto => -15,
            Prefix::Pico => -12,
            Prefix::Nano => -9,
            Prefix::Micro => -6,
            Prefix::Milli => -3,
            Prefix::None => 0,
            Prefix::Kilo => 3,
            Prefix::Mega => 6,
            Prefix::Giga => 9,
            Prefix::Tera => 12,
            Prefix::Peta => 15,
            Prefix::Exa => 18,
            Prefix::Zetta => 21,
            Prefix::Yotta => 24,
        }
    }

    /// Multiplier this prefix stands for.
    pub fn scale(self) -> f64 {
        self.apply(1.0)
    }

    /// Scales `value` by this prefix.
    ///
    /// Negative exponents divide by the exact power of ten rather than
    /// multiplying by an inexact reciprocal.
    pub fn apply(self, value: f64) -> f64 {
        let exp = self.exponent();
        if exp >= 0 {
            value * 10f64.powi(exp)
        } else {
            value / 10f64.powi(-exp)
        }
    }

    /// Display symbol. Micro is the Greek mu (U+03BC), `None` is empty.
    pub fn symbol(self) -> &'static str {
        match self {
            Prefix::Yocto => "y",
            Prefix::Zepto => "z",
            Prefix::Atto => "a",
            Prefix::Femto => "f",
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "μ",
            Prefix::Milli => "m",
            Prefix::None => "",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
            Prefix::Exa => "E",
            Prefix::Zetta => "Z",
            Prefix::Yotta => "Y",
        }
    }

    /// Strict lookup of a single prefix character.
    ///
    /// `u`, `μ` (Greek mu) and `µ` (micro sign) all mean micro. A blank
    /// is `Prefix::None`. Anything else is not a prefix.
    pub fn from_symbol(c: char) -> Option<Prefix> {
        let prefix = match c {
            'y' => Prefix::Yocto,
            'z' => Prefix::Zepto,
            'a' => Prefix::Atto,
            'f' => Prefix::Femto,
            'p' => Prefix::Pico,
            'n' => Prefix::Nano,
            'u' | '\u{03bc}' | '\u{00b5}' => Prefix::Micro,
            'm' => Prefix::Milli,
            ' ' => Prefix::None,
            'k' => Prefix::Kilo,
            'M' => Prefix::Mega,
            'G' => Prefix::Giga,
            'T' => Prefix::Tera,
            'P' => Prefix::Peta,
            'E' => Prefix::Exa,
            'Z' => Prefix::Zetta,
            'Y' => Prefix::Yotta,
            _ => return None,
        };
        Some(prefix)
    }

    /// Like [`Prefix::from_symbol`], but unknown characters read as no prefix.
    ///
    /// This is how submitted unit strings are interpreted when grading: the
    /// first character of "A" or "Ω" is not a prefix, so the answer is taken
    /// as unscaled.
    pub fn lenient(c: char) -> Prefix {
        match Prefix::from_symbol(c) {
            Some(prefix) => prefix,
            None => {
                tracing::debug!("'{}' is not a metric prefix, treating as unscaled", c);
                Prefix::None
            }
        }
    }

    /// Prefix whose exponent is exactly `exponent`, if there is one.
    pub fn from_exponent(exponent: i32) -> Option<Prefix> {
        Prefix::ALL.into_iter().find(|p| p.exponent() == exponent)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Prefix {
    type Err = QuizError;

    /// Parses a one-character prefix. Empty or blank strings are `Prefix::None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Prefix::None);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Prefix::from_symbol(c).ok_or_else(|| QuizError::UnknownPrefix(s.to_string()))
            }
            _ => Err(QuizError::UnknownPrefix(s.to_string())),
        }
    }
}

//! Unit dropdown options for answer boxes.
//!
//! Two layouts are supported:
//!
//! - **single unit**: one physical unit swept over the prefixes p … P
//!   (`pV`, `nV`, …, `PV`);
//! - **multi unit**: every listed physical unit, all carrying the prefix of
//!   the correct answer (`kA`, `kV`, `kW`, …).
//!
//! In single-unit mode the first option (`p`) is tagged correct whatever the
//! answer is, unless [`SingleUnitTagging::MatchMagnitude`] is requested. When
//! the true value is not in the pico range, that default tag is wrong; grading
//! with [`crate::comp_ans`] reads the prefix the student picked and is not
//! affected.

use serde::{Deserialize, Serialize};

use crate::core::QuizError;
use crate::units::format::{display_split, prefix_of, DISPLAY_DECIMALS};
use crate::units::Prefix;

/// Prefixes offered in single-unit mode, in display order.
pub const SINGLE_UNIT_PREFIXES: [Prefix; 10] = [
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
];

/// Physical units offered in multi-unit mode, in display order.
pub const MULTI_UNITS: [&str; 10] = ["A", "V", "W", "C", "F", "Ω", "H", "J", "S", "T"];

/// One dropdown entry.
///
/// Serializes as `{"tag": "true", "unit": "kΩ"}`; the tag is a string because
/// that is what the dropdown element compares against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    #[serde(rename = "tag", with = "tag_string")]
    pub correct: bool,
    pub unit: String,
}

impl OptionRecord {
    fn new(correct: bool, prefix: Prefix, unit: &str) -> Self {
        Self {
            correct,
            unit: format!("{}{}", prefix.symbol(), unit),
        }
    }
}

/// Which single-unit option gets the correct tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleUnitTagging {
    /// Always the first (pico) option.
    #[default]
    FirstOption,
    /// The option whose prefix [`crate::conv_str`] would print for the
    /// answer, clamped to the p … P sweep.
    MatchMagnitude,
}

mod tag_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let tag = String::deserialize(deserializer)?;
        match tag.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(D::Error::custom(format!("invalid tag '{}'", other))),
        }
    }
}

/// Maps the `Ohm`/`ohm` spellings to `Ω`.
pub fn normalize_unit(unit: &str) -> &str {
    match unit {
        "Ohm" | "ohm" => "Ω",
        other => other,
    }
}

/// Builds dropdown options with the default single-unit tagging.
///
/// `correct_ans` only matters in multi-unit mode, where it picks the prefix.
/// In multi-unit mode `desired_unit` must be one of [`MULTI_UNITS`].
pub fn gen_unit(
    desired_unit: &str,
    single_unit: bool,
    correct_ans: f64,
) -> Result<Vec<OptionRecord>, QuizError> {
    gen_unit_with(
        desired_unit,
        single_unit,
        correct_ans,
        SingleUnitTagging::FirstOption,
    )
}

/// [`gen_unit`] with a choice of single-unit tagging.
pub fn gen_unit_with(
    desired_unit: &str,
    single_unit: bool,
    correct_ans: f64,
    tagging: SingleUnitTagging,
) -> Result<Vec<OptionRecord>, QuizError> {
    let unit = normalize_unit(desired_unit);
    if single_unit {
        let correct_index = match tagging {
            SingleUnitTagging::FirstOption => 0,
            SingleUnitTagging::MatchMagnitude => sweep_index(correct_ans),
        };
        Ok(single_unit_options(unit, correct_index))
    } else {
        multi_unit_options(unit, correct_ans)
    }
}

fn single_unit_options(unit: &str, correct_index: usize) -> Vec<OptionRecord> {
    SINGLE_UNIT_PREFIXES
        .iter()
        .enumerate()
        .map(|(i, &prefix)| OptionRecord::new(i == correct_index, prefix, unit))
        .collect()
}

/// Position in [`SINGLE_UNIT_PREFIXES`] for the magnitude of `value`.
fn sweep_index(value: f64) -> usize {
    let (_, exponent) = display_split(value, DISPLAY_DECIMALS);
    match SINGLE_UNIT_PREFIXES
        .iter()
        .position(|p| p.exponent() == exponent)
    {
        Some(index) => index,
        None if exponent < Prefix::Pico.exponent() => 0,
        None => SINGLE_UNIT_PREFIXES.len() - 1,
    }
}

fn multi_unit_options(unit: &str, correct_ans: f64) -> Result<Vec<OptionRecord>, QuizError> {
    if !MULTI_UNITS.contains(&unit) {
        return Err(QuizError::UnknownUnit(unit.to_string()));
    }
    let prefix = match prefix_of(correct_ans) {
        Some(prefix) => prefix,
        None => {
            tracing::warn!("{} is outside the prefix range, listing unprefixed units", correct_ans);
            Prefix::None
        }
    };
    Ok(MULTI_UNITS
        .iter()
        .map(|&u| OptionRecord::new(u == unit, prefix, u))
        .collect())
}

/// Serializes options to the JSON list the dropdown element expects.
pub fn options_to_json(options: &[OptionRecord]) -> Result<String, QuizError> {
    Ok(serde_json::to_string(options)?)
}

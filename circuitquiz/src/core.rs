//! Error type, options and the question-building facade.
//! No question-platform or I/O dependencies beyond loading options.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::generate::{self, PowerTriple, DEFAULT_POWER_LIMIT, MIN_POWER};
use crate::grading::{self, OptionRecord, SingleUnitTagging, DEFAULT_TOLERANCE};
use crate::units::{self, ESeries, Prefix};

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Invalid range: low ({low}) must be below high ({high}) and both finite")]
    InvalidRange { low: f64, high: f64 },
    #[error("Invalid resistance: {0}")]
    InvalidResistance(f64),
    #[error("Invalid power limit: {0} W")]
    InvalidPowerLimit(f64),
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),
    #[error("Unknown metric prefix: '{0}'")]
    UnknownPrefix(String),
    #[error("Unknown preferred-value series: '{0}'")]
    UnknownSeries(String),
    #[error("Unit '{0}' is not offered in multi-unit dropdowns")]
    UnknownUnit(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Options error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Settings shared by the questions of one course or template.
///
/// Every field has a default, so an options file only needs the ones it
/// changes:
///
/// ```json
/// { "tolerance": 0.05, "series": "E12" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizOptions {
    /// Relative tolerance for grading.
    pub tolerance: f64,
    /// Power ceiling in watts for generated operating points.
    pub power_limit: f64,
    /// Series generated resistors snap to.
    pub series: ESeries,
    pub single_unit_tagging: SingleUnitTagging,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            power_limit: DEFAULT_POWER_LIMIT,
            series: ESeries::E6,
            single_unit_tagging: SingleUnitTagging::FirstOption,
        }
    }
}

impl QuizOptions {
    /// Parse and validate options from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, QuizError> {
        let options: QuizOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, QuizError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&content)?;
        tracing::info!("Loaded quiz options from {:?}", path);
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(QuizError::InvalidTolerance(self.tolerance));
        }
        if !(self.power_limit.is_finite() && self.power_limit > MIN_POWER) {
            return Err(QuizError::InvalidPowerLimit(self.power_limit));
        }
        Ok(())
    }
}

/// Question-building API: options plus a random source.
///
/// The free functions in [`crate::generate`], [`crate::units`] and
/// [`crate::grading`] do the work; this type supplies the configured series,
/// power limit, tolerance and tagging, and an owned RNG.
pub struct CircuitQuiz {
    options: QuizOptions,
    rng: StdRng,
}

impl CircuitQuiz {
    /// Entropy-seeded quiz with validated options.
    pub fn new(options: QuizOptions) -> Result<Self, QuizError> {
        options.validate()?;
        Ok(Self {
            options,
            rng: StdRng::from_entropy(),
        })
    }

    /// Reproducible quiz: the same seed and calls give the same values.
    pub fn with_seed(options: QuizOptions, seed: u64) -> Result<Self, QuizError> {
        options.validate()?;
        Ok(Self {
            options,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn options(&self) -> &QuizOptions {
        &self.options
    }

    /// Random resistor in `[low, high]` from the configured series.
    pub fn resistor(&mut self, low: f64, high: f64) -> Result<f64, QuizError> {
        generate::gen_resistor(&mut self.rng, low, high, self.options.series)
    }

    /// Random value in `[low, high)` scaled by `prefix`.
    pub fn number(&mut self, low: f64, high: f64, prefix: Prefix) -> Result<f64, QuizError> {
        generate::gen_num(&mut self.rng, low, high, prefix)
    }

    /// Operating point for `resistance` under the configured power limit.
    pub fn watt(&mut self, resistance: f64) -> Result<PowerTriple, QuizError> {
        generate::gen_watt(&mut self.rng, resistance, self.options.power_limit)
    }

    /// Display string with SI prefix, see [`crate::conv_str`].
    pub fn format(&self, value: f64) -> String {
        units::conv_str(value)
    }

    /// Grades a submission with the configured tolerance.
    pub fn check(&self, correct_ans: f64, std_ans: f64, std_unit: &str) -> bool {
        grading::comp_ans_with_tolerance(correct_ans, std_ans, std_unit, self.options.tolerance)
    }

    /// Dropdown options with the configured single-unit tagging.
    pub fn unit_options(
        &self,
        desired_unit: &str,
        single_unit: bool,
        correct_ans: f64,
    ) -> Result<Vec<OptionRecord>, QuizError> {
        grading::gen_unit_with(
            desired_unit,
            single_unit,
            correct_ans,
            self.options.single_unit_tagging,
        )
    }
}

impl Default for CircuitQuiz {
    fn default() -> Self {
        Self {
            options: QuizOptions::default(),
            rng: StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = QuizOptions::default();
        assert_eq!(options.tolerance, 0.10);
        assert_eq!(options.power_limit, 0.25);
        assert_eq!(options.series, ESeries::E6);
        assert_eq!(options.single_unit_tagging, SingleUnitTagging::FirstOption);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = QuizOptions::from_json_str(r#"{"series": "E24"}"#).unwrap();
        assert_eq!(options.series, ESeries::E24);
        assert_eq!(options.tolerance, DEFAULT_TOLERANCE);

        let options =
            QuizOptions::from_json_str(r#"{"single_unit_tagging": "match_magnitude"}"#).unwrap();
        assert_eq!(options.single_unit_tagging, SingleUnitTagging::MatchMagnitude);
    }

    #[test]
    fn test_invalid_options_rejected() {
        assert!(matches!(
            QuizOptions::from_json_str(r#"{"tolerance": -0.1}"#),
            Err(QuizError::InvalidTolerance(_))
        ));
        assert!(matches!(
            QuizOptions::from_json_str(r#"{"power_limit": 0}"#),
            Err(QuizError::InvalidPowerLimit(_))
        ));
        assert!(matches!(
            QuizOptions::from_json_str(r#"{"series": "E7"}"#),
            Err(QuizError::Config(_))
        ));
        assert!(matches!(
            QuizOptions::from_json_str("not json"),
            Err(QuizError::Config(_))
        ));
    }

    #[test]
    fn test_seeded_quiz_is_reproducible() {
        let mut a = CircuitQuiz::with_seed(QuizOptions::default(), 99).unwrap();
        let mut b = CircuitQuiz::with_seed(QuizOptions::default(), 99).unwrap();
        for _ in 0..10 {
            assert_eq!(a.resistor(100.0, 10_000.0).unwrap(), b.resistor(100.0, 10_000.0).unwrap());
            assert_eq!(a.watt(470.0).unwrap(), b.watt(470.0).unwrap());
        }
    }

    #[test]
    fn test_quiz_uses_configured_tolerance() {
        let options = QuizOptions {
            tolerance: 0.01,
            ..QuizOptions::default()
        };
        let quiz = CircuitQuiz::with_seed(options, 1).unwrap();
        assert!(!quiz.check(100.0, 95.0, " "));
        assert!(quiz.check(100.0, 99.5, " "));
        assert!(CircuitQuiz::default().check(100.0, 95.0, " "));
    }

    #[test]
    fn test_quiz_rejects_invalid_options() {
        let options = QuizOptions {
            power_limit: -1.0,
            ..QuizOptions::default()
        };
        assert!(CircuitQuiz::new(options).is_err());
    }

    #[test]
    fn test_quiz_unit_options_follow_tagging() {
        let options = QuizOptions {
            single_unit_tagging: SingleUnitTagging::MatchMagnitude,
            ..QuizOptions::default()
        };
        let quiz = CircuitQuiz::with_seed(options, 1).unwrap();
        let list = quiz.unit_options("Ohm", true, 4700.0).unwrap();
        let tagged: Vec<_> = list.iter().filter(|o| o.correct).collect();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].unit, "kΩ");
    }
}

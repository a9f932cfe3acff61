//! circuitquiz - randomized circuit values and answer grading for
//! electronics question templates
//!
//! This library generates resistor values from preferred-number series,
//! consistent power/voltage/current triples, SI-prefixed display strings,
//! tolerance-based answer checks and unit dropdown options.
//!
//! # Quick Start
//!
//! ```
//! use circuitquiz::prelude::*;
//!
//! let mut quiz = CircuitQuiz::with_seed(QuizOptions::default(), 7)?;
//!
//! let r = quiz.resistor(1000.0, 7000.0)?;
//! let op = quiz.watt(r)?;
//! let prompt = format!(
//!     "A {}Ω resistor carries {}A. What voltage is across it?",
//!     quiz.format(r),
//!     quiz.format(op.current),
//! );
//! assert!(prompt.contains("kΩ"));
//!
//! let dropdown = quiz.unit_options("V", false, op.voltage)?;
//! assert_eq!(dropdown.iter().filter(|o| o.correct).count(), 1);
//!
//! // Inside the grading callback
//! assert!(quiz.check(op.voltage, op.voltage * 1000.0, "mV"));
//! # Ok::<(), circuitquiz::QuizError>(())
//! ```
//!
//! # Features
//!
//! - **Value generation**: E3 … E96 resistors, prefixed random magnitudes,
//!   power-limited operating points
//! - **Formatting**: engineering split and yocto … yotta prefixes
//! - **Grading**: relative tolerance with the submitted unit's prefix
//! - **Dropdowns**: single-unit prefix sweeps or multi-unit lists, JSON-ready

pub mod core;
pub mod generate;
pub mod grading;
pub mod units;

// Re-export main types
pub use crate::core::{CircuitQuiz, QuizError, QuizOptions};
pub use generate::{gen_num, gen_num_with_unit, gen_resistor, gen_watt, PowerTriple};
pub use grading::{
    comp_ans, comp_ans_with_tolerance, gen_unit, gen_unit_with, options_to_json, OptionRecord,
    SingleUnitTagging,
};
pub use units::{conv_str, format_si, prefix_of, ESeries, Prefix};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        comp_ans, conv_str, gen_num, gen_resistor, gen_unit, gen_watt, CircuitQuiz, ESeries,
        OptionRecord, PowerTriple, Prefix, QuizError, QuizOptions, SingleUnitTagging,
    };
}

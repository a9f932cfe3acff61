pub mod answer;
pub mod dropdown;

// Re-export for convenience
pub use answer::{comp_ans, comp_ans_with_tolerance, within_tolerance, DEFAULT_TOLERANCE};
pub use dropdown::{
    gen_unit, gen_unit_with, normalize_unit, options_to_json, OptionRecord, SingleUnitTagging,
    MULTI_UNITS, SINGLE_UNIT_PREFIXES,
};

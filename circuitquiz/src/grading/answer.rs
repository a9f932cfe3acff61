//! Tolerance check for submitted numeric answers.

use crate::units::Prefix;

/// Relative tolerance accepted by [`comp_ans`].
pub const DEFAULT_TOLERANCE: f64 = 0.10;

/// Grades a submission given as a number plus a unit string such as `"mA"`.
///
/// Only the first character of `std_unit` is read, as the prefix. Characters
/// that are not prefixes (the `A` in `"A"`, or `Ω`) mean the number is
/// unscaled. The answer passes when it is within 10% of `correct_ans`.
///
/// ```
/// use circuitquiz::comp_ans;
///
/// assert!(comp_ans(1.0, 1000.0, "mA"));
/// assert!(comp_ans(100.0, 90.0, " "));
/// assert!(!comp_ans(100.0, 80.0, " "));
/// ```
pub fn comp_ans(correct_ans: f64, std_ans: f64, std_unit: &str) -> bool {
    comp_ans_with_tolerance(correct_ans, std_ans, std_unit, DEFAULT_TOLERANCE)
}

/// [`comp_ans`] with an explicit relative tolerance.
pub fn comp_ans_with_tolerance(
    correct_ans: f64,
    std_ans: f64,
    std_unit: &str,
    tolerance: f64,
) -> bool {
    let prefix = std_unit
        .chars()
        .next()
        .map(Prefix::lenient)
        .unwrap_or(Prefix::None);
    let submitted = prefix.apply(std_ans);
    let passed = within_tolerance(correct_ans, submitted, tolerance);
    tracing::debug!(
        "Graded {} {:?} as {} against {}: {}",
        std_ans,
        std_unit,
        submitted,
        correct_ans,
        if passed { "pass" } else { "fail" }
    );
    passed
}

/// `|correct - submitted| <= |correct * tolerance|`.
///
/// A correct value of zero only accepts an exact zero. NaN never passes.
pub fn within_tolerance(correct: f64, submitted: f64, tolerance: f64) -> bool {
    (correct - submitted).abs() <= (correct * tolerance).abs()
}

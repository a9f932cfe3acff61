//! SI-prefix display strings and engineering-notation helpers.

use crate::units::prefix::Prefix;

/// Decimal places used by [`conv_str`] and by the value generators.
pub const DISPLAY_DECIMALS: usize = 2;

/// Splits `value` into a mantissa with magnitude in `[1, 1000)` and a decimal
/// exponent that is a multiple of 3.
///
/// Zero and non-finite values come back unchanged with exponent 0.
pub fn split(value: f64) -> (f64, i32) {
    if value == 0.0 || !value.is_finite() {
        return (value, 0);
    }
    let magnitude = value.abs();
    let mut exponent = (magnitude.log10().floor() as i32).div_euclid(3) * 3;
    let mut mantissa = shift(magnitude, -exponent);

    // log10 can land a hair off at exact powers of ten
    if mantissa >= 1000.0 {
        mantissa /= 1000.0;
        exponent += 3;
    } else if mantissa < 1.0 {
        mantissa *= 1000.0;
        exponent -= 3;
    }

    (mantissa.copysign(value), exponent)
}

/// Largest power of ten applied in one step; `10^309` overflows.
const MAX_STEP: i32 = 300;

/// `value × 10^exp`, dividing for negative `exp`.
fn shift(value: f64, exp: i32) -> f64 {
    if exp.abs() > MAX_STEP {
        let half = exp / 2;
        shift(shift(value, half), exp - half)
    } else if exp >= 0 {
        value * 10f64.powi(exp)
    } else {
        value / 10f64.powi(-exp)
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Rounds the engineering mantissa of `value` to `decimals` places and
/// rebuilds the number.
///
/// `round_mantissa(0.0123456, 2)` is `0.01235` (12.35 m).
pub fn round_mantissa(value: f64, decimals: usize) -> f64 {
    let (mantissa, exponent) = split(value);
    shift(round_to(mantissa, decimals), exponent)
}

/// Engineering split for display: like [`split`], but moves up one prefix
/// when rounding to `decimals` would print a mantissa of 1000.
pub(crate) fn display_split(value: f64, decimals: usize) -> (f64, i32) {
    let (mantissa, exponent) = split(value);
    if round_to(mantissa.abs(), decimals) >= 1000.0 {
        (mantissa / 1000.0, exponent + 3)
    } else {
        (mantissa, exponent)
    }
}

/// Formats `value` as `"<mantissa> <prefix>"` with `decimals` places.
///
/// Magnitudes beyond the yocto..yotta range fall back to `"<mantissa>e<exp>"`.
pub fn format_si(value: f64, decimals: usize) -> String {
    let (mantissa, exponent) = display_split(value, decimals);
    match Prefix::from_exponent(exponent) {
        Some(prefix) => format!("{:.*} {}", decimals, mantissa, prefix.symbol()),
        None => format!("{:.*}e{}", decimals, mantissa, exponent),
    }
}

/// Converts a raw value to a prefixed display string with two decimals.
///
/// No unit symbol is appended, so the string ends with the prefix (or with a
/// space when there is none) and callers add the unit:
///
/// ```
/// use circuitquiz::conv_str;
///
/// assert_eq!(conv_str(1500.0) + "Ω", "1.50 kΩ");
/// assert_eq!(conv_str(250.0) + "Ω", "250.00 Ω");
/// ```
pub fn conv_str(value: f64) -> String {
    format_si(value, DISPLAY_DECIMALS)
}

/// The prefix [`conv_str`] would print for `value`, if it is in range.
pub fn prefix_of(value: f64) -> Option<Prefix> {
    let (_, exponent) = display_split(value, DISPLAY_DECIMALS);
    Prefix::from_exponent(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ranges() {
        assert_eq!(split(1500.0), (1.5, 3));
        assert_eq!(split(250.0), (250.0, 0));
        assert_eq!(split(1.0), (1.0, 0));
        assert_eq!(split(0.0), (0.0, 0));
        let (m, e) = split(0.0005);
        assert_eq!(e, -6);
        assert!((m - 500.0).abs() < 1e-9);
        let (m, e) = split(-2200.0);
        assert_eq!((m, e), (-2.2, 3));
    }

    #[test]
    fn test_split_exact_powers_of_ten() {
        for exp in -24..=24 {
            let value = shift(1.0, exp);
            let (m, e) = split(value);
            assert!((1.0..1000.0).contains(&m), "mantissa {} for 1e{}", m, exp);
            assert_eq!(e.rem_euclid(3), 0);
            assert!((shift(m, e) / value - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_round_mantissa() {
        assert!((round_mantissa(0.0123456, 2) - 0.01235).abs() < 1e-15);
        assert_eq!(round_mantissa(4567.891, 2), 4570.0);
        assert_eq!(round_mantissa(123.456, 2), 123.46);
        assert_eq!(round_mantissa(0.0, 2), 0.0);
    }

    #[test]
    fn test_conv_str() {
        assert_eq!(conv_str(1500.0), "1.50 k");
        assert_eq!(conv_str(250.0), "250.00 ");
        assert_eq!(conv_str(0.0047), "4.70 m");
        assert_eq!(conv_str(4.7e-6), "4.70 μ");
        assert_eq!(conv_str(2.2e9), "2.20 G");
        assert_eq!(conv_str(-2200.0), "-2.20 k");
        assert_eq!(conv_str(0.0), "0.00 ");
    }

    #[test]
    fn test_conv_str_carries_into_next_prefix() {
        assert_eq!(conv_str(999.999), "1.00 k");
        assert_eq!(conv_str(999.994), "999.99 ");
    }

    #[test]
    fn test_conv_str_out_of_range() {
        assert_eq!(conv_str(1e27), "1.00e27");
        assert_eq!(conv_str(1e-27), "1.00e-27");
    }

    #[test]
    fn test_subnormal_values_stay_finite() {
        let (m, e) = split(1e-310);
        assert_eq!(e, -312);
        assert!((m - 100.0).abs() < 1e-6, "mantissa {}", m);
        assert_eq!(conv_str(1e-310), "100.00e-312");
        assert_eq!(conv_str(-5e-324), "-4.94e-324");
        assert!(round_mantissa(1e-310, 2) > 0.0);
    }

    #[test]
    fn test_format_si_precision() {
        assert_eq!(format_si(1500.0, 1), "1.5 k");
        assert_eq!(format_si(0.000_033, 3), "33.000 μ");
    }

    #[test]
    fn test_prefix_of() {
        assert_eq!(prefix_of(1500.0), Some(Prefix::Kilo));
        assert_eq!(prefix_of(250.0), Some(Prefix::None));
        assert_eq!(prefix_of(0.0), Some(Prefix::None));
        assert_eq!(prefix_of(3.3e-9), Some(Prefix::Nano));
        assert_eq!(prefix_of(999.999), Some(Prefix::Kilo));
        assert_eq!(prefix_of(1e30), None);
    }
}

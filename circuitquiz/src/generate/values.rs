//! Random resistor values and prefixed magnitudes.

use rand::Rng;

use crate::core::QuizError;
use crate::units::format::{round_mantissa, DISPLAY_DECIMALS};
use crate::units::{ESeries, Prefix};

/// Rejects ranges `gen_range` cannot sample from.
pub(crate) fn check_range(low: f64, high: f64) -> Result<(), QuizError> {
    if low < high && (high - low).is_finite() {
        Ok(())
    } else {
        Err(QuizError::InvalidRange { low, high })
    }
}

/// Uniform draw from `[low, high)`, repeated while it comes out exactly zero.
fn draw_nonzero<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    loop {
        let num = rng.gen_range(low..high);
        if num != 0.0 {
            return num;
        }
    }
}

/// Draws a resistance in `[low, high)` and snaps it to `series`.
///
/// The snap prefers the nearest series member inside `[low, high]`. When the
/// range holds no member at all, the nearest member overall is used.
/// The result is the raw value in ohms; use [`crate::conv_str`] to display it.
pub fn gen_resistor<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
    series: ESeries,
) -> Result<f64, QuizError> {
    check_range(low, high)?;
    if low < 0.0 {
        return Err(QuizError::InvalidResistance(low));
    }

    let drawn = draw_nonzero(rng, low, high);
    let value = match series.nearest_in_range(drawn, low, high) {
        Some(value) => value,
        None => {
            let fallback = series
                .nearest(drawn)
                .ok_or(QuizError::InvalidResistance(drawn))?;
            tracing::warn!(
                "No {} value in [{}, {}], using nearest {}",
                series,
                low,
                high,
                fallback
            );
            fallback
        }
    };

    tracing::debug!("Resistor {} drawn, snapped to {} {}", drawn, series, value);
    Ok(value)
}

/// Draws a nonzero number in `[low, high)` scaled by `prefix`.
///
/// The engineering mantissa of the result is rounded to two decimals, so
/// `gen_num(rng, 1.0, 10.0, Prefix::Milli)` returns values such as `0.00472`.
/// The returned float no longer remembers the requested prefix: 1500 mA comes
/// back as `1.5`.
pub fn gen_num<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
    prefix: Prefix,
) -> Result<f64, QuizError> {
    check_range(low, high)?;
    let scaled = prefix.apply(draw_nonzero(rng, low, high));
    Ok(round_mantissa(scaled, DISPLAY_DECIMALS))
}

/// [`gen_num`] taking the prefix as a string (`"m"`, `"u"`, `"μ"`, `" "` …).
pub fn gen_num_with_unit<R: Rng + ?Sized>(
    rng: &mut R,
    low: f64,
    high: f64,
    unit: &str,
) -> Result<f64, QuizError> {
    let prefix: Prefix = unit.parse()?;
    gen_num(rng, low, high, prefix)
}

//! Power, voltage and current for a given resistor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::QuizError;
use crate::units::format::{round_mantissa, DISPLAY_DECIMALS};

/// Smallest power the solver draws, in watts.
pub const MIN_POWER: f64 = 1e-15;

/// Default ceiling: a quarter-watt resistor.
pub const DEFAULT_POWER_LIMIT: f64 = 0.25;

/// Draws rejected in a row before the limit is reported as unreachable.
const MAX_REDRAWS: usize = 1000;

/// A consistent operating point: `power == voltage * current`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerTriple {
    /// Watts.
    pub power: f64,
    /// Volts.
    pub voltage: f64,
    /// Amperes.
    pub current: f64,
}

impl From<PowerTriple> for (f64, f64, f64) {
    fn from(t: PowerTriple) -> Self {
        (t.power, t.voltage, t.current)
    }
}

/// Picks an operating point for `resistance` that dissipates less than
/// `power_limit`.
///
/// A power is drawn from `[MIN_POWER, power_limit)`, the matching current
/// and voltage are derived, and both are rounded to two-decimal engineering
/// mantissas. The returned power is recomputed from the rounded voltage and
/// current. Rounding can lift that product just over the ceiling when the
/// draw lands close to it; such draws are repeated. A limit so close to
/// [`MIN_POWER`] that no draw survives rounding is an `InvalidPowerLimit`,
/// and a resistance for which `P/R` leaves the `f64` range is an
/// `InvalidResistance`.
pub fn gen_watt<R: Rng + ?Sized>(
    rng: &mut R,
    resistance: f64,
    power_limit: f64,
) -> Result<PowerTriple, QuizError> {
    if !(resistance.is_finite() && resistance > 0.0) {
        return Err(QuizError::InvalidResistance(resistance));
    }
    if !(power_limit.is_finite() && power_limit > MIN_POWER) {
        return Err(QuizError::InvalidPowerLimit(power_limit));
    }

    for _ in 0..MAX_REDRAWS {
        let sampled = rng.gen_range(MIN_POWER..power_limit);
        let current = (sampled / resistance).sqrt();
        let voltage = sampled / current;
        if !(current.is_finite() && current > 0.0 && voltage.is_finite() && voltage > 0.0) {
            // P/R left the f64 range
            return Err(QuizError::InvalidResistance(resistance));
        }

        let voltage = round_mantissa(voltage, DISPLAY_DECIMALS);
        let current = round_mantissa(current, DISPLAY_DECIMALS);
        let power = voltage * current;
        if power < power_limit {
            tracing::debug!(
                "R={} -> P={} V={} I={} (sampled P={})",
                resistance,
                power,
                voltage,
                current,
                sampled
            );
            return Ok(PowerTriple {
                power,
                voltage,
                current,
            });
        }
        tracing::debug!("Rounded power {} reached limit {}, redrawing", power, power_limit);
    }

    tracing::warn!(
        "No operating point under {} W for R={} after {} draws",
        power_limit,
        resistance,
        MAX_REDRAWS
    );
    Err(QuizError::InvalidPowerLimit(power_limit))
}

//! Finding "round" numbers inside a range, for axis labels and ticks.

use std::fmt;

/// Multipliers tried at each magnitude, most preferred first.
const MULTIPLES: [f64; 3] = [5.0, 2.0, 1.0];

/// Upper bound on digits kept; enough to walk from `f64::MAX` down to the
/// smallest subnormal in base 2.
const MAX_SHIFT: i32 = 2200;

/// Result type for round-number search.
pub type RoundResult<T> = Result<T, RoundNumberError>;

/// Errors from [`round_number`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundNumberError {
    /// `min` is greater than `max`.
    InvalidRange { min: f64, max: f64 },

    /// The base must be finite and greater than 1.
    InvalidBase { base: f64 },
}

impl fmt::Display for RoundNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid range: min > max ({min} > {max})")
            }
            Self::InvalidBase { base } => {
                write!(f, "invalid base {base}, must be finite and greater than 1")
            }
        }
    }
}

impl std::error::Error for RoundNumberError {}

/// Finds a round number in `[min, max]` using base 10.
pub fn find(min: f64, max: f64) -> RoundResult<f64> {
    round_number(min, max, 10.0)
}

/// Finds a round number in `[min, max]`.
///
/// Starting from the midpoint's most significant digit and keeping one more
/// digit at a time, the midpoint is rounded to a multiple of 5, then 2, then
/// 1 times a power of `base`; the first result inside the range wins. A zero
/// midpoint is returned as is.
///
/// If no candidate lands in the range (non-finite input, or bounds so close
/// to `f64::MAX` that candidates overflow), a warning is logged and the
/// midpoint is returned.
pub fn round_number(min: f64, max: f64, base: f64) -> RoundResult<f64> {
    if min > max {
        return Err(RoundNumberError::InvalidRange { min, max });
    }
    if !base.is_finite() || base <= 1.0 {
        return Err(RoundNumberError::InvalidBase { base });
    }

    let val = min / 2.0 + max / 2.0;
    if val == 0.0 {
        return Ok(0.0);
    }
    let digits = (val.abs().ln() / base.ln()).floor() + 1.0;

    for shift in 0..MAX_SHIFT {
        let shift_div = base.powf(digits - f64::from(shift));
        if shift_div == 0.0 || shift_div.is_nan() {
            break;
        }
        if shift_div.is_infinite() {
            continue;
        }
        for multiple in MULTIPLES {
            let f = shift_div * multiple;
            // The factor of 10 trims floating point error from the product.
            let candidate = ((js_round(val / f) * 10.0) * f) / 10.0;
            if candidate >= min && candidate <= max {
                return Ok(candidate);
            }
        }
    }

    tracing::warn!(min, max, midpoint = val, "no round number found in range, using midpoint");
    Ok(val)
}

/// Rounds half-way cases toward positive infinity.
pub(crate) fn js_round(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

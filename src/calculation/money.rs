//! Currency rounding primitives.
//!
//! Shift pay is computed entirely in integer minor units (cents) so that no
//! floating-point drift can accumulate across many shifts. Withholding
//! amounts are computed in `Decimal` and rounded per the rule each schedule
//! declares.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{RoundingMode, RoundingRule};

/// Converts worked minutes to cents at an hourly rate in cents.
///
/// The product `minutes * rate_cents_per_hour` is divided by 60 using
/// integer division; the remainder rounds to the nearest cent with half-up
/// tie-breaking (remainder of 30 or more rounds up). Inputs are expected to
/// be non-negative.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::minutes_to_cents;
///
/// // One minute at $25.00/hour: 2500/60 = 41.67, rounds to 42 cents.
/// assert_eq!(minutes_to_cents(1, 2500), 42);
/// // One hour exactly.
/// assert_eq!(minutes_to_cents(60, 2500), 2500);
/// ```
pub fn minutes_to_cents(minutes: i64, rate_cents_per_hour: i64) -> i64 {
    let product = minutes * rate_cents_per_hour;
    let quotient = product / 60;
    let remainder = product % 60;
    if remainder >= 30 {
        quotient + 1
    } else {
        quotient
    }
}

/// Rounds a value per a schedule's declared rounding rule.
///
/// Only half-up is defined: the value is scaled by the reciprocal of the
/// precision, rounded to the nearest integer with ties away from zero, and
/// rescaled. A precision of `1` therefore rounds to whole dollars and
/// `0.01` to cents.
pub fn round_amount(value: Decimal, rule: &RoundingRule) -> Decimal {
    match rule.mode {
        RoundingMode::HalfUp => {
            let scaled = value / rule.precision;
            scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                * rule.precision
        }
    }
}

/// Clamps an amount to a non-negative value rounded to the cent.
///
/// Every externally returned amount passes through this guard so that no
/// combination of inputs can produce a negative result.
pub fn clamp_amount(value: Decimal) -> Decimal {
    let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if cents < Decimal::ZERO {
        Decimal::ZERO
    } else {
        cents
    }
}

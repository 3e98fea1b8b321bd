//! Shift pay assembly.
//!
//! This module combines the day splitter with integer-cent money conversion
//! to produce the full pay breakdown persisted on a shift record.

use crate::error::EngineResult;
use crate::models::{PenaltyRules, ShiftInterval, ShiftPayBreakdown};

use super::day_splitter::split_by_day;
use super::money::minutes_to_cents;

/// Computes the pay breakdown for a shift interval.
///
/// Splits the interval into per-day segments, sums base and penalty minutes
/// across them, and converts each total to cents at its hourly rate using
/// half-up integer rounding. Base and penalty pay are rounded independently
/// and then summed, so `total_pay_cents` is always exactly their sum; this
/// may differ by up to one cent from rounding the combined total directly,
/// which is accepted policy.
///
/// # Arguments
///
/// * `interval` - The shift interval
/// * `rules` - The penalty rules to classify against
/// * `base_rate_cents_per_hour` - Hourly base rate in cents
/// * `penalty_rate_cents_per_hour` - Hourly penalty rate in cents
///
/// # Returns
///
/// The breakdown, or [`EngineError::InvalidInterval`] propagated from the
/// splitter. No other failure is possible.
///
/// [`EngineError::InvalidInterval`]: crate::error::EngineError::InvalidInterval
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::compute_pay;
/// use shiftpay_engine::models::{PenaltyRules, ShiftInterval};
/// use chrono::NaiveDateTime;
///
/// let interval = ShiftInterval::new(
///     NaiveDateTime::parse_from_str("2026-01-14 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-14 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ).unwrap();
///
/// let breakdown = compute_pay(&interval, &PenaltyRules::default(), 2500, 3750).unwrap();
/// assert_eq!(breakdown.total_minutes, 480);
/// assert_eq!(breakdown.total_pay_cents, 20_000); // 8h at $25.00
/// ```
pub fn compute_pay(
    interval: &ShiftInterval,
    rules: &PenaltyRules,
    base_rate_cents_per_hour: i64,
    penalty_rate_cents_per_hour: i64,
) -> EngineResult<ShiftPayBreakdown> {
    let segments = split_by_day(interval, rules)?;

    let base_minutes: i64 = segments.iter().map(|s| s.minutes_base).sum();
    let penalty_minutes: i64 = segments.iter().map(|s| s.minutes_penalty).sum();

    let base_pay_cents = minutes_to_cents(base_minutes, base_rate_cents_per_hour);
    let penalty_pay_cents = minutes_to_cents(penalty_minutes, penalty_rate_cents_per_hour);

    Ok(ShiftPayBreakdown {
        base_minutes,
        penalty_minutes,
        total_minutes: base_minutes + penalty_minutes,
        base_pay_cents,
        penalty_pay_cents,
        total_pay_cents: base_pay_cents + penalty_pay_cents,
        segments,
    })
}

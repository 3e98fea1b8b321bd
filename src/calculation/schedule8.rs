//! Study-loan withholding schedule calculation.
//!
//! This module computes the additional per-period withholding for an
//! income-contingent study/training support loan. The applicable tier is
//! the highest one whose minimum annual income the annualized gross
//! reaches; its flat rate applies to the full annual income.

use rust_decimal::Decimal;

use crate::config::Schedule8Data;
use crate::models::PayFrequency;

use super::money::{clamp_amount, round_amount};
use super::schedule1::ScheduleOutcome;

/// Returns the fixed annualization factor for the loan schedule.
///
/// This table is deliberately independent of the primary schedule's
/// declared per-frequency factors; the two conventions are preserved as-is
/// from the authoritative source and must not be unified without
/// confirming intent.
pub fn loan_annual_factor(frequency: PayFrequency) -> Decimal {
    match frequency {
        PayFrequency::Weekly => Decimal::from(52),
        PayFrequency::Fortnightly => Decimal::from(26),
        PayFrequency::Monthly => Decimal::from(12),
        PayFrequency::Quarterly => Decimal::from(4),
    }
}

/// Calculates the per-period loan repayment withholding.
///
/// # Arguments
///
/// * `schedule` - The schedule version to apply
/// * `gross_for_period` - Gross earnings for the pay period, in dollars
/// * `frequency` - The pay frequency
///
/// # Returns
///
/// The rounded, non-negative per-period component. The note names the rate
/// applied, or states that no repayment was triggered when the annual
/// income is below every tier.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::calculate_schedule8;
/// use shiftpay_engine::config::{LoanRepaymentTier, RoundingMode, RoundingRule, Schedule8Data};
/// use shiftpay_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let schedule = Schedule8Data {
///     effective_from: chrono::NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     tiers: vec![LoanRepaymentTier { minimum: dec("54435"), rate: dec("0.01") }],
///     rounding: RoundingRule { precision: Decimal::ONE, mode: RoundingMode::HalfUp },
///     notes: vec![],
/// };
///
/// // $1,200/week annualizes to $62,400: 1% of that, back to weekly, is $12.
/// let outcome = calculate_schedule8(&schedule, dec("1200"), PayFrequency::Weekly);
/// assert_eq!(outcome.amount, dec("12"));
/// ```
pub fn calculate_schedule8(
    schedule: &Schedule8Data,
    gross_for_period: Decimal,
    frequency: PayFrequency,
) -> ScheduleOutcome {
    let factor = loan_annual_factor(frequency);
    let annual_income = (gross_for_period.max(Decimal::ZERO)) * factor;

    let rate = schedule
        .tiers
        .iter()
        .rev()
        .find(|tier| tier.minimum <= annual_income)
        .map(|tier| tier.rate)
        .unwrap_or(Decimal::ZERO);

    let mut notes = Vec::new();
    if rate > Decimal::ZERO {
        notes.push(format!(
            "Study loan repayment withheld at {}% of income.",
            (rate * Decimal::from(100)).normalize()
        ));
    } else {
        notes.push("Income below the repayment threshold; no study loan component.".to_string());
    }

    let per_period = annual_income * rate / factor;
    let amount = clamp_amount(round_amount(per_period, &schedule.rounding));

    notes.extend(schedule.notes.iter().cloned());

    ScheduleOutcome { amount, notes }
}

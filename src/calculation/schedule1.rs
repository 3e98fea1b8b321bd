//! Primary withholding schedule calculation.
//!
//! This module computes the per-period income tax withholding from one
//! effective-dated version of the primary schedule: annualize the gross,
//! evaluate the progressive scale for the profile's residency and threshold
//! claim, subtract the low-income offset where it applies, add the Medicare
//! levy, and de-annualize back to the pay period with the schedule's
//! declared rounding.

use rust_decimal::Decimal;

use crate::config::Schedule1Data;
use crate::error::{EngineError, EngineResult};
use crate::models::{MedicareLevyStatus, PayFrequency, Residency, TaxProfile};

use super::brackets::apply_bands;
use super::lito::compute_lito;
use super::medicare::compute_medicare_levy;
use super::money::{clamp_amount, round_amount};

/// The amount and explanatory notes produced by one schedule calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOutcome {
    /// The per-period amount, rounded and clamped non-negative.
    pub amount: Decimal,
    /// Human-readable notes describing the branches applied.
    pub notes: Vec<String>,
}

/// Calculates the per-period withholding under the primary schedule.
///
/// # Arguments
///
/// * `schedule` - The schedule version to apply
/// * `gross_for_period` - Gross earnings for the pay period, in dollars
/// * `frequency` - The pay frequency
/// * `profile` - The user's tax profile
///
/// # Returns
///
/// The rounded, non-negative per-period amount with notes naming the branch
/// and any exemption applied, followed by the schedule's static notes.
/// Fails with [`EngineError::UnsupportedFrequency`] when the schedule
/// declares no entry for the requested frequency.
///
/// # Calculation
///
/// Annual income is `max(0, gross * annual_factor)`. The branch depends on
/// the profile:
///
/// - non-resident: the non-resident scale, no levy;
/// - resident claiming the threshold: the threshold scale less the
///   low-income offset (floored at zero), plus the levy;
/// - resident without the threshold: the no-threshold scale plus the levy.
pub fn calculate_schedule1(
    schedule: &Schedule1Data,
    gross_for_period: Decimal,
    frequency: PayFrequency,
    profile: &TaxProfile,
) -> EngineResult<ScheduleOutcome> {
    let entry = schedule.frequencies.get(&frequency).ok_or_else(|| {
        EngineError::UnsupportedFrequency {
            frequency: frequency.to_string(),
            schedule: format!("schedule 1 ({})", schedule.effective_from),
        }
    })?;

    let mut notes = Vec::new();
    let annual_income = (gross_for_period.max(Decimal::ZERO)) * entry.annual_factor;

    let annual_tax = match profile.residency {
        Residency::NonResident => {
            notes.push("Non-resident rates applied; Medicare levy not applicable.".to_string());
            apply_bands(annual_income, &schedule.scales.non_resident)
        }
        Residency::Resident => {
            let levy = compute_medicare_levy(
                annual_income,
                profile.medicare_levy_status,
                &schedule.medicare,
            );

            let income_tax = if profile.claims_tax_free_threshold {
                notes.push("Resident rates with the tax-free threshold claimed.".to_string());
                let gross_tax = apply_bands(annual_income, &schedule.scales.resident_with_threshold);
                let offset = compute_lito(annual_income, &schedule.lito);
                (gross_tax - offset).max(Decimal::ZERO)
            } else {
                notes.push("Resident rates without the tax-free threshold.".to_string());
                apply_bands(annual_income, &schedule.scales.resident_no_threshold)
            };

            match profile.medicare_levy_status {
                MedicareLevyStatus::Standard => {}
                MedicareLevyStatus::HalfExempt => {
                    notes.push("Medicare levy reduced by half exemption.".to_string());
                }
                MedicareLevyStatus::FullExempt => {
                    notes.push("Medicare levy not withheld; full exemption.".to_string());
                }
            }

            income_tax + levy
        }
    };

    let per_period = annual_tax / entry.annual_factor;
    let amount = clamp_amount(round_amount(per_period, &entry.rounding));

    notes.extend(schedule.notes.iter().cloned());

    Ok(ScheduleOutcome { amount, notes })
}

//! Withholding orchestration.
//!
//! This module resolves the schedule versions applicable to a pay date and
//! assembles the full per-period withholding breakdown from the primary and
//! study-loan calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{EffectiveScheduleDates, PayFrequency, TaxProfile, WithholdingBreakdown};

use super::effective::select_effective;
use super::money::clamp_amount;
use super::schedule1::calculate_schedule1;
use super::schedule8::calculate_schedule8;

pub use super::schedule1::ScheduleOutcome;

/// Calculates the estimated withholding for one pay period.
///
/// Resolves the primary schedule version effective for the pay date and
/// runs the primary calculation; when the profile declares a study loan,
/// resolves the loan schedule the same way and adds its component. The
/// total is clamped non-negative, and the notes of every stage are merged
/// in order, including any fallback diagnostics from schedule selection.
///
/// # Arguments
///
/// * `tables` - The loaded schedule tables
/// * `pay_date` - The date the period is paid
/// * `gross_for_period` - Gross earnings for the period, in dollars
/// * `frequency` - The pay frequency
/// * `profile` - The user's tax profile
///
/// # Returns
///
/// The breakdown, or [`EngineError::UnsupportedFrequency`] propagated from
/// the primary calculation. A pay date before every tracked version is not
/// an error; it degrades to the earliest version with a diagnostic note.
///
/// # Example
///
/// ```no_run
/// use shiftpay_engine::calculation::calculate_withholding;
/// use shiftpay_engine::config::TaxTableLoader;
/// use shiftpay_engine::models::{MedicareLevyStatus, PayFrequency, Residency, TaxProfile};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = TaxTableLoader::load("./config/tax-au").unwrap();
/// let profile = TaxProfile {
///     residency: Residency::Resident,
///     claims_tax_free_threshold: true,
///     medicare_levy_status: MedicareLevyStatus::Standard,
///     has_study_loan: true,
/// };
///
/// let breakdown = calculate_withholding(
///     loader.tables(),
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     Decimal::from(1200),
///     PayFrequency::Weekly,
///     &profile,
/// ).unwrap();
/// assert_eq!(breakdown.total_withheld, breakdown.base_withholding + breakdown.study_loan_component);
/// ```
pub fn calculate_withholding(
    tables: &TaxTables,
    pay_date: NaiveDate,
    gross_for_period: Decimal,
    frequency: PayFrequency,
    profile: &TaxProfile,
) -> EngineResult<WithholdingBreakdown> {
    let (schedule1, fallback) =
        select_effective(tables.schedule1(), pay_date).ok_or_else(|| {
            EngineError::ConfigNotFound {
                path: "no primary schedule versions loaded".to_string(),
            }
        })?;

    let mut notes = Vec::new();
    if let Some(note) = fallback {
        notes.push(note);
    }

    let primary = calculate_schedule1(schedule1, gross_for_period, frequency, profile)?;
    notes.extend(primary.notes);

    let (study_loan_component, schedule8_effective_from) = if profile.has_study_loan {
        let (schedule8, fallback) =
            select_effective(tables.schedule8(), pay_date).ok_or_else(|| {
                EngineError::ConfigNotFound {
                    path: "no study loan schedule versions loaded".to_string(),
                }
            })?;
        if let Some(note) = fallback {
            notes.push(note);
        }

        let loan = calculate_schedule8(schedule8, gross_for_period, frequency);
        notes.extend(loan.notes);
        (loan.amount, Some(schedule8.effective_from))
    } else {
        (Decimal::ZERO, None)
    };

    Ok(WithholdingBreakdown {
        base_withholding: primary.amount,
        study_loan_component,
        total_withheld: clamp_amount(primary.amount + study_loan_component),
        schedule1_effective_from: schedule1.effective_from,
        schedule8_effective_from,
        notes,
    })
}

/// Returns the effective dates of the schedule versions for a pay date.
///
/// Intended for display and audit: the UI shows which schedule versions a
/// preview was computed from without running a full calculation.
pub fn get_effective_schedule_dates(
    tables: &TaxTables,
    pay_date: NaiveDate,
) -> EngineResult<EffectiveScheduleDates> {
    let (schedule1, _) = select_effective(tables.schedule1(), pay_date).ok_or_else(|| {
        EngineError::ConfigNotFound {
            path: "no primary schedule versions loaded".to_string(),
        }
    })?;
    let (schedule8, _) = select_effective(tables.schedule8(), pay_date).ok_or_else(|| {
        EngineError::ConfigNotFound {
            path: "no study loan schedule versions loaded".to_string(),
        }
    })?;

    Ok(EffectiveScheduleDates {
        schedule1_effective_from: schedule1.effective_from,
        schedule8_effective_from: schedule8.effective_from,
    })
}

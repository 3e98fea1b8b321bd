//! Withholding result models.
//!
//! This module contains the [`WithholdingBreakdown`] returned by the
//! withholding orchestrator and the [`EffectiveScheduleDates`] record used
//! for display and audit. Both are pure function outputs and are never
//! persisted by the engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An estimated per-period withholding breakdown.
///
/// Amounts are in whole currency (dollars) as `Decimal`, already rounded per
/// the originating schedule's rounding rule and clamped non-negative. The
/// `notes` channel carries human-readable explanations of which branches and
/// exemptions applied, in the order they were produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingBreakdown {
    /// Withholding from the primary schedule.
    pub base_withholding: Decimal,
    /// Additional withholding from the study-loan schedule; zero when no
    /// loan applies.
    pub study_loan_component: Decimal,
    /// Total withheld for the period.
    pub total_withheld: Decimal,
    /// Effective date of the primary schedule version used.
    pub schedule1_effective_from: NaiveDate,
    /// Effective date of the loan schedule version used, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule8_effective_from: Option<NaiveDate>,
    /// Human-readable calculation notes, ordered.
    pub notes: Vec<String>,
}

/// The effective dates of the schedule versions applicable to a pay date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveScheduleDates {
    /// Effective date of the applicable primary schedule version.
    pub schedule1_effective_from: NaiveDate,
    /// Effective date of the applicable loan schedule version.
    pub schedule8_effective_from: NaiveDate,
}

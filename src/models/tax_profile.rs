//! Tax profile models.
//!
//! This module defines the user-declared tax profile and the pay frequency
//! used for annualization. Variant state is modelled as closed enums and
//! exhaustively matched throughout the engine, so adding a variant is a
//! compile-time-checked exercise.

use serde::{Deserialize, Serialize};

/// Residency status for withholding purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Residency {
    /// Tax resident; resident scales, offsets, and levy apply.
    Resident,
    /// Non-resident; non-resident scale applies, no levy and no offsets.
    NonResident,
}

/// Medicare levy status declared by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicareLevyStatus {
    /// The standard levy rate applies.
    Standard,
    /// Half exemption; the reduced rate applies.
    HalfExempt,
    /// Full exemption; no levy is withheld.
    FullExempt,
}

/// How often the user is paid.
///
/// Determines the annualization factor used when projecting a per-period
/// gross amount to an annual income and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Paid every week.
    Weekly,
    /// Paid every two weeks.
    Fortnightly,
    /// Paid every calendar month.
    Monthly,
    /// Paid every quarter.
    Quarterly,
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayFrequency::Weekly => write!(f, "weekly"),
            PayFrequency::Fortnightly => write!(f, "fortnightly"),
            PayFrequency::Monthly => write!(f, "monthly"),
            PayFrequency::Quarterly => write!(f, "quarterly"),
        }
    }
}

/// The user-declared tax profile.
///
/// Owned by application settings and passed by value into each withholding
/// call; the engine never mutates it.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::{MedicareLevyStatus, Residency, TaxProfile};
///
/// let profile = TaxProfile {
///     residency: Residency::Resident,
///     claims_tax_free_threshold: true,
///     medicare_levy_status: MedicareLevyStatus::Standard,
///     has_study_loan: false,
/// };
/// assert_eq!(profile.residency, Residency::Resident);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxProfile {
    /// Residency status.
    pub residency: Residency,
    /// Whether the tax-free threshold is claimed with this payer.
    pub claims_tax_free_threshold: bool,
    /// Medicare levy status.
    pub medicare_levy_status: MedicareLevyStatus,
    /// Whether a study/training support loan repayment applies.
    pub has_study_loan: bool,
}

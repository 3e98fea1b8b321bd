//! Schedule table types for withholding calculation.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML schedule files. Each schedule is an immutable, versioned regulatory
//! table carrying its own effective date; multiple versions coexist as a
//! time series and are loaded once at process start, never mutated.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::PayFrequency;

/// A single band of a progressive tax scale.
///
/// Bands are ordered by strictly increasing threshold, with the first
/// threshold at zero. The active band for an income is the highest-threshold
/// band whose threshold does not exceed the income.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxRateBand {
    /// Annual income at which this band starts.
    pub threshold: Decimal,
    /// Marginal rate applied to income above the threshold.
    pub marginal_rate: Decimal,
    /// Accumulated tax owed at exactly the threshold.
    pub base_tax: Decimal,
}

/// The three progressive scales of a primary schedule version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateScales {
    /// Scale for residents claiming the tax-free threshold.
    pub resident_with_threshold: Vec<TaxRateBand>,
    /// Scale for residents not claiming the tax-free threshold.
    pub resident_no_threshold: Vec<TaxRateBand>,
    /// Scale for non-residents.
    pub non_resident: Vec<TaxRateBand>,
}

/// Low-income offset parameters.
///
/// The offset is monotonically non-increasing in income above
/// `full_threshold` and floored at zero.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LitoConfig {
    /// Maximum offset, granted in full at or below `full_threshold`.
    pub maximum: Decimal,
    /// Income up to which the maximum offset applies.
    pub full_threshold: Decimal,
    /// Income up to which the first phase-out rate applies.
    pub middle_threshold: Decimal,
    /// Income beyond which the offset is zero.
    pub phase_out: Decimal,
    /// Phase-out rate between `full_threshold` and `middle_threshold`.
    pub phase_out_rate_low: Decimal,
    /// Phase-out rate between `middle_threshold` and `phase_out`.
    pub phase_out_rate_high: Decimal,
    /// Offset remaining at exactly `middle_threshold`.
    pub middle_offset: Decimal,
}

/// Medicare levy rates for a schedule version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MedicareConfig {
    /// Levy rate for the standard status.
    pub standard_rate: Decimal,
    /// Levy rate for the half-exempt status.
    pub half_rate: Decimal,
}

/// Rounding mode for per-period amounts.
///
/// Only half-up is currently defined by any schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to nearest, ties away from zero.
    HalfUp,
}

/// A schedule's declared rounding rule for per-period amounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoundingRule {
    /// The rounding step, e.g. `1` for whole dollars, `0.01` for cents.
    pub precision: Decimal,
    /// The rounding mode.
    pub mode: RoundingMode,
}

/// Per-frequency parameters of a primary schedule version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrequencyEntry {
    /// Multiplier converting a per-period amount to an annual equivalent.
    pub annual_factor: Decimal,
    /// Rounding applied to the de-annualized per-period withholding.
    pub rounding: RoundingRule,
}

/// One effective-dated version of the primary withholding schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Schedule1Data {
    /// The date from which this version applies.
    pub effective_from: NaiveDate,
    /// Supported pay frequencies and their parameters.
    pub frequencies: HashMap<PayFrequency, FrequencyEntry>,
    /// The progressive scales.
    pub scales: RateScales,
    /// Low-income offset parameters.
    pub lito: LitoConfig,
    /// Medicare levy rates.
    pub medicare: MedicareConfig,
    /// Static notes carried into every result computed from this version.
    #[serde(default)]
    pub notes: Vec<String>,
}

/// One repayment tier of the study-loan schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoanRepaymentTier {
    /// Minimum annual income at which this tier starts.
    pub minimum: Decimal,
    /// Flat repayment rate applied to the full annual income.
    pub rate: Decimal,
}

/// One effective-dated version of the study-loan withholding schedule.
///
/// Annual income below the first tier's minimum triggers no repayment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Schedule8Data {
    /// The date from which this version applies.
    pub effective_from: NaiveDate,
    /// Repayment tiers, ordered by strictly increasing minimum.
    pub tiers: Vec<LoanRepaymentTier>,
    /// Rounding applied to the de-annualized per-period component.
    pub rounding: RoundingRule,
    /// Static notes carried into every result computed from this version.
    #[serde(default)]
    pub notes: Vec<String>,
}

/// The complete set of loaded schedule versions.
///
/// Both series are stable-sorted by effective date at construction, so
/// records sharing an effective date keep their load order.
#[derive(Debug, Clone)]
pub struct TaxTables {
    /// Primary schedule versions (sorted oldest first).
    schedule1: Vec<Schedule1Data>,
    /// Study-loan schedule versions (sorted oldest first).
    schedule8: Vec<Schedule8Data>,
}

impl TaxTables {
    /// Creates a new table set from its component series.
    pub fn new(schedule1: Vec<Schedule1Data>, schedule8: Vec<Schedule8Data>) -> Self {
        let mut schedule1 = schedule1;
        let mut schedule8 = schedule8;
        schedule1.sort_by(|a, b| a.effective_from.cmp(&b.effective_from));
        schedule8.sort_by(|a, b| a.effective_from.cmp(&b.effective_from));
        Self {
            schedule1,
            schedule8,
        }
    }

    /// Returns all primary schedule versions, oldest first.
    pub fn schedule1(&self) -> &[Schedule1Data] {
        &self.schedule1
    }

    /// Returns all study-loan schedule versions, oldest first.
    pub fn schedule8(&self) -> &[Schedule8Data] {
        &self.schedule8
    }
}

//! Request types for the Pay and Withholding Engine API.
//!
//! This module defines the JSON request structures for the `/pay` and
//! `/withholding` endpoints. Dates arrive as strings from the UI forms and
//! are parsed here, surfacing `InvalidDate` before any calculation runs.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    MedicareLevyStatus, PayFrequency, PenaltyRules, Residency, ShiftInterval, TaxProfile,
};

/// Parses a calendar date in `YYYY-MM-DD` form.
pub(crate) fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses a local datetime in `YYYY-MM-DDTHH:MM:SS` form.
pub(crate) fn parse_datetime(value: &str) -> EngineResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map_err(|_| {
        EngineError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Request body for the `/pay` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayRequest {
    /// The shift interval to price.
    pub shift: ShiftIntervalRequest,
    /// The penalty rules from the caller's settings.
    pub penalty_rules: PenaltyRulesRequest,
    /// Hourly base rate in cents.
    pub base_rate_cents_per_hour: i64,
    /// Hourly penalty rate in cents.
    pub penalty_rate_cents_per_hour: i64,
}

/// Shift interval in a pay request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftIntervalRequest {
    /// Clock-in, as `YYYY-MM-DDTHH:MM:SS`.
    pub start: String,
    /// Clock-out, as `YYYY-MM-DDTHH:MM:SS`.
    pub end: String,
}

/// Penalty rules in a pay request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyRulesRequest {
    /// Whether the daily penalty window applies.
    #[serde(default)]
    pub daily_window_enabled: bool,
    /// Window start, in minutes from midnight.
    #[serde(default)]
    pub daily_start_minute: u32,
    /// Window end (exclusive), in minutes from midnight.
    #[serde(default)]
    pub daily_end_minute: u32,
    /// Weekdays on which the entire day is penalty time.
    #[serde(default)]
    pub all_day_weekdays: Vec<Weekday>,
    /// Whether tracked public holidays are all-day penalty time.
    #[serde(default)]
    pub include_public_holidays: bool,
    /// Tracked public holiday dates, as `YYYY-MM-DD`.
    #[serde(default)]
    pub public_holiday_dates: Vec<String>,
}

/// Request body for the `/withholding` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithholdingRequest {
    /// The pay date, as `YYYY-MM-DD`.
    pub pay_date: String,
    /// Gross earnings for the period, in dollars.
    pub gross_for_period: Decimal,
    /// The pay frequency.
    pub frequency: PayFrequency,
    /// The tax profile from the caller's settings.
    pub profile: TaxProfileRequest,
}

/// Tax profile in a withholding request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxProfileRequest {
    /// Residency status.
    pub residency: Residency,
    /// Whether the tax-free threshold is claimed.
    pub claims_tax_free_threshold: bool,
    /// Medicare levy status.
    pub medicare_levy_status: MedicareLevyStatus,
    /// Whether a study loan repayment applies.
    #[serde(default)]
    pub has_study_loan: bool,
}

impl TryFrom<ShiftIntervalRequest> for ShiftInterval {
    type Error = EngineError;

    fn try_from(req: ShiftIntervalRequest) -> EngineResult<Self> {
        Ok(ShiftInterval {
            start: parse_datetime(&req.start)?,
            end: parse_datetime(&req.end)?,
        })
    }
}

impl TryFrom<PenaltyRulesRequest> for PenaltyRules {
    type Error = EngineError;

    fn try_from(req: PenaltyRulesRequest) -> EngineResult<Self> {
        let public_holiday_dates = req
            .public_holiday_dates
            .iter()
            .map(|value| parse_date(value))
            .collect::<EngineResult<_>>()?;

        Ok(PenaltyRules {
            daily_window_enabled: req.daily_window_enabled,
            daily_start_minute: req.daily_start_minute,
            daily_end_minute: req.daily_end_minute,
            all_day_weekdays: req.all_day_weekdays.into_iter().collect(),
            include_public_holidays: req.include_public_holidays,
            public_holiday_dates,
        })
    }
}

impl From<TaxProfileRequest> for TaxProfile {
    fn from(req: TaxProfileRequest) -> Self {
        TaxProfile {
            residency: req.residency,
            claims_tax_free_threshold: req.claims_tax_free_threshold,
            medicare_levy_status: req.medicare_levy_status,
            has_study_loan: req.has_study_loan,
        }
    }
}

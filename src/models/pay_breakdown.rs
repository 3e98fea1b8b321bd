//! Pay breakdown models.
//!
//! This module contains the per-day [`DailySegment`] record produced by the
//! day splitter and the aggregate [`ShiftPayBreakdown`] produced by the pay
//! assembler. All money is carried in integer minor currency units (cents);
//! the engine never represents currency as floating point.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The classified minutes of a shift within a single calendar day.
///
/// Invariant: `minutes_base + minutes_penalty == minutes_total`, all
/// non-negative. Segments are produced fresh per call, one per calendar day
/// the interval touches, in chronological order.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::DailySegment;
/// use chrono::NaiveDate;
///
/// let segment = DailySegment {
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     minutes_total: 120,
///     minutes_penalty: 120,
///     minutes_base: 0,
/// };
/// assert_eq!(segment.minutes_base + segment.minutes_penalty, segment.minutes_total);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySegment {
    /// The calendar day this segment falls on.
    pub date: NaiveDate,
    /// Total worked minutes within the day.
    pub minutes_total: i64,
    /// Minutes classified as penalty time.
    pub minutes_penalty: i64,
    /// Minutes classified as base time.
    pub minutes_base: i64,
}

/// The full pay breakdown for a shift.
///
/// Derived entirely from a shift interval, the penalty rules, and the two
/// hourly rates; recomputed whenever any of those change and otherwise held
/// as a cached denormalization on the owning shift record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPayBreakdown {
    /// Total minutes paid at the base rate.
    pub base_minutes: i64,
    /// Total minutes paid at the penalty rate.
    pub penalty_minutes: i64,
    /// Total worked minutes.
    pub total_minutes: i64,
    /// Base pay in cents.
    pub base_pay_cents: i64,
    /// Penalty pay in cents.
    pub penalty_pay_cents: i64,
    /// Total pay in cents; always exactly `base_pay_cents + penalty_pay_cents`.
    pub total_pay_cents: i64,
    /// Per-day segments, chronologically ordered.
    pub segments: Vec<DailySegment>,
}

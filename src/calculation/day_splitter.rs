//! Interval day-splitting and penalty classification.
//!
//! This module walks a shift interval in calendar-day-aligned chunks and
//! classifies each day's minutes as base or penalty time according to the
//! configured penalty rules. Splitting at midnight is what makes weekend,
//! holiday, and time-window rules apply to the correct portion of an
//! overnight shift.

use chrono::Timelike;

use crate::error::EngineResult;
use crate::models::{DailySegment, PenaltyRules, ShiftInterval};

/// Splits an interval into per-day segments of classified minutes.
///
/// The interval is walked from start to end in chunks aligned to calendar
/// days. For each chunk, classification precedence is evaluated once using
/// that day's date:
///
/// 1. All-day rules (weekday set, tracked public holidays) make the entire
///    chunk penalty time.
/// 2. Otherwise a well-formed daily window contributes its minute-overlap
///    with the chunk as penalty time; the remainder is base time.
/// 3. Otherwise the entire chunk is base time.
///
/// Chunks with zero minutes (possible exactly at a day boundary) are
/// skipped. The function is pure and deterministic.
///
/// # Arguments
///
/// * `interval` - The shift interval to split
/// * `rules` - The penalty rules to classify against
///
/// # Returns
///
/// Chronologically ordered segments whose `minutes_total` values sum to the
/// interval's duration, or [`EngineError::InvalidInterval`] when the
/// interval's end is not strictly after its start.
///
/// [`EngineError::InvalidInterval`]: crate::error::EngineError::InvalidInterval
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::split_by_day;
/// use shiftpay_engine::models::{PenaltyRules, ShiftInterval};
/// use chrono::{NaiveDateTime, Weekday};
///
/// // Saturday 22:00 to Sunday 06:00 with weekends as all-day penalty.
/// let interval = ShiftInterval::new(
///     NaiveDateTime::parse_from_str("2026-01-17 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2026-01-18 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ).unwrap();
/// let rules = PenaltyRules {
///     all_day_weekdays: [Weekday::Sat, Weekday::Sun].into_iter().collect(),
///     ..PenaltyRules::default()
/// };
///
/// let segments = split_by_day(&interval, &rules).unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments.iter().map(|s| s.minutes_penalty).sum::<i64>(), 480);
/// assert_eq!(segments.iter().map(|s| s.minutes_base).sum::<i64>(), 0);
/// ```
pub fn split_by_day(
    interval: &ShiftInterval,
    rules: &PenaltyRules,
) -> EngineResult<Vec<DailySegment>> {
    interval.validate()?;

    let mut segments = Vec::new();
    let mut cursor = interval.start;

    while cursor < interval.end {
        // Midnight at the end of the cursor's day
        let next_midnight = (cursor.date() + chrono::Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .expect("valid midnight time");

        let chunk_end = if next_midnight <= interval.end {
            next_midnight
        } else {
            interval.end
        };

        let minutes_total = (chunk_end - cursor).num_minutes();
        if minutes_total > 0 {
            let date = cursor.date();
            let minutes_penalty = if rules.is_all_day_penalty(date) {
                minutes_total
            } else if let Some((window_start, window_end)) = rules.daily_window() {
                let chunk_start = i64::from(cursor.time().num_seconds_from_midnight() / 60);
                let chunk_stop = chunk_start + minutes_total;
                let overlap = chunk_stop.min(i64::from(window_end))
                    - chunk_start.max(i64::from(window_start));
                overlap.max(0)
            } else {
                0
            };

            segments.push(DailySegment {
                date,
                minutes_total,
                minutes_penalty,
                minutes_base: minutes_total - minutes_penalty,
            });
        }

        cursor = chunk_end;
    }

    Ok(segments)
}

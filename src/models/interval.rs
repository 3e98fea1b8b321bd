//! Shift interval model.
//!
//! This module defines the ShiftInterval struct representing a raw
//! clock-in/clock-out pair before any pay classification.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a raw worked interval from clock-in to clock-out.
///
/// Intervals are ephemeral: they are constructed per calculation call and
/// never persisted by the engine itself. The only invariant is that the end
/// is strictly after the start, checked by [`ShiftInterval::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// The clock-in instant.
    pub start: NaiveDateTime,
    /// The clock-out instant.
    pub end: NaiveDateTime,
}

impl ShiftInterval {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] unless `end > start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftpay_engine::models::ShiftInterval;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2026-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let interval = ShiftInterval::new(start, end).unwrap();
    /// assert_eq!(interval.duration_minutes(), 480);
    ///
    /// assert!(ShiftInterval::new(end, start).is_err());
    /// ```
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        let interval = Self { start, end };
        interval.validate()?;
        Ok(interval)
    }

    /// Checks the `end > start` invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] when the end is at or before
    /// the start.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end <= self.start {
            return Err(EngineError::InvalidInterval {
                message: format!(
                    "end ({}) must be strictly after start ({})",
                    self.end, self.start
                ),
            });
        }
        Ok(())
    }

    /// Returns the total duration of the interval in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

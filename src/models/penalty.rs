//! Penalty rule configuration.
//!
//! This module defines the PenaltyRules struct describing when worked time
//! attracts the penalty rate instead of the base rate. The rules are owned
//! by the application settings and passed into each split call; the engine
//! never mutates them.

use std::collections::{BTreeSet, HashSet};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Number of minutes in a calendar day.
pub(crate) const MINUTES_PER_DAY: u32 = 1440;

/// Configuration describing which worked minutes are penalty time.
///
/// Two mechanisms combine, evaluated per calendar day:
///
/// - **All-day rules**: a day whose weekday is in [`all_day_weekdays`], or
///   whose date is a tracked public holiday (when
///   [`include_public_holidays`] is set), is penalty time in its entirety.
/// - **Daily window**: when [`daily_window_enabled`] is set and the window
///   is well-formed (`daily_end_minute > daily_start_minute`), the minutes
///   `[daily_start_minute, daily_end_minute)` of each remaining day are
///   penalty time.
///
/// All-day rules take precedence over the window; days matched by neither
/// are entirely base time.
///
/// [`all_day_weekdays`]: PenaltyRules::all_day_weekdays
/// [`include_public_holidays`]: PenaltyRules::include_public_holidays
/// [`daily_window_enabled`]: PenaltyRules::daily_window_enabled
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::PenaltyRules;
/// use chrono::Weekday;
///
/// // Weekends all-day penalty, plus an early-morning window on weekdays.
/// let rules = PenaltyRules {
///     daily_window_enabled: true,
///     daily_start_minute: 0,
///     daily_end_minute: 7 * 60,
///     all_day_weekdays: [Weekday::Sat, Weekday::Sun].into_iter().collect(),
///     include_public_holidays: false,
///     public_holiday_dates: Default::default(),
/// };
/// assert!(rules.is_all_day_penalty(chrono::NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyRules {
    /// Whether the daily penalty window applies.
    pub daily_window_enabled: bool,
    /// Window start, in minutes from midnight (0..1440).
    pub daily_start_minute: u32,
    /// Window end (exclusive), in minutes from midnight (0..1440).
    pub daily_end_minute: u32,
    /// Weekdays on which the entire day is penalty time.
    #[serde(default)]
    pub all_day_weekdays: HashSet<Weekday>,
    /// Whether tracked public holidays are all-day penalty time.
    pub include_public_holidays: bool,
    /// The tracked public holiday dates.
    #[serde(default)]
    pub public_holiday_dates: BTreeSet<NaiveDate>,
}

impl PenaltyRules {
    /// Returns true if the given date is penalty time in its entirety.
    ///
    /// A date qualifies when its weekday carries an all-day rule, or when it
    /// is a tracked public holiday and holidays are included.
    pub fn is_all_day_penalty(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;

        self.all_day_weekdays.contains(&date.weekday())
            || (self.include_public_holidays && self.public_holiday_dates.contains(&date))
    }

    /// Returns the daily penalty window when it is enabled and well-formed.
    ///
    /// A window is well-formed when its end is strictly after its start and
    /// both endpoints lie within the day. Disabled or malformed windows are
    /// ignored by classification rather than rejected.
    pub fn daily_window(&self) -> Option<(u32, u32)> {
        if self.daily_window_enabled
            && self.daily_end_minute > self.daily_start_minute
            && self.daily_end_minute <= MINUTES_PER_DAY
        {
            Some((self.daily_start_minute, self.daily_end_minute))
        } else {
            None
        }
    }
}

impl Default for PenaltyRules {
    fn default() -> Self {
        Self {
            daily_window_enabled: false,
            daily_start_minute: 0,
            daily_end_minute: 0,
            all_day_weekdays: HashSet::new(),
            include_public_holidays: false,
            public_holiday_dates: BTreeSet::new(),
        }
    }
}

//! Effective-dated schedule selection.
//!
//! Regulatory schedules form a time series: each version applies from its
//! effective date until superseded by a later one. Selection picks the
//! version applicable to a pay date, degrading leniently when the date
//! precedes every tracked version.

use chrono::NaiveDate;

use crate::config::{Schedule1Data, Schedule8Data};

/// A record carrying an effective date.
pub trait EffectiveDated {
    /// The date from which this record applies.
    fn effective_from(&self) -> NaiveDate;
}

impl EffectiveDated for Schedule1Data {
    fn effective_from(&self) -> NaiveDate {
        self.effective_from
    }
}

impl EffectiveDated for Schedule8Data {
    fn effective_from(&self) -> NaiveDate {
        self.effective_from
    }
}

/// Selects the record applicable to a pay date.
///
/// Candidates are stable-sorted ascending by effective date (input order is
/// not trusted) and the last record whose effective date does not exceed the
/// pay date wins. When the pay date precedes every record, the earliest
/// record is returned together with a diagnostic note; historical data
/// before the tracked window is out of scope, so this is a deliberate
/// lenient-degrade policy rather than a failure.
///
/// Records sharing an effective date resolve by input order: the stable sort
/// preserves it, and the later record wins.
///
/// # Returns
///
/// `None` only when `records` is empty; otherwise the selected record and an
/// optional fallback note.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::{select_effective, EffectiveDated};
/// use chrono::NaiveDate;
///
/// struct Version(NaiveDate);
/// impl EffectiveDated for Version {
///     fn effective_from(&self) -> NaiveDate { self.0 }
/// }
///
/// let date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let versions = vec![Version(date("2024-07-01")), Version(date("2024-06-17"))];
///
/// let (selected, note) = select_effective(&versions, date("2024-06-20")).unwrap();
/// assert_eq!(selected.effective_from(), date("2024-06-17"));
/// assert!(note.is_none());
/// ```
pub fn select_effective<T: EffectiveDated>(
    records: &[T],
    pay_date: NaiveDate,
) -> Option<(&T, Option<String>)> {
    let mut ordered: Vec<&T> = records.iter().collect();
    ordered.sort_by_key(|r| r.effective_from());

    let earliest = *ordered.first()?;

    match ordered
        .iter()
        .rev()
        .copied()
        .find(|r| r.effective_from() <= pay_date)
    {
        Some(record) => Some((record, None)),
        None => {
            let note = format!(
                "Pay date {} precedes all schedule versions; using earliest, effective {}.",
                pay_date,
                earliest.effective_from()
            );
            Some((earliest, Some(note)))
        }
    }
}

//! Calculation logic for the Pay and Withholding Engine.
//!
//! This module contains all the calculation functions: splitting shift
//! intervals at calendar-day boundaries, classifying minutes as base or
//! penalty time, converting minutes to exact integer-cent pay, selecting
//! effective-dated schedule versions, evaluating progressive tax brackets,
//! the low-income offset and Medicare levy, and assembling per-period
//! withholding from the primary and study-loan schedules.

mod brackets;
mod day_splitter;
mod effective;
mod lito;
mod medicare;
mod money;
mod pay;
mod schedule1;
mod schedule8;
mod withholding;

pub use brackets::apply_bands;
pub use day_splitter::split_by_day;
pub use effective::{select_effective, EffectiveDated};
pub use lito::compute_lito;
pub use medicare::compute_medicare_levy;
pub use money::{clamp_amount, minutes_to_cents, round_amount};
pub use pay::compute_pay;
pub use schedule1::calculate_schedule1;
pub use schedule8::{calculate_schedule8, loan_annual_factor};
pub use withholding::{calculate_withholding, get_effective_schedule_dates, ScheduleOutcome};

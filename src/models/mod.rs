//! Core data models for the Pay and Withholding Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod interval;
mod pay_breakdown;
mod penalty;
mod tax_profile;
mod withholding;

pub use interval::ShiftInterval;
pub use pay_breakdown::{DailySegment, ShiftPayBreakdown};
pub use penalty::PenaltyRules;
pub use tax_profile::{MedicareLevyStatus, PayFrequency, Residency, TaxProfile};
pub use withholding::{EffectiveScheduleDates, WithholdingBreakdown};

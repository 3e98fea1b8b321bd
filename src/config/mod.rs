//! Regulatory schedule tables for withholding calculation.
//!
//! This module contains the strongly-typed schedule data structures and the
//! [`TaxTableLoader`] that reads them from YAML files and validates them at
//! load time.

mod loader;
mod types;

pub use loader::TaxTableLoader;
pub use types::{
    FrequencyEntry, LitoConfig, LoanRepaymentTier, MedicareConfig, RateScales, RoundingMode,
    RoundingRule, Schedule1Data, Schedule8Data, TaxRateBand, TaxTables,
};

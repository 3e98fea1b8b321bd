//! Pay and Withholding Engine for an offline-first shift tracker
//!
//! This crate provides the computation core of a shift-tracking application:
//! splitting a clock-in/clock-out interval into per-day base and penalty
//! minutes, converting minutes to exact integer-cent pay, and estimating
//! per-period tax withholding from effective-dated regulatory schedules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

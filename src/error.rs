//! Error types for the Pay and Withholding Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during pay splitting, schedule
//! loading, and withholding calculation.

use thiserror::Error;

/// The main error type for the Pay and Withholding Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shiftpay_engine::error::EngineError;
///
/// let error = EngineError::InvalidInterval {
///     message: "end must be after start".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid shift interval: end must be after start");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A shift interval did not satisfy `end > start`.
    #[error("Invalid shift interval: {message}")]
    InvalidInterval {
        /// A description of what made the interval invalid.
        message: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date: '{value}'")]
    InvalidDate {
        /// The value that failed to parse.
        value: String,
    },

    /// The requested pay frequency is absent from a schedule table.
    #[error("Unsupported pay frequency '{frequency}' for schedule {schedule}")]
    UnsupportedFrequency {
        /// The frequency that was requested.
        frequency: String,
        /// The schedule that lacks the frequency.
        schedule: String,
    },

    /// Schedule table file was not found at the specified path.
    #[error("Schedule table not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Schedule table file could not be parsed.
    #[error("Failed to parse schedule table '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A schedule table failed schema validation at load time.
    ///
    /// This is fatal at startup: a corrupt regulatory table must never
    /// silently produce wrong tax amounts.
    #[error("Schedule table '{path}' failed validation: {message}")]
    ScheduleValidation {
        /// The path to the offending file.
        path: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

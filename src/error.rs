//! Error types for the Payslip Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around payslip computation. The
//! computation itself is total; errors arise from configuration loading and
//! from request-level preconditions such as structure lookup.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payslip Computation Engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No salary structure covers the requested date.
    #[error("No salary structure in effect on {date}")]
    StructureNotFound {
        /// The date for which a structure was requested.
        date: NaiveDate,
    },

    /// A pay period was invalid or contained inconsistent dates.
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of what made the period invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Error types for the Deployment Roster Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the schedule pipeline.

use thiserror::Error;

/// The main error type for the Deployment Roster Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::MalformedTime {
///     token: "25:99x".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed time token: '25:99x'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The schedule text yielded nothing usable.
    ///
    /// Raised when no employee rows are recoverable, or when the document
    /// carries employee rows but no week date range to anchor them to.
    #[error("Schedule parse failed: {message}")]
    ScheduleParse {
        /// A description of what the parser could not recover.
        message: String,
    },

    /// A time token did not match the `h:mm[a|p]` form, or normalized to
    /// an impossible 24-hour time.
    #[error("Malformed time token: '{token}'")]
    MalformedTime {
        /// The offending token as it appeared in the input.
        token: String,
    },

    /// A staff CSV file could not be processed at all (missing or
    /// unusable header row). Row-level problems are collected instead.
    #[error("CSV import failed: {message}")]
    CsvImport {
        /// A description of the file-level problem.
        message: String,
    },

    /// A single staff CSV row failed validation. Collected per row,
    /// never fatal to the rest of the file.
    #[error("CSV row {row}: {message}")]
    CsvRow {
        /// The 1-based line number within the file (the header is line 1).
        row: usize,
        /// A description of the row-level problem.
        message: String,
    },

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

    /// A staffing rule was referenced by name but is not configured.
    #[error("Staffing rule not found: {name}")]
    RuleNotFound {
        /// The rule name that was not found.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

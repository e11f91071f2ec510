//! Error types for payroll report generation.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the fatal conditions of a report run. Row-local problems (malformed
//! rows, missing or unparsable fields) are not errors; they are emitted as
//! [`crate::diagnostics::Diagnostic`] values and never abort a batch.

use thiserror::Error;

/// The main error type for payroll report generation.
///
/// Every variant is fatal for the whole run: the library returns it to the
/// calling layer, which decides whether to terminate the process. No
/// operation retries, and no partial report is produced on these paths.
///
/// # Example
///
/// ```
/// use payroll_report::error::ReportError;
///
/// let error = ReportError::InputNotFound {
///     path: "/missing/employees.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: /missing/employees.csv");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// An input file was not found at the specified path.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// An input file exists but could not be read.
    #[error("Failed to read input file '{path}': {message}")]
    InputRead {
        /// The path to the file that failed to read.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// The output path has an extension no formatter handles.
    #[error("Unsupported output format: {path}")]
    UnsupportedOutputFormat {
        /// The output path that was requested.
        path: String,
    },

    /// The report could not be written to the output destination.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWrite {
        /// The path to the file that failed to write.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// The report document could not be serialized.
    #[error("Failed to serialize report: {message}")]
    SerializeFailed {
        /// A description of the serialization error.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

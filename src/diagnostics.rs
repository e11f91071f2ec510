//! Row-local diagnostics for skipped rows and records.
//!
//! Invalid rows and records are excluded from results rather than aborting
//! a batch. Each exclusion produces a [`Diagnostic`] written to a
//! [`DiagnosticSink`], so the binary can log them as warnings and tests can
//! assert on them without capturing process-wide log state.

use std::fmt;

use crate::models::Record;

/// A non-fatal event describing a skipped row or record.
///
/// Diagnostics are informational; they never appear in the report payload
/// and never escalate to a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A row's field count did not match the header's field count.
    RowArityMismatch {
        /// The input source the row came from.
        source: String,
        /// The offending raw line.
        line: String,
        /// The number of fields in the header.
        expected: usize,
        /// The number of fields found in the row.
        found: usize,
    },
    /// A record had none of the recognized rate fields.
    MissingRateField {
        /// The record that was skipped.
        record: Record,
    },
    /// A numeric field contained text that does not parse as a number.
    InvalidNumber {
        /// The name of the field that failed to parse.
        field: String,
        /// The raw value that failed to parse.
        value: String,
        /// The record that was skipped.
        record: Record,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RowArityMismatch {
                source,
                line,
                expected,
                found,
            } => write!(
                f,
                "Skipped row with field count mismatch in '{}' (expected {}, found {}): {}",
                source, expected, found, line
            ),
            Diagnostic::MissingRateField { record } => {
                write!(f, "Skipped record without a rate field: {}", record)
            }
            Diagnostic::InvalidNumber {
                field,
                value,
                record,
            } => write!(
                f,
                "Skipped record with invalid number in '{}' ('{}'): {}",
                field, value, record
            ),
        }
    }
}

/// A destination for diagnostics emitted during a run.
///
/// The parser and the aggregators write every skip event here instead of
/// logging directly, which keeps the core testable and leaves the logging
/// policy to the caller.
pub trait DiagnosticSink {
    /// Records a single diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// A sink that forwards diagnostics to `tracing` at warn level.
///
/// This is the sink the command-line binary installs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
    }
}

/// A sink that buffers diagnostics in memory, in emission order.
///
/// Used by tests to assert on emitted diagnostics.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    /// The diagnostics emitted so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink for CollectingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

//! Report aggregation strategies.
//!
//! This module contains the two aggregation strategies over parsed
//! records: per-employee payouts and per-department average rates. Both
//! consume the record sequence read-only, skip invalid records with a
//! diagnostic, and produce the [`ReportDocument`] handed to the output
//! boundary.

mod average_rate;
mod payout;

pub use average_rate::AverageRateReport;
pub use payout::PayoutReport;

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::models::{Record, ReportDocument, ReportKind};

/// A report aggregation strategy.
///
/// Generators are polymorphic over a single capability: producing a result
/// document from an ordered sequence of records. Row-local failures are
/// emitted to the sink and never abort the batch.
pub trait ReportGenerator {
    /// The kind tag of documents this generator produces.
    fn kind(&self) -> ReportKind;

    /// Produces a result document from the record sequence.
    fn generate(&self, records: &[Record], sink: &mut dyn DiagnosticSink) -> ReportDocument;
}

/// Returns the generator for a report kind.
pub fn generator_for(kind: ReportKind) -> Box<dyn ReportGenerator> {
    match kind {
        ReportKind::Payout => Box::new(PayoutReport),
        ReportKind::AverageRate => Box::new(AverageRateReport),
    }
}

/// Rounds a monetary value to exactly two decimal places.
///
/// Rounds at the midpoint with banker's rounding, then pads the scale so
/// values always carry two decimals.
pub(crate) fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// Parses a numeric field of a record, emitting a diagnostic on failure.
///
/// The failure is local to the record: the caller skips the record and
/// continues with the next one.
pub(crate) fn parse_numeric_field(
    field: &str,
    value: &str,
    record: &Record,
    sink: &mut dyn DiagnosticSink,
) -> Option<Decimal> {
    match Decimal::from_str(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            sink.emit(Diagnostic::InvalidNumber {
                field: field.to_string(),
                value: value.to_string(),
                record: record.clone(),
            });
            None
        }
    }
}

//! Per-department average rate aggregation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::info;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::models::{Record, ReportDocument, ReportKind};

use super::{ReportGenerator, parse_numeric_field, round_to_cents};

/// Computes the arithmetic mean of resolved rates per department.
///
/// Rates are accumulated into per-department buckets in one pass, then each
/// bucket is reduced to its mean, rounded to 2 decimal places. A record
/// without a department field contributes to the empty-string department.
/// Departments without a single contributing record are omitted entirely
/// rather than reported as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageRateReport;

impl ReportGenerator for AverageRateReport {
    fn kind(&self) -> ReportKind {
        ReportKind::AverageRate
    }

    fn generate(&self, records: &[Record], sink: &mut dyn DiagnosticSink) -> ReportDocument {
        info!("Generating average_rate report");
        let mut rates_by_department: BTreeMap<String, Vec<Decimal>> = BTreeMap::new();

        for record in records {
            let Some((rate_field, rate_raw)) = record.resolved_rate() else {
                sink.emit(Diagnostic::MissingRateField {
                    record: record.clone(),
                });
                continue;
            };
            let Some(rate) = parse_numeric_field(rate_field, rate_raw, record, sink) else {
                continue;
            };

            rates_by_department
                .entry(record.get_or_empty("department").to_string())
                .or_default()
                .push(rate);
        }

        // Buckets are only created for successfully parsed rates, so every
        // bucket is non-empty.
        let averages = rates_by_department
            .into_iter()
            .map(|(department, rates)| {
                let total: Decimal = rates.iter().copied().sum();
                let mean = total / Decimal::from(rates.len() as u64);
                (department, round_to_cents(mean))
            })
            .collect();

        ReportDocument::AverageRate(averages)
    }
}

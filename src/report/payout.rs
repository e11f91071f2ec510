//! Per-employee payout aggregation.

use tracing::info;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::models::{PayoutEntry, Record, ReportDocument, ReportKind};

use super::{ReportGenerator, parse_numeric_field, round_to_cents};

/// Computes one payout entry per record: hours worked times resolved rate.
///
/// A record missing `hours_worked` is treated as having worked zero hours.
/// A record without any rate field, or with a non-numeric `hours_worked`
/// or rate value, is skipped with a diagnostic; the batch always
/// completes. Output order matches input order, and skipped records leave
/// no entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoutReport;

impl ReportGenerator for PayoutReport {
    fn kind(&self) -> ReportKind {
        ReportKind::Payout
    }

    fn generate(&self, records: &[Record], sink: &mut dyn DiagnosticSink) -> ReportDocument {
        info!("Generating payout report");
        let mut results = Vec::new();

        for record in records {
            // Hours are examined before the rate field, so a record failing
            // both reports the numeric failure.
            let hours_raw = record.get("hours_worked").unwrap_or("0");
            let Some(hours) = parse_numeric_field("hours_worked", hours_raw, record, sink) else {
                continue;
            };

            let Some((rate_field, rate_raw)) = record.resolved_rate() else {
                sink.emit(Diagnostic::MissingRateField {
                    record: record.clone(),
                });
                continue;
            };
            let Some(rate) = parse_numeric_field(rate_field, rate_raw, record, sink) else {
                continue;
            };

            results.push(PayoutEntry {
                id: record.get_or_empty("id").to_string(),
                name: record.get_or_empty("name").to_string(),
                department: record.get_or_empty("department").to_string(),
                payout: round_to_cents(hours * rate),
            });
        }

        ReportDocument::Payout(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_record(pairs: &[(&str, &str)]) -> Record {
        Record::from_pairs(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        )
    }

    fn generate(records: &[Record]) -> (Vec<PayoutEntry>, CollectingSink) {
        let mut sink = CollectingSink::default();
        match PayoutReport.generate(records, &mut sink) {
            ReportDocument::Payout(results) => (results, sink),
            other => panic!("Expected payout document, got {:?}", other),
        }
    }

    /// PO-001: 160 hours at rate 50 pays 8000
    #[test]
    fn test_payout_is_hours_times_rate() {
        let records = [create_test_record(&[
            ("id", "1"),
            ("name", "Alice"),
            ("department", "HR"),
            ("hours_worked", "160"),
            ("hourly_rate", "50"),
        ])];

        let (results, sink) = generate(&records);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
        assert_eq!(results[0].name, "Alice");
        assert_eq!(results[0].department, "HR");
        assert_eq!(results[0].payout, dec("8000.00"));
        assert!(sink.diagnostics.is_empty());
    }

    /// PO-002: missing hours_worked counts as zero hours
    #[test]
    fn test_missing_hours_treated_as_zero() {
        let records = [create_test_record(&[("id", "1"), ("hourly_rate", "100")])];

        let (results, sink) = generate(&records);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].payout, dec("0.00"));
        assert!(sink.diagnostics.is_empty());
    }

    /// PO-003: record without a rate field is skipped with a diagnostic
    #[test]
    fn test_record_without_rate_field_is_skipped() {
        let records = [
            create_test_record(&[("id", "1"), ("hours_worked", "160")]),
            create_test_record(&[("id", "2"), ("hours_worked", "100"), ("rate", "30")]),
        ];

        let (results, sink) = generate(&records);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2");
        assert_eq!(sink.diagnostics.len(), 1);
        assert!(matches!(
            sink.diagnostics[0],
            Diagnostic::MissingRateField { .. }
        ));
    }

    /// PO-004: invalid hours skip the record without aborting the batch
    #[test]
    fn test_invalid_hours_skip_record() {
        let records = [
            create_test_record(&[("id", "1"), ("hours_worked", "invalid"), ("hourly_rate", "50")]),
            create_test_record(&[("id", "2"), ("hours_worked", "10"), ("hourly_rate", "50")]),
        ];

        let (results, sink) = generate(&records);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "2");
        assert_eq!(sink.diagnostics.len(), 1);
        match &sink.diagnostics[0] {
            Diagnostic::InvalidNumber { field, value, .. } => {
                assert_eq!(field, "hours_worked");
                assert_eq!(value, "invalid");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    /// PO-005: invalid rate value skips the record
    #[test]
    fn test_invalid_rate_value_skips_record() {
        let records = [create_test_record(&[
            ("id", "1"),
            ("hours_worked", "10"),
            ("rate", "n/a"),
        ])];

        let (results, sink) = generate(&records);

        assert!(results.is_empty());
        assert_eq!(sink.diagnostics.len(), 1);
        match &sink.diagnostics[0] {
            Diagnostic::InvalidNumber { field, .. } => assert_eq!(field, "rate"),
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    /// PO-006: hourly_rate takes precedence over rate and salary
    #[test]
    fn test_rate_priority_order() {
        let records = [
            create_test_record(&[
                ("id", "1"),
                ("hours_worked", "10"),
                ("hourly_rate", "50"),
                ("rate", "40"),
                ("salary", "30"),
            ]),
            create_test_record(&[
                ("id", "2"),
                ("hours_worked", "10"),
                ("rate", "40"),
                ("salary", "30"),
            ]),
            create_test_record(&[("id", "3"), ("hours_worked", "10"), ("salary", "30")]),
        ];

        let (results, _) = generate(&records);

        assert_eq!(results[0].payout, dec("500.00"));
        assert_eq!(results[1].payout, dec("400.00"));
        assert_eq!(results[2].payout, dec("300.00"));
    }

    #[test]
    fn test_absent_identity_fields_become_empty_strings() {
        let records = [create_test_record(&[("hours_worked", "10"), ("rate", "20")])];

        let (results, _) = generate(&records);

        assert_eq!(results[0].id, "");
        assert_eq!(results[0].name, "");
        assert_eq!(results[0].department, "");
        assert_eq!(results[0].payout, dec("200.00"));
    }

    #[test]
    fn test_output_preserves_input_order() {
        let records = [
            create_test_record(&[("id", "3"), ("hours_worked", "1"), ("rate", "1")]),
            create_test_record(&[("id", "1"), ("hours_worked", "1"), ("rate", "1")]),
            create_test_record(&[("id", "2"), ("hours_worked", "1"), ("rate", "1")]),
        ];

        let (results, _) = generate(&records);

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_payout_rounds_to_two_decimals() {
        let records = [create_test_record(&[
            ("id", "1"),
            ("hours_worked", "160.5"),
            ("hourly_rate", "49.99"),
        ])];

        let (results, _) = generate(&records);

        // 160.5 * 49.99 = 8023.395, midpoint rounds to even
        assert_eq!(results[0].payout, dec("8023.40"));
    }

    #[test]
    fn test_empty_record_sequence_yields_empty_results() {
        let (results, sink) = generate(&[]);

        assert!(results.is_empty());
        assert!(sink.diagnostics.is_empty());
    }
}

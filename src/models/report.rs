//! Report document models.
//!
//! This module defines the [`ReportDocument`] tagged union exchanged
//! between the aggregation core and the output boundary, along with the
//! [`ReportKind`] selector and the [`PayoutEntry`] result row.

use std::collections::BTreeMap;
use std::fmt;

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selector between the two aggregation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Per-employee payout: hours worked times resolved rate.
    Payout,
    /// Per-department arithmetic mean of resolved rates.
    #[value(name = "average_rate")]
    AverageRate,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::Payout => "payout",
            ReportKind::AverageRate => "average_rate",
        };
        f.write_str(name)
    }
}

/// One entry of a payout report.
///
/// Identifier, name, and department are carried verbatim from the input
/// record, with the empty string standing in for an absent field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutEntry {
    /// Employee identifier (empty if absent from the record).
    pub id: String,
    /// Employee name (empty if absent from the record).
    pub name: String,
    /// Department name (empty if absent from the record).
    pub department: String,
    /// Hours worked times resolved rate, rounded to 2 decimal places.
    pub payout: Decimal,
}

/// The result document exchanged between the core and the output boundary.
///
/// Serializes as `{"report": <kind>, "results": ...}`.
///
/// # Example
///
/// ```
/// use payroll_report::models::ReportDocument;
/// use std::collections::BTreeMap;
///
/// let document = ReportDocument::AverageRate(BTreeMap::new());
/// let json = serde_json::to_string(&document).unwrap();
/// assert_eq!(json, r#"{"report":"average_rate","results":{}}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "report", content = "results", rename_all = "snake_case")]
pub enum ReportDocument {
    /// One entry per successfully processed record, in input order.
    Payout(Vec<PayoutEntry>),
    /// Department name to average resolved rate, rounded to 2 decimal
    /// places. Departments with no contributing records are omitted.
    AverageRate(BTreeMap<String, Decimal>),
}

impl ReportDocument {
    /// Returns the kind tag of this document.
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportDocument::Payout(_) => ReportKind::Payout,
            ReportDocument::AverageRate(_) => ReportKind::AverageRate,
        }
    }
}

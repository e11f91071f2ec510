//! Rendering and writing of report documents.
//!
//! The core hands exactly one [`ReportDocument`] to this boundary. It is
//! rendered either as a pretty-printed JSON document or as a flat
//! comma-delimited table, chosen by the output path's extension. Without
//! an output path, the JSON form is printed to stdout.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::models::ReportDocument;

/// Renders a report document as pretty-printed JSON.
pub fn render_json(document: &ReportDocument) -> ReportResult<String> {
    serde_json::to_string_pretty(document).map_err(|e| ReportError::SerializeFailed {
        message: e.to_string(),
    })
}

/// Renders a report document as a flat comma-delimited table.
///
/// For payout reports the header is `id,name,department,payout` with one
/// row per entry in input order; for average-rate reports the header is
/// `department,average_rate` with one row per department. Values are
/// comma-joined with no quoting or escaping.
pub fn render_table(document: &ReportDocument) -> String {
    let mut table = String::new();
    match document {
        ReportDocument::Payout(results) => {
            table.push_str("id,name,department,payout\n");
            for entry in results {
                table.push_str(&format!(
                    "{},{},{},{}\n",
                    entry.id, entry.name, entry.department, entry.payout
                ));
            }
        }
        ReportDocument::AverageRate(results) => {
            table.push_str("department,average_rate\n");
            for (department, average) in results {
                table.push_str(&format!("{},{}\n", department, average));
            }
        }
    }
    table
}

/// Writes a report document to the given destination.
///
/// With no destination, the pretty JSON form goes to stdout. Otherwise the
/// file extension (compared case-insensitively) picks the format: `.json`
/// for the structured document, `.csv` for the delimited table. Any other
/// destination kind is a fatal error and nothing is written.
pub fn write_report(document: &ReportDocument, output: Option<&Path>) -> ReportResult<()> {
    let Some(path) = output else {
        println!("{}", render_json(document)?);
        return Ok(());
    };

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let rendered = match extension.as_deref() {
        Some("json") => render_json(document)?,
        Some("csv") => render_table(document),
        _ => {
            return Err(ReportError::UnsupportedOutputFormat {
                path: path.display().to_string(),
            });
        }
    };

    fs::write(path, rendered).map_err(|e| ReportError::OutputWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    info!("Report written to {}", path.display());
    Ok(())
}

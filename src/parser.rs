//! Tolerant field-delimited record parsing.
//!
//! The first line of an input is the header; every subsequent line is split
//! on the delimiter and zipped against the header into a [`Record`]. Rows
//! whose field count does not match the header are skipped with a
//! diagnostic and processing continues. There is no quoting or escaping
//! support: a delimiter inside a value is indistinguishable from a field
//! separator.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{ReportError, ReportResult};
use crate::models::Record;

/// The field delimiter for input files.
pub const FIELD_DELIMITER: char = ',';

/// Parses the raw text content of one input source into records.
///
/// `source` names the input (usually its path) in emitted diagnostics.
/// Header field names and row values are trimmed of surrounding
/// whitespace. Header names are not validated or deduplicated; a duplicate
/// column name makes the later value overwrite the earlier one. A
/// completely empty input yields an empty sequence with no diagnostic.
pub fn parse_records(content: &str, source: &str, sink: &mut dyn DiagnosticSink) -> Vec<Record> {
    let mut lines = content.lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let header = split_fields(header_line);
    let mut records = Vec::new();

    for line in lines {
        let values = split_fields(line);
        if values.len() != header.len() {
            sink.emit(Diagnostic::RowArityMismatch {
                source: source.to_string(),
                line: line.trim().to_string(),
                expected: header.len(),
                found: values.len(),
            });
            continue;
        }

        records.push(Record::from_pairs(
            header
                .iter()
                .zip(&values)
                .map(|(name, value)| (name.to_string(), value.to_string())),
        ));
    }

    records
}

/// Splits a line on the delimiter, trimming every field.
fn split_fields(line: &str) -> Vec<&str> {
    line.trim().split(FIELD_DELIMITER).map(str::trim).collect()
}

/// Reads an input file fully into memory and parses it into records.
///
/// A missing or unreadable file is fatal for the whole run: the error is
/// returned for the calling layer to act on and no records are produced.
/// Row-level problems inside a readable file are only diagnostics.
pub fn read_records<P: AsRef<Path>>(
    path: P,
    sink: &mut dyn DiagnosticSink,
) -> ReportResult<Vec<Record>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    info!("Reading input file: {}", path_str);

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::InputNotFound {
            path: path_str.clone(),
        },
        _ => ReportError::InputRead {
            path: path_str.clone(),
            message: e.to_string(),
        },
    })?;

    Ok(parse_records(&content, &path_str, sink))
}

//! Record model and rate-field resolution.
//!
//! A [`Record`] is one row of input data represented as a field-name to
//! field-value mapping, produced by zipping a split row against the header
//! of its input file.

use std::collections::HashMap;
use std::fmt;

/// Rate fields in resolution priority order.
///
/// A record's effective rate is taken from the first of these fields that
/// is present in the record.
pub const RATE_FIELDS: [&str; 3] = ["hourly_rate", "rate", "salary"];

/// One row of input data as a field-name to field-value mapping.
///
/// Records are created once by the parser and are immutable thereafter.
/// Field names come from the input header; arbitrary unexpected columns are
/// preserved here and ignored by the aggregators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Creates a record from field-name/value pairs.
    ///
    /// A later pair with an already-seen field name overwrites the earlier
    /// value, matching the behavior of zipping a row against a header with
    /// duplicate column names.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            fields: pairs.into_iter().collect(),
        }
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns the value of a field, or the empty string if absent.
    pub fn get_or_empty(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Returns the number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolves the record's rate field.
    ///
    /// Returns the first field of [`RATE_FIELDS`] present in the record,
    /// together with its raw value. A record lacking all of them has no
    /// resolvable rate and is excluded from any report requiring one.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_report::models::Record;
    ///
    /// let record = Record::from_pairs([
    ///     ("rate".to_string(), "40".to_string()),
    ///     ("salary".to_string(), "35".to_string()),
    /// ]);
    /// assert_eq!(record.resolved_rate(), Some(("rate", "40")));
    /// ```
    pub fn resolved_rate(&self) -> Option<(&'static str, &str)> {
        RATE_FIELDS
            .iter()
            .find_map(|field| self.get(field).map(|value| (*field, value)))
    }
}

// Sorted so diagnostics render the same record the same way every time.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort();

        write!(f, "{{")?;
        for (i, (name, value)) in fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, "}}")
    }
}

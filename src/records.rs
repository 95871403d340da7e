// src/records.rs
//
// Header-keyed table records. One Record per data row; the header row
// itself is never emitted. Everything stays a string at this layer,
// same as the source files.

use std::collections::HashMap;

use crate::csv::{self, Delim};

/// One parsed row, keyed by column name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Like `get`, with "" for absent columns. Convenient for display code.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Split a comma-joined cell (specialities, certifications) into
    /// trimmed items, dropping empties.
    pub fn list(&self, column: &str) -> Vec<String> {
        self.field(column)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Parse a whole CSV table into Records.
/// First row is the header. Rows shorter than the header leave the
/// trailing columns absent; extra cells past the header are dropped.
/// Duplicate header names: last column wins.
/// Empty or header-only input yields an empty Vec — "nothing loaded"
/// is not an error at this layer.
pub fn parse_table(text: &str) -> Vec<Record> {
    let mut rows = csv::parse_rows(text, Delim::Csv);
    if rows.is_empty() {
        return Vec::new();
    }
    let header = rows.remove(0);

    rows.into_iter()
        .map(|row| {
            let mut fields = HashMap::with_capacity(header.len());
            for (name, value) in header.iter().zip(row) {
                fields.insert(name.clone(), value);
            }
            Record { fields }
        })
        .collect()
}

/// Linear scan on the `id` column; first match wins when the source data
/// carries duplicate ids. `None` covers both "no match" and "empty
/// collection" — distinguishing not-found from not-yet-loaded is the
/// caller's job (see gui::app::Slot).
pub fn find_by_id<'a>(records: &'a [Record], id: &str) -> Option<&'a Record> {
    records.iter().find(|r| r.get("id") == Some(id))
}

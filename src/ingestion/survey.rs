//! Survey export parsing.
//!
//! The export wraps every field in double quotes and writes rows back to back, so the only
//! reliable boundaries are `"\n"` between rows and `","` between fields. Quotes inside a value
//! are not escaped and are passed through as-is.
//!
//! Parsing is tolerant: a row that stops early leaves the remaining fields empty. The only hard
//! failure is a numeric field holding non-numeric text.

use std::collections::BTreeSet;
use std::slice;
use std::vec;

use crate::error::SurveyResult;
use crate::types::{DataType, Field, Response, Schema};

use super::coerce::{as_boolean, as_set, as_string, int_field};
use super::observability::IngestionStats;

/// Separator between two rows: closing quote, newline, opening quote.
pub const ROW_BOUNDARY: &str = "\"\n\"";

/// [`ROW_BOUNDARY`] as written by exports saved with Windows line endings.
pub const CRLF_ROW_BOUNDARY: &str = "\"\r\n\"";

/// Separator between two fields of a row.
pub const FIELD_BOUNDARY: &str = "\",\"";

/// Split a document into quote-wrapped row strings, header included.
///
/// Line terminators at the very end of the document are dropped first. Each row gets back the
/// quotes the split consumed, so rows read exactly as they were written.
pub fn split_rows(document: &str) -> Vec<String> {
    let document = document.trim_end_matches(&['\r', '\n'][..]);
    if document.is_empty() {
        return Vec::new();
    }

    let fragments: Vec<&str> = document.split(ROW_BOUNDARY).collect();
    let last = fragments.len() - 1;
    fragments
        .iter()
        .enumerate()
        .map(|(idx, fragment)| {
            let mut row = String::with_capacity(fragment.len() + 2);
            if idx > 0 {
                row.push('"');
            }
            row.push_str(fragment);
            if idx < last {
                row.push('"');
            }
            row
        })
        .collect()
}

/// Strip the outer quotes of a row and split it into raw field tokens.
pub fn split_fields(row: &str) -> Vec<&str> {
    let inner = row.strip_prefix('"').unwrap_or(row);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.split(FIELD_BOUNDARY).collect()
}

/// Parse a whole export into responses, skipping the header row.
pub fn parse_responses(document: &str) -> SurveyResult<Vec<Response>> {
    parse_responses_with_stats(document).map(|(responses, _)| responses)
}

/// Like [`parse_responses`], also returning how many rows were short.
pub fn parse_responses_with_stats(document: &str) -> SurveyResult<(Vec<Response>, IngestionStats)> {
    let schema = Schema::survey();
    let rows = split_rows(document);

    let mut stats = IngestionStats::default();
    let mut responses = Vec::with_capacity(rows.len().saturating_sub(1));
    // Row numbers are 1-based and the header is row 1.
    for (idx, row) in rows.iter().enumerate().skip(1) {
        let (response, short) = parse_row(idx + 1, &schema, row)?;
        if short {
            stats.short_rows += 1;
        }
        responses.push(response);
    }
    stats.rows = responses.len();

    Ok((responses, stats))
}

/// Parse a single quote-wrapped row. The flag is `true` when the row had fewer fields than
/// the schema.
pub fn parse_row(row_number: usize, schema: &Schema, row: &str) -> SurveyResult<(Response, bool)> {
    let tokens = split_fields(row);
    let short = tokens.len() < schema.fields.len();
    if short {
        tracing::debug!(
            row = row_number,
            fields = tokens.len(),
            expected = schema.fields.len(),
            "short row, remaining fields left empty"
        );
    }

    let mut c = FieldCursor::new(row_number, schema, tokens);
    let response = Response {
        timestamp: c.text(),
        username: c.text(),
        contact_name: c.text(),
        company_name: c.text(),
        project_size: c.text(),
        usage_description: c.text(),
        experience: c.text(),
        public_reference: c.flag(),
        features: c.set(),
        app_security: c.set(),
        lightweight_proxy: c.flag(),
        themes: c.set(),
        spis: c.set(),
        significant_changes: c.text(),
        customizations: c.text(),
        num_users: c.int()?,
        num_active_users: c.int()?,
        num_logins_per_hour: c.int()?,
        num_clients: c.int()?,
        num_realms: c.int()?,
        clustering: c.text(),
        db: c.text(),
        hardware: c.text(),
        deployment_method: c.text(),
        additional_comments: c.text(),
        missing_features: c.text(),
        last_comments: c.text(),
    };

    Ok((response, short))
}

/// Walks schema fields and row tokens in lockstep; once tokens run out every read yields the
/// zero value.
struct FieldCursor<'a> {
    row: usize,
    fields: slice::Iter<'a, Field>,
    tokens: vec::IntoIter<&'a str>,
}

impl<'a> FieldCursor<'a> {
    fn new(row: usize, schema: &'a Schema, tokens: Vec<&'a str>) -> Self {
        Self {
            row,
            fields: schema.fields.iter(),
            tokens: tokens.into_iter(),
        }
    }

    fn next(&mut self, expected: DataType) -> Option<(&'a Field, &'a str)> {
        let field = self.fields.next()?;
        debug_assert_eq!(field.data_type, expected, "field '{}' read with wrong type", field.name);
        let raw = self.tokens.next()?;
        Some((field, raw))
    }

    fn text(&mut self) -> Option<String> {
        self.next(DataType::Utf8).and_then(|(_, raw)| as_string(raw))
    }

    fn flag(&mut self) -> Option<bool> {
        self.next(DataType::Bool).and_then(|(_, raw)| as_boolean(raw))
    }

    fn set(&mut self) -> BTreeSet<String> {
        self.next(DataType::Set)
            .map(|(_, raw)| as_set(raw))
            .unwrap_or_default()
    }

    fn int(&mut self) -> SurveyResult<Option<i64>> {
        match self.next(DataType::Int64) {
            Some((field, raw)) => int_field(self.row, &field.name, raw),
            None => Ok(None),
        }
    }
}

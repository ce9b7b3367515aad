//! Raw token coercion.
//!
//! Tokens arrive exactly as the splitter produced them: no trimming, no unescaping. An empty token
//! is "no answer" for every kind except sets, which never become null.

use std::collections::BTreeSet;
use std::num::ParseIntError;

use crate::error::{SurveyError, SurveyResult};
use crate::types::{DataType, Value};

/// The only token treated as an affirmative answer.
pub const AFFIRMATIVE: &str = "Yes";

/// Separator between values packed into a multi-value field.
pub const SET_SEPARATOR: char = ';';

/// `None` for an empty token, otherwise the token unchanged.
pub fn as_string(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}

/// `None` for an empty token, otherwise a base-10 integer.
pub fn as_int(raw: &str) -> Result<Option<i64>, ParseIntError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>().map(Some)
}

/// `None` for an empty token; `true` only for the exact affirmative marker.
///
/// Any other non-empty text counts as "no".
pub fn as_boolean(raw: &str) -> Option<bool> {
    if raw.is_empty() {
        None
    } else {
        Some(raw == AFFIRMATIVE)
    }
}

/// Split a multi-value token into its distinct parts.
///
/// An empty token yields `{""}`; frequency counts skip the empty label.
pub fn as_set(raw: &str) -> BTreeSet<String> {
    raw.split(SET_SEPARATOR).map(str::to_owned).collect()
}

/// Coerce `raw` according to `data_type`.
///
/// `row` is 1-based (the header is row 1) and only used for error context.
pub fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
) -> SurveyResult<Value> {
    let value = match data_type {
        DataType::Utf8 => as_string(raw).map(Value::Utf8).unwrap_or(Value::Null),
        DataType::Bool => as_boolean(raw).map(Value::Bool).unwrap_or(Value::Null),
        DataType::Set => Value::Set(as_set(raw)),
        DataType::Int64 => int_field(row, column, raw)?
            .map(Value::Int64)
            .unwrap_or(Value::Null),
    };
    Ok(value)
}

/// [`as_int`] with the failure lifted into [`SurveyError::ParseError`].
pub(crate) fn int_field(row: usize, column: &str, raw: &str) -> SurveyResult<Option<i64>> {
    as_int(raw).map_err(|e| SurveyError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

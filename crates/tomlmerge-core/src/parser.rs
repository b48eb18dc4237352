//! TOML text → [`Value`] tree.
//!
//! Lexing, literal inference and duplicate-key detection are done by the
//! `toml` crate (built with `preserve_order`, so tables keep document order).
//! This module only converts its tree and its error into ours.

use crate::error::ParseError;
use crate::types::{table_from_toml, Value};
use tracing::trace;

/// Parse one TOML document. The result is always a [`Value::Table`].
pub fn parse(text: &str) -> std::result::Result<Value, ParseError> {
    let table: toml::Table = toml::from_str(text).map_err(|e| parse_error(text, &e))?;
    trace!(keys = table.len(), "parsed document");
    Ok(Value::Table(table_from_toml(table)))
}

/// Build a [`ParseError`], turning the reported byte span into a 1-based
/// line and column.
fn parse_error(text: &str, err: &toml::de::Error) -> ParseError {
    let message = err.message().trim().to_string();
    match err.span() {
        Some(span) => {
            let (line, column) = line_column(text, span.start);
            ParseError {
                message,
                line: Some(line),
                column: Some(column),
            }
        }
        None => ParseError {
            message,
            line: None,
            column: None,
        },
    }
}

/// 1-based line and column (in chars) of a byte offset.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

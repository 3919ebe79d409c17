//! Row splitting
//!
//! Rows are separated by newlines or by commas, with any whitespace around a comma absorbed.
//! Escaping runs first, so `\,` survives as a placeholder and never splits a row.

use crate::notation::escaping::escape_token;
use once_cell::sync::Lazy;
use regex::Regex;

static ROW_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("row separator pattern is valid"));

/// Split raw notation into non-empty, escaped logical rows
///
/// The returned rows still carry placeholders; fields are unescaped after they are isolated.
pub fn split_lines(source: &str) -> Vec<String> {
    let escaped = escape_token(source);

    let rows: Vec<String> = escaped
        .split('\n')
        .flat_map(|line| ROW_SEPARATOR.split(line.trim()))
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(str::to_string)
        .collect();

    log::trace!("split {} bytes into {} rows", source.len(), rows.len());
    rows
}

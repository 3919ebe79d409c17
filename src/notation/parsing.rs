//! Parsing for the option notation
//!
//! The pipeline is linear and runs in one pass:
//!
//! 1. [split_lines](crate::notation::lexing::split_lines) escapes the input and cuts it into
//!    logical rows.
//! 2. The labels are read from the `<...>` blocks of row 0. A schema row without blocks yields
//!    one default `select` label.
//! 3. Every row, row 0 included, is read as a data row against those labels.
//!
//! Row 0 is therefore both the schema and `options[0]`; consumers that only want data rows skip
//! the first entry.
//!
//! Parsing never fails. [parse_with_diagnostics] also returns what had to be read leniently.

pub mod labels;
pub mod values;

pub use labels::{extract_labels, parse_label};
pub use values::{parse_schema_value, parse_value};

use crate::notation::ast::{Label, OptionDocument, DEFAULT_LABEL_NAME};
use crate::notation::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::notation::lexing::split_lines;

/// Knobs for the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name given to labels declared without one, and to the synthetic default label
    pub default_label_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_label_name: DEFAULT_LABEL_NAME.to_string(),
        }
    }
}

/// A parsed document together with its diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub document: OptionDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse notation with the default options
pub fn parse(source: &str) -> OptionDocument {
    parse_with(source, &ParseOptions::default())
}

pub fn parse_with(source: &str, options: &ParseOptions) -> OptionDocument {
    parse_with_diagnostics(source, options).document
}

pub fn parse_with_diagnostics(source: &str, options: &ParseOptions) -> ParseOutcome {
    let rows = split_lines(source);
    let mut diagnostics = Diagnostics::new();

    let labels = match rows.first() {
        Some(schema_row) => {
            diagnostics.at_row(Some(0));
            parse_schema(schema_row, options, &mut diagnostics)
        }
        None => parse_schema("", options, &mut diagnostics),
    };

    let values = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            diagnostics.at_row(Some(index));
            if index == 0 {
                parse_schema_value(row, &labels, &mut diagnostics)
            } else {
                parse_value(row, &labels, &mut diagnostics)
            }
        })
        .collect();

    let document = OptionDocument::new(labels, values);
    log::debug!(
        "parsed {} labels and {} option rows",
        document.labels.len(),
        document.options.len()
    );

    ParseOutcome {
        document,
        diagnostics: diagnostics.into_vec(),
    }
}

/// Labels declared by the schema row, never empty
fn parse_schema(
    schema_row: &str,
    options: &ParseOptions,
    diagnostics: &mut Diagnostics,
) -> Vec<Label> {
    let labels: Vec<Label> = extract_labels(schema_row, diagnostics)
        .into_iter()
        .map(|token| parse_label(token, options, diagnostics))
        .collect();

    if labels.is_empty() {
        diagnostics.report(DiagnosticKind::MissingSchema);
        return vec![Label::new(options.default_label_name.clone())];
    }
    labels
}

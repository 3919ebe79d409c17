//! Label declarations
//!
//!     The schema row holds one or more `<...>` blocks. Each block lists labels joined by `+`,
//!     and each label token reads as
//!
//!         name [ "?" type [ "=" min [ ":" max ] ] ] [ '"' help '"' ]
//!
//!     Help text is looked up in the type specification first and in the name otherwise;
//!     whichever field holds it is cut at the opening quote.

use super::ParseOptions;
use crate::notation::ast::{Bound, Label, LabelType};
use crate::notation::diagnostics::{DiagnosticKind, Diagnostics};
use crate::notation::escaping::unescape_token;
use crate::notation::lexing::{parse_leading_int, scan_tokens};

const TYPE_MARKER: char = '?';
const CONDITION_MARKER: char = '=';
const RANGE_SEPARATOR: char = ':';
const HELP_QUOTE: char = '"';
const LABEL_SEPARATOR: char = '+';

/// Raw label tokens of the schema row, in declaration order
pub fn extract_labels<'a>(schema_row: &'a str, diagnostics: &mut Diagnostics) -> Vec<&'a str> {
    let scan = scan_tokens(schema_row, '<', '>');
    for _ in 0..scan.unmatched {
        diagnostics.report(DiagnosticKind::UnterminatedBracket);
    }

    scan.tokens
        .into_iter()
        .flat_map(|block| block.trim().split(LABEL_SEPARATOR))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Cut `field` at its first help quote, returning the quoted text if it is closed
fn take_help(field: &mut String, quote_at: usize) -> Option<String> {
    let help = scan_tokens(&field[quote_at..], HELP_QUOTE, HELP_QUOTE)
        .tokens
        .first()
        .map(|text| text.to_string());
    field.truncate(quote_at);
    help
}

/// Coerce a bound of a `number`/`text` label. Empty text reads as 0.
fn numeric_bound(text: &str, label: &str, diagnostics: &mut Diagnostics) -> Option<Bound> {
    if text.is_empty() {
        return Some(Bound::Int(0));
    }
    match parse_leading_int(text) {
        Some(n) => Some(Bound::Int(n)),
        None => {
            diagnostics.report(DiagnosticKind::NonNumericBound {
                label: label.to_string(),
                text: text.to_string(),
            });
            None
        }
    }
}

/// Turn one raw label token into a [Label]
pub fn parse_label(token: &str, options: &ParseOptions, diagnostics: &mut Diagnostics) -> Label {
    let (name, type_spec) = match token.find(TYPE_MARKER) {
        Some(pos) => (&token[..pos], &token[pos + TYPE_MARKER.len_utf8()..]),
        None => (token, LabelType::Select.as_str()),
    };
    let mut name = name.to_string();
    let mut type_spec = type_spec.to_string();

    let mut help = None;
    let mut unterminated_help = false;
    if let Some(pos) = type_spec.find(HELP_QUOTE) {
        help = take_help(&mut type_spec, pos);
        unterminated_help = help.is_none();
    } else if let Some(pos) = name.find(HELP_QUOTE) {
        help = take_help(&mut name, pos);
        unterminated_help = help.is_none();
    }

    if name.is_empty() {
        name = options.default_label_name.clone();
    }
    if type_spec.is_empty() {
        type_spec = LabelType::Select.as_str().to_string();
    }
    let name = unescape_token(&name);
    if unterminated_help {
        diagnostics.report(DiagnosticKind::UnterminatedHelp {
            label: name.clone(),
        });
    }

    let mut label = Label::new(name);
    match type_spec.split_once(CONDITION_MARKER) {
        Some((kind, condition)) => {
            label.kind = LabelType::from(kind);
            let mut range = condition.split(RANGE_SEPARATOR);
            let min = range.next().unwrap_or_default();
            let max = range.next();

            if label.kind.has_numeric_bounds() {
                label.min = numeric_bound(min, &label.name, diagnostics);
                label.max = numeric_bound(max.unwrap_or_default(), &label.name, diagnostics);
            } else {
                label.min = Some(Bound::Raw(min.to_string()));
                label.max = max.map(|text| Bound::Raw(text.to_string()));
            }
        }
        None => label.kind = LabelType::from(type_spec.as_str()),
    }
    label.help = help.map(|text| unescape_token(&text));

    log::trace!("parsed label {label}");
    label
}

//! Data rows
//!
//! A row reads as `value ( "+" value )* [ "=" stock ]`. With a single label the whole value
//! specification is the option; with several labels the `+` segments are matched to the labels
//! by position. Segments are stored as written, placeholders included. Free-text labels always
//! store an empty value.

use crate::notation::ast::{Label, OptionChoice, OptionValue, Selection};
use crate::notation::diagnostics::{DiagnosticKind, Diagnostics};
use crate::notation::lexing::parse_leading_int;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static TAG_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[^>]+(>|$)").expect("tag fragment pattern is valid"));

const STOCK_MARKER: char = '=';
const SEGMENT_SEPARATOR: char = '+';

/// Remove residual `<...>` markup, including an unclosed trailing tag
pub fn strip_tags(row: &str) -> Cow<'_, str> {
    TAG_FRAGMENT.replace_all(row, "")
}

/// Read one data row against the parsed labels
pub fn parse_value(row: &str, labels: &[Label], diagnostics: &mut Diagnostics) -> OptionValue {
    read_row(row, labels, RowRole::Data, diagnostics)
}

/// Read the schema row as a data row
///
/// A schema row that only declares labels (`<a+b>` followed by a row break) has an empty value
/// specification. It still yields an entry but is not reported as misaligned.
pub fn parse_schema_value(
    row: &str,
    labels: &[Label],
    diagnostics: &mut Diagnostics,
) -> OptionValue {
    read_row(row, labels, RowRole::Schema, diagnostics)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RowRole {
    Schema,
    Data,
}

fn read_row(
    row: &str,
    labels: &[Label],
    role: RowRole,
    diagnostics: &mut Diagnostics,
) -> OptionValue {
    let row = strip_tags(row);

    let (spec, stock) = match row.split_once(STOCK_MARKER) {
        Some((spec, stock_text)) => {
            let stock = parse_leading_int(stock_text);
            if stock.is_none() {
                diagnostics.report(DiagnosticKind::NonNumericStock {
                    text: stock_text.to_string(),
                });
            }
            (spec, stock)
        }
        None => (&*row, None),
    };

    let option = if labels.len() > 1 {
        let segments: Vec<&str> = spec.split(SEGMENT_SEPARATOR).collect();
        let declares_only = role == RowRole::Schema && spec.is_empty();
        if segments.len() != labels.len() && !declares_only {
            diagnostics.report(DiagnosticKind::SegmentCountMismatch {
                expected: labels.len(),
                found: segments.len(),
            });
        }
        OptionChoice::Combination(align_segments(&segments, labels))
    } else {
        OptionChoice::Single(spec.to_string())
    };

    OptionValue::new(option, stock)
}

/// Pair `+` segments with labels by position
///
/// Segments past the last label are dropped and labels past the last segment get no entry.
fn align_segments(segments: &[&str], labels: &[Label]) -> Selection {
    labels
        .iter()
        .zip(segments)
        .map(|(label, segment)| {
            let value = if label.is_free_text() { "" } else { *segment };
            (label.name.as_str(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::ast::LabelType;

    fn size_and_color() -> Vec<Label> {
        vec![Label::new("사이즈"), Label::new("색상")]
    }

    fn value(row: &str, labels: &[Label]) -> OptionValue {
        parse_value(row, labels, &mut Diagnostics::new())
    }

    #[test]
    fn test_single_label_keeps_whole_spec() {
        let parsed = value("S+빨강=5", &[Label::new("옵션")]);
        assert_eq!(parsed.option, OptionChoice::Single("S+빨강".into()));
        assert_eq!(parsed.stock, Some(5));
        assert_eq!(parsed.id, None);
    }

    #[test]
    fn test_multi_label_maps_by_position() {
        let parsed = value("M+빨강=5", &size_and_color());
        let selection = parsed.option.as_combination().unwrap();
        assert_eq!(selection.get("사이즈"), Some("M"));
        assert_eq!(selection.get("색상"), Some("빨강"));
        assert_eq!(parsed.stock, Some(5));
    }

    #[test]
    fn test_missing_stock_is_none() {
        assert_eq!(value("85", &[Label::new("옵션")]).stock, None);
    }

    #[test]
    fn test_non_numeric_stock() {
        let mut diagnostics = Diagnostics::new();
        let parsed = parse_value("85=many", &[Label::new("옵션")], &mut diagnostics);
        assert_eq!(parsed.stock, None);
        assert_eq!(
            diagnostics.into_vec()[0].kind,
            DiagnosticKind::NonNumericStock {
                text: "many".into()
            }
        );
    }

    #[test]
    fn test_text_label_stores_empty_value() {
        let labels = vec![
            Label::new("재질"),
            Label::new("성명").with_kind(LabelType::Text),
        ];
        let parsed = value("나무+홍길동=50", &labels);
        let selection = parsed.option.as_combination().unwrap();
        assert_eq!(selection.get("재질"), Some("나무"));
        assert_eq!(selection.get("성명"), Some(""));
        assert_eq!(parsed.stock, Some(50));
    }

    #[test]
    fn test_strips_tag_fragments() {
        assert_eq!(strip_tags("<사이즈+색상>S+빨강=5"), "S+빨강=5");
        assert_eq!(strip_tags("S</b>+빨강"), "S+빨강");
        assert_eq!(strip_tags("S<unclosed"), "S");
        assert_eq!(strip_tags("a < b"), "a ");
    }

    #[test]
    fn test_schema_row_reads_as_value() {
        let parsed = value("<사이즈+색상>S+빨강=5", &size_and_color());
        let selection = parsed.option.as_combination().unwrap();
        assert_eq!(selection.get("사이즈"), Some("S"));
    }

    #[test]
    fn test_short_row_leaves_labels_unset() {
        let mut diagnostics = Diagnostics::new();
        let parsed = parse_value("S", &size_and_color(), &mut diagnostics);
        let selection = parsed.option.as_combination().unwrap();
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.get("색상"), None);
        assert_eq!(
            diagnostics.into_vec()[0].kind,
            DiagnosticKind::SegmentCountMismatch {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_long_row_drops_extra_segments() {
        let mut diagnostics = Diagnostics::new();
        let parsed = parse_value("S+빨강+면", &size_and_color(), &mut diagnostics);
        assert_eq!(parsed.option.as_combination().unwrap().len(), 2);
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn test_label_only_schema_row_is_not_misaligned() {
        let mut diagnostics = Diagnostics::new();
        let parsed = parse_schema_value("<사이즈+색상>", &size_and_color(), &mut diagnostics);
        let selection = parsed.option.as_combination().unwrap();
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.get("사이즈"), Some(""));
        assert!(diagnostics.is_empty());

        // the same empty row in data position is still reported
        parse_value("<x>", &size_and_color(), &mut diagnostics);
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn test_schema_row_with_values_is_still_checked() {
        let mut diagnostics = Diagnostics::new();
        parse_schema_value("<사이즈+색상>S", &size_and_color(), &mut diagnostics);
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn test_segments_are_not_unescaped() {
        let parsed = value("1``4`1", &[Label::new("옵션")]);
        assert_eq!(parsed.option, OptionChoice::Single("1``4`1".into()));
    }
}

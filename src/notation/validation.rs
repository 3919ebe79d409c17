//! Alignment checks
//!
//! The parser matches row segments to labels by position and never rejects a row that does not
//! line up. These helpers report such rows for callers that want a stricter contract. They are
//! never run as part of parsing.

use crate::notation::ast::{Label, OptionChoice, OptionDocument, Selection};
use crate::notation::lexing::split_lines;
use crate::notation::parsing::values::strip_tags;
use crate::notation::parsing::{parse_with, ParseOptions};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentIssue {
    /// A row has a different number of `+` segments than there are labels
    SegmentCount {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A row's option is a plain string under a multi-label schema, or the reverse
    Shape { row: usize, multi_label: bool },
}

impl fmt::Display for AlignmentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentIssue::SegmentCount {
                row,
                expected,
                found,
            } => write!(f, "row {row}: expected {expected} values, found {found}"),
            AlignmentIssue::Shape { row, multi_label } => {
                let expected = if *multi_label { "a combination" } else { "a single value" };
                write!(f, "row {row}: expected {expected}")
            }
        }
    }
}

/// Check one raw (escaped) row against the labels
///
/// Row 0 may hold nothing but label blocks; such a row has no values to line up.
pub fn validate_row(index: usize, row: &str, labels: &[Label]) -> Option<AlignmentIssue> {
    if labels.len() <= 1 {
        return None;
    }
    let row = strip_tags(row);
    let spec = row.split_once('=').map_or(&*row, |(spec, _)| spec);
    if index == 0 && spec.is_empty() {
        return None;
    }
    let found = spec.split('+').count();

    (found != labels.len()).then_some(AlignmentIssue::SegmentCount {
        row: index,
        expected: labels.len(),
        found,
    })
}

/// Check the rows of an already parsed document
///
/// Only what survives in the document can be checked: a short row shows up as a combination
/// with fewer entries than labels. Extra segments were dropped by the parser; use
/// [validate_source] to catch those. Labels sharing a name share one entry, so rows are
/// measured against the distinct names. A row 0 holding a single empty entry is the schema
/// row of a schema that declares labels only, and is skipped.
pub fn check_alignment(doc: &OptionDocument) -> Vec<AlignmentIssue> {
    let multi_label = doc.is_multi_label();
    let expected = doc
        .labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<HashSet<_>>()
        .len();

    doc.options
        .iter()
        .enumerate()
        .filter_map(|(row, value)| match (&value.option, multi_label) {
            (OptionChoice::Combination(selection), true)
                if row == 0 && declares_only(selection) =>
            {
                None
            }
            (OptionChoice::Combination(selection), true) if selection.len() != expected => {
                Some(AlignmentIssue::SegmentCount {
                    row,
                    expected,
                    found: selection.len(),
                })
            }
            (OptionChoice::Combination(_), true) | (OptionChoice::Single(_), false) => None,
            _ => Some(AlignmentIssue::Shape { row, multi_label }),
        })
        .collect()
}

fn declares_only(selection: &Selection) -> bool {
    selection.len() == 1 && selection.iter().all(|(_, value)| value.is_empty())
}

/// Parse `source` and check every row against the declared labels
pub fn validate_source(source: &str, options: &ParseOptions) -> Vec<AlignmentIssue> {
    let doc = parse_with(source, options);
    split_lines(source)
        .iter()
        .enumerate()
        .filter_map(|(index, row)| validate_row(index, row, &doc.labels))
        .collect()
}

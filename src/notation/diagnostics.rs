//! Non-fatal parse diagnostics
//!
//! Parsing always produces a document. When the input had to be read leniently (an unclosed
//! bracket, a stock count with no digits, a row that does not line up with the labels) the
//! parser records a [Diagnostic] on the side instead of failing.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The schema row declares no `<...>` block; a default label was used
    MissingSchema,
    /// A `<` with no `>` after it
    UnterminatedBracket,
    /// A `"` opening help text with no closing quote
    UnterminatedHelp { label: String },
    /// A numeric label bound with no leading digits
    NonNumericBound { label: String, text: String },
    /// A stock count with no leading digits
    NonNumericStock { text: String },
    /// A multi-label row whose segment count differs from the label count
    SegmentCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MissingSchema => {
                write!(f, "no label declaration found, using a default label")
            }
            DiagnosticKind::UnterminatedBracket => write!(f, "unterminated '<' in schema row"),
            DiagnosticKind::UnterminatedHelp { label } => {
                write!(f, "unterminated help text in label '{label}'")
            }
            DiagnosticKind::NonNumericBound { label, text } => {
                write!(f, "bound '{text}' of label '{label}' is not a number")
            }
            DiagnosticKind::NonNumericStock { text } => {
                write!(f, "stock '{text}' is not a number")
            }
            DiagnosticKind::SegmentCountMismatch { expected, found } => {
                write!(f, "expected {expected} values, found {found}")
            }
        }
    }
}

/// A diagnostic tied to the row it came from, when there is one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub row: Option<usize>,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "row {row}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Collects diagnostics while a document is being parsed
#[derive(Debug, Default)]
pub struct Diagnostics {
    row: Option<usize>,
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute subsequent reports to `row`
    pub fn at_row(&mut self, row: Option<usize>) {
        self.row = row;
    }

    pub fn report(&mut self, kind: DiagnosticKind) {
        log::debug!("parse diagnostic: {kind}");
        self.items.push(Diagnostic {
            row: self.row,
            kind,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_carry_current_row() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(DiagnosticKind::MissingSchema);
        diagnostics.at_row(Some(2));
        diagnostics.report(DiagnosticKind::NonNumericStock { text: "x".into() });

        let items = diagnostics.into_vec();
        assert_eq!(items[0].row, None);
        assert_eq!(items[1].row, Some(2));
        assert_eq!(items[1].to_string(), "row 2: stock 'x' is not a number");
    }
}

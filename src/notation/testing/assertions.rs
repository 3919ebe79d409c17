//! Document, label and option row assertions

use super::matchers::TextMatch;
use crate::notation::ast::{Bound, Label, OptionChoice, OptionDocument, OptionValue};

fn summarize_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a OptionDocument,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the document version
    pub fn version(self, expected: f64) -> Self {
        assert_eq!(
            self.doc.version, expected,
            "Expected version {}, found {}",
            expected, self.doc.version
        );
        self
    }

    /// Assert the number of labels
    pub fn label_count(self, expected: usize) -> Self {
        let actual = self.doc.labels.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} labels, found {} labels: [{}]",
            expected,
            actual,
            summarize_labels(&self.doc.labels)
        );
        self
    }

    /// Assert on a specific label by index
    pub fn label<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(LabelAssertion<'a>),
    {
        assert!(
            index < self.doc.labels.len(),
            "Label index {} out of bounds (document has {} labels)",
            index,
            self.doc.labels.len()
        );
        assertion(LabelAssertion {
            label: &self.doc.labels[index],
            context: format!("labels[{index}]"),
        });
        self
    }

    /// Assert the number of option rows
    pub fn option_count(self, expected: usize) -> Self {
        let actual = self.doc.options.len();
        assert_eq!(
            actual, expected,
            "Expected {} option rows, found {}",
            expected, actual
        );
        self
    }

    /// Assert on a specific option row by index
    pub fn option<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(OptionAssertion<'a>),
    {
        assert!(
            index < self.doc.options.len(),
            "Option index {} out of bounds (document has {} rows)",
            index,
            self.doc.options.len()
        );
        assertion(OptionAssertion {
            value: &self.doc.options[index],
            context: format!("options[{index}]"),
        });
        self
    }

    /// Assert on every option row
    pub fn each_option<F>(self, mut assertion: F) -> Self
    where
        F: FnMut(OptionAssertion<'a>),
    {
        for (index, value) in self.doc.options.iter().enumerate() {
            assertion(OptionAssertion {
                value,
                context: format!("options[{index}]"),
            });
        }
        self
    }
}

pub struct LabelAssertion<'a> {
    pub(crate) label: &'a Label,
    pub(crate) context: String,
}

impl<'a> LabelAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.label.name, &self.context);
        self
    }

    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(
            self.label.kind.as_str(),
            expected,
            "{}: Expected type '{}', found '{}'",
            self.context,
            expected,
            self.label.kind
        );
        self
    }

    pub fn bounds(self, min: Option<Bound>, max: Option<Bound>) -> Self {
        assert_eq!(
            (&self.label.min, &self.label.max),
            (&min, &max),
            "{}: Unexpected bounds",
            self.context
        );
        self
    }

    pub fn help(self, expected: &str) -> Self {
        match &self.label.help {
            Some(help) => TextMatch::Exact(expected.to_string()).assert(help, &self.context),
            None => panic!("{}: Expected help '{}', found none", self.context, expected),
        }
        self
    }

    pub fn help_starts_with(self, prefix: &str) -> Self {
        let help = self.label.help.as_deref().unwrap_or_default();
        TextMatch::StartsWith(prefix.to_string()).assert(help, &self.context);
        self
    }

    pub fn help_contains(self, substring: &str) -> Self {
        let help = self.label.help.as_deref().unwrap_or_default();
        TextMatch::Contains(substring.to_string()).assert(help, &self.context);
        self
    }

    pub fn no_help(self) -> Self {
        assert!(
            self.label.help.is_none(),
            "{}: Expected no help, found {:?}",
            self.context,
            self.label.help
        );
        self
    }
}

pub struct OptionAssertion<'a> {
    pub(crate) value: &'a OptionValue,
    pub(crate) context: String,
}

impl<'a> OptionAssertion<'a> {
    /// Assert the row is a single-label value equal to `expected`
    pub fn single(self, expected: &str) -> Self {
        match &self.value.option {
            OptionChoice::Single(text) => {
                TextMatch::Exact(expected.to_string()).assert(text, &self.context)
            }
            OptionChoice::Combination(_) => panic!(
                "{}: Expected a single value, found a combination",
                self.context
            ),
        }
        self
    }

    /// Assert the value stored for a label in a multi-label row
    pub fn value(self, label: &str, expected: &str) -> Self {
        let selection = match &self.value.option {
            OptionChoice::Combination(selection) => selection,
            OptionChoice::Single(_) => panic!(
                "{}: Expected a combination, found a single value",
                self.context
            ),
        };
        match selection.get(label) {
            Some(actual) => TextMatch::Exact(expected.to_string())
                .assert(actual, &format!("{}.{label}", self.context)),
            None => panic!("{}: No value for label '{}'", self.context, label),
        }
        self
    }

    /// Assert the number of label entries in a multi-label row
    pub fn entry_count(self, expected: usize) -> Self {
        let actual = self
            .value
            .option
            .as_combination()
            .map_or(0, |selection| selection.len());
        assert_eq!(
            actual, expected,
            "{}: Expected {} entries, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn stock(self, expected: Option<i64>) -> Self {
        assert_eq!(
            self.value.stock, expected,
            "{}: Expected stock {:?}, found {:?}",
            self.context, expected, self.value.stock
        );
        self
    }

    pub fn no_id(self) -> Self {
        assert!(
            self.value.id.is_none(),
            "{}: Expected no id, found {:?}",
            self.context,
            self.value.id
        );
        self
    }
}

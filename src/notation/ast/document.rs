//! Document element
//!
//!     The root of a parse: the engine version, the labels declared by the schema row and every
//!     row read back as an option value. The schema row itself is also one of the rows, so
//!     `options[0]` always derives from it.

use super::label::Label;
use super::value::OptionValue;
use serde::{Deserialize, Serialize};

/// Engine version written into every parsed document
pub const VERSION: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDocument {
    pub version: f64,
    pub labels: Vec<Label>,
    pub options: Vec<OptionValue>,
}

impl OptionDocument {
    pub fn new(labels: Vec<Label>, options: Vec<OptionValue>) -> Self {
        Self {
            version: VERSION,
            labels,
            options,
        }
    }

    /// Whether rows carry a label-keyed selection rather than a plain string
    pub fn is_multi_label(&self) -> bool {
        self.labels.len() > 1
    }

    pub fn label(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.name == name)
    }

    /// Sum of all stock counts that were given
    pub fn total_stock(&self) -> i64 {
        self.options.iter().filter_map(|value| value.stock).sum()
    }
}

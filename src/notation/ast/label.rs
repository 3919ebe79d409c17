//! Label element
//!
//!     A label is one option dimension (size, color, engraved name...). Labels are declared in
//!     the schema row between angle brackets, several labels in one bracket joined by `+`.
//!
//! Syntax
//!
//!     <name> [ "?" <type> [ "=" <min> [ ":" <max> ] ] ] [ '"' <help> '"' ]
//!
//!     Examples:
//!         사이즈
//!         사이즈"신발 크기 선택"
//!         성명?text=2:30"이름을 입력하세요"
//!
//!     Bounds are only coerced to integers for `number` and `text` labels. Every other type
//!     keeps the raw condition text, which is why [Bound] is a union rather than a number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder name ("option") given to labels declared without a name.
pub const DEFAULT_LABEL_NAME: &str = "옵션";

/// The category tag of a label
///
/// Unknown tags pass through unmodified as [LabelType::Other].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LabelType {
    #[default]
    Select,
    Text,
    Number,
    Other(String),
}

impl LabelType {
    pub fn as_str(&self) -> &str {
        match self {
            LabelType::Select => "select",
            LabelType::Text => "text",
            LabelType::Number => "number",
            LabelType::Other(tag) => tag,
        }
    }

    /// Whether `min`/`max` of this type are coerced to integers
    pub fn has_numeric_bounds(&self) -> bool {
        matches!(self, LabelType::Text | LabelType::Number)
    }
}

impl From<&str> for LabelType {
    fn from(tag: &str) -> Self {
        match tag {
            "select" => LabelType::Select,
            "text" => LabelType::Text,
            "number" => LabelType::Number,
            other => LabelType::Other(other.to_string()),
        }
    }
}

impl From<String> for LabelType {
    fn from(tag: String) -> Self {
        LabelType::from(tag.as_str())
    }
}

impl From<LabelType> for String {
    fn from(kind: LabelType) -> Self {
        match kind {
            LabelType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LabelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `min` or `max` bound, either coerced or kept as written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Int(i64),
    Raw(String),
}

impl Bound {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Bound::Int(n) => Some(*n),
            Bound::Raw(_) => None,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Int(n) => write!(f, "{n}"),
            Bound::Raw(text) => f.write_str(text),
        }
    }
}

/// One option dimension declared by the schema row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LabelType,
    pub min: Option<Bound>,
    pub max: Option<Bound>,
    pub help: Option<String>,
}

impl Label {
    /// A `select` label with no bounds and no help text
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: LabelType::Select,
            min: None,
            max: None,
            help: None,
        }
    }

    pub fn with_kind(mut self, kind: LabelType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_bounds(mut self, min: Option<Bound>, max: Option<Bound>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Free-text labels carry no enumerated value in data rows
    pub fn is_free_text(&self) -> bool {
        self.kind == LabelType::Text
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?{}", self.name, self.kind)?;
        if self.min.is_some() || self.max.is_some() {
            f.write_str("=")?;
            if let Some(min) = &self.min {
                write!(f, "{min}")?;
            }
            if let Some(max) = &self.max {
                write!(f, ":{max}")?;
            }
        }
        if let Some(help) = &self.help {
            write!(f, "\"{help}\"")?;
        }
        Ok(())
    }
}

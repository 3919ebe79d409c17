//! Option value element
//!
//!     One data row of the notation: a combination of label values with an optional stock
//!     count. The shape of `option` depends on the schema: a plain string when exactly one label
//!     is declared, a label-name keyed [Selection] otherwise.
//!
//! Syntax
//!
//!     <value> ( "+" <value> )* [ "=" <stock> ]
//!
//!     Examples:
//!         85
//!         S+빨강=5

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label-name keyed values of one multi-label row, in label order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    entries: Vec<(String, String)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for `name`. An existing entry is overwritten in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (key, value) in iter {
            selection.insert(key, value);
        }
        selection
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SelectionVisitor;

impl<'de> Visitor<'de> for SelectionVisitor {
    type Value = Selection;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of label names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Selection, A::Error> {
        let mut selection = Selection::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            selection.insert(key, value);
        }
        Ok(selection)
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SelectionVisitor)
    }
}

/// The `option` field of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionChoice {
    /// Single-label schema: the whole value specification
    Single(String),
    /// Multi-label schema: one entry per aligned label
    Combination(Selection),
}

impl OptionChoice {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            OptionChoice::Single(value) => Some(value),
            OptionChoice::Combination(_) => None,
        }
    }

    pub fn as_combination(&self) -> Option<&Selection> {
        match self {
            OptionChoice::Single(_) => None,
            OptionChoice::Combination(selection) => Some(selection),
        }
    }

    /// Value for a label name. A single choice answers for any name.
    pub fn value_for(&self, name: &str) -> Option<&str> {
        match self {
            OptionChoice::Single(value) => Some(value),
            OptionChoice::Combination(selection) => selection.get(name),
        }
    }
}

/// One combination row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    /// Never set by the parser; reserved for callers that persist rows
    pub id: Option<u64>,
    pub option: OptionChoice,
    pub stock: Option<i64>,
}

impl OptionValue {
    pub fn new(option: OptionChoice, stock: Option<i64>) -> Self {
        Self {
            id: None,
            option,
            stock,
        }
    }
}

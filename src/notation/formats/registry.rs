//! Output formats for parsed documents
//!
//! Each format implements [Formatter] and is looked up by name in a [FormatRegistry]. The
//! registry is built from the `[output]` section of the configuration, so the JSON style and the
//! selected format travel together.

use crate::notation::ast::OptionDocument;
use crate::notation::config::OutputConfig;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter is registered under this name
    FormatNotFound {
        name: String,
        available: Vec<String>,
    },
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound { name, available } => write!(
                f,
                "Format '{name}' not found (available: {})",
                available.join(", ")
            ),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// A named way of writing an [OptionDocument] out as text
pub trait Formatter: Send + Sync {
    fn name(&self) -> &str;

    fn serialize(&self, doc: &OptionDocument) -> Result<String, FormatError>;

    /// One line shown by `--list-formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters by name, listed in name order
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: BTreeMap::new(),
        }
    }

    /// The built-in formats, JSON written the way `output` asks
    pub fn for_output(output: &OutputConfig) -> Self {
        Self::builtin(output.pretty)
    }

    /// The built-in formats with pretty JSON
    pub fn with_defaults() -> Self {
        Self::builtin(true)
    }

    fn builtin(pretty: bool) -> Self {
        let mut registry = Self::new();
        registry.register(super::JsonFormatter { pretty });
        registry.register(super::YamlFormatter);
        registry.register(super::TagFormatter);
        registry
    }

    /// Add a formatter, replacing any registered under the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Registered formatters in name order
    pub fn formatters(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.values().map(|f| f.as_ref())
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    pub fn serialize(&self, doc: &OptionDocument, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound {
                name: format.to_string(),
                available: self.list_formats(),
            })?;
        formatter.serialize(doc)
    }

    /// Write `doc` in the format selected by `output`
    pub fn render(
        &self,
        doc: &OptionDocument,
        output: &OutputConfig,
    ) -> Result<String, FormatError> {
        self.serialize(doc, &output.format)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parsing::parse;

    struct UppercaseNames;

    impl Formatter for UppercaseNames {
        fn name(&self) -> &str {
            "upper"
        }

        fn serialize(&self, doc: &OptionDocument) -> Result<String, FormatError> {
            Ok(doc
                .labels
                .iter()
                .map(|label| label.name.to_uppercase())
                .collect::<Vec<_>>()
                .join(","))
        }

        fn description(&self) -> &str {
            "Label names in upper case"
        }
    }

    fn output(format: &str, pretty: bool) -> OutputConfig {
        OutputConfig {
            format: format.to_string(),
            pretty,
        }
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());

        registry.register(UppercaseNames);
        assert_eq!(
            registry.get("upper").map(|f| f.description()),
            Some("Label names in upper case")
        );
        assert_eq!(
            registry.serialize(&parse("<size+color>s+red"), "upper"),
            Ok("SIZE,COLOR".to_string())
        );
    }

    #[test]
    fn test_builtin_formats_in_name_order() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["json", "tag", "yaml"]);
        let names: Vec<_> = registry.formatters().map(|f| f.name()).collect();
        assert_eq!(names, vec!["json", "tag", "yaml"]);
    }

    #[test]
    fn test_render_follows_output_config() {
        let doc = parse("85");
        let compact = output("json", false);
        let rendered = FormatRegistry::for_output(&compact)
            .render(&doc, &compact)
            .unwrap();
        assert!(!rendered.contains('\n'));

        let pretty = output("json", true);
        let rendered = FormatRegistry::for_output(&pretty)
            .render(&doc, &pretty)
            .unwrap();
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn test_unknown_format_lists_alternatives() {
        let registry = FormatRegistry::with_defaults();
        let err = registry.render(&parse("85"), &output("xml", true)).unwrap_err();
        assert_eq!(
            err,
            FormatError::FormatNotFound {
                name: "xml".to_string(),
                available: vec!["json".into(), "tag".into(), "yaml".into()],
            }
        );
        assert_eq!(
            err.to_string(),
            "Format 'xml' not found (available: json, tag, yaml)"
        );
    }

    #[test]
    fn test_serialization_error_display() {
        let err = FormatError::SerializationError("failed".to_string());
        assert_eq!(err.to_string(), "Serialization error: failed");
    }
}

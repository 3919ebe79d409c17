//! YAML serialization

use super::registry::{FormatError, Formatter};
use crate::notation::ast::OptionDocument;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &OptionDocument) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Document as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parsing::parse;

    #[test]
    fn test_yaml_output() {
        let output = YamlFormatter.serialize(&parse("<사이즈+색상>S+빨강=5")).unwrap();
        assert!(output.contains("version: 0.3"));
        assert!(output.contains("type: select"));
        assert!(output.contains("stock: 5"));

        let back: OptionDocument = serde_yaml::from_str(&output).unwrap();
        assert_eq!(back.options[0].option.value_for("색상"), Some("빨강"));
    }
}

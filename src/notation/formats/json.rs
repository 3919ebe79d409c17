//! JSON serialization

use super::registry::{FormatError, Formatter};
use crate::notation::ast::OptionDocument;

/// Serializes documents with serde_json
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &OptionDocument) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(doc)
        } else {
            serde_json::to_string(doc)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Document as JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parsing::parse;

    #[test]
    fn test_compact_json() {
        let output = JsonFormatter { pretty: false }
            .serialize(&parse("85,90"))
            .unwrap();
        assert_eq!(
            output,
            r#"{"version":0.3,"labels":[{"name":"옵션","type":"select","min":null,"max":null,"help":null}],"options":[{"id":null,"option":"85","stock":null},{"id":null,"option":"90","stock":null}]}"#
        );
    }

    #[test]
    fn test_json_reads_back() {
        let doc = parse("<사이즈+색상>S+빨강=5,M+노랑=3");
        let output = JsonFormatter { pretty: true }.serialize(&doc).unwrap();
        let back: OptionDocument = serde_json::from_str(&output).unwrap();
        assert_eq!(back, doc);
    }
}

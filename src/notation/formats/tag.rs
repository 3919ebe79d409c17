//! XML-like document tag serialization
//!
//! Serializes a parsed document to an XML-like format that directly reflects its structure.
//!
//! ## Format
//!
//! - Label → `<label>` with its type, bounds and help as attributes, the name as text
//! - Single-label row → `<option>` with the value as text
//! - Multi-label row → `<option>` with one nested `<value>` per label
//! - Stock → `stock` attribute
//!
//! ## Example
//!
//! ```text
//! <document version="0.3">
//!   <labels>
//!     <label type="select" help="신발 크기 선택">사이즈</label>
//!     <label type="select">색상</label>
//!   </labels>
//!   <options>
//!     <option stock="5">
//!       <value label="사이즈">S</value>
//!       <value label="색상">빨강</value>
//!     </option>
//!   </options>
//! </document>
//! ```

use super::registry::{FormatError, Formatter};
use crate::notation::ast::{Label, OptionChoice, OptionDocument, OptionValue};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn open_tag(&mut self, tag: &str, attributes: &[(&str, String)]) {
        let open = format!("<{tag}{}>", render_attributes(attributes));
        self.push_indent(&open);
    }

    fn close_tag_inline(&mut self, tag: &str) {
        self.output.push_str(&format!("</{tag}>"));
        self.output.push('\n');
    }

    fn tag_with_text(&mut self, tag: &str, attributes: &[(&str, String)], text: &str) {
        self.open_tag(tag, attributes);
        self.output.push_str(&escape_xml(text));
        self.close_tag_inline(tag);
    }

    fn block<T>(&mut self, tag: &str, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        self.open_tag(tag, &[]);
        if !items.is_empty() {
            self.output.push('\n');
            self.indent_level += 1;
            for item in items {
                each(self, item);
            }
            self.indent_level -= 1;
            self.push_indent("");
        }
        self.close_tag_inline(tag);
    }

    fn visit_label(&mut self, label: &Label) {
        let mut attributes = vec![("type", label.kind.to_string())];
        if let Some(min) = &label.min {
            attributes.push(("min", min.to_string()));
        }
        if let Some(max) = &label.max {
            attributes.push(("max", max.to_string()));
        }
        if let Some(help) = &label.help {
            attributes.push(("help", help.clone()));
        }
        self.tag_with_text("label", &attributes, &label.name);
    }

    fn visit_option(&mut self, value: &OptionValue) {
        let attributes: Vec<_> = value
            .stock
            .map(|stock| ("stock", stock.to_string()))
            .into_iter()
            .collect();

        match &value.option {
            OptionChoice::Single(text) => self.tag_with_text("option", &attributes, text),
            OptionChoice::Combination(selection) => {
                let entries: Vec<_> = selection.iter().collect();
                self.open_tag("option", &attributes);
                if !entries.is_empty() {
                    self.output.push('\n');
                    self.indent_level += 1;
                    for (name, text) in entries {
                        self.tag_with_text("value", &[("label", name.to_string())], text);
                    }
                    self.indent_level -= 1;
                    self.push_indent("");
                }
                self.close_tag_inline("option");
            }
        }
    }
}

fn render_attributes(attributes: &[(&str, String)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {key}=\"{}\"", escape_xml(value)))
        .collect()
}

/// Serialize a document to tag format
pub fn serialize_document(doc: &OptionDocument) -> String {
    let mut serializer = TagSerializer {
        output: String::new(),
        indent_level: 0,
    };

    serializer.open_tag("document", &[("version", doc.version.to_string())]);
    serializer.output.push('\n');
    serializer.indent_level += 1;
    serializer.block("labels", &doc.labels, |s, label| s.visit_label(label));
    serializer.block("options", &doc.options, |s, value| s.visit_option(value));
    serializer.indent_level -= 1;
    serializer.close_tag_inline("document");

    serializer.output
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &OptionDocument) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }

    fn description(&self) -> &str {
        "XML-like tag dump of labels and options"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parsing::parse;

    #[test]
    fn test_single_label_document() {
        let output = serialize_document(&parse("<옵션>85=3,90"));
        assert_eq!(
            output,
            "<document version=\"0.3\">\n\
             \x20 <labels>\n\
             \x20   <label type=\"select\">옵션</label>\n\
             \x20 </labels>\n\
             \x20 <options>\n\
             \x20   <option stock=\"3\">85</option>\n\
             \x20   <option>90</option>\n\
             \x20 </options>\n\
             </document>\n"
        );
    }

    #[test]
    fn test_multi_label_rows_nest_values() {
        let output = serialize_document(&parse("<사이즈+색상>S+빨강=5"));
        assert!(output.contains("<option stock=\"5\">\n"));
        assert!(output.contains("      <value label=\"사이즈\">S</value>\n"));
        assert!(output.contains("      <value label=\"색상\">빨강</value>\n"));
        assert!(output.contains("    </option>\n"));
    }

    #[test]
    fn test_empty_options_close_inline() {
        let output = serialize_document(&parse(""));
        assert!(output.contains("  <options></options>\n"));
    }

    #[test]
    fn test_attributes_are_escaped() {
        let output = serialize_document(&parse(r#"<a"fish & chips"+b>x+y"#));
        assert!(output.contains("help=\"fish &amp; chips\""), "{output}");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}

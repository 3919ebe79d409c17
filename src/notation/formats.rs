//! Output format implementations for parsed documents
//!
//! This module contains the serializers a parsed [OptionDocument](crate::notation::ast::OptionDocument)
//! can be written with:
//! - `json`: the document as consumers of the notation read it
//! - `yaml`: the same structure as YAML
//! - `tag`: an indented XML-like dump for eyeballing

pub mod json;
pub mod registry;
pub mod tag;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::{serialize_document as serialize_tag, TagFormatter};
pub use yaml::YamlFormatter;

//! Testing utilities for document assertions
//!
//!     Tests that walk the document by hand (`doc.options[2].option.as_combination().unwrap()
//!     .get("색상")`) are noisy and break whenever the model changes shape. Document tests use
//!     the fluent API in this module instead:
//!
//!     ```rust,ignore
//!     use opnote::notation::testing::assert_document;
//!
//!     let doc = opnote::parse("<사이즈+색상>S+빨강=5,M+노랑=5");
//!
//!     assert_document(&doc)
//!         .label_count(2)
//!         .label(0, |label| {
//!             label.name("사이즈").kind("select");
//!         })
//!         .option_count(2)
//!         .option(1, |row| {
//!             row.value("색상", "노랑").stock(Some(5));
//!         });
//!     ```

mod assertions;
pub mod matchers;

pub use assertions::{DocumentAssertion, LabelAssertion, OptionAssertion};

use crate::notation::ast::OptionDocument;

/// Create an assertion builder for a document
pub fn assert_document(doc: &OptionDocument) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

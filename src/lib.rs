//! # opnote
//!
//! A parser for the compact product option notation.
//!
//! A single text field such as `<사이즈+색상>S+빨강=5,M+노랑=3` encodes an option matrix: the
//! bracketed schema row declares the option dimensions (labels), and every comma or newline
//! separated row names one combination with an optional stock count.
//!
//! ```rust,ignore
//! let doc = opnote::parse("<사이즈+색상>S+빨강=5,M+노랑=3");
//! assert_eq!(doc.labels.len(), 2);
//! ```
//!
//! ## Testing
//!
//! Document-level tests use the fluent assertions in [testing](notation::testing).

pub mod notation;

pub use notation::ast::{
    Bound, Label, LabelType, OptionChoice, OptionDocument, OptionValue, Selection, VERSION,
};
pub use notation::parsing::{parse, parse_with, parse_with_diagnostics, ParseOptions, ParseOutcome};

//! Document model produced by the parser
//!
//!     A parsed notation is an [OptionDocument]: the ordered labels declared by the schema row
//!     and one [OptionValue] per logical row. Rows align to labels by position, so the order of
//!     both lists is significant.
//!
//!     Every type here serializes with serde. The shapes mirror what downstream consumers of the
//!     notation expect: a label's `type` is a plain string, bounds are either numbers or raw
//!     strings, and a row's `option` is either a string or an object depending on how many
//!     labels the schema declares.

pub mod document;
pub mod label;
pub mod value;

pub use document::{OptionDocument, VERSION};
pub use label::{Bound, Label, LabelType, DEFAULT_LABEL_NAME};
pub use value::{OptionChoice, OptionValue, Selection};

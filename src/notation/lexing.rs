//! Lexing for the option notation
//!
//! The notation has no token stream of its own: the raw text is first cut into logical rows
//! ([lines]), and rows are then scanned for delimited fragments such as label brackets and
//! quoted help text ([brackets]). Both steps are lenient and never fail.

pub mod brackets;
pub mod lines;
pub mod numeric;

pub use brackets::{extract_tokens, scan_tokens, TokenScan};
pub use lines::split_lines;
pub use numeric::parse_leading_int;

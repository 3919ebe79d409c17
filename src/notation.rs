//! Main module for option notation functionality

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod escaping;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod validation;

//! Lexical analysis for MicroML.
//!
//! Converts source text into a flat sequence of tokens:
//!
//! - `--` line comments are stripped before scanning
//! - Patterns are tried in a fixed order (keyword, operator, identifier,
//!   number, punctuation, whitespace) using one combined regex
//! - Whitespace is not emitted, but its line breaks advance the line counter
//! - Unmatched characters are silently dropped

pub mod lexer;
pub mod tokens;

#![allow(clippy::module_inception)]

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\n|\r").unwrap();
}

/// Where a parse error was raised: the 1-based source line and the cursor
/// index into the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub token_index: usize,
}

/// Returns the trimmed text of 1-based `line` in `source`.
///
/// Lines are split on the same breaks the lexer counts (`\r\n`, `\n` and a
/// lone `\r`). An out-of-range line yields an empty string.
pub fn get_line_context(source: &str, line: usize) -> String {
    if line == 0 {
        return String::new();
    }

    LINE_BREAK
        .split(source)
        .nth(line - 1)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// Tokenizes and parses MicroML source.
///
/// `Ok(None)` means the source held no tokens (blank or comments only).
pub fn parse_source(source: &str) -> Result<Option<Node>, Error> {
    parse(tokenize(source), source)
}

/// Renders an error as a compiler-style report.
///
/// ```text
/// Error: ExpectedLetIn (every `let` binding needs an `in` body)
/// -> line 1, token 4
///   |
/// 1 | let x = 5
///   |
///   = Expected 'in' after let binding
/// ```
pub fn format_error(error: &Error) -> String {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    report.push_str(&format!(
        "-> line {}, token {}\n",
        error.get_line(),
        error.get_token_index()
    ));
    report.push_str(&format!("{:>padding$}\n", "|"));
    report.push_str(&format!("{} | {}\n", line_string, error.get_context()));
    report.push_str(&format!("{:>padding$}\n", "|"));
    report.push_str(&format!("{:>padding$} {}", "=", error.get_message()));

    report
}

#[cfg(test)]
mod tests {
    use super::{format_error, get_line_context, parse_source};

    #[test]
    fn test_get_line_context() {
        let source = "let x = 5 in\n   x + 1   \r\nlast\rafter";

        assert_eq!(get_line_context(source, 1), "let x = 5 in");
        assert_eq!(get_line_context(source, 2), "x + 1");
        assert_eq!(get_line_context(source, 3), "last");
        assert_eq!(get_line_context(source, 4), "after");
    }

    #[test]
    fn test_get_line_context_out_of_range() {
        assert_eq!(get_line_context("x", 0), "");
        assert_eq!(get_line_context("x", 2), "");
        assert_eq!(get_line_context("", 1), "");
    }

    #[test]
    fn test_get_line_context_keeps_blank_lines() {
        let source = "a\n\nc";

        assert_eq!(get_line_context(source, 2), "");
        assert_eq!(get_line_context(source, 3), "c");
    }

    #[test]
    fn test_format_error() {
        let error = parse_source("let x = 5").unwrap_err();
        let report = format_error(&error);

        assert_eq!(
            report,
            "Error: ExpectedLetIn (every `let` binding needs an `in` body)\n\
             -> line 1, token 4\n  |\n1 | let x = 5\n  |\n  = Expected 'in' after let binding"
        );
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = parse_source("let 5 = x in x").unwrap_err();
        let report = format_error(&error);

        assert!(report.starts_with("Error: ExpectedLetIdentifier\n"));
        assert!(report.ends_with("= Expected identifier after 'let'"));
    }
}

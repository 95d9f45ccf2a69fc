//! Literal classification for the AST.
//!
//! Numeric values are never evaluated; the literal keeps its source text and
//! records only which shape it was recognised as.

use std::fmt::Display;

/// Represents the different literal kinds in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Number,
    Boolean,
}

impl Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralKind::Number => write!(f, "Number"),
            LiteralKind::Boolean => write!(f, "Boolean"),
        }
    }
}

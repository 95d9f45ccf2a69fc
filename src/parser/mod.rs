//! Parser module for building the MicroML syntax tree.
//!
//! A predictive recursive-descent parser over the lexer's token sequence:
//!
//! - Keyword-led forms (`let`, `if`, `fn`) dispatch through a lookup table
//! - Binary operators use precedence climbing over a binding-power table
//! - Juxtaposed primaries become function applications
//!
//! Parsing stops at the first error; there is no recovery.

pub mod expr;
pub mod forms;
pub mod lookups;
pub mod parser;

//! Error types for the MicroML front end.
//!
//! Parsing is all-or-nothing, so there is exactly one failure type crossing
//! the crate boundary. It carries:
//!
//! - The specific grammar violation (or a wrapped internal fault)
//! - The 1-based line and the token index where parsing stopped
//! - The trimmed source line for display
//! - An optional suggestion

pub mod errors;

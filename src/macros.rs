//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$value` - Anything convertible into the token's `String` text
/// * `$line` - The 1-based source line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("42", 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            value: ::std::string::String::from($value),
            line: $line,
        }
    };
}

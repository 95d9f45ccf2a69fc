use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A parse failure: what went wrong, where, and the source line it happened on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {}: {}", .position.line, .internal_error)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    context: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, context: String) -> Self {
        Error {
            internal_error: error_impl,
            position,
            context,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// 1-based source line the error is attributed to.
    pub fn get_line(&self) -> usize {
        self.position.line
    }

    /// Cursor index into the token sequence when the error was raised.
    pub fn get_token_index(&self) -> usize {
        self.position.token_index
    }

    /// Trimmed text of the offending source line, empty if out of range.
    pub fn get_context(&self) -> &str {
        &self.context
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::Internal { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::ExpectedLetIdentifier => "ExpectedLetIdentifier",
            ErrorImpl::ExpectedLetEquals => "ExpectedLetEquals",
            ErrorImpl::ExpectedLetIn => "ExpectedLetIn",
            ErrorImpl::ExpectedThen => "ExpectedThen",
            ErrorImpl::ExpectedElse => "ExpectedElse",
            ErrorImpl::ExpectedArrow => "ExpectedArrow",
            ErrorImpl::ExpectedFunctionBody => "ExpectedFunctionBody",
            ErrorImpl::ExpectedClosingParen => "ExpectedClosingParen",
            ErrorImpl::ExpectedRightOperand { .. } => "ExpectedRightOperand",
            ErrorImpl::Internal { .. } => "Internal",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedEndOfInput => {
                ErrorTip::Suggestion(String::from("the expression is incomplete"))
            }
            ErrorImpl::ExpectedLetIn => {
                ErrorTip::Suggestion(String::from("every `let` binding needs an `in` body"))
            }
            ErrorImpl::ExpectedElse => {
                ErrorTip::Suggestion(String::from("`if` expressions always need an `else` branch"))
            }
            ErrorImpl::ExpectedClosingParen => {
                ErrorTip::Suggestion(String::from("check for an unbalanced `(`"))
            }
            ErrorImpl::ExpectedRightOperand { operator } => ErrorTip::Suggestion(format!(
                "`{}` needs an expression on both sides",
                operator
            )),
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("Unexpected token: {token}")]
    UnexpectedToken { token: String },
    #[error("Expected '{expected}', got '{found}'")]
    ExpectedToken { expected: String, found: String },
    #[error("Expected identifier after 'let'")]
    ExpectedLetIdentifier,
    #[error("Expected '=' after variable name in let binding")]
    ExpectedLetEquals,
    #[error("Expected 'in' after let binding")]
    ExpectedLetIn,
    #[error("Expected 'then' after if condition")]
    ExpectedThen,
    #[error("Expected 'else' after then branch")]
    ExpectedElse,
    #[error("Expected '->' in function definition")]
    ExpectedArrow,
    #[error("Expected function body after '->'")]
    ExpectedFunctionBody,
    #[error("Expected closing parenthesis ')'")]
    ExpectedClosingParen,
    #[error("Expected right operand after '{operator}'")]
    ExpectedRightOperand { operator: String },
    #[error("Error parsing MicroML code: {reason}")]
    Internal { reason: String },
}

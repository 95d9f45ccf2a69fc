//! Keyword-led forms.
//!
//! Each handler parses a form up to its last sub-expression (the `let` body,
//! the `else` branch, the `fn` body) and returns it as an [`OpenForm`]. The
//! caller parses that trailing expression and closes the form, so chains like
//! `let a = 1 in let b = 2 in ...` are built in a loop instead of by recursion.
//!
//! Every error raised here is attributed to the line of the introducing
//! keyword, not the line the cursor has reached.

use crate::{
    ast::{
        ast::Node,
        expressions::{FunctionExpr, IfExpr, LetExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// A keyword form still waiting for its trailing expression.
#[derive(Debug)]
pub enum OpenForm {
    Let { variable: String, value: Node },
    If { condition: Node, then_branch: Node },
    Function { parameters: Vec<String> },
}

impl OpenForm {
    pub fn close(self, tail: Node) -> Node {
        match self {
            OpenForm::Let { variable, value } => Node::Let(LetExpr::new(variable, value, tail)),
            OpenForm::If {
                condition,
                then_branch,
            } => Node::If(IfExpr::new(condition, then_branch, tail)),
            OpenForm::Function { parameters } => {
                Node::Function(FunctionExpr::new(parameters, tail))
            }
        }
    }
}

/// `let IDENT = expr in`, body left to the caller
pub fn parse_let_expr(parser: &mut Parser) -> Result<OpenForm, Error> {
    let let_line = parser.current_line();
    parser.expect("let")?;

    let variable = match parser.current_token() {
        Some(token) if token.is_identifier_shaped() => token.value.clone(),
        _ => {
            return Err(parser.error_at_line(ErrorImpl::ExpectedLetIdentifier, let_line));
        }
    };
    parser.advance();

    parser.expect_error("=", |parser| {
        parser.error_at_line(ErrorImpl::ExpectedLetEquals, let_line)
    })?;
    let value = parse_expr(parser)?;

    parser.expect_error("in", |parser| {
        parser.error_at_line(ErrorImpl::ExpectedLetIn, let_line)
    })?;

    Ok(OpenForm::Let { variable, value })
}

/// `if expr then expr else`, else-branch left to the caller
pub fn parse_if_expr(parser: &mut Parser) -> Result<OpenForm, Error> {
    let if_line = parser.current_line();
    parser.expect("if")?;

    let condition = parse_expr(parser)?;

    parser.expect_error("then", |parser| {
        parser.error_at_line(ErrorImpl::ExpectedThen, if_line)
    })?;
    let then_branch = parse_expr(parser)?;

    parser.expect_error("else", |parser| {
        parser.error_at_line(ErrorImpl::ExpectedElse, if_line)
    })?;

    Ok(OpenForm::If {
        condition,
        then_branch,
    })
}

/// `fn IDENT+ ->`, body left to the caller
pub fn parse_fn_expr(parser: &mut Parser) -> Result<OpenForm, Error> {
    let fn_line = parser.current_line();
    parser.expect("fn")?;

    let mut parameters = vec![];

    while let Some(token) = parser.current_token() {
        if token.kind() == TokenKind::Arrow || !token.is_identifier_shaped() {
            break;
        }

        parameters.push(token.value.clone());
        parser.advance();
    }

    // A function needs at least one parameter before its arrow.
    if parameters.is_empty() || parser.current_token_kind() != Some(TokenKind::Arrow) {
        return Err(parser.error_at_line(ErrorImpl::ExpectedArrow, fn_line));
    }

    parser.advance();

    if parser.is_at_end() {
        return Err(parser.error_at_line(ErrorImpl::ExpectedFunctionBody, fn_line));
    }

    Ok(OpenForm::Function { parameters })
}

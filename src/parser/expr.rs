use crate::{
    ast::{
        ast::Node,
        expressions::{ApplicationExpr, BinaryExpr, IdentifierExpr, LiteralExpr},
        types::LiteralKind,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses one full expression, dispatching keyword-led forms first.
///
/// Counts one level of nesting however many forms are chained in tail
/// position.
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.descend()?;
    let result = dispatch_expr(parser);
    parser.ascend();

    result
}

fn dispatch_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut open_forms = vec![];

    let mut node = loop {
        let token_kind = match parser.current_token_kind() {
            Some(kind) => kind,
            None => return Err(parser.error(ErrorImpl::UnexpectedEndOfInput)),
        };

        match parser.get_form_lookup().get(&token_kind).copied() {
            Some(form_fn) => open_forms.push(form_fn(parser)?),
            None => break parse_binary_expr(parser, BindingPower::Relational)?,
        }
    };

    // Innermost form first.
    while let Some(form) = open_forms.pop() {
        node = parser.build(form.close(node))?;
    }

    Ok(node)
}

/// Precedence climbing. Operators binding at least as tight as `min_bp` are
/// folded into the left operand; right operands are parsed one level tighter.
pub fn parse_binary_expr(parser: &mut Parser, min_bp: BindingPower) -> Result<Node, Error> {
    let mut left = parse_application_or_primary(parser)?;

    while let Some((operator, bp)) = parser.current_operator() {
        if bp < min_bp {
            break;
        }

        parser.advance();

        if parser.is_at_end() {
            return Err(parser.error(ErrorImpl::ExpectedRightOperand { operator }));
        }

        let right = parse_binary_expr(parser, bp.tighter())?;
        left = parser.build(Node::BinaryOp(BinaryExpr::new(operator, left, right)))?;
    }

    Ok(left)
}

/// A primary followed by zero or more juxtaposed primaries.
///
/// Arguments stop at a terminator (`)`, `;`, `in`, `then`, `else`), a binary
/// operator, or end of input.
pub fn parse_application_or_primary(parser: &mut Parser) -> Result<Node, Error> {
    let function = parse_primary_expr(parser)?;
    let mut arguments = vec![];

    while let Some(token) = parser.current_token() {
        if token.is_terminator() || token.is_binary_operator() {
            break;
        }

        arguments.push(parse_primary_expr(parser)?);
    }

    if arguments.is_empty() {
        Ok(function)
    } else {
        parser.build(Node::Application(ApplicationExpr::new(function, arguments)))
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = match parser.current_token() {
        Some(token) => token.clone(),
        None => return Err(parser.error(ErrorImpl::UnexpectedEndOfInput)),
    };

    match token.kind() {
        TokenKind::Number => {
            parser.advance();
            Ok(Node::Literal(LiteralExpr::new(token.value, LiteralKind::Number)))
        }
        TokenKind::True | TokenKind::False => {
            parser.advance();
            Ok(Node::Literal(LiteralExpr::new(token.value, LiteralKind::Boolean)))
        }
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ if token.is_identifier_shaped() => {
            parser.advance();
            Ok(Node::Identifier(IdentifierExpr::new(token.value)))
        }
        _ => Err(parser.error(ErrorImpl::UnexpectedToken { token: token.value })),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect("(")?;
    let expr = parse_expr(parser)?;

    parser.expect_error(")", |parser| parser.error(ErrorImpl::ExpectedClosingParen))?;

    Ok(expr)
}

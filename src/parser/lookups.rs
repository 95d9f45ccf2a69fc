use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{forms::*, parser::Parser};

/// Operator precedence levels, loosest first. All levels are left-associative.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Relational,
    Additive,
    Multiplicative,
    Primary,
}

impl BindingPower {
    /// The next tighter level, used as the minimum for a right operand so that
    /// a same-level operator to the right folds into the left instead.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

pub type FormHandler = fn(&mut Parser) -> Result<OpenForm, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Relational
    parser.infix(TokenKind::Equals, BindingPower::Relational);
    parser.infix(TokenKind::NotEquals, BindingPower::Relational);
    parser.infix(TokenKind::Less, BindingPower::Relational);
    parser.infix(TokenKind::Greater, BindingPower::Relational);
    parser.infix(TokenKind::LessEquals, BindingPower::Relational);
    parser.infix(TokenKind::GreaterEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, BindingPower::Additive);
    parser.infix(TokenKind::Dash, BindingPower::Additive);
    parser.infix(TokenKind::Star, BindingPower::Multiplicative);
    parser.infix(TokenKind::Slash, BindingPower::Multiplicative);

    // Keyword-led forms
    parser.form(TokenKind::Let, parse_let_expr);
    parser.form(TokenKind::If, parse_if_expr);
    parser.form(TokenKind::Fn, parse_fn_expr);
}

pub type FormLookup = HashMap<TokenKind, FormHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

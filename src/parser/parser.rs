//! Parser state and entry point.
//!
//! The parser is predictive: every rule is chosen from the current token
//! alone, the cursor only moves forward, and there is no backtracking.
//!
//! It maintains lookup tables for:
//! - Keyword-led forms (`let`, `if`, `fn`)
//! - Binding powers for binary operators

use std::collections::HashMap;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    get_line_context,
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, BPLookup, BindingPower, FormHandler, FormLookup},
};

/// Deepest recursive nesting (parentheses, `let` values, `if` conditions and
/// then-branches) accepted before parsing is abandoned.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Deepest tree the parser will build. Bounds the recursion of dropping,
/// cloning, comparing and rendering a tree.
pub const MAX_TREE_DEPTH: usize = 2000;

/// Cursor state for one parse. Never shared between parses.
pub struct Parser<'a> {
    /// The tokens to parse, read-only once the parser is built
    tokens: Vec<Token>,
    /// Index of the current token; equal to `tokens.len()` at end of input
    pos: usize,
    /// Line of the current token, or of the last token once input is exhausted
    line: usize,
    /// Current expression nesting
    depth: usize,
    /// Original source, for error context
    source: &'a str,
    form_lookup: FormLookup,
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, source: &'a str) -> Self {
        let line = tokens.first().map(|token| token.line).unwrap_or(1);

        Parser {
            tokens,
            pos: 0,
            line,
            depth: 0,
            source,
            form_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token, or `None` at end of input.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(Token::kind)
    }

    pub fn current_line(&self) -> usize {
        self.line
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Advances to the next token and returns the one consumed.
    ///
    /// At end of input this is a no-op returning `None`.
    pub fn advance(&mut self) -> Option<Token> {
        let consumed = self.tokens.get(self.pos).cloned();

        if consumed.is_some() {
            self.pos += 1;
            if let Some(next) = self.tokens.get(self.pos) {
                self.line = next.line;
            }
        }

        consumed
    }

    /// Consumes the current token if its text is `expected`, otherwise
    /// returns the error built by `on_error`.
    pub fn expect_error<F>(&mut self, expected: &str, on_error: F) -> Result<Token, Error>
    where
        F: FnOnce(&Self) -> Error,
    {
        match self.current_token() {
            Some(token) if token.value == expected => {
                let token = token.clone();
                self.advance();
                Ok(token)
            }
            _ => Err(on_error(self)),
        }
    }

    /// Consumes the current token, failing with "Expected 'x', got 'y'"
    /// when its text is not `expected`.
    pub fn expect(&mut self, expected: &str) -> Result<Token, Error> {
        self.expect_error(expected, |parser| {
            let found = parser
                .current_token()
                .map(|token| token.value.clone())
                .unwrap_or_else(|| String::from("end of input"));

            parser.error(ErrorImpl::ExpectedToken {
                expected: String::from(expected),
                found,
            })
        })
    }

    /// Binary operator at the cursor and its binding power, if any.
    pub fn current_operator(&self) -> Option<(String, BindingPower)> {
        let token = self.current_token()?;
        let binding_power = self.binding_power_lookup.get(&token.kind())?;
        Some((token.value.clone(), *binding_power))
    }

    pub fn get_form_lookup(&self) -> &FormLookup {
        &self.form_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a binary operator with its binding power.
    pub fn infix(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers the handler for a keyword-led form.
    pub fn form(&mut self, kind: TokenKind, form_fn: FormHandler) {
        self.form_lookup.insert(kind, form_fn);
    }

    /// Enters one level of expression nesting.
    pub fn descend(&mut self) -> Result<(), Error> {
        self.depth += 1;

        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::Internal {
                reason: format!("expression nesting exceeds {} levels", MAX_NESTING_DEPTH),
            }));
        }

        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Accepts a freshly built node unless it is deeper than `MAX_TREE_DEPTH`.
    pub fn build(&self, node: Node) -> Result<Node, Error> {
        if node.depth() > MAX_TREE_DEPTH {
            return Err(self.error(ErrorImpl::Internal {
                reason: format!("expression tree exceeds {} levels", MAX_TREE_DEPTH),
            }));
        }

        Ok(node)
    }

    pub fn get_position(&self) -> Position {
        Position {
            line: self.line,
            token_index: self.pos,
        }
    }

    /// Builds an error at the current line.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        self.error_at_line(error_impl, self.line)
    }

    /// Builds an error attributed to `line`, e.g. the line of an enclosing `let`.
    pub fn error_at_line(&self, error_impl: ErrorImpl, line: usize) -> Error {
        Error::new(
            error_impl,
            Position {
                line,
                token_index: self.pos,
            },
            get_line_context(self.source, line),
        )
    }
}

/// Parses a token sequence into a single expression tree.
///
/// Returns `Ok(None)` when there are no tokens, so callers can tell
/// "nothing to show" apart from a failed parse. Tokens left over after the
/// root expression are ignored.
///
/// # Arguments
///
/// * `tokens` - Tokens produced by [`crate::lexer::lexer::tokenize`]
/// * `source` - The original source text, used for error context
pub fn parse(tokens: Vec<Token>, source: &str) -> Result<Option<Node>, Error> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser::new(tokens, source);
    create_token_lookups(&mut parser);

    parse_expr(&mut parser).map(Some)
}

use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("in", TokenKind::In);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("fn", TokenKind::Fn);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("->", TokenKind::Arrow);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("==", TokenKind::Equals);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Dash);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("=", TokenKind::Assignment);
        map.insert("<", TokenKind::Less);
        map.insert(">", TokenKind::Greater);
        map
    };

    pub static ref PUNCTUATION_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map.insert(";", TokenKind::Semicolon);
        map.insert(",", TokenKind::Comma);
        map
    };

    static ref IDENTIFIER_SHAPE: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    static ref NUMBER_SHAPE: Regex = Regex::new(r"^\d+(\.\d+)?$").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,

    Arrow,         // ->
    Assignment,    // =
    Equals,        // ==
    NotEquals,     // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    Let,
    In,
    If,
    Then,
    Else,
    True,
    False,
    Fn,

    /// Text that no lexer pattern produces. Only reachable for hand-built tokens.
    Unrecognised,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical unit: the matched source text and the 1-based line it starts on.
///
/// The kind is not stored. It is re-derived from the text with [`Token::kind`],
/// checking shapes in the same order the lexer tries its patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        let value = self.value.as_str();

        if let Some(kind) = RESERVED_LOOKUP.get(value) {
            *kind
        } else if let Some(kind) = OPERATOR_LOOKUP.get(value) {
            *kind
        } else if IDENTIFIER_SHAPE.is_match(value) {
            TokenKind::Identifier
        } else if NUMBER_SHAPE.is_match(value) {
            TokenKind::Number
        } else if let Some(kind) = PUNCTUATION_LOOKUP.get(value) {
            *kind
        } else {
            TokenKind::Unrecognised
        }
    }

    /// Whether the text has identifier shape. Reserved words qualify too.
    pub fn is_identifier_shaped(&self) -> bool {
        IDENTIFIER_SHAPE.is_match(&self.value)
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind())
    }

    /// Tokens that end a run of juxtaposed application arguments.
    pub fn is_terminator(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::In,
            TokenKind::Then,
            TokenKind::Else,
        ])
    }

    pub fn is_binary_operator(&self) -> bool {
        self.is_one_of_many(&[
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
        ])
    }
}

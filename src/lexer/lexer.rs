use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::Token;

/// Token pattern classes, in the order they are tried at each position.
///
/// Multi-character operators come before their single-character prefixes,
/// and keywords are word-bounded so `lettuce` stays one identifier.
pub const TOKEN_PATTERNS: [(&str, &str); 6] = [
    ("keyword", r"\b(?:let|in|if|then|else|true|false|fn)\b"),
    ("operator", r"->|<=|>=|==|!=|\+|-|\*|/|=|<|>"),
    ("identifier", r"[a-zA-Z_][a-zA-Z0-9_]*"),
    ("number", r"\d+(?:\.\d+)?"),
    ("punctuation", r"[(){}\[\];,]"),
    ("whitespace", r"\s+"),
];

lazy_static! {
    // A lone `\r` ends a comment too, as it is counted as a line break.
    static ref COMMENT: Regex = Regex::new(r"--[^\r\n]*").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"^\s+$").unwrap();
    static ref TOKEN: Regex = {
        let combined = TOKEN_PATTERNS
            .iter()
            .map(|(_, pattern)| format!("(?:{})", pattern))
            .collect::<Vec<String>>()
            .join("|");
        Regex::new(&combined).unwrap()
    };
}

pub struct Lexer {
    tokens: Vec<Token>,
    line: usize,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            line: 1,
        }
    }

    pub fn push(&mut self, value: &str) {
        self.tokens.push(MK_TOKEN!(value, self.line));
    }

    /// Advances the line counter past every line break in `text`.
    pub fn skip_lines(&mut self, text: &str) {
        self.line += count_line_breaks(text);
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

/// Counts `\n` and lone `\r` characters. A `\r\n` pair is one break.
pub fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();

    bytes
        .iter()
        .enumerate()
        .filter(|(i, byte)| match byte {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        })
        .count()
}

pub fn strip_comments(source: &str) -> String {
    COMMENT.replace_all(source, "").into_owned()
}

/// Converts source text into tokens tagged with their starting line.
///
/// Never fails. Characters that match no pattern (`#`, `@`, a lone `!`) are
/// dropped, although line breaks among them are still counted.
pub fn tokenize(source: &str) -> Vec<Token> {
    let code = strip_comments(source);
    let mut lex = Lexer::new();
    let mut last_end = 0;

    for matched in TOKEN.find_iter(&code) {
        lex.skip_lines(&code[last_end..matched.start()]);

        let value = matched.as_str();
        if WHITESPACE.is_match(value) {
            lex.skip_lines(value);
        } else {
            lex.push(value);
        }

        last_end = matched.end();
    }

    lex.tokens
}

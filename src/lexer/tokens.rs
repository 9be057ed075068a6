use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref PUNCTUATION_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("=", TokenKind::Equals);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("\\", TokenKind::Backslash);
        map.insert(";", TokenKind::Semicolon);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// A maximal run of ASCII letters and digits. Covers bare words, numbers
    /// and keywords alike; telling them apart is the parser's job.
    Identifier,

    Equals,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,
    Backslash,
    Semicolon,

    /// One token per run of `\r` / `\n` characters, so CRLF is a single break.
    EndOfLine,

    /// A character outside the recognized alphabet. Not an error at this
    /// stage; the parser decides whether it is fatal.
    Illegal,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical unit. `value` borrows the underlying source text; tokens
/// never copy their payload.
#[derive(Debug, Clone)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: &'src str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token<'_> {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![TokenKind::Identifier, TokenKind::Illegal]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}

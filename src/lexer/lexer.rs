use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, PUNCTUATION_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order against the remaining input; a pattern only fires when
    // it matches at the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[a-zA-Z0-9]+").unwrap(), handler: identifier_handler },
        RegexPattern { regex: Regex::new("[ \t\x0B\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("[\r\n]+").unwrap(), handler: end_of_line_handler },
        RegexPattern { regex: Regex::new(r"[={}();\\]").unwrap(), handler: punctuation_handler },
    ];
}

pub struct Lexer<'src> {
    tokens: Vec<Token<'src>>,
    source: &'src str,
    pos: usize,
    file: Rc<String>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn span_here(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn identifier_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap();
    let value = matched.as_str();

    lexer.push(MK_TOKEN!(
        TokenKind::Identifier,
        value,
        lexer.span_here(value.len())
    ));
    lexer.advance_n(value.len());
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

// A whole run of line break characters collapses into one token.
fn end_of_line_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap();
    let value = matched.as_str();

    lexer.push(MK_TOKEN!(
        TokenKind::EndOfLine,
        value,
        lexer.span_here(value.len())
    ));
    lexer.advance_n(value.len());
}

fn punctuation_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap();
    let value = matched.as_str();

    if let Some(kind) = PUNCTUATION_LOOKUP.get(value) {
        lexer.push(MK_TOKEN!(*kind, value, lexer.span_here(value.len())));
    } else {
        lexer.push(MK_TOKEN!(
            TokenKind::Illegal,
            value,
            lexer.span_here(value.len())
        ));
    }

    lexer.advance_n(value.len());
}

// Fallback for characters no pattern claims. Advances one char, not one
// byte, so multi-byte input cannot split a code point.
fn illegal_handler(lexer: &mut Lexer) {
    let ch = lexer.remainder().chars().next().unwrap();
    let value = &lexer.remainder()[..ch.len_utf8()];

    lexer.push(MK_TOKEN!(
        TokenKind::Illegal,
        value,
        lexer.span_here(value.len())
    ));
    lexer.advance_n(value.len());
}

/// Converts a source buffer into tokens.
///
/// Tokenization never fails: characters outside the recognized alphabet are
/// reported as [TokenKind::Illegal] tokens and scanning continues, leaving
/// it to the parser to decide whether they matter.
pub fn tokenize<'src>(source: &'src str, file: Option<String>) -> Vec<Token<'src>> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, &pattern.regex);
                matched = true;
                break;
            }
        }

        if !matched {
            illegal_handler(&mut lex);
        }
    }

    lex.tokens
}

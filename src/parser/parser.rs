//! Parser implementation for building the document tree.
//!
//! This module contains the token cursor and the top-level parse entry
//! point. The cursor supports reading the current token, peeking an
//! arbitrary number of tokens ahead without consuming, and advancing one
//! token at a time; the grammar needs two tokens of lookahead to tell a
//! `key=value` property from a bare positional value.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    node::node::Node,
    Position,
};

use super::node::parse_node;

/// An index-based cursor over the token sequence.
///
/// Peeking past the end yields `None` rather than an error; there is no
/// end-of-stream token, exhaustion of the sequence signals completion.
pub struct Parser<'src> {
    /// The list of tokens to parse
    tokens: Vec<Token<'src>>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Rc<String>,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: Vec<Token<'src>>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the token `n` positions past the current one without
    /// consuming anything. `peek_nth(0)` is the current token.
    pub fn peek_nth(&self, n: usize) -> Option<&Token<'src>> {
        self.tokens.get(self.pos + n)
    }

    pub fn peek_nth_kind(&self, n: usize) -> Option<TokenKind> {
        self.peek_nth(n).map(|token| token.kind)
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> Option<&Token<'src>> {
        self.pos += 1;
        self.tokens.get(self.pos - 1)
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token<'src>, Error> {
        let token = match self.current_token() {
            Some(token) => token.clone(),
            None => {
                return Err(error.unwrap_or_else(|| {
                    Error::new(ErrorImpl::UnexpectedEndOfInput, self.get_position())
                }))
            }
        };

        if token.kind != expected_kind {
            return Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.to_string(),
                    },
                    token.span.start.clone(),
                )
            }));
        }

        self.pos += 1;
        Ok(token)
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token<'src>, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the source position of the current token, or the end of the
    /// last token once the stream is exhausted.
    pub fn get_position(&self) -> Position {
        if let Some(token) = self.current_token() {
            token.span.start.clone()
        } else if let Some(token) = self.tokens.last() {
            token.span.end.clone()
        } else {
            Position(0, Rc::clone(&self.file))
        }
    }
}

pub(super) fn current_token_text(parser: &Parser) -> String {
    match parser.current_token() {
        Some(token) => token.value.to_string(),
        None => String::from("<end of input>"),
    }
}

pub(super) fn illegal_error(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::IllegalToken {
            token: current_token_text(parser),
        },
        parser.get_position(),
    )
}

/// Parses a stream of tokens into a sequence of top-level nodes.
///
/// This is the main entry point for parsing. Parsing is all-or-nothing: the
/// first structural violation aborts the whole parse and no partial tree is
/// returned.
pub fn parse<'src>(tokens: Vec<Token<'src>>, file: Rc<String>) -> Result<Vec<Node>, Error> {
    let mut parser = Parser::new(tokens, file);
    let mut nodes = vec![];

    while let Some(kind) = parser.current_token_kind() {
        match kind {
            TokenKind::EndOfLine | TokenKind::Semicolon => {
                parser.advance();
            }
            TokenKind::CloseCurly => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: current_token_text(&parser),
                        message: String::from("no child block is open here"),
                    },
                    parser.get_position(),
                ));
            }
            TokenKind::Illegal => {
                return Err(illegal_error(&parser));
            }
            _ => {
                nodes.push(parse_node(&mut parser)?);
            }
        }
    }

    Ok(nodes)
}

use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnknownNodeType { .. } => "UnknownNodeType",
            ErrorImpl::UnterminatedChildBlock => "UnterminatedChildBlock",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnhandledToken { .. } => "UnhandledToken",
        }
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => ErrorKind::Lexical,
            ErrorImpl::UnhandledToken { .. } => ErrorKind::Unknown,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalToken { token } => ErrorTip::Suggestion(format!(
                "Character `{}` is not part of the document grammar",
                token
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a line break or semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnknownNodeType { type_ } => {
                ErrorTip::Suggestion(format!("`{}` is not a known type annotation", type_))
            }
            ErrorImpl::UnterminatedChildBlock => ErrorTip::Suggestion(String::from(
                "A child block is missing its closing `}`",
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
            ErrorImpl::UnhandledToken { token } => ErrorTip::Suggestion(format!(
                "Token `{}` is not handled in this position yet",
                token
            )),
        }
    }
}

/// Broad classification of an error, independent of the exact variant.
///
/// Lexical errors originate from characters the lexer could not classify,
/// syntax errors from structural grammar violations, and unknown errors are
/// reserved for token classes a future grammar extension may introduce.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Unknown,
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("illegal character in input: {token:?}")]
    IllegalToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unknown node type: {type_:?}")]
    UnknownNodeType { type_: String },
    #[error("child block is never closed")]
    UnterminatedChildBlock,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unhandled token: {token:?}")]
    UnhandledToken { token: String },
}

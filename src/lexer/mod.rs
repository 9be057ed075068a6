//! Lexical analysis module for the document front end.
//!
//! This module contains the lexer (tokenizer) that converts document source
//! text into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Maximal alphanumeric runs as identifiers
//! - Collapsing of line break runs into single end-of-line tokens
//! - Token position tracking for error reporting
//! - Whitespace handling and illegal-character fallback

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

//! Error types and error handling for the document front end.
//!
//! This module defines the error types used by the lexer and parser. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and structural failures
//! - Error kind classification (lexical / syntax / unknown)
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

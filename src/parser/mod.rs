//! Parser module for building the document tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a sequence of document nodes. It handles:
//!
//! - Node declarations with optional type annotations
//! - Property (`key=value`) and positional argument lists
//! - Nested child blocks (`{ ... }`)
//! - Line continuations (`\` before a line break)
//!
//! The parser decides property-vs-argument with a two-token peek before
//! committing to a production.

pub mod node;
pub mod parser;

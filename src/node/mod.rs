//! Document tree module.
//!
//! Contains all definitions related to the parsed document tree:
//!
//! - node: the Node entity and its property/argument entries
//! - types: the closed set of type annotations and their lookup table

pub mod node;
pub mod types;

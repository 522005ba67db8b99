//! # poly-eval: polynomial evaluation over point sets

#![deny(missing_docs)]
#![deny(warnings)]

/// Serial and threaded evaluation strategies
pub mod evaluate;

/// Whitespace-delimited real-number parsing
pub mod parse;

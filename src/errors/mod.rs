//! Error types and diagnostic reporting for the lexer.
//!
//! This module defines:
//!
//! - The lexical error taxonomy (`ErrorImpl`) and its line-anchored wrapper
//! - `Diagnostic`, the `[line N] Error: message` record
//! - `Reporter`, the sink that tracks whether any error was reported

pub mod errors;

#[cfg(test)]
mod tests;

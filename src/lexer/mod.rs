//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for a later parsing stage. It handles:
//!
//! - Single and two-character operators with one character of lookahead
//! - Recognition of reserved words and identifiers
//! - String and number literals, including a digit-by-digit number parser
//! - Line tracking for diagnostics
//! - Comments and whitespace handling

pub mod lexer;
pub mod number;
pub mod tokens;

#![allow(clippy::module_inception)]

use std::io::{self, Write};

use crate::{errors::errors::Reporter, lexer::lexer::tokenize};

pub mod errors;
pub mod lexer;
pub mod macros;

/// Scans `source` and writes one token per line to `out`.
///
/// Lexical problems go to `reporter`; only I/O failures on `out` are
/// returned as errors.
pub fn run(source: &str, reporter: &mut Reporter, out: &mut impl Write) -> io::Result<()> {
    for token in tokenize(source, reporter) {
        writeln!(out, "{}", token)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::Reporter;

    #[test]
    fn test_run_prints_tokens() {
        let mut reporter = Reporter::silent();
        let mut out = Vec::new();

        super::run("var x = 1;", &mut reporter, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "Var var null\nIdentifier x null\nEqual = null\nNumber 1 1.0\nSemicolon ; null\nEOF  null\n"
        );
        assert!(!reporter.had_error());
    }

    #[test]
    fn test_run_reports_and_continues() {
        let mut reporter = Reporter::silent();
        let mut out = Vec::new();

        super::run("@ \"hi\"", &mut reporter, &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "String \"hi\" hi\nEOF  null\n");
        assert!(reporter.had_error());
    }
}

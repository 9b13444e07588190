use thiserror::Error;

/// A lexical condition anchored to the source line it was found on.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unexpected character {character:?}.")]
    UnexpectedCharacter { character: char },
    #[error("Invalid character in numeric literal: {character:?}")]
    InvalidNumberCharacter { character: char },
    #[error("Empty numeric literal input")]
    EmptyNumber,
}

/// One reported line, rendered as `[line N] Error: message`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] Error: {message}")]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

/// Collects diagnostics for one caller and remembers whether any were seen.
///
/// The scanner only ever writes here; the caller reads `had_error` to decide
/// whether the run failed and calls `reset` between independent inputs.
#[derive(Debug)]
pub struct Reporter {
    had_error: bool,
    diagnostics: Vec<Diagnostic>,
    echo: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::new()
    }
}

impl Reporter {
    /// Echoes every diagnostic to stderr as it arrives.
    pub fn new() -> Self {
        Reporter {
            had_error: false,
            diagnostics: vec![],
            echo: true,
        }
    }

    /// Records diagnostics without printing them.
    pub fn silent() -> Self {
        Reporter {
            echo: false,
            ..Reporter::new()
        }
    }

    pub fn report(&mut self, line: usize, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            line,
            message: message.into(),
        };

        if self.echo {
            eprintln!("{}", diagnostic);
        }

        self.diagnostics.push(diagnostic);
        self.had_error = true;
    }

    pub fn error(&mut self, error: &Error) {
        self.report(error.get_line(), error.to_string());
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn reset(&mut self) {
        self.had_error = false;
        self.diagnostics.clear();
    }
}

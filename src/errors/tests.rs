//! Unit tests for error handling.
//!
//! This module contains tests for error types and the diagnostic reporter.

use crate::errors::errors::{Diagnostic, Error, ErrorImpl, Reporter};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, 10);

    assert_eq!(error.get_line(), 10);
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnexpectedCharacter { character: '@' }
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ErrorImpl::UnterminatedString.to_string(),
        "Unterminated string."
    );
    assert_eq!(
        ErrorImpl::UnexpectedCharacter { character: '#' }.to_string(),
        "Unexpected character '#'."
    );
    assert_eq!(
        ErrorImpl::InvalidNumberCharacter { character: 'e' }.to_string(),
        "Invalid character in numeric literal: 'e'"
    );
    assert_eq!(
        ErrorImpl::EmptyNumber.to_string(),
        "Empty numeric literal input"
    );
}

#[test]
fn test_error_display_uses_message() {
    let error = Error::new(ErrorImpl::UnterminatedString, 3);
    assert_eq!(error.to_string(), "Unterminated string.");
}

#[test]
fn test_diagnostic_display() {
    let diagnostic = Diagnostic {
        line: 7,
        message: String::from("Unexpected character '$'."),
    };

    assert_eq!(
        diagnostic.to_string(),
        "[line 7] Error: Unexpected character '$'."
    );
}

#[test]
fn test_reporter_starts_clean() {
    let reporter = Reporter::silent();

    assert!(!reporter.had_error());
    assert!(reporter.diagnostics().is_empty());
}

#[test]
fn test_reporter_report_sets_flag() {
    let mut reporter = Reporter::silent();
    reporter.report(4, "Something went wrong.");

    assert!(reporter.had_error());
    assert_eq!(
        reporter.diagnostics(),
        &[Diagnostic {
            line: 4,
            message: String::from("Something went wrong.")
        }]
    );
}

#[test]
fn test_reporter_error_uses_line() {
    let mut reporter = Reporter::silent();
    reporter.error(&Error::new(ErrorImpl::UnterminatedString, 9));

    assert_eq!(
        reporter.diagnostics()[0].to_string(),
        "[line 9] Error: Unterminated string."
    );
}

#[test]
fn test_reporter_reset() {
    let mut reporter = Reporter::silent();
    reporter.report(1, "first");
    reporter.report(2, "second");
    assert_eq!(reporter.diagnostics().len(), 2);

    reporter.reset();

    assert!(!reporter.had_error());
    assert!(reporter.diagnostics().is_empty());

    reporter.report(3, "third");
    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics()[0].line, 3);
}

#[test]
fn test_reporter_default_echoes() {
    let mut reporter = Reporter::default();
    reporter.report(1, "echoed to stderr");

    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics().len(), 1);
}

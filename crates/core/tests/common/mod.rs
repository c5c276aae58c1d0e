//! Shared test helpers for `xvplot_core` integration tests.

#![allow(unreachable_pub)]

use xvplot_core::{Diagnostic, ParseError, ParseResult, Severity, parse_tokens};

/// Split a command on whitespace into tokens.
pub fn toks(command: &str) -> Vec<&str> {
    command.split_whitespace().collect()
}

/// Parse a whitespace-separated command.
pub fn parse(command: &str) -> Result<ParseResult, ParseError> {
    parse_tokens(&toks(command))
}

/// Parse a command that must succeed.
#[allow(dead_code)]
pub fn parse_ok(command: &str) -> ParseResult {
    parse(command).unwrap_or_else(|e| panic!("'{command}' failed: {e}"))
}

/// Parse a command that must fail.
#[allow(dead_code)]
pub fn parse_err(command: &str) -> ParseError {
    match parse(command) {
        Ok(r) => panic!("'{command}' parsed unexpectedly: {:?}", r.chart),
        Err(e) => e,
    }
}

/// Collect diagnostic codes in order.
#[allow(dead_code)]
pub fn diag_codes(result: &ParseResult) -> Vec<String> {
    result.diagnostics.iter().map(|d| d.id.to_string()).collect()
}

/// First diagnostic with the given code.
#[allow(dead_code)]
pub fn find_diag<'a>(result: &'a ParseResult, code: &str) -> Option<&'a Diagnostic> {
    result.diagnostics.iter().find(|d| d.id == code)
}

/// Whether the diagnostic is a warning.
#[allow(dead_code)]
pub fn is_severity_warn(d: &Diagnostic) -> bool {
    matches!(d.severity, Severity::Warn)
}

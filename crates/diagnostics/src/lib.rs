//! Diagnostics for xvplot.
//!
//! Provides [`Diagnostic`], [`Severity`], and [`Span`] types used to report
//! errors, warnings, and informational messages from the chart command
//! interpreter. Diagnostic codes are defined in the [`codes`] module.
//!
//! Spans count tokens, not bytes: the interpreter works on an already
//! tokenized command, so `Span { start: 2, end: 4 }` covers the third and
//! fourth tokens.

#![warn(missing_docs)]

/// Diagnostic ID constants.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Hard error: the command is invalid.
    Error,
    /// Warning: part of the command had no effect.
    Warn,
    /// Informational note.
    Info,
}

/// Token span in the command input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Index of the first token (0-based).
    pub start: usize,
    /// Index one past the last token.
    pub end: usize,
}

impl Span {
    /// Create a span covering tokens `[start, end)`.
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "Span end ({end}) < start ({start})");
        Self { start, end }
    }

    /// Create a span covering the single token at `index`.
    pub fn token(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Create a zero-width span at the given position.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// `true` for a zero-width span.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A diagnostic message produced by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"XVP1001"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable diagnostic message.
    pub message: String,
    /// Optional token span that this diagnostic relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Machine-readable context for tooling. Keys and values are free-form strings.
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Error, message, span)
    }

    /// Shorthand for a `Warn` diagnostic.
    pub fn warn(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Warn, message, span)
    }

    /// Shorthand for an `Info` diagnostic.
    pub fn info(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Info, message, span)
    }

    /// Attach machine-readable context metadata (builder pattern).
    ///
    /// Keys are short descriptors like `"keyword"`, `"value"`, `"mark"`.
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// `true` if this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Returns the human-readable explanation for this diagnostic's code, if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        codes::MISSING_ARGUMENTS => Some(
            "A keyword was recognized but the command ends before all of its \
             required arguments. Supply a value after the keyword.",
        ),
        codes::INVALID_VALUE => Some(
            "The value given to a keyword is not one of the accepted keywords for \
             that attribute (for example TYPE accepts QUANTITATIVE, NOMINAL, \
             ORDINAL or TEMPORAL).",
        ),
        codes::INVALID_NUMBER => Some(
            "A numeric attribute such as WIDTH, HEIGHT or a binning parameter \
             received a value that could not be read as a number.",
        ),
        codes::EMPTY_COMPOUND => Some(
            "A compound attribute such as BIN expects either TRUE/FALSE or at least \
             one of its sub-attributes, but none followed.",
        ),
        codes::MISSING_FIELD_NAME => Some(
            "X_FIELD and Y_FIELD must be followed by the name of the data field \
             to encode.",
        ),
        codes::UNRECOGNIZED_INPUT => Some(
            "Parsing stopped before the end of the command. The remaining tokens \
             do not start any attribute the chart grammar understands.",
        ),
        codes::DISPATCH_GAP => Some(
            "The attribute is understood, but the selected mark kind has no handler \
             for it. The attribute was skipped and parsing continued.",
        ),
        codes::IGNORED_TOGGLE => Some(
            "A toggle attribute received a value other than TRUE or FALSE. The value \
             was consumed and the attribute left unchanged.",
        ),
        codes::UNSUPPORTED_ATTRIBUTE => Some(
            "The attribute is reserved in the command vocabulary but has no effect \
             on the chart yet.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Span ────────────────────────────────────────────────────────────

    #[test]
    fn span_new_valid() {
        let s = Span::new(5, 10);
        assert_eq!(s.start, 5);
        assert_eq!(s.end, 10);
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn span_token_covers_one() {
        let s = Span::token(3);
        assert_eq!(s, Span::new(3, 4));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn span_empty() {
        let s = Span::empty(7);
        assert_eq!(s.start, 7);
        assert_eq!(s.end, 7);
        assert!(s.is_empty());
    }

    #[test]
    #[should_panic(expected = "Span end (3) < start (5)")]
    fn span_new_inverted_panics() {
        Span::new(5, 3);
    }

    // ── Severity Display ────────────────────────────────────────────────

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warn), "warn");
        assert_eq!(format!("{}", Severity::Info), "info");
    }

    // ── Diagnostic constructors ─────────────────────────────────────────

    #[test]
    fn diagnostic_error_constructor() {
        let d = Diagnostic::error(codes::MISSING_ARGUMENTS, "WIDTH needs a value", None);
        assert_eq!(d.id, "XVP1001");
        assert_eq!(d.severity, Severity::Error);
        assert!(d.is_error());
        assert!(d.span.is_none());
    }

    #[test]
    fn diagnostic_warn_constructor() {
        let d = Diagnostic::warn(codes::DISPATCH_GAP, "no handler", Some(Span::token(4)));
        assert_eq!(d.severity, Severity::Warn);
        assert!(!d.is_error());
        assert_eq!(d.span, Some(Span::new(4, 5)));
    }

    #[test]
    fn diagnostic_info_constructor() {
        let d = Diagnostic::info("CUSTOM", "custom message", None);
        assert_eq!(d.severity, Severity::Info);
        assert_eq!(d.id, "CUSTOM");
    }

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::error(codes::UNRECOGNIZED_INPUT, "unrecognized input: FOO", None);
        assert_eq!(format!("{}", d), "error[XVP1006]: unrecognized input: FOO");
    }

    // ── explain ─────────────────────────────────────────────────────────

    #[test]
    fn diagnostic_explain_known() {
        let d = Diagnostic::error(codes::EMPTY_COMPOUND, "test", None);
        assert!(d.explain().unwrap().contains("BIN"));
    }

    #[test]
    fn diagnostic_explain_unknown() {
        let d = Diagnostic::error("UNKNOWN_CODE", "test", None);
        assert!(d.explain().is_none());
    }

    #[test]
    fn all_codes_have_explanations() {
        for code in codes::ALL {
            assert!(
                explain(code).is_some(),
                "diagnostic code {code} has no explain() entry"
            );
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in codes::ALL {
            assert!(seen.insert(*code), "duplicate diagnostic code {code}");
        }
    }

    // ── Serde ───────────────────────────────────────────────────────────

    #[test]
    fn diagnostic_serde_roundtrip() {
        let d = Diagnostic::error(codes::INVALID_VALUE, "bad TYPE", Some(Span::new(2, 4)));
        let json = serde_json::to_string(&d).unwrap();
        let d2: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(d, d2);
    }

    #[test]
    fn diagnostic_serde_omits_none_fields() {
        let d = Diagnostic::error(codes::INVALID_VALUE, "test", None);
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("span"), "None span should be omitted: {json}");
        assert!(
            !json.contains("context"),
            "None context should be omitted: {json}"
        );
    }

    #[test]
    fn diagnostic_context_deterministic_order() {
        let d = Diagnostic::warn(codes::DISPATCH_GAP, "test", None).with_context(BTreeMap::from([
            ("mark".into(), "line".into()),
            ("attribute".into(), "CORNER_RADIUS".into()),
        ]));
        let json = serde_json::to_string(&d).unwrap();
        let a_pos = json.find("attribute").unwrap();
        let m_pos = json.find("mark").unwrap();
        assert!(
            a_pos < m_pos,
            "BTreeMap should serialize in alphabetical key order: {json}"
        );
    }
}

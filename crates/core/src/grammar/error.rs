//! Typed errors for chart command parsing.

use std::collections::BTreeMap;

use super::diag::{Diagnostic, Span, codes};

/// Broad classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The command ended before a keyword's required arguments.
    Structural,
    /// A value was present but meaningless for its attribute.
    Semantic,
    /// The chart grammar stopped before the end of the command.
    UnrecognizedInput,
}

/// A fatal parse failure.
///
/// Parsing is fail-stop: the first error aborts the whole command. Attributes
/// applied before the failure stay on the chart the caller is about to
/// discard.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A keyword matched but fewer tokens than it requires follow it.
    #[error("{keyword} expects at least {expected} argument(s), found {found}")]
    MissingArguments {
        /// The keyword as written in the input.
        keyword: String,
        /// Minimum number of tokens the keyword requires after it.
        expected: usize,
        /// Number of tokens that actually followed.
        found: usize,
        /// Span of the keyword and whatever followed it.
        span: Span,
    },

    /// A value matched none of the keywords accepted for the attribute.
    #[error("missing or invalid {attribute} value{}", describe_value(.value))]
    InvalidValue {
        /// The attribute keyword (e.g. `TYPE`, `MARK`).
        attribute: &'static str,
        /// The offending token, or `None` when the input ended.
        value: Option<String>,
        /// Span of the offending token.
        span: Span,
    },

    /// A numeric attribute received something that is not a number.
    #[error("{attribute} expects a number, got '{value}'")]
    InvalidNumber {
        /// The attribute keyword.
        attribute: &'static str,
        /// The offending token.
        value: String,
        /// Span of the offending token.
        span: Span,
    },

    /// A compound attribute's nested grammar applied no sub-attribute.
    #[error("missing or invalid {what} specification for {attribute}")]
    EmptyCompound {
        /// The attribute keyword (e.g. `BIN`).
        attribute: &'static str,
        /// What the nested grammar describes (e.g. `binning`).
        what: &'static str,
        /// Span from the attribute keyword to where the nested grammar stopped.
        span: Span,
    },

    /// A field encoding started without a field name.
    #[error("{attribute} requires a field name")]
    MissingFieldName {
        /// The keyword that opened the encoding (`X_FIELD` or `Y_FIELD`).
        attribute: &'static str,
        /// Position where the name was expected.
        span: Span,
    },

    /// The chart grammar stopped before the end of the command.
    #[error("unrecognized input: {remaining}")]
    UnrecognizedInput {
        /// All unconsumed tokens, space-joined.
        remaining: String,
        /// Span of the unconsumed tokens.
        span: Span,
    },
}

fn describe_value(value: &Option<String>) -> String {
    match value {
        Some(v) => format!(" '{v}'"),
        None => String::new(),
    }
}

impl ParseError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingArguments { .. } => ErrorKind::Structural,
            ParseError::InvalidValue { .. }
            | ParseError::InvalidNumber { .. }
            | ParseError::EmptyCompound { .. }
            | ParseError::MissingFieldName { .. } => ErrorKind::Semantic,
            ParseError::UnrecognizedInput { .. } => ErrorKind::UnrecognizedInput,
        }
    }

    /// Token span the error refers to.
    pub fn span(&self) -> Span {
        match self {
            ParseError::MissingArguments { span, .. }
            | ParseError::InvalidValue { span, .. }
            | ParseError::InvalidNumber { span, .. }
            | ParseError::EmptyCompound { span, .. }
            | ParseError::MissingFieldName { span, .. }
            | ParseError::UnrecognizedInput { span, .. } => *span,
        }
    }

    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::MissingArguments { .. } => codes::MISSING_ARGUMENTS,
            ParseError::InvalidValue { .. } => codes::INVALID_VALUE,
            ParseError::InvalidNumber { .. } => codes::INVALID_NUMBER,
            ParseError::EmptyCompound { .. } => codes::EMPTY_COMPOUND,
            ParseError::MissingFieldName { .. } => codes::MISSING_FIELD_NAME,
            ParseError::UnrecognizedInput { .. } => codes::UNRECOGNIZED_INPUT,
        }
    }

    /// Convert into an error-severity [`Diagnostic`] with structured context.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut ctx: BTreeMap<String, String> = BTreeMap::new();
        match self {
            ParseError::MissingArguments {
                keyword,
                expected,
                found,
                ..
            } => {
                ctx.insert("keyword".into(), keyword.clone());
                ctx.insert("expected".into(), expected.to_string());
                ctx.insert("found".into(), found.to_string());
            }
            ParseError::InvalidValue {
                attribute, value, ..
            } => {
                ctx.insert("attribute".into(), (*attribute).into());
                if let Some(v) = value {
                    ctx.insert("value".into(), v.clone());
                }
            }
            ParseError::InvalidNumber {
                attribute, value, ..
            } => {
                ctx.insert("attribute".into(), (*attribute).into());
                ctx.insert("value".into(), value.clone());
            }
            ParseError::EmptyCompound { attribute, .. }
            | ParseError::MissingFieldName { attribute, .. } => {
                ctx.insert("attribute".into(), (*attribute).into());
            }
            ParseError::UnrecognizedInput { remaining, .. } => {
                ctx.insert("remaining".into(), remaining.clone());
            }
        }
        Diagnostic::error(self.code(), self.to_string(), Some(self.span())).with_context(ctx)
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        err.to_diagnostic()
    }
}

//! Chart command interpreter.
//!
//! Turns an already-tokenized plotting command such as
//! `X_FIELD price TYPE QUANTITATIVE MARK BAR COLOR RED` into a [`Chart`]. The
//! main entry points are [`parse_tokens`] and [`parse_tokens_with_defaults`].
//!
//! Each vocabulary (chart, field, binning, mark) is a keyword table driven by
//! one shared engine; nested vocabularies run as sub-grammars that hand
//! control back to their parent at the first keyword they do not own.

#![warn(missing_docs)]

/// Defaults applied before a command is interpreted.
pub mod config;
/// The generic parse engine: cursors, tables, keyword sets, dispatch.
pub mod grammar;
/// The chart, field, binning and mark grammars.
pub mod grammars;
/// The chart model.
pub mod model;
/// Top-level entry points.
pub mod parser;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Parser
pub use parser::{ParseResult, parse_tokens, parse_tokens_with_defaults};

// Errors
pub use grammar::error::{ErrorKind, ParseError};

// Config
pub use config::{ChartDefaults, ConfigError, load_defaults_from_str};

// Model
pub use model::{Chart, Mark, MarkKind};

// Diagnostics (re-exported from the diagnostics crate)
pub use grammar::diag::{Diagnostic, Severity, Span, codes};

// Serialization helpers
pub use model::dump::to_pretty_json;

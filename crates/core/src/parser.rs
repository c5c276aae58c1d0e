use tracing::debug;

use crate::config::ChartDefaults;
use crate::grammar::{
    cursor::{Cursor, TokenStream},
    diag::Diagnostic,
    engine::{ParseContext, parse_loop},
    error::ParseError,
};
use crate::grammars::chart::ChartGrammar;
use crate::model::Chart;

/// Result of interpreting one chart command.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParseResult {
    /// The populated chart.
    pub chart: Chart,
    /// Non-fatal diagnostics (dispatch gaps, ignored toggles, unsupported attributes).
    pub diagnostics: Vec<Diagnostic>,
    /// Number of tokens consumed; always the full input on success.
    pub consumed: usize,
}

// ─── Public API ─────────────────────────────────────────────────────────────

/// Interpret a tokenized chart command with the default chart settings.
///
/// # Example
/// ```
/// let tokens = "X_FIELD price TYPE QUANTITATIVE MARK BAR COLOR RED"
///     .split_whitespace()
///     .collect::<Vec<_>>();
/// let result = xvplot_core::parse_tokens(&tokens).unwrap();
/// assert_eq!(result.chart.encoding.x.unwrap().field, "price");
/// assert!(result.diagnostics.is_empty());
/// ```
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<ParseResult, ParseError> {
    parse_tokens_with_defaults(tokens, &ChartDefaults::default())
}

/// Interpret a tokenized chart command, installing `defaults` first.
///
/// The whole input must be consumed: if the chart grammar stops early, the
/// remaining tokens are reported as a single [`ParseError::UnrecognizedInput`].
pub fn parse_tokens_with_defaults<S: AsRef<str>>(
    tokens: &[S],
    defaults: &ChartDefaults,
) -> Result<ParseResult, ParseError> {
    let mut ctx = ParseContext::new(TokenStream::new(tokens));
    let end = ctx.end();
    let mut chart = Chart::default();

    let next = parse_loop(
        &mut ChartGrammar::new(&mut chart, defaults),
        &mut ctx,
        Cursor::START,
        end,
    )?;

    if next < end {
        let remaining = ctx.tokens().slice(next, end).join(" ");
        return Err(ParseError::UnrecognizedInput {
            remaining,
            span: next.span_to(end),
        });
    }

    let diagnostics = ctx.into_diagnostics();
    debug!(
        tokens = end.index(),
        diagnostics = diagnostics.len(),
        "chart command parsed"
    );
    Ok(ParseResult {
        chart,
        diagnostics,
        consumed: next.index(),
    })
}

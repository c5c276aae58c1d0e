//! The chart command vocabulary, as four grammars over the shared engine.
//!
//! ```text
//! chart  := (WIDTH n | HEIGHT n | X_FIELD field | Y_FIELD field
//!            | MARK mark | GRID bool | TITLE text)*
//! field  := name (TYPE kind | AGGREGATE op | TIME_UNIT unit | BIN (bool | bin))*
//! bin    := (ANCHOR n | BASE n | BINNED bool | MAXBINS n | MINSTEP n | NICE bool | STEP n)*
//! mark   := kind (COLOR c | CORNER_RADIUS n | FILLED bool)*
//! ```

/// Binning parameters.
pub mod bin;
/// Top-level chart attributes.
pub mod chart;
/// Field encodings for the x and y channels.
pub mod field;
/// Mark kind and mark attributes.
pub mod mark;

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::grammar::{
    cursor::Cursor,
    diag::{Diagnostic, Span, codes},
    engine::ParseContext,
    error::ParseError,
    keywords::KeywordSet,
};

/// Read the value at `at` as a number for `attribute`.
fn number<T: FromStr>(
    ctx: &ParseContext<'_>,
    attribute: &'static str,
    at: Cursor,
) -> Result<T, ParseError> {
    let token = ctx.value(attribute, at)?;
    token.parse().map_err(|_| ParseError::InvalidNumber {
        attribute,
        value: token.to_string(),
        span: Span::token(at.index()),
    })
}

/// Like [`number`], rejecting NaN and infinities.
fn finite(ctx: &ParseContext<'_>, attribute: &'static str, at: Cursor) -> Result<f64, ParseError> {
    let value: f64 = number(ctx, attribute, at)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::InvalidNumber {
            attribute,
            value: ctx.value(attribute, at)?.to_string(),
            span: Span::token(at.index()),
        })
    }
}

/// Resolve the value at `at` against `T`, failing when it is not one of `T`'s keywords.
fn required<T: KeywordSet>(
    ctx: &ParseContext<'_>,
    attribute: &'static str,
    at: Cursor,
) -> Result<T, ParseError> {
    let token = ctx.token(at);
    token
        .and_then(T::from_keyword)
        .ok_or_else(|| ParseError::InvalidValue {
            attribute,
            value: token.map(str::to_string),
            span: match token {
                Some(_) => Span::token(at.index()),
                None => Span::empty(at.index()),
            },
        })
}

/// Warn that a toggle value was neither TRUE nor FALSE.
fn ignored_toggle(ctx: &mut ParseContext<'_>, attribute: &'static str, at: Cursor) {
    let value = ctx.token(at).unwrap_or_default().to_string();
    ctx.report(
        Diagnostic::warn(
            codes::IGNORED_TOGGLE,
            format!("{attribute} expects TRUE or FALSE, ignoring '{value}'"),
            Some(Span::token(at.index())),
        )
        .with_context(BTreeMap::from([
            ("attribute".to_string(), attribute.to_string()),
            ("value".to_string(), value),
        ])),
    );
}

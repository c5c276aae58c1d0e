//! The table-driven parse engine shared by every grammar.
//!
//! A grammar is a [`CommandTable`] plus a target it writes into. The engine
//! walks the tokens left to right: at each position it looks the token up in
//! the table, checks that enough tokens follow it, and hands control to the
//! keyword's handler. A token the table does not know stops the loop without
//! an error, so a nested grammar gives control back to its parent simply by
//! running into a keyword it does not own.
//!
//! Nesting is done by handlers: a [`Handler::Range`] handler may build another
//! grammar over a sub-target and call [`parse_loop`] on it, returning the
//! cursor the nested loop stopped at.

use tracing::{trace, warn};

use super::{
    cursor::{Cursor, TokenStream},
    diag::{Diagnostic, Span},
    error::ParseError,
    table::{CommandTable, Handler},
};

/// State shared by every grammar during one parse: the tokens and the
/// non-fatal diagnostics collected so far.
#[derive(Debug)]
pub struct ParseContext<'t> {
    tokens: TokenStream<'t>,
    diagnostics: Vec<Diagnostic>,
}

impl<'t> ParseContext<'t> {
    /// Start a parse over `tokens`.
    pub fn new(tokens: TokenStream<'t>) -> Self {
        Self {
            tokens,
            diagnostics: Vec::new(),
        }
    }

    /// The token stream.
    pub fn tokens(&self) -> &TokenStream<'t> {
        &self.tokens
    }

    /// Cursor one past the last token.
    pub fn end(&self) -> Cursor {
        self.tokens.end()
    }

    /// Token at `at`, if any.
    pub fn token(&self, at: Cursor) -> Option<&'t str> {
        self.tokens.get(at)
    }

    /// Value token a handler for `keyword` expects at `at`.
    ///
    /// The arity check normally guarantees the token exists; this turns the
    /// remaining cases (e.g. a handler called directly) into a structural error.
    pub fn value(&self, keyword: &str, at: Cursor) -> Result<&'t str, ParseError> {
        self.tokens
            .get(at)
            .ok_or_else(|| ParseError::MissingArguments {
                keyword: keyword.to_string(),
                expected: 1,
                found: 0,
                span: Span::empty(at.index()),
            })
    }

    /// Record a non-fatal diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the context, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// A parseable vocabulary bound to its target.
///
/// Implementors supply the keyword table and, optionally, an `init` step that
/// consumes leading tokens which are not keywords (a field name, a mark kind).
pub trait Grammar: Sized {
    /// Short name used in trace output.
    const NAME: &'static str;

    /// Build the keyword table for this grammar.
    fn build_table() -> CommandTable<Self>;

    /// Consume any mandatory leading tokens before table dispatch starts.
    ///
    /// The default consumes nothing.
    fn init(
        &mut self,
        _ctx: &mut ParseContext<'_>,
        begin: Cursor,
        _end: Cursor,
    ) -> Result<Cursor, ParseError> {
        Ok(begin)
    }
}

/// Parse a single keyword (and its arguments) at `cursor`.
///
/// Returns `cursor` unchanged when the token is not in `table`; that is the
/// grammar's signal that it has nothing more to say, not an error. A range
/// handler that returns a cursor before the one it was given is treated the
/// same way.
pub fn step<G: Grammar>(
    table: &CommandTable<G>,
    target: &mut G,
    ctx: &mut ParseContext<'_>,
    cursor: Cursor,
    end: Cursor,
) -> Result<Cursor, ParseError> {
    let Some(token) = ctx.token(cursor).filter(|_| cursor < end) else {
        return Ok(cursor);
    };
    let Some(cmd) = table.lookup(token) else {
        trace!(grammar = G::NAME, token, at = cursor.index(), "no match");
        return Ok(cursor);
    };

    let after = cursor.next();
    let available = after.distance_to(end);
    if available < cmd.min_args {
        return Err(ParseError::MissingArguments {
            keyword: token.to_string(),
            expected: cmd.min_args,
            found: available,
            span: cursor.span_to(end),
        });
    }

    trace!(grammar = G::NAME, keyword = cmd.keyword, at = cursor.index(), "dispatch");
    match cmd.handler {
        Handler::Point(handler) => {
            handler(target, ctx, after)?;
            Ok(after.next())
        }
        Handler::Range(handler) => {
            let next = handler(target, ctx, after, end)?;
            if next < after {
                warn!(
                    grammar = G::NAME,
                    keyword = cmd.keyword,
                    at = cursor.index(),
                    returned = next.index(),
                    "handler moved the cursor backwards"
                );
                return Ok(cursor);
            }
            Ok(next)
        }
    }
}

/// Run `grammar` over `[begin, end)` until the input ends or a token is not
/// recognized.
///
/// A handler that hands back a cursor before its keyword stops the loop at
/// that keyword, the same as an unrecognized token. Returns the cursor where
/// parsing stopped; unrecognized trailing tokens are left for the caller to
/// judge.
pub fn parse_loop<G: Grammar>(
    grammar: &mut G,
    ctx: &mut ParseContext<'_>,
    begin: Cursor,
    end: Cursor,
) -> Result<Cursor, ParseError> {
    let table = G::build_table();
    let mut cursor = grammar.init(ctx, begin, end)?;

    while cursor < end {
        let next = step(&table, grammar, ctx, cursor, end)?;
        if next <= cursor {
            break;
        }
        cursor = next;
    }

    trace!(
        grammar = G::NAME,
        from = begin.index(),
        to = cursor.index(),
        "loop done"
    );
    Ok(cursor)
}

use std::collections::HashMap;

use super::{cursor::Cursor, engine::ParseContext, error::ParseError};

/// Handler that reads exactly one value token.
///
/// Receives the cursor of that value; the engine advances past it afterwards.
pub type PointFn<G> = fn(&mut G, &mut ParseContext<'_>, Cursor) -> Result<(), ParseError>;

/// Handler that consumes a variable number of tokens.
///
/// Receives `(cursor after the keyword, end)` and returns the cursor where
/// parsing resumes. The returned cursor must not be before the one passed in.
pub type RangeFn<G> = fn(&mut G, &mut ParseContext<'_>, Cursor, Cursor) -> Result<Cursor, ParseError>;

/// The two handler shapes a keyword can dispatch to.
pub enum Handler<G> {
    /// Keyword followed by a single value.
    Point(PointFn<G>),
    /// Keyword followed by a run of tokens the handler measures itself.
    Range(RangeFn<G>),
}

impl<G> Clone for Handler<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Handler<G> {}

impl<G> std::fmt::Debug for Handler<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Point(_) => f.write_str("Point"),
            Handler::Range(_) => f.write_str("Range"),
        }
    }
}

/// One row of a [`CommandTable`].
pub struct CommandDescriptor<G> {
    /// Upper-case keyword.
    pub keyword: &'static str,
    /// Minimum number of tokens that must follow the keyword.
    pub min_args: usize,
    /// What to call when the keyword matches.
    pub handler: Handler<G>,
}

impl<G> CommandDescriptor<G> {
    /// Keyword taking a single value token.
    pub fn point(keyword: &'static str, handler: PointFn<G>) -> Self {
        Self {
            keyword,
            min_args: 1,
            handler: Handler::Point(handler),
        }
    }

    /// Keyword whose handler consumes a variable run of tokens, requiring at
    /// least `min_args` of them.
    pub fn range(keyword: &'static str, min_args: usize, handler: RangeFn<G>) -> Self {
        Self {
            keyword,
            min_args,
            handler: Handler::Range(handler),
        }
    }
}

impl<G> std::fmt::Debug for CommandDescriptor<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("keyword", &self.keyword)
            .field("min_args", &self.min_args)
            .field("handler", &self.handler)
            .finish()
    }
}

/// Keyword → descriptor lookup for one grammar.
///
/// Keys are matched case-insensitively. The table is immutable once built.
pub struct CommandTable<G> {
    entries: HashMap<String, CommandDescriptor<G>>,
}

impl<G> CommandTable<G> {
    /// Build a table from its rows.
    ///
    /// Panics if two rows share a keyword (ignoring case); that is a bug in
    /// the grammar definition, not in the input.
    pub fn new(rows: impl IntoIterator<Item = CommandDescriptor<G>>) -> Self {
        let mut entries = HashMap::new();
        for row in rows {
            let key = row.keyword.to_ascii_uppercase();
            assert!(
                !entries.contains_key(&key),
                "duplicate keyword {key} in command table"
            );
            entries.insert(key, row);
        }
        Self { entries }
    }

    /// Look up a token, ignoring ASCII case.
    pub fn lookup(&self, token: &str) -> Option<&CommandDescriptor<G>> {
        self.entries.get(&token.to_ascii_uppercase())
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the table recognizes nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keywords, sorted.
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut kws: Vec<_> = self.entries.values().map(|d| d.keyword).collect();
        kws.sort_unstable();
        kws
    }
}

impl<G> std::fmt::Debug for CommandTable<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandTable")
            .field("keywords", &self.keywords())
            .finish()
    }
}

use super::diag::Span;

/// A forward-only position in the token sequence.
///
/// Cursors are plain indices. Two cursors over the same input compare equal
/// exactly when the same tokens remain after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor(usize);

impl Cursor {
    /// Cursor at the first token.
    pub const START: Cursor = Cursor(0);

    /// Cursor at an arbitrary token index.
    pub fn at(index: usize) -> Self {
        Cursor(index)
    }

    /// Token index this cursor points at.
    pub fn index(self) -> usize {
        self.0
    }

    /// The cursor one token further on.
    pub fn next(self) -> Self {
        Cursor(self.0 + 1)
    }

    /// Number of tokens in `[self, end)`; zero when `end` is not ahead.
    pub fn distance_to(self, end: Cursor) -> usize {
        end.0.saturating_sub(self.0)
    }

    /// Token span `[self, end)`.
    pub fn span_to(self, end: Cursor) -> Span {
        Span::new(self.0, end.0.max(self.0))
    }
}

/// The ordered token sequence a parse runs over.
///
/// Tokens are borrowed from the caller; the stream never copies their text.
#[derive(Debug, Clone)]
pub struct TokenStream<'t> {
    tokens: Vec<&'t str>,
}

impl<'t> TokenStream<'t> {
    /// Borrow a slice of tokens.
    pub fn new<S: AsRef<str>>(tokens: &'t [S]) -> Self {
        Self {
            tokens: tokens.iter().map(AsRef::as_ref).collect(),
        }
    }

    /// Cursor one past the last token.
    pub fn end(&self) -> Cursor {
        Cursor(self.tokens.len())
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `cursor`, if any.
    pub fn get(&self, cursor: Cursor) -> Option<&'t str> {
        self.tokens.get(cursor.0).copied()
    }

    /// Tokens in `[from, to)`, clamped to the stream.
    pub fn slice(&self, from: Cursor, to: Cursor) -> &[&'t str] {
        let end = to.0.min(self.tokens.len());
        let start = from.0.min(end);
        &self.tokens[start..end]
    }
}

//! Applying one operation to whichever variant shape a value holds.
//!
//! A [`Dispatch`] type is a closed enum whose variants carry unrelated
//! payload structs. Each call site builds a visitor with a method per shape it
//! supports; shapes the visitor does not handle answer [`Visit::Unhandled`].
//! [`dispatch`] turns that answer into a warning and lets the parse go on.

use std::collections::BTreeMap;

use tracing::warn;

use super::{
    diag::{Diagnostic, Span, codes},
    engine::ParseContext,
};

/// Outcome of offering a value to a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// A handler for the held shape ran.
    Applied,
    /// No handler is registered for the held shape.
    Unhandled,
}

/// A value that is exactly one of a closed set of shapes.
pub trait Dispatch {
    /// The visitor interface for this set of shapes.
    type Visitor: ?Sized;

    /// Name of the shape currently held, for diagnostics.
    fn shape_name(&self) -> &'static str;

    /// Offer the held shape to `visitor`.
    fn accept(&mut self, visitor: &mut Self::Visitor) -> Visit;
}

/// Offer `value` to `visitor` on behalf of `attribute`.
///
/// A shape with no handler records a [`codes::DISPATCH_GAP`] warning in
/// `ctx` and leaves `value` untouched. Returns whether a handler ran.
pub fn dispatch<T: Dispatch + ?Sized>(
    value: &mut T,
    visitor: &mut T::Visitor,
    ctx: &mut ParseContext<'_>,
    attribute: &str,
    span: Span,
) -> bool {
    match value.accept(visitor) {
        Visit::Applied => true,
        Visit::Unhandled => {
            let shape = value.shape_name();
            warn!(attribute, shape, "no handler registered for shape");
            ctx.report(
                Diagnostic::warn(
                    codes::DISPATCH_GAP,
                    format!("{attribute} has no effect on {shape} marks"),
                    Some(span),
                )
                .with_context(BTreeMap::from([
                    ("attribute".to_string(), attribute.to_string()),
                    ("shape".to_string(), shape.to_string()),
                ])),
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::cursor::TokenStream;
    use crate::model::mark::{BarMark, MarkVisitor};
    use crate::model::{Mark, MarkKind};

    struct Widen;

    impl MarkVisitor for Widen {
        fn visit_bar(&mut self, mark: &mut BarMark) -> Visit {
            mark.corner_radius = Some(1.0);
            Visit::Applied
        }
    }

    #[test]
    fn handled_shape_reports_nothing() {
        let toks: [&str; 0] = [];
        let mut ctx = ParseContext::new(TokenStream::new(&toks));
        let mut mark = MarkKind::Bar.new_mark();
        assert!(dispatch::<Mark>(&mut mark, &mut Widen, &mut ctx, "WIDEN", Span::empty(0)));
        assert!(ctx.diagnostics().is_empty());
        assert!(matches!(mark, Mark::Bar(BarMark { corner_radius: Some(_), .. })));
    }

    #[test]
    fn gap_is_a_warning_and_leaves_value() {
        let toks: [&str; 0] = [];
        let mut ctx = ParseContext::new(TokenStream::new(&toks));
        let mut mark = MarkKind::Area.new_mark();
        assert!(!dispatch::<Mark>(&mut mark, &mut Widen, &mut ctx, "WIDEN", Span::new(3, 5)));
        assert_eq!(mark, MarkKind::Area.new_mark());

        let diag = &ctx.diagnostics()[0];
        assert_eq!(diag.id, codes::DISPATCH_GAP);
        assert!(!diag.is_error());
        assert_eq!(diag.span, Some(Span::new(3, 5)));
        assert_eq!(diag.message, "WIDEN has no effect on area marks");
    }
}

use tracing::trace;

use crate::grammar::{
    cursor::Cursor,
    diag::Span,
    engine::{Grammar, ParseContext},
    error::ParseError,
    keywords::KeywordSet,
    table::{CommandDescriptor, CommandTable},
    visit::{Dispatch, Visit, dispatch},
};
use crate::model::mark::{
    ArcMark, AreaMark, BarMark, CircleMark, LineMark, PointMark, RectMark, RuleMark, SquareMark,
    TickMark, TrailMark,
};
use crate::model::{Mark, MarkKind, MarkVisitor};

use super::{finite, ignored_toggle, required};

/// Grammar for the chart's mark: a kind followed by mark attributes.
#[derive(Debug)]
pub struct MarkGrammar<'m> {
    mark: &'m mut Option<Mark>,
}

impl<'m> MarkGrammar<'m> {
    /// Bind the grammar to the chart's mark slot. `init` replaces whatever
    /// the slot held.
    pub fn new(mark: &'m mut Option<Mark>) -> Self {
        Self { mark }
    }

    /// Offer the held mark to `visitor` for `attribute` at `at`.
    fn apply<V: MarkVisitor + 'static>(
        &mut self,
        ctx: &mut ParseContext<'_>,
        mut visitor: V,
        attribute: &str,
        at: Cursor,
    ) {
        if let Some(mark) = self.mark.as_mut() {
            let keyword = at.index().saturating_sub(1);
            let span = Span::new(keyword, at.index() + 1);
            if dispatch::<Mark>(mark, &mut visitor, ctx, attribute, span) {
                trace!(attribute, shape = mark.shape_name(), "mark attribute applied");
            }
        }
    }

    fn parse_color(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        let color = ctx.value("COLOR", at)?.to_lowercase();
        self.apply(ctx, SetColor(color), "COLOR", at);
        Ok(())
    }

    fn parse_corner_radius(
        &mut self,
        ctx: &mut ParseContext<'_>,
        at: Cursor,
    ) -> Result<(), ParseError> {
        let radius = finite(ctx, "CORNER_RADIUS", at)?;
        self.apply(ctx, SetCornerRadius(radius), "CORNER_RADIUS", at);
        Ok(())
    }

    fn parse_filled(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        let token = ctx.value("FILLED", at)?;
        match bool::from_keyword(token) {
            Some(filled) => self.apply(ctx, SetFilled(filled), "FILLED", at),
            None => ignored_toggle(ctx, "FILLED", at),
        }
        Ok(())
    }
}

impl Grammar for MarkGrammar<'_> {
    const NAME: &'static str = "mark";

    fn build_table() -> CommandTable<Self> {
        CommandTable::new([
            CommandDescriptor::point("COLOR", Self::parse_color),
            CommandDescriptor::point("CORNER_RADIUS", Self::parse_corner_radius),
            CommandDescriptor::point("FILLED", Self::parse_filled),
        ])
    }

    fn init(
        &mut self,
        ctx: &mut ParseContext<'_>,
        begin: Cursor,
        end: Cursor,
    ) -> Result<Cursor, ParseError> {
        if begin >= end {
            return Err(ParseError::InvalidValue {
                attribute: "MARK",
                value: None,
                span: Span::empty(begin.index()),
            });
        }
        let kind = required::<MarkKind>(ctx, "MARK", begin)?;
        *self.mark = Some(kind.new_mark());
        Ok(begin.next())
    }
}

/// Every mark kind has a color.
struct SetColor(String);

impl MarkVisitor for SetColor {
    fn visit_arc(&mut self, mark: &mut ArcMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_area(&mut self, mark: &mut AreaMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_bar(&mut self, mark: &mut BarMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_circle(&mut self, mark: &mut CircleMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_line(&mut self, mark: &mut LineMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_point(&mut self, mark: &mut PointMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_rect(&mut self, mark: &mut RectMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_rule(&mut self, mark: &mut RuleMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_square(&mut self, mark: &mut SquareMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_tick(&mut self, mark: &mut TickMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
    fn visit_trail(&mut self, mark: &mut TrailMark) -> Visit {
        mark.color = Some(self.0.clone());
        Visit::Applied
    }
}

struct SetCornerRadius(f64);

impl MarkVisitor for SetCornerRadius {
    fn visit_arc(&mut self, mark: &mut ArcMark) -> Visit {
        mark.corner_radius = Some(self.0);
        Visit::Applied
    }
    fn visit_bar(&mut self, mark: &mut BarMark) -> Visit {
        mark.corner_radius = Some(self.0);
        Visit::Applied
    }
    fn visit_rect(&mut self, mark: &mut RectMark) -> Visit {
        mark.corner_radius = Some(self.0);
        Visit::Applied
    }
}

struct SetFilled(bool);

impl MarkVisitor for SetFilled {
    fn visit_circle(&mut self, mark: &mut CircleMark) -> Visit {
        mark.filled = Some(self.0);
        Visit::Applied
    }
    fn visit_point(&mut self, mark: &mut PointMark) -> Visit {
        mark.filled = Some(self.0);
        Visit::Applied
    }
    fn visit_square(&mut self, mark: &mut SquareMark) -> Visit {
        mark.filled = Some(self.0);
        Visit::Applied
    }
}

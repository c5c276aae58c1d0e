use std::collections::BTreeMap;

use crate::config::ChartDefaults;
use crate::grammar::{
    cursor::Cursor,
    diag::{Diagnostic, Span, codes},
    engine::{Grammar, ParseContext, parse_loop},
    error::ParseError,
    table::{CommandDescriptor, CommandTable},
};
use crate::model::{Axis, Chart, FieldEncoding};

use super::{field::FieldGrammar, mark::MarkGrammar, number, required};

/// The top-level grammar. Every other grammar is entered from here.
#[derive(Debug)]
pub struct ChartGrammar<'c> {
    chart: &'c mut Chart,
    defaults: &'c ChartDefaults,
}

impl<'c> ChartGrammar<'c> {
    /// Bind the grammar to `chart`; `init` installs `defaults` on it.
    pub fn new(chart: &'c mut Chart, defaults: &'c ChartDefaults) -> Self {
        Self { chart, defaults }
    }

    fn parse_width(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.chart.width = Some(pixels(ctx, "WIDTH", at)?);
        Ok(())
    }

    fn parse_height(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.chart.height = Some(pixels(ctx, "HEIGHT", at)?);
        Ok(())
    }

    fn parse_grid(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.chart.axis_config_mut().grid = Some(required::<bool>(ctx, "GRID", at)?);
        Ok(())
    }

    /// Accepted so that commands carrying a title still parse; the chart
    /// model has nowhere to put it.
    fn parse_title(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        let title = ctx.value("TITLE", at)?;
        ctx.report(
            Diagnostic::warn(
                codes::UNSUPPORTED_ATTRIBUTE,
                "TITLE is accepted but not applied to the chart",
                Some(Span::new(at.index().saturating_sub(1), at.index() + 1)),
            )
            .with_context(BTreeMap::from([
                ("attribute".to_string(), "TITLE".to_string()),
                ("value".to_string(), title.to_string()),
            ])),
        );
        Ok(())
    }

    fn parse_x_field(
        &mut self,
        ctx: &mut ParseContext<'_>,
        begin: Cursor,
        end: Cursor,
    ) -> Result<Cursor, ParseError> {
        self.parse_field(Axis::X, ctx, begin, end)
    }

    fn parse_y_field(
        &mut self,
        ctx: &mut ParseContext<'_>,
        begin: Cursor,
        end: Cursor,
    ) -> Result<Cursor, ParseError> {
        self.parse_field(Axis::Y, ctx, begin, end)
    }

    /// Replace the encoding of `axis` with one read by the field grammar.
    fn parse_field(
        &mut self,
        axis: Axis,
        ctx: &mut ParseContext<'_>,
        begin: Cursor,
        end: Cursor,
    ) -> Result<Cursor, ParseError> {
        let field = self
            .chart
            .encoding
            .channel_mut(axis)
            .insert(FieldEncoding::default());
        let mut grammar = FieldGrammar::new(field, axis, self.defaults.field_kind);
        parse_loop(&mut grammar, ctx, begin, end)
    }

    fn parse_mark(
        &mut self,
        ctx: &mut ParseContext<'_>,
        begin: Cursor,
        end: Cursor,
    ) -> Result<Cursor, ParseError> {
        parse_loop(&mut MarkGrammar::new(&mut self.chart.mark), ctx, begin, end)
    }
}

/// A chart dimension: a whole number of pixels, at least one.
fn pixels(ctx: &ParseContext<'_>, attribute: &'static str, at: Cursor) -> Result<u32, ParseError> {
    match number(ctx, attribute, at)? {
        0 => Err(ParseError::InvalidNumber {
            attribute,
            value: ctx.value(attribute, at)?.to_string(),
            span: Span::token(at.index()),
        }),
        n => Ok(n),
    }
}

impl Grammar for ChartGrammar<'_> {
    const NAME: &'static str = "chart";

    fn build_table() -> CommandTable<Self> {
        CommandTable::new([
            CommandDescriptor::point("WIDTH", Self::parse_width),
            CommandDescriptor::point("HEIGHT", Self::parse_height),
            CommandDescriptor::range("X_FIELD", 1, Self::parse_x_field),
            CommandDescriptor::range("Y_FIELD", 1, Self::parse_y_field),
            CommandDescriptor::range("MARK", 1, Self::parse_mark),
            CommandDescriptor::point("GRID", Self::parse_grid),
            CommandDescriptor::point("TITLE", Self::parse_title),
        ])
    }

    fn init(
        &mut self,
        _ctx: &mut ParseContext<'_>,
        begin: Cursor,
        _end: Cursor,
    ) -> Result<Cursor, ParseError> {
        self.chart.axis_config_mut().grid = Some(self.defaults.grid);
        if self.defaults.width.is_some() {
            self.chart.width = self.defaults.width;
        }
        if self.defaults.height.is_some() {
            self.chart.height = self.defaults.height;
        }
        Ok(begin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{cursor::TokenStream, error::ErrorKind};
    use crate::model::{FieldKind, Mark, MarkKind};

    fn run_with(tokens: &[&str], defaults: &ChartDefaults) -> (Chart, Result<Cursor, ParseError>) {
        let mut ctx = ParseContext::new(TokenStream::new(tokens));
        let end = ctx.end();
        let mut chart = Chart::default();
        let res = parse_loop(
            &mut ChartGrammar::new(&mut chart, defaults),
            &mut ctx,
            Cursor::START,
            end,
        );
        (chart, res)
    }

    fn run(tokens: &[&str]) -> (Chart, Result<Cursor, ParseError>) {
        run_with(tokens, &ChartDefaults::default())
    }

    #[test]
    fn init_enables_grid() {
        let (chart, res) = run(&[]);
        assert_eq!(res.unwrap(), Cursor::START);
        assert_eq!(chart.grid(), Some(true));
    }

    #[test]
    fn dimensions() {
        let (chart, res) = run(&["WIDTH", "400", "height", "300"]);
        assert_eq!(res.unwrap(), Cursor::at(4));
        assert_eq!(chart.width, Some(400));
        assert_eq!(chart.height, Some(300));
    }

    #[test]
    fn fractional_width_fails() {
        let (_, res) = run(&["WIDTH", "400.5"]);
        let err = res.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert!(err.to_string().contains("WIDTH"));
    }

    #[test]
    fn zero_dimensions_fail() {
        for keyword in ["WIDTH", "HEIGHT"] {
            let (chart, res) = run(&[keyword, "0"]);
            let err = res.unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidNumber { attribute, .. } if attribute == keyword),
                "{keyword}: {err:?}"
            );
            assert_eq!(err.span(), Span::token(1));
            assert_eq!(chart.width, None);
            assert_eq!(chart.height, None);
        }
    }

    #[test]
    fn grid_mismatch_is_fatal() {
        let (chart, res) = run(&["GRID", "YES"]);
        assert!(matches!(
            res,
            Err(ParseError::InvalidValue {
                attribute: "GRID",
                ..
            })
        ));
        assert_eq!(chart.grid(), Some(true));
    }

    #[test]
    fn field_resumes_chart_loop() {
        let (chart, res) = run(&["X_FIELD", "price", "TYPE", "NOMINAL", "WIDTH", "10"]);
        assert_eq!(res.unwrap(), Cursor::at(6));
        let x = chart.encoding.x.unwrap();
        assert_eq!(x.field, "price");
        assert_eq!(x.kind, Some(FieldKind::Nominal));
        assert_eq!(chart.width, Some(10));
    }

    #[test]
    fn repeated_axis_starts_fresh() {
        let (chart, _) = run(&[
            "Y_FIELD", "a", "AGGREGATE", "SUM", "Y_FIELD", "b",
        ]);
        let y = chart.encoding.y.unwrap();
        assert_eq!(y.field, "b");
        assert_eq!(y.aggregate, None);
    }

    #[test]
    fn mark_resumes_chart_loop() {
        let (chart, res) = run(&["MARK", "tick", "GRID", "FALSE"]);
        assert_eq!(res.unwrap(), Cursor::at(4));
        assert_eq!(chart.mark.as_ref().map(Mark::kind), Some(MarkKind::Tick));
        assert_eq!(chart.grid(), Some(false));
    }

    #[test]
    fn title_is_consumed() {
        let mut ctx = ParseContext::new(TokenStream::new(&["TITLE", "Sales", "WIDTH", "5"]));
        let end = ctx.end();
        let mut chart = Chart::default();
        let defaults = ChartDefaults::default();
        let res = parse_loop(
            &mut ChartGrammar::new(&mut chart, &defaults),
            &mut ctx,
            Cursor::START,
            end,
        );
        assert_eq!(res.unwrap(), Cursor::at(4));
        assert_eq!(chart.width, Some(5));
        let diags = ctx.into_diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, codes::UNSUPPORTED_ATTRIBUTE);
    }

    #[test]
    fn defaults_are_installed() {
        let defaults = ChartDefaults {
            grid: false,
            width: Some(800),
            height: None,
            field_kind: FieldKind::Ordinal,
        };
        let (chart, _) = run_with(&["X_FIELD", "a", "HEIGHT", "90"], &defaults);
        assert_eq!(chart.grid(), Some(false));
        assert_eq!(chart.width, Some(800));
        assert_eq!(chart.height, Some(90));
        assert_eq!(chart.encoding.x.unwrap().kind, Some(FieldKind::Ordinal));
    }
}

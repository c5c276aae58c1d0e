use tracing::debug;

use crate::grammar::{
    cursor::Cursor,
    diag::Span,
    engine::{Grammar, ParseContext, parse_loop},
    error::ParseError,
    keywords::switch,
    table::{CommandDescriptor, CommandTable},
};
use crate::model::{Aggregate, Axis, Bin, BinParams, FieldEncoding, FieldKind, TimeUnit};

use super::{bin::BinGrammar, required};

/// Grammar for one channel's field encoding.
///
/// The first token is the field name, taken verbatim; the attributes that
/// follow refine how the field is encoded.
#[derive(Debug)]
pub struct FieldGrammar<'e> {
    field: &'e mut FieldEncoding,
    axis: Axis,
    default_kind: FieldKind,
}

impl<'e> FieldGrammar<'e> {
    /// Bind the grammar to the encoding of `axis`.
    ///
    /// `default_kind` is installed by `init` and holds until a TYPE attribute
    /// replaces it.
    pub fn new(field: &'e mut FieldEncoding, axis: Axis, default_kind: FieldKind) -> Self {
        Self {
            field,
            axis,
            default_kind,
        }
    }

    fn parse_type(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.field.kind = Some(required::<FieldKind>(ctx, "TYPE", at)?);
        Ok(())
    }

    fn parse_aggregate(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.field.aggregate = Some(required::<Aggregate>(ctx, "AGGREGATE", at)?);
        Ok(())
    }

    fn parse_time_unit(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.field.time_unit = Some(required::<TimeUnit>(ctx, "TIME_UNIT", at)?);
        Ok(())
    }

    /// `BIN TRUE|FALSE` or `BIN <bin attributes>`.
    fn parse_bin(
        &mut self,
        ctx: &mut ParseContext<'_>,
        begin: Cursor,
        end: Cursor,
    ) -> Result<Cursor, ParseError> {
        if let Some(token) = ctx.token(begin).filter(|_| begin < end) {
            if switch::<bool>(token, |on| self.field.bin = Some(Bin::Enabled(on))) {
                return Ok(begin.next());
            }
        }

        let mut params = BinParams::default();
        let mut grammar = BinGrammar::new(&mut params);
        let next = parse_loop(&mut grammar, ctx, begin, end)?;
        if grammar.applied() == 0 {
            let keyword = begin.index().saturating_sub(1);
            return Err(ParseError::EmptyCompound {
                attribute: "BIN",
                what: "binning",
                span: Span::new(keyword, next.index().max(begin.index())),
            });
        }

        debug!(axis = self.axis.keyword(), ?params, "binning parameters");
        self.field.bin = Some(Bin::Params(params));
        Ok(next)
    }
}

impl Grammar for FieldGrammar<'_> {
    const NAME: &'static str = "field";

    fn build_table() -> CommandTable<Self> {
        CommandTable::new([
            CommandDescriptor::point("TYPE", Self::parse_type),
            CommandDescriptor::point("AGGREGATE", Self::parse_aggregate),
            CommandDescriptor::point("TIME_UNIT", Self::parse_time_unit),
            // Zero so that a bare trailing BIN reaches the handler and is
            // reported as an empty binning specification.
            CommandDescriptor::range("BIN", 0, Self::parse_bin),
        ])
    }

    fn init(
        &mut self,
        ctx: &mut ParseContext<'_>,
        begin: Cursor,
        end: Cursor,
    ) -> Result<Cursor, ParseError> {
        let Some(name) = ctx.token(begin).filter(|_| begin < end) else {
            return Err(ParseError::MissingFieldName {
                attribute: self.axis.keyword(),
                span: Span::empty(begin.index()),
            });
        };
        self.field.field = name.to_string();
        self.field.kind = Some(self.default_kind);
        Ok(begin.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{cursor::TokenStream, error::ErrorKind};

    fn run(tokens: &[&str]) -> (FieldEncoding, Result<Cursor, ParseError>) {
        let mut ctx = ParseContext::new(TokenStream::new(tokens));
        let end = ctx.end();
        let mut field = FieldEncoding::default();
        let res = parse_loop(
            &mut FieldGrammar::new(&mut field, Axis::X, FieldKind::Quantitative),
            &mut ctx,
            Cursor::START,
            end,
        );
        (field, res)
    }

    #[test]
    fn name_is_verbatim_and_kind_defaults() {
        let (field, res) = run(&["Price_USD"]);
        assert_eq!(res.unwrap(), Cursor::at(1));
        assert_eq!(field.field, "Price_USD");
        assert_eq!(field.kind, Some(FieldKind::Quantitative));
    }

    #[test]
    fn enumerated_attributes() {
        let (field, res) = run(&[
            "date", "type", "temporal", "TIME_UNIT", "month", "AGGREGATE", "Mean",
        ]);
        assert_eq!(res.unwrap(), Cursor::at(7));
        assert_eq!(field.kind, Some(FieldKind::Temporal));
        assert_eq!(field.time_unit, Some(TimeUnit::Month));
        assert_eq!(field.aggregate, Some(Aggregate::Mean));
    }

    #[test]
    fn unknown_aggregate_is_semantic() {
        let (_, res) = run(&["qty", "AGGREGATE", "SUMM"]);
        let err = res.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert!(err.to_string().contains("AGGREGATE"));
        assert_eq!(err.span(), Span::token(2));
    }

    #[test]
    fn bin_toggle() {
        let (field, res) = run(&["qty", "BIN", "TRUE", "TYPE", "ORDINAL"]);
        assert_eq!(res.unwrap(), Cursor::at(5));
        assert_eq!(field.bin, Some(Bin::Enabled(true)));
        assert_eq!(field.kind, Some(FieldKind::Ordinal));
    }

    #[test]
    fn bin_params_hand_back_to_field() {
        let (field, res) = run(&["qty", "BIN", "MAXBINS", "10", "TYPE", "ORDINAL"]);
        assert_eq!(res.unwrap(), Cursor::at(6));
        let Some(Bin::Params(params)) = field.bin else {
            panic!("expected bin params, got {:?}", field.bin);
        };
        assert_eq!(params.max_bins, Some(10));
        assert_eq!(field.kind, Some(FieldKind::Ordinal));
    }

    #[test]
    fn bare_bin_is_empty_compound() {
        let (field, res) = run(&["price", "BIN"]);
        let err = res.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
        assert!(
            err.to_string()
                .contains("missing or invalid binning specification")
        );
        assert_eq!(field.bin, None);
    }

    #[test]
    fn bin_followed_by_field_keyword_is_empty_compound() {
        let (_, res) = run(&["price", "BIN", "TYPE", "NOMINAL"]);
        assert!(matches!(res, Err(ParseError::EmptyCompound { .. })));
    }

    #[test]
    fn missing_name() {
        let (_, res) = run(&[]);
        assert!(matches!(
            res,
            Err(ParseError::MissingFieldName {
                attribute: "X_FIELD",
                ..
            })
        ));
    }
}

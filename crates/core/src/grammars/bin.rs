use crate::grammar::{
    cursor::Cursor,
    engine::{Grammar, ParseContext},
    error::ParseError,
    keywords::switch,
    table::{CommandDescriptor, CommandTable},
};
use crate::model::BinParams;

use super::{finite, ignored_toggle, number};

/// Grammar for explicit binning parameters.
///
/// Counts the attributes it applies; a caller that sees zero after the loop
/// knows no binning parameter followed.
#[derive(Debug)]
pub struct BinGrammar<'b> {
    bin: &'b mut BinParams,
    applied: usize,
}

impl<'b> BinGrammar<'b> {
    /// Bind the grammar to the parameters it fills in.
    pub fn new(bin: &'b mut BinParams) -> Self {
        Self { bin, applied: 0 }
    }

    /// Number of attributes applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    fn parse_anchor(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.bin.anchor = Some(finite(ctx, "ANCHOR", at)?);
        self.applied += 1;
        Ok(())
    }

    fn parse_base(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.bin.base = Some(finite(ctx, "BASE", at)?);
        self.applied += 1;
        Ok(())
    }

    fn parse_binned(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        let token = ctx.value("BINNED", at)?;
        if switch::<bool>(token, |v| self.bin.binned = Some(v)) {
            self.applied += 1;
        } else {
            ignored_toggle(ctx, "BINNED", at);
        }
        Ok(())
    }

    fn parse_max_bins(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.bin.max_bins = Some(number(ctx, "MAXBINS", at)?);
        self.applied += 1;
        Ok(())
    }

    fn parse_min_step(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.bin.min_step = Some(finite(ctx, "MINSTEP", at)?);
        self.applied += 1;
        Ok(())
    }

    fn parse_nice(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        let token = ctx.value("NICE", at)?;
        if switch::<bool>(token, |v| self.bin.nice = Some(v)) {
            self.applied += 1;
        } else {
            ignored_toggle(ctx, "NICE", at);
        }
        Ok(())
    }

    fn parse_step(&mut self, ctx: &mut ParseContext<'_>, at: Cursor) -> Result<(), ParseError> {
        self.bin.step = Some(finite(ctx, "STEP", at)?);
        self.applied += 1;
        Ok(())
    }
}

impl Grammar for BinGrammar<'_> {
    const NAME: &'static str = "bin";

    // DIVIDE, EXTENT and STEPS take list values, which the token vocabulary
    // has no syntax for yet.
    fn build_table() -> CommandTable<Self> {
        CommandTable::new([
            CommandDescriptor::point("ANCHOR", Self::parse_anchor),
            CommandDescriptor::point("BASE", Self::parse_base),
            CommandDescriptor::point("BINNED", Self::parse_binned),
            CommandDescriptor::point("MAXBINS", Self::parse_max_bins),
            CommandDescriptor::point("MINSTEP", Self::parse_min_step),
            CommandDescriptor::point("NICE", Self::parse_nice),
            CommandDescriptor::point("STEP", Self::parse_step),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{cursor::TokenStream, diag::codes, engine::parse_loop};

    fn run(tokens: &[&str]) -> (BinParams, usize, Result<Cursor, ParseError>, Vec<String>) {
        let mut ctx = ParseContext::new(TokenStream::new(tokens));
        let end = ctx.end();
        let mut params = BinParams::default();
        let mut grammar = BinGrammar::new(&mut params);
        let res = parse_loop(&mut grammar, &mut ctx, Cursor::START, end);
        let applied = grammar.applied();
        let diags = ctx
            .into_diagnostics()
            .into_iter()
            .map(|d| d.id.to_string())
            .collect();
        (params, applied, res, diags)
    }

    #[test]
    fn numeric_and_toggle_attributes() {
        let (params, applied, res, diags) =
            run(&["MAXBINS", "20", "nice", "false", "STEP", "2.5", "anchor", "-1"]);
        assert_eq!(res.unwrap(), Cursor::at(8));
        assert_eq!(applied, 4);
        assert_eq!(params.max_bins, Some(20));
        assert_eq!(params.nice, Some(false));
        assert_eq!(params.step, Some(2.5));
        assert_eq!(params.anchor, Some(-1.0));
        assert!(diags.is_empty());
    }

    #[test]
    fn stops_at_foreign_keyword() {
        let (params, applied, res, _) = run(&["BASE", "10", "TYPE", "ORDINAL"]);
        assert_eq!(res.unwrap(), Cursor::at(2));
        assert_eq!(applied, 1);
        assert_eq!(params.base, Some(10.0));
    }

    #[test]
    fn bad_toggle_is_consumed_but_not_counted() {
        let (params, applied, res, diags) = run(&["BINNED", "maybe", "MINSTEP", "1"]);
        assert_eq!(res.unwrap(), Cursor::at(4));
        assert_eq!(applied, 1);
        assert_eq!(params.binned, None);
        assert_eq!(params.min_step, Some(1.0));
        assert_eq!(diags, vec![codes::IGNORED_TOGGLE]);
    }

    #[test]
    fn non_numeric_value_fails() {
        let (_, _, res, _) = run(&["STEP", "wide"]);
        let err = res.unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                attribute: "STEP",
                ..
            }
        ));
    }

    #[test]
    fn nan_is_not_a_step() {
        let (_, _, res, _) = run(&["STEP", "NaN"]);
        assert!(matches!(res, Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn fractional_max_bins_fails() {
        let (_, _, res, _) = run(&["MAXBINS", "2.5"]);
        assert!(matches!(res, Err(ParseError::InvalidNumber { .. })));
    }

    #[test]
    fn nothing_applied_on_unknown_start() {
        let (_, applied, res, _) = run(&["COLOR", "RED"]);
        assert_eq!(res.unwrap(), Cursor::START);
        assert_eq!(applied, 0);
    }
}

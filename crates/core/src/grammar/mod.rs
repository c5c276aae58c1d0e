/// Token positions and the borrowed token stream.
pub mod cursor;
/// Re-exports from the diagnostics crate.
pub mod diag;
/// The step/loop engine and the [`engine::Grammar`] trait.
pub mod engine;
/// Fatal parse errors.
pub mod error;
/// TRUE/FALSE toggles and keyword enumerations.
pub mod keywords;
/// Keyword tables and handler shapes.
pub mod table;
/// Variant-shape dispatch with gap reporting.
pub mod visit;

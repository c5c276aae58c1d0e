//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection.
//! `1xxx` codes are fatal parse errors, `2xxx` codes are non-fatal notes
//! collected while the parse continues.

/// A keyword was followed by fewer tokens than it requires.
pub const MISSING_ARGUMENTS: &str = "XVP1001";

/// A value did not match any keyword of its enumerated set.
pub const INVALID_VALUE: &str = "XVP1002";

/// A numeric attribute received a value that is not a number.
pub const INVALID_NUMBER: &str = "XVP1003";

/// A compound attribute was present but none of its sub-attributes applied.
pub const EMPTY_COMPOUND: &str = "XVP1004";

/// A field encoding keyword was not followed by a field name.
pub const MISSING_FIELD_NAME: &str = "XVP1005";

/// Tokens were left over after the chart command was parsed.
pub const UNRECOGNIZED_INPUT: &str = "XVP1006";

/// An attribute has no handler for the mark kind currently selected.
pub const DISPATCH_GAP: &str = "XVP2001";

/// A toggle received a value other than TRUE or FALSE and was left unchanged.
pub const IGNORED_TOGGLE: &str = "XVP2002";

/// An attribute is part of the vocabulary but has no effect yet.
pub const UNSUPPORTED_ATTRIBUTE: &str = "XVP2003";

/// Every code defined in this module, in numeric order.
pub const ALL: &[&str] = &[
    MISSING_ARGUMENTS,
    INVALID_VALUE,
    INVALID_NUMBER,
    EMPTY_COMPOUND,
    MISSING_FIELD_NAME,
    UNRECOGNIZED_INPUT,
    DISPATCH_GAP,
    IGNORED_TOGGLE,
    UNSUPPORTED_ATTRIBUTE,
];

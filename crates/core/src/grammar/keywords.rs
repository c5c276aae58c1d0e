//! Matching a single token against a fixed set of keywords.
//!
//! Used for TRUE/FALSE toggles and for enumerations such as aggregate
//! functions, time units and mark kinds. Whether a miss is fatal is up to
//! the caller.

/// A closed set of values, each selected by one keyword.
pub trait KeywordSet: Copy + 'static {
    /// Accepted keywords (upper-case) and the value each selects.
    const KEYWORDS: &'static [(&'static str, Self)];

    /// Value selected by `token`, ignoring ASCII case.
    fn from_keyword(token: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(kw, _)| kw.eq_ignore_ascii_case(token))
            .map(|&(_, value)| value)
    }
}

impl KeywordSet for bool {
    const KEYWORDS: &'static [(&'static str, Self)] = &[("TRUE", true), ("FALSE", false)];
}

/// Resolve `token` against `T`'s keywords and apply `effect` on a match.
///
/// Returns whether a keyword matched. On a miss nothing is mutated.
pub fn switch<T: KeywordSet>(token: &str, effect: impl FnOnce(T)) -> bool {
    match T::from_keyword(token) {
        Some(value) => {
            effect(value);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_matches_any_case() {
        assert_eq!(bool::from_keyword("TRUE"), Some(true));
        assert_eq!(bool::from_keyword("true"), Some(true));
        assert_eq!(bool::from_keyword("False"), Some(false));
        assert_eq!(bool::from_keyword("yes"), None);
    }

    #[test]
    fn switch_applies_effect_only_on_match() {
        let mut flag = None;
        assert!(switch::<bool>("false", |v| flag = Some(v)));
        assert_eq!(flag, Some(false));

        assert!(!switch::<bool>("maybe", |v| flag = Some(v)));
        assert_eq!(flag, Some(false));
    }
}

//! Defaults installed on a chart before its command is interpreted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::FieldKind;

/// Errors that can occur when loading chart defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON deserialization failed.
    #[error("invalid defaults JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A field value is out of its valid range.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The name of the field that failed validation.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },
}

/// Values the chart grammar installs before reading any keyword.
///
/// Every member is optional in JSON; missing members keep the values of
/// [`ChartDefaults::default`].
///
/// # Example
/// ```
/// let defaults = xvplot_core::config::load_defaults_from_str(r#"{"grid": false, "width": 640}"#)
///     .unwrap();
/// assert!(!defaults.grid);
/// assert_eq!(defaults.width, Some(640));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChartDefaults {
    /// Whether axis grid lines start enabled.
    pub grid: bool,
    /// Initial chart width in pixels.
    pub width: Option<u32>,
    /// Initial chart height in pixels.
    pub height: Option<u32>,
    /// Kind given to a field encoding until a TYPE attribute says otherwise.
    pub field_kind: FieldKind,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            grid: true,
            width: None,
            height: None,
            field_kind: FieldKind::Quantitative,
        }
    }
}

/// Parse and validate chart defaults from a JSON string.
pub fn load_defaults_from_str(s: &str) -> Result<ChartDefaults, ConfigError> {
    let defaults: ChartDefaults = serde_json::from_str(s)?;

    if defaults.width == Some(0) {
        return Err(ConfigError::InvalidField {
            field: "width".into(),
            reason: "must be > 0".into(),
        });
    }
    if defaults.height == Some(0) {
        return Err(ConfigError::InvalidField {
            field: "height".into(),
            reason: "must be > 0".into(),
        });
    }

    Ok(defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let d = load_defaults_from_str("{}").unwrap();
        assert_eq!(d, ChartDefaults::default());
        assert!(d.grid);
        assert_eq!(d.field_kind, FieldKind::Quantitative);
    }

    #[test]
    fn partial_override() {
        let d = load_defaults_from_str(r#"{"height": 300, "field_kind": "nominal"}"#).unwrap();
        assert_eq!(d.height, Some(300));
        assert_eq!(d.field_kind, FieldKind::Nominal);
        assert!(d.grid);
    }

    #[test]
    fn zero_width_rejected() {
        let err = load_defaults_from_str(r#"{"width": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { ref field, .. } if field == "width"));
        assert_eq!(err.to_string(), "invalid width: must be > 0");
    }

    #[test]
    fn malformed_json_rejected() {
        let err = load_defaults_from_str("{grid: yes}").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }
}

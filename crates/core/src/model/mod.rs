//! The chart model populated by the interpreter.
//!
//! Field names follow vega-lite so the JSON dump can be fed to a renderer
//! directly.

/// JSON serialization helpers for the chart.
pub mod dump;
/// Field encodings and their enumerations.
pub mod encoding;
/// Mark shapes and the mark visitor.
pub mod mark;

use serde::{Deserialize, Serialize};

pub use encoding::{Aggregate, Axis, Bin, BinParams, Encodings, FieldEncoding, FieldKind, TimeUnit};
pub use mark::{Mark, MarkKind, MarkVisitor};

/// A chart description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Channel encodings.
    pub encoding: Encodings,
    /// Graphical mark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    /// Display configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<DisplayConfig>,
}

/// Chart-wide display options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Defaults for every axis.
    pub axis: AxisConfig,
}

/// Axis display options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Whether grid lines are drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<bool>,
}

impl Chart {
    /// Axis configuration, created on first use.
    pub fn axis_config_mut(&mut self) -> &mut AxisConfig {
        &mut self.config.get_or_insert_with(DisplayConfig::default).axis
    }

    /// Whether grid lines are enabled, if configured.
    pub fn grid(&self) -> Option<bool> {
        self.config.as_ref().and_then(|c| c.axis.grid)
    }
}

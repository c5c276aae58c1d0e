use serde::{Deserialize, Serialize};

use crate::grammar::keywords::KeywordSet;

/// The x and y channel encodings of a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Encodings {
    /// Horizontal channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<FieldEncoding>,
    /// Vertical channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<FieldEncoding>,
}

/// Which positional channel an encoding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x channel.
    X,
    /// The y channel.
    Y,
}

impl Axis {
    /// Keyword that opens this channel's encoding.
    pub fn keyword(self) -> &'static str {
        match self {
            Axis::X => "X_FIELD",
            Axis::Y => "Y_FIELD",
        }
    }
}

impl Encodings {
    /// Mutable access to one channel.
    pub fn channel_mut(&mut self, axis: Axis) -> &mut Option<FieldEncoding> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

/// How one data field maps onto a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEncoding {
    /// Name of the data field, verbatim from the input.
    pub field: String,
    /// Measurement type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    /// Aggregation applied to the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    /// Time unit for temporal fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
    /// Binning: either a plain switch or explicit parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<Bin>,
}

/// Measurement type of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Numeric values.
    #[default]
    Quantitative,
    /// Unordered categories.
    Nominal,
    /// Ordered categories.
    Ordinal,
    /// Dates and times.
    Temporal,
}

impl KeywordSet for FieldKind {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("QUANTITATIVE", FieldKind::Quantitative),
        ("NOMINAL", FieldKind::Nominal),
        ("ORDINAL", FieldKind::Ordinal),
        ("TEMPORAL", FieldKind::Temporal),
    ];
}

/// Aggregation operation over a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    /// Number of records.
    Count,
    /// Count of non-null, non-NaN values.
    Valid,
    /// Count of null or undefined values.
    Missing,
    /// Count of distinct values.
    Distinct,
    /// Sum.
    Sum,
    /// Product.
    Product,
    /// Arithmetic mean.
    Mean,
    /// Same as mean, kept as its own operation name.
    Average,
    /// Sample variance.
    Variance,
    /// Population variance.
    Variancep,
    /// Sample standard deviation.
    Stdev,
    /// Population standard deviation.
    Stdevp,
    /// Standard error.
    Stderr,
    /// Median.
    Median,
    /// Lower quartile.
    Q1,
    /// Upper quartile.
    Q3,
    /// Lower bound of the bootstrapped 95% confidence interval.
    Ci0,
    /// Upper bound of the bootstrapped 95% confidence interval.
    Ci1,
    /// Minimum.
    Min,
    /// Maximum.
    Max,
    /// Record holding the minimum.
    Argmin,
    /// Record holding the maximum.
    Argmax,
}

impl KeywordSet for Aggregate {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("COUNT", Aggregate::Count),
        ("VALID", Aggregate::Valid),
        ("MISSING", Aggregate::Missing),
        ("DISTINCT", Aggregate::Distinct),
        ("SUM", Aggregate::Sum),
        ("PRODUCT", Aggregate::Product),
        ("MEAN", Aggregate::Mean),
        ("AVERAGE", Aggregate::Average),
        ("VARIANCE", Aggregate::Variance),
        ("VARIANCEP", Aggregate::Variancep),
        ("STDEV", Aggregate::Stdev),
        ("STDEVP", Aggregate::Stdevp),
        ("STDERR", Aggregate::Stderr),
        ("MEDIAN", Aggregate::Median),
        ("Q1", Aggregate::Q1),
        ("Q3", Aggregate::Q3),
        ("CI0", Aggregate::Ci0),
        ("CI1", Aggregate::Ci1),
        ("MIN", Aggregate::Min),
        ("MAX", Aggregate::Max),
        ("ARGMIN", Aggregate::Argmin),
        ("ARGMAX", Aggregate::Argmax),
    ];
}

/// Time unit used to discretize temporal fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Calendar year.
    Year,
    /// Quarter of the year.
    Quarter,
    /// Month.
    Month,
    /// Day of the week.
    Day,
    /// Day of the month.
    Date,
    /// Hour of the day.
    Hours,
    /// Minute.
    Minutes,
    /// Second.
    Seconds,
    /// Millisecond.
    Milliseconds,
}

impl KeywordSet for TimeUnit {
    const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("YEAR", TimeUnit::Year),
        ("QUARTER", TimeUnit::Quarter),
        ("MONTH", TimeUnit::Month),
        ("DAY", TimeUnit::Day),
        ("DATE", TimeUnit::Date),
        ("HOURS", TimeUnit::Hours),
        ("MINUTES", TimeUnit::Minutes),
        ("SECONDS", TimeUnit::Seconds),
        ("MILLISECONDS", TimeUnit::Milliseconds),
    ];
}

/// Binning of a field: `true`/`false`, or a parameter object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bin {
    /// Default binning on or off.
    Enabled(bool),
    /// Binning with explicit parameters.
    Params(BinParams),
}

/// Explicit binning parameters. Unset members fall back to the renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinParams {
    /// Value that bin boundaries are aligned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<f64>,
    /// Number base for automatic bin steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    /// Whether the data is already binned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binned: Option<bool>,
    /// Upper bound on the number of bins.
    #[serde(rename = "maxbins", skip_serializing_if = "Option::is_none")]
    pub max_bins: Option<u32>,
    /// Smallest allowed step size.
    #[serde(rename = "minstep", skip_serializing_if = "Option::is_none")]
    pub min_step: Option<f64>,
    /// Whether boundaries are rounded to human-friendly values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice: Option<bool>,
    /// Exact step size between bins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

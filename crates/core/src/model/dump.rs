use super::Chart;

/// Serialize a chart to a pretty-printed JSON string.
pub fn to_pretty_json(chart: &Chart) -> String {
    serde_json::to_string_pretty(chart).expect("Chart serialization cannot fail")
}

/// Serialize a chart to a JSON value.
pub fn to_json_value(chart: &Chart) -> serde_json::Value {
    serde_json::to_value(chart).expect("Chart serialization cannot fail")
}

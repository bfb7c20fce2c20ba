//! Flat indicator rows as delivered by the reporting backend.
//!
//! Each row is a heterogeneous JSON object: an `Indicator` display label plus
//! whatever numerator/denominator fields that indicator class populates.
//! Numeric fields may arrive as numbers, numeric strings, empty strings, or
//! be absent entirely; the engine must keep "explicitly zero" and "not
//! provided" distinct, so all field access funnels through [`IndicatorRecord::numeric`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name carrying the indicator display label.
pub const INDICATOR_FIELD: &str = "Indicator";

/// Field name carrying an optional backend-precomputed percentage.
pub const PERCENTAGE_FIELD: &str = "Percentage";

/// One raw indicator row: a flat field-name to value mapping.
///
/// Immutable once received; the engine never writes back into a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorRecord {
    fields: BTreeMap<String, Value>,
}

impl IndicatorRecord {
    /// Build a record from raw field/value pairs (primarily for tests).
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// The `Indicator` display label, or an empty string when absent.
    pub fn label(&self) -> &str {
        match self.fields.get(INDICATOR_FIELD) {
            Some(Value::String(label)) => label.as_str(),
            _ => "",
        }
    }

    /// Whether a field exists in the row at all, regardless of its value.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Read a field as a number, distinguishing presence from absence.
    ///
    /// Returns `Some` for JSON numbers and parseable numeric strings
    /// (explicit `0` included). Returns `None` for absent fields, `null`,
    /// blank strings, unparseable strings, and non-scalar values. This is
    /// the single place where the zero-vs-missing rule lives.
    pub fn numeric(&self, field: &str) -> Option<f64> {
        match self.fields.get(field)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            _ => None,
        }
    }

    /// The backend-precomputed `Percentage` field, when provided.
    pub fn reported_percentage(&self) -> Option<f64> {
        self.numeric(PERCENTAGE_FIELD)
    }

    /// Iterate the raw field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> IndicatorRecord {
        serde_json::from_value(value).expect("deserialize record")
    }

    #[test]
    fn numeric_accepts_numbers_and_numeric_strings() {
        let row = record(json!({"A": 5, "B": "12", "C": " 3.5 "}));
        assert_eq!(row.numeric("A"), Some(5.0));
        assert_eq!(row.numeric("B"), Some(12.0));
        assert_eq!(row.numeric("C"), Some(3.5));
    }

    #[test]
    fn numeric_keeps_explicit_zero_present() {
        let row = record(json!({"A": 0, "B": "0"}));
        assert_eq!(row.numeric("A"), Some(0.0));
        assert_eq!(row.numeric("B"), Some(0.0));
    }

    #[test]
    fn numeric_treats_absent_null_and_blank_as_missing() {
        let row = record(json!({"B": null, "C": "", "D": "  "}));
        assert_eq!(row.numeric("A"), None);
        assert_eq!(row.numeric("B"), None);
        assert_eq!(row.numeric("C"), None);
        assert_eq!(row.numeric("D"), None);
    }

    #[test]
    fn numeric_treats_unparseable_strings_as_missing() {
        let row = record(json!({"A": "n/a", "B": {"nested": 1}}));
        assert_eq!(row.numeric("A"), None);
        assert_eq!(row.numeric("B"), None);
    }

    #[test]
    fn label_reads_indicator_field() {
        let row = record(json!({"Indicator": "1. Died"}));
        assert_eq!(row.label(), "1. Died");
        assert_eq!(record(json!({})).label(), "");
    }

    #[test]
    fn reported_percentage_reads_optional_field() {
        let row = record(json!({"Percentage": "87.5"}));
        assert_eq!(row.reported_percentage(), Some(87.5));
        assert_eq!(record(json!({})).reported_percentage(), None);
    }
}

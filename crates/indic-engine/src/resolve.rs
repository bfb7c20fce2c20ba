//! Concrete field resolution against a raw indicator row.
//!
//! A [`FieldRule`] yields ordered candidate field names for a demographic
//! stem; the first candidate that is present and numeric wins. Resolution
//! never substitutes a default: when nothing resolves the caller gets
//! `None`, which downstream becomes a null denominator, never a zero.

use indic_catalog::FieldRule;
use indic_model::IndicatorRecord;

/// A successfully resolved field read.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// The field name that won.
    pub field: String,
    pub value: f64,
}

/// Resolve a rule against a record for one demographic stem.
pub fn resolve(record: &IndicatorRecord, rule: &FieldRule, stem: &str) -> Option<Resolved> {
    rule.candidates(stem).into_iter().find_map(|field| {
        record
            .numeric(&field)
            .map(|value| Resolved { field, value })
    })
}

/// Resolve a rule to just its numeric value.
pub fn resolve_value(record: &IndicatorRecord, rule: &FieldRule, stem: &str) -> Option<f64> {
    resolve(record, rule, stem).map(|resolved| resolved.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> IndicatorRecord {
        serde_json::from_value(value).expect("deserialize record")
    }

    #[test]
    fn chain_prefers_the_specific_field() {
        let row = record(json!({"Male_0_14_With_CD4": 7, "Male_0_14": 9}));
        let rule = FieldRule::Chain(&["_With_CD4", ""]);
        let resolved = resolve(&row, &rule, "Male_0_14").expect("resolves");
        assert_eq!(resolved.field, "Male_0_14_With_CD4");
        assert_eq!(resolved.value, 7.0);
    }

    #[test]
    fn chain_falls_back_when_specific_field_is_missing() {
        let row = record(json!({"Male_0_14": 9}));
        let rule = FieldRule::Chain(&["_With_CD4", ""]);
        assert_eq!(resolve_value(&row, &rule, "Male_0_14"), Some(9.0));
    }

    #[test]
    fn blank_fields_do_not_win_the_chain() {
        let row = record(json!({"Female_0_14_Receiving": "", "Female_0_14": 4}));
        let rule = FieldRule::Chain(&["_Receiving", ""]);
        let resolved = resolve(&row, &rule, "Female_0_14").expect("resolves");
        assert_eq!(resolved.field, "Female_0_14");
    }

    #[test]
    fn first_populated_bucket_wins() {
        let row = record(json!({"Male_over_14_4M": 11}));
        let rule = FieldRule::FirstPopulated(&["_Less_3M", "_3M", "_4M", "_5M", "_6M_Plus"]);
        let resolved = resolve(&row, &rule, "Male_over_14").expect("resolves");
        assert_eq!(resolved.field, "Male_over_14_4M");
        assert_eq!(resolved.value, 11.0);
    }

    #[test]
    fn nothing_resolved_reports_none() {
        let row = record(json!({"Unrelated": 3}));
        assert_eq!(
            resolve_value(&row, &FieldRule::Suffix("_Deaths"), "Male_0_14"),
            None
        );
    }

    #[test]
    fn explicit_zero_resolves_as_present() {
        let row = record(json!({"Male_0_14_Total": 0}));
        assert_eq!(
            resolve_value(&row, &FieldRule::Suffix("_Total"), "Male_0_14"),
            Some(0.0)
        );
    }
}

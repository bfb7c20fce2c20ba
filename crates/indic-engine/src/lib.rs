//! Indicator classification and aggregation engine.
//!
//! A pure, synchronous transform: an already-fetched array of flat
//! indicator rows goes in, demographic-stratified aggregate reports come
//! out. There is no I/O here beyond parsing the supplied JSON, no shared
//! mutable state beyond the read-only catalog, and re-running the engine on
//! the same input yields identical output.

pub mod aggregate;
pub mod builder;
pub mod percent;
pub mod resolve;

pub use aggregate::{GroupTotals, aggregate_group};
pub use builder::{
    AgeView, build_indicator, build_indicator_view, build_report, build_report_view,
};
pub use percent::percentage;
pub use resolve::{Resolved, resolve, resolve_value};

use indic_model::{IndicatorRecord, Result};

/// Parse the backend row contract: a JSON array of flat indicator objects.
pub fn parse_records(json: &str) -> Result<Vec<IndicatorRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_records_reads_the_row_contract() {
        let rows = parse_records(
            r#"[{"Indicator": "1. Died", "Male_0_14_Deaths": 2, "Total": "200"}]"#,
        )
        .expect("parse rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label(), "1. Died");
        assert_eq!(rows[0].numeric("Total"), Some(200.0));
    }

    #[test]
    fn parse_records_rejects_non_arrays() {
        let error = parse_records(r#"{"Indicator": "1. Died"}"#).unwrap_err();
        assert!(error.to_string().starts_with("invalid indicator rows"));
        assert!(parse_records("not json").is_err());
    }
}

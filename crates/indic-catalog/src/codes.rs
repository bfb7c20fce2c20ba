//! Static numeric-code lookup tables.
//!
//! Backend queries prefix every indicator label with a short code
//! (`1`, `4a`, `12c`, ...). The code is the stable dispatch key: it selects
//! the catalog entry and, for collaborators that drill down to per-patient
//! rows, the backend detail-query identifier.

/// `(code, catalog key, detail-query identifier)`, codes lowercased.
static CODE_TABLE: &[(&str, &str, &str)] = &[
    ("1", "died", "tx_ml_died"),
    ("2", "transferred-out", "tx_ml_transferred"),
    ("3", "interrupted", "tx_ml_iit"),
    ("4a", "reengaged-early", "tx_rtt_early"),
    ("4b", "reengaged-late", "tx_rtt_late"),
    ("5", "on-time-visits", "visits_on_time"),
    ("6a", "same-day-initiation", "tx_new_same_day"),
    ("6b", "initiation-7-days", "tx_new_7_days"),
    ("6c", "initiation-14-days", "tx_new_14_days"),
    ("7", "cd4-baseline", "cd4_baseline"),
    ("8", "ctx-prophylaxis", "ctx_prophylaxis"),
    ("9", "mmd", "mmd_dispensing"),
    ("10a", "tld-new", "tld_new"),
    ("10b", "tld-cumulative", "tld_cumulative"),
    ("11a", "tpt-initiated", "tpt_initiated"),
    ("11b", "tpt-completed", "tpt_completed"),
    ("12a", "vl-tested", "vl_tested"),
    ("12b", "vl-results-10-days", "vl_results_10_days"),
    ("12c", "vl-monitored-6m", "vl_monitored_6m"),
    ("12d", "vl-suppressed-12m", "vl_suppressed_12m"),
    ("12e", "vl-suppressed", "vl_suppressed"),
    ("13a", "eac-received", "eac_received"),
    ("13b", "eac-follow-up-vl", "eac_follow_up_vl"),
    ("13c", "eac-suppressed", "eac_suppressed"),
    ("14", "regimen-switch", "regimen_switched"),
    ("15", "retention-12m", "retention_12m"),
    ("16", "tx-new", "tx_new"),
    ("17", "tx-curr", "tx_curr"),
    ("18", "missed-appointments", "visits_missed"),
    ("19", "tb-screening", "tb_screened"),
];

/// Catalog key for a leading label code, case-insensitive.
pub fn key_for_code(code: &str) -> Option<&'static str> {
    let lower = code.to_lowercase();
    CODE_TABLE
        .iter()
        .find(|(entry, _, _)| *entry == lower)
        .map(|(_, key, _)| *key)
}

/// Backend detail-query identifier for a leading label code.
///
/// `None` means no per-patient detail lookup is available for the code.
pub fn detail_query_key(code: &str) -> Option<&'static str> {
    let lower = code.to_lowercase();
    CODE_TABLE
        .iter()
        .find(|(entry, _, _)| *entry == lower)
        .map(|(_, _, query)| *query)
}

/// Iterate the full code table (code, catalog key, detail query).
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str, &'static str)> {
    CODE_TABLE.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::collections::BTreeSet;

    #[test]
    fn codes_are_unique() {
        let codes: BTreeSet<_> = CODE_TABLE.iter().map(|(code, _, _)| *code).collect();
        assert_eq!(codes.len(), CODE_TABLE.len());
    }

    #[test]
    fn every_code_points_at_a_catalog_entry() {
        for (code, key, _) in CODE_TABLE {
            assert!(
                catalog::find(key).is_some(),
                "code {code} references missing catalog key {key}"
            );
        }
    }

    #[test]
    fn every_catalog_entry_has_a_code() {
        let keyed: BTreeSet<_> = CODE_TABLE.iter().map(|(_, key, _)| *key).collect();
        for config in catalog::CATALOG {
            assert!(keyed.contains(config.key), "{} has no code", config.key);
        }
    }

    #[test]
    fn lookups_are_case_insensitive() {
        assert_eq!(key_for_code("12C"), Some("vl-monitored-6m"));
        assert_eq!(detail_query_key("10B"), Some("tld_cumulative"));
        assert_eq!(detail_query_key("99"), None);
    }
}

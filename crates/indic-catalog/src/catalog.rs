//! The static indicator catalog.
//!
//! One entry per indicator class, scanned in order by the keyword fallback
//! of the classifier, so more specific entries (EAC stages, viral-load
//! sub-indicators) come before the broad ones whose keywords they contain.
//! The table is pure data and process-wide read-only state; an indicator
//! label missing from here silently degrades to a count-only display, which
//! is why the set must stay exhaustive.

use crate::config::{ChartType, DataType, FieldRule, IndicatorConfig};

pub mod category {
    pub const CONTINUITY: &str = "Continuity of care";
    pub const TREATMENT: &str = "Treatment";
    pub const TB: &str = "TB services";
    pub const VIRAL_LOAD: &str = "Viral load";
    pub const ADHERENCE: &str = "Adherence support";
    pub const OTHER: &str = "Other";
}

const MMD_BUCKETS: &[&str] = &["_Less_3M", "_3M", "_4M", "_5M", "_6M_Plus"];

/// All indicator classes, in keyword-scan order.
pub static CATALOG: &[IndicatorConfig] = &[
    // Enhanced adherence counselling stages. These sit first because their
    // labels also contain "suppressed" and "vl".
    IndicatorConfig {
        key: "eac-suppressed",
        display_name: "13c. Suppressed after EAC",
        category: category::ADHERENCE,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["suppressed after eac", "after eac"],
        // "Follow-up VL after EAC" also contains "after eac" and belongs
        // to the follow-up stage below.
        exclude: &["follow"],
        numerator: FieldRule::Suffix("_Suppressed_After_EAC"),
        denominator: Some(FieldRule::Suffix("_Follow_Up_VL")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "eac-follow-up-vl",
        display_name: "13b. Follow-up VL after EAC",
        category: category::ADHERENCE,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["follow-up vl", "follow up vl"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Follow_Up_VL"),
        denominator: Some(FieldRule::Suffix("_EAC")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "eac-received",
        display_name: "13a. High VL receiving EAC",
        category: category::ADHERENCE,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["eac", "enhanced adherence"],
        exclude: &[],
        numerator: FieldRule::Suffix("_EAC"),
        denominator: Some(FieldRule::Suffix("_High_VL")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    // Viral-load cascade, most specific wording first. Tiers are never
    // mixed: each sub-indicator reads exactly one numerator field family.
    IndicatorConfig {
        key: "vl-results-10-days",
        display_name: "12b. VL results within 10 days",
        category: category::VIRAL_LOAD,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["within 10"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Within_10_Days"),
        denominator: Some(FieldRule::Suffix("_Tested")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "vl-monitored-6m",
        display_name: "12c. VL monitored at 6 months",
        category: category::VIRAL_LOAD,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["monitored"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Monitored"),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "vl-suppressed-12m",
        display_name: "12d. VL suppressed at 12 months",
        category: category::VIRAL_LOAD,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["at 12 months", "<1000"],
        exclude: &["eac", "retain", "retention"],
        numerator: FieldRule::Suffix("_Suppressed"),
        denominator: Some(FieldRule::Suffix("_Tested")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "vl-suppressed",
        display_name: "12e. VL suppressed (all tested)",
        category: category::VIRAL_LOAD,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["suppressed"],
        exclude: &["eac", "at 12 months"],
        numerator: FieldRule::Suffix("_Suppressed"),
        denominator: Some(FieldRule::Suffix("_Tested")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "vl-tested",
        display_name: "12a. VL testing coverage",
        category: category::VIRAL_LOAD,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        // "vl" alone also matches every other cascade label, so the broad
        // entry vetoes the wordings the specific entries own.
        keywords: &["vl", "viral load"],
        exclude: &["within 10", "monitored", "suppressed", "eac"],
        numerator: FieldRule::Suffix("_Tested"),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    // Regimen (TLD). The new-initiation variant must not swallow the
    // cumulative one, hence the exclusion.
    IndicatorConfig {
        key: "tld-new",
        display_name: "10a. TLD among newly initiating",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["tld"],
        exclude: &["cumulative"],
        numerator: FieldRule::Suffix("_TLD"),
        denominator: Some(FieldRule::Suffix("_Initiated")),
        overall_denominator: Some("Initiated"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "tld-cumulative",
        display_name: "10b. TLD cumulative",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["tld"],
        exclude: &[],
        numerator: FieldRule::Suffix("_TLD"),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    // TB preventive therapy.
    IndicatorConfig {
        key: "tpt-completed",
        display_name: "11b. TPT completed",
        category: category::TB,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["tpt completed", "completed tpt"],
        exclude: &[],
        numerator: FieldRule::Chain(&["_TPT_Completed", "_Completed"]),
        denominator: Some(FieldRule::Suffix("_TPT")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "tpt-initiated",
        display_name: "11a. TPT initiated",
        category: category::TB,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["tpt", "preventive therapy"],
        exclude: &[],
        numerator: FieldRule::Chain(&["_TPT_Initiated", "_TPT"]),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    // Re-engagement after treatment interruption. The late variant reads
    // backend-supplied `_Eligible` fields directly: its eligibility already
    // excludes patients captured by the early variant, so nothing is
    // recomputed locally.
    IndicatorConfig {
        key: "reengaged-late",
        display_name: "4b. Re-engaged after 28+ days",
        category: category::CONTINUITY,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["28+", "after 28"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Reengaged"),
        denominator: Some(FieldRule::Suffix("_Eligible")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "reengaged-early",
        display_name: "4a. Re-engaged within 28 days",
        category: category::CONTINUITY,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["re-engaged", "reengaged", "returned to care"],
        exclude: &["28+", "after 28"],
        numerator: FieldRule::Suffix("_Reengaged"),
        denominator: Some(FieldRule::Suffix("_Interrupted")),
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "died",
        display_name: "1. Died",
        category: category::CONTINUITY,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["died", "death", "mortality"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Deaths"),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "transferred-out",
        display_name: "2. Transferred out",
        category: category::CONTINUITY,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["transferred"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Transferred"),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "interrupted",
        display_name: "3. Interrupted treatment",
        category: category::CONTINUITY,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["interrup", "lost to follow", "ltfu"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Interrupted"),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    // Visit timing comes pre-aggregated per site, so both entries share the
    // one global `Visits` denominator.
    IndicatorConfig {
        key: "on-time-visits",
        display_name: "5. Visits on time",
        category: category::CONTINUITY,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["on time", "on-time"],
        exclude: &[],
        numerator: FieldRule::Suffix("_On_Time"),
        denominator: None,
        overall_denominator: Some("Visits"),
        demographic_denominators: false,
    },
    IndicatorConfig {
        key: "missed-appointments",
        display_name: "18. Missed appointments",
        category: category::CONTINUITY,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["missed"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Missed"),
        denominator: None,
        overall_denominator: Some("Visits"),
        demographic_denominators: false,
    },
    // ART initiation speed.
    IndicatorConfig {
        key: "same-day-initiation",
        display_name: "6a. Same-day ART initiation",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["same day", "same-day"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Same_Day"),
        denominator: Some(FieldRule::Suffix("_Initiated")),
        overall_denominator: Some("Initiated"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "initiation-7-days",
        display_name: "6b. ART initiation within 7 days",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["within 7"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Within_7_Days"),
        denominator: Some(FieldRule::Suffix("_Initiated")),
        overall_denominator: Some("Initiated"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "initiation-14-days",
        display_name: "6c. ART initiation within 14 days",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["within 14"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Within_14_Days"),
        denominator: Some(FieldRule::Suffix("_Initiated")),
        overall_denominator: Some("Initiated"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "cd4-baseline",
        display_name: "7. Baseline CD4 testing",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["cd4"],
        exclude: &[],
        numerator: FieldRule::Chain(&["_With_CD4", ""]),
        denominator: Some(FieldRule::Suffix("_Initiated")),
        overall_denominator: Some("Initiated"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "ctx-prophylaxis",
        display_name: "8. Cotrimoxazole prophylaxis",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["cotrimoxazole", "prophylaxis", "ctx"],
        exclude: &[],
        numerator: FieldRule::Chain(&["_Receiving", ""]),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "mmd",
        display_name: "9. Multi-month dispensing",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["multi-month", "multi month", "mmd", "dispens"],
        exclude: &[],
        // Numerator is whichever duration bucket the row populates; the
        // denominator is the active-patient total, never a bucket sum.
        numerator: FieldRule::FirstPopulated(MMD_BUCKETS),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "tb-screening",
        display_name: "19. Screened for TB",
        category: category::TB,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["tb screen", "screened for tb"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Screened"),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "regimen-switch",
        display_name: "14. Regimen switched",
        category: category::TREATMENT,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["switch"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Switched"),
        denominator: Some(FieldRule::Suffix("_Total")),
        overall_denominator: Some("Total"),
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "retention-12m",
        display_name: "15. 12-month retention",
        category: category::CONTINUITY,
        chart: ChartType::Bar,
        data_type: DataType::NumeratorDenominator,
        keywords: &["retention", "retained"],
        exclude: &[],
        numerator: FieldRule::Suffix("_Retained"),
        denominator: Some(FieldRule::Suffix("_Cohort")),
        overall_denominator: Some("Cohort"),
        demographic_denominators: true,
    },
    // Plain stratified counts, no denominator.
    IndicatorConfig {
        key: "tx-new",
        display_name: "16. Newly initiated on ART",
        category: category::TREATMENT,
        chart: ChartType::Pie,
        data_type: DataType::Demographic,
        keywords: &["newly initiated", "new on art"],
        exclude: &["tld", "cd4", "same day", "within"],
        numerator: FieldRule::Chain(&[""]),
        denominator: None,
        overall_denominator: None,
        demographic_denominators: true,
    },
    IndicatorConfig {
        key: "tx-curr",
        display_name: "17. Currently on ART",
        category: category::TREATMENT,
        chart: ChartType::Pie,
        data_type: DataType::Demographic,
        keywords: &["currently on", "active on art"],
        exclude: &[],
        numerator: FieldRule::Chain(&[""]),
        denominator: None,
        overall_denominator: None,
        demographic_denominators: true,
    },
];

/// Look up a catalog entry by canonical key.
pub fn find(key: &str) -> Option<&'static IndicatorConfig> {
    CATALOG.iter().find(|config| config.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn keys_are_unique() {
        let keys: BTreeSet<_> = CATALOG.iter().map(|config| config.key).collect();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn catalog_has_full_indicator_set() {
        assert_eq!(CATALOG.len(), 30);
    }

    #[test]
    fn percentage_indicators_carry_a_denominator_source() {
        for config in CATALOG {
            if config.has_percentage() {
                assert!(
                    config.denominator.is_some() || config.overall_denominator.is_some(),
                    "{} has no denominator source",
                    config.key
                );
            }
        }
    }

    #[test]
    fn shared_denominator_entries_name_an_overall_field() {
        for config in CATALOG {
            if !config.demographic_denominators {
                assert!(
                    config.overall_denominator.is_some(),
                    "{} shares a global denominator but names none",
                    config.key
                );
            }
        }
    }

    #[test]
    fn find_resolves_known_keys() {
        assert!(find("died").is_some());
        assert!(find("vl-suppressed-12m").is_some());
        assert!(find("no-such-indicator").is_none());
    }
}

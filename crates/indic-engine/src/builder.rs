//! Assembly of per-indicator reports.
//!
//! The builder is the only surface rendering and export collaborators see:
//! classification, field resolution, aggregation, and percentage derivation
//! happen behind it, and its output carries plain numbers only. A malformed
//! or unclassifiable row degrades locally; the batch is never aborted.

use serde::{Deserialize, Serialize};
use tracing::warn;

use indic_catalog::{ChartType, DataType, FieldRule, IndicatorConfig, catalog::category, classify};
use indic_model::{Aggregate, DemographicGroup, IndicatorRecord, IndicatorReport};

use crate::aggregate::aggregate_group;
use crate::percent::percentage;

/// Stand-in config for labels no catalog entry matched: raw stratified
/// counts, no denominators, no percentages.
static UNCLASSIFIED: IndicatorConfig = IndicatorConfig {
    key: "",
    display_name: "",
    category: category::OTHER,
    chart: ChartType::Bar,
    data_type: DataType::Demographic,
    keywords: &[],
    exclude: &[],
    numerator: FieldRule::Chain(&[""]),
    denominator: None,
    overall_denominator: None,
    demographic_denominators: true,
};

/// Age-view toggle narrowing which demographic groups are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeView {
    #[default]
    Everyone,
    Children,
    Adults,
}

impl AgeView {
    fn includes(self, group: DemographicGroup) -> bool {
        match self {
            AgeView::Everyone => true,
            AgeView::Children => group.age_band() == indic_model::AgeBand::Children,
            AgeView::Adults => group.age_band() == indic_model::AgeBand::Adults,
        }
    }
}

/// Build the report for one indicator row with the default (unfiltered) view.
pub fn build_indicator(record: &IndicatorRecord) -> IndicatorReport {
    build_indicator_view(record, AgeView::Everyone)
}

/// Build the report for one indicator row under an age-view filter.
pub fn build_indicator_view(record: &IndicatorRecord, view: AgeView) -> IndicatorReport {
    let classification = classify(record.label());
    let config = classification.config;
    let effective = config.unwrap_or(&UNCLASSIFIED);

    let mut groups = Vec::new();
    for group in DemographicGroup::ALL {
        if !view.includes(group) {
            continue;
        }
        let totals = aggregate_group(record, effective, group);
        // Empty base-cell rows are noise; the All-family rows stay so the
        // shape of the breakdown is always visible.
        if !group.is_summary() && totals.is_empty() {
            continue;
        }
        let percentage = if effective.has_percentage() {
            percentage(totals.value, totals.total)
        } else {
            None
        };
        groups.push(Aggregate {
            name: group.label().to_string(),
            group,
            age_band: group.age_band(),
            value: totals.value,
            total: totals.total,
            percentage,
        });
    }

    if effective.has_percentage() && groups.iter().all(|aggregate| aggregate.total.is_none()) {
        warn!(
            indicator = effective.key,
            label = record.label(),
            "no denominator resolved for any group"
        );
    }

    IndicatorReport {
        indicator_key: config.map(|config| config.key.to_string()),
        display_name: config
            .map(|config| config.display_name.to_string())
            .unwrap_or_else(|| record.label().to_string()),
        category: config
            .map_or(category::OTHER, |config| config.category)
            .to_string(),
        detail_query: classification.detail_query.map(str::to_string),
        reported_percentage: record.reported_percentage(),
        groups,
    }
}

/// Build reports for a full row set, preserving input order.
pub fn build_report(rows: &[IndicatorRecord]) -> Vec<IndicatorReport> {
    build_report_view(rows, AgeView::Everyone)
}

/// Build reports for a full row set under an age-view filter.
pub fn build_report_view(rows: &[IndicatorRecord], view: AgeView) -> Vec<IndicatorReport> {
    rows.iter()
        .map(|record| build_indicator_view(record, view))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> IndicatorRecord {
        serde_json::from_value(value).expect("deserialize record")
    }

    #[test]
    fn summary_rows_are_always_emitted() {
        let row = record(json!({"Indicator": "1. Died"}));
        let report = build_indicator(&row);
        let groups: Vec<_> = report.groups.iter().map(|aggregate| aggregate.group).collect();
        assert_eq!(
            groups,
            vec![
                DemographicGroup::All,
                DemographicGroup::ChildrenAll,
                DemographicGroup::AdultsAll
            ]
        );
    }

    #[test]
    fn populated_base_cells_are_emitted() {
        let row = record(json!({
            "Indicator": "1. Died",
            "Male_over_14_Deaths": 5,
            "Adults_Total": 100
        }));
        let report = build_indicator(&row);
        assert!(
            report
                .groups
                .iter()
                .any(|aggregate| aggregate.group == DemographicGroup::MaleAdults)
        );
        assert!(
            !report
                .groups
                .iter()
                .any(|aggregate| aggregate.group == DemographicGroup::FemaleChildren)
        );
    }

    #[test]
    fn unclassified_label_degrades_to_counts() {
        let row = record(json!({
            "Indicator": "Entirely novel programme measure",
            "Male_0_14": 5
        }));
        let report = build_indicator(&row);
        assert_eq!(report.indicator_key, None);
        assert_eq!(report.display_name, "Entirely novel programme measure");
        assert_eq!(report.category, category::OTHER);
        assert!(report.groups.iter().all(|aggregate| aggregate.total.is_none()));
        assert!(
            report
                .groups
                .iter()
                .all(|aggregate| aggregate.percentage.is_none())
        );
        let male_children = report
            .groups
            .iter()
            .find(|aggregate| aggregate.group == DemographicGroup::MaleChildren)
            .expect("populated cell emitted");
        assert_eq!(male_children.value, 5.0);
    }

    #[test]
    fn age_view_narrows_emitted_groups() {
        let row = record(json!({
            "Indicator": "1. Died",
            "Male_0_14_Deaths": 2,
            "Children_Total": 40
        }));
        let report = build_indicator_view(&row, AgeView::Children);
        assert!(
            report
                .groups
                .iter()
                .all(|aggregate| aggregate.age_band == indic_model::AgeBand::Children)
        );
        assert!(
            report
                .groups
                .iter()
                .any(|aggregate| aggregate.group == DemographicGroup::ChildrenAll)
        );
    }

    #[test]
    fn reported_percentage_passes_through_untouched() {
        let row = record(json!({
            "Indicator": "1. Died",
            "Percentage": 4.2,
            "Children_Total": 40,
            "Adults_Total": 160
        }));
        let report = build_indicator(&row);
        assert_eq!(report.reported_percentage, Some(4.2));
        // Computed group percentages are not replaced by the reported one.
        let overall = report.overall().expect("All row");
        assert_eq!(overall.percentage, Some(0.0));
    }
}

//! Computed output consumed by table/chart rendering and export.

use serde::{Deserialize, Serialize};

use crate::demographic::{AgeBand, DemographicGroup};

/// One computed (indicator, demographic group) aggregate.
///
/// `total` is `None` when no denominator field resolved, which is distinct
/// from an explicit denominator of zero; `percentage` follows the same
/// null-vs-zero contract and is a raw float (formatting is a presentation
/// concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Display label for the group row.
    pub name: String,
    pub group: DemographicGroup,
    pub age_band: AgeBand,
    /// Summed numerator; missing fields contribute 0.
    pub value: f64,
    /// Summed denominator, or `None` when unresolvable.
    pub total: Option<f64>,
    /// `value / total * 100`, or `None` when not computable.
    pub percentage: Option<f64>,
}

/// Per-indicator output: display metadata plus the ordered group breakdown.
///
/// `groups` always contains the All / All Children / All Adults rows (even
/// when empty); base-cell rows appear only when populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    /// Canonical catalog key, or `None` for unclassified labels.
    pub indicator_key: Option<String>,
    /// Fixed display name from the catalog, or the raw label when unclassified.
    pub display_name: String,
    /// UI grouping category.
    pub category: String,
    /// Backend detail-query identifier, when the label carried a known code.
    pub detail_query: Option<String>,
    /// Backend-precomputed percentage passed through untouched.
    pub reported_percentage: Option<f64>,
    pub groups: Vec<Aggregate>,
}

impl IndicatorReport {
    /// The `All` group aggregate (always present for built reports).
    pub fn overall(&self) -> Option<&Aggregate> {
        self.groups
            .iter()
            .find(|aggregate| aggregate.group == DemographicGroup::All)
    }

    /// Whether any group in this report resolved a denominator.
    pub fn has_denominators(&self) -> bool {
        self.groups.iter().any(|aggregate| aggregate.total.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(group: DemographicGroup, total: Option<f64>) -> Aggregate {
        Aggregate {
            name: group.label().to_string(),
            group,
            age_band: group.age_band(),
            value: 1.0,
            total,
            percentage: None,
        }
    }

    #[test]
    fn overall_finds_the_all_row() {
        let report = IndicatorReport {
            indicator_key: Some("died".to_string()),
            display_name: "1. Died".to_string(),
            category: "Continuity of care".to_string(),
            detail_query: None,
            reported_percentage: None,
            groups: vec![
                aggregate(DemographicGroup::ChildrenAll, None),
                aggregate(DemographicGroup::All, Some(10.0)),
            ],
        };
        assert_eq!(report.overall().and_then(|row| row.total), Some(10.0));
        assert!(report.has_denominators());
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = IndicatorReport {
            indicator_key: None,
            display_name: "Unknown".to_string(),
            category: "Other".to_string(),
            detail_query: None,
            reported_percentage: Some(12.5),
            groups: vec![aggregate(DemographicGroup::All, None)],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: IndicatorReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}

//! Per-demographic-group summation of numerators and denominators.
//!
//! The denominator side is where the indicator families diverge: some carry
//! a `_Total` per base cell, some only band totals (`Children_Total`,
//! `Adults_Total`), some a single backend combined field, and some nothing
//! at all. The `All` group therefore resolves through a three-tier
//! fallback, and an explicit zero total is kept distinct from an
//! unresolvable one throughout.

use tracing::{debug, warn};

use indic_catalog::IndicatorConfig;
use indic_model::{BaseCell, DemographicGroup, IndicatorRecord};

use crate::resolve::resolve_value;

/// Summed numerator and denominator for one (indicator, group) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTotals {
    /// Missing numerator fields contribute 0 to the sum.
    pub value: f64,
    /// `None` when no denominator field resolved for the group.
    pub total: Option<f64>,
}

impl GroupTotals {
    /// Whether this row carries no signal: nothing counted and no
    /// denominator beyond an absent-or-zero one.
    pub fn is_empty(&self) -> bool {
        self.value == 0.0 && self.total.unwrap_or(0.0) == 0.0
    }
}

/// Aggregate one demographic group of one indicator row.
pub fn aggregate_group(
    record: &IndicatorRecord,
    config: &IndicatorConfig,
    group: DemographicGroup,
) -> GroupTotals {
    let value = group
        .cells()
        .iter()
        .filter_map(|cell| resolve_value(record, &config.numerator, cell.stem()))
        .sum();
    GroupTotals {
        value,
        total: group_total(record, config, group),
    }
}

fn group_total(
    record: &IndicatorRecord,
    config: &IndicatorConfig,
    group: DemographicGroup,
) -> Option<f64> {
    // One shared global denominator for the whole indicator.
    if !config.demographic_denominators {
        return config
            .overall_denominator
            .and_then(|field| record.numeric(field));
    }
    match group {
        DemographicGroup::All => all_total(record, config),
        DemographicGroup::ChildrenAll | DemographicGroup::AdultsAll => {
            band_total(record, config, group)
        }
        _ => group.base_cell().and_then(|cell| cell_total(record, config, cell)),
    }
}

fn cell_total(
    record: &IndicatorRecord,
    config: &IndicatorConfig,
    cell: BaseCell,
) -> Option<f64> {
    let rule = config.denominator.as_ref()?;
    resolve_value(record, rule, cell.stem())
}

/// Band (Children/Adults) denominator: the compound field when the backend
/// supplies one, otherwise the sum of whichever member-cell totals resolve.
fn band_total(
    record: &IndicatorRecord,
    config: &IndicatorConfig,
    group: DemographicGroup,
) -> Option<f64> {
    if let Some(stem) = group.compound_stem()
        && let Some(rule) = config.denominator.as_ref()
        && let Some(total) = resolve_value(record, rule, stem)
    {
        return Some(total);
    }
    sum_present(
        group
            .cells()
            .iter()
            .map(|cell| cell_total(record, config, *cell)),
    )
}

/// `All` denominator, three tiers: the backend combined field when present
/// and non-zero, else the two band totals when both resolve, else the sum
/// of resolvable base-cell totals. A combined field that is explicitly zero
/// still counts as a known zero when nothing else resolves.
fn all_total(record: &IndicatorRecord, config: &IndicatorConfig) -> Option<f64> {
    let combined = config
        .overall_denominator
        .and_then(|field| record.numeric(field));

    let children = band_total(record, config, DemographicGroup::ChildrenAll);
    let adults = band_total(record, config, DemographicGroup::AdultsAll);
    let band_sum = match (children, adults) {
        (Some(children), Some(adults)) => Some(children + adults),
        _ => None,
    };

    if let Some(total) = combined
        && total != 0.0
    {
        // The backend combined field is closer to the source of truth and
        // wins; a mismatch with the band sum is upstream inconsistency.
        if let Some(sum) = band_sum
            && sum != total
        {
            warn!(
                indicator = config.key,
                combined = total,
                band_sum = sum,
                "combined denominator disagrees with children+adults totals"
            );
        }
        return Some(total);
    }

    if band_sum.is_some() {
        return band_sum;
    }
    if let Some(sum) = sum_present(
        BaseCell::ALL
            .iter()
            .map(|cell| cell_total(record, config, *cell)),
    ) {
        return Some(sum);
    }
    if combined.is_none() {
        debug!(indicator = config.key, "no denominator resolved for All group");
    }
    combined
}

/// Sum the present entries; `None` only when nothing was present.
fn sum_present<I: Iterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let mut sum = None;
    for value in values.flatten() {
        sum = Some(sum.unwrap_or(0.0) + value);
    }
    sum
}

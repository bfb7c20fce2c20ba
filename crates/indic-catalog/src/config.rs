//! Per-indicator-class configuration.
//!
//! Every indicator family is described declaratively: how its label is
//! recognized, which fields hold numerators and denominators per demographic
//! stem, and how the overall denominator is sourced. The field rules are the
//! single authoritative definition consumed by both the table and chart
//! rendering paths.

use serde::{Deserialize, Serialize};

/// Preferred chart widget for an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Bar,
    Pie,
}

/// How an indicator's values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// Counts with an eligible-population denominator and a percentage.
    NumeratorDenominator,
    /// Plain stratified counts, no percentage.
    Demographic,
    /// Side-by-side counts compared across periods or sites.
    Comparison,
}

/// How a concrete field name is derived from a demographic stem.
///
/// A rule yields an ordered candidate list; the resolver reads the first
/// candidate that is present and numeric and never invents a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Single field: `<stem><suffix>` (e.g. `Male_0_14_Deaths`).
    Suffix(&'static str),
    /// Prioritized fallback chain of suffixes; `""` means the raw stem
    /// field itself (CD4, prophylaxis, and TPT families).
    Chain(&'static [&'static str]),
    /// Whichever of these sibling fields is populated wins; used for the
    /// multi-month dispensing duration buckets.
    FirstPopulated(&'static [&'static str]),
}

impl FieldRule {
    /// Concrete candidate field names for a demographic stem, in priority order.
    pub fn candidates(&self, stem: &str) -> Vec<String> {
        let suffixes: &[&str] = match self {
            FieldRule::Suffix(suffix) => std::slice::from_ref(suffix),
            FieldRule::Chain(suffixes) | FieldRule::FirstPopulated(suffixes) => suffixes,
        };
        suffixes
            .iter()
            .map(|suffix| {
                if suffix.is_empty() {
                    stem.to_string()
                } else {
                    format!("{stem}{suffix}")
                }
            })
            .collect()
    }
}

/// Static definition of one indicator class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorConfig {
    /// Canonical catalog key (stable across label wording changes).
    pub key: &'static str,
    /// Fixed display name shown in tables and charts.
    pub display_name: &'static str,
    /// UI grouping category.
    pub category: &'static str,
    pub chart: ChartType,
    pub data_type: DataType,
    /// Case-insensitive substrings that select this entry during the
    /// keyword fallback scan (the label is lowercased first).
    pub keywords: &'static [&'static str],
    /// Substrings that veto a keyword match and let the scan continue.
    pub exclude: &'static [&'static str],
    pub numerator: FieldRule,
    /// Per-demographic denominator rule; `None` for pure count indicators.
    pub denominator: Option<FieldRule>,
    /// Backend-supplied combined denominator field for the All group.
    pub overall_denominator: Option<&'static str>,
    /// When false, every group shares the overall denominator field instead
    /// of carrying its own.
    pub demographic_denominators: bool,
}

impl IndicatorConfig {
    /// Whether a lowercased label selects this entry in the keyword scan.
    /// An exclusion hit vetoes the match entirely.
    pub fn matches_label(&self, lower_label: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lower_label.contains(keyword))
            && !self
                .exclude
                .iter()
                .any(|excluded| lower_label.contains(excluded))
    }

    /// Numerator candidate fields for a demographic stem.
    pub fn numerator_fields(&self, stem: &str) -> Vec<String> {
        self.numerator.candidates(stem)
    }

    /// Denominator candidate fields for a demographic stem, empty when the
    /// indicator carries no per-demographic denominator.
    pub fn denominator_fields(&self, stem: &str) -> Vec<String> {
        self.denominator
            .as_ref()
            .map(|rule| rule.candidates(stem))
            .unwrap_or_default()
    }

    /// Whether this indicator produces percentages at all.
    pub fn has_percentage(&self) -> bool {
        self.data_type == DataType::NumeratorDenominator
    }
}

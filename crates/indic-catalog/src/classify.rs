//! Indicator label classification.
//!
//! Labels arrive as free text ("10b. TLD cumulative — newly initiating").
//! Dispatch is code-first: a leading `<digits><optional a-e>` code selects
//! the catalog entry through the static code table. Labels without a usable
//! code fall back to an ordered case-insensitive keyword scan over the
//! catalog, where an entry's exclusion list vetoes its match and scanning
//! continues; the first surviving match governs, with no scoring.
//!
//! No match is not an error: the row degrades to a count-only demographic
//! display with every percentage null.

use tracing::debug;

use crate::catalog::CATALOG;
use crate::codes;
use crate::config::IndicatorConfig;

/// Outcome of classifying one indicator label.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    /// Matched catalog entry, `None` when the label is unclassified.
    pub config: Option<&'static IndicatorConfig>,
    /// Backend detail-query identifier derived from the leading code.
    pub detail_query: Option<&'static str>,
}

/// Classify a free-text indicator label against the catalog.
pub fn classify(label: &str) -> Classification {
    let lower = label.trim().to_lowercase();
    let code = leading_code(&lower);

    if let Some(code) = code.as_deref()
        && let Some(key) = codes::key_for_code(code)
        && let Some(config) = crate::catalog::find(key)
    {
        return Classification {
            config: Some(config),
            detail_query: codes::detail_query_key(code),
        };
    }

    let config = CATALOG.iter().find(|entry| entry.matches_label(&lower));
    if config.is_none() {
        debug!(label, "indicator label matched no catalog entry");
    }
    Classification {
        config,
        detail_query: code.as_deref().and_then(codes::detail_query_key),
    }
}

/// Extract a leading indicator code: one or more digits plus an optional
/// trailing variant letter `a`-`e`, terminated by a non-alphanumeric
/// boundary. Returns the lowercased code text.
///
/// Stricter than a bare digits-then-letter prefix scan: a digit run glued
/// to other letters ("3x", "12cohorts") is wording, not a code, and those
/// labels go through the keyword fallback instead.
pub fn leading_code(label: &str) -> Option<String> {
    let trimmed = label.trim_start();
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let mut rest = trimmed[digits.len()..].chars();
    let mut code = digits;
    match rest.next() {
        Some(letter @ 'a'..='e') => {
            // "12c." is a code, "12cohorts" is not.
            if rest.next().is_some_and(|next| next.is_ascii_alphanumeric()) {
                return None;
            }
            code.push(letter);
        }
        Some(next) if next.is_ascii_alphanumeric() => return None,
        _ => {}
    }
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_code_parses_plain_and_variant_codes() {
        assert_eq!(leading_code("1. died"), Some("1".to_string()));
        assert_eq!(leading_code("12c. vl monitored"), Some("12c".to_string()));
        assert_eq!(leading_code("  10b tld cumulative"), Some("10b".to_string()));
        assert_eq!(leading_code("4a"), Some("4a".to_string()));
    }

    #[test]
    fn leading_code_rejects_non_code_prefixes() {
        assert_eq!(leading_code("died"), None);
        assert_eq!(leading_code("12cohorts retained"), None);
        assert_eq!(leading_code("3x. unknown variant"), None);
        assert_eq!(leading_code(""), None);
    }

    #[test]
    fn code_dispatch_wins_over_keywords() {
        // The wording would keyword-match the generic VL entry, but the
        // code pins it to the monitored sub-indicator.
        let classification = classify("12c. VL cascade");
        assert_eq!(
            classification.config.map(|config| config.key),
            Some("vl-monitored-6m")
        );
        assert_eq!(classification.detail_query, Some("vl_monitored_6m"));
    }

    #[test]
    fn keyword_fallback_classifies_codeless_labels() {
        let classification = classify("VL <1000 copies/mL at 12 months");
        assert_eq!(
            classification.config.map(|config| config.key),
            Some("vl-suppressed-12m")
        );
        assert_eq!(classification.detail_query, None);
    }

    #[test]
    fn exclusion_pushes_scan_to_the_next_entry() {
        // "at 12 months" hits the VL suppression entry first, but its
        // exclusion list vetoes retention wording and the scan continues.
        let classification = classify("Retained at 12 months");
        assert_eq!(
            classification.config.map(|config| config.key),
            Some("retention-12m")
        );
        let classification = classify("VL results within 10 days");
        assert_eq!(
            classification.config.map(|config| config.key),
            Some("vl-results-10-days")
        );
    }

    #[test]
    fn tld_cumulative_is_not_swallowed_by_tld_new() {
        let cumulative = classify("TLD cumulative");
        assert_eq!(
            cumulative.config.map(|config| config.key),
            Some("tld-cumulative")
        );
        let new = classify("TLD among newly initiating");
        assert_eq!(new.config.map(|config| config.key), Some("tld-new"));
    }

    #[test]
    fn late_reengagement_wins_on_its_wording() {
        let late = classify("Re-engaged after 28+ days");
        assert_eq!(late.config.map(|config| config.key), Some("reengaged-late"));
        let early = classify("Re-engaged within 28 days");
        assert_eq!(
            early.config.map(|config| config.key),
            Some("reengaged-early")
        );
    }

    #[test]
    fn unknown_labels_stay_unclassified() {
        let classification = classify("Completely novel indicator");
        assert!(classification.config.is_none());
        assert!(classification.detail_query.is_none());
    }

    #[test]
    fn unknown_code_still_tries_keywords() {
        let classification = classify("99. died");
        assert_eq!(classification.config.map(|config| config.key), Some("died"));
        assert_eq!(classification.detail_query, None);
    }
}

//! Command implementations.

use std::fs;

use anyhow::Context;
use tracing::info;

use indic_engine::{build_report_view, parse_records};
use indic_model::IndicatorReport;

use crate::cli::ReportArgs;

/// Read, parse, and aggregate a row file.
pub fn run_report(args: &ReportArgs) -> anyhow::Result<Vec<IndicatorReport>> {
    let json = fs::read_to_string(&args.rows)
        .with_context(|| format!("reading rows file {}", args.rows.display()))?;
    let rows = parse_records(&json)
        .with_context(|| format!("parsing rows file {}", args.rows.display()))?;
    info!(rows = rows.len(), "aggregating indicator rows");
    let reports = build_report_view(&rows, args.age_view.into());
    let without_denominator = reports
        .iter()
        .filter(|report| !report.has_denominators())
        .count();
    info!(
        indicators = reports.len(),
        without_denominator, "report built"
    );
    Ok(reports)
}

/// Serialize reports for `--json` output.
pub fn reports_to_json(reports: &[IndicatorReport]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(reports).context("serializing report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AgeViewArg;
    use std::io::Write;

    #[test]
    fn run_report_reads_a_row_file() {
        let mut file = tempfile_path("indic-rows");
        writeln!(
            file.1,
            r#"[{{"Indicator": "1. Died", "Male_0_14_Deaths": 2, "Children_Total": 40, "Adults_Total": 160}}]"#
        )
        .expect("write rows");
        let args = ReportArgs {
            rows: file.0.clone(),
            age_view: AgeViewArg::Everyone,
            json: false,
        };
        let reports = run_report(&args).expect("report builds");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].indicator_key.as_deref(), Some("died"));
        let _ = std::fs::remove_file(&file.0);
    }

    #[test]
    fn run_report_fails_on_missing_file() {
        let args = ReportArgs {
            rows: "does-not-exist.json".into(),
            age_view: AgeViewArg::Everyone,
            json: false,
        };
        assert!(run_report(&args).is_err());
    }

    fn tempfile_path(prefix: &str) -> (std::path::PathBuf, std::fs::File) {
        let path = std::env::temp_dir().join(format!("{prefix}-{}.json", std::process::id()));
        let file = std::fs::File::create(&path).expect("create temp file");
        (path, file)
    }
}

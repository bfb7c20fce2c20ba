//! CLI argument definitions for the indicator reporting tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use indic_engine::AgeView;

#[derive(Parser)]
#[command(
    name = "indic",
    version,
    about = "Clinical indicator reporting - aggregate indicator rows by demographic",
    long_about = "Turn flat clinical indicator rows (JSON) into demographic-stratified\n\
                  aggregates: counts, denominators, and percentages per age/sex group.\n\
                  Rows are classified against the static indicator catalog."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate a JSON file of indicator rows into demographic breakdowns.
    Report(ReportArgs),

    /// List the indicator catalog.
    Indicators,

    /// List the indicator-code to detail-query lookup table.
    Codes,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the JSON array of indicator rows.
    #[arg(value_name = "ROWS_JSON")]
    pub rows: PathBuf,

    /// Narrow the emitted groups to one age band.
    #[arg(long = "age-view", value_enum, default_value = "everyone")]
    pub age_view: AgeViewArg,

    /// Emit the full report as JSON instead of a summary table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI age-view choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum AgeViewArg {
    Everyone,
    Children,
    Adults,
}

impl From<AgeViewArg> for AgeView {
    fn from(arg: AgeViewArg) -> Self {
        match arg {
            AgeViewArg::Everyone => AgeView::Everyone,
            AgeViewArg::Children => AgeView::Children,
            AgeViewArg::Adults => AgeView::Adults,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

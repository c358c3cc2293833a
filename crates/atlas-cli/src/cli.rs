//! CLI argument definitions for Atlas.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "atlas",
    version,
    about = "Atlas - reconcile and validate country indicator time-series",
    long_about = "Reconcile heterogeneous population, GDP, and CO2 sources into one\n\
                  canonical per-country-per-year table, repair gaps by forward-fill,\n\
                  and run automated data-quality checks against the result."
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
    /// Run the full pipeline over a raw source directory.
    Run(RunArgs),

    /// Validate an existing canonical CSV snapshot.
    Check(CheckArgs),

    /// List supported metrics and recognized source layouts.
    Metrics,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing date-stamped source CSVs
    /// (population_*.csv, gdp_*.csv, co2_emissions_*.csv).
    #[arg(value_name = "RAW_DIR")]
    pub raw_dir: PathBuf,

    /// Output directory for the canonical CSV and reports
    /// (default: <RAW_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Merge and export without running the validation suite.
    #[arg(long = "skip-validation")]
    pub skip_validation: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to a canonical clean_data CSV.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Also write validation_report.json into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
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

//! CLI argument definitions for the DRR simulator.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use drr_ingest::{HeaderMode, SampleDataset, Scenario};

#[derive(Parser)]
#[command(
    name = "drr",
    version,
    about = "DRR Simulator - Standardize, transmit and validate regulatory asset reports",
    long_about = "Turn raw asset CSV rows into a standardized regulatory report,\n\
                  send it to a simulated regulator gateway and run the compliance\n\
                  rules (non-negative asset values, no future reporting dates)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Include asset identifiers in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: platform config folder).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Date used as "today" for the report header and the filing deadline
    /// check (default: current UTC date).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD", global = true)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Standardize, transmit and validate one input.
    Run(RunArgs),

    /// Print the standardized report as JSON.
    Standardize(StandardizeArgs),

    /// Standardize and validate without transmitting.
    Validate(ValidateArgs),

    /// Print a built-in sample dataset.
    Sample(SampleArgs),

    /// Standardize and validate every CSV file in a folder.
    Batch(BatchArgs),

    /// Show or write the configuration file.
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// How to treat the first line (overrides the config file).
    #[arg(long = "header", value_enum)]
    pub header: Option<HeaderArg>,
}

/// Where the raw CSV text comes from. Defaults to the built-in sample.
#[derive(Args, Debug, Clone, Default)]
#[group(multiple = false)]
pub struct SourceArgs {
    /// Read rows from a CSV file.
    #[arg(long = "input", short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Use the given text as input (rows separated by newlines).
    #[arg(long = "text", value_name = "CSV")]
    pub text: Option<String>,

    /// Use a built-in dataset.
    #[arg(long = "sample", value_enum, value_name = "DATASET")]
    pub sample: Option<SampleArg>,

    /// Ask the sample generator for data, falling back to a built-in dataset.
    #[arg(long = "generate", value_enum, value_name = "SCENARIO")]
    pub generate: Option<ScenarioArg>,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Skip the simulated gateway and always accept the transmission.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Gateway latency in milliseconds (overrides the config file).
    #[arg(long = "latency-ms", value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Gateway acceptance probability between 0 and 1 (overrides the config file).
    #[arg(long = "success-rate", value_name = "RATE")]
    pub success_rate: Option<f64>,
}

#[derive(Args)]
pub struct StandardizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print compact JSON on a single line.
    #[arg(long = "compact")]
    pub compact: bool,

    /// Write the JSON to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also write the results to this file.
    #[arg(long = "results", value_name = "FILE")]
    pub results: Option<PathBuf>,

    /// Format of the results file.
    #[arg(long = "results-format", value_enum, default_value = "csv")]
    pub results_format: ResultsFormatArg,
}

#[derive(Args)]
pub struct SampleArgs {
    /// Dataset to print.
    #[arg(value_enum, default_value = "default")]
    pub dataset: SampleArg,

    /// List the available datasets instead.
    #[arg(long = "list")]
    pub list: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Folder containing CSV files.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// How to treat the first line of each file (overrides the config file).
    #[arg(long = "header", value_enum)]
    pub header: Option<HeaderArg>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the effective configuration to the config file.
    #[arg(long = "write")]
    pub write: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SampleArg {
    Default,
    Clean,
    Dirty,
}

impl From<SampleArg> for SampleDataset {
    fn from(arg: SampleArg) -> Self {
        match arg {
            SampleArg::Default => Self::Default,
            SampleArg::Clean => Self::Clean,
            SampleArg::Dirty => Self::Dirty,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScenarioArg {
    Clean,
    Dirty,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Clean => Self::Clean,
            ScenarioArg::Dirty => Self::Dirty,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeaderArg {
    Auto,
    Present,
    Absent,
}

impl From<HeaderArg> for HeaderMode {
    fn from(arg: HeaderArg) -> Self {
        match arg {
            HeaderArg::Auto => Self::Auto,
            HeaderArg::Present => Self::Present,
            HeaderArg::Absent => Self::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResultsFormatArg {
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

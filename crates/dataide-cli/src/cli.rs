//! CLI argument definitions for `dataide`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dataide_generate::DEFAULT_SEED;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "dataide",
    version,
    about = "Generate, profile and export small sample datasets",
    long_about = "Generate, profile and export small sample datasets.\n\n\
                  Payloads come from a JSON file or from the seeded synthetic\n\
                  generator. Profiling and chart suggestions run locally."
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

    /// Allow sample cell values and prompts in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

impl Cli {
    /// Logging configuration with consistent precedence: `--log-level`
    /// over `-v/-q` over `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = level.into();
        }
        config.format = self.log_format.into();
        config.log_file = self.log_file.clone();
        config.log_data = self.log_data;
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Produce a dataset payload for a prompt (synthetic fallback on failure).
    Generate(GenerateArgs),

    /// Profile sample tables.
    Profile(ProfileArgs),

    /// Suggest charts for sample tables.
    Charts(ChartsArgs),

    /// Write a ZIP bundle for a prompt.
    Export(ExportArgs),
}

/// Where sample tables are read from. Defaults to the synthetic dataset.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Payload JSON file with `sample_rows` and `tables`.
    #[arg(long = "payload", value_name = "FILE", conflicts_with = "samples")]
    pub payload: Option<PathBuf>,

    /// Folder of CSV files, one table per file.
    #[arg(long = "samples", value_name = "DIR")]
    pub samples: Option<PathBuf>,

    /// Seed for the synthetic dataset used when no source is given.
    #[arg(long = "seed", value_name = "N", default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Free-text description of the dataset.
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Payload JSON file produced by an external generator.
    #[arg(long = "payload", value_name = "FILE")]
    pub payload: Option<PathBuf>,

    /// Seed for the synthetic fallback.
    #[arg(long = "seed", value_name = "N", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Write the payload JSON here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Table schemas (JSON array or object with `tables`) used as dtype hints.
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ProfileFormatArg,

    /// Number of most frequent values kept for text columns.
    #[arg(long = "top-values", value_name = "N", default_value_t = 5)]
    pub top_values: usize,
}

#[derive(Parser, Debug)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Maximum number of suggestions.
    #[arg(long = "max-charts", value_name = "N", default_value_t = 6)]
    pub max_charts: usize,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Free-text description of the dataset, recorded in the README.
    #[arg(value_name = "PROMPT")]
    pub prompt: String,

    /// Archive path, or CSV path with `--table`.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: PathBuf,

    /// Payload JSON file produced by an external generator.
    #[arg(long = "payload", value_name = "FILE")]
    pub payload: Option<PathBuf>,

    /// Seed for the synthetic fallback.
    #[arg(long = "seed", value_name = "N", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Only write one CSV per sample table.
    #[arg(long = "samples-only")]
    pub samples_only: bool,

    /// Write the named sample table as a single CSV file instead of a ZIP.
    #[arg(long = "table", value_name = "NAME", conflicts_with = "samples_only")]
    pub table: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileFormatArg {
    Table,
    Json,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

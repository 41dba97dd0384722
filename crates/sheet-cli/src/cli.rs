//! CLI argument definitions for the character converter.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fvtt2udon",
    version,
    about = "Convert Foundry VTT dnd5e actor JSON into Udonarium character XML",
    long_about = "Convert a Foundry VTT (dnd5e system) actor export into a Udonarium \
                  character sheet.\n\n\
                  Missing fields are filled with empty values; only a structurally \
                  malformed export is rejected."
)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Foundry VTT actor export to convert.
    #[arg(value_name = "INPUT_JSON")]
    pub input: PathBuf,

    /// Output directory, created when missing.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Output file name without extension (default: 1reconverted_<INPUT stem>).
    #[arg(short = 'f', long = "output-file", value_name = "NAME")]
    pub output_file: Option<String>,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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

//! CLI argument definitions for the life expectancy cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lifex",
    version,
    about = "Eurostat life expectancy cleaner - normalize and filter the raw dataset",
    long_about = "Clean the Eurostat life expectancy dataset.\n\n\
                  Reshapes the wide TSV export into long format (or normalizes the\n\
                  record-oriented JSON export), validates year and value fields,\n\
                  filters to a single region, and writes the result as CSV."
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
    /// Clean a raw dataset export and write the filtered CSV.
    Clean(CleanArgs),

    /// List all recognized region codes and their classification.
    Regions,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw dataset export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Input encoding of the raw export.
    #[arg(long = "format", value_enum, default_value = "tsv")]
    pub format: InputFormatArg,

    /// Region code to keep (case-insensitive).
    #[arg(long = "country", default_value = "PT")]
    pub country: String,

    /// Output CSV path (default: <input dir>/<country>_life_expectancy.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormatArg {
    /// Tab-separated wide table, one column per year.
    Tsv,
    /// Record-oriented JSON, already long-format.
    Json,
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

#[cfg(test)]
mod tests {
    use super::{Cli, Command, InputFormatArg};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn clean_defaults_to_tsv_and_pt() {
        let cli = Cli::try_parse_from(["lifex", "clean", "raw.tsv"]).expect("parse");
        match cli.command {
            Command::Clean(args) => {
                assert_eq!(args.country, "PT");
                assert_eq!(args.format, InputFormatArg::Tsv);
                assert_eq!(args.output, None);
            }
            Command::Regions => panic!("expected clean subcommand"),
        }
    }
}

//! CLI argument definitions for the Z-score evaluator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use growth_core::BracketStrategy;
use growth_model::Sex;

#[derive(Parser)]
#[command(
    name = "growth-zscore",
    version,
    about = "Weight-for-age Z-score bands from WHO reference tables",
    long_about = "Evaluate the d2:zScore rule function from the command line.\n\n\
                  Reference tables are the embedded WHO weight-for-age standards \
                  (0 to 60 months) unless GROWTH_STANDARDS_DIR points at a directory \
                  with weight_for_age_boys.csv and weight_for_age_girls.csv."
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

    /// Include ages, weights and sex codes in log events.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate d2:zScore with raw rule-engine arguments.
    Eval(EvalArgs),

    /// Print reference rows.
    Table(TableArgs),

    /// Show where the reference tables come from and what they cover.
    Info,
}

#[derive(Parser)]
pub struct EvalArgs {
    /// Arguments as the rule engine passes them: AGE WEIGHT FLAG SEX.
    ///
    /// The sex code is read from the fourth position; "male", "MALE",
    /// "Male", "ma", "m", "M", "0" and "false" are male, anything else
    /// is female.
    #[arg(value_name = "ARGUMENT", num_args = 0.., allow_hyphen_values = true)]
    pub arguments: Vec<String>,

    /// Bracket traversal used for interpolation.
    #[arg(long = "strategy", value_enum, default_value = "legacy")]
    pub strategy: StrategyArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct TableArgs {
    /// Only show one sex.
    #[arg(long = "sex", value_enum)]
    pub sex: Option<SexArg>,

    /// Only show one age in months.
    #[arg(long = "age", value_name = "MONTHS")]
    pub age: Option<u8>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Legacy,
    Nearest,
}

impl From<StrategyArg> for BracketStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Legacy => BracketStrategy::Legacy,
            StrategyArg::Nearest => BracketStrategy::Nearest,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(value: SexArg) -> Self {
        match value {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
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

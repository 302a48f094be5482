//! Clap definitions for the `lexmd` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// `lexmd`: quantitative frequency-structure indicators for tokenized text.
#[derive(Parser, Debug)]
#[command(name = "lexmd", version, about, long_about = None)]
pub struct Cli {
    /// Settings file. Defaults to `lexmd.toml` in the working directory
    /// when present.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    /// `LEXMD_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute indicators for one or more tokenized documents.
    Analyze(AnalyzeArgs),

    /// Explain an indicator key, or `list` every key.
    Explain(ExplainArgs),

    /// Score documents against a coefficient table.
    Dimensions(DimensionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Whitespace-tokenized text files. `-` reads stdin.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Tokens carry part-of-speech tags (`word_TAG`).
    #[arg(long)]
    pub tagged: bool,

    /// Separator between word and tag in tagged input.
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Round displayed values to this many decimals.
    #[arg(long, value_name = "N")]
    pub decimals: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, default_value_t = ReportFormat::Md)]
    pub format: ReportFormat,

    /// Only compute these indicators (comma separated; aliases accepted).
    #[arg(long, value_delimiter = ',', value_name = "KEY,...")]
    pub only: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Indicator key or alias (e.g. `ttr`, `G`, `CLI`), or `list`.
    pub key: String,
}

#[derive(Args, Debug, Clone)]
pub struct DimensionsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Coefficient table (TOML).
    #[arg(long, value_name = "TOML")]
    pub coefficients: PathBuf,

    #[arg(long, value_enum, default_value_t = DimensionFormat::Md)]
    pub format: DimensionFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Markdown tables, one section per document.
    Md,
    /// Tab-separated values, one row per document.
    Tsv,
    /// One JSON document holding every report.
    Json,
    /// One compact JSON report per line.
    Jsonl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DimensionFormat {
    Md,
    Tsv,
    Json,
}

//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// Extract text in a Unicode range from script and markup sources
#[derive(Parser, Debug)]
#[command(name = "extract-text")]
#[command(
    about = "Extract string literals, markup text and attribute values containing characters in a Unicode range (CJK by default) into a CSV report"
)]
#[command(version)]
pub struct Cli {
    /// Files or directories to scan; several may be joined with ','
    #[arg(value_name = "INPUT", required = true, value_delimiter = ',')]
    pub inputs: Vec<String>,

    /// Skip files whose path matches this regular expression
    #[arg(short, long, value_name = "REGEX")]
    pub exclude: Option<String>,

    /// File suffixes to process [default: js,jsx,vue,html,json]
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub suffix: Option<Vec<String>>,

    /// Report location [default: output.csv]
    #[arg(short, long, value_name = "PATH", env = "EXTRACT_TEXT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Character class body of the range to extract [default: \u4e00-\u9fff]
    #[arg(
        short,
        long,
        value_name = "RANGE",
        env = "EXTRACT_TEXT_RANGE",
        allow_hyphen_values = true
    )]
    pub range: Option<String>,

    /// Report format [default: csv]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// TOML file providing defaults for the options above
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Write the report to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Log skipped files and per-file record counts
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Report format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma separated values with a UTF-8 byte order mark - default, opens in spreadsheets
    #[default]
    Csv,
    /// JSON - array of records
    Json,
}

impl OutputFormat {
    /// File extension conventionally used for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Input paths with empty list entries dropped
    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.inputs
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    /// Default tracing filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

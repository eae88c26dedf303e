//! Run configuration
//!
//! Values are resolved in order: command-line flag (or its environment
//! variable), then the TOML file given with `--config`, then the built-in
//! defaults. A config file looks like:
//!
//! ```toml
//! suffixes = ["js", "vue"]
//! exclude = "min\\.js|plugins"
//! range = "\\u4e00-\\u9fff"
//! output = "reports/zh.csv"
//! format = "csv"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, OutputFormat};
use crate::error::{ExtractError, Result};
use crate::range::DEFAULT_RANGE;

/// Suffixes processed when none are configured
pub const DEFAULT_SUFFIXES: &[&str] = &["js", "jsx", "vue", "html", "json"];

/// Report path used when none is configured
pub const DEFAULT_OUTPUT: &str = "output.csv";

/// Contents of a `--config` file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub suffixes: Option<Vec<String>>,
    pub exclude: Option<String>,
    pub range: Option<String>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ExtractError::Config {
            origin: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| ExtractError::Config {
            origin: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Accepted file suffixes, without the leading dot
    pub suffixes: Vec<String>,
    /// Paths matching this pattern are skipped
    pub exclude: Option<String>,
    /// Character class body of the range to extract
    pub range: String,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            exclude: None,
            range: DEFAULT_RANGE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::Csv,
        }
    }
}

impl ExtractConfig {
    /// Resolve the settings for a command line, loading `--config` if given
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    fn merge(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Self::default();

        let suffixes = cli
            .suffix
            .clone()
            .or(file.suffixes)
            .map(|list| normalize_suffixes(&list))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.suffixes);

        Self {
            suffixes,
            exclude: cli.exclude.clone().or(file.exclude).filter(|p| !p.is_empty()),
            range: cli.range.clone().or(file.range).unwrap_or(defaults.range),
            output: cli.output.clone().or(file.output).unwrap_or(defaults.output),
            format: cli.format.or(file.format).unwrap_or(defaults.format),
        }
    }

    /// Where the report is written
    ///
    /// CSV reports always get a `.csv` extension.
    pub fn output_path(&self) -> PathBuf {
        let wanted = self.format.extension();
        match self.format {
            OutputFormat::Csv
                if self.output.extension().and_then(|e| e.to_str()) != Some(wanted) =>
            {
                let mut name = self.output.clone().into_os_string();
                name.push(".");
                name.push(wanted);
                PathBuf::from(name)
            }
            _ => self.output.clone(),
        }
    }
}

fn normalize_suffixes(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|s| s.trim().trim_start_matches('.').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

//! Error types for text extraction

use std::process::ExitCode;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors raised while configuring or running an extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The character range does not form a valid character class
    #[error("Invalid char range: {range} ({source})")]
    InvalidRange {
        range: String,
        #[source]
        source: regex::Error,
    },

    /// The exclusion pattern is not a valid regular expression
    #[error("Invalid regular expression: {pattern} ({source})")]
    InvalidExclude {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A configuration source (file or option) is unusable
    #[error("Invalid configuration ({origin}): {message}")]
    Config { origin: String, message: String },

    /// A script buffer (or embedded script block) failed to parse
    #[error("{file}: parse script failed, may contain grammatical errors: {message}")]
    ScriptParse { file: String, message: String },

    /// A markup buffer failed to parse
    #[error("{file}: parse markup failed: {message}")]
    MarkupParse { file: String, message: String },

    /// A tree-sitter grammar could not be loaded
    #[error("Failed to set language: {message}")]
    Grammar { message: String },

    /// An input path does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// The records could not be rendered
    #[error("Failed to encode report: {message}")]
    Encode { message: String },

    /// The report could not be written
    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Configuration errors abort the run before any file is processed
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::InvalidExclude { .. } | Self::Config { .. }
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        if self.is_configuration() {
            ExitCode::from(2)
        } else {
            ExitCode::from(1)
        }
    }
}

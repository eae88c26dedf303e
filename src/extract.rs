//! Extraction orchestration
//!
//! This module routes each file to the detector for its syntax and folds the
//! per-file outcomes into an [`ExtractionReport`]. Nothing here is shared
//! mutable state: an [`Extractor`] is read-only once built, and every call to
//! [`Extractor::process_file`] returns its own [`FileOutcome`].

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::config::ExtractConfig;
use crate::detectors::{MarkupExtraction, MarkupExtractor, ScriptExtractor};
use crate::error::{ExtractError, Result};
use crate::lang::{Lang, LangFamily};
use crate::range::RangeFilter;
use crate::schema::MatchRecord;

/// Prefix turning a structured-data document into a script assignment
const STRUCTURED_DATA_PREFIX: &str = "var a = ";

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Suffix not accepted or path excluded; not counted
    Skipped,
    /// Parsed successfully (possibly with no matches)
    Extracted {
        records: Vec<MatchRecord>,
        /// Embedded script blocks that failed while the file itself succeeded
        script_failures: usize,
    },
    /// The file could not be read or parsed
    Failed { script_failures: usize },
}

/// Records and counters accumulated over a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub records: Vec<MatchRecord>,
    pub success_count: usize,
    pub failed_count: usize,
    pub script_failed_count: usize,
}

impl ExtractionReport {
    /// Fold one file's outcome into the report
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Skipped => {}
            FileOutcome::Extracted {
                records,
                script_failures,
            } => {
                self.records.extend(records);
                self.success_count += 1;
                self.script_failed_count += script_failures;
            }
            FileOutcome::Failed { script_failures } => {
                self.failed_count += 1;
                self.script_failed_count += script_failures;
            }
        }
    }

    /// Files that were processed (successfully or not)
    pub fn processed(&self) -> usize {
        self.success_count + self.failed_count
    }

    /// One-line summary for the operator
    pub fn summary(&self) -> String {
        format!(
            "Totally processed {} files, success: {}, failed: {} (script failed: {})",
            self.processed(),
            self.success_count,
            self.failed_count,
            self.script_failed_count
        )
    }
}

impl FromIterator<FileOutcome> for ExtractionReport {
    fn from_iter<I: IntoIterator<Item = FileOutcome>>(iter: I) -> Self {
        let mut report = Self::default();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}

/// Routes files to detectors
#[derive(Debug, Clone)]
pub struct Extractor {
    filter: RangeFilter,
    exclude: Option<Regex>,
    suffixes: Vec<String>,
}

impl Extractor {
    /// Compile the range filter and exclusion pattern
    ///
    /// Both failures are configuration errors and abort the run.
    pub fn new(config: &ExtractConfig) -> Result<Self> {
        let filter = RangeFilter::compile(&config.range)?;
        let exclude = config
            .exclude
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ExtractError::InvalidExclude {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            filter,
            exclude,
            suffixes: config.suffixes.clone(),
        })
    }

    pub fn filter(&self) -> &RangeFilter {
        &self.filter
    }

    /// Extension of `path` if the file should be processed
    pub fn accepted_extension<'p>(&self, path: &'p Path) -> Option<&'p str> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        if !self.suffixes.iter().any(|s| s == ext) {
            return None;
        }
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(&path.to_string_lossy()) {
                return None;
            }
        }
        Some(ext)
    }

    /// Read and extract one file
    pub fn process_file(&self, path: &Path) -> FileOutcome {
        let Some(ext) = self.accepted_extension(path) else {
            debug!("Skip file: {}", path.display());
            return FileOutcome::Skipped;
        };
        let file_name = path.display().to_string();

        let content = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!("{}: read failed: {}", file_name, e);
                info!("Process file failed: {}", file_name);
                return FileOutcome::Failed { script_failures: 0 };
            }
        };

        self.extract_content(&file_name, ext, &content)
    }

    /// Extract already-loaded content, applying the same suffix and exclusion
    /// rules as [`process_file`](Self::process_file)
    pub fn process_source(&self, file_name: &str, content: &str) -> FileOutcome {
        match self.accepted_extension(Path::new(file_name)) {
            Some(ext) => self.extract_content(file_name, ext, content),
            None => FileOutcome::Skipped,
        }
    }

    fn extract_content(&self, file_name: &str, ext: &str, content: &str) -> FileOutcome {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let lang = Lang::from_extension(ext).unwrap_or_else(|_| {
            debug!("{}: no grammar for .{}, parsing as javascript", file_name, ext);
            Lang::JavaScript
        });

        let outcome = match lang.family() {
            LangFamily::Markup => {
                markup_outcome(MarkupExtractor::new(&self.filter).extract(content, file_name))
            }
            LangFamily::StructuredData => {
                let wrapped = format!("{}{}", STRUCTURED_DATA_PREFIX, content);
                self.extract_script(&wrapped, file_name, lang)
            }
            LangFamily::Script => self.extract_script(content, file_name, lang),
        };

        match &outcome {
            FileOutcome::Extracted { records, .. } => {
                info!("Process file succeeded: {}", file_name);
                debug!(file = file_name, records = records.len(), "extracted");
            }
            FileOutcome::Failed { .. } => info!("Process file failed: {}", file_name),
            FileOutcome::Skipped => {}
        }
        outcome
    }

    fn extract_script(&self, code: &str, file_name: &str, lang: Lang) -> FileOutcome {
        match ScriptExtractor::new(&self.filter, lang).extract(code, file_name, 0) {
            Ok(records) => FileOutcome::Extracted {
                records,
                script_failures: 0,
            },
            Err(ExtractError::ScriptParse { .. }) => FileOutcome::Failed { script_failures: 1 },
            Err(e) => {
                warn!("{}: {}", file_name, e);
                FileOutcome::Failed { script_failures: 0 }
            }
        }
    }
}

/// A markup parse failure fails the file; embedded script failures are
/// carried either way
fn markup_outcome(result: Result<MarkupExtraction>) -> FileOutcome {
    match result {
        Ok(out) => FileOutcome::Extracted {
            records: out.records,
            script_failures: out.script_failures,
        },
        Err(e) => {
            warn!("{}", e);
            FileOutcome::Failed { script_failures: 0 }
        }
    }
}

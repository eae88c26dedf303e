//! Parallel extraction over a file list
//!
//! Files are processed on a rayon pool. Outcomes are collected through an
//! indexed parallel iterator, which keeps input order, and then folded
//! sequentially, so the report is identical to a single-threaded run.

use std::path::PathBuf;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::{ExtractError, Result};
use crate::extract::{ExtractionReport, Extractor, FileOutcome};

/// Extract every file, in parallel, on the global rayon pool
pub fn extract_files_parallel(extractor: &Extractor, files: &[PathBuf]) -> ExtractionReport {
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| extractor.process_file(path))
        .collect();

    outcomes.into_iter().collect()
}

/// Extract every file on a dedicated pool of `jobs` threads
///
/// `None` uses the global pool; a single job runs on the current thread.
pub fn extract_files_with_jobs(
    extractor: &Extractor,
    files: &[PathBuf],
    jobs: Option<usize>,
) -> Result<ExtractionReport> {
    let jobs = match jobs {
        None => return Ok(extract_files_parallel(extractor, files)),
        Some(1) => return Ok(extract_files(extractor, files)),
        Some(n) => n,
    };

    let pool = ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| ExtractError::Config {
            origin: "--jobs".to_string(),
            message: e.to_string(),
        })?;

    Ok(pool.install(|| extract_files_parallel(extractor, files)))
}

/// Extract every file on the current thread
pub fn extract_files(extractor: &Extractor, files: &[PathBuf]) -> ExtractionReport {
    files.iter().map(|path| extractor.process_file(path)).collect()
}

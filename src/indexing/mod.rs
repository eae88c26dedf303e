//! File collection and batch extraction
//!
//! This module provides the batch side of a run: expanding inputs into a
//! file list and driving the extractor over it.
//!
//! # Key Features
//!
//! - **Parallel Processing**: Uses Rayon for multi-threaded extraction
//! - **Deterministic Output**: Records come out in input order regardless of
//!   scheduling
//! - **Error Handling**: Failed files are counted without stopping the batch
//!
//! # Example
//!
//! ```ignore
//! use extract_text::indexing::{collect_files, extract_files_parallel};
//!
//! let files = collect_files(&inputs)?;
//! let report = extract_files_parallel(&extractor, &files);
//!
//! println!("{}", report.summary());
//! ```

mod files;
mod generation;

pub use files::{collect_files, collect_files_recursive, should_skip_path};
pub use generation::{extract_files, extract_files_parallel, extract_files_with_jobs};

//! extract-text: find human-readable text in a Unicode range in source trees
//!
//! This library scans script and markup sources for text containing
//! characters in a configurable Unicode range (CJK ideographs by default) and
//! reports each fragment with its file, line and syntax kind. It uses
//! tree-sitter for parsing and writes CSV (with a byte order mark) or JSON.
//!
//! # Supported Syntaxes
//!
//! - JavaScript, JSX, TypeScript, TSX: string literals
//! - HTML, Vue: text nodes, attribute values and `<script>` string literals
//! - JSON: string values, parsed as a script assignment
//!
//! # Example
//!
//! ```ignore
//! use extract_text::{ExtractConfig, Extractor, FileOutcome};
//!
//! let extractor = Extractor::new(&ExtractConfig::default())?;
//! let outcome = extractor.process_source("hello.js", "alert('你好');");
//!
//! if let FileOutcome::Extracted { records, .. } = outcome {
//!     assert_eq!(records[0].text, "你好");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod detectors;
pub mod error;
pub mod extract;
pub mod indexing;
pub mod lang;
pub mod lines;
pub mod range;
pub mod report;
pub mod schema;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::ExtractConfig;
pub use error::{ExtractError, Result};
pub use extract::{ExtractionReport, Extractor, FileOutcome};
pub use lang::{Lang, LangFamily};
pub use lines::{line_number_at, LineIndex};
pub use range::RangeFilter;
pub use report::{encode_csv, encode_json, write_report};
pub use schema::{MatchRecord, SourceKind};

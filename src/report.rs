//! Report rendering and writing
//!
//! CSV output quotes every text field and leaves numbers bare:
//!
//! ```text
//! "file name","line no","source type","text"
//! "src/a.js",3,"script","你好"
//! ```
//!
//! Embedded quotes are doubled and embedded newlines stay inside the quoted
//! field. When written to a file, the CSV is prefixed with a UTF-8 byte order
//! mark so spreadsheet applications pick the right encoding.

use std::fs;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::{ExtractError, Result};
use crate::schema::MatchRecord;

/// Column labels, in order
pub const FIELDS: [&str; 4] = ["file name", "line no", "source type", "text"];

/// UTF-8 byte order mark
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encode records as CSV
pub fn encode_csv(records: &[MatchRecord]) -> String {
    let mut out = String::new();

    let header: Vec<String> = FIELDS.iter().map(|f| quote(f)).collect();
    out.push_str(&header.join(","));

    for record in records {
        out.push('\n');
        out.push_str(&quote(&record.file_name));
        out.push(',');
        out.push_str(&record.line_no.to_string());
        out.push(',');
        out.push_str(&quote(record.source_kind.as_str()));
        out.push(',');
        out.push_str(&quote(&record.text));
    }

    out
}

/// Encode records as a pretty-printed JSON array
pub fn encode_json(records: &[MatchRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| ExtractError::Encode {
        message: format!("JSON serialization failed: {}", e),
    })
}

/// Render records in the requested format (no byte order mark)
pub fn render(records: &[MatchRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => Ok(encode_csv(records)),
        OutputFormat::Json => encode_json(records),
    }
}

/// Write the report to `path`, creating parent directories as needed
///
/// CSV reports start with [`UTF8_BOM`]; the mark and the content go to the
/// same file.
pub fn write_report(path: &Path, records: &[MatchRecord], format: OutputFormat) -> Result<()> {
    let body = render(records, format)?;

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
    if format == OutputFormat::Csv {
        bytes.extend_from_slice(UTF8_BOM);
    }
    bytes.extend_from_slice(body.as_bytes());

    let write_err = |source: std::io::Error| ExtractError::ReportWrite {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, bytes).map_err(write_err)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

//! Assertion helpers for CLI runs

use std::process::Output;

use extract_text::MatchRecord;

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Assert the run succeeded, showing stderr otherwise
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed with {:?}\nstderr:\n{}",
        output.status.code(),
        stderr(output)
    );
}

pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit status\nstderr:\n{}",
        stderr(output)
    );
}

/// Parse the JSON report printed by `--stdout --format json`
///
/// The summary goes to stderr in that mode, so stdout is pure JSON.
pub fn json_records(output: &Output) -> Vec<MatchRecord> {
    serde_json::from_str(stdout(output).trim()).expect("stdout is a JSON record array")
}

/// `(file, line, kind, text)` tuples for compact comparisons
pub fn tuples(records: &[MatchRecord]) -> Vec<(String, usize, &'static str, String)> {
    records
        .iter()
        .map(|r| {
            (
                r.file_name.replace('\\', "/"),
                r.line_no,
                r.source_kind.as_str(),
                r.text.clone(),
            )
        })
        .collect()
}

pub fn assert_summary(text: &str, success: usize, failed: usize, script_failed: usize) {
    let expected = format!(
        "Totally processed {} files, success: {}, failed: {} (script failed: {})",
        success + failed,
        success,
        failed,
        script_failed
    );
    assert!(
        text.contains(&expected),
        "summary `{}` not found in:\n{}",
        expected,
        text
    );
}

//! CSV and JSON reports agree and are stable across runs

use std::fs;

use extract_text::{encode_csv, MatchRecord};

use crate::common::*;

const BOM: &[u8] = b"\xEF\xBB\xBF";

#[test]
fn test_csv_file_is_bom_prefixed_and_matches_json() {
    let repo = TestRepo::sample_project();

    let output = repo.run(&["src", "--output", "report"]);
    assert_success(&output);
    assert_summary(&stdout(&output), 4, 1, 1);

    // `.csv` is appended to the configured path, and the BOM lands in that same file
    let bytes = fs::read(repo.join("report.csv")).expect("report.csv written");
    assert!(!repo.join("output.csv").exists());
    assert_eq!(&bytes[..3], BOM);
    let csv = String::from_utf8(bytes[3..].to_vec()).unwrap();

    let json_run = repo.run(&["src", "--stdout", "--format", "json"]);
    assert_success(&json_run);
    let records: Vec<MatchRecord> = json_records(&json_run);

    assert_eq!(csv, encode_csv(&records));
    assert!(csv.starts_with("\"file name\",\"line no\",\"source type\",\"text\"\n"));
    assert!(csv.contains("\"src/vendor.min.js\",1,\"script\",\"压缩\""));
}

#[test]
fn test_json_output_file() {
    let repo = TestRepo::sample_project();
    let output = repo.run(&["src/api.js", "--format", "json", "--output", "out/zh.json"]);
    assert_success(&output);

    let text = fs::read_to_string(repo.join("out/zh.json")).expect("json report written");
    let records: Vec<MatchRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(
        tuples(&records),
        vec![("src/api.js".to_string(), 2, "script", "网络错误".to_string())]
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let repo = TestRepo::sample_project();

    let first = repo.run(&["src", "--stdout", "--format", "json", "--jobs", "4"]);
    let second = repo.run(&["src", "--stdout", "--format", "json", "--jobs", "1"]);
    assert_success(&first);
    assert_success(&second);

    assert_eq!(stdout(&first), stdout(&second));
}

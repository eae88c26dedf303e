//! Failure containment and fatal configuration errors

use crate::common::*;

#[test]
fn test_malformed_script_does_not_stop_the_batch() {
    let repo = TestRepo::new()
        .with_file("a_bad.js", "if (x) { alert('坏');")
        .with_file("b_good.js", "alert('好');");
    let output = repo.run(&[".", "--stdout", "--format", "json"]);
    assert_success(&output);

    let records = json_records(&output);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "好");
    assert_summary(&stderr(&output), 1, 1, 1);
}

#[test]
fn test_broken_embedded_script_keeps_the_page() {
    let repo = TestRepo::new().with_file(
        "page.html",
        "<h1>标题</h1>\n<script>\nvar = '不会出现';\n</script>\n<p>段落</p>\n",
    );
    let output = repo.run(&["page.html", "--stdout", "--format", "json"]);
    assert_success(&output);

    assert_eq!(
        tuples(&json_records(&output)),
        vec![
            ("page.html".to_string(), 1, "markup", "标题".to_string()),
            ("page.html".to_string(), 5, "markup", "段落".to_string()),
        ]
    );
    // the page itself succeeded; only the script block failed
    assert_summary(&stderr(&output), 1, 0, 1);
}

#[test]
fn test_invalid_range_is_fatal() {
    let repo = TestRepo::new().with_file("a.js", "alert('好');");
    let output = repo.run(&["a.js", "--range", "z-a"]);
    assert_exit_code(&output, 2);
    assert!(stderr(&output).contains("Invalid char range"));
    assert!(!repo.join("output.csv").exists());
}

#[test]
fn test_invalid_exclude_is_fatal() {
    let repo = TestRepo::new().with_file("a.js", "alert('好');");
    let output = repo.run(&["a.js", "--exclude", "(unclosed"]);
    assert_exit_code(&output, 2);
    assert!(stderr(&output).contains("Invalid regular expression"));
}

#[test]
fn test_bad_config_file_is_fatal() {
    let repo = TestRepo::new()
        .with_file("a.js", "alert('好');")
        .with_file("extract.toml", "suffixes = 3\n");
    let output = repo.run(&["a.js", "--config", "extract.toml"]);
    assert_exit_code(&output, 2);
    assert!(stderr(&output).contains("extract.toml"));
}

#[test]
fn test_missing_input() {
    let repo = TestRepo::new();
    let output = repo.run(&["nope/"]);
    assert_exit_code(&output, 1);
    assert!(stderr(&output).contains("File not found: nope/"));
}

#[test]
fn test_empty_and_unmatched_files_succeed_without_records() {
    let repo = TestRepo::new()
        .with_file("empty.js", "")
        .with_file("ascii.html", "<p title=\"x\">hello</p>")
        .with_file("blank.vue", "<template>\n  <div>   </div>\n</template>\n<script>\n</script>\n");
    let output = repo.run(&[".", "--stdout", "--format", "json"]);
    assert_success(&output);

    assert!(json_records(&output).is_empty());
    assert_summary(&stderr(&output), 3, 0, 0);
}

#[test]
fn test_duplicates_are_kept() {
    let repo = TestRepo::new()
        .with_file("a.js", "f('重复');\nf('重复');")
        .with_file("b.js", "f('重复');");
    let output = repo.run(&[".", "--stdout", "--format", "json"]);
    assert_success(&output);

    assert_eq!(json_records(&output).len(), 3);
}

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Stdio};

fn run_tool(file: &Path, input: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_text_file_tool");
    let mut child = Command::new(exe)
        .args(["--file", file.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn failed");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait failed");
    assert!(out.status.success());
    String::from_utf8(out.stdout).expect("utf8 output")
}

#[test]
fn seeds_sample_content_and_reads_it_back() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.txt");

    let out = run_tool(&file, "1\n\n7\n");
    assert!(out.contains("  - File opened successfully ("));
    assert!(out.contains("Rust programming is safe and efficient."));
    assert!(out.contains("\nExiting. Goodbye!"));
    assert!(file.exists());
}

#[test]
fn write_truncates_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.txt");

    let out = run_tool(&file, "2\nhello world\nEOF\n1\n\n7\n");
    assert!(out.contains("  - File written successfully."));
    assert!(out.contains("hello world"));
    assert!(!out.contains("Rust programming"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello world\n");
}

#[test]
fn append_keeps_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.txt");

    let out = run_tool(&file, "3\nextra line\nEOF\n1\n\n7\n");
    assert!(out.contains("  - Content appended successfully."));
    assert!(out.contains("Rust programming is safe and efficient."));
    assert!(out.contains("extra line"));
}

#[test]
fn search_reports_lines_and_total() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.txt");

    let out = run_tool(&file, "4\nis\n7\n");
    assert!(out.contains("=== Search Results for \"is\" ==="));
    assert!(out.contains("  - Line 2: "));
    assert!(out.contains("  - Line 3: "));
    assert!(out.contains("  - Total occurrences: 3"));
}

#[test]
fn replace_rewrites_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.txt");

    let out = run_tool(&file, "5\nRust\nGo\n7\n");
    assert!(out.contains("  - Replacements made: 1"));
    assert!(out.contains("  - File updated successfully."));
    let content = std::fs::read_to_string(&file).unwrap();
    assert!(content.contains("Go programming is safe and efficient."));
    assert!(!content.contains("Rust"));
}

#[test]
fn statistics_report_known_sample_counts() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.txt");

    let out = run_tool(&file, "6\n7\n");
    assert!(out.contains("  - Total Words:      22"));
    assert!(out.contains("  - Total Lines:      3"));
    assert!(out.contains("  - Avg Words/Line:   7.33"));
    assert!(out.contains("  - SHA-256:          "));
}

#[test]
fn reading_a_missing_path_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.txt");
    let missing = dir.path().join("no_such_file.txt");

    let out = run_tool(&file, &format!("1\n{}\n7\n", missing.display()));
    assert!(out.contains("Error: Could not open file for reading."));
    assert!(out.contains("\nExiting. Goodbye!"));
}

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_analyzer(file: &Path, seed: u64, input: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_log_analyzer");
    let mut child = Command::new(exe)
        .arg("--file")
        .arg(file)
        .args(["--seed", &seed.to_string()])
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
    child.wait_with_output().expect("wait failed")
}

#[test]
fn summary_counts_every_generated_entry() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("system.log");

    let out = run_analyzer(&file, 42, "1\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("=== Log Summary ==="));
    // 2 fixed startup lines plus 300 generated entries.
    assert!(stdout.contains("  - Total entries processed: 302"));
    assert!(stdout.contains("  Distribution by Level:"));
    assert!(stdout.contains("INFO"));
    assert!(stdout.contains("CRITICAL"));
    assert!(stdout.contains('\u{2588}'));
}

#[test]
fn summary_is_deterministic_per_seed() {
    let dir = tempfile::tempdir().unwrap();

    let first = run_analyzer(&dir.path().join("a.log"), 7, "1\n6\n");
    let second = run_analyzer(&dir.path().join("b.log"), 7, "1\n6\n");
    assert!(first.status.success());
    assert!(second.status.success());

    let a = String::from_utf8(first.stdout).unwrap();
    let b = String::from_utf8(second.stdout).unwrap();
    // Identical apart from the target path banner.
    let a_summary: Vec<&str> = a.lines().filter(|l| !l.contains("a.log")).collect();
    let b_summary: Vec<&str> = b.lines().filter(|l| !l.contains("b.log")).collect();
    assert_eq!(a_summary, b_summary);
}

#[test]
fn level_filter_caps_the_listing_at_ten_rows() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("system.log");

    let out = run_analyzer(&file, 42, "2\nINFO\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("=== Filtering by 'INFO' (Showing max 10) ==="));
    assert!(stdout.contains("total entries for level 'INFO'."));
    // Half the generated entries are INFO, far more than the cap.
    assert_eq!(stdout.matches("\n  [2026-01-03 ").count(), 10);
}

#[test]
fn level_filter_ignores_case() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("system.log");

    let out = run_analyzer(&file, 42, "2\nerror\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("=== Filtering by 'error' (Showing max 10) ==="));
    assert!(stdout.contains("total entries for level 'error'."));
    assert!(!stdout.contains("  - Found 0 total entries"));
}

#[test]
fn keyword_search_finds_the_startup_line() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("system.log");

    let out = run_analyzer(&file, 42, "3\nstartup\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("=== Context Search: \"startup\" (Showing max 10) ==="));
    assert!(stdout.contains("  [2026-01-03 00:05:12] [INFO]: System startup initiated"));
    assert!(stdout.contains("  - Total keyword matches found: 1"));
}

#[test]
fn temporal_analysis_flags_the_burst_hour() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("system.log");

    let out = run_analyzer(&file, 42, "4\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("=== Temporal Analysis (Anomalies by Hour) ==="));
    assert!(stdout.contains("\u{26a0} PEAK"));
    // The generator forces a mid-run burst into hour 14.
    assert!(stdout.contains("  - Recommendation: Review logs between 14:00 and 14:59"));
    assert!(stdout.contains("  - Highest anomaly activity detected in this range."));
}

#[test]
fn regenerate_rewrites_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("system.log");

    let out = run_analyzer(&file, 42, "5\n1\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("  - New dummy log file generated."));
    assert!(stdout.contains("  - Total entries processed: 302"));
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("missing").join("system.log");

    let out = run_analyzer(&file, 42, "1\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let stderr = String::from_utf8(out.stderr).unwrap();

    assert!(stderr.contains("Warning: could not seed"));
    assert!(stdout.contains("' not found."));
}

#[test]
fn garbage_menu_input_loops_back() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("system.log");

    let out = run_analyzer(&file, 42, "wat\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Error: Invalid input."));
    assert!(stdout.contains("Exiting. Goodbye!"));
}

use std::io::Write as _;
use std::process::{Command, Stdio};

fn run_analyzer(input: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_text_stats");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
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
fn full_report_on_a_pangram() {
    let out = run_analyzer("The quick brown fox jumps over the lazy dog.\nEND\n");
    assert!(out.contains("Total characters: 45"));
    assert!(out.contains("Words: 9"));
    assert!(out.contains("Sentences: 1"));
    assert!(out.contains("Lines: 1"));
    assert!(out.contains("Average word length: 3.89 characters"));
    assert!(out.contains("Longest word: \"quick\" (5 characters)"));
    assert!(out.contains("Shortest word: \"The\" (3 characters)"));
    assert!(out.contains("Letters: 35 (77.78%)"));
    assert!(out.contains("a: 1, e: 3, i: 1, o: 4, u: 2"));
    assert!(out.contains("Is it a pangram? YES \u{2713}"));
}

#[test]
fn non_pangram_says_no() {
    let out = run_analyzer("hello world\nEND\n");
    assert!(out.contains("Is it a pangram? NO"));
    assert!(!out.contains("(Contains all 26 letters of the alphabet)"));
}

#[test]
fn empty_input_reports_zeros() {
    let out = run_analyzer("END\n");
    assert!(out.contains("Total characters: 0"));
    assert!(out.contains("Words: 0"));
    // The word-length block only appears when there are words.
    assert!(!out.contains("Average word length:"));
}

#[test]
fn eof_without_end_marker_still_reports() {
    let out = run_analyzer("just some text");
    assert!(out.contains("Words: 3"));
}

#[test]
fn multi_line_input_accumulates() {
    let out = run_analyzer("One. Two!\nThree?\nEND\n");
    assert!(out.contains("Sentences: 3"));
    assert!(out.contains("Lines: 2"));
}

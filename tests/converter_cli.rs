use std::io::Write as _;
use std::process::{Command, Stdio};

fn run_converter(input: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_unit_converter");
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
fn boiling_point_to_fahrenheit() {
    let out = run_converter("1\n100\nC\nF\n5\n");
    assert!(out.contains("  - Result: 212.00 F"));
    assert!(out.contains("Thank you for using the converter!"));
}

#[test]
fn kilometers_to_meters() {
    let out = run_converter("2\n1\nK\nM\n5\n");
    assert!(out.contains("  - Result: 1000.00 M"));
}

#[test]
fn hours_to_seconds() {
    let out = run_converter("4\n2\nH\nS\n5\n");
    assert!(out.contains("  - Result: 7200.00 S"));
}

#[test]
fn unknown_unit_is_reported() {
    let out = run_converter("1\n0\nC\nX\n5\n");
    assert!(out.contains("Error: Invalid unit selected."));
}

#[test]
fn lowercase_units_are_accepted() {
    let out = run_converter("3\n1\nk\np\n5\n");
    assert!(out.contains("  - Result: 2.20 p"));
}

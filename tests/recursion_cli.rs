use std::io::Write as _;
use std::process::{Command, Stdio};

fn run_bench(input: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_recursion_bench");
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
fn factorial_compares_both_methods() {
    let out = run_bench("1\n10\n5\n");
    assert!(out.contains("Recursive method:"));
    assert!(out.contains("Iterative method:"));
    assert_eq!(out.matches("  - Result = 3628800").count(), 2);
    assert!(out.contains("  - Recursive calls: 10"));
    assert!(out.contains("  - Iterations: 9"));
    assert!(out.contains("Thank you for using the comparison tool!"));
}

#[test]
fn fibonacci_agrees_across_methods() {
    // Term 20 of the 0-based sequence is F(19).
    let out = run_bench("2\n20\n5\n");
    assert_eq!(out.matches("  - Result = 4181").count(), 2);
}

#[test]
fn power_handles_fractional_base() {
    let out = run_bench("4\n2.5\n3\n5\n");
    assert_eq!(out.matches("  - Result = 16").count(), 2);
}

#[test]
fn negative_terms_are_rejected() {
    let out = run_bench("1\n-3\n5\n");
    assert!(out.contains("Error: Operation not defined for negative values."));
    assert!(out.contains("Thank you for using the comparison tool!"));
}

#[test]
fn comparison_always_prints_a_recommendation() {
    let out = run_bench("3\n1000\n5\n");
    assert!(out.contains("Comparison:"));
    assert!(out.contains("  - Recommendation:"));
}

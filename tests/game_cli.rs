use std::io::Write as _;
use std::process::{Command, Stdio};

fn run_game(args: &[&str], input: &str) -> String {
    let exe = env!("CARGO_BIN_EXE_guessing_game");
    let mut child = Command::new(exe)
        .args(args)
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
fn exhausting_attempts_loses_the_round() {
    // Zero is outside 1-100 so it can never match the secret.
    let input = "1\n0\n0\n0\n0\n0\n0\n0\n2\n";
    let out = run_game(&["--seed", "42"], input);
    assert!(out.contains("Secret number generated..."));
    assert!(out.contains("Hint: The number is HIGHER"));
    assert!(out.contains("GAME OVER! The number was:"));
    assert!(out.contains("- Games played: 1"));
    assert!(out.contains("- Victories: 0"));
    assert!(out.contains("- Average attempts: 7.0"));
    assert!(out.contains("Thank you for playing!"));
}

#[test]
fn seeded_runs_repeat_the_same_secret() {
    let input = "1\n0\n0\n0\n0\n0\n0\n0\n2\n";
    let first = run_game(&["--seed", "7"], input);
    let second = run_game(&["--seed", "7"], input);
    assert_eq!(first, second);
}

#[test]
fn invalid_guess_does_not_cost_an_attempt() {
    let input = "1\nabc\n0\n0\n0\n0\n0\n0\n0\n2\n";
    let out = run_game(&["--seed", "3"], input);
    assert!(out.contains("Error: Invalid input. Please try again."));
    // Still exactly seven scored attempts.
    assert!(out.contains("Attempt 7/7: "));
    assert!(out.contains("GAME OVER!"));
}

#[test]
fn menu_exit_without_playing() {
    let out = run_game(&[], "2\n");
    assert!(out.contains("=== Smart Guessing Game ==="));
    assert!(out.contains("Thank you for playing!"));
}

use std::io::Write as _;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_manager(file: &Path, input: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_csv_manager");
    let mut child = Command::new(exe)
        .arg("--file")
        .arg(file)
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
fn seeded_file_lists_four_employees() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("employees.csv");

    let out = run_manager(&file, "1\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("=== Employee Records ==="));
    assert!(stdout.contains("ID    | Name                 | Department      | Salary"));
    assert!(stdout.contains("101   | Ada Lovelace         | Engineering     | $125000.00"));
    assert!(stdout.contains("104   | Edgar Codd           | Database        | $115000.75"));
    assert!(stdout.contains("  - Total valid records parsed: 4"));
}

#[test]
fn added_record_shows_up_in_the_listing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("employees.csv");

    let input = "2\n105\nBarbara Liskov\nLanguages\n99000.50\n1\n6\n";
    let out = run_manager(&file, input);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("--- Add New Record ---"));
    assert!(stdout.contains("  - Record added successfully to"));
    assert!(stdout.contains("105   | Barbara Liskov       | Languages       | $99000.50"));
    assert!(stdout.contains("  - Total valid records parsed: 5"));
}

#[test]
fn commas_in_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("employees.csv");

    let out = run_manager(&file, "2\n105\nDoe, Jane\n1\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("Error: Commas not allowed in input for this simple CSV format."));
    // The aborted add must not have written a partial row.
    assert!(stdout.contains("  - Total valid records parsed: 4"));
}

#[test]
fn search_reports_the_full_record() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("employees.csv");

    let out = run_manager(&file, "3\n103\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("=== Record Found ==="));
    assert!(stdout.contains("  - ID:         103"));
    assert!(stdout.contains("  - Name:       Grace Hopper"));
    assert!(stdout.contains("  - Department: Management"));
    assert!(stdout.contains("  - Salary:     $145000.00"));
}

#[test]
fn search_miss_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("employees.csv");

    let out = run_manager(&file, "3\n999\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Error: Record not found."));
}

#[test]
fn statistics_match_the_seed_payroll() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("employees.csv");

    let out = run_manager(&file, "4\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("=== CSV Statistics ==="));
    assert!(stdout.contains("  - Total Employees: 4"));
    assert!(stdout.contains("  - Avg Salary:      $130000.31"));
    assert!(stdout.contains("  - Total Payroll:   $520001.25"));
    assert!(stdout.contains("  - Highest Earner:  Grace Hopper ($145000.00)"));
}

#[test]
fn reset_restores_the_dummy_rows() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("employees.csv");

    let input = "2\n105\nBarbara Liskov\nLanguages\n99000.50\n5\n1\n6\n";
    let out = run_manager(&file, input);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("  - CSV file reset to default dummy data."));
    assert!(stdout.contains("  - Total valid records parsed: 4"));
    assert!(!stdout.contains("Barbara Liskov       |"));
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("employees.csv");
    std::fs::write(
        &file,
        "ID,Name,Department,Salary\n\
         201,Alice,QA,50000.00\n\
         not,a,valid\n\
         202,Bob,Ops,60000.00\n",
    )
    .unwrap();

    let out = run_manager(&file, "1\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("201   | Alice"));
    assert!(stdout.contains("202   | Bob"));
    assert!(stdout.contains("  - Total valid records parsed: 2"));
}

#[test]
fn unseedable_path_warns_and_reads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("missing").join("employees.csv");

    let out = run_manager(&file, "1\n6\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let stderr = String::from_utf8(out.stderr).unwrap();

    assert!(stderr.contains("Warning: could not seed"));
    assert!(stdout.contains("Error: CSV file not found."));
}

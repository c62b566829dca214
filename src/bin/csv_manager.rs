//! CSV employee table manager with parsing statistics.

use clap::Parser;
use practicum::csvstore::{self, Employee};
use practicum::prompt::{Input, Prompt};
use practicum::PracticumError;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// CSV file parser and manager.
///
/// Maintains a small employee table in CSV form: listing, appending,
/// searching and payroll statistics. The file is seeded with demo rows
/// on first run.
#[derive(Parser)]
struct Args {
    /// Employee CSV file
    #[arg(long, default_value = "employees.csv")]
    file: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Err(err) = csvstore::ensure_seeded(&args.file) {
        eprintln!("Warning: could not seed '{}': {err}", args.file.display());
    }

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    loop {
        println!("=== CSV File Parser & Manager ===\n");
        println!("File: {}\n", args.file.display());
        println!("1. Display All Records");
        println!("2. Add New Record");
        println!("3. Search Record by ID");
        println!("4. Calculate Statistics");
        println!("5. Reset/Create Dummy CSV");
        println!("6. Exit");
        let option = match prompt.read_value::<i32>("Option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please enter a valid value.\n");
                continue;
            }
            Input::Eof => break,
        };

        if option == 6 {
            println!("\nExiting. Goodbye!");
            break;
        }

        match option {
            1 => display_all(&args.file),
            2 => add_record(&mut prompt, &args.file)?,
            3 => search_record(&mut prompt, &args.file)?,
            4 => calculate_stats(&args.file),
            5 => reset_file(&args.file),
            _ => println!("Error: Invalid option selected.\n"),
        }
    }

    Ok(())
}

fn load_or_report(path: &Path) -> Option<Vec<Employee>> {
    match csvstore::load_employees(path) {
        Ok(employees) => Some(employees),
        Err(PracticumError::Io(_)) => {
            println!("Error: CSV file not found.\n");
            None
        }
        Err(e) => {
            println!("Error: {e}.\n");
            None
        }
    }
}

fn display_all(path: &Path) {
    let employees = match load_or_report(path) {
        Some(employees) => employees,
        None => return,
    };

    println!("\n=== Employee Records ===");
    println!(
        "{:<5} | {:<20} | {:<15} | {:<10}",
        "ID", "Name", "Department", "Salary"
    );
    println!("{}", "-".repeat(60));

    for emp in &employees {
        println!(
            "{:<5} | {:<20} | {:<15} | ${:<9.2}",
            emp.id, emp.name, emp.department, emp.salary
        );
    }
    if employees.is_empty() {
        println!("  (No valid records found in file)");
    }

    println!("{}", "-".repeat(60));
    println!("  - Total valid records parsed: {}\n", employees.len());
}

fn add_record<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, path: &Path) -> io::Result<()> {
    println!("\n--- Add New Record ---");

    let id = match prompt.read_value::<i32>("ID: ")? {
        Input::Value(v) => v,
        Input::Invalid => {
            println!("Error: Invalid input. Please enter a valid value.\n");
            return Ok(());
        }
        Input::Eof => return Ok(()),
    };

    let name = match prompt.read_line("Name: ")? {
        Some(name) => name,
        None => return Ok(()),
    };
    if name.contains(',') {
        println!("Error: Commas not allowed in input for this simple CSV format.\n");
        return Ok(());
    }

    let department = match prompt.read_line("Department: ")? {
        Some(department) => department,
        None => return Ok(()),
    };
    if department.contains(',') {
        println!("Error: Commas not allowed in input for this simple CSV format.\n");
        return Ok(());
    }

    let salary = match prompt.read_value::<f32>("Salary: ")? {
        Input::Value(v) => v,
        Input::Invalid => {
            println!("Error: Invalid input. Please enter a valid value.\n");
            return Ok(());
        }
        Input::Eof => return Ok(()),
    };

    let emp = Employee { id, name, department, salary };
    if csvstore::append_employee(path, &emp).is_err() {
        println!("Error: Could not open or create CSV file.\n");
        return Ok(());
    }

    println!("\n  - Record added successfully to {}\n", path.display());
    Ok(())
}

fn search_record<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, path: &Path) -> io::Result<()> {
    let search_id = match prompt.read_value::<i32>("\nEnter Employee ID to search: ")? {
        Input::Value(v) => v,
        Input::Invalid => {
            println!("Error: Invalid input. Please enter a valid value.\n");
            return Ok(());
        }
        Input::Eof => return Ok(()),
    };

    let employees = match load_or_report(path) {
        Some(employees) => employees,
        None => return Ok(()),
    };

    match employees.iter().find(|e| e.id == search_id) {
        Some(emp) => {
            println!("\n=== Record Found ===");
            println!("  - ID:         {}", emp.id);
            println!("  - Name:       {}", emp.name);
            println!("  - Department: {}", emp.department);
            println!("  - Salary:     ${:.2}\n", emp.salary);
        }
        None => println!("Error: Record not found.\n"),
    }
    Ok(())
}

fn calculate_stats(path: &Path) {
    let employees = match load_or_report(path) {
        Some(employees) => employees,
        None => return,
    };

    println!("\n=== CSV Statistics ===");
    match csvstore::salary_stats(&employees) {
        Some(stats) => {
            println!("  - Total Employees: {}", stats.count);
            println!("  - Avg Salary:      ${:.2}", stats.average);
            println!("  - Total Payroll:   ${:.2}", stats.total);
            println!(
                "  - Highest Earner:  {} (${:.2})\n",
                stats.top_earner, stats.top_salary
            );
        }
        None => println!("  - No data available to calculate statistics.\n"),
    }
}

fn reset_file(path: &Path) {
    let _ = std::fs::remove_file(path);
    if csvstore::ensure_seeded(path).is_err() {
        println!("Error: Could not open or create CSV file.\n");
        return;
    }
    println!("\n  - CSV file reset to default dummy data.\n");
}

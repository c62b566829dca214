//! Collect student grades and report group statistics.

use clap::Parser;
use practicum::grades::{Roster, Student, MAX_STUDENTS, NUM_GRADES};
use practicum::io_utils::simple_cli_error;
use practicum::prompt::{Input, Prompt};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Student grade tracker.
///
/// Prompts for a group of students and prints per-student averages plus
/// group statistics. With --roster, an existing file is loaded and reported
/// instead of prompting, and a freshly entered group is saved there.
#[derive(Parser)]
struct Args {
    /// Roster file to load from or save to
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    println!("=== Student Grade System ===\n");

    let roster = match &args.roster {
        Some(path) if path.exists() => {
            let roster = Roster::load(path).map_err(|e| {
                simple_cli_error(&format!(
                    "Error reading roster '{}': {e}. Delete the file to re-enter the group.",
                    path.display()
                ))
            })?;
            eprintln!("Loaded {} students from {}", roster.students.len(), path.display());
            roster
        }
        _ => {
            let roster = collect_roster(&mut prompt)?;
            if let Some(path) = &args.roster {
                roster.save(path).map_err(|e| {
                    simple_cli_error(&format!(
                        "Error writing roster '{}': {e}. Check permissions or free up disk space.",
                        path.display()
                    ))
                })?;
                eprintln!("Saved roster to {}", path.display());
            }
            roster
        }
    };

    show_students(&roster);
    show_statistics(&roster);
    Ok(())
}

fn collect_roster<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
) -> Result<Roster, Box<dyn std::error::Error>> {
    let count = match prompt.read_value::<i64>("Number of students (max 50): ")? {
        Input::Value(v) if (1..=MAX_STUDENTS as i64).contains(&v) => v as usize,
        _ => return Err(simple_cli_error("Error: Max students is 50").into()),
    };

    let mut students = Vec::with_capacity(count);
    for i in 0..count {
        let name = loop {
            match prompt.read_line(&format!("Enter student name {}: ", i + 1))? {
                None => return Err(simple_cli_error("Error: Unexpected end of input").into()),
                Some(line) if !line.is_empty() => break line,
                Some(_) => {}
            }
        };

        let mut grades = [0.0; NUM_GRADES];
        let mut j = 0;
        while j < NUM_GRADES {
            match prompt.read_value::<f64>(&format!("  Enter grade (0-100) {}: ", j + 1))? {
                Input::Value(g) if (0.0..=100.0).contains(&g) => {
                    grades[j] = g;
                    j += 1;
                }
                Input::Eof => {
                    return Err(simple_cli_error("Error: Unexpected end of input").into())
                }
                _ => println!("Error: Invalid input. Try again.\n"),
            }
        }
        students.push(Student { name, grades });
    }
    Ok(Roster { students })
}

fn show_students(roster: &Roster) {
    println!("\n=== Students ===\n");
    for (i, s) in roster.students.iter().enumerate() {
        println!("Student {}:", i + 1);
        println!("  - Name: {}", s.name);
        print!("  - Grades (5): ");
        for g in &s.grades {
            print!("{g:.0} ");
        }
        println!("\n  - Average: {:.2} - {}\n", s.average(), s.status().label());
    }
}

fn show_statistics(roster: &Roster) {
    let summary = match roster.summary() {
        Some(s) => s,
        None => return,
    };
    let best = &roster.students[summary.best];
    let worst = &roster.students[summary.worst];

    println!("\n=== General Statistics ===\n");
    println!("Group average: {:.2}", summary.group_average);
    println!("Best student: {} ({:.2})", best.name, best.average());
    println!("Worst student: {} ({:.2})", worst.name, worst.average());
    println!(
        "Pass rate: {:.2}% ({}/{})",
        summary.pass_rate,
        summary.pass_count,
        roster.students.len()
    );

    if !summary.passing_desc.is_empty() {
        println!("\nStudents who passed:");
        for (rank, &idx) in summary.passing_desc.iter().enumerate() {
            let s = &roster.students[idx];
            println!("  {}. {} - {:.2}", rank + 1, s.name, s.average());
        }
    }
}

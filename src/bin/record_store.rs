//! Binary CRUD store over fixed 32-byte student records.

use clap::Parser;
use practicum::io_utils::data_file_error;
use practicum::prompt::{Input, Prompt};
use practicum::records::{self, StudentRecord, RECORD_SIZE};
use practicum::PracticumError;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Binary file manager for fixed-size student records.
///
/// Every record occupies exactly 32 bytes, so lookups seek straight to
/// a record's offset and updates overwrite it in place.
#[derive(Parser)]
struct Args {
    /// Record data file (.dat)
    #[arg(long, default_value = "students.dat")]
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
    if args.file.extension().and_then(|e| e.to_str()) != Some("dat") {
        return Err(data_file_error(&args.file).into());
    }

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    loop {
        println!("=== Binary File Manager (CRUD) ===\n");
        println!("File: {}\n", args.file.display());
        println!("1. Create Record");
        println!("2. Read All Records");
        println!("3. Search Record by ID");
        println!("4. Update Record");
        println!("5. Delete Record");
        println!("6. Statistics");
        println!("7. Exit");
        let option = match prompt.read_value::<i32>("Option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please enter a valid value.\n");
                continue;
            }
            Input::Eof => break,
        };

        if option == 7 {
            println!("\nExiting. Goodbye!");
            break;
        }

        match option {
            1 => create_record(&mut prompt, &args.file)?,
            2 => read_all_records(&args.file),
            3 => search_record(&mut prompt, &args.file)?,
            4 => update_record(&mut prompt, &args.file)?,
            5 => delete_record(&mut prompt, &args.file)?,
            6 => show_statistics(&args.file),
            _ => println!("Error: Invalid option selected.\n"),
        }
    }

    Ok(())
}

/// Reads a value off the prompt, reporting invalid input the way every
/// other menu action does. `None` means the operation should abort.
fn read_field<T, R, W>(prompt: &mut Prompt<R, W>, label: &str) -> io::Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    match prompt.read_value::<T>(label)? {
        Input::Value(v) => Ok(Some(v)),
        Input::Invalid => {
            println!("Error: Invalid input. Please enter a valid value.\n");
            Ok(None)
        }
        Input::Eof => Ok(None),
    }
}

fn create_record<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, path: &Path) -> io::Result<()> {
    println!("\n--- Create New Record ---");

    let id = match read_field::<i32, _, _>(prompt, "ID: ")? {
        Some(id) => id,
        None => return Ok(()),
    };
    let name = match prompt.read_line("Name: ")? {
        Some(name) => name,
        None => return Ok(()),
    };
    let age = match read_field::<i32, _, _>(prompt, "Age: ")? {
        Some(age) => age,
        None => return Ok(()),
    };
    let gpa = match read_field::<f32, _, _>(prompt, "GPA: ")? {
        Some(gpa) => gpa,
        None => return Ok(()),
    };

    let record = StudentRecord::new(id, &name, age, gpa);
    if records::append_record(path, &record).is_err() {
        println!("Error: Could not open file for writing.\n");
        return Ok(());
    }

    println!("\n  - Record saved successfully to {}\n", path.display());
    Ok(())
}

fn load_or_report(path: &Path) -> Option<Vec<StudentRecord>> {
    match records::load_records(path) {
        Ok(records) => Some(records),
        Err(PracticumError::Io(_)) => {
            println!("Error: Data file not found or empty.\n");
            None
        }
        Err(e) => {
            println!("Error: {e}.\n");
            None
        }
    }
}

fn read_all_records(path: &Path) {
    let all = match load_or_report(path) {
        Some(all) => all,
        None => return,
    };

    println!("\n--- All Records ({}) ---", path.display());
    for (i, r) in all.iter().enumerate() {
        println!(
            "  [{}] ID: {:<5} | Name: {:<15} | Age: {:<3} | GPA: {:.1}",
            i + 1,
            r.id,
            r.name(),
            r.age,
            r.gpa
        );
    }
    if all.is_empty() {
        println!("  (No records found)");
    }

    println!(
        "\n  - Total: {} records ({} bytes)\n",
        all.len(),
        all.len() * RECORD_SIZE
    );
}

fn search_record<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, path: &Path) -> io::Result<()> {
    let search_id = match read_field::<i32, _, _>(prompt, "\nEnter ID to search: ")? {
        Some(id) => id,
        None => return Ok(()),
    };

    let all = match load_or_report(path) {
        Some(all) => all,
        None => return Ok(()),
    };

    match all.iter().position(|r| r.id == search_id) {
        Some(index) => {
            let r = &all[index];
            println!("\n=== Record Found ===");
            println!("  - Name: {}", r.name());
            println!("  - Age:  {}", r.age);
            println!("  - GPA:  {:.1}", r.gpa);
            println!("  - File Position: byte {}\n", index * RECORD_SIZE);
        }
        None => println!("Error: Record not found.\n"),
    }
    Ok(())
}

fn update_record<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, path: &Path) -> io::Result<()> {
    let update_id = match read_field::<i32, _, _>(prompt, "\nEnter ID to update: ")? {
        Some(id) => id,
        None => return Ok(()),
    };

    let all = match load_or_report(path) {
        Some(all) => all,
        None => return Ok(()),
    };

    let index = match all.iter().position(|r| r.id == update_id) {
        Some(index) => index,
        None => {
            println!("Error: Record not found.\n");
            return Ok(());
        }
    };

    let mut record = all[index];
    println!("Record found. Current GPA: {:.1}", record.gpa);
    let new_gpa = match read_field::<f32, _, _>(prompt, "New GPA: ")? {
        Some(gpa) => gpa,
        None => return Ok(()),
    };

    record.gpa = new_gpa;
    if records::overwrite_record(path, index, &record).is_err() {
        println!("Error: Could not open file for writing.\n");
        return Ok(());
    }

    println!("\n  - Record updated successfully.\n");
    Ok(())
}

fn delete_record<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, path: &Path) -> io::Result<()> {
    let delete_id = match read_field::<i32, _, _>(prompt, "\nEnter ID to delete: ")? {
        Some(id) => id,
        None => return Ok(()),
    };

    let all = match load_or_report(path) {
        Some(all) => all,
        None => return Ok(()),
    };

    let kept: Vec<StudentRecord> = all.iter().filter(|r| r.id != delete_id).copied().collect();
    if kept.len() == all.len() {
        println!("Error: Record not found.\n");
        return Ok(());
    }

    if records::store_records(path, &kept).is_err() {
        println!("Error: Could not open file for writing.\n");
        return Ok(());
    }

    println!("\n  - Record deleted successfully.");
    println!("  - Remaining records: {}\n", kept.len());
    Ok(())
}

fn show_statistics(path: &Path) {
    let all = match load_or_report(path) {
        Some(all) => all,
        None => return,
    };

    println!("\n=== Statistics for {} ===", path.display());
    match records::averages(&all) {
        Some((avg_gpa, avg_age)) => {
            println!("  - File Size:       {} bytes", all.len() * RECORD_SIZE);
            println!("  - Total Records:   {}", all.len());
            println!("  - Size per Record: {RECORD_SIZE} bytes");
            println!("  - Average GPA:     {avg_gpa:.2}");
            println!("  - Average Age:     {avg_age:.2} years\n");
        }
        None => println!("  - No records to analyze.\n"),
    }
}

//! Interactive text file processor: read, write, search, replace, stats.

use clap::Parser;
use practicum::prompt::{Input, Prompt};
use practicum::textfile;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Text file processor.
///
/// Menu-driven tool for reading, writing, searching and rewriting a
/// working text file. The file is seeded with sample content on first
/// run so every menu option has something to operate on.
#[derive(Parser)]
struct Args {
    /// Working text file
    #[arg(long, default_value = "sample.txt")]
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
    if let Err(err) = textfile::ensure_sample(&args.file) {
        eprintln!("Warning: could not seed '{}': {err}", args.file.display());
    }

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    loop {
        println!("=== Text File Processor ===\n");
        println!("1. Read File");
        println!("2. Write/Create File");
        println!("3. Append Content");
        println!("4. Search Word");
        println!("5. Replace Word");
        println!("6. File Statistics");
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
            1 => read_file(&mut prompt, &args.file)?,
            2 => write_file(&mut prompt, &args.file, false)?,
            3 => write_file(&mut prompt, &args.file, true)?,
            4 => search_word(&mut prompt, &args.file)?,
            5 => replace_word(&mut prompt, &args.file)?,
            6 => show_statistics(&args.file),
            _ => println!("Error: Invalid option selected.\n"),
        }
    }

    Ok(())
}

fn read_file<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, default: &Path) -> io::Result<()> {
    let label = format!(
        "\nEnter file path (leave empty for default '{}'): ",
        default.display()
    );
    let path = match prompt.read_line(&label)? {
        Some(line) if !line.is_empty() => PathBuf::from(line),
        Some(_) => default.to_path_buf(),
        None => return Ok(()),
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => {
            println!("Error: Could not open file for reading.\n");
            return Ok(());
        }
    };

    println!("\n  - File opened successfully ({} bytes)\n", content.len());
    println!("=== Content of {} ===", path.display());
    print!("{content}");
    println!("\n=========================\n");
    Ok(())
}

fn write_file<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    path: &Path,
    append: bool,
) -> io::Result<()> {
    if append {
        println!("\n--- Append Content ---");
    } else {
        println!("\n--- Write/Create File ---");
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path);
    let mut file = match file {
        Ok(file) => file,
        Err(_) => {
            println!("Error: Could not create or open file for writing.\n");
            return Ok(());
        }
    };

    let verb = if append { "append" } else { "write" };
    println!(
        "Enter content to {verb} to '{}' (Type 'EOF' on a new line to stop):",
        path.display()
    );
    loop {
        match prompt.read_line("> ")? {
            Some(line) if line == "EOF" => break,
            Some(line) => writeln!(file, "{line}")?,
            None => break,
        }
    }

    if append {
        println!("\n  - Content appended successfully.\n");
    } else {
        println!("\n  - File written successfully.\n");
    }
    Ok(())
}

fn search_word<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, path: &Path) -> io::Result<()> {
    let word = match prompt.read_line("\nEnter word to search for: ")? {
        Some(word) if !word.is_empty() => word,
        Some(_) => {
            println!("Error: Invalid input. Please enter a valid value.\n");
            return Ok(());
        }
        None => return Ok(()),
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            println!("Error: Could not open file for reading.\n");
            return Ok(());
        }
    };

    let (lines, total) = textfile::search_lines(&content, &word);
    println!("\n=== Search Results for \"{word}\" ===");
    for (number, line) in lines {
        println!("  - Line {number}: {line}");
    }
    println!("\n  - Total occurrences: {total}\n");
    Ok(())
}

fn replace_word<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, path: &Path) -> io::Result<()> {
    let old = match prompt.read_line("\nEnter word to replace: ")? {
        Some(word) if !word.is_empty() => word,
        Some(_) => {
            println!("Error: Invalid input. Please enter a valid value.\n");
            return Ok(());
        }
        None => return Ok(()),
    };
    let new = match prompt.read_line("Enter new word: ")? {
        Some(word) => word,
        None => return Ok(()),
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            println!("Error: Could not open file for reading.\n");
            return Ok(());
        }
    };

    let (updated, replacements) = textfile::replace_text(&content, &old, &new);
    if textfile::rewrite(path, &updated).is_err() {
        println!("Error: Could not create or open file for writing.\n");
        return Ok(());
    }

    println!("\n  - Replacements made: {replacements}");
    println!("  - File updated successfully.\n");
    Ok(())
}

fn show_statistics(path: &Path) {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(_) => {
            println!("Error: Could not open file for reading.\n");
            return;
        }
    };

    let stats = textfile::file_stats(&data);
    println!("\n=== Statistics for '{}' ===", path.display());
    println!("  - Total Characters: {}", stats.chars);
    println!("  - Total Words:      {}", stats.words);
    println!("  - Total Lines:      {}", stats.lines);
    if stats.lines > 0 {
        println!(
            "  - Avg Words/Line:   {:.2}",
            stats.words as f64 / stats.lines as f64
        );
    }
    println!("  - SHA-256:          {}", stats.sha256);
    println!();
}

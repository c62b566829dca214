//! Interactive unit converter.

use practicum::convert;
use practicum::error::PracticumError;
use practicum::prompt::{Input, Prompt};
use std::io::{self, BufRead, Write};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    loop {
        println!("=== Unit Converter ===\n");
        println!("1. Temperature\n2. Length\n3. Weight\n4. Time\n5. Exit");
        let option = match prompt.read_value::<i32>("Select an option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid option. Please select 1-5.\n");
                continue;
            }
            Input::Eof => break,
        };

        if option == 5 {
            println!("\nThank you for using the converter!");
            break;
        }
        if !(1..=5).contains(&option) {
            println!("Error: Invalid option. Please select 1-5.\n");
            continue;
        }

        match option {
            1 => {
                println!("\nUnits: C (Celsius), F (Fahrenheit), K (Kelvin)");
                run_conversion(&mut prompt, convert::convert_temperature)?;
            }
            2 => {
                println!("\nUnits: M (meters), K (km), I (miles), F (feet)");
                run_conversion(&mut prompt, convert::convert_length)?;
            }
            3 => {
                println!("\nUnits: K (kg), P (pounds), O (ounces)");
                run_conversion(&mut prompt, convert::convert_weight)?;
            }
            _ => {
                println!("\nUnits: S (seconds), M (minutes), H (hours)");
                run_conversion(&mut prompt, convert::convert_time)?;
            }
        }
    }

    Ok(())
}

fn read_unit<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    label: &str,
) -> io::Result<Option<char>> {
    match prompt.read_char(label)? {
        Input::Value(c) => Ok(Some(c)),
        Input::Invalid => {
            println!("Error: That is not a valid unit. Try again.\n");
            Ok(None)
        }
        Input::Eof => Ok(None),
    }
}

fn run_conversion<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    convert: fn(f64, char, char) -> Result<f64, PracticumError>,
) -> io::Result<()> {
    let value = match prompt.read_value::<f64>("Enter value: ")? {
        Input::Value(v) => v,
        Input::Invalid => {
            println!("Error: That is not a valid number. Try again.\n");
            return Ok(());
        }
        Input::Eof => return Ok(()),
    };
    let from = match read_unit(prompt, "Enter source unit: ")? {
        Some(c) => c,
        None => return Ok(()),
    };
    let to = match read_unit(prompt, "Enter target unit: ")? {
        Some(c) => c,
        None => return Ok(()),
    };

    // The target unit echoes back exactly as typed.
    match convert(value, from, to) {
        Ok(result) => println!("\n  - Result: {result:.2} {to}\n"),
        Err(e) => println!("Error: {e}.\n"),
    }
    Ok(())
}

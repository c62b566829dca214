//! Interactive scientific calculator.

use practicum::calc;
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
        println!("=== Scientific Calculator ===\n");
        println!(
            "1. Addition\n2. Subtract\n3. Multiply\n4. Divide\n\
             5. Power\n6. Square Root\n7. Factorial\n8. Exit"
        );
        let option = match prompt.read_value::<i32>("Select an option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid option. Please select 1-8.\n");
                continue;
            }
            Input::Eof => break,
        };

        if option == 8 {
            println!("\nThank you for using the calculator!");
            break;
        }
        if !(1..=8).contains(&option) {
            println!("Error: Invalid option. Please select 1-8.\n");
            continue;
        }

        match option {
            1..=4 => basic_operation(&mut prompt, option)?,
            5 => power_operation(&mut prompt)?,
            6 => sqrt_operation(&mut prompt)?,
            7 => factorial_operation(&mut prompt)?,
            _ => {}
        }
    }

    Ok(())
}

/// Read one f64, printing the shared invalid-input error on garbage.
/// `None` aborts the current operation and falls back to the menu.
fn read_number<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    label: &str,
) -> io::Result<Option<f64>> {
    match prompt.read_value::<f64>(label)? {
        Input::Value(v) => Ok(Some(v)),
        Input::Invalid => {
            println!("Error: Invalid input. Please enter valid numbers.\n");
            Ok(None)
        }
        Input::Eof => Ok(None),
    }
}

fn basic_operation<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    option: i32,
) -> io::Result<()> {
    let num1 = match read_number(prompt, "\nEnter first number: ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    let num2 = match read_number(prompt, "Enter second number: ")? {
        Some(v) => v,
        None => return Ok(()),
    };

    let result = match option {
        1 => Ok(calc::add(num1, num2)),
        2 => Ok(calc::subtract(num1, num2)),
        3 => Ok(calc::multiply(num1, num2)),
        _ => calc::divide(num1, num2),
    };
    match result {
        Ok(v) => println!("\n  - Result: {v:.2}\n"),
        Err(e) => println!("Error: {e}.\n"),
    }
    Ok(())
}

fn power_operation<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let base = match read_number(prompt, "\nEnter base: ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    let exponent = match prompt.read_value::<i32>("Enter exponent (integer): ")? {
        Input::Value(v) => v,
        Input::Invalid => {
            println!("Error: Invalid input. Please enter valid numbers.\n");
            return Ok(());
        }
        Input::Eof => return Ok(()),
    };
    println!("\n  - Result: {:.2}\n", calc::power(base, exponent));
    Ok(())
}

fn sqrt_operation<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let num = match read_number(prompt, "\nEnter number: ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    match calc::sqroot(num) {
        Ok(v) => println!("\n  - Result: {v:.4}\n"),
        Err(e) => println!("Error: {e}.\n"),
    }
    Ok(())
}

fn factorial_operation<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let num = match read_number(prompt, "\nEnter number: ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    // Truncate toward zero like an int cast, so 5.9 means 5.
    match calc::factorial(num as i64) {
        Ok(v) => println!("\n  - Result: {v:.0}\n"),
        Err(e) => println!("Error: {e}.\n"),
    }
    Ok(())
}

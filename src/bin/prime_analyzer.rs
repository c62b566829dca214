//! Interactive prime number analyzer.

use practicum::primes;
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
        println!("=== Prime Number Analyzer ===\n");
        println!(
            "1. List primes in range\n2. Check primality\n\
             3. Prime factorization\n4. Twin primes\n5. Exit"
        );
        let option = match prompt.read_value::<i32>("Option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input or out of range (max 10000).");
                continue;
            }
            Input::Eof => break,
        };

        if option == 5 {
            println!("Thank you for using the analyzer!");
            break;
        }
        if !(1..=5).contains(&option) {
            println!("Error: Invalid input or out of range (max 10000).");
            continue;
        }

        match option {
            1 => list_primes(&mut prompt)?,
            2 => check_primality(&mut prompt)?,
            3 => factorization(&mut prompt)?,
            _ => twin_primes(&mut prompt)?,
        }
    }

    Ok(())
}

/// Unparseable input falls back to the menu without a message.
fn read_int<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    label: &str,
) -> io::Result<Option<i64>> {
    match prompt.read_value::<i64>(label)? {
        Input::Value(v) => Ok(Some(v)),
        _ => Ok(None),
    }
}

fn read_range<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
) -> io::Result<Option<(i64, i64)>> {
    let start = match read_int(prompt, "Start range: ")? {
        Some(v) => v,
        None => return Ok(None),
    };
    let end = match read_int(prompt, "End range: ")? {
        Some(v) => v,
        None => return Ok(None),
    };
    Ok(Some((start, end)))
}

fn list_primes<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let (start, end) = match read_range(prompt)? {
        Some(r) => r,
        None => return Ok(()),
    };
    match primes::primes_in_range(start, end) {
        Ok(list) => {
            let items: Vec<String> = list.iter().map(|p| p.to_string()).collect();
            println!("  - Primes found: {} -> [{}]\n", list.len(), items.join(", "));
        }
        Err(e) => println!("Error: {e}."),
    }
    Ok(())
}

fn check_primality<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let num = match read_int(prompt, "Enter number: ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    if primes::is_prime(num) {
        println!("  - Is prime\n");
    } else {
        println!("  - Not prime\n");
    }
    Ok(())
}

fn factorization<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let num = match read_int(prompt, "Enter number: ")? {
        Some(v) => v,
        None => return Ok(()),
    };
    match primes::factorize(num) {
        Ok(factors) => {
            let parts: Vec<String> = factors
                .iter()
                .map(|(p, e)| format!("{p}^{e}"))
                .collect();
            println!("  - Prime factorization of {num} = {}\n", parts.join(" x "));
        }
        Err(e) => println!("Error: {e}."),
    }
    Ok(())
}

fn twin_primes<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let (start, end) = match read_range(prompt)? {
        Some(r) => r,
        None => return Ok(()),
    };
    match primes::twin_primes(start, end) {
        Ok(twins) => {
            let parts: Vec<String> = twins
                .iter()
                .map(|(a, b)| format!("({a}, {b})"))
                .collect();
            println!("  - Twin primes found: {}\n", parts.join(", "));
        }
        Err(e) => println!("Error: {e}."),
    }
    Ok(())
}

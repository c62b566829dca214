//! Time recursive against iterative implementations of small operations.

use practicum::bench;
use practicum::error::PracticumError;
use practicum::prompt::{Input, Prompt};
use practicum::recursion::{self, OpResult};
use std::io::{self, BufRead, Write};

const MIN_SPEED_DIFF: f64 = 1.5;

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
        println!("=== Recursive vs Iterative Operations ===");
        println!("1. Factorial\n2. Fibonacci\n3. Sum of naturals\n4. Power\n5. Exit");
        let option = match prompt.read_value::<i32>("Select operation: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid option. Please select 1-5.\n");
                continue;
            }
            Input::Eof => break,
        };

        if option == 5 {
            println!("\nThank you for using the comparison tool!");
            break;
        }
        if !(1..=5).contains(&option) {
            println!("Error: Invalid input.\n");
            continue;
        }

        run_comparison(&mut prompt, option)?;
    }

    Ok(())
}

fn run_comparison<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    option: i32,
) -> io::Result<()> {
    let mut base = 0.0;
    let n: i64;

    if option == 4 {
        base = match prompt.read_value::<f64>("Enter base: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please enter valid numbers.\n");
                return Ok(());
            }
            Input::Eof => return Ok(()),
        };
        n = match prompt.read_value::<i32>("Enter exponent: ")? {
            Input::Value(v) => v as i64,
            Input::Invalid => {
                println!("Error: Invalid input. Please enter valid numbers.\n");
                return Ok(());
            }
            Input::Eof => return Ok(()),
        };
    } else {
        n = match prompt.read_value::<i32>("Enter term (n): ")? {
            Input::Value(v) => v as i64,
            Input::Invalid => {
                println!("Error: Invalid input. Please enter valid numbers.\n");
                return Ok(());
            }
            Input::Eof => return Ok(()),
        };
    }

    let (rec, rec_elapsed) = match option {
        1 => bench::time_it(|| recursion::factorial_recursive(n)),
        2 => bench::time_it(|| Ok(recursion::fibonacci_recursive(n))),
        3 => bench::time_it(|| recursion::sum_natural_recursive(n)),
        _ => bench::time_it(|| recursion::power_recursive(base, n)),
    };
    let rec = match rec {
        Ok(r) => r,
        Err(e) => {
            println!("Error: {e}.\n");
            return Ok(());
        }
    };

    let (ite, ite_elapsed): (Result<OpResult, PracticumError>, _) = match option {
        1 => bench::time_it(|| recursion::factorial_iterative(n)),
        2 => bench::time_it(|| Ok(recursion::fibonacci_iterative(n))),
        3 => bench::time_it(|| recursion::sum_natural_iterative(n)),
        _ => bench::time_it(|| recursion::power_iterative(base, n)),
    };
    let ite = match ite {
        Ok(r) => r,
        Err(e) => {
            println!("Error: {e}.\n");
            return Ok(());
        }
    };

    let time_rec = rec_elapsed.as_secs_f64();
    let time_ite = ite_elapsed.as_secs_f64();

    println!("\nRecursive method:");
    println!(
        "  - Result = {:.0}\n  - Time: {:.8} seconds\n  - Recursive calls: {}",
        rec.value, time_rec, rec.count
    );
    println!("\nIterative method:");
    println!(
        "  - Result = {:.0}\n  - Time: {:.8} seconds\n  - Iterations: {}",
        ite.value, time_ite, ite.count
    );

    println!("\nComparison:");
    let mut speed_factor = 0.0;
    if time_rec > time_ite && time_ite > 0.0 {
        speed_factor = time_rec / time_ite;
    } else if time_ite > time_rec && time_rec > 0.0 {
        speed_factor = time_ite / time_rec;
    }
    if speed_factor >= MIN_SPEED_DIFF {
        let winner = if time_ite < time_rec { "Iterative" } else { "Recursive" };
        println!("  - {winner} method was {speed_factor:.2}x faster");
    } else {
        println!("  - Negligible speed difference");
    }
    let recommendation = if time_ite < time_rec {
        "Use iterative method for efficiency"
    } else {
        "Either method yields similar performance"
    };
    println!("  - Recommendation: {recommendation}\n");

    Ok(())
}

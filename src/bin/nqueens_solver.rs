//! Interactive N-Queens backtracking solver.

use indicatif::ProgressBar;
use practicum::bench;
use practicum::nqueens;
use practicum::prompt::{Input, Prompt};
use std::io::{self, BufRead, Write};
use std::time::Duration;

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
        println!("=== N-Queens Backtracking Solver ===\n");
        println!("1. Run Demo Case (N=4)");
        println!("2. Run Custom Case (Manual N)");
        println!("3. Algorithm Information");
        println!("4. Exit");
        let option = match prompt.read_value::<i32>("Option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please enter a valid number.\n");
                continue;
            }
            Input::Eof => break,
        };

        if option == 4 {
            println!("\nExiting. Goodbye!");
            break;
        }

        match option {
            1 => run_demo(),
            2 => run_custom(&mut prompt)?,
            3 => show_info(),
            _ => println!("Error: Invalid option selected.\n"),
        }
    }

    Ok(())
}

fn run_demo() {
    println!("\n--- Running Demo (N=4) ---");
    println!("Searching for solutions...\n");
    solve_and_report(4, true);
}

fn run_custom<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let n = match prompt.read_value::<i64>("\nEnter board size (N): ")? {
        Input::Value(v) => v,
        Input::Invalid => {
            println!("Error: Invalid input. Please enter a valid number.\n");
            return Ok(());
        }
        Input::Eof => return Ok(()),
    };
    let n = match nqueens::check_size(n) {
        Ok(n) => n,
        Err(e) => {
            println!("Error: {e}.\n");
            return Ok(());
        }
    };

    println!("\n--- Solving N={n} ---");
    println!("Searching for solutions...\n");
    let print_boards = n <= 10;
    if !print_boards {
        println!("  (Solutions visualization disabled for N > 10 for performance)");
    }
    solve_and_report(n, print_boards);
    Ok(())
}

fn solve_and_report(n: usize, print_boards: bool) {
    // The spinner draws on stderr and stays out of the report.
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Searching for solutions...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let mut sol_num = 0u64;
    let (count, elapsed) = bench::time_it(|| {
        nqueens::solve(n, |board| {
            sol_num += 1;
            if print_boards {
                println!("Solution {sol_num}:");
                for row in nqueens::render(board) {
                    println!("{row}");
                }
                println!();
            }
        })
    });
    spinner.finish_and_clear();

    println!("  - Total solutions found: {count}");
    println!(
        "  - Execution time:        {:.6} seconds\n",
        bench::non_zero_secs(elapsed)
    );
}

fn show_info() {
    println!("\n=== Algorithm Information ===\n");
    println!("Backtracking (N-Queens):");
    println!("  - Strategy: Decision Tree with Pruning.");
    println!("  - Search:   Depth-First Search (DFS).");
    println!("  - Pruning:  Whenever a queen is placed, future rows are restricted.");
    println!("  - Complexity: Exponential, but significantly faster than Brute Force.");
    println!("  - Applications: Pathfinding, Sudoku, Cryptarithmetic.\n");
}

//! Brute force vs Knuth-Morris-Pratt substring search.

use practicum::bench;
use practicum::matching::{self, MatchStats};
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
        println!("=== String Matching Algorithms ===\n");
        println!("1. Run Demo (Brute Force vs KMP)");
        println!("2. Run Custom Search");
        println!("3. Algorithm Information");
        println!("4. Exit");
        let option = match prompt.read_value::<i32>("Option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please enter a valid value.\n");
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
    let text = "ABABDABACDABABCABAB";
    let pattern = "ABABCABAB";

    println!("\n=== Demo Case ===");
    println!("Text:    \"{text}\"");
    println!("Pattern: \"{pattern}\"");
    run_search(text, pattern);
}

fn run_custom<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<()> {
    let text = match prompt.read_line("\nEnter text to search in:\n  > ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let pattern = match prompt.read_line("Enter pattern to find:\n  > ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    if pattern.is_empty() {
        println!("Error: Invalid input. Please enter a valid value.\n");
        return Ok(());
    }

    println!("\n=== Custom Search ===");
    println!("Text:    \"{text}\"");
    println!("Pattern: \"{pattern}\"");
    run_search(&text, &pattern);
    Ok(())
}

fn run_search(text: &str, pattern: &str) {
    println!("\n[1] Brute Force:");
    let (mut bf, elapsed) = bench::time_it(|| matching::brute_force(text, pattern));
    bf.seconds = bench::non_zero_secs(elapsed);
    print_result(&bf, "O(n*m)");

    println!("\n[2] KMP (Knuth-Morris-Pratt):");
    let lps: Vec<String> = matching::lps_table(pattern)
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  - LPS Table: [{}]", lps.join(", "));
    let (mut km, elapsed) = bench::time_it(|| matching::kmp(text, pattern));
    km.seconds = bench::non_zero_secs(elapsed);
    print_result(&km, "O(n+m)");

    show_comparison(&bf, &km);
}

fn print_result(stats: &MatchStats, complexity: &str) {
    match stats.found {
        Some(index) => println!("  - Found at index: {index}"),
        None => println!("  - Status: Not Found"),
    }
    println!("  - Comparisons: {}", stats.comparisons);
    println!("  - Time:        {:.6} seconds", stats.seconds);
    println!("  - Complexity:  {complexity}");
}

fn show_comparison(bf: &MatchStats, km: &MatchStats) {
    println!("\n=== Comparison ===");

    if bf.comparisons > 0 && km.comparisons > 0 {
        let saved = bf.comparisons as f64 - km.comparisons as f64;
        let efficiency = saved / bf.comparisons as f64 * 100.0;
        if efficiency > 0.0 {
            println!("  - KMP used {efficiency:.0}% fewer comparisons than Brute Force.");
        } else {
            println!("  - Both algorithms had similar performance for this case.");
        }
    }

    println!("  - Recommendation: KMP is optimal for large texts with repetitive patterns.\n");
}

fn show_info() {
    println!("\n=== Algorithm Information ===\n");
    println!("1. Brute Force O(n*m):");
    println!("   - Compares pattern at every position in text.");
    println!("   - Simple but slow for large inputs.\n");
    println!("2. KMP O(n+m):");
    println!("   - Precomputes LPS (Longest Prefix Suffix) table.");
    println!("   - Avoids redundant comparisons using earlier match info.");
    println!("   - Optimal for long texts with repetitive patterns.\n");
}

//! Benchmarks bubble sort against binary search and charts the growth.

use clap::Parser;
use practicum::bench;
use practicum::chart;
use practicum::complexity::{self, Measurement};
use practicum::io_utils::io_cli_error;
use practicum::prompt::{Input, Prompt};
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use sysinfo::{Pid, ProcessExt, System, SystemExt};

const BUBBLE_SIZES: [usize; 5] = [100, 200, 400, 800, 1600];
const SEARCH_SIZES: [usize; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];
const CHART_CAP: usize = 60;

/// Algorithm complexity analyzer.
///
/// Times bubble sort and binary search across growing input sizes, counts
/// their operations and charts the growth. The rows from the most recent
/// analysis can be exported for further processing.
#[derive(Parser)]
struct Args {
    /// Write the most recent measurements to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the most recent measurements to a JSON file
    #[arg(long)]
    json: Option<PathBuf>,
    /// Sample process memory and add an RSS column to the tables
    #[arg(long)]
    memory: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut sampler = if args.memory { MemSampler::new() } else { None };
    if args.memory && sampler.is_none() {
        eprintln!("Warning: cannot resolve the current process id. Memory tracking disabled.");
    }
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    loop {
        println!("=== Algorithm Complexity Analyzer ===\n");
        println!("1. Analyze Bubble Sort   O(n\u{b2})");
        println!("2. Analyze Binary Search O(log n)");
        println!("3. Big O Complexity Info");
        println!("4. Exit");
        let option = match prompt.read_value::<i32>("Option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please enter a number.\n");
                continue;
            }
            Input::Eof => break,
        };

        if option == 4 {
            println!("\nExiting. Goodbye!");
            break;
        }

        let results = match option {
            1 => Some(run_bubble_analysis(&mut sampler)),
            2 => Some(run_search_analysis(&mut sampler)),
            3 => {
                show_big_o_info();
                None
            }
            _ => {
                println!("Error: Invalid option selected.\n");
                None
            }
        };

        if let Some(results) = results {
            export(&args, &results)?;
        }
    }

    Ok(())
}

fn run_bubble_analysis(sampler: &mut Option<MemSampler>) -> Vec<Measurement> {
    println!("\n=== Bubble Sort O(n\u{b2}) Analysis ===\n");
    println!("{:<6} | {:<12} | {}", "Size", "Time (ms)", "Operations");
    println!("-------|--------------|------------");

    let mut results = Vec::with_capacity(BUBBLE_SIZES.len());
    for n in BUBBLE_SIZES {
        // Worst case: reverse sorted array.
        let mut arr: Vec<i64> = (0..n).map(|j| (n - j) as i64).collect();
        let (ops, elapsed) = bench::time_it(|| complexity::bubble_sort(&mut arr));
        let m = Measurement {
            size: n,
            time_ms: bench::non_zero_millis(elapsed),
            operations: ops,
            rss_kb: sampler.as_mut().map(|s| s.rss_kb()),
        };
        print!(
            "{:<6} | {:>9.3}    | {}",
            m.size,
            m.time_ms,
            complexity::humanize_ops(m.operations)
        );
        print_rss_cell(m.rss_kb);
        results.push(m);
    }

    print_growth_chart(&results, "n\u{b2}");

    println!("\n  - Complexity Detected: O(n\u{b2})");
    println!("  - Growth Rate: Doubling n \u{2192} 4x more operations.\n");
    results
}

fn run_search_analysis(sampler: &mut Option<MemSampler>) -> Vec<Measurement> {
    println!("\n=== Binary Search O(log n) Analysis ===\n");
    println!("{:<8} | {:<12} | {}", "Size", "Time (ms)", "Operations");
    println!("---------|--------------|------------");

    let mut results = Vec::with_capacity(SEARCH_SIZES.len());
    for n in SEARCH_SIZES {
        let arr: Vec<i64> = (0..n).map(|j| 2 * j as i64).collect();
        // Worst case: the last element.
        let target = arr[n - 1];
        let (ops, elapsed) = bench::time_it(|| complexity::binary_search(&arr, target));
        let m = Measurement {
            size: n,
            time_ms: bench::non_zero_millis(elapsed),
            operations: ops,
            rss_kb: sampler.as_mut().map(|s| s.rss_kb()),
        };
        print!("{:<8} | {:>9.4}    | {}", m.size, m.time_ms, m.operations);
        print_rss_cell(m.rss_kb);
        results.push(m);
    }

    println!("\n  - Complexity Detected: O(log n)");
    println!("  - Growth Rate: Multiplying n\u{d7}10 \u{2192} only ~3 more operations.\n");
    results
}

fn print_rss_cell(rss_kb: Option<u64>) {
    match rss_kb {
        Some(kb) => println!(" | {kb} KB"),
        None => println!(),
    }
}

fn print_growth_chart(results: &[Measurement], label: &str) {
    let base = results.first().map_or(0, |m| m.operations);
    let scale = if base > 0 { base / 4 } else { 1 };

    println!("\nGrowth Chart ({label}):");
    for m in results {
        match chart::scaled_bar(m.operations, scale, CHART_CAP) {
            Some(blocks) => println!("  n={:<5} | {blocks}", m.size),
            None => println!("  n={:<5} | (off scale)", m.size),
        }
    }
}

fn show_big_o_info() {
    println!("\n=== Big O Complexity Reference ===\n");
    println!("  Notation   | Name          | Example");
    println!("  -----------|---------------|----------------------");
    println!("  O(1)       | Constant      | Array access");
    println!("  O(log n)   | Logarithmic   | Binary Search");
    println!("  O(n)       | Linear        | Linear Search");
    println!("  O(n log n) | Log-Linear    | Merge Sort, Quick Sort");
    println!("  O(n\u{b2})      | Quadratic     | Bubble Sort");
    println!("  O(2\u{207f})      | Exponential   | N-Queens (brute force)\n");
    println!("  Rule: For n=1000, prefer O(n log n) or better.\n");
}

fn export(args: &Args, results: &[Measurement]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.csv {
        write_csv(path, results)?;
        eprintln!("Wrote {} measurements to {}", results.len(), path.display());
    }
    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(results)?;
        fs::write(path, json).map_err(|e| io_cli_error("writing", path, e))?;
        eprintln!("Wrote {} measurements to {}", results.len(), path.display());
    }
    Ok(())
}

fn write_csv(path: &Path, results: &[Measurement]) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path).map_err(|e| io_cli_error("creating", path, e))?;
    let mut wtr = csv::Writer::from_writer(file);
    for m in results {
        wtr.serialize(m)?;
    }
    wtr.flush()?;
    Ok(())
}

struct MemSampler {
    sys: System,
    pid: Pid,
}

impl MemSampler {
    fn new() -> Option<Self> {
        let pid = sysinfo::get_current_pid().ok()?;
        Some(MemSampler { sys: System::new(), pid })
    }

    /// Resident set size in KB after refreshing this process.
    fn rss_kb(&mut self) -> u64 {
        self.sys.refresh_process(self.pid);
        self.sys.process(self.pid).map_or(0, |p| p.memory() / 1024)
    }
}

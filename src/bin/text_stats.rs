//! Analyze typed text and report character, word and sentence statistics.

use practicum::textstats::{TextStats, VOWELS};
use std::io::{self, BufRead};

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Text Analyzer ===");
    println!("Enter text (type END on a new line to finish):");

    let stdin = io::stdin();
    let mut buffer = String::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line == "END" {
            break;
        }
        buffer.push_str(&line);
        buffer.push('\n');
    }

    report(&TextStats::analyze(&buffer));
    Ok(())
}

fn report(stats: &TextStats) {
    println!("\n=== Text Statistics ===");
    println!("Total characters: {}", stats.total_chars);
    println!("Characters without spaces: {}", stats.chars_no_space);
    println!("Words: {}", stats.words);
    println!("Sentences: {}", stats.sentences);
    println!("Lines: {}", stats.lines);

    if stats.words > 0 {
        println!(
            "\nAverage word length: {:.2} characters",
            stats.average_word_length()
        );
        println!(
            "Longest word: \"{}\" ({} characters)",
            stats.longest_word,
            stats.longest_word.len()
        );
        println!(
            "Shortest word: \"{}\" ({} characters)",
            stats.shortest_word,
            stats.shortest_word.len()
        );
    }

    println!("\nCharacter Distribution:");
    println!("Letters: {} ({:.2}%)", stats.letters, stats.percent(stats.letters));
    println!("Spaces: {} ({:.2}%)", stats.spaces, stats.percent(stats.spaces));
    println!(
        "Punctuation: {} ({:.2}%)",
        stats.punctuation,
        stats.percent(stats.punctuation)
    );

    println!("\nVowel Frequency:");
    let parts: Vec<String> = VOWELS
        .iter()
        .zip(stats.vowel_counts.iter())
        .map(|(v, n)| format!("{v}: {n}"))
        .collect();
    print!("{}", parts.join(", "));

    print!("\n\nIs it a pangram? ");
    if stats.is_pangram() {
        println!("YES \u{2713}");
        println!("(Contains all 26 letters of the alphabet)");
    } else {
        println!("NO");
    }
}

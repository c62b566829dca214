//! Interactive ASCII pattern generator.

use practicum::patterns::{Pattern, MAX_HEIGHT, MIN_HEIGHT};
use practicum::prompt::{Input, Prompt};
use std::io;

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
        println!("=== Pattern Generator ===");
        println!(
            "1. Pyramid\n2. Diamond\n3. Inverted Triangle\n\
             4. Staircase\n5. Sine Wave\n6. Exit"
        );
        let option = match prompt.read_value::<i32>("Select pattern: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please try again.");
                continue;
            }
            Input::Eof => break,
        };

        if option == 6 {
            println!("Thank you for using the generator!");
            break;
        }
        if !(1..=6).contains(&option) {
            println!("Error: Invalid input. Please try again.");
            continue;
        }
        let pattern = match option {
            1 => Pattern::Pyramid,
            2 => Pattern::Diamond,
            3 => Pattern::InvertedTriangle,
            4 => Pattern::Staircase,
            _ => Pattern::SineWave,
        };

        let height = match prompt.read_value::<usize>("Height: ")? {
            Input::Value(v) if (MIN_HEIGHT..=MAX_HEIGHT).contains(&v) => v,
            Input::Eof => break,
            _ => {
                println!("Error: Invalid input. Please try again.");
                continue;
            }
        };
        let character = match prompt.read_char("Character: ")? {
            Input::Value(c) => c,
            Input::Invalid => continue,
            Input::Eof => break,
        };

        println!();
        for row in pattern.render(height, character) {
            println!("{row}");
        }
        println!("\nApproximate area: {} characters", pattern.area(height));
        println!("Symmetry lines: {}\n", pattern.symmetry());
    }

    Ok(())
}

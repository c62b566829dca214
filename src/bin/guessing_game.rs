//! Number guessing game with hints and session statistics.

use clap::Parser;
use practicum::game::{Round, Session, Verdict, DEFAULT_MAX, DEFAULT_MIN, MAX_ATTEMPTS};
use practicum::prompt::{Input, Prompt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};

/// Smart guessing game.
///
/// The machine picks a number between 1 and 100; guess it within seven
/// attempts, guided by higher/lower hints and a narrowing range.
#[derive(Parser)]
struct Args {
    /// Seed for the secret number sequence (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    let mut session = Session::default();

    loop {
        println!("=== Smart Guessing Game ===");
        println!("1. Play New Game\n2. Exit");
        let option = match prompt.read_value::<i32>("Option: ")? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please try again.");
                continue;
            }
            Input::Eof => break,
        };

        if option == 2 {
            println!("Thank you for playing!");
            break;
        }
        if option == 1 {
            play_round(&mut prompt, &mut rng, &mut session)?;
            display_stats(&session);
        } else {
            println!("Error: Invalid input. Please try again.");
        }
    }

    Ok(())
}

fn play_round<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    rng: &mut StdRng,
    session: &mut Session,
) -> io::Result<()> {
    let mut round = Round::new(rng);

    println!("\nConfiguration:");
    println!("Range: {DEFAULT_MIN}-{DEFAULT_MAX}");
    println!("Max attempts: {MAX_ATTEMPTS}");
    println!("Secret number generated...\n");

    let mut won = false;
    while round.attempts < MAX_ATTEMPTS {
        let label = format!("Attempt {}/{}: ", round.attempts + 1, MAX_ATTEMPTS);
        let guess = match prompt.read_value::<i32>(&label)? {
            Input::Value(v) => v,
            Input::Invalid => {
                println!("Error: Invalid input. Please try again.");
                continue;
            }
            Input::Eof => break,
        };

        let verdict = round.guess(guess);
        if verdict == Verdict::Correct {
            println!("CORRECT! ");
            println!("Number found: {}", round.secret());
            println!("Attempts used: {}/{}", round.attempts, MAX_ATTEMPTS);
            println!("Efficiency: {:.0}%", round.efficiency());
            won = true;
            break;
        }

        let direction = if verdict == Verdict::Higher { "HIGHER" } else { "LOWER" };
        println!("Hint: The number is {direction}");
        println!("Updated range: {}-{}\n", round.min, round.max);
    }

    if !won {
        println!("GAME OVER! The number was: {}", round.secret());
    }
    session.record(round.attempts, won);
    Ok(())
}

fn display_stats(session: &Session) {
    println!("\nSession Statistics:");
    println!("- Games played: {}", session.games);
    println!("- Victories: {}", session.wins);
    if session.games > 0 {
        println!("- Average attempts: {:.1}\n", session.average_attempts());
    }
}

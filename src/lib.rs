//! Shared logic for a collection of small console exercises.
//!
//! Every binary under `src/bin/` is a self-contained tool with its own menu
//! loop. The modules here hold the computation and the on-disk formats so
//! both can be tested without a terminal attached.

pub mod bench;
pub mod calc;
pub mod chart;
pub mod complexity;
pub mod convert;
pub mod csvstore;
pub mod error;
pub mod game;
pub mod grades;
pub mod io_utils;
pub mod loganalyzer;
pub mod matching;
pub mod nqueens;
pub mod patterns;
pub mod primes;
pub mod prompt;
pub mod records;
pub mod recursion;
pub mod textfile;
pub mod textstats;

pub use error::PracticumError;

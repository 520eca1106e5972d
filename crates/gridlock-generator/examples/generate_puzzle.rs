//! Generates and prints a Sudoku puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Control how many cells are carved out (default: 40):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --blanks 55
//! ```

use std::process;

use clap::Parser;
use gridlock_generator::{DEFAULT_BLANKS, PuzzleGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for reproducible generation; drawn from entropy when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u32>,

    /// Number of cells to carve out (0-81).
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_BLANKS)]
    blanks: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.blanks > 81 {
        eprintln!("--blanks must be at most 81.");
        process::exit(2);
    }

    let generator = PuzzleGenerator::with_blanks(args.blanks);
    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Puzzle ({} blanks):", generated.puzzle.blank_count());
    println!("{}", generated.puzzle.values);
    println!("Solution:");
    println!("{}", generated.solution);
}

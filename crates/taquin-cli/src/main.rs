//! Command-line front end for the taquin solver.
//!
//! Reads a puzzle description from a file, builds the board, runs the
//! optimal search, and prints the solution states, the minimum move count,
//! and per-phase timings in microseconds. Exits with status 0 when a
//! solution was found and a nonzero status on any failure.

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use taquin_core::{Board, MalformedBoardError};
use taquin_solver::{NotSolvableError, Solver};

use crate::timing::PhaseTimer;

mod parse;
mod timing;

/// Optimal sliding-tile (N-puzzle) solver.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file: one row per line, whitespace-separated tile values,
    /// 0 for the blank. Lines starting with `#` are comments.
    puzzle: PathBuf,
}

/// Any failure the pipeline can end with; each maps to a nonzero exit
/// status.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("cannot read puzzle file: {_0}")]
    Io(std::io::Error),
    #[display("malformed puzzle file: {_0}")]
    Parse(parse::ParseError),
    #[display("malformed board: {_0}")]
    Board(MalformedBoardError),
    #[display("{_0}")]
    Solve(NotSolvableError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let text = fs::read_to_string(&args.puzzle)?;
    log::info!("read {}, solving", args.puzzle.display());

    let mut timer = PhaseTimer::start();

    let rows = parse::parse_puzzle(&text)?;
    timer.record("board parsing");

    let board = Board::from_rows(&rows)?;
    timer.record("board creation");
    log::debug!("initial board:\n{board}");

    let solver = Solver::new(board);
    timer.record("solver creation");

    let outcome = solver.solve_with_stats();
    timer.record("solving");

    match outcome {
        Ok((solution, stats)) => {
            log::debug!(
                "expanded {} boards, generated {} nodes, peak frontier {}",
                stats.expanded(),
                stats.generated(),
                stats.max_frontier_len()
            );

            println!("Solution found with the following moves:");
            for state in solution.states() {
                println!("{state}");
            }
            println!("Minimum number of moves: {}", solution.moves());
            println!("Solution found in {}µs.", timer.total().as_micros());
            print_phase_table(&timer);
            Ok(())
        }
        Err(err) => {
            println!("Errored after {}µs.", timer.total().as_micros());
            print_phase_table(&timer);
            Err(err.into())
        }
    }
}

fn print_phase_table(timer: &PhaseTimer) {
    for (name, duration) in timer.phases() {
        println!("  {name}: {}µs", duration.as_micros());
    }
}

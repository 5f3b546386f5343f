//! Optimal sliding-tile search engine.
//!
//! This crate finds minimum-move solutions for N-puzzle boards from
//! [`taquin-core`](taquin_core) using A* with the Manhattan-distance
//! heuristic. A closed-form parity check gates the search so that
//! unsolvable inputs fail immediately instead of exhausting the reachable
//! state space.
//!
//! The search is synchronous and CPU-bound; each [`Solver`] owns its
//! frontier and visited map exclusively, so independent solves can run on
//! separate threads without coordination.
//!
//! # Examples
//!
//! ```
//! use taquin_core::Board;
//! use taquin_solver::{NotSolvableError, Solver};
//!
//! let board = Board::new(vec![1, 2, 3, 4, 0, 6, 7, 5, 8])?;
//! let solution = Solver::new(board).solve()?;
//! assert_eq!(solution.moves(), 2);
//!
//! // Odd permutation parity: rejected before any search happens.
//! let board = Board::new(vec![1, 2, 3, 4, 5, 6, 8, 7, 0])?;
//! assert_eq!(Solver::new(board).solve().unwrap_err(), NotSolvableError);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod solution;
pub mod solver;

// Re-export commonly used types
pub use self::{
    solution::Solution,
    solver::{NotSolvableError, Solver, SolverStats},
};

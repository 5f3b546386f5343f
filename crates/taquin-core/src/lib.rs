//! Core data structures for the taquin sliding-tile solver.
//!
//! This crate provides the board model shared by the search engine and the
//! command-line front end. It has no solving logic of its own beyond the
//! closed-form solvability check.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Core types**
//!    - [`board`]: the immutable N×N configuration, its constructors and
//!      validation, move generation, and the Manhattan-distance heuristic
//!    - [`slide`]: the four blank moves and their canonical expansion order
//!    - [`position`]: cell coordinates on the grid
//! 2. **Solvability**
//!    - [`solvability`]: the closed-form parity check that decides, without
//!      search, whether the goal is reachable
//! 3. **Errors**
//!    - [`MalformedBoardError`]: rejection of tile data that is not a valid
//!      permutation with exactly one blank
//!
//! # Examples
//!
//! ```
//! use taquin_core::{Board, Slide};
//!
//! let board = Board::new(vec![1, 2, 3, 4, 0, 6, 7, 5, 8])?;
//! assert!(board.is_solvable());
//!
//! // Two slides away from the goal.
//! let board = board.slide(Slide::Down).unwrap();
//! let board = board.slide(Slide::Right).unwrap();
//! assert!(board.is_goal());
//! # Ok::<(), taquin_core::MalformedBoardError>(())
//! ```

pub mod board;
pub mod position;
pub mod slide;
pub mod solvability;

// Re-export commonly used types
pub use self::{
    board::{Board, MalformedBoardError},
    position::Position,
    slide::Slide,
};

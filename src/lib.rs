//! Sudoku core: grid model, exhaustive backtracking solver, seeded puzzle
//! generator with per-box even carving, conflict detection, and hint
//! derivation. All operations are pure over an explicit grid value; callers
//! own their grids and copy explicitly.

pub mod board;
pub mod difficulty;
pub mod error;
pub mod generator;
pub mod solver;
pub mod uniqueness;

pub use board::{Digit, Grid};
pub use difficulty::{Band, Difficulty};
pub use error::Error;
pub use generator::PuzzleGenerator;
pub use solver::{all_hints, next_hint, solve, Hint};
pub use uniqueness::{has_unique_solution, has_unique_solution_exact};

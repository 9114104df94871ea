use crate::board::{Digit, Grid};
use crate::error::{Error, Result};

/// Solves `grid` by exhaustive backtracking and returns the completed grid,
/// or `Unsolvable` when no legal completion exists.
///
/// The search visits empty cells in row-major order and tries candidates in
/// ascending order, so the result is deterministic for a fixed input. The
/// input is treated as read-only; the search runs on a private copy.
pub fn solve(grid: &Grid) -> Result<Grid> {
    // Placements are legality-checked one by one, so a finished search grid
    // is valid only if the givens themselves held no duplicates.
    if !grid.conflicts().is_empty() {
        return Err(Error::Unsolvable);
    }
    let mut work = grid.clone();
    if solve_in_place(&mut work) {
        Ok(work)
    } else {
        Err(Error::Unsolvable)
    }
}

fn solve_in_place(grid: &mut Grid) -> bool {
    let Some((row, col)) = first_empty(grid) else {
        return true;
    };
    for value in 1..=9 {
        if grid.is_placement_legal(row, col, value) {
            grid.put(row, col, value);
            if solve_in_place(grid) {
                return true;
            }
            grid.put(row, col, 0); // backtrack
        }
    }
    false
}

fn first_empty(grid: &Grid) -> Option<(usize, usize)> {
    Grid::positions().find(|&(r, c)| grid.get(r, c) == 0)
}

/// A revealable cell: coordinate plus the digit the solution holds there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hint {
    pub row: usize,
    pub col: usize,
    pub value: Digit,
}

/// The next cell to reveal: the first empty cell of `current` in row-major
/// order, valued from a solve of `original`. Solving the puzzle as dealt
/// keeps hints consistent even when the player has made an error. Returns
/// `None` when no empty cell remains.
pub fn next_hint(original: &Grid, current: &Grid) -> Result<Option<Hint>> {
    let solution = solve(original)?;
    Ok(Grid::positions()
        .find(|&(r, c)| current.get(r, c) == 0)
        .map(|(row, col)| Hint { row, col, value: solution.get(row, col) }))
}

/// Every empty cell of `current` with its solution value, row-major.
pub fn all_hints(original: &Grid, current: &Grid) -> Result<Vec<Hint>> {
    let solution = solve(original)?;
    Ok(Grid::positions()
        .filter(|&(r, c)| current.get(r, c) == 0)
        .map(|(row, col)| Hint { row, col, value: solution.get(row, col) })
        .collect())
}

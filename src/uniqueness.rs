use crate::board::Grid;
use crate::solver;

/// Conservative uniqueness check: solve once, then test every empty cell for
/// a legal alternative to the candidate solution's digit, judged against the
/// puzzle's own givens. Any alternative fails the check.
///
/// This is a local-legality screen, not a proof. It can report non-unique
/// for puzzles that are actually unique, but it is O(81 x 9) instead of a
/// second exponential search, and the generator compensates with a repair
/// pass. Unsolvable puzzles fail the check.
pub fn has_unique_solution(puzzle: &Grid) -> bool {
    let Ok(solution) = solver::solve(puzzle) else {
        return false;
    };
    first_ambiguous_cell(puzzle, &solution).is_none()
}

/// First empty puzzle cell (row-major) where some digit other than the
/// solution's is legal against the givens. The generator restores this cell
/// from the solution as its single repair step.
pub(crate) fn first_ambiguous_cell(puzzle: &Grid, solution: &Grid) -> Option<(usize, usize)> {
    Grid::positions().find(|&(row, col)| {
        puzzle.get(row, col) == 0
            && (1..=9).any(|value| {
                value != solution.get(row, col) && puzzle.is_placement_legal(row, col, value)
            })
    })
}

/// Exact uniqueness: runs the full backtracking search counting completions,
/// stopping as soon as a second one is found. Far costlier than
/// [`has_unique_solution`] in the worst case; opt-in for callers that need a
/// real proof.
pub fn has_unique_solution_exact(puzzle: &Grid) -> bool {
    if !puzzle.conflicts().is_empty() {
        return false;
    }
    let mut work = puzzle.clone();
    count_solutions(&mut work, 2) == 1
}

fn count_solutions(grid: &mut Grid, limit: usize) -> usize {
    fn backtrack(grid: &mut Grid, count: &mut usize, limit: usize) {
        if *count >= limit {
            return;
        }
        let Some((row, col)) = Grid::positions().find(|&(r, c)| grid.get(r, c) == 0) else {
            *count += 1;
            return;
        };
        for value in 1..=9 {
            if grid.is_placement_legal(row, col, value) {
                grid.put(row, col, value);
                backtrack(grid, count, limit);
                grid.put(row, col, 0);
                if *count >= limit {
                    return;
                }
            }
        }
    }
    let mut count = 0;
    backtrack(grid, &mut count, limit);
    count
}

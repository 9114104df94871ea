use itertools::Itertools;
use log::debug;
use rand::{seq::SliceRandom, Rng, SeedableRng};

use crate::board::{box_positions, Grid};
use crate::difficulty::Difficulty;
use crate::error::{Error, Result};
use crate::{solver, uniqueness};

/// Seed attempts before giving up. A single random cell on an empty grid can
/// never make it unsolvable, so in practice the first attempt succeeds.
const SEED_ATTEMPTS: usize = 8;

/// Seeded puzzle generator. All randomness flows through the injected RNG,
/// so a fixed seed reproduces the exact (puzzle, solution) pair.
pub struct PuzzleGenerator {
    rng: rand::rngs::StdRng,
}

impl PuzzleGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Produces a (puzzle, solution) pair for the given difficulty.
    ///
    /// A full solution is built by solving a grid holding one random seed
    /// cell, then cells are removed box by box down to a target count drawn
    /// from the difficulty band. A final repair pass may restore one cell as
    /// an extra given, so the puzzle keeps between `min_cells` and
    /// `max_cells + 1` filled cells.
    pub fn generate(&mut self, difficulty: Difficulty) -> Result<(Grid, Grid)> {
        for attempt in 1..=SEED_ATTEMPTS {
            // Symmetry-breaking seed so repeated runs don't all converge to
            // the same canonical solution.
            let mut grid = Grid::empty();
            let row = self.rng.gen_range(0..9);
            let col = self.rng.gen_range(0..9);
            let value = self.rng.gen_range(1..=9);
            grid.put(row, col, value);

            let solution = match solver::solve(&grid) {
                Ok(s) => s,
                Err(Error::Unsolvable) => {
                    debug!("seed attempt {attempt} produced an unsolvable grid, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let band = difficulty.band();
            let cells_to_keep = self.rng.gen_range(band.min_cells..=band.max_cells);
            let mut puzzle = self.carve(&solution, cells_to_keep);

            // One restored given is the whole mitigation for ambiguity; the
            // local check is conservative, and a full uniqueness proof is
            // deliberately not attempted here.
            if let Some((r, c)) = uniqueness::first_ambiguous_cell(&puzzle, &solution) {
                debug!("restoring ambiguous cell ({r}, {c}) from the solution");
                puzzle.put(r, c, solution.get(r, c));
            }

            debug!(
                "generated {difficulty} puzzle with {} givens (target {cells_to_keep})",
                puzzle.filled_count()
            );
            return Ok((puzzle, solution));
        }
        Err(Error::GenerationFailed { attempts: SEED_ATTEMPTS })
    }

    /// Zeroes cells of a solution copy, spreading the kept cells as evenly
    /// as possible across the nine boxes: floor(n / 9) per box, with the
    /// remainder going one extra to the first boxes in block-row-major
    /// order. Within a box the kept cells are chosen by shuffle.
    fn carve(&mut self, solution: &Grid, cells_to_keep: usize) -> Grid {
        let mut puzzle = solution.clone();
        let base = cells_to_keep / 9;
        let mut extra = cells_to_keep % 9;
        for b in 0..9 {
            let mut positions = box_positions(b).collect_vec();
            positions.shuffle(&mut self.rng);
            let mut keep = base;
            if extra > 0 {
                keep += 1;
                extra -= 1;
            }
            for &(r, c) in &positions[keep..] {
                puzzle.put(r, c, 0);
            }
        }
        puzzle
    }
}

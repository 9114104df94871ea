use std::fmt::{self, Display, Formatter};

use crate::board::Grid;

/// Named difficulty levels, ordered from most to fewest givens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
    Evil,
}

/// Inclusive range of filled cells a generated puzzle keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub min_cells: usize,
    pub max_cells: usize,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
        Difficulty::Evil,
    ];

    pub fn band(self) -> Band {
        match self {
            Difficulty::Easy => Band { min_cells: 38, max_cells: 45 },
            Difficulty::Medium => Band { min_cells: 30, max_cells: 35 },
            Difficulty::Hard => Band { min_cells: 25, max_cells: 30 },
            Difficulty::Expert => Band { min_cells: 22, max_cells: 25 },
            Difficulty::Evil => Band { min_cells: 17, max_cells: 22 },
        }
    }

    /// Rough classification of an arbitrary puzzle by its number of givens.
    pub fn classify(grid: &Grid) -> Difficulty {
        match grid.filled_count() {
            n if n >= 38 => Difficulty::Easy,
            n if n >= 30 => Difficulty::Medium,
            n if n >= 25 => Difficulty::Hard,
            n if n >= 22 => Difficulty::Expert,
            _ => Difficulty::Evil,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
            Difficulty::Evil => "evil",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

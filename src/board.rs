use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::error::{Error, Result};

pub type Digit = u8; // 0 = empty; 1..=9 placed

/// A 9x9 sudoku grid. Every cell holds 0..=9; the invariant is enforced at
/// construction and on `set`, so the algorithms never re-validate values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[Digit; 9]; 9],
}

impl Grid {
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    pub fn from_rows(rows: [[Digit; 9]; 9]) -> Result<Self> {
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v > 9 {
                    return Err(Error::InvalidInput(format!(
                        "value {v} at ({r}, {c}) out of range 0..=9"
                    )));
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Accepts 81 digits with `.`, `0` or `_` for blanks; whitespace and
    /// other characters are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut digits = Vec::with_capacity(81);
        for ch in text.chars() {
            match ch {
                '1'..='9' => digits.push(ch as Digit - b'0'),
                '0' | '.' | '_' => digits.push(0),
                _ => {}
            }
        }
        if digits.len() != 81 {
            return Err(Error::InvalidInput(format!(
                "expected 81 digits/dots, got {}",
                digits.len()
            )));
        }
        let mut grid = Self::empty();
        for (i, v) in digits.into_iter().enumerate() {
            grid.cells[i / 9][i % 9] = v;
        }
        Ok(grid)
    }

    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| if v == 0 { '.' } else { (b'0' + v) as char })
            .collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut s = String::new();
        for r in 0..9 {
            if r % 3 == 0 {
                s.push_str("+-------+-------+-------+\n");
            }
            for c in 0..9 {
                if c % 3 == 0 {
                    s.push_str("| ");
                }
                let v = self.cells[r][c];
                s.push(if v == 0 { '.' } else { (b'0' + v) as char });
                s.push(' ');
            }
            s.push_str("|\n");
        }
        s.push_str("+-------+-------+-------+\n");
        s
    }

    pub fn get(&self, row: usize, col: usize) -> Digit {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Digit) -> Result<()> {
        if row > 8 || col > 8 {
            return Err(Error::InvalidInput(format!(
                "cell ({row}, {col}) out of bounds"
            )));
        }
        if value > 9 {
            return Err(Error::InvalidInput(format!("value {value} out of range 0..=9")));
        }
        self.cells[row][col] = value;
        Ok(())
    }

    // Internal writes skip range checks; callers stay within 0..=9 and 0..9.
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Digit) {
        debug_assert!(row < 9 && col < 9 && value <= 9);
        self.cells[row][col] = value;
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// All (row, col) positions in row-major order.
    pub fn positions() -> impl Iterator<Item = (usize, usize)> {
        (0..9).cartesian_product(0..9)
    }

    /// True unless `value` already occurs elsewhere in the same row, column,
    /// or box. Does not care whether the cell itself is currently filled.
    pub fn is_placement_legal(&self, row: usize, col: usize, value: Digit) -> bool {
        for c in 0..9 {
            if c != col && self.cells[row][c] == value {
                return false;
            }
        }
        for r in 0..9 {
            if r != row && self.cells[r][col] == value {
                return false;
            }
        }
        let (br, bc) = ((row / 3) * 3, (col / 3) * 3);
        for r in br..br + 3 {
            for c in bc..bc + 3 {
                if (r, c) != (row, col) && self.cells[r][c] == value {
                    return false;
                }
            }
        }
        true
    }

    /// Win condition: every cell filled and all 27 regions free of repeats.
    pub fn is_complete_and_valid(&self) -> bool {
        (0..9).all(|r| region_complete(self.row_values(r)))
            && (0..9).all(|c| region_complete(self.col_values(c)))
            && (0..9).all(|b| region_complete(self.box_values(b)))
    }

    /// Every cell that shares a row, column, or box with an equal non-zero
    /// value. Recomputed from the full grid on each call so the result is
    /// correct after arbitrary edits, undo, or redo.
    pub fn conflicts(&self) -> BTreeSet<(usize, usize)> {
        let mut set = BTreeSet::new();
        for r in 0..9 {
            mark_duplicates((0..9).map(|c| (r, c)), self, &mut set);
        }
        for c in 0..9 {
            mark_duplicates((0..9).map(|r| (r, c)), self, &mut set);
        }
        for b in 0..9 {
            mark_duplicates(box_positions(b), self, &mut set);
        }
        set
    }

    pub fn row_values(&self, r: usize) -> [Digit; 9] {
        self.cells[r]
    }

    pub fn col_values(&self, c: usize) -> [Digit; 9] {
        let mut a = [0; 9];
        for r in 0..9 {
            a[r] = self.cells[r][c];
        }
        a
    }

    pub fn box_values(&self, b: usize) -> [Digit; 9] {
        let mut a = [0; 9];
        for (i, (r, c)) in box_positions(b).enumerate() {
            a[i] = self.cells[r][c];
        }
        a
    }
}

/// Box index of a cell, 0..9 in block-row-major order.
pub fn box_index(row: usize, col: usize) -> usize {
    (row / 3) * 3 + col / 3
}

/// The nine positions of box `b`, row-major within the box.
pub fn box_positions(b: usize) -> impl Iterator<Item = (usize, usize)> {
    let (br, bc) = ((b / 3) * 3, (b % 3) * 3);
    (br..br + 3).cartesian_product(bc..bc + 3)
}

fn region_complete(values: [Digit; 9]) -> bool {
    values.iter().all(|&v| v != 0) && values.iter().all_unique()
}

fn mark_duplicates(
    unit: impl Iterator<Item = (usize, usize)>,
    grid: &Grid,
    set: &mut BTreeSet<(usize, usize)>,
) {
    let cells: Vec<(usize, usize)> = unit.collect();
    let mut counts = [0u8; 10];
    for &(r, c) in &cells {
        counts[grid.cells[r][c] as usize] += 1;
    }
    for &(r, c) in &cells {
        let v = grid.cells[r][c] as usize;
        if v != 0 && counts[v] > 1 {
            set.insert((r, c));
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_string())
    }
}

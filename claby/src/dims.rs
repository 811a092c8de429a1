use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid, `Cell(row, col)`.
///
/// Coordinates are signed, so positions outside the grid (like `Cell(-1, 0)`) can be
/// represented and rejected by bounds checks instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(pub i32, pub i32);

impl Cell {
    pub const ZERO: Cell = Cell(0, 0);

    /// Iterates all cells of a `height` x `width` grid in row-major order.
    pub fn iter_fill(height: usize, width: usize) -> impl Iterator<Item = Cell> {
        (0..height as i32).flat_map(move |row| (0..width as i32).map(move |col| Cell(row, col)))
    }

    /// Number of orthogonal steps between two cells, ignoring walls.
    ///
    /// Defined for any pair of coordinates, the result can exceed `i32::MAX`.
    pub fn manhattan(self, other: Cell) -> u64 {
        u64::from(self.0.abs_diff(other.0)) + u64::from(self.1.abs_diff(other.1))
    }
}

/// Minimal number of moves between `a` and `b` if there were no walls at all.
pub fn distance_man(a: Cell, b: Cell) -> u64 {
    a.manhattan(b)
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, other: Cell) -> Cell {
        Cell(self.0 + other.0, self.1 + other.1)
    }
}

pub mod cell;
pub mod maze;

pub use cell::{CellWall, Passages};
pub use maze::Maze;

use thiserror::Error;

use crate::dims::Cell;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid maze dimensions {height}x{width}, both must be positive")]
    InvalidDimensions { height: usize, width: usize },
    #[error("Cell {0} is out of bounds")]
    OutOfBounds(Cell),
    #[error("Cells {0} and {1} are not neighbors")]
    NonAdjacent(Cell, Cell),
}

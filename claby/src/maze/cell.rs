use serde::{Deserialize, Serialize};

use crate::dims::Cell;

use self::CellWall::*;

/// Open passages of a single cell, one bit per [`CellWall`].
///
/// A set bit means there is *no* wall in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Passages(u8);

impl Passages {
    pub const CLOSED: Passages = Passages(0);

    pub fn new() -> Passages {
        Self::CLOSED
    }

    pub fn open(&mut self, wall: CellWall) {
        self.0 |= wall.bit();
    }

    pub fn close(&mut self, wall: CellWall) {
        self.0 &= !wall.bit();
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        self.0 & wall.bit() != 0
    }

    pub fn is_closed(&self, wall: CellWall) -> bool {
        !self.is_open(wall)
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Open directions, in the order of [`CellWall::get_in_order`].
    pub fn iter_open(self) -> impl Iterator<Item = CellWall> {
        CellWall::get_in_order()
            .into_iter()
            .filter(move |wall| self.is_open(*wall))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellWall {
    Top,
    Bottom,
    Left,
    Right,
}

impl CellWall {
    pub fn to_coord(&self) -> Cell {
        match self {
            Top => Cell(-1, 0),
            Bottom => Cell(1, 0),
            Left => Cell(0, -1),
            Right => Cell(0, 1),
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Top => Bottom,
            Bottom => Top,
            Left => Right,
            Right => Left,
        }
    }

    pub fn get_in_order() -> [CellWall; 4] {
        [Top, Bottom, Left, Right]
    }

    fn bit(&self) -> u8 {
        match self {
            Top => 0b0001,
            Bottom => 0b0010,
            Left => 0b0100,
            Right => 0b1000,
        }
    }
}

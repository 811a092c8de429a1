use std::collections::VecDeque;

use smallvec::SmallVec;

use self::CellWall::*;
use super::GraphError;
use crate::{
    array::Array2D,
    dims::Cell,
    maze::cell::{CellWall, Passages},
};

/// Rectangular grid maze, stored as an undirected graph over its cells.
///
/// Every cell keeps the set of directions it is open to. Mutations always update both ends of a
/// passage, so `b` is reachable from `a` exactly when `a` is reachable from `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Array2D<Passages>,
}

impl Maze {
    /// Creates a `height` x `width` maze, fully walled or, with `open`, without any inner walls.
    pub fn new(height: usize, width: usize, open: bool) -> Result<Self, GraphError> {
        if height == 0 || width == 0 {
            return Err(GraphError::InvalidDimensions { height, width });
        }

        let mut maze = Maze {
            cells: Array2D::new(Passages::new(), height, width),
        };
        if open {
            maze.open_all();
        }

        Ok(maze)
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter_pos()
    }

    pub fn is_in_bounds(&self, pos: Cell) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn check_bounds(&self, pos: Cell) -> Result<(), GraphError> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(GraphError::OutOfBounds(pos))
        }
    }

    /// Returns the wall of `cell` that separates it from `cell2`.
    /// If the cells are not orthogonal neighbors, returns None
    pub fn which_wall_between(cell: Cell, cell2: Cell) -> Option<CellWall> {
        match (cell2.0.checked_sub(cell.0), cell2.1.checked_sub(cell.1)) {
            (Some(-1), Some(0)) => Some(Top),
            (Some(1), Some(0)) => Some(Bottom),
            (Some(0), Some(-1)) => Some(Left),
            (Some(0), Some(1)) => Some(Right),
            _ => None,
        }
    }

    fn wall_between_checked(&self, a: Cell, b: Cell) -> Result<CellWall, GraphError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        Self::which_wall_between(a, b).ok_or(GraphError::NonAdjacent(a, b))
    }

    /// Puts a wall between `a` and `b`. Does nothing if there already is one.
    pub fn add_wall(&mut self, a: Cell, b: Cell) -> Result<(), GraphError> {
        let wall = self.wall_between_checked(a, b)?;
        self.cells[a].close(wall);
        self.cells[b].close(wall.reverse_wall());

        Ok(())
    }

    /// Opens a passage between `a` and `b`. Does nothing if it is already open.
    pub fn remove_wall(&mut self, a: Cell, b: Cell) -> Result<(), GraphError> {
        let wall = self.wall_between_checked(a, b)?;
        self.cells[a].open(wall);
        self.cells[b].open(wall.reverse_wall());

        Ok(())
    }

    /// Whether `b` can be reached from `a` in a single step.
    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        match (self.cells.get(a), Self::which_wall_between(a, b)) {
            (Some(cell), Some(wall)) => cell.is_open(wall),
            _ => false,
        }
    }

    /// Orthogonal neighbors of `cell` lying inside the grid, walls are not considered.
    pub fn neighbors_in_bounds(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        if !self.is_in_bounds(cell) {
            return SmallVec::new();
        }

        CellWall::get_in_order()
            .into_iter()
            .map(|wall| cell + wall.to_coord())
            .filter(|pos| self.is_in_bounds(*pos))
            .collect()
    }

    /// Neighbors reachable from `cell` through an open passage.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        match self.cells.get(cell) {
            Some(passages) => passages
                .iter_open()
                .map(|wall| cell + wall.to_coord())
                .collect(),
            None => SmallVec::new(),
        }
    }

    /// All walls between in-bounds cells, scanning cells in row-major order and checking the
    /// right neighbor before the bottom one.
    pub fn walls(&self) -> Vec<(Cell, Cell)> {
        let mut walls = Vec::new();

        for cell in self.iter_cells() {
            for wall in [Right, Bottom] {
                let neighbor = cell + wall.to_coord();
                if self.is_in_bounds(neighbor) && self.cells[cell].is_closed(wall) {
                    walls.push((cell, neighbor));
                }
            }
        }

        walls
    }

    pub fn open_wall_count(&self) -> usize {
        self.cells.iter().map(|c| c.count() as usize).sum::<usize>() / 2
    }

    /// Walls every cell in.
    pub fn fill(&mut self) {
        self.cells.fill(Passages::new());
    }

    /// Removes every inner wall.
    pub fn open_all(&mut self) {
        let positions: Vec<_> = self.iter_cells().collect();
        for cell in positions {
            let mut passages = Passages::new();
            for wall in CellWall::get_in_order() {
                if self.is_in_bounds(cell + wall.to_coord()) {
                    passages.open(wall);
                }
            }
            self.cells[cell] = passages;
        }
    }

    /// Finds the first pair of cells where `b` is reachable from `a` but not the other way
    /// around, or a passage leading out of the grid.
    pub fn find_inconsistency(&self) -> Option<(Cell, Cell)> {
        for cell in self.iter_cells() {
            for wall in self.cells[cell].iter_open() {
                let other = cell + wall.to_coord();
                match self.cells.get(other) {
                    Some(passages) if passages.is_open(wall.reverse_wall()) => {}
                    _ => return Some((cell, other)),
                }
            }
        }

        None
    }

    pub fn is_consistent(&self) -> bool {
        self.find_inconsistency().is_none()
    }

    /// Number of cells reachable from `start`, start included.
    pub fn reachable_count(&self, start: Cell) -> usize {
        if !self.is_in_bounds(start) {
            return 0;
        }

        let mut seen = Array2D::new(false, self.height(), self.width());
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        let mut count = 1;

        while let Some(cell) = queue.pop_front() {
            for next in self.neighbors(cell) {
                if !seen[next] {
                    seen[next] = true;
                    count += 1;
                    queue.push_back(next);
                }
            }
        }

        count
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_count(Cell::ZERO) == self.cell_count()
    }

    /// Connected and without cycles, so there is exactly one path between any two cells.
    pub fn is_perfect(&self) -> bool {
        self.open_wall_count() == self.cell_count() - 1 && self.is_connected()
    }
}

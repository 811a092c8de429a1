use rand::{seq::SliceRandom, RngCore};

use super::MazeGenerator;
use crate::{
    array::Array2D,
    dims::Cell,
    maze::{GraphError, Maze},
};

/// Randomized fusion of paths (Kruskal's algorithm).
///
/// Every cell starts with its own label. Walls are visited in random order and a wall is only
/// removed when the cells on its sides still carry different labels, after which the two labels
/// are merged.
#[derive(Debug)]
pub struct RndKruskals;

impl MazeGenerator for RndKruskals {
    fn generate(
        &self,
        height: usize,
        width: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, GraphError> {
        let mut maze = Maze::new(height, width, false)?;

        let mut walls = maze.walls();
        walls.shuffle(rng);

        let mut labels = Labels::new(height, width);
        let mut skipped = 0usize;
        for (from, to) in walls {
            if labels.merge(from, to) {
                maze.remove_wall(from, to)?;
            } else {
                skipped += 1;
            }
        }

        log::debug!(
            "Fusion carved {} passages, kept {} walls",
            maze.open_wall_count(),
            skipped
        );

        Ok(maze)
    }
}

/// Component labels of the cells, as a disjoint-set forest.
struct Labels {
    parents: Array2D<Cell>,
    sizes: Array2D<usize>,
}

impl Labels {
    fn new(height: usize, width: usize) -> Self {
        let mut parents = Array2D::new(Cell::ZERO, height, width);
        let cells: Vec<_> = parents.iter_pos().collect();
        for cell in cells {
            parents[cell] = cell;
        }

        Self {
            parents,
            sizes: Array2D::new(1, height, width),
        }
    }

    fn label(&mut self, mut cell: Cell) -> Cell {
        while self.parents[cell] != cell {
            let grandparent = self.parents[self.parents[cell]];
            self.parents[cell] = grandparent;
            cell = grandparent;
        }

        cell
    }

    /// Gives both cells the same label. Returns `false` if they already had one.
    fn merge(&mut self, a: Cell, b: Cell) -> bool {
        let (a, b) = (self.label(a), self.label(b));
        if a == b {
            return false;
        }

        let (big, small) = if self.sizes[a] >= self.sizes[b] {
            (a, b)
        } else {
            (b, a)
        };
        self.parents[small] = big;
        self.sizes[big] += self.sizes[small];

        true
    }
}

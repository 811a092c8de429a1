use rand::{Rng as _, RngCore};

use super::MazeGenerator;
use crate::maze::{CellWall, GraphError, Maze};

use CellWall::*;

/// Every cell opens either its bottom or its right wall.
///
/// Fast and simple, but heavily biased: the last row and the last column always end up as
/// single long corridors.
#[derive(Debug)]
pub struct BinaryTree;

impl MazeGenerator for BinaryTree {
    fn generate(
        &self,
        height: usize,
        width: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, GraphError> {
        let mut maze = Maze::new(height, width, false)?;

        let cells: Vec<_> = maze.iter_cells().collect();
        for cell in cells {
            let order = if rng.gen_bool(0.5) {
                [Bottom, Right]
            } else {
                [Right, Bottom]
            };

            let open = order
                .into_iter()
                .map(|wall| cell + wall.to_coord())
                .find(|&neighbor| maze.is_in_bounds(neighbor));

            if let Some(neighbor) = open {
                maze.remove_wall(cell, neighbor)?;
            }
        }

        log::debug!("Binary tree carved {} passages", maze.open_wall_count());

        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::mock::StepRng, SeedableRng as _};

    use super::*;
    use crate::{algorithms::tests::*, algorithms::Random, dims::Cell};

    #[test]
    fn perfect() {
        assert_generates_perfect(&BinaryTree);
        assert_deterministic(&BinaryTree);
    }

    #[test]
    fn last_row_and_column_are_corridors() {
        for seed in 0..10 {
            let maze = BinaryTree
                .generate(6, 5, &mut Random::seed_from_u64(seed))
                .unwrap();

            for col in 0..4 {
                assert!(maze.is_open(Cell(5, col), Cell(5, col + 1)));
            }
            for row in 0..5 {
                assert!(maze.is_open(Cell(row, 4), Cell(row + 1, 4)));
            }
        }
    }

    #[test]
    fn scripted_rng_always_goes_one_way() {
        // a constant 2^63 never passes `gen_bool(0.5)`, so every cell prefers going right
        let maze = BinaryTree
            .generate(3, 3, &mut StepRng::new(1 << 63, 0))
            .unwrap();
        assert!(maze.is_perfect());
        for row in 0..3 {
            assert!(maze.is_open(Cell(row, 0), Cell(row, 1)));
            assert!(maze.is_open(Cell(row, 1), Cell(row, 2)));
        }
        assert!(maze.is_open(Cell(0, 2), Cell(1, 2)));
        assert!(maze.is_open(Cell(1, 2), Cell(2, 2)));
    }
}

use hashbrown::HashSet;
use rand::{seq::SliceRandom as _, Rng as _, RngCore};
use smallvec::SmallVec;

use super::MazeGenerator;
use crate::{
    dims::Cell,
    maze::{GraphError, Maze},
};

/// Exhaustive exploration: a randomized depth-first walk that backtracks from dead ends.
///
/// Produces long, winding corridors with few branches.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn generate(
        &self,
        height: usize,
        width: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, GraphError> {
        let mut maze = Maze::new(height, width, false)?;
        let cell_count = maze.cell_count();

        let mut visited = HashSet::with_capacity(cell_count);
        let mut stack = Vec::with_capacity(cell_count);

        let start = Cell(
            rng.gen_range(0..height as i32),
            rng.gen_range(0..width as i32),
        );

        visited.insert(start);
        stack.push(start);
        let mut deepest = 0;
        while let Some(&current) = stack.last() {
            let unvisited_neighbors = maze
                .neighbors_in_bounds(current)
                .into_iter()
                .filter(|cell| !visited.contains(cell))
                .collect::<SmallVec<[_; 4]>>();

            match unvisited_neighbors.choose(rng) {
                Some(&next) => {
                    maze.remove_wall(current, next)?;
                    visited.insert(next);
                    stack.push(next);
                    deepest = deepest.max(stack.len());
                }
                None => {
                    stack.pop();
                }
            }
        }

        log::debug!(
            "Exploration started at {}, visited {} cells, deepest stack {}",
            start,
            visited.len(),
            deepest
        );

        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::mock::StepRng, SeedableRng as _};

    use super::*;
    use crate::algorithms::{tests::*, Random};

    #[test]
    fn perfect() {
        assert_generates_perfect(&DepthFirstSearch);
        assert_deterministic(&DepthFirstSearch);
    }

    #[test]
    fn starts_anywhere() {
        // different seeds must not all produce the same maze
        let mazes: Vec<_> = (0..6)
            .map(|seed| {
                DepthFirstSearch
                    .generate(4, 4, &mut Random::seed_from_u64(seed))
                    .unwrap()
            })
            .collect();
        assert!(mazes.iter().any(|maze| maze != &mazes[0]));
    }

    #[test]
    fn scripted_walk_follows_first_neighbor() {
        // a constant zero stream lands on (0, 0) and then always takes the first candidate
        let maze = DepthFirstSearch
            .generate(2, 2, &mut StepRng::new(0, 0))
            .unwrap();
        assert!(maze.is_perfect());
        assert!(maze.is_open(Cell(0, 0), Cell(1, 0)));
        assert!(maze.is_open(Cell(1, 0), Cell(1, 1)));
        assert!(maze.is_open(Cell(1, 1), Cell(0, 1)));
    }
}

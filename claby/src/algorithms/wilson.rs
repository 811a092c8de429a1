use rand::{Rng as _, RngCore};

use super::{random_cell_where, MazeGenerator};
use crate::{
    array::Array2D,
    dims::Cell,
    maze::{GraphError, Maze},
};

/// Wilson's algorithm: loop-erased random walks from unvisited cells until they hit the maze.
///
/// Unlike the other generators it has no bias at all, every spanning tree of the grid is
/// equally likely.
#[derive(Debug)]
pub struct Wilson;

impl MazeGenerator for Wilson {
    fn generate(
        &self,
        height: usize,
        width: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, GraphError> {
        let mut maze = Maze::new(height, width, false)?;

        let mut visited = Array2D::new(false, height, width);
        let mut unvisited = maze.cell_count();

        // index of each cell in the current walk
        let mut in_path: Array2D<Option<usize>> = Array2D::new(None, height, width);
        let mut path = Vec::new();
        let mut walks = 0usize;

        if let Some(first) = random_cell_where(&visited, unvisited, |v| !v, rng) {
            visited[first] = true;
            unvisited -= 1;
        }

        while let Some(start) = random_cell_where(&visited, unvisited, |v| !v, rng) {
            walks += 1;
            path.clear();
            path.push(start);
            in_path[start] = Some(0);

            // a walk only starts while another cell is already visited, so the grid has at
            // least two cells and every cell has a neighbor
            loop {
                let current = path[path.len() - 1];
                let neighbors = maze.neighbors_in_bounds(current);
                let next = neighbors[rng.gen_range(0..neighbors.len())];

                if visited[next] {
                    path.push(next);
                    break;
                }

                match in_path[next] {
                    Some(idx) => {
                        for erased in path.drain(idx + 1..) {
                            in_path[erased] = None;
                        }
                    }
                    None => {
                        in_path[next] = Some(path.len());
                        path.push(next);
                    }
                }
            }

            for pair in path.windows(2) {
                maze.remove_wall(pair[0], pair[1])?;
            }

            for &cell in &path[..path.len() - 1] {
                in_path[cell] = None;
                visited[cell] = true;
                unvisited -= 1;
            }
        }

        log::debug!("Wilson finished after {} walks", walks);

        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;
    use rand::SeedableRng as _;

    use super::*;
    use crate::algorithms::{tests::*, Random};

    #[test]
    fn perfect() {
        assert_generates_perfect(&Wilson);
        assert_deterministic(&Wilson);
    }

    #[test]
    fn two_by_two_is_unbiased() {
        const TRIALS: usize = 4000;

        let mut rng = Random::seed_from_u64(2024);
        let mut counts: HashMap<Vec<(Cell, Cell)>, usize> = HashMap::new();

        for _ in 0..TRIALS {
            let maze = Wilson.generate(2, 2, &mut rng).unwrap();
            assert_eq!(maze.open_wall_count(), 3);
            assert_eq!(maze.walls().len(), 1);
            *counts.entry(maze.walls()).or_default() += 1;
        }

        // a 2x2 grid has exactly four spanning trees, each missing one of the four walls
        assert_eq!(counts.len(), 4);
        for (walls, count) in counts {
            assert!(
                (800..1200).contains(&count),
                "tree without {:?} appeared {} times out of {}",
                walls,
                count,
                TRIALS
            );
        }
    }

    #[test]
    fn two_cells_always_connect() {
        for seed in 0..20 {
            for (h, w) in [(1, 2), (2, 1)] {
                let maze = Wilson.generate(h, w, &mut Random::seed_from_u64(seed)).unwrap();
                assert_eq!(maze.open_wall_count(), 1);
                assert!(maze.is_open(Cell(0, 0), Cell(h as i32 - 1, w as i32 - 1)));
            }
        }
    }

    #[test]
    fn single_cell() {
        let maze = Wilson.generate(1, 1, &mut Random::seed_from_u64(0)).unwrap();
        assert_eq!(maze.open_wall_count(), 0);
        assert!(maze.is_perfect());
    }
}

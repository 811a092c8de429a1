use rand::{seq::SliceRandom as _, Rng as _, RngCore};
use smallvec::SmallVec;

use super::MazeGenerator;
use crate::{
    dims::Cell,
    maze::{GraphError, Maze},
};

/// Row by row, builds horizontal runs of cells and closes each run by carving down from one
/// random member. The last row is a single corridor.
#[derive(Debug)]
pub struct Sidewinder;

impl Sidewinder {
    fn close_run(
        maze: &mut Maze,
        run: &mut SmallVec<[Cell; 16]>,
        rng: &mut dyn RngCore,
    ) -> Result<(), GraphError> {
        if let Some(&cell) = run.choose(rng) {
            maze.remove_wall(cell, cell + Cell(1, 0))?;
        }
        run.clear();

        Ok(())
    }
}

impl MazeGenerator for Sidewinder {
    fn generate(
        &self,
        height: usize,
        width: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, GraphError> {
        let mut maze = Maze::new(height, width, false)?;
        let (last_row, last_col) = (height as i32 - 1, width as i32 - 1);

        let mut run = SmallVec::<[Cell; 16]>::new();
        for row in 0..last_row {
            for col in 0..last_col {
                let cell = Cell(row, col);
                run.push(cell);

                if rng.gen_bool(0.5) {
                    Self::close_run(&mut maze, &mut run, rng)?;
                } else {
                    maze.remove_wall(cell, cell + Cell(0, 1))?;
                }
            }

            run.push(Cell(row, last_col));
            Self::close_run(&mut maze, &mut run, rng)?;
        }

        for col in 0..last_col {
            maze.remove_wall(Cell(last_row, col), Cell(last_row, col + 1))?;
        }

        log::debug!("Sidewinder carved {} passages", maze.open_wall_count());

        Ok(maze)
    }
}

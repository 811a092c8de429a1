//! Grid mazes as undirected graphs over their cells.
//!
//! [`maze::Maze`] stores which neighboring cells are connected, [`algorithms`] carves perfect
//! mazes into it and [`solver`] finds paths through them.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod maze;
pub mod registry;
pub mod solver;

pub use algorithms::{generate, GenerateError, GeneratorRegistry, MazeGenerator, Random};
pub use dims::{distance_man, Cell};
pub use maze::{GraphError, Maze};
pub use solver::{solve, solve_bfs, solve_dfs, Solution, Strategy};

mod binary_tree;
mod depth_first_search;
mod rnd_kruskals;
mod sidewinder;
mod wilson;

use std::{fmt, sync::Arc};

use rand::{seq::SliceRandom as _, Rng as _, RngCore};
use thiserror::Error;

use crate::{
    array::Array2D,
    dims::Cell,
    maze::{GraphError, Maze},
    registry::Registry,
};

pub use binary_tree::BinaryTree;
pub use depth_first_search::DepthFirstSearch;
pub use rnd_kruskals::RndKruskals;
pub use sidewinder::Sidewinder;
pub use wilson::Wilson;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Registry of the maze generators.
pub type GeneratorRegistry = Registry<dyn MazeGenerator>;

/// Carves a perfect maze: every cell reachable from every other one by exactly one path.
pub trait MazeGenerator: fmt::Debug + Sync + Send {
    fn generate(
        &self,
        height: usize,
        width: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, GraphError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Unknown maze algorithm '{0}'")]
    UnknownAlgorithm(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl GeneratorRegistry {
    /// All built-in algorithms, with exhaustive exploration as the default.
    pub fn builtin() -> Self {
        let exploration: Arc<dyn MazeGenerator> = Arc::new(DepthFirstSearch);
        let mut registry = Self::with_default(exploration.clone());

        registry.register("btree".to_string(), Arc::new(BinaryTree));
        registry.register("sidewinder".to_string(), Arc::new(Sidewinder));
        registry.register("fusion".to_string(), Arc::new(RndKruskals));
        registry.register("exploration".to_string(), exploration);
        registry.register("wilson".to_string(), Arc::new(Wilson));

        registry
    }

    pub fn generate(
        &self,
        algorithm: &str,
        height: usize,
        width: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, GenerateError> {
        let generator = self
            .get(algorithm)
            .ok_or_else(|| GenerateError::UnknownAlgorithm(algorithm.to_string()))?;

        log::debug!("Generating {}x{} maze with '{}'", height, width, algorithm);
        Ok(generator.generate(height, width, rng)?)
    }

    /// Generates with the default algorithm, falling back to exploration if none is set.
    pub fn generate_default(
        &self,
        height: usize,
        width: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Maze, GraphError> {
        let generator = self
            .get_default()
            .unwrap_or_else(|| Arc::new(DepthFirstSearch));

        log::debug!("Generating {}x{} maze with {:?}", height, width, generator);
        generator.generate(height, width, rng)
    }
}

/// Generates a maze with one of the built-in algorithms, picked by name.
pub fn generate(
    algorithm: &str,
    height: usize,
    width: usize,
    rng: &mut dyn RngCore,
) -> Result<Maze, GenerateError> {
    GeneratorRegistry::builtin().generate(algorithm, height, width, rng)
}

/// Picks a uniformly random cell for which `pred` holds, `None` if there is no such cell.
///
/// While most of the cells qualify, random positions are drawn until one does; otherwise the
/// candidates are collected first.
pub(crate) fn random_cell_where(
    grid: &Array2D<bool>,
    remaining: usize,
    pred: impl Fn(bool) -> bool,
    rng: &mut dyn RngCore,
) -> Option<Cell> {
    if remaining == 0 || grid.is_empty() {
        return None;
    }

    if remaining < grid.len() / 10 {
        let candidates = grid
            .iter_pos()
            .filter(|&pos| pred(grid[pos]))
            .collect::<Vec<_>>();
        candidates.choose(rng).copied()
    } else {
        loop {
            let pos = Cell(
                rng.gen_range(0..grid.height() as i32),
                rng.gen_range(0..grid.width() as i32),
            );

            if pred(grid[pos]) {
                return Some(pos);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::SeedableRng as _;

    use super::*;

    pub const SIZES: [(usize, usize); 9] = [
        (1, 1),
        (1, 2),
        (2, 1),
        (1, 5),
        (5, 1),
        (2, 2),
        (3, 3),
        (6, 9),
        (17, 11),
    ];

    /// Runs `generator` over a bunch of sizes and seeds and checks each result is perfect.
    pub fn assert_generates_perfect(generator: &dyn MazeGenerator) {
        for (h, w) in SIZES {
            for seed in 0..8 {
                let mut rng = Random::seed_from_u64(seed);
                let maze = generator.generate(h, w, &mut rng).unwrap();

                assert_eq!(maze.height(), h);
                assert_eq!(maze.width(), w);
                assert!(maze.is_consistent(), "{:?} {}x{}", generator, h, w);
                assert_eq!(maze.open_wall_count(), h * w - 1, "{:?} {}x{}", generator, h, w);
                assert!(maze.is_connected(), "{:?} {}x{}", generator, h, w);
            }
        }
    }

    pub fn assert_deterministic(generator: &dyn MazeGenerator) {
        let a = generator
            .generate(8, 8, &mut Random::seed_from_u64(42))
            .unwrap();
        let b = generator
            .generate(8, 8, &mut Random::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn builtin_registry() {
        let registry = GeneratorRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec!["btree", "exploration", "fusion", "sidewinder", "wilson"]
        );
        assert!(registry.get_default().is_some());
    }

    #[test]
    fn generate_by_name() {
        let mut rng = Random::seed_from_u64(7);
        for name in GeneratorRegistry::builtin().names() {
            let maze = generate(&name, 1, 5, &mut rng).unwrap();
            assert_eq!(maze.open_wall_count(), 4);
            assert!(maze.walls().is_empty());
            assert!(maze.is_perfect());
        }
    }

    #[test]
    fn default_generator() {
        let builtin = GeneratorRegistry::builtin()
            .generate_default(4, 4, &mut Random::seed_from_u64(1))
            .unwrap();
        let exploration = DepthFirstSearch
            .generate(4, 4, &mut Random::seed_from_u64(1))
            .unwrap();
        assert_eq!(builtin, exploration);

        let empty = GeneratorRegistry::new()
            .generate_default(4, 4, &mut Random::seed_from_u64(1))
            .unwrap();
        assert_eq!(empty, exploration);
    }

    #[test]
    fn generate_errors() {
        let mut rng = Random::seed_from_u64(7);
        assert_eq!(
            generate("maze-o-matic", 3, 3, &mut rng),
            Err(GenerateError::UnknownAlgorithm("maze-o-matic".to_string()))
        );
        assert_eq!(
            generate("wilson", 0, 3, &mut rng),
            Err(GenerateError::Graph(GraphError::InvalidDimensions {
                height: 0,
                width: 3
            }))
        );
    }

    #[test]
    fn random_cell_respects_predicate() {
        let mut rng = Random::seed_from_u64(3);
        let mut grid = Array2D::new(true, 10, 10);

        assert_eq!(random_cell_where(&grid, 0, |v| !v, &mut rng), None);
        assert_eq!(
            random_cell_where(&Array2D::new(false, 0, 0), 1, |v| !v, &mut rng),
            None
        );

        grid[Cell(4, 7)] = false;
        for _ in 0..20 {
            assert_eq!(
                random_cell_where(&grid, 1, |v| !v, &mut rng),
                Some(Cell(4, 7))
            );
        }

        for _ in 0..20 {
            let cell = random_cell_where(&grid, 99, |v| v, &mut rng).unwrap();
            assert_ne!(cell, Cell(4, 7));
        }
    }
}

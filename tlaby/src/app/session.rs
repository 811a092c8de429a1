use std::fmt::Write as _;

use claby::{distance_man, solve, Cell, GeneratorRegistry, Maze, Random, Solution, Strategy};
use rand::SeedableRng as _;

use super::commands::{Command, CommandError, Help};
use crate::{
    logging,
    renderer::{self, Glyphs},
};

/// What the front end should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Quit,
}

/// Interpreter state, owns the current maze.
pub struct Session {
    maze: Option<Maze>,
    rng: Random,
    generators: GeneratorRegistry,
    glyphs: Glyphs,
    default_algorithm: Option<String>,
}

impl Session {
    pub fn new(rng: Random, glyphs: Glyphs, default_algorithm: Option<String>) -> Self {
        let generators = GeneratorRegistry::builtin();

        let default_algorithm = default_algorithm.filter(|name| {
            let known = generators.contains(name.as_str());
            if !known {
                log::warn!(
                    "Unknown default algorithm '{}', using the built-in default",
                    name
                );
            }
            known
        });

        Self {
            maze: None,
            rng,
            generators,
            glyphs,
            default_algorithm,
        }
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    pub fn execute_line(&mut self, line: &str) -> Result<Output, CommandError> {
        let command = line.parse()?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Output, CommandError> {
        log::debug!("Executing {:?}", command);

        let text = match command {
            Command::Help => Help.to_string(),
            Command::Generate {
                algorithm,
                height,
                width,
            } => {
                let maze = match algorithm.or_else(|| self.default_algorithm.clone()) {
                    Some(name) => self
                        .generators
                        .generate(&name, height, width, &mut self.rng)?,
                    None => self
                        .generators
                        .generate_default(height, width, &mut self.rng)?,
                };
                self.replace_maze(maze)
            }
            Command::EmptyMaze { height, width } => {
                self.replace_maze(Maze::new(height, width, true)?)
            }
            Command::FullMaze { height, width } => {
                self.replace_maze(Maze::new(height, width, false)?)
            }
            Command::GetWalls => {
                let walls = self.current()?.walls();
                if walls.is_empty() {
                    "No walls".to_string()
                } else {
                    renderer::format_walls(&walls)
                }
            }
            Command::AddWall(a, b) => {
                let maze = self.current_mut()?;
                check_neighbors(maze, a, b)?;
                maze.add_wall(a, b)?;
                renderer::render(maze)
            }
            Command::RemoveWall(a, b) => {
                let maze = self.current_mut()?;
                check_neighbors(maze, a, b)?;
                maze.remove_wall(a, b)?;
                renderer::render(maze)
            }
            Command::Fill => {
                let maze = self.current_mut()?;
                maze.fill();
                renderer::render(maze)
            }
            Command::OpenAll => {
                let maze = self.current_mut()?;
                maze.open_all();
                renderer::render(maze)
            }
            Command::Solve(strategy) => self.solve(strategy)?,
            Command::Distance(a, b) => distance_man(a, b).to_string(),
            Command::Info => info(self.current()?),
            Command::Seed(seed) => {
                self.rng = Random::seed_from_u64(seed);
                format!("Seed set to {}", seed)
            }
            Command::Debug => {
                let logger = logging::get_logger();
                logger.switch_debug();
                format!("Log level: {}", logger.min_level())
            }
            Command::Exit => return Ok(Output::Quit),
        };

        Ok(Output::Text(text))
    }

    fn current(&self) -> Result<&Maze, CommandError> {
        self.maze.as_ref().ok_or(CommandError::NoMaze)
    }

    fn current_mut(&mut self) -> Result<&mut Maze, CommandError> {
        self.maze.as_mut().ok_or(CommandError::NoMaze)
    }

    fn replace_maze(&mut self, maze: Maze) -> String {
        let rendered = renderer::render(&maze);
        self.maze = Some(maze);
        rendered
    }

    /// Solves from the top left to the bottom right corner and draws the result.
    fn solve(&self, strategy: Strategy) -> Result<String, CommandError> {
        let maze = self.current()?;
        let start = Cell(0, 0);
        let end = Cell(maze.height() as i32 - 1, maze.width() as i32 - 1);

        let solution = solve(maze, start, end, strategy)?;
        let markers = renderer::solution_markers(solution.cells(), start, end, &self.glyphs);
        let mut out = renderer::render_with_markers(maze, &markers, self.glyphs.blank);

        let _ = match &solution {
            Solution::Path(path) => write!(out, "Path of {} cells ({})", path.len(), strategy),
            Solution::Explored(cells) => write!(
                out,
                "No path from {} to {}, explored {} cells ({})",
                start,
                end,
                cells.len(),
                strategy
            ),
        };

        Ok(out)
    }
}

/// Rejects pairs that are not orthogonal neighbors inside the maze.
fn check_neighbors(maze: &Maze, a: Cell, b: Cell) -> Result<(), CommandError> {
    maze.check_bounds(a)?;
    maze.check_bounds(b)?;

    if maze.neighbors_in_bounds(a).contains(&b) {
        Ok(())
    } else {
        Err(CommandError::NotNeighbors(a, b))
    }
}

fn info(maze: &Maze) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Size: {}x{}", maze.height(), maze.width());
    let _ = writeln!(out, "Open walls: {}", maze.open_wall_count());
    let _ = writeln!(out, "Walls: {}", maze.walls().len());
    let _ = writeln!(out, "Perfect: {}", if maze.is_perfect() { "yes" } else { "no" });
    let _ = match maze.find_inconsistency() {
        None => write!(out, "Consistent: yes"),
        Some((a, b)) => write!(out, "Consistent: no, {} and {} disagree", a, b),
    };

    out
}

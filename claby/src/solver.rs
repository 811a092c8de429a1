use std::{collections::VecDeque, fmt, str::FromStr};

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::{
    dims::Cell,
    maze::{GraphError, Maze},
};

/// Order in which the frontier of a search is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Frontier is a stack, the most recently discovered cell is expanded first.
    DepthFirst,
    /// Frontier is a queue, paths found are the shortest ones.
    BreadthFirst,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Strategy::DepthFirst),
            "bfs" => Ok(Strategy::BreadthFirst),
            _ => Err(format!("unknown search strategy '{}', expected 'dfs' or 'bfs'", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "dfs"),
            Strategy::BreadthFirst => write!(f, "bfs"),
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// Cells from start to end, both included.
    Path(Vec<Cell>),
    /// End is unreachable, these are all the cells the search expanded, in order.
    Explored(Vec<Cell>),
}

impl Solution {
    pub fn is_path(&self) -> bool {
        matches!(self, Solution::Path(_))
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Solution::Path(path) => Some(path),
            Solution::Explored(_) => None,
        }
    }

    /// Either the path or the explored cells.
    pub fn cells(&self) -> &[Cell] {
        match self {
            Solution::Path(cells) | Solution::Explored(cells) => cells,
        }
    }
}

/// Searches for a path from `start` to `end` through open passages.
pub fn solve(
    maze: &Maze,
    start: Cell,
    end: Cell,
    strategy: Strategy,
) -> Result<Solution, GraphError> {
    maze.check_bounds(start)?;
    maze.check_bounds(end)?;

    let mut frontier = VecDeque::from([start]);
    let mut expanded = HashSet::new();
    let mut order = Vec::new();
    let mut predecessors: HashMap<Cell, Option<Cell>> = HashMap::new();
    predecessors.insert(start, None);

    let take = |frontier: &mut VecDeque<Cell>| match strategy {
        Strategy::DepthFirst => frontier.pop_back(),
        Strategy::BreadthFirst => frontier.pop_front(),
    };

    while let Some(cell) = take(&mut frontier) {
        if cell == end {
            let path = reconstruct_path(&predecessors, end);
            log::trace!(
                "{} found a path of {} cells after expanding {} cells",
                strategy,
                path.len(),
                order.len()
            );
            return Ok(Solution::Path(path));
        }

        if !expanded.insert(cell) {
            continue;
        }
        order.push(cell);

        for next in maze.neighbors(cell) {
            if !expanded.contains(&next) {
                frontier.push_back(next);
                predecessors.insert(next, Some(cell));
            }
        }
    }

    log::trace!(
        "{} could not reach {} from {}, expanded {} cells",
        strategy,
        end,
        start,
        order.len()
    );
    Ok(Solution::Explored(order))
}

pub fn solve_dfs(maze: &Maze, start: Cell, end: Cell) -> Result<Solution, GraphError> {
    solve(maze, start, end, Strategy::DepthFirst)
}

pub fn solve_bfs(maze: &Maze, start: Cell, end: Cell) -> Result<Solution, GraphError> {
    solve(maze, start, end, Strategy::BreadthFirst)
}

fn reconstruct_path(predecessors: &HashMap<Cell, Option<Cell>>, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&Some(prev)) = predecessors.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    path
}

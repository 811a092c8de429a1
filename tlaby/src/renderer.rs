use std::fmt::Write as _;

use claby::{Cell, Maze};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Glyph shown in the middle of each marked cell.
pub type Markers = HashMap<Cell, char>;

/// Characters used for the solution overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    #[serde(default = "default_start")]
    pub start: char,
    #[serde(default = "default_end")]
    pub end: char,
    #[serde(default = "default_path")]
    pub path: char,
    #[serde(default = "default_blank")]
    pub blank: char,
}

fn default_start() -> char {
    'D'
}

fn default_end() -> char {
    'A'
}

fn default_path() -> char {
    '*'
}

fn default_blank() -> char {
    ' '
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            path: default_path(),
            blank: default_blank(),
        }
    }
}

pub fn render(maze: &Maze) -> String {
    render_with_markers(maze, &Markers::new(), ' ')
}

/// Draws the maze with box-drawing characters, three columns per cell.
///
/// Unmarked cells are filled with `blank`.
pub fn render_with_markers(maze: &Maze, markers: &Markers, blank: char) -> String {
    let (height, width) = (maze.height() as i32, maze.width() as i32);
    let mut out = String::new();

    out.push('┏');
    out.push_str(&"━━━┳".repeat(width as usize - 1));
    out.push_str("━━━┓\n");

    for row in 0..height {
        if row > 0 {
            out.push('┣');
            for col in 0..width {
                let segment = if maze.is_open(Cell(row - 1, col), Cell(row, col)) {
                    "   "
                } else {
                    "━━━"
                };
                out.push_str(segment);
                out.push(if col == width - 1 { '┫' } else { '╋' });
            }
            out.push('\n');
        }

        out.push('┃');
        for col in 0..width {
            let cell = Cell(row, col);
            let glyph = markers.get(&cell).copied().unwrap_or(blank);
            let separator = if maze.is_open(cell, Cell(row, col + 1)) {
                ' '
            } else {
                '┃'
            };
            let _ = write!(out, " {} {}", glyph, separator);
        }
        out.push('\n');
    }

    out.push('┗');
    out.push_str(&"━━━┻".repeat(width as usize - 1));
    out.push_str("━━━┛\n");

    out
}

/// Marks `cells` with the path glyph, then `start` and `end` with their own.
pub fn solution_markers(cells: &[Cell], start: Cell, end: Cell, glyphs: &Glyphs) -> Markers {
    let mut markers: Markers = cells.iter().map(|&cell| (cell, glyphs.path)).collect();
    markers.insert(start, glyphs.start);
    markers.insert(end, glyphs.end);

    markers
}

/// One wall per line, as the pair of cells it separates.
pub fn format_walls(walls: &[(Cell, Cell)]) -> String {
    walls
        .iter()
        .map(|(a, b)| format!("[{}, {}]", a, b))
        .collect::<Vec<_>>()
        .join("\n")
}

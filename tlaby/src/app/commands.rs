use std::{fmt, str::FromStr, str::SplitWhitespace};

use claby::{Cell, GenerateError, GraphError, Strategy};
use thiserror::Error;

/// Command names with their argument list and description, as shown by `/help`.
pub const HELP: &[(&str, &str, &str)] = &[
    ("/help", "", "Show this list"),
    ("/gen_btree", "h w", "Generate with the binary tree algorithm"),
    ("/gen_sidewinder", "h w", "Generate with the sidewinder algorithm"),
    ("/gen_fusion", "h w", "Generate by fusing random regions"),
    ("/gen_exploration", "h w", "Generate by exhaustive exploration"),
    ("/gen_wilson", "h w", "Generate with Wilson's algorithm"),
    (
        "/gen",
        "[algorithm] h w",
        "Generate with a named algorithm, or the configured one",
    ),
    ("/gen_empty_maze", "h w", "Create a maze without inner walls"),
    ("/gen_full_maze", "h w", "Create a maze with every wall"),
    ("/get_walls", "", "List the walls of the current maze"),
    ("/add_wall", "r1 c1 r2 c2", "Put a wall between two neighbors"),
    ("/remove_wall", "r1 c1 r2 c2", "Open the wall between two neighbors"),
    ("/fill", "", "Close every passage of the current maze"),
    ("/open_all", "", "Open every wall of the current maze"),
    ("/solve_dfs", "", "Solve from the top left to the bottom right, depth first"),
    ("/solve_bfs", "", "Solve from the top left to the bottom right, breadth first"),
    ("/distance", "r1 c1 r2 c2", "Manhattan distance between two cells"),
    ("/info", "", "Describe the current maze"),
    ("/seed", "n", "Reseed the random generator"),
    ("/debug", "", "Toggle debug logging"),
    ("/exit", "", "Quit, same as exit"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type /help for the list of commands")]
    Unknown(String),
    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
    #[error("{command}: invalid value '{value}' for <{argument}>")]
    InvalidArgument {
        command: String,
        argument: &'static str,
        value: String,
    },
    #[error("{command}: unexpected argument '{value}'")]
    UnexpectedArgument { command: String, value: String },
    #[error("There is no maze yet, generate one first")]
    NoMaze,
    #[error("Cells {0} and {1} are not neighbors")]
    NotNeighbors(Cell, Cell),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Generate {
        algorithm: Option<String>,
        height: usize,
        width: usize,
    },
    EmptyMaze {
        height: usize,
        width: usize,
    },
    FullMaze {
        height: usize,
        width: usize,
    },
    GetWalls,
    AddWall(Cell, Cell),
    RemoveWall(Cell, Cell),
    Fill,
    OpenAll,
    Solve(Strategy),
    Distance(Cell, Cell),
    Info,
    Seed(u64),
    Debug,
    Exit,
}

/// Arguments of a single command line, consumed left to right.
struct Args<'a> {
    command: &'a str,
    rest: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next<T: FromStr>(&mut self, argument: &'static str) -> Result<T, CommandError> {
        let value = self.rest.next().ok_or_else(|| CommandError::MissingArgument {
            command: self.command.to_string(),
            argument,
        })?;

        value.parse().map_err(|_| CommandError::InvalidArgument {
            command: self.command.to_string(),
            argument,
            value: value.to_string(),
        })
    }

    fn cell(&mut self, row: &'static str, col: &'static str) -> Result<Cell, CommandError> {
        Ok(Cell(self.next(row)?, self.next(col)?))
    }

    fn cell_pair(&mut self) -> Result<(Cell, Cell), CommandError> {
        Ok((self.cell("r1", "c1")?, self.cell("r2", "c2")?))
    }

    fn dims(&mut self) -> Result<(usize, usize), CommandError> {
        Ok((self.next("h")?, self.next("w")?))
    }

    fn finish<T>(mut self, value: T) -> Result<T, CommandError> {
        match self.rest.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument {
                command: self.command.to_string(),
                value: extra.to_string(),
            }),
            None => Ok(value),
        }
    }
}

fn generate_with(algorithm: &str, mut args: Args) -> Result<Command, CommandError> {
    let (height, width) = args.dims()?;
    args.finish(Command::Generate {
        algorithm: Some(algorithm.to_string()),
        height,
        width,
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let mut args = Args {
            command,
            rest: words,
        };

        match command {
            "/help" => args.finish(Command::Help),
            "/gen_btree" => generate_with("btree", args),
            "/gen_sidewinder" => generate_with("sidewinder", args),
            "/gen_fusion" => generate_with("fusion", args),
            "/gen_exploration" => generate_with("exploration", args),
            "/gen_wilson" => generate_with("wilson", args),
            "/gen" => {
                let words: Vec<&str> = args.rest.clone().collect();
                if words.len() == 3 {
                    args.rest.next();
                    generate_with(words[0], args)
                } else {
                    let (height, width) = args.dims()?;
                    args.finish(Command::Generate {
                        algorithm: None,
                        height,
                        width,
                    })
                }
            }
            "/gen_empty_maze" => {
                let (height, width) = args.dims()?;
                args.finish(Command::EmptyMaze { height, width })
            }
            "/gen_full_maze" => {
                let (height, width) = args.dims()?;
                args.finish(Command::FullMaze { height, width })
            }
            "/get_walls" => args.finish(Command::GetWalls),
            "/add_wall" => {
                let (a, b) = args.cell_pair()?;
                args.finish(Command::AddWall(a, b))
            }
            "/remove_wall" => {
                let (a, b) = args.cell_pair()?;
                args.finish(Command::RemoveWall(a, b))
            }
            "/fill" => args.finish(Command::Fill),
            "/open_all" => args.finish(Command::OpenAll),
            "/solve_dfs" => args.finish(Command::Solve(Strategy::DepthFirst)),
            "/solve_bfs" => args.finish(Command::Solve(Strategy::BreadthFirst)),
            "/distance" => {
                let (a, b) = args.cell_pair()?;
                args.finish(Command::Distance(a, b))
            }
            "/info" => args.finish(Command::Info),
            "/seed" => {
                let seed = args.next("n")?;
                args.finish(Command::Seed(seed))
            }
            "/debug" => args.finish(Command::Debug),
            "exit" | "/exit" | "/quit" => args.finish(Command::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// The `/help` text.
pub struct Help;

impl fmt::Display for Help {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = HELP
            .iter()
            .map(|(name, args, _)| name.len() + args.len() + 1)
            .max()
            .unwrap_or_default();

        writeln!(f, "Commands:")?;
        for (name, args, description) in HELP {
            let usage = format!("{} {}", name, args);
            writeln!(f, "  {:<width$}  {}", usage, description, width = width)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn generators() {
        assert_eq!(
            parse("/gen_btree 3 4"),
            Ok(Command::Generate {
                algorithm: Some("btree".to_string()),
                height: 3,
                width: 4
            })
        );
        assert_eq!(
            parse("  /gen_wilson   10 2 "),
            Ok(Command::Generate {
                algorithm: Some("wilson".to_string()),
                height: 10,
                width: 2
            })
        );
        assert_eq!(
            parse("/gen fusion 5 6"),
            Ok(Command::Generate {
                algorithm: Some("fusion".to_string()),
                height: 5,
                width: 6
            })
        );
        assert_eq!(
            parse("/gen 5 6"),
            Ok(Command::Generate {
                algorithm: None,
                height: 5,
                width: 6
            })
        );
        assert_eq!(
            parse("/gen_full_maze 2 3"),
            Ok(Command::FullMaze {
                height: 2,
                width: 3
            })
        );
    }

    #[test]
    fn cells() {
        assert_eq!(
            parse("/add_wall 0 0 0 1"),
            Ok(Command::AddWall(Cell(0, 0), Cell(0, 1)))
        );
        assert_eq!(
            parse("/remove_wall 1 2 2 2"),
            Ok(Command::RemoveWall(Cell(1, 2), Cell(2, 2)))
        );
        assert_eq!(
            parse("/distance 0 0 -3 4"),
            Ok(Command::Distance(Cell(0, 0), Cell(-3, 4)))
        );
    }

    #[test]
    fn simple() {
        assert_eq!(parse("/help"), Ok(Command::Help));
        assert_eq!(parse("/solve_bfs"), Ok(Command::Solve(Strategy::BreadthFirst)));
        assert_eq!(parse("/seed 42"), Ok(Command::Seed(42)));
        assert_eq!(parse("exit"), Ok(Command::Exit));
        assert_eq!(parse("/exit"), Ok(Command::Exit));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse("/teleport 1 1"),
            Err(CommandError::Unknown("/teleport".to_string()))
        );
        assert_eq!(
            parse("/gen_sidewinder 3"),
            Err(CommandError::MissingArgument {
                command: "/gen_sidewinder".to_string(),
                argument: "w"
            })
        );
        assert_eq!(
            parse("/gen_empty_maze -1 3"),
            Err(CommandError::InvalidArgument {
                command: "/gen_empty_maze".to_string(),
                argument: "h",
                value: "-1".to_string()
            })
        );
        assert_eq!(
            parse("/remove_wall 0 0 0 x"),
            Err(CommandError::InvalidArgument {
                command: "/remove_wall".to_string(),
                argument: "c2",
                value: "x".to_string()
            })
        );
        assert_eq!(
            parse("/fill now"),
            Err(CommandError::UnexpectedArgument {
                command: "/fill".to_string(),
                value: "now".to_string()
            })
        );
    }

    #[test]
    fn help_lists_every_command() {
        let help = Help.to_string();
        for (name, _, description) in HELP {
            assert!(help.contains(name));
            assert!(help.contains(description));
        }
    }
}

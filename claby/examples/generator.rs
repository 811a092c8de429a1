use std::env;

use claby::{solve_bfs, Cell, GeneratorRegistry, Maze, Random};

use rand::{thread_rng, Rng as _, SeedableRng as _};

fn main() {
    let mut args = env::args().skip(1);
    let algorithm = args.next().unwrap_or_else(|| "wilson".to_string());
    let sizes = args
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<u64>, _>>()
        .expect("Expected integers after the algorithm name");

    assert!(
        sizes.len() == 2 || sizes.len() == 3,
        "Usage: generator <algorithm> <height> <width> [seed]"
    );

    let input_seed = sizes.get(2).copied();
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());
    let mut rng = Random::seed_from_u64(seed);

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let registry = GeneratorRegistry::builtin();
    let maze = registry
        .generate(&algorithm, sizes[0] as usize, sizes[1] as usize, &mut rng)
        .unwrap_or_else(|err| panic!("{}", err));

    show_maze(&maze);

    let end = Cell(maze.height() as i32 - 1, maze.width() as i32 - 1);
    let solution = solve_bfs(&maze, Cell::ZERO, end).unwrap();
    println!(
        "{} walls, path from {} to {} has {} cells",
        maze.walls().len(),
        Cell::ZERO,
        end,
        solution.cells().len()
    );
}

fn show_maze(maze: &Maze) {
    println!("+{}", "--+".repeat(maze.width()));
    for row in 0..maze.height() as i32 {
        print!("|");
        for col in 0..maze.width() as i32 {
            let open = maze.is_open(Cell(row, col), Cell(row, col + 1));
            print!("{}", if open { "   " } else { "  |" });
        }
        println!();

        print!("+");
        for col in 0..maze.width() as i32 {
            let open = maze.is_open(Cell(row, col), Cell(row + 1, col));
            print!("{}", if open { "  +" } else { "--+" });
        }
        println!();
    }
}

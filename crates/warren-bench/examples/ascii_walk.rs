//! Render a seeded maze as ASCII walls, then take a validated random walk.
//!
//! Demonstrates: seeded generation → wall rendering from `Span` runs →
//! movement through `cell(x, y)` views with every step checked.
//!
//! Usage: `cargo run -p warren-bench --example ascii_walk [seed]`

use rand::seq::IndexedRandom;
use warren::prelude::*;
use warren_bench::reference_maze;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    println!("=== Warren ASCII Walk (seed {seed}) ===\n");

    let maze = reference_maze(seed);
    let width = maze.width() as usize;
    let height = maze.height() as usize;

    // --- Walk: 64 validated random steps from the bottom-left corner ---
    let mut rng = rand::rng();
    let (mut x, mut y) = (0i32, 0i32);
    let mut trail = vec![false; width * height];
    trail[0] = true;

    for _ in 0..64 {
        let cell = maze.cell(x, y).unwrap();
        let open: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&dir| cell.can_go(dir))
            .collect();
        // Every cell of a carved maze keeps at least one passage.
        let dir = *open.choose(&mut rng).unwrap();
        let next = cell.step(dir).unwrap();
        x = next.x() as i32;
        y = next.y() as i32;
        trail[y as usize * width + x as usize] = true;
    }

    // --- Render: '#' walls on a (2w+1) x (2h+1) canvas ---
    let mut canvas = vec![vec![' '; 2 * width + 1]; 2 * height + 1];

    for (line_y, line) in maze.walls().horizontal().iter().enumerate() {
        for span in line {
            for col in 2 * span.begin as usize..=2 * span.end as usize {
                canvas[2 * line_y][col] = '#';
            }
        }
    }
    for (line_x, line) in maze.walls().vertical().iter().enumerate() {
        for span in line {
            for row in 2 * span.begin as usize..=2 * span.end as usize {
                canvas[row][2 * line_x] = '#';
            }
        }
    }
    for cell_y in 0..height {
        for cell_x in 0..width {
            if trail[cell_y * width + cell_x] {
                canvas[2 * cell_y + 1][2 * cell_x + 1] = '.';
            }
        }
    }
    canvas[2 * y as usize + 1][2 * x as usize + 1] = '@';

    // Row 0 is the bottom of the board, so print top-down.
    for row in canvas.iter().rev() {
        println!("{}", row.iter().collect::<String>());
    }

    let visited = trail.iter().filter(|&&seen| seen).count();
    println!(
        "\nVisited {visited} of {} cells; walker ended at ({x}, {y}).",
        width * height
    );
}

//! Benchmark profiles and utilities for the Warren maze toolkit.
//!
//! Provides pre-built maze profiles shared by the benchmarks and the
//! `ascii_walk` example:
//!
//! - [`reference_maze`]: 14x9 board (126 cells), the classic demo size
//! - [`stress_maze`]: 128x128 board (16K cells) for stress runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use warren::Maze;

/// Build the reference profile: a 14x9 board (126 cells).
///
/// Small enough to render in a terminal, large enough that the carve
/// has to backtrack many times.
pub fn reference_maze(seed: u64) -> Maze {
    Maze::seeded(14, 9, seed).unwrap()
}

/// Build the stress profile: a 128x128 board (16K cells).
///
/// Same pipeline as [`reference_maze`] at roughly 130x the cell count.
pub fn stress_maze(seed: u64) -> Maze {
    Maze::seeded(128, 128, seed).unwrap()
}

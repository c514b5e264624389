//! Maze invariant test helpers.
//!
//! These functions verify that a carved grid satisfies the structural
//! invariants of a perfect maze. Reused across the unit and property test
//! modules of this crate.

use crate::grid::Grid;
use std::collections::VecDeque;

/// Assert that every open passage is mirrored on the neighbouring cell and
/// never points out of the grid.
pub fn assert_passage_symmetry(grid: &Grid) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let mask = grid.passages(x, y).unwrap();
            for dir in mask.iter() {
                let (dx, dy) = dir.offset();
                let (nx, ny) = (x + dx, y + dy);
                let neighbour = grid.passages(nx, ny).unwrap_or_else(|| {
                    panic!("passage at ({x}, {y}) toward {dir:?} leaves the grid")
                });
                assert!(
                    neighbour.is_open(dir.opposite()),
                    "passage symmetry violated: ({x}, {y}) opens {dir:?} \
                     but ({nx}, {ny}) does not open {:?}",
                    dir.opposite()
                );
            }
        }
    }
}

/// Assert that no cell of a multi-cell grid is walled off entirely.
pub fn assert_no_isolated_cells(grid: &Grid) {
    if grid.cell_count() == 1 {
        return;
    }
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let mask = grid.passages(x, y).unwrap();
            assert!(!mask.is_empty(), "cell ({x}, {y}) has no open passages");
        }
    }
}

/// Assert that the passage graph is a spanning tree: exactly
/// `cell_count - 1` edges and every cell reachable from the origin.
///
/// Connectedness with that edge count also rules out cycles.
pub fn assert_spanning_tree(grid: &Grid) {
    assert_eq!(
        grid.passage_count(),
        grid.cell_count() - 1,
        "passage count is not cell_count - 1"
    );

    let width = grid.width() as usize;
    let mut seen = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    seen[0] = true;
    queue.push_back((0i32, 0i32));
    let mut reached = 1usize;

    while let Some((x, y)) = queue.pop_front() {
        let mask = grid.passages(x, y).unwrap();
        for dir in mask.iter() {
            let (dx, dy) = dir.offset();
            let (nx, ny) = (x + dx, y + dy);
            assert!(
                grid.passages(nx, ny).is_some(),
                "passage at ({x}, {y}) toward {dir:?} leaves the grid"
            );
            let index = (ny as usize) * width + nx as usize;
            if !seen[index] {
                seen[index] = true;
                reached += 1;
                queue.push_back((nx, ny));
            }
        }
    }

    assert_eq!(
        reached,
        grid.cell_count(),
        "passage graph is not connected: reached {reached} of {} cells",
        grid.cell_count()
    );
}

/// Run all maze invariant checks on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_passage_symmetry(grid);
    assert_no_isolated_cells(grid);
    assert_spanning_tree(grid);
}

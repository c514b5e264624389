//! The randomized depth-first carve behind [`Grid::generate`](crate::Grid::generate).

use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use warren_core::{Direction, Passages};

/// Flat row-major index of the neighbour of `index` toward `dir`, or `None`
/// at the grid edge.
///
/// Left/right neighbours never cross a row boundary; up/down neighbours
/// stop at the last row and at row 0.
pub(crate) fn neighbour_of(
    index: usize,
    dir: Direction,
    width: usize,
    height: usize,
) -> Option<usize> {
    let x = index % width;
    let y = index / width;
    match dir {
        Direction::Up => (y + 1 < height).then(|| index + width),
        Direction::Down => (y > 0).then(|| index - width),
        Direction::Left => (x > 0).then(|| index - 1),
        Direction::Right => (x + 1 < width).then(|| index + 1),
    }
}

/// Carve a perfect maze over `width * height` cells.
///
/// Recursive backtracker: start at a uniformly random cell, repeatedly step
/// to a uniformly chosen unvisited neighbour of the stack top (opening the
/// passage on both sides), and pop when the top has no unvisited neighbours
/// left. Each cell is pushed and marked visited exactly once, so the walk
/// terminates after `width * height` visits and every accepted step adds
/// exactly one tree edge: the passage graph comes out a spanning tree.
///
/// The depth-first bias (long corridors, few short branches) is intended;
/// this is not a uniform spanning-tree sampler.
pub(crate) fn carve<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Vec<Passages> {
    let cell_count = width * height;
    let mut cells = vec![Passages::NONE; cell_count];
    let mut visited = vec![false; cell_count];
    let mut stack = Vec::with_capacity(cell_count);

    let start = rng.random_range(0..cell_count);
    visited[start] = true;
    stack.push(start);

    while let Some(&current) = stack.last() {
        let mut frontier: SmallVec<[(Direction, usize); 4]> = SmallVec::new();
        for dir in Direction::ALL {
            if let Some(next) = neighbour_of(current, dir, width, height) {
                if !visited[next] {
                    frontier.push((dir, next));
                }
            }
        }

        match frontier.choose(rng) {
            Some(&(dir, next)) => {
                cells[current].open(dir);
                cells[next].open(dir.opposite());
                visited[next] = true;
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    cells
}

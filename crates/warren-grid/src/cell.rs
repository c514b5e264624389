//! Bounds-checked read views over single maze cells.

use crate::grid::Grid;
use warren_core::{Direction, Passages};

/// A read-only view of one cell of a [`Grid`].
///
/// Obtained from [`Grid::cell`], which guarantees the coordinate is in
/// bounds; the view captures the cell's passage mask at creation and
/// borrows the grid only to answer [`step`](CellRef::step). It is `Copy`
/// and holds no state of its own, so call sites can pass it around freely.
#[derive(Clone, Copy, Debug)]
pub struct CellRef<'g> {
    grid: &'g Grid,
    x: u32,
    y: u32,
    passages: Passages,
}

impl<'g> CellRef<'g> {
    pub(crate) fn new(grid: &'g Grid, x: u32, y: u32, passages: Passages) -> Self {
        Self {
            grid,
            x,
            y,
            passages,
        }
    }

    /// Column of this cell.
    pub fn x(self) -> u32 {
        self.x
    }

    /// Row of this cell.
    pub fn y(self) -> u32 {
        self.y
    }

    /// The cell's full passage mask.
    pub fn passages(self) -> Passages {
        self.passages
    }

    /// Whether the passage toward `dir` is open.
    pub fn can_go(self, dir: Direction) -> bool {
        self.passages.is_open(dir)
    }

    /// Whether the passage toward the row above is open.
    pub fn can_go_up(self) -> bool {
        self.can_go(Direction::Up)
    }

    /// Whether the passage toward row 0 is open.
    pub fn can_go_down(self) -> bool {
        self.can_go(Direction::Down)
    }

    /// Whether the passage toward column 0 is open.
    pub fn can_go_left(self) -> bool {
        self.can_go(Direction::Left)
    }

    /// Whether the passage toward the column to the right is open.
    pub fn can_go_right(self) -> bool {
        self.can_go(Direction::Right)
    }

    /// Follow the passage toward `dir`.
    ///
    /// Returns the neighbouring cell's view when that passage is open and
    /// `None` when it is walled off, so movement code validates and takes
    /// a step in one call.
    pub fn step(self, dir: Direction) -> Option<CellRef<'g>> {
        if !self.passages.is_open(dir) {
            return None;
        }
        let (dx, dy) = dir.offset();
        self.grid.cell(self.x as i32 + dx, self.y as i32 + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded(width: u32, height: u32, seed: u64) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Grid::generate(width, height, &mut rng).unwrap()
    }

    #[test]
    fn predicates_match_the_stored_mask() {
        let grid = seeded(6, 5, 9);
        for y in 0..5 {
            for x in 0..6 {
                let mask = grid.passages(x, y).unwrap();
                let view = grid.cell(x, y).unwrap();
                assert_eq!(view.can_go_up(), mask.is_open(Direction::Up));
                assert_eq!(view.can_go_down(), mask.is_open(Direction::Down));
                assert_eq!(view.can_go_left(), mask.is_open(Direction::Left));
                assert_eq!(view.can_go_right(), mask.is_open(Direction::Right));
            }
        }
    }

    #[test]
    fn view_reports_its_own_coordinate() {
        let grid = seeded(4, 4, 10);
        let view = grid.cell(2, 3).unwrap();
        assert_eq!((view.x(), view.y()), (2, 3));
    }

    #[test]
    fn step_follows_open_passages_both_ways() {
        let grid = seeded(8, 6, 12);
        for y in 0..6 {
            for x in 0..8 {
                let view = grid.cell(x, y).unwrap();
                for dir in Direction::ALL {
                    match view.step(dir) {
                        Some(neighbour) => {
                            assert!(view.can_go(dir));
                            let (dx, dy) = dir.offset();
                            assert_eq!(neighbour.x() as i32, x + dx);
                            assert_eq!(neighbour.y() as i32, y + dy);
                            // And the passage leads back.
                            let back = neighbour.step(dir.opposite()).unwrap();
                            assert_eq!((back.x(), back.y()), (view.x(), view.y()));
                        }
                        None => assert!(!view.can_go(dir)),
                    }
                }
            }
        }
    }

    #[test]
    fn single_cell_cannot_step_anywhere() {
        let grid = seeded(1, 1, 13);
        let only = grid.cell(0, 0).unwrap();
        for dir in Direction::ALL {
            assert!(!only.can_go(dir));
            assert!(only.step(dir).is_none());
        }
    }
}

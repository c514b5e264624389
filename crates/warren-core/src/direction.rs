//! The four cardinal directions of a square maze grid.

/// Cardinal direction of a passage out of a cell.
///
/// The y axis grows upward: row 0 is the bottom of the grid, so
/// [`Direction::Down`] steps toward row 0 and [`Direction::Up`] steps
/// toward the last row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the last row (y + 1).
    Up,
    /// Toward row 0 (y - 1).
    Down,
    /// Toward column 0 (x - 1).
    Left,
    /// Toward the last column (x + 1).
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the opposite way.
    ///
    /// A passage carved as `d` on one cell is always recorded as
    /// `d.opposite()` on its neighbour.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the `(dx, dy)` step for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Bit assigned to this direction inside a [`Passages`](crate::Passages) mask.
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }
}

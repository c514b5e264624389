//! Per-line wall segments of a whole maze.

use crate::span::{runs_where, Span};
use warren_core::Direction;
use warren_grid::Grid;

/// The ordered wall segments of one grid line.
///
/// Segments are sorted ascending, pairwise disjoint, and never touching;
/// an empty line is valid and means the line holds no wall at all.
pub type WallLine = Vec<Span>;

/// Every wall segment of a maze, organized per grid line.
///
/// A `width x height` grid has `height + 1` horizontal lines (line y runs
/// under row y; line `height` is the top edge) and `width + 1` vertical
/// lines (line x runs left of column x; line `width` is the right edge).
/// Renderers draw one primitive per [`Span`] and nothing for empty lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallSet {
    horizontal: Vec<WallLine>,
    vertical: Vec<WallLine>,
}

impl WallSet {
    /// Derive the complete wall geometry of a carved grid.
    ///
    /// The outermost two lines of each axis are the boundary and always
    /// come out as a single full-extent span. Internal horizontal line y
    /// compresses the cells of row y whose downward passage is closed;
    /// internal vertical line x compresses the cells of column x whose
    /// leftward passage is closed. Passage symmetry makes the mirror
    /// choice (up/right bits of the other side) equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use warren_grid::Grid;
    /// use warren_walls::{Span, WallSet};
    ///
    /// // Any perfect 2x1 maze must open its single internal passage.
    /// let mut rng = ChaCha8Rng::seed_from_u64(1);
    /// let grid = Grid::generate(2, 1, &mut rng).unwrap();
    /// let walls = WallSet::derive(&grid);
    ///
    /// assert_eq!(
    ///     walls.horizontal(),
    ///     &[vec![Span::new(0, 2)], vec![Span::new(0, 2)]],
    /// );
    /// assert_eq!(
    ///     walls.vertical(),
    ///     &[vec![Span::new(0, 1)], vec![], vec![Span::new(0, 1)]],
    /// );
    /// ```
    pub fn derive(grid: &Grid) -> WallSet {
        let width = grid.width();
        let height = grid.height();

        let mut horizontal = Vec::with_capacity(height as usize + 1);
        horizontal.push(full_line(width));
        for row in grid.rows().skip(1) {
            horizontal.push(runs_where(row.iter().copied(), |cell| {
                !cell.is_open(Direction::Down)
            }));
        }
        horizontal.push(full_line(width));

        let mut vertical = Vec::with_capacity(width as usize + 1);
        vertical.push(full_line(height));
        for column in grid.columns().skip(1) {
            vertical.push(runs_where(column, |cell| !cell.is_open(Direction::Left)));
        }
        vertical.push(full_line(height));

        WallSet {
            horizontal,
            vertical,
        }
    }

    /// The `height + 1` horizontal wall lines, bottom to top.
    pub fn horizontal(&self) -> &[WallLine] {
        &self.horizontal
    }

    /// The `width + 1` vertical wall lines, left to right.
    pub fn vertical(&self) -> &[WallLine] {
        &self.vertical
    }
}

/// A single span blocking a boundary line end to end.
fn full_line(extent: u32) -> WallLine {
    vec![Span::new(0, extent)]
}

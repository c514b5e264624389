//! The carved maze grid: validated construction and bounds-checked queries.

use crate::carve;
use crate::cell::CellRef;
use rand::Rng;
use warren_core::{MazeError, Passages};

/// A carved perfect maze over a rectangular grid.
///
/// `width * height` cells in row-major order (`index = y * width + x`,
/// with y growing upward), each holding the passage mask produced by one
/// randomized spanning-tree walk. A grid is immutable once built: queries
/// hand out copies and borrowed views, never mutable access, so a fresh
/// maze is always a wholly new `Grid` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Passages>,
}

impl Grid {
    /// Maximum size per axis: cell queries take `i32` coordinates, so each
    /// dimension must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Carve a new perfect maze over a `width x height` grid.
    ///
    /// The passage graph of the result is a spanning tree: all cells are
    /// connected, exactly `width * height - 1` passages are open, and every
    /// passage is recorded symmetrically on both of its cells. The random
    /// source drives every choice the walk makes, so a seeded `rng`
    /// reproduces the identical maze.
    ///
    /// Returns [`MazeError::InvalidDimension`] if either dimension is zero
    /// and [`MazeError::DimensionTooLarge`] if either exceeds
    /// [`Grid::MAX_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use warren_grid::Grid;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let grid = Grid::generate(9, 5, &mut rng).unwrap();
    /// assert_eq!(grid.cell_count(), 45);
    /// assert_eq!(grid.passage_count(), 44);
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        // 1. Both axes must be positive.
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        // 2. Both axes must fit signed query coordinates.
        if width > Self::MAX_DIM {
            return Err(MazeError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(MazeError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }

        let cells = carve::carve(width as usize, height as usize, rng);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Number of open bidirectional passages.
    ///
    /// A perfect maze always has `cell_count() - 1` of them.
    pub fn passage_count(&self) -> usize {
        // Each passage sets one bit on both of its cells.
        let open_bits: usize = self.cells.iter().map(|p| p.count() as usize).sum();
        open_bits / 2
    }

    /// The passage mask at `(x, y)`, or `None` outside the grid.
    pub fn passages(&self, x: i32, y: i32) -> Option<Passages> {
        self.index_of(x, y).map(|index| self.cells[index])
    }

    /// Bounds-checked view of the cell at `(x, y)`.
    ///
    /// Returns `None` whenever the coordinate falls outside
    /// `[0, width) x [0, height)`, so callers can probe freely without
    /// pre-checking bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<CellRef<'_>> {
        self.index_of(x, y)
            .map(|index| CellRef::new(self, x as u32, y as u32, self.cells[index]))
    }

    /// The rows bottom to top, each a row-major slice of cell masks.
    pub fn rows(&self) -> impl Iterator<Item = &[Passages]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// The columns left to right, each yielding its cell masks bottom to top.
    pub fn columns(&self) -> impl Iterator<Item = impl Iterator<Item = Passages> + '_> + '_ {
        let width = self.width as usize;
        (0..width).map(move |x| self.cells[x..].iter().step_by(width).copied())
    }

    /// Flat row-major index of `(x, y)`, or `None` outside the grid.
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

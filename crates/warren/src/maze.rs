//! The composed maze value: carved grid plus derived walls.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warren_core::MazeError;
use warren_grid::{CellRef, Grid};
use warren_walls::WallSet;

/// A complete maze: a carved [`Grid`] and the [`WallSet`] derived from it.
///
/// Both parts are built eagerly at construction and never change
/// afterwards; a fresh maze is a wholly new value and nothing is shared
/// between instances. Generation runs to completion synchronously, so a
/// returned maze is always fully connected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    walls: WallSet,
}

impl Maze {
    /// Generate a maze from ambient thread randomness.
    ///
    /// Every call produces an independent maze. Use [`Maze::seeded`] when
    /// the result must be reproducible.
    pub fn new(width: u32, height: u32) -> Result<Maze, MazeError> {
        let mut rng = rand::rng();
        Maze::generate_with(width, height, &mut rng)
    }

    /// Generate the maze determined by `seed`.
    ///
    /// Identical `(width, height, seed)` triples produce identical mazes,
    /// wall sets included.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren::Maze;
    ///
    /// let maze = Maze::seeded(14, 9, 42).unwrap();
    /// let again = Maze::seeded(14, 9, 42).unwrap();
    /// assert_eq!(maze, again);
    /// assert_eq!(maze.grid().passage_count(), 14 * 9 - 1);
    /// ```
    pub fn seeded(width: u32, height: u32, seed: u64) -> Result<Maze, MazeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Maze::generate_with(width, height, &mut rng)
    }

    /// Generate a maze from a caller-supplied random source.
    ///
    /// The source is consulted once per carve decision and not retained;
    /// the same source can generate any number of mazes in sequence.
    pub fn generate_with<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Maze, MazeError> {
        let grid = Grid::generate(width, height, rng)?;
        let walls = WallSet::derive(&grid);
        Ok(Maze { grid, walls })
    }

    /// Maze width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Maze height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The underlying carved grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Bounds-checked view of the cell at `(x, y)`.
    ///
    /// `None` whenever the coordinate falls outside the maze, as for
    /// [`Grid::cell`].
    pub fn cell(&self, x: i32, y: i32) -> Option<CellRef<'_>> {
        self.grid.cell(x, y)
    }

    /// The derived wall geometry.
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }
}

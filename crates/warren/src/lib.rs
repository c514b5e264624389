//! Warren: procedural perfect-maze generation with renderable wall geometry.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Warren sub-crates. For most users, adding `warren` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // Carve a reproducible 14x9 maze and look around its origin cell.
//! let maze = Maze::seeded(14, 9, 42).unwrap();
//! assert_eq!((maze.width(), maze.height()), (14, 9));
//!
//! let origin = maze.cell(0, 0).unwrap();
//! let open_sides = Direction::ALL
//!     .into_iter()
//!     .filter(|&dir| origin.can_go(dir))
//!     .count();
//! assert!(open_sides >= 1);
//!
//! // Off-grid probes are a value, not an error.
//! assert!(maze.cell(-1, 0).is_none());
//!
//! // Walls arrive per grid line, ready to draw span by span.
//! assert_eq!(maze.walls().horizontal().len(), 10);
//! assert_eq!(maze.walls().vertical().len(), 15);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | Directions, passage masks, error types |
//! | [`grid`] | `warren-grid` | Grid generation and cell views |
//! | [`walls`] | `warren-walls` | Wall spans and per-line extraction |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod maze;

/// Core vocabulary types (`warren-core`).
///
/// Contains [`types::Direction`], the per-cell [`types::Passages`] mask,
/// and the [`types::MazeError`] taxonomy.
pub use warren_core as types;

/// Grid generation and connectivity queries (`warren-grid`).
///
/// Provides [`grid::Grid`] and the bounds-checked [`grid::CellRef`] view
/// it hands out.
pub use warren_grid as grid;

/// Wall extraction (`warren-walls`).
///
/// Provides [`walls::Span`], [`walls::WallSet`], and the generic
/// [`walls::runs_where`] compressor.
pub use warren_walls as walls;

pub use maze::Maze;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
///
/// This imports the maze value itself plus the types its surface hands
/// out: directions, passage masks, cell views, wall spans, and the error
/// enum.
pub mod prelude {
    pub use crate::Maze;

    // Core types
    pub use warren_core::{Direction, MazeError, Passages};

    // Grid
    pub use warren_grid::{CellRef, Grid};

    // Walls
    pub use warren_walls::{Span, WallLine, WallSet};
}

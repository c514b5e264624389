//! Maze grid generation and connectivity queries.
//!
//! This crate carves perfect mazes. [`Grid::generate`] runs a randomized
//! depth-first spanning-tree walk over a rectangular grid, generic over the
//! random source, and returns an immutable [`Grid`] of per-cell passage
//! masks. Connectivity is read back through bounds-checked [`CellRef`]
//! views:
//!
//! - [`Grid`]: validated construction, raw mask access, row/column iteration
//! - [`CellRef`]: per-direction passability predicates and passage stepping

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;

mod carve;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell::CellRef;
pub use grid::Grid;

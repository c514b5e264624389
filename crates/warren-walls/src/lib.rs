//! Wall geometry derived from carved maze grids.
//!
//! [`WallSet::derive`] reduces a grid's passage masks to renderable wall
//! segments: for each of the `height + 1` horizontal and `width + 1`
//! vertical grid lines, the maximal blocked runs as half-open [`Span`]s.
//! The two outermost lines of each axis are always one full-extent span; a
//! fully open internal line is a valid empty [`WallLine`], rendering as
//! "no wall here". The underlying compressor, [`runs_where`], is generic
//! over any sequence and predicate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod span;
pub mod wall_set;

pub use span::{runs_where, Span};
pub use wall_set::{WallLine, WallSet};

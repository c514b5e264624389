//! Core types for the Warren maze toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: the four cardinal
//! [`Direction`]s, the per-cell [`Passages`] mask, and the [`MazeError`]
//! taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod passages;

pub use direction::Direction;
pub use error::MazeError;
pub use passages::Passages;

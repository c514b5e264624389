//! Error types for maze construction.

use std::error::Error;
use std::fmt;

/// Errors from maze construction.
///
/// Both variants are fatal at construction time: no partial maze is ever
/// produced. Out-of-range cell queries are not errors; they return `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero. A maze needs at least one cell per axis.
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A dimension exceeds the supported maximum. Cell queries take signed
    /// coordinates, so each axis must fit in `i32`.
    DimensionTooLarge {
        /// Which axis was out of range (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest supported size.
        max: u32,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum supported dimension {max}")
            }
        }
    }
}

impl Error for MazeError {}

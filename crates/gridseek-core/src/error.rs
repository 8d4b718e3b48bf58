//! Grid construction and access errors.

use std::fmt;

use crate::geom::{Point, Range};

/// Errors reported by the checked [`Grid`](crate::Grid) entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Column or row count was not positive.
    InvalidSize { columns: i32, rows: i32 },
    /// A coordinate fell outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { columns, rows } => {
                write!(f, "grid size must be positive, got {columns}x{rows}")
            }
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "cell {pos} is outside grid bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for GridError {}

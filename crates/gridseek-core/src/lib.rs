//! **gridseek-core**: the grid state machine behind gridseek.
//!
//! This crate provides the cell-kind rules and the grid they apply to:
//! geometry primitives, [`TypeKind`] and its flags, the per-grid
//! [`TypeRegistry`] of unique-kind holders, and the [`Grid`] arena with its
//! on-demand neighbor graph. Search strategies live in `gridseek-paths`.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod kind;
pub mod registry;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Frame, FrameCell, Grid, compute_frame};
pub use kind::TypeKind;
pub use registry::{Assignment, TypeRegistry};

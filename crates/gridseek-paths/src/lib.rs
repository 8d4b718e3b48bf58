//! Step-wise search over a [`gridseek_core::Grid`].
//!
//! A [`Search`] drives the cell kinds of a grid from `Default` through
//! `Queued` and `Visited` to `Path`, one [`step`](Search::step) at a time so
//! callers can animate progress. Two strategies share the same skeleton:
//!
//! - **Uniform cost** ([`UniformCost`]): FIFO frontier, breadth-first order.
//! - **Heuristic** ([`Heuristic`]): A* with the [`manhattan`] estimate.
//!
//! [`Variant`] selects either one at run time.
//!
//! # Trait hierarchy
//!
//! | Item | Role |
//! |---|---|
//! | [`Strategy`] | frontier selection and relax bookkeeping |
//! | [`Search`]`<S: Strategy>` | shared step loop, visited set, outcome |
//! | [`reconstruct`] | predecessor walk that marks the path |

mod distance;
mod heuristic;
mod path;
mod search;
mod traits;
mod uniform;
mod variant;

pub use distance::manhattan;
pub use heuristic::Heuristic;
pub use path::reconstruct;
pub use search::{Search, SearchError, SearchState, find_path};
pub use traits::Strategy;
pub use uniform::UniformCost;
pub use variant::{ParseVariantError, Variant};

use std::collections::VecDeque;

use gridseek_core::{Grid, Point};

/// The part of a search that differs between variants.
///
/// Everything else (visited set, kind transitions, termination, path
/// reconstruction) is shared by [`Search`](crate::Search).
pub trait Strategy {
    /// Remove and return the next cell to finalize, or `None` when the
    /// frontier is empty.
    fn select_next(&mut self, frontier: &mut VecDeque<Point>, grid: &Grid) -> Option<Point>;

    /// Record cost fields for `neighbor`, reached for the first time from
    /// `current`. The predecessor is already set.
    fn on_relax(&self, grid: &mut Grid, current: Point, neighbor: Point, target: Point);

    /// `neighbor` is already in the frontier and `current` offers another
    /// route to it. Lower its cost fields and return `true` if that route
    /// is strictly shorter; the caller then repoints the predecessor.
    ///
    /// FIFO order never finds a shorter route later, so the default keeps
    /// the first one.
    fn on_improve(
        &self,
        _grid: &mut Grid,
        _current: Point,
        _neighbor: Point,
        _target: Point,
    ) -> bool {
        false
    }

    /// Record cost fields for the start cell when a search begins.
    fn on_seed(&self, grid: &mut Grid, start: Point, _target: Point) {
        grid.set_costs(start, Some(0), None);
    }
}

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use gridseek_core::{Grid, Point};

use crate::heuristic::Heuristic;
use crate::traits::Strategy;
use crate::uniform::UniformCost;

/// Run-time choice between the two search strategies.
///
/// `Variant` implements [`Strategy`] itself by dispatching to
/// [`UniformCost`] or [`Heuristic`], so `Search<Variant>` serves callers
/// that pick the algorithm from user input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    #[default]
    UniformCost,
    Heuristic,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Self::UniformCost, Self::Heuristic];

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::UniformCost => "Dijkstra",
            Self::Heuristic => "A*",
        }
    }

    /// The other variant.
    pub fn toggle(self) -> Self {
        match self {
            Self::UniformCost => Self::Heuristic,
            Self::Heuristic => Self::UniformCost,
        }
    }
}

impl Strategy for Variant {
    fn select_next(&mut self, frontier: &mut VecDeque<Point>, grid: &Grid) -> Option<Point> {
        match self {
            Self::UniformCost => UniformCost.select_next(frontier, grid),
            Self::Heuristic => Heuristic.select_next(frontier, grid),
        }
    }

    fn on_relax(&self, grid: &mut Grid, current: Point, neighbor: Point, target: Point) {
        match self {
            Self::UniformCost => UniformCost.on_relax(grid, current, neighbor, target),
            Self::Heuristic => Heuristic.on_relax(grid, current, neighbor, target),
        }
    }

    fn on_improve(&self, grid: &mut Grid, current: Point, neighbor: Point, target: Point) -> bool {
        match self {
            Self::UniformCost => UniformCost.on_improve(grid, current, neighbor, target),
            Self::Heuristic => Heuristic.on_improve(grid, current, neighbor, target),
        }
    }

    fn on_seed(&self, grid: &mut Grid, start: Point, target: Point) {
        match self {
            Self::UniformCost => UniformCost.on_seed(grid, start, target),
            Self::Heuristic => Heuristic.on_seed(grid, start, target),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known [`Variant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError(String);

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search variant \u{201c}{}\u{201d} (expected dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseVariantError {}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform" | "uniform-cost" | "bfs" => Ok(Self::UniformCost),
            "astar" | "a*" | "a_star" | "heuristic" => Ok(Self::Heuristic),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

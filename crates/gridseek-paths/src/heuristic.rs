use std::collections::VecDeque;

use gridseek_core::{Grid, Point};

use crate::distance::manhattan;
use crate::traits::Strategy;

/// A* with the Manhattan estimate.
///
/// Before each selection the frontier is stably sorted by `f = g + h`, so
/// cells with equal `f` keep their insertion order. That tie-break decides
/// which of several equally short paths is found.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Heuristic;

impl Strategy for Heuristic {
    fn select_next(&mut self, frontier: &mut VecDeque<Point>, grid: &Grid) -> Option<Point> {
        // `sort_by_key` is stable.
        frontier
            .make_contiguous()
            .sort_by_key(|&p| grid[p].f().unwrap_or(u32::MAX));
        frontier.pop_front()
    }

    fn on_relax(&self, grid: &mut Grid, current: Point, neighbor: Point, target: Point) {
        let g = grid[current].g().unwrap_or(0) + 1;
        grid.set_costs(neighbor, Some(g), Some(g + manhattan(neighbor, target)));
    }

    fn on_improve(&self, grid: &mut Grid, current: Point, neighbor: Point, target: Point) -> bool {
        let g = grid[current].g().unwrap_or(0) + 1;
        match grid[neighbor].g() {
            Some(old) if g < old => {
                grid.set_costs(neighbor, Some(g), Some(g + manhattan(neighbor, target)));
                true
            }
            _ => false,
        }
    }

    fn on_seed(&self, grid: &mut Grid, start: Point, target: Point) {
        grid.set_costs(start, Some(0), Some(manhattan(start, target)));
    }
}

use std::collections::VecDeque;

use gridseek_core::{Grid, Point};

use crate::traits::Strategy;

/// Uniform-cost search on a unit-cost grid, which reduces to breadth-first
/// order: the frontier is FIFO.
///
/// Only the hop count `g` is recorded; it is never used for ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UniformCost;

impl Strategy for UniformCost {
    fn select_next(&mut self, frontier: &mut VecDeque<Point>, _grid: &Grid) -> Option<Point> {
        frontier.pop_front()
    }

    fn on_relax(&self, grid: &mut Grid, current: Point, neighbor: Point, _target: Point) {
        let g = grid[current].g().unwrap_or(0) + 1;
        grid.set_costs(neighbor, Some(g), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_oldest_first() {
        let grid = Grid::new(3, 1).unwrap();
        let mut frontier: VecDeque<_> = [Point::new(2, 0), Point::new(0, 0)].into();
        let mut s = UniformCost;
        assert_eq!(s.select_next(&mut frontier, &grid), Some(Point::new(2, 0)));
        assert_eq!(s.select_next(&mut frontier, &grid), Some(Point::new(0, 0)));
        assert_eq!(s.select_next(&mut frontier, &grid), None);
    }

    #[test]
    fn relax_counts_hops() {
        let mut grid = Grid::new(3, 1).unwrap();
        let (a, b, t) = (Point::new(0, 0), Point::new(1, 0), Point::new(2, 0));
        UniformCost.on_seed(&mut grid, a, t);
        UniformCost.on_relax(&mut grid, a, b, t);
        assert_eq!(grid[a].g(), Some(0));
        assert_eq!(grid[b].g(), Some(1));
        assert_eq!(grid[b].f(), None);
    }
}

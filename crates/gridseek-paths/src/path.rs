use gridseek_core::{Grid, Point, TypeKind};

/// Walk predecessor links from `target` back to `start`, marking every
/// intermediate cell as [`TypeKind::Path`].
///
/// Returns the path in Start→Target order. Start is excluded and Target is
/// included, so the length equals the hop count. Neither endpoint changes
/// kind.
pub fn reconstruct(grid: &mut Grid, start: Point, target: Point) -> Vec<Point> {
    let mut path = vec![target];
    let mut current = target;
    loop {
        let Some(prev) = grid[current].predecessor() else {
            log::error!("predecessor chain from {target} broke at {current}, {start} not reached");
            break;
        };
        if prev == start {
            break;
        }
        if path.len() >= grid.len() {
            log::error!("predecessor chain from {target} does not reach {start}");
            break;
        }
        let verdict = grid.assign(prev, TypeKind::Path);
        debug_assert!(verdict.is_applied(), "path cell {prev} rejected: {verdict:?}");
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(grid: &mut Grid, cells: &[Point]) {
        for w in cells.windows(2) {
            grid.set_predecessor(w[1], Some(w[0]));
        }
    }

    #[test]
    fn marks_intermediate_cells_only() {
        let mut grid = Grid::new(4, 1).unwrap();
        let cells: Vec<_> = (0..4).map(|x| Point::new(x, 0)).collect();
        let _ = grid.assign(cells[0], TypeKind::Start);
        let _ = grid.assign(cells[3], TypeKind::Target);
        let _ = grid.assign(cells[1], TypeKind::Visited);
        let _ = grid.assign(cells[2], TypeKind::Visited);
        chain(&mut grid, &cells);

        let path = reconstruct(&mut grid, cells[0], cells[3]);
        assert_eq!(path, &cells[1..]);
        assert_eq!(
            grid.snapshot(),
            [TypeKind::Start, TypeKind::Path, TypeKind::Path, TypeKind::Target]
        );
    }

    #[test]
    fn adjacent_target_has_single_step() {
        let mut grid = Grid::new(2, 1).unwrap();
        let (s, t) = (Point::new(0, 0), Point::new(1, 0));
        let _ = grid.assign(s, TypeKind::Start);
        let _ = grid.assign(t, TypeKind::Target);
        grid.set_predecessor(t, Some(s));
        assert_eq!(reconstruct(&mut grid, s, t), vec![t]);
        assert!(!grid.snapshot().contains(&TypeKind::Path));
    }

    #[test]
    fn broken_chain_returns_partial_path() {
        let mut grid = Grid::new(3, 1).unwrap();
        let (s, m, t) = (Point::new(0, 0), Point::new(1, 0), Point::new(2, 0));
        grid.set_predecessor(t, Some(m));
        assert_eq!(reconstruct(&mut grid, s, t), vec![m, t]);
    }
}

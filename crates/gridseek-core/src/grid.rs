//! The [`Grid`] type: a fixed-size arena of [`Cell`]s with a
//! [`TypeRegistry`] and an on-demand neighbor graph.
//!
//! Cells are stored row-major and addressed by [`Point`]. Neighbor lists and
//! predecessors are coordinates into the same arena, so no cell owns another.

use std::ops::Index;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::kind::TypeKind;
use crate::registry::{Assignment, TypeRegistry};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size 2D grid of [`Cell`]s.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    registry: TypeRegistry,
}

impl Grid {
    /// Create a grid of `columns` x `rows` Default cells.
    pub fn new(columns: i32, rows: i32) -> Result<Self, GridError> {
        if columns <= 0 || rows <= 0 {
            return Err(GridError::InvalidSize { columns, rows });
        }
        let bounds = Range::new(0, 0, columns, rows);
        let cells = bounds.iter().map(Cell::new).collect();
        Ok(Self {
            cells,
            bounds,
            registry: TypeRegistry::new(),
        })
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: grids have positive dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` addresses a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of range.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    /// The unique-kind holders of this grid.
    #[inline]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Shorthand for `self.registry().lookup(kind)`.
    #[inline]
    pub fn lookup(&self, kind: TypeKind) -> Option<Point> {
        self.registry.lookup(kind)
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    /// The cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid. Use [`try_get`](Self::try_get) for
    /// coordinates that come from untrusted input.
    #[track_caller]
    pub fn get(&self, p: Point) -> &Cell {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!("cell {p} is outside grid bounds {}", self.bounds),
        }
    }

    /// The cell at `p`, or `None` if out of range.
    #[inline]
    pub fn try_get(&self, p: Point) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Kind of the cell at `p`. Panics like [`get`](Self::get).
    #[inline]
    #[track_caller]
    pub fn kind_at(&self, p: Point) -> TypeKind {
        self.get(p).kind
    }

    #[track_caller]
    fn get_mut(&mut self, p: Point) -> &mut Cell {
        match self.index_of(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("cell {p} is outside grid bounds {}", self.bounds),
        }
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Row-major `(coordinate, kind)` pairs, the view a renderer polls.
    pub fn kinds(&self) -> impl Iterator<Item = (Point, TypeKind)> + '_ {
        self.cells.iter().map(|c| (c.pos(), c.kind))
    }

    /// Row-major copy of every cell kind.
    pub fn snapshot(&self) -> Vec<TypeKind> {
        self.cells.iter().map(|c| c.kind).collect()
    }

    // -----------------------------------------------------------------------
    // Kind assignment
    // -----------------------------------------------------------------------

    /// Assign `kind` to the cell at `p`, enforcing the registry rules.
    ///
    /// 1. A unique kind is only granted to a `Default` cell.
    /// 2. An algorithmic kind never overwrites `Wall`, `Start` or `Target`.
    /// 3. Otherwise the cell releases any unique kind it held; granting a
    ///    unique kind evicts the previous holder back to `Default`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    #[track_caller]
    pub fn assign(&mut self, p: Point, kind: TypeKind) -> Assignment {
        let current = self.get(p).kind;
        let verdict = TypeRegistry::admit(current, kind);
        if !verdict.is_applied() {
            return verdict;
        }

        if current.is_unique() {
            self.registry.set_holder(current, None);
        }
        if kind.is_unique() {
            if let Some(prev) = self.registry.set_holder(kind, Some(p)) {
                // Eviction bypasses the rules; Default is always legal.
                if prev != p {
                    self.get_mut(prev).kind = TypeKind::Default;
                }
            }
        }
        self.get_mut(p).kind = kind;
        Assignment::Applied
    }

    /// Like [`assign`](Self::assign), but reports an out-of-range coordinate
    /// as an error instead of panicking.
    pub fn assign_checked(&mut self, p: Point, kind: TypeKind) -> Result<Assignment, GridError> {
        if !self.contains(p) {
            return Err(GridError::OutOfBounds {
                pos: p,
                bounds: self.bounds,
            });
        }
        Ok(self.assign(p, kind))
    }

    // -----------------------------------------------------------------------
    // Search bookkeeping
    // -----------------------------------------------------------------------

    /// Record the cell `p` was reached from.
    ///
    /// Low-level hook for search strategies only. Other callers can break
    /// the rule that every Queued or Visited cell points back to a visited
    /// cell; [`clear_search`](Self::clear_search) restores a clean state.
    #[track_caller]
    pub fn set_predecessor(&mut self, p: Point, predecessor: Option<Point>) {
        self.get_mut(p).predecessor = predecessor;
    }

    /// Record the hop count `g` and priority key `f` of `p`.
    ///
    /// Like [`set_predecessor`](Self::set_predecessor), meant for search
    /// strategies only.
    #[track_caller]
    pub fn set_costs(&mut self, p: Point, g: Option<u32>, f: Option<u32>) {
        let cell = self.get_mut(p);
        cell.g = g;
        cell.f = f;
    }

    // -----------------------------------------------------------------------
    // Neighbor graph / reset
    // -----------------------------------------------------------------------

    /// Recompute every neighbor list from the current walls.
    ///
    /// A candidate is included when it is in range and not `Wall` at the
    /// time of the call. Lists are not kept in sync with later kind changes.
    pub fn rebuild_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let pos = self.cells[i].pos();
            let mut neighbors = std::mem::take(&mut self.cells[i].neighbors);
            neighbors.clear();
            for n in pos.orthogonal() {
                if let Some(ni) = self.index_of(n) {
                    if self.cells[ni].kind != TypeKind::Wall {
                        neighbors.push(n);
                    }
                }
            }
            self.cells[i].neighbors = neighbors;
        }
    }

    /// Restore every cell to `Default` and forget all search state and
    /// holders. Calling it twice is the same as calling it once.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.kind = TypeKind::Default;
            cell.clear_bookkeeping();
        }
        self.registry.reset();
    }

    /// Undo the marks of a previous search: algorithmic kinds go back to
    /// `Default`, bookkeeping and neighbor lists are cleared. Walls, Start
    /// and Target stay.
    pub fn clear_search(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.kind.is_algorithmic() {
                cell.kind = TypeKind::Default;
            }
            cell.clear_bookkeeping();
        }
    }
}

impl Index<Point> for Grid {
    type Output = Cell;

    #[track_caller]
    fn index(&self, p: Point) -> &Cell {
        self.get(p)
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell whose kind changed between two snapshots.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub pos: Point,
    pub from: TypeKind,
    pub to: TypeKind,
}

/// The kind changes between two snapshots of the same grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

impl Frame {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Diff a previous [`Grid::snapshot`] against the current grid.
///
/// Cells are reported in row-major order. `prev` must come from a grid of
/// the same size.
pub fn compute_frame(prev: &[TypeKind], curr: &Grid) -> Frame {
    debug_assert_eq!(prev.len(), curr.len());
    let cells = prev
        .iter()
        .zip(curr.iter())
        .filter(|(from, cell)| **from != cell.kind())
        .map(|(&from, cell)| FrameCell {
            pos: cell.pos(),
            from,
            to: cell.kind(),
        })
        .collect();
    Frame { cells }
}

//! One grid position with its kind and search bookkeeping.

use crate::geom::Point;
use crate::kind::TypeKind;

/// A single grid position.
///
/// Neighbors and the predecessor are coordinates into the owning
/// [`Grid`](crate::Grid), never references to other cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    pub(crate) kind: TypeKind,
    pub(crate) neighbors: Vec<Point>,
    pub(crate) predecessor: Option<Point>,
    pub(crate) g: Option<u32>,
    pub(crate) f: Option<u32>,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            kind: TypeKind::Default,
            neighbors: Vec::with_capacity(4),
            predecessor: None,
            g: None,
            f: None,
        }
    }

    /// Coordinates `(col, row)` of this cell.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Orthogonal non-wall neighbors as of the last
    /// [`rebuild_neighbors`](crate::Grid::rebuild_neighbors).
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    /// The cell this one was reached from during the current search.
    #[inline]
    pub fn predecessor(&self) -> Option<Point> {
        self.predecessor
    }

    /// Hop count from Start, if the search has reached this cell.
    #[inline]
    pub fn g(&self) -> Option<u32> {
        self.g
    }

    /// Priority key `g + h` of the heuristic search.
    #[inline]
    pub fn f(&self) -> Option<u32> {
        self.f
    }

    /// Drop every piece of search bookkeeping, leaving the kind alone.
    pub(crate) fn clear_bookkeeping(&mut self) {
        self.neighbors.clear();
        self.predecessor = None;
        self.g = None;
        self.f = None;
    }
}

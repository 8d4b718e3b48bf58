//! Holder bookkeeping for unique kinds and the assignment rules.
//!
//! The [`TypeRegistry`] lives on a [`Grid`](crate::Grid), so two grids never
//! share holders. The full assignment (including eviction of a previous
//! holder) is performed by [`Grid::assign`](crate::Grid::assign), which
//! consults [`TypeRegistry::admit`] first.

use crate::geom::Point;
use crate::kind::TypeKind;

/// Outcome of an assignment attempt.
///
/// Rejections leave the grid untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Assignment {
    Applied,
    /// A unique kind was offered to a cell that is not `Default`.
    RejectedUniqueConflict,
    /// An algorithmic kind was offered to a `Wall`, `Start` or `Target` cell.
    RejectedImmutable,
}

impl Assignment {
    #[inline]
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Tracks which cell currently holds each unique kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    start: Option<Point>,
    target: Option<Point>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current holder of `kind`. Always `None` for non-unique kinds.
    #[inline]
    pub fn lookup(&self, kind: TypeKind) -> Option<Point> {
        match kind {
            TypeKind::Start => self.start,
            TypeKind::Target => self.target,
            _ => None,
        }
    }

    /// Forget every holder.
    pub fn reset(&mut self) {
        self.start = None;
        self.target = None;
    }

    /// Check rules 1 and 2 for moving a cell from `current` to `new`.
    ///
    /// Returns [`Assignment::Applied`] when the change may proceed.
    pub fn admit(current: TypeKind, new: TypeKind) -> Assignment {
        if new.is_unique() && current != TypeKind::Default {
            return Assignment::RejectedUniqueConflict;
        }
        if new.is_algorithmic() && current.is_immutable() {
            return Assignment::RejectedImmutable;
        }
        Assignment::Applied
    }

    /// Record `holder` for a unique kind, returning the previous holder.
    /// No-op for non-unique kinds.
    pub(crate) fn set_holder(&mut self, kind: TypeKind, holder: Option<Point>) -> Option<Point> {
        match kind {
            TypeKind::Start => std::mem::replace(&mut self.start, holder),
            TypeKind::Target => std::mem::replace(&mut self.target, holder),
            _ => None,
        }
    }
}

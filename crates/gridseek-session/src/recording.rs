//! Per-step frame recording.
//!
//! A [`Recording`] keeps the kinds of a grid at the moment a search began
//! and one [`Frame`] per search step after that. Frames carry both the old
//! and the new kind of every changed cell, so a [`Replay`] can walk them in
//! either direction without an undo stack.

use gridseek_core::{Frame, Grid, Range, TypeKind};

use crate::replay::Replay;

/// The kind changes made by one search, step by step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recording {
    bounds: Range,
    initial: Vec<TypeKind>,
    frames: Vec<Frame>,
}

impl Recording {
    /// Start recording from the current kinds of `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            bounds: grid.bounds(),
            initial: grid.snapshot(),
            frames: Vec::new(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Row-major kinds before the first frame.
    #[inline]
    pub fn initial(&self) -> &[TypeKind] {
        &self.initial
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of recorded frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Append a frame. Steps that changed nothing are not recorded.
    pub fn push(&mut self, frame: Frame) {
        if frame.is_empty() {
            return;
        }
        log::trace!("frame {}: {} cells", self.frames.len(), frame.cells.len());
        self.frames.push(frame);
    }

    /// Row-major kinds after every frame has been applied.
    pub fn final_kinds(&self) -> Vec<TypeKind> {
        let mut replay = self.replay();
        replay.set_frame(self.len());
        replay.into_kinds()
    }

    /// A player positioned before the first frame.
    pub fn replay(&self) -> Replay<'_> {
        Replay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::{Point, compute_frame};

    #[test]
    fn empty_frames_are_skipped() {
        let mut g = Grid::new(2, 2).unwrap();
        let mut rec = Recording::new(&g);
        rec.push(compute_frame(&g.snapshot(), &g));
        assert!(rec.is_empty());

        let before = g.snapshot();
        let _ = g.assign(Point::new(1, 1), TypeKind::Wall);
        rec.push(compute_frame(&before, &g));
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.initial(), [TypeKind::Default; 4]);
        assert_eq!(rec.final_kinds(), g.snapshot());
        assert_eq!(rec.bounds(), g.bounds());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridseek_core::{Point, compute_frame};

    #[test]
    fn recording_round_trip() {
        let mut g = Grid::new(3, 1).unwrap();
        let mut rec = Recording::new(&g);
        let before = g.snapshot();
        let _ = g.assign(Point::new(2, 0), TypeKind::Queued);
        rec.push(compute_frame(&before, &g));

        let json = serde_json::to_string(&rec).unwrap();
        let back: Recording = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
        assert_eq!(back.final_kinds(), g.snapshot());
    }
}

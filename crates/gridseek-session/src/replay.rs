//! Step-by-step playback of a [`Recording`].

use gridseek_core::{Frame, Point, TypeKind};

use crate::recording::Recording;

/// Which side of a frame to write back into the kind buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Plays back a [`Recording`] over its own kind buffer.
///
/// `frame_index` counts the frames applied so far: `0` shows the kinds the
/// search started from, `len()` shows its final marks.
#[derive(Clone, Debug)]
pub struct Replay<'a> {
    recording: &'a Recording,
    kinds: Vec<TypeKind>,
    fidx: usize,
}

impl<'a> Replay<'a> {
    pub fn new(recording: &'a Recording) -> Self {
        Self {
            recording,
            kinds: recording.initial().to_vec(),
            fidx: 0,
        }
    }

    #[inline]
    pub fn frame_index(&self) -> usize {
        self.fidx
    }

    /// Total number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.recording.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.recording.is_empty()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.fidx >= self.recording.len()
    }

    /// Row-major kinds at the current position.
    #[inline]
    pub fn kinds(&self) -> &[TypeKind] {
        &self.kinds
    }

    /// Kind of `p` at the current position, or `None` if out of range.
    pub fn kind_at(&self, p: Point) -> Option<TypeKind> {
        self.index_of(p).and_then(|i| self.kinds.get(i).copied())
    }

    /// Apply the next frame and return it, or `None` at the end.
    pub fn next_frame(&mut self) -> Option<&'a Frame> {
        let frame = self.recording.frames().get(self.fidx)?;
        self.apply(frame, Direction::Forward);
        self.fidx += 1;
        Some(frame)
    }

    /// Undo the last applied frame and return it, or `None` at the start.
    pub fn previous_frame(&mut self) -> Option<&'a Frame> {
        let idx = self.fidx.checked_sub(1)?;
        let frame = &self.recording.frames()[idx];
        self.apply(frame, Direction::Backward);
        self.fidx = idx;
        Some(frame)
    }

    /// Seek so that exactly `n` frames are applied. Clamped to `len()`.
    pub fn set_frame(&mut self, n: usize) {
        let n = n.min(self.recording.len());
        while self.fidx < n {
            self.next_frame();
        }
        while self.fidx > n {
            self.previous_frame();
        }
    }

    /// Seek back to the initial kinds.
    pub fn rewind(&mut self) {
        self.kinds.clear();
        self.kinds.extend_from_slice(self.recording.initial());
        self.fidx = 0;
    }

    pub(crate) fn into_kinds(self) -> Vec<TypeKind> {
        self.kinds
    }

    fn index_of(&self, p: Point) -> Option<usize> {
        let bounds = self.recording.bounds();
        if !bounds.contains(p) {
            return None;
        }
        let local = p - bounds.min;
        Some(local.y as usize * bounds.width() as usize + local.x as usize)
    }

    fn apply(&mut self, frame: &Frame, dir: Direction) {
        for fc in &frame.cells {
            let Some(i) = self.index_of(fc.pos) else {
                log::warn!("frame cell {} outside {}", fc.pos, self.recording.bounds());
                continue;
            };
            // A deserialized recording may carry fewer kinds than its bounds.
            let Some(kind) = self.kinds.get_mut(i) else {
                log::warn!("frame cell {} has no initial kind", fc.pos);
                continue;
            };
            *kind = match dir {
                Direction::Forward => fc.to,
                Direction::Backward => fc.from,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridseek_core::{Grid, compute_frame};

    /// Three frames on a 3x1 strip: wall, queue, visit.
    fn strip() -> (Recording, Vec<Vec<TypeKind>>) {
        let mut g = Grid::new(3, 1).unwrap();
        let mut rec = Recording::new(&g);
        let mut states = vec![g.snapshot()];
        for (x, kind) in [(0, TypeKind::Wall), (2, TypeKind::Queued), (2, TypeKind::Visited)] {
            let before = g.snapshot();
            let _ = g.assign(Point::new(x, 0), kind);
            rec.push(compute_frame(&before, &g));
            states.push(g.snapshot());
        }
        (rec, states)
    }

    #[test]
    fn walks_forward_and_backward() {
        let (rec, states) = strip();
        let mut replay = rec.replay();
        assert_eq!(replay.len(), 3);
        assert_eq!(replay.kinds(), states[0].as_slice());
        assert!(replay.previous_frame().is_none());

        for (i, expected) in states.iter().enumerate().skip(1) {
            assert!(replay.next_frame().is_some());
            assert_eq!(replay.frame_index(), i);
            assert_eq!(replay.kinds(), expected.as_slice());
        }
        assert!(replay.is_at_end());
        assert!(replay.next_frame().is_none());

        for (i, expected) in states.iter().enumerate().rev().skip(1) {
            let frame = replay.previous_frame().unwrap();
            assert_eq!(frame, &rec.frames()[i]);
            assert_eq!(replay.kinds(), expected.as_slice());
        }
        assert_eq!(replay.frame_index(), 0);
    }

    #[test]
    fn seek_and_rewind() {
        let (rec, states) = strip();
        let mut replay = rec.replay();
        replay.set_frame(2);
        assert_eq!(replay.kinds(), states[2].as_slice());
        assert_eq!(replay.kind_at(Point::new(2, 0)), Some(TypeKind::Queued));
        assert_eq!(replay.kind_at(Point::new(3, 0)), None);

        replay.set_frame(usize::MAX);
        assert_eq!(replay.frame_index(), 3);
        replay.set_frame(1);
        assert_eq!(replay.kinds(), states[1].as_slice());

        replay.rewind();
        assert_eq!(replay.frame_index(), 0);
        assert_eq!(replay.kinds(), states[0].as_slice());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn short_initial_kinds_do_not_panic() {
        let json = r#"{
            "bounds": {"min": {"x": 0, "y": 0}, "max": {"x": 3, "y": 1}},
            "initial": ["Default"],
            "frames": [
                {"cells": [{"pos": {"x": 2, "y": 0}, "from": "Default", "to": "Wall"}]},
                {"cells": [{"pos": {"x": 0, "y": 0}, "from": "Default", "to": "Wall"}]}
            ]
        }"#;
        let rec: Recording = serde_json::from_str(json).unwrap();
        let mut replay = rec.replay();
        assert!(replay.next_frame().is_some());
        assert_eq!(replay.kinds(), [TypeKind::Default]);
        assert_eq!(replay.kind_at(Point::new(2, 0)), None);

        assert!(replay.next_frame().is_some());
        assert_eq!(replay.kind_at(Point::new(0, 0)), Some(TypeKind::Wall));
        replay.set_frame(0);
        assert_eq!(replay.kinds(), [TypeKind::Default]);
        assert_eq!(rec.final_kinds(), [TypeKind::Wall]);
    }
}

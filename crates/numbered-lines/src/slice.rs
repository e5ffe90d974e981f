//! Sequence slice specs with open ends, negative bounds and steps.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A `start:stop:step` slice over a sequence.
///
/// Negative bounds count from the end. Bounds past either end clamp instead of
/// failing, and a negative step walks the sequence backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
}

impl Slice {
    /// The whole sequence, `[::]`.
    pub const FULL: Slice = Slice::new(None, None);

    pub const fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        Self {
            start,
            stop,
            step: 1,
        }
    }

    /// `[start:]`
    pub const fn from_start(start: isize) -> Self {
        Self::new(Some(start), None)
    }

    /// `[:stop]`
    pub const fn to_stop(stop: isize) -> Self {
        Self::new(None, Some(stop))
    }

    /// Returns the same bounds walked with `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn step(self, step: isize) -> Self {
        assert!(step != 0, "slice step cannot be zero");
        Self { step, ..self }
    }

    pub fn start_bound(&self) -> Option<isize> {
        self.start
    }

    pub fn stop_bound(&self) -> Option<isize> {
        self.stop
    }

    pub fn step_size(&self) -> isize {
        self.step
    }

    /// Positions selected by this slice in a sequence of `len` items, in
    /// visiting order.
    pub fn positions(&self, len: usize) -> Positions {
        let len = len as isize;
        let step = self.step;
        let (start, stop) = if step > 0 {
            (
                clamp_bound(self.start, len, 0, 0, len),
                clamp_bound(self.stop, len, len, 0, len),
            )
        } else {
            (
                clamp_bound(self.start, len, len - 1, -1, len - 1),
                clamp_bound(self.stop, len, -1, -1, len - 1),
            )
        };

        // `unsigned_abs` keeps `isize::MIN` from overflowing.
        let stride = step.unsigned_abs();
        let remaining = if step > 0 && stop > start {
            (stop - start - 1) as usize / stride + 1
        } else if step < 0 && start > stop {
            (start - stop - 1) as usize / stride + 1
        } else {
            0
        };

        Positions {
            next: start,
            step,
            remaining,
        }
    }
}

fn clamp_bound(
    bound: Option<isize>,
    len: isize,
    default: isize,
    lower: isize,
    upper: isize,
) -> isize {
    match bound {
        None => default,
        Some(b) if b < 0 => (b + len).max(lower),
        Some(b) => b.min(upper),
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::FULL
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::from_start(range.start)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Self::to_stop(range.end)
    }
}

/// Iterator over the positions a [`Slice`] selects.
#[derive(Debug, Clone)]
pub struct Positions {
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let position = self.next as usize;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.step;
        }
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Positions {}

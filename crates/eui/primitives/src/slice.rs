//! Half-open sub-range selectors with optional step.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::{EuiError, Result};

/// A sub-range query `(start, stop, step)` with the usual half-open slice
/// semantics: missing bounds default to the ends of the sequence, negative
/// bounds count from the end and a negative step walks backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slice {
    /// First index (inclusive)
    pub start: Option<i128>,
    /// Last index (exclusive)
    pub stop: Option<i128>,
    /// Step between selected indices, defaults to 1
    pub step: Option<i128>,
}

impl Slice {
    /// Create a slice from its three optional parts.
    pub const fn new(start: Option<i128>, stop: Option<i128>, step: Option<i128>) -> Self {
        Self { start, stop, step }
    }

    /// Replace the step of this slice.
    pub const fn with_step(mut self, step: i128) -> Self {
        self.step = Some(step);
        self
    }

    /// Normalise against a sequence of `len` elements.
    ///
    /// Returns `(start, stop, step)` where `start` and `stop` are clamped into
    /// the sequence the same way a standard slice would clamp them.
    pub fn indices(&self, len: u128) -> Result<(i128, i128, i128)> {
        let len = i128::try_from(len)
            .map_err(|_| EuiError::index("sequence too large to slice"))?;
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(EuiError::value("slice step cannot be zero"));
        }

        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: i128| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = match self.start {
            Some(start) => clamp(start),
            None if step < 0 => upper,
            None => lower,
        };
        let stop = match self.stop {
            Some(stop) => clamp(stop),
            None if step < 0 => lower,
            None => upper,
        };

        Ok((start, stop, step))
    }
}

impl From<Range<i128>> for Slice {
    fn from(range: Range<i128>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<i128>> for Slice {
    fn from(range: RangeFrom<i128>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<i128>> for Slice {
    fn from(range: RangeTo<i128>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

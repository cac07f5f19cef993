//! Contiguous inclusive address ranges.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::eui::{Eui, IntoEui};
use crate::error::{EuiError, Result};
use crate::slice::Slice;
use crate::version::Version;

/// An inclusive interval of addresses of one version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EuiRange {
    start: Eui,
    end: Eui,
}

impl EuiRange {
    /// Create a range from `start` to `end` inclusive.
    ///
    /// The version is taken from `start` and forced onto `end`.
    pub fn new(start: impl IntoEui, end: impl IntoEui) -> Result<Self> {
        let start = start.into_eui(None)?;
        let end = end.into_eui(Some(start.version()))?;
        if start.value() > end.value() {
            return Err(EuiError::value(format!(
                "lower bound {start} is greater than upper bound {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Build a range from endpoints already known to be ordered and of one
    /// version.
    pub(crate) const fn from_bounds(start: Eui, end: Eui) -> Self {
        Self { start, end }
    }

    /// Version shared by both endpoints.
    pub const fn version(&self) -> Version {
        self.start.version()
    }

    /// Lower endpoint.
    pub const fn start(&self) -> Eui {
        self.start
    }

    /// Upper endpoint.
    pub const fn end(&self) -> Eui {
        self.end
    }

    /// Integer value of the lower endpoint.
    pub const fn first(&self) -> u64 {
        self.start.value()
    }

    /// Integer value of the upper endpoint.
    pub const fn last(&self) -> u64 {
        self.end.value()
    }

    /// Number of addresses in the range. A full EUI-64 range holds `2^64`.
    pub const fn size(&self) -> u128 {
        (self.last() - self.first()) as u128 + 1
    }

    /// Address at `index`; negative indices count back from the end.
    pub fn get(&self, index: i128) -> Result<Eui> {
        let size = self.size() as i128;
        let value = if (0..size).contains(&index) {
            i128::from(self.first()) + index
        } else if (-size..0).contains(&index) {
            i128::from(self.last()) + index + 1
        } else {
            return Err(EuiError::index(format!(
                "index {index} out of range for address range of size {size}"
            )));
        };
        self.eui_at(value)
    }

    /// Lazily walk the addresses selected by `slice`.
    ///
    /// A selection whose step points away from its bounds yields just the
    /// first address of the range. Stepped slices stop at the last selected
    /// index before `stop`, so `[0:5:2]` is `[0, 2, 4]` and not `[0, 2]`.
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<EuiIter> {
        let (start, stop, step) = slice.into().indices(self.size())?;
        if start + step < 0 || step > stop {
            return Ok(EuiIter::single(self.start));
        }

        let count = if step > 0 && start < stop {
            (stop - start - 1) / step + 1
        } else if step < 0 && start > stop {
            (start - stop - 1) / -step + 1
        } else {
            0
        };
        if count == 0 {
            return Ok(EuiIter::empty(self.version()));
        }

        let first = i128::from(self.first());
        let from = self.eui_at(first + start)?;
        let to = self.eui_at(first + start + (count - 1) * step)?;
        EuiIter::between(from, to, step)
    }

    /// Iterate every address in ascending order.
    pub fn iter(&self) -> EuiIter {
        EuiIter {
            version: self.version(),
            front: self.first(),
            back: self.last(),
            step: 1,
            remaining: self.size(),
        }
    }

    /// Whether `eui` lies inside this range. Addresses of another version
    /// never do.
    pub fn contains(&self, eui: &Eui) -> bool {
        eui.version() == self.version() && (self.first()..=self.last()).contains(&eui.value())
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &Self) -> bool {
        other.version() == self.version()
            && self.first() <= other.first()
            && other.last() <= self.last()
    }

    /// Identity key: `(version, first, last)`.
    pub const fn key(&self) -> (Version, u64, u64) {
        (self.version(), self.first(), self.last())
    }

    /// Sort key: `(version, first, width - bit_length(size))`.
    ///
    /// Among ranges starting at the same address, the one spanning more
    /// significant bits of size sorts first.
    pub fn sort_key(&self) -> (Version, u64, i32) {
        let bit_length = (u128::BITS - self.size().leading_zeros()) as i32;
        (
            self.version(),
            self.first(),
            self.version().bits() as i32 - bit_length,
        )
    }

    fn eui_at(&self, value: i128) -> Result<Eui> {
        let value = u64::try_from(value)
            .map_err(|_| EuiError::index(format!("{value} is not an {}", self.version())))?;
        Eui::with_version(value, self.version())
    }
}

impl PartialOrd for EuiRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EuiRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.key().cmp(&other.key()))
    }
}

impl fmt::Display for EuiRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.start, self.end)
    }
}

impl IntoIterator for &EuiRange {
    type Item = Eui;
    type IntoIter = EuiIter;

    fn into_iter(self) -> EuiIter {
        self.iter()
    }
}

impl IntoIterator for EuiRange {
    type Item = Eui;
    type IntoIter = EuiIter;

    fn into_iter(self) -> EuiIter {
        self.iter()
    }
}

/// Lazy walk over evenly spaced addresses.
///
/// Cloning the iterator restarts the walk from its current position.
#[derive(Debug, Clone)]
pub struct EuiIter {
    version: Version,
    front: u64,
    back: u64,
    step: i128,
    remaining: u128,
}

impl EuiIter {
    /// Walk from `start` towards `end` in increments of `step`, including
    /// both ends when reachable.
    ///
    /// A step pointing away from `end` yields nothing.
    pub fn between(start: Eui, end: Eui, step: i128) -> Result<Self> {
        if step == 0 {
            return Err(EuiError::value("step argument cannot be zero"));
        }
        if start.version() != end.version() {
            return Err(EuiError::value(format!(
                "cannot walk from an {} to an {}",
                start.version(),
                end.version()
            )));
        }

        let (from, to) = (i128::from(start.value()), i128::from(end.value()));
        let count = if step > 0 && from <= to {
            (to - from) / step + 1
        } else if step < 0 && from >= to {
            (from - to) / -step + 1
        } else {
            0
        };
        let back = from + (count - 1).max(0) * step;

        Ok(Self {
            version: start.version(),
            front: start.value(),
            back: back as u64,
            step,
            remaining: count as u128,
        })
    }

    fn single(eui: Eui) -> Self {
        Self {
            version: eui.version(),
            front: eui.value(),
            back: eui.value(),
            step: 1,
            remaining: 1,
        }
    }

    fn empty(version: Version) -> Self {
        Self {
            version,
            front: 0,
            back: 0,
            step: 1,
            remaining: 0,
        }
    }

    /// Number of addresses left, which may exceed `usize`.
    pub const fn remaining(&self) -> u128 {
        self.remaining
    }
}

impl Iterator for EuiIter {
    type Item = Eui;

    fn next(&mut self) -> Option<Eui> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = (i128::from(self.front) + self.step) as u64;
        }
        Some(Eui::from_parts(value, self.version))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for EuiIter {
    fn next_back(&mut self) -> Option<Eui> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = (i128::from(self.back) - self.step) as u64;
        }
        Some(Eui::from_parts(value, self.version))
    }
}

impl FusedIterator for EuiIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    fn range(start: u64, end: u64) -> EuiRange {
        EuiRange::new(start, end).unwrap()
    }

    fn values(iter: impl Iterator<Item = Eui>) -> Vec<u64> {
        iter.map(|eui| eui.value()).collect()
    }

    #[test]
    fn test_construction() {
        let r = EuiRange::new("00-00-00-00-00-00", "00-00-00-00-00-0F").unwrap();
        assert_eq!(r.size(), 16);
        assert_eq!(r.version(), Version::Eui48);
        assert_eq!(r.to_string(), "00-00-00-00-00-00<->00-00-00-00-00-0F");
        assert_matches!(EuiRange::new(2u64, 1u64), Err(EuiError::Value(_)));
    }

    #[test]
    fn test_end_takes_start_version() {
        let r = EuiRange::new(0u64, 10u64).unwrap();
        assert_eq!(r.end().version(), Version::Eui48);

        let start = Eui::with_version(0, Version::Eui64).unwrap();
        let r = EuiRange::new(start, 10u64).unwrap();
        assert_eq!(r.end().version(), Version::Eui64);

        assert_matches!(
            EuiRange::new(0u64, "00-00-00-00-00-00-00-01"),
            Err(EuiError::Format(_))
        );
    }

    #[test]
    fn test_single_address() {
        let r = range(0, 0);
        assert_eq!(r.size(), 1);
        assert_eq!(values(r.iter()), vec![0]);
        assert_eq!(r.get(0), Ok(Eui::new(0)));
        assert_eq!(r.get(-1), Ok(Eui::new(0)));
    }

    #[test]
    fn test_full_eui64_size() {
        let r = EuiRange::new(
            Eui::with_version(0, Version::Eui64).unwrap(),
            u64::MAX,
        )
        .unwrap();
        assert_eq!(r.size(), 1u128 << 64);
        assert_eq!(r.iter().size_hint().1, None);
        assert_eq!(r.get(-1).unwrap().value(), u64::MAX);
        assert_eq!(r.iter().next_back().unwrap().value(), u64::MAX);
        assert_eq!(r.sort_key().2, -1);
    }

    #[test]
    fn test_indexing() {
        let r = range(10, 19);
        assert_eq!(r.get(0).unwrap().value(), 10);
        assert_eq!(r.get(9).unwrap().value(), 19);
        assert_eq!(r.get(-10).unwrap().value(), 10);
        assert_matches!(r.get(10), Err(EuiError::Index(_)));
        assert_matches!(r.get(-11), Err(EuiError::Index(_)));
    }

    #[test]
    fn test_slicing() {
        let r = range(0, 9);
        assert_eq!(values(r.slice(0..4).unwrap()), vec![0, 1, 2, 3]);
        assert_eq!(values(r.slice(Slice::from(0..5).with_step(2)).unwrap()), vec![0, 2, 4]);
        assert_eq!(values(r.slice(-3..).unwrap()), vec![7, 8, 9]);
        assert_eq!(
            values(r.slice(Slice::from(..).with_step(-3)).unwrap()),
            vec![9, 6, 3, 0]
        );
        assert_eq!(values(r.slice(2..1).unwrap()), Vec::<u64>::new());
        assert_matches!(r.slice(Slice::from(..).with_step(0)), Err(EuiError::Value(_)));
    }

    #[test]
    fn test_degenerate_slice_yields_first() {
        let r = range(100, 109);
        assert_eq!(values(r.slice(0..0).unwrap()), vec![100]);
        assert_eq!(values(r.slice(5..0).unwrap()), vec![100]);
        assert_eq!(values(r.slice(Slice::from(0..).with_step(-1)).unwrap()), vec![100]);
    }

    #[test]
    fn test_slices_are_restartable() {
        let r = range(0, 4);
        let iter = r.slice(1..4).unwrap();
        assert_eq!(values(iter.clone()), values(iter));
    }

    #[test]
    fn test_between() {
        let a = Eui::new(5);
        let b = Eui::new(1);
        assert_eq!(values(EuiIter::between(a, b, -2).unwrap()), vec![5, 3, 1]);
        assert_eq!(values(EuiIter::between(b, a, 3).unwrap()), vec![1, 4]);
        assert_eq!(values(EuiIter::between(b, a, -1).unwrap()), Vec::<u64>::new());
        assert_eq!(values(EuiIter::between(a, a, 1).unwrap()), vec![5]);
        assert_eq!(values(EuiIter::between(b, a, 1).unwrap().rev()), vec![5, 4, 3, 2, 1]);
        assert_matches!(EuiIter::between(a, b, 0), Err(EuiError::Value(_)));
    }

    #[test]
    fn test_iteration_keeps_version() {
        let start = Eui::with_version(0, Version::Eui64).unwrap();
        let r = EuiRange::new(start, 2u64).unwrap();
        assert!(r.iter().all(|eui| eui.version() == Version::Eui64));
    }

    #[test]
    fn test_containment() {
        let r = range(10, 20);
        assert!(r.contains(&Eui::new(10)));
        assert!(r.contains(&Eui::new(20)));
        assert!(!r.contains(&Eui::new(21)));
        assert!(!r.contains(&Eui::with_version(15, Version::Eui64).unwrap()));

        assert!(r.contains_range(&range(12, 18)));
        assert!(r.contains_range(&r));
        assert!(!r.contains_range(&range(5, 15)));
    }

    #[test]
    fn test_ordering() {
        let single = range(16, 16);
        let block = range(16, 31);
        let later = range(17, 17);
        assert!(block < single);
        assert!(single < later);

        let mut ranges = vec![later, single, block];
        ranges.sort();
        assert_eq!(ranges, vec![block, single, later]);
        assert_eq!(single.key(), (Version::Eui48, 16, 16));
    }

    proptest! {
        #[test]
        fn test_symmetric_indexing(start in 0u64..1 << 40, len in 1u64..512, i in 0u64..512) {
            let r = range(start, start + len - 1);
            let i = i128::from(i % len);
            let size = r.size() as i128;
            prop_assert_eq!(r.get(i).unwrap(), r.get(-(size - i)).unwrap());
        }

        #[test]
        fn test_full_slice_matches_iter(start in 0u64..1 << 40, len in 1u64..256) {
            let r = range(start, start + len - 1);
            prop_assert_eq!(values(r.slice(..).unwrap()), values(r.iter()));
        }
    }
}

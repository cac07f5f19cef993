//! Unordered, deduplicated collections of addresses.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashSet;

use crate::eui::{Eui, IntoEui};
use crate::error::{EuiError, Result};
use crate::range::EuiRange;

/// A mutable set of addresses keyed on `(version, value)`.
///
/// Iteration is always in ascending address order. Mutating methods act in
/// place while the algebraic operations return fresh sets. Addresses of both
/// versions may be mixed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EuiSet {
    members: FxHashSet<Eui>,
}

impl EuiSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `eui` is a member.
    pub fn contains(&self, eui: &Eui) -> bool {
        self.members.contains(eui)
    }

    /// Add one address. Returns whether it was newly inserted.
    pub fn insert(&mut self, eui: Eui) -> bool {
        self.members.insert(eui)
    }

    /// Coerce `value` into an address and add it.
    pub fn add_value(&mut self, value: impl IntoEui) -> Result<bool> {
        Ok(self.insert(value.into_eui(None)?))
    }

    /// Add every address of `range`.
    pub fn add_range(&mut self, range: &EuiRange) {
        self.members.extend(range);
    }

    /// Remove one address. Absent addresses are ignored.
    pub fn remove(&mut self, eui: &Eui) -> bool {
        self.members.remove(eui)
    }

    /// Coerce `value` into an address and remove it. Absent addresses are
    /// ignored.
    pub fn remove_value(&mut self, value: impl IntoEui) -> Result<bool> {
        Ok(self.remove(&value.into_eui(None)?))
    }

    /// Remove every address of `range`.
    pub fn remove_range(&mut self, range: &EuiRange) {
        for eui in range {
            self.members.remove(&eui);
        }
    }

    /// Remove and return an arbitrary member.
    pub fn pop(&mut self) -> Option<Eui> {
        let eui = self.members.iter().next().copied()?;
        self.members.remove(&eui);
        Some(eui)
    }

    /// Add every address yielded by `iter`.
    pub fn update(&mut self, iter: impl IntoIterator<Item = Eui>) {
        self.members.extend(iter);
    }

    /// Remove all members.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Members in ascending order.
    pub fn iter(&self) -> std::vec::IntoIter<Eui> {
        let mut sorted: Vec<Eui> = self.members.iter().copied().collect();
        sorted.sort_unstable();
        sorted.into_iter()
    }

    /// Draw `n` distinct members uniformly at random.
    pub fn random_sample(&self, n: usize) -> Result<Vec<Eui>> {
        self.random_sample_with(&mut rand::rng(), n)
    }

    /// Draw `n` distinct members using `rng`.
    pub fn random_sample_with<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Result<Vec<Eui>> {
        if n > self.len() {
            return Err(EuiError::value(format!(
                "sample of {n} larger than population of {}",
                self.len()
            )));
        }
        let population: Vec<Eui> = self.iter().collect();
        Ok(index::sample(rng, population.len(), n)
            .into_iter()
            .filter_map(|i| population.get(i).copied())
            .collect())
    }

    /// Whether the two sets share no member.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.members.is_disjoint(&other.members)
    }

    /// Whether every member of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.members.is_subset(&other.members)
    }

    /// Whether every member of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        self.members.is_superset(&other.members)
    }

    /// Subset with strictly fewer members.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Superset with strictly more members.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        self.len() > other.len() && self.is_superset(other)
    }

    /// Members of either set.
    pub fn union(&self, other: &Self) -> Self {
        self.members.union(&other.members).copied().collect()
    }

    /// Members of both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        self.members.intersection(&other.members).copied().collect()
    }

    /// Members of `self` missing from `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.members.difference(&other.members).copied().collect()
    }

    /// Members of exactly one of the sets.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.members
            .symmetric_difference(&other.members)
            .copied()
            .collect()
    }

    fn bounds(&self) -> Option<(Eui, Eui)> {
        let min = self.members.iter().min()?;
        let max = self.members.iter().max()?;
        Some((*min, *max))
    }

    /// Whether the member count equals `max - min + 1`.
    ///
    /// The empty set is contiguous. Only values are compared, so a
    /// mixed-version set can be contiguous and still have no [`EuiRange`].
    pub fn is_contiguous(&self) -> bool {
        match self.bounds() {
            None => true,
            Some((min, max)) => max
                .value()
                .checked_sub(min.value())
                .is_some_and(|span| u128::from(span) + 1 == self.len() as u128),
        }
    }

    /// The range covering a contiguous set, `None` for the empty set.
    pub fn euirange(&self) -> Result<Option<EuiRange>> {
        if !self.is_contiguous() {
            return Err(EuiError::value("EuiSet is not contiguous"));
        }
        self.bounds()
            .map(|(min, max)| EuiRange::new(min, max))
            .transpose()
    }
}

impl fmt::Debug for EuiSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl PartialOrd for EuiSet {
    /// Set inclusion: `a < b` iff `a` is a proper subset of `b`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_proper_subset(other) {
            Some(Ordering::Less)
        } else if self.is_proper_superset(other) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl FromIterator<Eui> for EuiSet {
    fn from_iter<I: IntoIterator<Item = Eui>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl Extend<Eui> for EuiSet {
    fn extend<I: IntoIterator<Item = Eui>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl From<&EuiRange> for EuiSet {
    fn from(range: &EuiRange) -> Self {
        range.iter().collect()
    }
}

impl From<EuiRange> for EuiSet {
    fn from(range: EuiRange) -> Self {
        Self::from(&range)
    }
}

impl IntoIterator for &EuiSet {
    type Item = Eui;
    type IntoIter = std::vec::IntoIter<Eui>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl BitOr for &EuiSet {
    type Output = EuiSet;

    fn bitor(self, other: &EuiSet) -> EuiSet {
        self.union(other)
    }
}

impl BitAnd for &EuiSet {
    type Output = EuiSet;

    fn bitand(self, other: &EuiSet) -> EuiSet {
        self.intersection(other)
    }
}

impl Sub for &EuiSet {
    type Output = EuiSet;

    fn sub(self, other: &EuiSet) -> EuiSet {
        self.difference(other)
    }
}

impl BitXor for &EuiSet {
    type Output = EuiSet;

    fn bitxor(self, other: &EuiSet) -> EuiSet {
        self.symmetric_difference(other)
    }
}

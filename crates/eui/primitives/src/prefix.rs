//! Textual nibble prefixes of EUI-48 addresses, e.g. `AA:AA:AA:A`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::eui::Eui;
use crate::error::{EuiError, Result};
use crate::range::{EuiIter, EuiRange};
use crate::slice::Slice;
use crate::version::Version;

const MAX_NIBBLES: usize = 12;

/// A block of EUI-48 addresses sharing a leading run of hex digits.
///
/// The text form carries a separator at every third position, so
/// `AA:AA:AA:A` selects the 2^20 addresses from `AA-AA-AA-A0-00-00` to
/// `AA-AA-AA-AF-FF-FF`.
#[derive(Debug, Clone)]
pub struct EuiPrefix {
    nibbles: String,
    separator: Option<char>,
    prefix: u64,
}

impl EuiPrefix {
    /// Parse a prefix such as `00:1B:7` or `00-1B-77-4`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || EuiError::format(format!("invalid EUI prefix: {s:?}"));

        let chars: Vec<char> = s.chars().collect();
        let is_separator_slot = |i: usize| i >= 2 && (i - 2) % 3 == 0 && i + 1 < chars.len();

        let mut separator = None;
        let mut nibbles = String::with_capacity(MAX_NIBBLES);
        for (i, &c) in chars.iter().enumerate() {
            if is_separator_slot(i) {
                if !matches!(c, ':' | '-') || separator.is_some_and(|sep| sep != c) {
                    return Err(invalid());
                }
                separator = Some(c);
            } else if c.is_ascii_hexdigit() {
                nibbles.push(c.to_ascii_uppercase());
            } else {
                return Err(invalid());
            }
        }
        if nibbles.is_empty() || nibbles.len() > MAX_NIBBLES {
            return Err(invalid());
        }

        let prefix = u64::from_str_radix(&nibbles, 16).map_err(|_| invalid())?;
        Ok(Self {
            nibbles,
            separator,
            prefix,
        })
    }

    /// Uppercase hex digits of the prefix.
    pub fn nibbles(&self) -> &str {
        &self.nibbles
    }

    /// Separator used in the parsed text, if it was long enough to carry one.
    pub const fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Number of fixed leading bits.
    pub fn prefixlen(&self) -> u32 {
        self.nibbles.len() as u32 * 4
    }

    fn host_bits(&self) -> u32 {
        Version::Eui48.bits() - self.prefixlen()
    }

    /// Integer value of the first address, the prefix padded with zeros.
    pub fn first(&self) -> u64 {
        self.prefix << self.host_bits()
    }

    /// Integer value of the last address, the prefix padded with `F`.
    pub fn last(&self) -> u64 {
        self.first() | ((1u64 << self.host_bits()) - 1)
    }

    /// The first address of the block.
    pub fn eui(&self) -> Eui {
        Eui::from_parts(self.first(), Version::Eui48)
    }

    /// The all-ones EUI-48, whatever the prefix.
    pub fn broadcast(&self) -> Eui {
        Eui::from_parts(Version::Eui48.max_value(), Version::Eui48)
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u128 {
        1u128 << self.host_bits()
    }

    /// The covered block as a range.
    pub fn range(&self) -> EuiRange {
        EuiRange::from_bounds(
            self.eui(),
            Eui::from_parts(self.last(), Version::Eui48),
        )
    }

    /// Iterate every covered address in ascending order.
    pub fn iter(&self) -> EuiIter {
        self.range().iter()
    }

    /// Address at `index`, see [`EuiRange::get`].
    pub fn get(&self, index: i128) -> Result<Eui> {
        self.range().get(index)
    }

    /// Addresses selected by `slice`, see [`EuiRange::slice`].
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<EuiIter> {
        self.range().slice(slice)
    }

    /// Whether `eui` falls inside the block.
    pub fn contains(&self, eui: &Eui) -> bool {
        self.range().contains(eui)
    }

    /// Whether `range` lies entirely inside the block.
    pub fn contains_range(&self, range: &EuiRange) -> bool {
        self.range().contains_range(range)
    }

    /// Identity key: `(first, last)`.
    pub fn key(&self) -> (u64, u64) {
        (self.first(), self.last())
    }

    /// Sort key: `(first, prefixlen)`.
    pub fn sort_key(&self) -> (u64, u32) {
        (self.first(), self.prefixlen())
    }
}

impl FromStr for EuiPrefix {
    type Err = EuiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq for EuiPrefix {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for EuiPrefix {}

impl Hash for EuiPrefix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for EuiPrefix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EuiPrefix {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.key().cmp(&other.key()))
    }
}

impl fmt::Display for EuiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.separator.unwrap_or(':');
        for (i, pair) in self.nibbles.as_bytes().chunks(2).enumerate() {
            if i > 0 {
                write!(f, "{separator}")?;
            }
            for &nibble in pair {
                write!(f, "{}", char::from(nibble))?;
            }
        }
        Ok(())
    }
}

impl IntoIterator for &EuiPrefix {
    type Item = Eui;
    type IntoIter = EuiIter;

    fn into_iter(self) -> EuiIter {
        self.iter()
    }
}

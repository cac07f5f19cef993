//! The EUI address value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::Ipv6Addr;
use std::str::FromStr;

use tracing::trace;

use crate::dialect::Dialect;
use crate::error::{EuiError, Result};
use crate::iab::is_iab_oui;
use crate::slice::Slice;
use crate::version::{Strategy, Version};

/// Pattern inserted between the OUI and the extension identifier when an
/// EUI-48 is promoted to EUI-64
const EUI64_FILLER: u64 = 0xFF_FE00_0000;

/// Universal/local bit of an EUI-64 (RFC 4291 section 2.5.1)
const UNIVERSAL_LOCAL_BIT: u64 = 1 << 57;

/// `fe80::/64`
const LINK_LOCAL_PREFIX: u128 = 0xFE80_0000_0000_0000_0000_0000_0000_0000;

/// An IEEE EUI-48 (MAC) or EUI-64 address.
///
/// Equality, ordering and hashing only look at `(version, value)`; the
/// attached [`Dialect`] affects rendering and word access but nothing else.
#[derive(Clone, Copy)]
pub struct Eui {
    value: u64,
    version: Version,
    dialect: Dialect,
}

impl Eui {
    /// Create an address from an integer, picking the version by magnitude.
    ///
    /// Values up to `2^48 - 1` become EUI-48, anything larger EUI-64.
    pub fn new(value: u64) -> Self {
        Self::from_parts(value, Version::for_value(value))
    }

    /// Create an address of an explicit version.
    pub fn with_version(value: u64, version: Version) -> Result<Self> {
        if value > version.max_value() {
            return Err(EuiError::format(format!(
                "{value:#x} does not fit in an {version}"
            )));
        }
        Ok(Self::from_parts(value, version))
    }

    /// Parse an address of an explicit version.
    ///
    /// Only the textual layouts of that version are accepted.
    pub fn parse_with_version(s: &str, version: Version) -> Result<Self> {
        let value = version
            .strategy()
            .parse_str(s)
            .map_err(|_| EuiError::format(format!("address {s:?} is not an {version}")))?;
        Ok(Self::from_parts(value, version))
    }

    /// Convert any supported input into an address, optionally forcing a version.
    pub fn coerce(input: impl IntoEui, version: Option<Version>) -> Result<Self> {
        input.into_eui(version)
    }

    /// Build an address whose value is already known to fit `version`.
    pub(crate) fn from_parts(value: u64, version: Version) -> Self {
        Self {
            value,
            version,
            dialect: version.strategy().default_dialect,
        }
    }

    fn detect(s: &str) -> Result<Self> {
        for version in [Version::Eui48, Version::Eui64] {
            if let Ok(value) = version.strategy().parse_str(s) {
                return Ok(Self::from_parts(value, version));
            }
            if let Ok(value) = s.parse::<u64>() {
                if value <= version.max_value() {
                    return Ok(Self::from_parts(value, version));
                }
            }
            trace!(input = s, %version, "address does not parse as this version");
        }
        Err(EuiError::format(format!("failed to detect EUI version: {s:?}")))
    }

    /// Integer value of this address.
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Version of this address.
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Dialect used for rendering and word access.
    pub const fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Attach a different dialect.
    pub fn set_dialect(&mut self, dialect: Dialect) -> Result<()> {
        dialect.check(self.version)?;
        self.dialect = dialect;
        Ok(())
    }

    /// Return a copy using a different dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Result<Self> {
        self.set_dialect(dialect)?;
        Ok(self)
    }

    fn strategy(&self) -> &'static Strategy {
        self.version.strategy()
    }

    /// Render this address with `dialect` without attaching it.
    pub fn format(&self, dialect: &Dialect) -> Result<String> {
        dialect.check(self.version)?;
        Ok(self.strategy().format(self.value, dialect))
    }

    /// Words of this address according to the attached dialect.
    pub fn words(&self) -> Vec<u64> {
        self.strategy().words(self.value, &self.dialect)
    }

    /// Word at `index`; negative indices count from the end.
    pub fn word(&self, index: isize) -> Result<u64> {
        let num_words = self.dialect.num_words as isize;
        if index < -num_words || index >= num_words {
            return Err(EuiError::index(format!(
                "word index {index} out of range for {}",
                self.version
            )));
        }
        let position = if index < 0 { index + num_words } else { index };
        self.words()
            .get(position as usize)
            .copied()
            .ok_or_else(|| EuiError::index(format!("word index {index} out of range")))
    }

    /// Words selected by `slice`, in slice order.
    pub fn word_slice(&self, slice: impl Into<Slice>) -> Result<Vec<u64>> {
        let words = self.words();
        let (start, stop, step) = slice.into().indices(words.len() as u128)?;

        let mut selected = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            if let Some(&word) = usize::try_from(i).ok().and_then(|i| words.get(i)) {
                selected.push(word);
            }
            i += step;
        }
        Ok(selected)
    }

    /// Replace the word at `index` and re-encode the value.
    ///
    /// Only non-negative indices are accepted.
    pub fn set_word(&mut self, index: isize, word: u64) -> Result<()> {
        let position = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.dialect.num_words)
            .ok_or_else(|| {
                EuiError::index(format!("index {index} outside address type boundary"))
            })?;
        if word > self.dialect.max_word() {
            return Err(EuiError::index(format!(
                "value {word} outside word size maximum of {} bits",
                self.dialect.word_size
            )));
        }

        let mut words = self.words();
        if let Some(slot) = words.get_mut(position) {
            *slot = word;
        }
        self.value = self.strategy().words_to_int(&words, &self.dialect);
        Ok(())
    }

    /// Assigning several words at once is not supported.
    pub fn set_word_slice(&mut self, _slice: impl Into<Slice>, _words: &[u64]) -> Result<()> {
        Err(EuiError::Unsupported("settable word slices"))
    }

    /// Big-endian bytes of this address.
    pub fn packed(&self) -> Vec<u8> {
        self.strategy().packed(self.value)
    }

    /// Binary digits in byte-sized groups joined by `sep` (default `-`).
    pub fn bits(&self, sep: Option<&str>) -> String {
        self.strategy().bits(self.value, sep.unwrap_or("-"))
    }

    /// Binary literal form, e.g. `0b110110111`.
    pub fn bin(&self) -> String {
        format!("{:#b}", self.value)
    }

    /// Extension identifier: everything below the OUI as `XX-XX-..`.
    pub fn ei(&self) -> String {
        self.packed()
            .iter()
            .skip(3)
            .map(|byte| format!("{byte:02X}"))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Top 24 bits of this address.
    pub const fn oui_value(&self) -> u32 {
        (self.value >> (self.version.bits() - 24)) as u32
    }

    /// Whether the OUI of this address is reserved for IAB assignments.
    pub fn is_iab(&self) -> bool {
        is_iab_oui(u64::from(self.oui_value()))
    }

    /// The 36-bit IAB key of this address, if it is an IAB address.
    pub fn iab_value(&self) -> Option<u64> {
        self.is_iab()
            .then(|| self.value >> (self.version.bits() - 36))
    }

    /// This address as an EUI-64.
    ///
    /// An EUI-48 gets `FF-FE` inserted after the OUI; an EUI-64 is returned
    /// as is.
    pub fn eui64(&self) -> Self {
        let value = match self.version {
            Version::Eui48 => {
                let oui = self.value >> 24;
                let ei = self.value & 0xFF_FFFF;
                (oui << 40) | EUI64_FILLER | ei
            }
            Version::Eui64 => self.value,
        };
        Self::from_parts(value, Version::Eui64)
    }

    /// Modified EUI-64 interface identifier with the universal/local bit
    /// inverted.
    pub fn modified_eui64(&self) -> Self {
        let eui64 = self.eui64();
        Self::from_parts(eui64.value ^ UNIVERSAL_LOCAL_BIT, Version::Eui64)
    }

    /// IPv6 address formed by adding the modified EUI-64 to `prefix`.
    ///
    /// The prefix is added, not OR-ed, so it should have its low 64 bits
    /// clear.
    pub fn ipv6(&self, prefix: impl Into<u128>) -> Result<Ipv6Addr> {
        let prefix = prefix.into();
        prefix
            .checked_add(u128::from(self.modified_eui64().value))
            .map(Ipv6Addr::from)
            .ok_or_else(|| EuiError::format(format!("prefix {prefix:#x} overflows IPv6")))
    }

    /// Link-local (`fe80::/64`) IPv6 address of this interface.
    pub fn ipv6_link_local(&self) -> Ipv6Addr {
        Ipv6Addr::from(LINK_LOCAL_PREFIX + u128::from(self.modified_eui64().value))
    }

    fn key(&self) -> (Version, u64) {
        (self.version, self.value)
    }
}

impl From<u64> for Eui {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Eui> for u64 {
    fn from(eui: Eui) -> Self {
        eui.value
    }
}

impl FromStr for Eui {
    type Err = EuiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::detect(s)
    }
}

impl PartialEq for Eui {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Eui {}

impl Hash for Eui {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Eui {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Eui {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Eui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.strategy().format(self.value, &self.dialect))
    }
}

impl fmt::Debug for Eui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Eui").field(&format_args!("{self}")).finish()
    }
}

/// Inputs that can be turned into an [`Eui`].
///
/// `version` forces the interpretation; `None` lets the input decide.
pub trait IntoEui {
    /// Convert into an address.
    fn into_eui(self, version: Option<Version>) -> Result<Eui>;
}

impl IntoEui for Eui {
    fn into_eui(self, version: Option<Version>) -> Result<Eui> {
        match version {
            Some(version) if version != self.version => Err(EuiError::value(
                "cannot switch EUI versions using copy constructor",
            )),
            _ => Ok(self),
        }
    }
}

impl IntoEui for &Eui {
    fn into_eui(self, version: Option<Version>) -> Result<Eui> {
        (*self).into_eui(version)
    }
}

impl IntoEui for u64 {
    fn into_eui(self, version: Option<Version>) -> Result<Eui> {
        match version {
            Some(version) => Eui::with_version(self, version),
            None => Ok(Eui::new(self)),
        }
    }
}

impl IntoEui for &str {
    fn into_eui(self, version: Option<Version>) -> Result<Eui> {
        match version {
            Some(version) => Eui::parse_with_version(self, version),
            None => self.parse(),
        }
    }
}

impl IntoEui for String {
    fn into_eui(self, version: Option<Version>) -> Result<Eui> {
        self.as_str().into_eui(version)
    }
}

impl IntoEui for &String {
    fn into_eui(self, version: Option<Version>) -> Result<Eui> {
        self.as_str().into_eui(version)
    }
}

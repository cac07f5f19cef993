//! Version tags and the per-version parsing/formatting strategy.
//!
//! An [`Eui`](crate::Eui) holds a [`Version`] tag and delegates everything
//! width-dependent to the matching static [`Strategy`].

use derive_more::Display;

use crate::dialect::{Dialect, EUI64_BASE, MAC_EUI48};
use crate::error::{EuiError, Result};

/// EUI address version.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    /// 48-bit EUI (MAC address)
    #[display("EUI-48")]
    Eui48,
    /// 64-bit EUI
    #[display("EUI-64")]
    Eui64,
}

impl Version {
    /// Width of the address in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Eui48 => 48,
            Self::Eui64 => 64,
        }
    }

    /// Largest integer value an address of this version can hold.
    pub const fn max_value(self) -> u64 {
        match self {
            Self::Eui48 => 0xFFFF_FFFF_FFFF,
            Self::Eui64 => u64::MAX,
        }
    }

    /// The strategy implementing this version's word layout.
    pub fn strategy(self) -> &'static Strategy {
        match self {
            Self::Eui48 => &EUI48,
            Self::Eui64 => &EUI64,
        }
    }

    /// Smallest version able to hold `value`.
    pub const fn for_value(value: u64) -> Self {
        if value <= Self::Eui48.max_value() {
            Self::Eui48
        } else {
            Self::Eui64
        }
    }
}

impl TryFrom<u32> for Version {
    type Error = EuiError;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            48 => Ok(Self::Eui48),
            64 => Ok(Self::Eui64),
            other => Err(EuiError::value(format!("unsupported EUI version {other}"))),
        }
    }
}

/// One accepted textual layout: `groups` hex groups of `min_digits..=max_digits`
/// digits joined by `sep` (or a single bare group when `sep` is `None`).
#[derive(Debug, Clone, Copy)]
struct Layout {
    sep: Option<char>,
    groups: usize,
    min_digits: usize,
    max_digits: usize,
}

const fn layout(sep: Option<char>, groups: usize, min_digits: usize, max_digits: usize) -> Layout {
    Layout {
        sep,
        groups,
        min_digits,
        max_digits,
    }
}

const EUI48_LAYOUTS: &[Layout] = &[
    layout(Some(':'), 6, 1, 2),
    layout(Some('-'), 6, 1, 2),
    layout(Some(':'), 3, 1, 4),
    layout(Some('-'), 3, 1, 4),
    layout(Some('.'), 3, 1, 4),
    layout(Some('-'), 2, 5, 6),
    layout(Some(':'), 2, 5, 6),
    layout(None, 1, 12, 12),
    layout(None, 1, 11, 11),
];

const EUI64_LAYOUTS: &[Layout] = &[
    layout(Some(':'), 8, 1, 2),
    layout(Some('-'), 8, 1, 2),
    layout(Some(':'), 4, 1, 4),
    layout(Some('-'), 4, 1, 4),
    layout(Some('.'), 4, 1, 4),
    layout(None, 1, 16, 16),
];

/// Width-dependent behaviour shared by all addresses of one version.
#[derive(Debug)]
pub struct Strategy {
    /// Version served by this strategy
    pub version: Version,
    /// Address width in bits
    pub width: u32,
    /// Largest representable value
    pub max_value: u64,
    /// Bits per byte-sized word used by [`bits`](Self::bits) and [`packed`](Self::packed)
    pub word_size: u32,
    /// Number of byte-sized words
    pub num_words: usize,
    /// Dialect used when none is attached explicitly
    pub default_dialect: Dialect,
    layouts: &'static [Layout],
}

static EUI48: Strategy = Strategy {
    version: Version::Eui48,
    width: 48,
    max_value: Version::Eui48.max_value(),
    word_size: 8,
    num_words: 6,
    default_dialect: MAC_EUI48,
    layouts: EUI48_LAYOUTS,
};

static EUI64: Strategy = Strategy {
    version: Version::Eui64,
    width: 64,
    max_value: Version::Eui64.max_value(),
    word_size: 8,
    num_words: 8,
    default_dialect: EUI64_BASE,
    layouts: EUI64_LAYOUTS,
};

impl Strategy {
    /// Parse `s` using any of this version's accepted layouts.
    pub fn parse_str(&self, s: &str) -> Result<u64> {
        self.layouts
            .iter()
            .find_map(|layout| self.parse_layout(s, layout))
            .ok_or_else(|| {
                EuiError::format(format!("{s:?} is not a supported {} format", self.version))
            })
    }

    /// Whether `s` matches one of this version's layouts.
    pub fn is_valid_str(&self, s: &str) -> bool {
        self.parse_str(s).is_ok()
    }

    fn parse_layout(&self, s: &str, layout: &Layout) -> Option<u64> {
        let groups: Vec<&str> = match layout.sep {
            Some(sep) => s.split(sep).collect(),
            None => vec![s],
        };
        if groups.len() != layout.groups {
            return None;
        }

        let bits = self.width / layout.groups as u32;
        let mut value: u128 = 0;
        for group in groups {
            if group.len() < layout.min_digits
                || group.len() > layout.max_digits
                || !group.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return None;
            }
            let word = u64::from_str_radix(group, 16).ok()?;
            value = (value << bits) | u128::from(word);
        }
        u64::try_from(value).ok()
    }

    /// Split `value` into words according to `dialect`, most significant first.
    pub fn words(&self, value: u64, dialect: &Dialect) -> Vec<u64> {
        let max_word = dialect.max_word();
        (0..dialect.num_words)
            .rev()
            .map(|i| {
                let shift = dialect.word_size as usize * i;
                if shift >= 64 { 0 } else { (value >> shift) & max_word }
            })
            .collect()
    }

    /// Reassemble an integer from words laid out according to `dialect`.
    pub fn words_to_int(&self, words: &[u64], dialect: &Dialect) -> u64 {
        words.iter().fold(0u128, |acc, &word| {
            (acc << dialect.word_size) | u128::from(word & dialect.max_word())
        }) as u64
    }

    /// Render `value` using `dialect`.
    pub fn format(&self, value: u64, dialect: &Dialect) -> String {
        self.words(value, dialect)
            .into_iter()
            .map(|word| dialect.word_fmt.render(word, dialect.word_size))
            .collect::<Vec<_>>()
            .join(dialect.word_sep)
    }

    /// Binary digit string in byte-sized groups joined by `sep`.
    pub fn bits(&self, value: u64, sep: &str) -> String {
        self.packed(value)
            .iter()
            .map(|byte| format!("{byte:08b}"))
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Big-endian byte representation of `value`.
    pub fn packed(&self, value: u64) -> Vec<u8> {
        let bytes = value.to_be_bytes();
        bytes
            .get(bytes.len() - self.num_words..)
            .map(<[u8]>::to_vec)
            .unwrap_or_default()
    }
}

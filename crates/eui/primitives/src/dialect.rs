//! Formatting dialects for EUI addresses.
//!
//! A [`Dialect`] is a plain capability record: how many bits go into each
//! word, how many words make up the address, what separates them and how a
//! single word is rendered. Any value of this struct can be attached to an
//! [`Eui`](crate::Eui) as long as its geometry matches the address width.

use crate::error::{EuiError, Result};
use crate::version::Version;

/// Rendering rule for a single word.
///
/// Padded variants render exactly `word_size / 4` hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordFormat {
    /// Zero padded, uppercase hex
    UpperPadded,
    /// Zero padded, lowercase hex
    LowerPadded,
    /// Unpadded, uppercase hex
    Upper,
    /// Unpadded, lowercase hex
    Lower,
}

impl WordFormat {
    /// Render `word` for a word of `word_size` bits.
    pub fn render(self, word: u64, word_size: u32) -> String {
        let width = word_size.div_ceil(4) as usize;
        match self {
            Self::UpperPadded => format!("{word:0width$X}"),
            Self::LowerPadded => format!("{word:0width$x}"),
            Self::Upper => format!("{word:X}"),
            Self::Lower => format!("{word:x}"),
        }
    }
}

/// Word geometry and rendering rules for an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dialect {
    /// Human readable name, used in diagnostics only
    pub name: &'static str,
    /// Bits per word
    pub word_size: u32,
    /// Number of words in the address
    pub num_words: usize,
    /// Separator placed between words
    pub word_sep: &'static str,
    /// Rendering rule for a single word
    pub word_fmt: WordFormat,
}

impl Dialect {
    /// Create a custom dialect.
    pub const fn new(
        name: &'static str,
        word_size: u32,
        num_words: usize,
        word_sep: &'static str,
        word_fmt: WordFormat,
    ) -> Self {
        Self {
            name,
            word_size,
            num_words,
            word_sep,
            word_fmt,
        }
    }

    /// Largest value a single word can hold.
    pub const fn max_word(&self) -> u64 {
        if self.word_size >= 64 {
            u64::MAX
        } else {
            (1u64 << self.word_size) - 1
        }
    }

    /// Check that this dialect describes an address of `version`'s width.
    pub fn check(&self, version: Version) -> Result<()> {
        let fits = self.word_size >= 1
            && self.word_size <= 64
            && u64::from(self.word_size) * self.num_words as u64 == u64::from(version.bits());
        if fits {
            Ok(())
        } else {
            Err(EuiError::type_error(format!(
                "dialect {} ({} words of {} bits) cannot describe an EUI-{}",
                self.name,
                self.num_words,
                self.word_size,
                version.bits()
            )))
        }
    }
}

/// `00-1B-77-49-54-FD`, the default for EUI-48
pub const MAC_EUI48: Dialect = Dialect::new("mac_eui48", 8, 6, "-", WordFormat::UpperPadded);

/// `0:1b:77:49:54:fd`
pub const MAC_UNIX: Dialect = Dialect::new("mac_unix", 8, 6, ":", WordFormat::Lower);

/// `00:1b:77:49:54:fd`
pub const MAC_UNIX_EXPANDED: Dialect =
    Dialect::new("mac_unix_expanded", 8, 6, ":", WordFormat::LowerPadded);

/// `001b.7749.54fd`
pub const MAC_CISCO: Dialect = Dialect::new("mac_cisco", 16, 3, ".", WordFormat::LowerPadded);

/// `001B774954FD`
pub const MAC_BARE: Dialect = Dialect::new("mac_bare", 48, 1, "", WordFormat::UpperPadded);

/// `001b77:4954fd`
pub const MAC_PGSQL: Dialect = Dialect::new("mac_pgsql", 24, 2, ":", WordFormat::LowerPadded);

/// `00-1B-77-FF-FE-49-54-FD`, the default for EUI-64
pub const EUI64_BASE: Dialect = Dialect::new("eui64_base", 8, 8, "-", WordFormat::UpperPadded);

/// `0:1b:77:ff:fe:49:54:fd`
pub const EUI64_UNIX: Dialect = Dialect::new("eui64_unix", 8, 8, ":", WordFormat::Lower);

/// `00:1b:77:ff:fe:49:54:fd`
pub const EUI64_UNIX_EXPANDED: Dialect =
    Dialect::new("eui64_unix_expanded", 8, 8, ":", WordFormat::LowerPadded);

/// `001b.77ff.fe49.54fd`
pub const EUI64_CISCO: Dialect = Dialect::new("eui64_cisco", 16, 4, ".", WordFormat::LowerPadded);

/// `001B77FFFE4954FD`
pub const EUI64_BARE: Dialect = Dialect::new("eui64_bare", 64, 1, "", WordFormat::UpperPadded);

//! Registry tables: an index plus the text it points into.

use std::fmt;
use std::io::{Read, Seek, SeekFrom};

use derive_more::Display;
use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::index::{RegistryIndex, Span};
use crate::source::{FileSource, RecordSource};

/// Which IEEE table a record comes from.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Organisationally unique identifiers, keyed by 24-bit value
    #[display("OUI")]
    Oui,
    /// Individual address blocks, keyed by 36-bit value
    #[display("IAB")]
    Iab,
}

impl RecordKind {
    /// Render `key` the way identifiers of this kind are written.
    ///
    /// OUIs render as `XX-XX-XX`, IABs as the first address of the block,
    /// `XX-XX-XX-XX-XX-00`.
    pub fn render(self, key: u64) -> String {
        let (value, bytes) = match self {
            Self::Oui => (key, 3),
            Self::Iab => (key << 4, 5),
        };
        let mut out = (0..bytes)
            .rev()
            .map(|i| format!("{:02X}", (value >> (8 * i)) & 0xff))
            .collect::<Vec<_>>()
            .join("-");
        if self == Self::Iab {
            out.push_str("-00");
        }
        out
    }
}

/// One registry table.
pub struct RegistryTable {
    index: RegistryIndex,
    source: Box<dyn RecordSource>,
}

impl RegistryTable {
    /// Combine an index with the source it points into.
    pub fn new(index: RegistryIndex, source: impl RecordSource + 'static) -> Self {
        Self {
            index,
            source: Box::new(source),
        }
    }

    /// The offset index of this table.
    pub fn index(&self) -> &RegistryIndex {
        &self.index
    }

    /// Whether `key` has any record.
    pub fn contains(&self, key: u64) -> bool {
        self.index.contains(key)
    }

    /// Read the text of up to `limit` spans recorded for `key`.
    ///
    /// The source is opened once per call and released before returning,
    /// whether or not the read succeeds.
    pub fn read(
        &self,
        kind: RecordKind,
        key: u64,
        limit: Option<usize>,
    ) -> Result<Vec<(Span, String)>> {
        let spans = self
            .index
            .get(key)
            .ok_or_else(|| RegistryError::not_registered(kind, key))?;
        let count = limit.map_or(spans.len(), |limit| limit.min(spans.len()));
        let spans = spans.get(..count).unwrap_or(spans);
        debug!(%kind, key, spans = spans.len(), "reading registry records");

        let mut reader = self.source.open()?;
        let mut texts = Vec::with_capacity(spans.len());
        for &span in spans {
            trace!(%kind, key, offset = span.offset, size = span.size, "reading span");
            reader.seek(SeekFrom::Start(span.offset))?;

            let mut buf = Vec::new();
            (&mut reader).take(span.size).read_to_end(&mut buf)?;
            let text = String::from_utf8(buf).map_err(|source| RegistryError::Decode {
                offset: span.offset,
                source,
            })?;
            texts.push((span, text));
        }
        Ok(texts)
    }
}

impl fmt::Debug for RegistryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryTable")
            .field("entries", &self.index.len())
            .finish_non_exhaustive()
    }
}

/// The OUI and IAB tables used for lookups.
#[derive(Debug)]
pub struct Registry {
    oui: RegistryTable,
    iab: RegistryTable,
}

impl Registry {
    /// Create a registry from its two tables.
    pub fn new(oui: RegistryTable, iab: RegistryTable) -> Self {
        Self { oui, iab }
    }

    /// Open file-backed tables and load both indices as configured.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        let oui = RegistryTable::new(
            RegistryIndex::load(&config.oui.index)?,
            FileSource::new(&config.oui.records),
        );
        let iab = RegistryTable::new(
            RegistryIndex::load(&config.iab.index)?,
            FileSource::new(&config.iab.records),
        );
        debug!(oui = oui.index.len(), iab = iab.index.len(), "registry ready");
        Ok(Self::new(oui, iab))
    }

    /// The table for `kind`.
    pub fn table(&self, kind: RecordKind) -> &RegistryTable {
        match kind {
            RecordKind::Oui => &self.oui,
            RecordKind::Iab => &self.iab,
        }
    }
}

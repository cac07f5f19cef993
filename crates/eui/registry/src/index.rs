//! Offset index over a registry text file.
//!
//! The on-disk form is one `key,offset,size` triple of decimal integers per
//! line. A key may appear on several lines when the same identifier was
//! registered more than once; spans keep file order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{RegistryError, Result};

/// A byte span inside a record source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte
    pub offset: u64,
    /// Length in bytes, never zero
    pub size: u64,
}

impl Span {
    /// Create a span.
    pub const fn new(offset: u64, size: u64) -> Self {
        Self { offset, size }
    }
}

/// Mapping from identifier value to the spans of its records.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    entries: FxHashMap<u64, Vec<Span>>,
}

impl RegistryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span for `key`.
    pub fn insert(&mut self, key: u64, span: Span) {
        self.entries.entry(key).or_default().push(span);
    }

    /// Spans recorded for `key`, in insertion order.
    pub fn get(&self, key: u64) -> Option<&[Span]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Whether `key` has at least one span.
    pub fn contains(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse an index from `key,offset,size` lines. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut index = Self::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let number = i + 1;
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let &[key, offset, size] = fields.as_slice() else {
                return Err(RegistryError::index(
                    number,
                    format!("expected 3 fields, found {}", fields.len()),
                ));
            };
            let parse = |field: &str, name: &str| {
                field
                    .parse::<u64>()
                    .map_err(|e| RegistryError::index(number, format!("{name} {field:?}: {e}")))
            };

            let span = Span::new(parse(offset, "offset")?, parse(size, "size")?);
            if span.size == 0 {
                return Err(RegistryError::index(number, "size must be positive"));
            }
            index.insert(parse(key, "key")?, span);
        }
        Ok(index)
    }

    /// Load an index file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let index = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), entries = index.len(), "loaded registry index");
        Ok(index)
    }
}

impl FromIterator<(u64, Span)> for RegistryIndex {
    fn from_iter<I: IntoIterator<Item = (u64, Span)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (key, span) in iter {
            index.insert(key, span);
        }
        index
    }
}

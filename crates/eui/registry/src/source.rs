//! Byte sources holding registry text.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek};
use std::path::{Path, PathBuf};

use auto_impl::auto_impl;
use bytes::Bytes;

/// A readable and seekable byte stream.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek + ?Sized> ReadSeek for T {}

/// Backend for registry record text, with auto-impl for &, Box, Arc.
///
/// Every lookup opens a fresh reader and drops it before returning.
#[auto_impl(&, Box, Arc)]
pub trait RecordSource: Send + Sync {
    /// Open a reader positioned at the start of the text.
    fn open(&self) -> io::Result<Box<dyn ReadSeek + '_>>;
}

/// Registry text stored in a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`. The file is opened on each lookup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn open(&self) -> io::Result<Box<dyn ReadSeek + '_>> {
        Ok(Box::new(BufReader::new(File::open(&self.path)?)))
    }
}

/// Registry text held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    data: Bytes,
}

impl MemorySource {
    /// Create a source over `data`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }
}

impl RecordSource for MemorySource {
    fn open(&self) -> io::Result<Box<dyn ReadSeek + '_>> {
        Ok(Box::new(Cursor::new(self.data.clone())))
    }
}

//! Registry lookup errors.

use std::string::FromUtf8Error;

use eui_primitives::EuiError;
use thiserror::Error;

use crate::registry::RecordKind;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised while loading or querying a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The identifier is well formed but has no entry in the index
    #[error("{kind} {value} is not registered")]
    NotRegistered {
        /// Table that was searched
        kind: RecordKind,
        /// Rendered identifier
        value: String,
    },

    /// The identifier itself is invalid
    #[error(transparent)]
    Eui(#[from] EuiError),

    /// IO error on the record source or index file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record span is not valid UTF-8
    #[error("record at offset {offset} is not valid UTF-8")]
    Decode {
        /// Start of the offending span
        offset: u64,
        /// Underlying decode error
        #[source]
        source: FromUtf8Error,
    },

    /// A record span does not follow the registry text layout
    #[error("malformed record at offset {offset}: {reason}")]
    MalformedRecord {
        /// Start of the offending span
        offset: u64,
        /// What is wrong with it
        reason: String,
    },

    /// An index file line could not be parsed
    #[error("invalid index entry on line {line}: {reason}")]
    Index {
        /// 1-based line number
        line: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl RegistryError {
    /// Create a new not-registered error
    pub fn not_registered(kind: RecordKind, key: u64) -> Self {
        Self::NotRegistered {
            kind,
            value: kind.render(key),
        }
    }

    /// Create a new malformed record error
    pub fn malformed<S: Into<String>>(offset: u64, reason: S) -> Self {
        Self::MalformedRecord {
            offset,
            reason: reason.into(),
        }
    }

    /// Create a new index error
    pub fn index<S: Into<String>>(line: usize, reason: S) -> Self {
        Self::Index {
            line,
            reason: reason.into(),
        }
    }
}

impl From<figment::Error> for RegistryError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

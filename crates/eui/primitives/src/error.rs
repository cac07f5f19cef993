//! Error types for the EUI value model.

use thiserror::Error;

/// Result type for operations in this crate
pub type Result<T> = std::result::Result<T, EuiError>;

/// Errors raised while constructing, indexing or combining EUI values.
///
/// Every error is raised at the point of violation; no constructor hands back
/// a partially initialised value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EuiError {
    /// Malformed textual or integer input for an identifier or prefix
    #[error("invalid address format: {0}")]
    Format(String),

    /// Index or bounds outside the valid span of a range, prefix or word list
    #[error("index out of range: {0}")]
    Index(String),

    /// An argument has the wrong shape, e.g. a dialect that does not fit the
    /// address width
    #[error("type error: {0}")]
    Type(String),

    /// A well-formed value used where its precondition does not hold
    #[error("invalid value: {0}")]
    Value(String),

    /// The operation is deliberately not supported
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl EuiError {
    /// Create a new format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Self::Format(msg.into())
    }

    /// Create a new index error
    pub fn index<S: Into<String>>(msg: S) -> Self {
        Self::Index(msg.into())
    }

    /// Create a new type error
    pub fn type_error<S: Into<String>>(msg: S) -> Self {
        Self::Type(msg.into())
    }

    /// Create a new value error
    pub fn value<S: Into<String>>(msg: S) -> Self {
        Self::Value(msg.into())
    }
}

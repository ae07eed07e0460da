//! Error types for formworks-core

use thiserror::Error;

/// Result type alias for version store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by version store implementations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Version record could not be read
    #[error("failed to read version record at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Version record could not be written
    #[error("failed to write version record at {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    /// Version record exists but does not parse
    #[error("malformed version record at {path}: {source}")]
    Malformed {
        path: String,
        source: serde_yaml_ng::Error,
    },

    /// Version record could not be serialized
    #[error("failed to serialize version record: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),
}

impl StoreError {
    /// Create a read error
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error
    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed record error
    pub fn malformed(path: impl Into<String>, source: serde_yaml_ng::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }
}

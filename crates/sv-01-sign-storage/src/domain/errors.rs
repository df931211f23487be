//! # Domain Errors
//!
//! Error types for the sign storage subsystem.
//!
//! None of these reach the host: `load` recovers from every persistence
//! error itself, and callers of `save` log and roll back.

use std::path::PathBuf;
use thiserror::Error;

/// Text that does not name any `SignType`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sign type: {0:?}")]
pub struct UnknownSignType(pub String);

/// Failures of the persistence adapters.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading, writing or renaming the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a registry file or fails its checksum.
    #[error("corrupt registry data: {reason}")]
    Corrupt { reason: String },

    /// The file was written by an incompatible format version.
    #[error("unsupported registry format version {found} (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },

    /// Encoding or decoding the entry list failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the stored bytes themselves are unusable.
    ///
    /// Unlike an I/O error, retrying will not help.
    #[must_use]
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            PersistenceError::Corrupt { .. }
                | PersistenceError::UnsupportedVersion { .. }
                | PersistenceError::Serialization(_)
        )
    }
}

/// Failures surfaced by `SignStorage`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The registry could not be written; the previous file is unchanged.
    #[error("failed to save {entries} registry entries: {source}")]
    Save {
        entries: usize,
        #[source]
        source: PersistenceError,
    },
}

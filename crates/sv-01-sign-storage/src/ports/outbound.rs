//! # Outbound Ports (Driven Ports)
//!
//! Where the registry goes when it leaves memory.
//!
//! Production: `FileRegistryPersistence` (adapters/file.rs)
//! Testing: `InMemoryRegistryPersistence` (adapters/memory.rs)

use crate::domain::entry::SerializedRegistryEntry;
use crate::domain::errors::PersistenceError;
use std::path::PathBuf;

/// Durable backing store for the whole registry.
///
/// The registry is always written and read as one complete snapshot.
pub trait RegistryPersistence: Send + Sync {
    /// Whether a registry has ever been written.
    fn exists(&self) -> bool;

    /// Read the full entry list.
    fn read(&self) -> Result<Vec<SerializedRegistryEntry>, PersistenceError>;

    /// Replace the stored registry with `entries`.
    ///
    /// On error the previously stored registry must still be readable.
    fn write(&self, entries: &[SerializedRegistryEntry]) -> Result<(), PersistenceError>;

    /// Keep a copy of unreadable data before it is overwritten.
    ///
    /// Returns where the copy went, if anywhere.
    fn quarantine(&self) -> Result<Option<PathBuf>, PersistenceError> {
        Ok(None)
    }

    /// Human-readable location for log lines.
    fn describe(&self) -> String;
}

impl<T: RegistryPersistence + ?Sized> RegistryPersistence for std::sync::Arc<T> {
    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn read(&self) -> Result<Vec<SerializedRegistryEntry>, PersistenceError> {
        (**self).read()
    }

    fn write(&self, entries: &[SerializedRegistryEntry]) -> Result<(), PersistenceError> {
        (**self).write(entries)
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, PersistenceError> {
        (**self).quarantine()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

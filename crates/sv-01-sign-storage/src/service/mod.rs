//! # Sign Storage Service
//!
//! The in-memory registry plus its persistence lifecycle.

use crate::adapters::{FileRegistryPersistence, InMemoryRegistryPersistence};
use crate::domain::entry::SerializedRegistryEntry;
use crate::domain::errors::StorageError;
use crate::domain::sign_type::SignType;
use crate::ports::outbound::RegistryPersistence;
use parking_lot::{Mutex, RwLock};
use shared_types::{LiveLocation, WorldDirectory};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};


/// How `load` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Entries were read from the backing store.
    Loaded,
    /// No store existed; an empty one was written.
    Bootstrapped,
    /// The store was unreadable; the registry is now empty.
    Degraded,
}

/// Result of `SignStorage::load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub status: LoadStatus,
    /// Entries now in the registry.
    pub loaded: usize,
    /// Entries skipped because their world is not running.
    pub dropped: usize,
}

/// Registry of every SignVault sign, keyed by live location.
///
/// All methods take `&self`. Map mutations are serialized by an internal
/// lock, and `save`/`load` run against a complete snapshot so a torn
/// registry is never written.
pub struct SignStorage {
    entries: RwLock<HashMap<LiveLocation, SignType>>,
    persistence: Box<dyn RegistryPersistence>,
    worlds: Arc<dyn WorldDirectory>,
    /// Serializes whole-file reads and writes.
    io: Mutex<()>,
}

impl SignStorage {
    pub fn new(persistence: Box<dyn RegistryPersistence>, worlds: Arc<dyn WorldDirectory>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            persistence,
            worlds,
            io: Mutex::new(()),
        }
    }

    /// Storage backed by a registry file at `path`.
    pub fn open<P: AsRef<Path>>(path: P, worlds: Arc<dyn WorldDirectory>) -> Self {
        Self::new(Box::new(FileRegistryPersistence::new(path)), worlds)
    }

    /// Storage that never touches disk.
    pub fn in_memory(worlds: Arc<dyn WorldDirectory>) -> Self {
        Self::new(Box::new(InMemoryRegistryPersistence::new()), worlds)
    }

    // =========================================================================
    // Registry map
    // =========================================================================

    #[must_use]
    pub fn get(&self, location: &LiveLocation) -> Option<SignType> {
        self.entries.read().get(location).copied()
    }

    /// Insert or overwrite. Not persisted until `save`.
    pub fn put(&self, location: LiveLocation, sign_type: SignType) -> Option<SignType> {
        self.entries.write().insert(location, sign_type)
    }

    /// Not persisted until `save`.
    pub fn remove(&self, location: &LiveLocation) -> Option<SignType> {
        self.entries.write().remove(location)
    }

    #[must_use]
    pub fn contains(&self, location: &LiveLocation) -> bool {
        self.entries.read().contains_key(location)
    }

    /// Drop every entry from memory. Disk is untouched until `save`.
    pub fn purge(&self) {
        self.entries.write().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// A stable copy of every entry.
    ///
    /// Safe to iterate while the registry is being modified.
    #[must_use]
    pub fn entries(&self) -> Vec<(LiveLocation, SignType)> {
        self.entries
            .read()
            .iter()
            .map(|(location, sign_type)| (location.clone(), *sign_type))
            .collect()
    }

    /// A stable copy of every registered location.
    #[must_use]
    pub fn locations(&self) -> Vec<LiveLocation> {
        self.entries.read().keys().cloned().collect()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the full registry to the backing store.
    ///
    /// On failure a warning is logged and the previous stored registry is
    /// left as it was.
    pub fn save(&self) -> Result<(), StorageError> {
        let _io = self.io.lock();

        let mut snapshot: Vec<SerializedRegistryEntry> = self
            .entries
            .read()
            .iter()
            .map(|(location, sign_type)| SerializedRegistryEntry::new(location.persist(), *sign_type))
            .collect();
        snapshot.sort_unstable();

        match self.persistence.write(&snapshot) {
            Ok(()) => {
                debug!(
                    entries = snapshot.len(),
                    target = %self.persistence.describe(),
                    "Sign registry saved"
                );
                Ok(())
            }
            Err(source) => {
                warn!(
                    entries = snapshot.len(),
                    target = %self.persistence.describe(),
                    error = %source,
                    "Failed to save sign registry"
                );
                Err(StorageError::Save {
                    entries: snapshot.len(),
                    source,
                })
            }
        }
    }

    /// Replace the in-memory registry with the stored one.
    ///
    /// Never fails: a missing store is bootstrapped empty, an unreadable one
    /// degrades to an empty registry, and entries whose world is not running
    /// are dropped with a warning.
    pub fn load(&self) -> LoadOutcome {
        let guard = self.io.lock();

        if !self.persistence.exists() {
            drop(guard);
            self.purge();
            info!(
                target = %self.persistence.describe(),
                "No sign registry found, creating an empty one"
            );
            // Failure is already logged by save.
            let _ = self.save();
            return LoadOutcome {
                status: LoadStatus::Bootstrapped,
                loaded: 0,
                dropped: 0,
            };
        }

        let stored = match self.persistence.read() {
            Ok(stored) => stored,
            Err(error) => {
                warn!(
                    target = %self.persistence.describe(),
                    %error,
                    "Sign registry unreadable, starting with an empty registry"
                );
                if error.is_corruption() {
                    match self.persistence.quarantine() {
                        Ok(Some(copy)) => {
                            warn!(copy = %copy.display(), "Kept a copy of the unreadable registry")
                        }
                        Ok(None) => {}
                        Err(e) => warn!(error = %e, "Could not keep a copy of the unreadable registry"),
                    }
                }
                self.purge();
                return LoadOutcome {
                    status: LoadStatus::Degraded,
                    loaded: 0,
                    dropped: 0,
                };
            }
        };

        let mut map = HashMap::with_capacity(stored.len());
        let mut dropped = 0usize;
        for entry in stored {
            match entry.location.resolve(self.worlds.as_ref()) {
                Ok(location) => {
                    map.insert(location, entry.sign_type);
                }
                Err(error) => {
                    dropped += 1;
                    warn!(
                        location = %entry.location,
                        sign_type = %entry.sign_type,
                        %error,
                        "Dropping registry entry for a world that is not loaded"
                    );
                }
            }
        }

        let loaded = map.len();
        *self.entries.write() = map;
        info!(loaded, dropped, "Sign registry loaded");

        LoadOutcome {
            status: LoadStatus::Loaded,
            loaded,
            dropped,
        }
    }
}

impl std::fmt::Debug for SignStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignStorage")
            .field("entries", &self.len())
            .field("persistence", &self.persistence.describe())
            .finish()
    }
}

//! In-memory registry persistence for tests.

use crate::adapters::codec;
use crate::domain::entry::SerializedRegistryEntry;
use crate::domain::errors::PersistenceError;
use crate::ports::outbound::RegistryPersistence;
use parking_lot::Mutex;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory registry persistence for testing.
///
/// Stores the encoded bytes so tests exercise the same codec as the file
/// adapter. Writes can be made to fail on demand.
#[derive(Default)]
pub struct InMemoryRegistryPersistence {
    bytes: Mutex<Option<Vec<u8>>>,
    fail_writes: AtomicBool,
}

impl InMemoryRegistryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored bytes, valid or not.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Mutex::new(Some(bytes)),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make every subsequent `write` fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The currently stored bytes, if any.
    pub fn stored_bytes(&self) -> Option<Vec<u8>> {
        self.bytes.lock().clone()
    }
}

impl RegistryPersistence for InMemoryRegistryPersistence {
    fn exists(&self) -> bool {
        self.bytes.lock().is_some()
    }

    fn read(&self) -> Result<Vec<SerializedRegistryEntry>, PersistenceError> {
        match self.bytes.lock().as_deref() {
            Some(bytes) => codec::decode(bytes),
            None => Err(PersistenceError::io(
                "<memory>",
                io::Error::new(io::ErrorKind::NotFound, "nothing stored"),
            )),
        }
    }

    fn write(&self, entries: &[SerializedRegistryEntry]) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::io(
                "<memory>",
                io::Error::new(io::ErrorKind::Other, "simulated write failure"),
            ));
        }
        let bytes = codec::encode(entries)?;
        *self.bytes.lock() = Some(bytes);
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

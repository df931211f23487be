//! Durable projection of a registry entry.

use super::sign_type::SignType;
use serde::{Deserialize, Serialize};
use shared_types::PersistedLocation;

/// One `(location, type)` pair as written to disk.
///
/// Carries a world id instead of a live world handle, so it stays
/// meaningful across restarts of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SerializedRegistryEntry {
    pub location: PersistedLocation,
    pub sign_type: SignType,
}

impl SerializedRegistryEntry {
    #[must_use]
    pub fn new(location: PersistedLocation, sign_type: SignType) -> Self {
        Self {
            location,
            sign_type,
        }
    }
}

//! # Sign Storage (sv-01)
//!
//! The authoritative registry of SignVault signs: which world locations are
//! registered, and as which `SignType`.
//!
//! ```text
//!   SignStorage ── save() ──→ [SerializedRegistryEntry] ──→ RegistryPersistence
//!   (LiveLocation → SignType)                                (signsstorage.bin)
//!        ↑                                                         │
//!        └──── load(): resolve world ids, drop unresolved ←────────┘
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Unique keys | A location is registered at most once |
//! | 2 | Safe overwrite | A failed save leaves the previous file intact |
//! | 3 | Fail open | Corrupt or unreadable files degrade to an empty registry |
//! | 4 | Per-entry resolution | An unknown world id drops that entry only |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - `SignType`, serialized entries, errors
//! - `ports/` - persistence SPI
//! - `adapters/` - file and in-memory persistence, on-disk codec
//! - `service/` - `SignStorage`

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{FileRegistryPersistence, InMemoryRegistryPersistence};
pub use domain::entry::SerializedRegistryEntry;
pub use domain::errors::{PersistenceError, StorageError, UnknownSignType};
pub use domain::sign_type::SignType;
pub use ports::outbound::RegistryPersistence;
pub use service::{LoadOutcome, LoadStatus, SignStorage};

/// File name of the registry inside the plugin data directory.
pub const STORAGE_FILE_NAME: &str = "signsstorage.bin";

//! Persistence adapters.

pub mod codec;
pub mod file;
pub mod memory;

pub use file::FileRegistryPersistence;
pub use memory::InMemoryRegistryPersistence;

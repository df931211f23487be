//! Adapters for the protection ports.

pub mod inventory;

pub use inventory::LoggingVirtualInventory;

//! # Shared Types Crate
//!
//! World-boundary types shared by every SignVault subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: locations, block kinds and sign text are
//!   defined here and nowhere else.
//! - **Live vs. durable**: `LiveLocation` borrows into a running world,
//!   `PersistedLocation` is a plain value; conversion is explicit.
//! - **Ports, not engines**: the host world is reached only through the
//!   `World`, `WorldDirectory` and `Player` traits.

pub mod actor;
pub mod entities;
pub mod errors;
pub mod location;
pub mod world;

pub use actor::{Actor, Player, PlayerHandle, TestPlayer};
pub use entities::*;
pub use errors::*;
pub use location::{LiveLocation, PersistedLocation};
pub use world::{InMemoryWorld, World, WorldDirectory, WorldHandle, WorldSet};

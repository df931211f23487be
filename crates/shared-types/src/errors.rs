//! # Error Types
//!
//! Errors raised at the world boundary.

use crate::entities::{BlockPos, WorldId};
use thiserror::Error;

/// Failures when writing into the host world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// The block at this position does not carry sign text.
    #[error("Block at {pos} in world {world} is not a sign")]
    NotASign { world: WorldId, pos: BlockPos },
}

/// Failures when bridging durable and live locations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// No running world carries this identifier.
    #[error("World {0} is not currently loaded")]
    WorldNotLoaded(WorldId),
}

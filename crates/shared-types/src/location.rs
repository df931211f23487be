//! # Locations
//!
//! Two views of "a block in a world":
//!
//! - `LiveLocation` holds a handle into a running world and can read and
//!   write block state. It is only valid while the host is running.
//! - `PersistedLocation` is a plain value (world UUID + coordinates) that can
//!   be written to disk and resolved again later.
//!
//! ```text
//! LiveLocation ──persist()──────────────→ PersistedLocation
//!      ↑                                         │
//!      └──────── resolve(&dyn WorldDirectory) ───┘  (fails if world not loaded)
//! ```

use crate::entities::{BlockFace, BlockKind, BlockPos, SignLines, WorldId};
use crate::errors::{LocationError, WorldError};
use crate::world::{WorldDirectory, WorldHandle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A block position bound to a live world.
///
/// Two live locations are equal iff they name the same world identity and
/// the same coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiveLocation {
    world: WorldHandle,
    pos: BlockPos,
}

impl LiveLocation {
    pub fn new(world: WorldHandle, pos: BlockPos) -> Self {
        Self { world, pos }
    }

    /// Capture a location in a world looked up by identity.
    ///
    /// # Errors
    ///
    /// `LocationError::WorldNotLoaded` if no running world has this id.
    pub fn capture(
        worlds: &dyn WorldDirectory,
        world: WorldId,
        pos: BlockPos,
    ) -> Result<Self, LocationError> {
        worlds
            .world(world)
            .map(|handle| Self::new(handle, pos))
            .ok_or(LocationError::WorldNotLoaded(world))
    }

    #[must_use]
    pub fn world(&self) -> &WorldHandle {
        &self.world
    }

    #[must_use]
    pub fn world_id(&self) -> WorldId {
        self.world.id()
    }

    #[must_use]
    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    /// The neighbouring block towards `face`, in the same world.
    #[must_use]
    pub fn relative(&self, face: BlockFace) -> Self {
        self.relative_n(face, 1)
    }

    /// The block `distance` steps towards `face`, in the same world.
    #[must_use]
    pub fn relative_n(&self, face: BlockFace, distance: i32) -> Self {
        Self {
            world: self.world.clone(),
            pos: self.pos.relative_n(face, distance),
        }
    }

    /// What currently occupies this location.
    #[must_use]
    pub fn kind(&self) -> BlockKind {
        self.world.block_kind(self.pos)
    }

    /// Whether the block here currently bears sign text.
    #[must_use]
    pub fn is_sign(&self) -> bool {
        self.kind().is_sign()
    }

    /// Facing of a wall sign here, if any.
    #[must_use]
    pub fn sign_facing(&self) -> Option<BlockFace> {
        self.world.sign_facing(self.pos)
    }

    /// Current sign text, if the block is a sign.
    #[must_use]
    pub fn sign_lines(&self) -> Option<SignLines> {
        self.world.sign_lines(self.pos)
    }

    /// Overwrite the sign text here.
    pub fn set_sign_lines(&self, lines: &SignLines) -> Result<(), WorldError> {
        self.world.set_sign_lines(self.pos, lines)
    }

    /// Project into the durable form.
    #[must_use]
    pub fn persist(&self) -> PersistedLocation {
        PersistedLocation {
            world: self.world_id(),
            x: self.pos.x,
            y: self.pos.y,
            z: self.pos.z,
        }
    }
}

impl fmt::Display for LiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.world.name(), self.pos)
    }
}

/// Durable projection of a `LiveLocation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersistedLocation {
    pub world: WorldId,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl PersistedLocation {
    #[must_use]
    pub fn pos(&self) -> BlockPos {
        BlockPos::new(self.x, self.y, self.z)
    }

    /// Re-attach to the running world set.
    ///
    /// # Errors
    ///
    /// `LocationError::WorldNotLoaded` if the world is not currently running.
    pub fn resolve(&self, worlds: &dyn WorldDirectory) -> Result<LiveLocation, LocationError> {
        LiveLocation::capture(worlds, self.world, self.pos())
    }
}

impl fmt::Display for PersistedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@({}, {}, {})", self.world, self.x, self.y, self.z)
    }
}

//! # World Ports
//!
//! The slice of the host world-simulation engine that SignVault consumes:
//! block kind reads, sign text reads/writes and wall-sign facing.
//!
//! Production: the host engine implements `World` and `WorldDirectory`.
//! Testing: `InMemoryWorld` and `WorldSet` (below).

use crate::entities::{BlockFace, BlockKind, BlockPos, SignLines, WorldId};
use crate::errors::WorldError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A running world.
///
/// All methods take `&self`; implementations own their interior mutability.
/// Only the four sign lines are ever written through this port.
pub trait World: Send + Sync {
    /// Durable identity of this world.
    fn id(&self) -> WorldId;

    /// Human-readable name used in log lines.
    fn name(&self) -> &str;

    /// What currently occupies `pos`.
    fn block_kind(&self, pos: BlockPos) -> BlockKind;

    /// Direction a wall sign at `pos` faces (away from its supporting block).
    ///
    /// `None` when `pos` does not hold a wall sign.
    fn sign_facing(&self, pos: BlockPos) -> Option<BlockFace>;

    /// The four text lines of the sign at `pos`, if it is a sign.
    fn sign_lines(&self, pos: BlockPos) -> Option<SignLines>;

    /// Overwrite the four text lines of the sign at `pos`.
    fn set_sign_lines(&self, pos: BlockPos, lines: &SignLines) -> Result<(), WorldError>;
}

/// Shared handle to a live world.
///
/// Equality and hashing use the world identity only.
#[derive(Clone)]
pub struct WorldHandle(Arc<dyn World>);

impl WorldHandle {
    pub fn new(world: Arc<dyn World>) -> Self {
        Self(world)
    }

    /// Identity of the referenced world.
    #[must_use]
    pub fn id(&self) -> WorldId {
        self.0.id()
    }
}

impl std::ops::Deref for WorldHandle {
    type Target = dyn World;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for WorldHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for WorldHandle {}

impl Hash for WorldHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for WorldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldHandle")
            .field("id", &self.id())
            .field("name", &self.0.name())
            .finish()
    }
}

/// The set of currently running worlds.
pub trait WorldDirectory: Send + Sync {
    /// Resolve a durable identifier into a live world, if loaded.
    fn world(&self, id: WorldId) -> Option<WorldHandle>;
}

// =============================================================================
// IN-MEMORY ADAPTERS
// =============================================================================

#[derive(Debug, Clone)]
struct BlockState {
    kind: BlockKind,
    facing: Option<BlockFace>,
    lines: SignLines,
}

/// Sparse in-memory world for tests and tooling.
///
/// Unset positions read as air.
pub struct InMemoryWorld {
    id: WorldId,
    name: String,
    blocks: RwLock<HashMap<BlockPos, BlockState>>,
}

impl InMemoryWorld {
    /// Create an empty world with a random identity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(WorldId::new_v4(), name)
    }

    /// Create an empty world with a fixed identity.
    #[must_use]
    pub fn with_id(id: WorldId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            blocks: RwLock::new(HashMap::new()),
        }
    }

    /// Place a non-sign block (`Air` clears the position).
    pub fn set_block(&self, pos: BlockPos, kind: BlockKind) {
        let mut blocks = self.blocks.write();
        if kind == BlockKind::Air {
            blocks.remove(&pos);
            return;
        }
        blocks.insert(
            pos,
            BlockState {
                kind,
                facing: None,
                lines: SignLines::empty(),
            },
        );
    }

    /// Place a sign post with blank text.
    pub fn place_sign_post(&self, pos: BlockPos) {
        self.blocks.write().insert(
            pos,
            BlockState {
                kind: BlockKind::SignPost,
                facing: None,
                lines: SignLines::empty(),
            },
        );
    }

    /// Place a wall sign facing `facing` (mounted on `pos.relative(facing.opposite())`).
    pub fn place_wall_sign(&self, pos: BlockPos, facing: BlockFace) {
        self.blocks.write().insert(
            pos,
            BlockState {
                kind: BlockKind::WallSign,
                facing: Some(facing),
                lines: SignLines::empty(),
            },
        );
    }

    /// Remove whatever occupies `pos`.
    pub fn clear(&self, pos: BlockPos) {
        self.blocks.write().remove(&pos);
    }

    /// Number of non-air blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.read().len()
    }
}

impl World for InMemoryWorld {
    fn id(&self) -> WorldId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn block_kind(&self, pos: BlockPos) -> BlockKind {
        self.blocks
            .read()
            .get(&pos)
            .map(|b| b.kind.clone())
            .unwrap_or(BlockKind::Air)
    }

    fn sign_facing(&self, pos: BlockPos) -> Option<BlockFace> {
        self.blocks
            .read()
            .get(&pos)
            .filter(|b| b.kind == BlockKind::WallSign)
            .and_then(|b| b.facing)
    }

    fn sign_lines(&self, pos: BlockPos) -> Option<SignLines> {
        self.blocks
            .read()
            .get(&pos)
            .filter(|b| b.kind.is_sign())
            .map(|b| b.lines.clone())
    }

    fn set_sign_lines(&self, pos: BlockPos, lines: &SignLines) -> Result<(), WorldError> {
        let mut blocks = self.blocks.write();
        match blocks.get_mut(&pos) {
            Some(block) if block.kind.is_sign() => {
                block.lines = lines.clone();
                Ok(())
            }
            _ => Err(WorldError::NotASign { world: self.id, pos }),
        }
    }
}

/// In-memory `WorldDirectory`.
#[derive(Default)]
pub struct WorldSet {
    worlds: RwLock<HashMap<WorldId, WorldHandle>>,
}

impl WorldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a world, returning its live handle.
    pub fn insert(&self, world: Arc<dyn World>) -> WorldHandle {
        let handle = WorldHandle::new(world);
        self.worlds.write().insert(handle.id(), handle.clone());
        handle
    }

    /// Unload a world. Handles already held elsewhere stay usable.
    pub fn unload(&self, id: WorldId) -> Option<WorldHandle> {
        self.worlds.write().remove(&id)
    }
}

impl WorldDirectory for WorldSet {
    fn world(&self, id: WorldId) -> Option<WorldHandle> {
        self.worlds.read().get(&id).cloned()
    }
}

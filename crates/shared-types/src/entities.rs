//! # Core World Entities
//!
//! Plain value types describing the host world as seen from SignVault.
//!
//! ## Clusters
//!
//! - **Identity**: `WorldId`
//! - **Geometry**: `BlockPos`, `BlockFace`
//! - **Block state**: `BlockKind`, `SignLines`

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Durable identity of a world.
///
/// Survives restarts of the host, unlike the live world handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub Uuid);

impl WorldId {
    /// Generate a fresh random world identity.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for WorldId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

// =============================================================================
// CLUSTER B: GEOMETRY
// =============================================================================

/// Integer block coordinates inside a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Create a position from raw coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighbouring position one step towards `face`.
    #[must_use]
    pub fn relative(&self, face: BlockFace) -> Self {
        self.relative_n(face, 1)
    }

    /// The position `distance` steps towards `face`.
    #[must_use]
    pub fn relative_n(&self, face: BlockFace, distance: i32) -> Self {
        let (dx, dy, dz) = face.offset();
        Self {
            x: self.x.wrapping_add(dx.wrapping_mul(distance)),
            y: self.y.wrapping_add(dy.wrapping_mul(distance)),
            z: self.z.wrapping_add(dz.wrapping_mul(distance)),
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the six faces of a block.
///
/// North is negative Z, east is positive X, up is positive Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockFace {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl BlockFace {
    /// The four faces a wall sign can be mounted on.
    pub const HORIZONTAL: [BlockFace; 4] = [
        BlockFace::North,
        BlockFace::South,
        BlockFace::East,
        BlockFace::West,
    ];

    /// Unit offset `(dx, dy, dz)` of this face.
    #[must_use]
    pub const fn offset(&self) -> (i32, i32, i32) {
        match self {
            BlockFace::North => (0, 0, -1),
            BlockFace::South => (0, 0, 1),
            BlockFace::East => (1, 0, 0),
            BlockFace::West => (-1, 0, 0),
            BlockFace::Up => (0, 1, 0),
            BlockFace::Down => (0, -1, 0),
        }
    }

    /// The face pointing the other way.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            BlockFace::North => BlockFace::South,
            BlockFace::South => BlockFace::North,
            BlockFace::East => BlockFace::West,
            BlockFace::West => BlockFace::East,
            BlockFace::Up => BlockFace::Down,
            BlockFace::Down => BlockFace::Up,
        }
    }
}

// =============================================================================
// CLUSTER C: BLOCK STATE
// =============================================================================

/// What currently occupies a block position.
///
/// SignVault only distinguishes the two sign shapes; every other material is
/// carried by name for logging.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Nothing there.
    Air,
    /// Free-standing sign sitting on top of the block below it.
    SignPost,
    /// Sign hanging on the side of a neighbouring block.
    WallSign,
    /// Any other material (e.g. `"dirt"`, `"piston"`).
    Other(String),
}

impl BlockKind {
    /// Convenience constructor for a named material.
    pub fn other(name: impl Into<String>) -> Self {
        BlockKind::Other(name.into())
    }

    /// Whether this block bears sign text.
    #[must_use]
    pub fn is_sign(&self) -> bool {
        matches!(self, BlockKind::SignPost | BlockKind::WallSign)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Air => write!(f, "air"),
            BlockKind::SignPost => write!(f, "sign_post"),
            BlockKind::WallSign => write!(f, "wall_sign"),
            BlockKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Number of text lines on a sign.
pub const SIGN_LINE_COUNT: usize = 4;

/// The four text lines of a sign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignLines(pub [String; SIGN_LINE_COUNT]);

impl SignLines {
    /// Four empty lines.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from anything string-like.
    pub fn new<S: Into<String>>(lines: [S; SIGN_LINE_COUNT]) -> Self {
        Self(lines.map(Into::into))
    }

    /// Text of line `index`; out-of-range indices read as empty.
    #[must_use]
    pub fn line(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    /// Overwrite line `index`. Out-of-range indices are ignored.
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = text.into();
        }
    }

    /// Iterate over the lines in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<[String; SIGN_LINE_COUNT]> for SignLines {
    fn from(lines: [String; SIGN_LINE_COUNT]) -> Self {
        Self(lines)
    }
}

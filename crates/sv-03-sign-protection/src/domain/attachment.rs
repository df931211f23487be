//! # Attachment Discovery
//!
//! Which signs would fall if a block disappeared.
//!
//! A sign is held up by exactly one block:
//!
//! ```text
//!        [post]          wall sign on the north face of B,
//!          │             facing north:
//!   [wall]─B                 [wall]→N
//!                               │
//!                               B
//! ```
//!
//! - a wall sign hangs on the block behind it, so it is attached to B when it
//!   sits on B's `face` side and faces `face`;
//! - a sign post stands on the block below it.
//!
//! Signs can themselves carry signs (a post on a post, a wall sign on a post),
//! so the search continues from every sign it finds.

use shared_types::{BlockFace, BlockKind, LiveLocation};
use std::collections::HashSet;

/// Every sign supported by `block`, directly or through other signs.
///
/// `block` itself is never part of the result.
#[must_use]
pub fn find_attached_signs(block: &LiveLocation) -> HashSet<LiveLocation> {
    let mut found = HashSet::new();
    let mut pending = vec![block.clone()];

    while let Some(current) = pending.pop() {
        for support in directly_attached(&current) {
            if &support != block && found.insert(support.clone()) {
                pending.push(support);
            }
        }
    }
    found
}

fn directly_attached(block: &LiveLocation) -> impl Iterator<Item = LiveLocation> + '_ {
    let walls = BlockFace::HORIZONTAL.into_iter().filter_map(move |face| {
        let neighbour = block.relative(face);
        let hangs_here =
            neighbour.kind() == BlockKind::WallSign && neighbour.sign_facing() == Some(face);
        hangs_here.then_some(neighbour)
    });

    let above = block.relative(BlockFace::Up);
    let post = (above.kind() == BlockKind::SignPost).then_some(above);

    walls.chain(post)
}

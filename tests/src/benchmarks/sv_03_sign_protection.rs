//! # SV-03 Sign Protection Benchmarks
//!
//! Attachment discovery runs on every block break, so it sits on the hot
//! path of the host's event loop.

use criterion::{black_box, Criterion};
use shared_types::{BlockFace, BlockKind, BlockPos, InMemoryWorld, LiveLocation, WorldHandle};
use std::sync::Arc;
use sv_03_sign_protection::find_attached_signs;

const SIDES: [BlockFace; 4] = [
    BlockFace::North,
    BlockFace::East,
    BlockFace::South,
    BlockFace::West,
];

pub fn bench_attachment_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("sv-03-attachment-discovery");

    let world = Arc::new(InMemoryWorld::new("overworld"));
    let handle = WorldHandle::new(world.clone());
    let bare = LiveLocation::new(handle.clone(), BlockPos::new(0, 64, 0));
    world.set_block(bare.pos(), BlockKind::other("stone"));

    let covered = LiveLocation::new(handle, BlockPos::new(10, 64, 10));
    world.set_block(covered.pos(), BlockKind::other("stone"));
    for face in SIDES {
        world.place_wall_sign(covered.relative(face).pos(), face);
    }
    world.place_sign_post(covered.relative(BlockFace::Up).pos());

    group.bench_function("no_signs", |b| {
        b.iter(|| black_box(find_attached_signs(&bare)))
    });
    group.bench_function("five_signs", |b| {
        b.iter(|| black_box(find_attached_signs(&covered)))
    });
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_attachment_discovery(c);
}

//! # SV-01 Sign Storage Benchmarks
//!
//! Full-snapshot save and load of registries of increasing size.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use shared_types::{BlockPos, InMemoryWorld, LiveLocation, WorldSet};
use std::sync::Arc;
use sv_01_sign_storage::{SignStorage, SignType, STORAGE_FILE_NAME};
use tempfile::TempDir;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn populated(dir: &TempDir, size: usize) -> (Arc<WorldSet>, SignStorage) {
    let worlds = Arc::new(WorldSet::new());
    let handle = worlds.insert(Arc::new(InMemoryWorld::new("overworld")));
    let storage = SignStorage::open(dir.path().join(STORAGE_FILE_NAME), worlds.clone());
    for i in 0..size {
        let i = i as i32;
        let location = LiveLocation::new(handle.clone(), BlockPos::new(i % 128, 64, i / 128));
        let sign_type = if i % 2 == 0 {
            SignType::Deposit
        } else {
            SignType::Withdraw
        };
        storage.put(location, sign_type);
    }
    (worlds, storage)
}

pub fn bench_registry_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("sv-01-registry-save");
    for size in SIZES {
        let dir = TempDir::new().expect("temp dir");
        let (_worlds, storage) = populated(&dir, size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &storage, |b, storage| {
            b.iter(|| storage.save().expect("save"));
        });
    }
    group.finish();
}

pub fn bench_registry_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("sv-01-registry-load");
    for size in SIZES {
        let dir = TempDir::new().expect("temp dir");
        let (worlds, storage) = populated(&dir, size);
        storage.save().expect("save");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let fresh = SignStorage::open(dir.path().join(STORAGE_FILE_NAME), worlds.clone());
                black_box(fresh.load())
            });
        });
    }
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_registry_save(c);
    bench_registry_load(c);
}

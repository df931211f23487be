//! # SignVault Subsystem Benchmarks
//!
//! | Subsystem | Operation | Target |
//! |-----------|-----------|--------|
//! | sv-01 Sign Storage | Save 10k entries | < 50ms |
//! | sv-01 Sign Storage | Load 10k entries | < 50ms |
//! | sv-03 Sign Protection | Attachment discovery | < 10μs |

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;
use sv_tests::benchmarks::{sv_01_sign_storage, sv_03_sign_protection};

fn configure() -> Criterion {
    Criterion::default().measurement_time(Duration::from_secs(5))
}

criterion_group!(
    name = benches;
    config = configure();
    targets = sv_01_sign_storage::register_benchmarks, sv_03_sign_protection::register_benchmarks
);
criterion_main!(benches);

//! # SignVault Benchmarks
//!
//! Criterion benchmarks per subsystem, registered from
//! `benches/sign_benchmarks.rs`.

pub mod sv_01_sign_storage;
pub mod sv_03_sign_protection;

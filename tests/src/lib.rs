//! # SignVault Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! │   ├── sv_01_sign_storage.rs
//! │   └── sv_03_sign_protection.rs
//! │
//! └── integration/      # Cross-subsystem flows over the event bus
//!     ├── fixtures.rs
//!     ├── protection_flows.rs
//!     └── lifecycle_flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sv-tests
//!
//! # By category
//! cargo test -p sv-tests integration::
//!
//! # Benchmarks
//! cargo bench -p sv-tests
//! ```

pub mod benchmarks;
pub mod integration;

//! # Sign Protection (sv-03)
//!
//! Keeps registered signs alive in a world that players, fire, pistons and
//! explosions can change at will, and runs the text-driven creation and
//! permission-gated removal protocols.
//!
//! ```text
//!  BlockMutationEvent ──┐
//!  SignChangeEvent ─────┼──→ ProtectionController ──→ would_destroy(candidates)
//!  PlayerInteractEvent ─┘          │                      │
//!                                  │                      ├─ find_attached_signs
//!                                  │                      └─ SignStorage::contains
//!                                  ├──→ SignService (create / remove)
//!                                  └──→ VirtualInventory (deposit / withdraw)
//! ```
//!
//! ## Crate Structure
//!
//! - `domain/` - attachment discovery
//! - `ports/` - the virtual inventory SPI
//! - `adapters/` - logging inventory
//! - `service/` - the controller and its bus wiring

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::LoggingVirtualInventory;
pub use domain::attachment::find_attached_signs;
pub use ports::outbound::VirtualInventory;
pub use service::controller::ProtectionController;
pub use service::wiring::ListenerRegistration;

//! # Sign Format (sv-02)
//!
//! Turns configuration into the four lines a SignVault sign must show, checks
//! signs against it, and runs the creation/removal lifecycle that keeps the
//! registry and the physical sign in step.
//!
//! ```text
//! config.toml ──→ PluginConfig ──→ SignFormatter ──configured_lines──→ SignLines
//!                                        │
//!                      SignService ──────┤ format / invalidate
//!                        │               ↓
//!                        └──→ SignStorage (sv-01)   SignSurface (placed sign or pending text)
//! ```
//!
//! ## Crate Structure
//!
//! - `domain/` - configuration view, colour codes, sign surfaces, reports
//! - `service/` - `SignFormatter` and `SignService`

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod domain;
pub mod service;

pub use domain::color::translate_color_codes;
pub use domain::config::{PluginConfig, DEFAULT_CONFIG};
pub use domain::errors::{ConfigError, LifecycleError};
pub use domain::report::{ValidationOptions, ValidationReport};
pub use domain::surface::{PlacedSign, SignSurface};
pub use service::formatter::SignFormatter;
pub use service::lifecycle::{SignService, Traversal};

/// Line 0 of every registered sign, and what players write to create one.
pub const VALID_SIGN_IDENTIFIER: &str = "[SignVault]";

/// Line 0 of a rejected or decommissioned sign.
pub const INVALID_SIGN_IDENTIFIER: &str = "*SignVault*";

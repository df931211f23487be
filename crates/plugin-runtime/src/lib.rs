//! # SignVault Plugin Runtime
//!
//! Assembles the SignVault subsystems for a running host.
//!
//! ## Startup Sequence
//!
//! 1. Write the default `config.toml` if the data directory has none
//! 2. Load configuration and apply log verbosity
//! 3. Stop here if `options.signs.enable` is false
//! 4. Open and load `signsstorage.bin`
//! 5. Build formatter, lifecycle service and protection controller
//! 6. Subscribe the controller to the host event bus
//! 7. Optionally validate every registered sign
//!
//! ```text
//!   host bus ──→ ProtectionController (sv-03)
//!                    │
//!                    ├──→ SignService ──→ SignFormatter (sv-02)
//!                    │        │
//!                    │        └────────→ SignStorage (sv-01) ──→ signsstorage.bin
//!                    └──→ VirtualInventory
//! ```

pub mod errors;
pub mod logging;
pub mod plugin;

pub use errors::PluginError;
pub use logging::{init_tracing, reloadable_filter, LogHandle};
pub use plugin::{SignVaultPlugin, CONFIG_FILE_NAME};

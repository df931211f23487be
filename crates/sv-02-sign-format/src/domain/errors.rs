//! Error types for formatting and the sign lifecycle.

use shared_types::WorldError;
use std::path::PathBuf;
use sv_01_sign_storage::StorageError;
use thiserror::Error;

/// Problems reading the configuration file.
///
/// The caller falls back to the built-in defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is not valid TOML: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A creation or removal that did not go through.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The registry could not be persisted; the in-memory change was undone.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The sign text could not be written.
    #[error(transparent)]
    World(#[from] WorldError),
}

//! Tracing setup with a verbosity switch that survives config reloads.

use crate::errors::PluginError;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Controls the level filter of the installed subscriber.
#[derive(Clone)]
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

impl LogHandle {
    /// Switch between `info` and `debug`. `RUST_LOG`, when set, always wins.
    pub fn set_verbose(&self, verbose: bool) -> Result<(), PluginError> {
        self.filter
            .reload(filter_for(verbose))
            .map_err(|e| PluginError::LogReload(e.to_string()))
    }

    /// Most verbose level the current filter lets through.
    #[must_use]
    pub fn max_level(&self) -> Option<LevelFilter> {
        self.filter
            .with_current(|filter| filter.max_level_hint())
            .ok()
            .flatten()
    }
}

impl std::fmt::Debug for LogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogHandle").finish_non_exhaustive()
    }
}

fn filter_for(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// A level filter layer for `Registry` and the handle that controls it.
///
/// The handle stops working once the layer is dropped.
pub fn reloadable_filter(verbose: bool) -> (reload::Layer<EnvFilter, Registry>, LogHandle) {
    let (filter, handle) = reload::Layer::new(filter_for(verbose));
    (filter, LogHandle { filter: handle })
}

/// Install the global fmt subscriber.
///
/// # Errors
///
/// `PluginError::Logging` if a global subscriber is already set.
pub fn init_tracing(verbose: bool) -> Result<LogHandle, PluginError> {
    let (filter, handle) = reloadable_filter(verbose);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .try_init()
        .map_err(|e| PluginError::Logging(e.to_string()))?;

    Ok(handle)
}

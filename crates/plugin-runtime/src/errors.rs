use thiserror::Error;

/// Errors from the plugin lifecycle.
///
/// None of these stop the host; at worst the sign features stay off.
#[derive(Debug, Error)]
pub enum PluginError {
    /// A global tracing subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Logging(String),

    /// The log filter could not be changed.
    #[error("failed to change log verbosity: {0}")]
    LogReload(String),

    /// Sign features are not running (disabled in config, or not enabled yet).
    #[error("sign features are not active")]
    NotActive,
}

//! # Plugin Configuration
//!
//! A lenient, path-addressed view over `config.toml`.
//!
//! Lookups use dotted paths (`options.signs.enable`). A value that is missing
//! or has the wrong type in the user's file falls back to the built-in
//! default document; a value missing from both reads as absent.

use super::errors::ConfigError;
use std::path::Path;
use tracing::{debug, info};

/// The built-in configuration, also written out on first start.
pub const DEFAULT_CONFIG: &str = include_str!("../../resources/config.toml");

pub const KEY_ENABLE: &str = "options.signs.enable";
pub const KEY_VERBOSE_LOGGING: &str = "options.general.verboseLogging";
pub const KEY_VALIDATE_ON_ENABLE: &str = "options.signs.validateOnEnable";
pub const KEY_HEADER: &str = "options.signs.signTexts.header";
pub const KEY_TYPES: &str = "options.signs.signTexts.types";
pub const KEY_PLACE_PERMISSION: &str = "options.signs.permissions.place";
pub const KEY_BREAK_PERMISSION: &str = "options.signs.permissions.break";

/// Parsed configuration with defaults behind it.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    values: toml::Table,
    defaults: toml::Table,
}

impl PluginConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// `ConfigError::Parse` if `text` is not valid TOML.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let values: toml::Table = text.parse().map_err(ConfigError::Parse)?;
        Ok(Self {
            values,
            defaults: default_table(),
        })
    }

    /// Read and parse a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Write `DEFAULT_CONFIG` to `path` unless a file is already there.
    ///
    /// Returns `true` if the file was created.
    pub fn save_default<P: AsRef<Path>>(path: P) -> Result<bool, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(false);
        }
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, DEFAULT_CONFIG).map_err(io_err)?;
        info!(path = %path.display(), "Wrote default configuration");
        Ok(true)
    }

    /// Only the built-in defaults.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            values: toml::Table::new(),
            defaults: default_table(),
        }
    }

    // =========================================================================
    // Raw lookups
    // =========================================================================

    fn lookup<'a>(table: &'a toml::Table, path: &str) -> Option<&'a toml::Value> {
        let mut segments = path.split('.');
        let mut current = table.get(segments.next()?)?;
        for segment in segments {
            current = current.as_table()?.get(segment)?;
        }
        Some(current)
    }

    fn find<T>(&self, path: &str, convert: impl Fn(&toml::Value) -> Option<T>) -> Option<T> {
        Self::lookup(&self.values, path)
            .and_then(&convert)
            .or_else(|| Self::lookup(&self.defaults, path).and_then(&convert))
    }

    #[must_use]
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.find(path, toml::Value::as_bool)
    }

    #[must_use]
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.find(path, |value| value.as_str().map(str::to_string))
    }

    /// A list of strings. Scalars inside the list are stringified; nested
    /// tables and arrays are skipped.
    #[must_use]
    pub fn get_string_list(&self, path: &str) -> Option<Vec<String>> {
        self.find(path, |value| {
            value.as_array().map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        toml::Value::String(s) => Some(s.clone()),
                        toml::Value::Integer(i) => Some(i.to_string()),
                        toml::Value::Float(f) => Some(f.to_string()),
                        toml::Value::Boolean(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect()
            })
        })
    }

    // =========================================================================
    // Typed settings
    // =========================================================================

    #[must_use]
    pub fn signs_enabled(&self) -> bool {
        self.get_bool(KEY_ENABLE).unwrap_or(true)
    }

    #[must_use]
    pub fn verbose_logging(&self) -> bool {
        self.get_bool(KEY_VERBOSE_LOGGING).unwrap_or(false)
    }

    #[must_use]
    pub fn validate_on_enable(&self) -> bool {
        self.get_bool(KEY_VALIDATE_ON_ENABLE).unwrap_or(false)
    }

    /// Permission node needed to create a sign.
    #[must_use]
    pub fn place_permission(&self) -> String {
        self.get_string(KEY_PLACE_PERMISSION)
            .unwrap_or_else(|| "signvault.signs.modify.place".to_string())
    }

    /// Permission node needed to remove a sign.
    #[must_use]
    pub fn break_permission(&self) -> String {
        self.get_string(KEY_BREAK_PERMISSION)
            .unwrap_or_else(|| "signvault.signs.modify.break".to_string())
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

fn default_table() -> toml::Table {
    // Checked by test_default_document_parses.
    DEFAULT_CONFIG.parse().unwrap_or_default()
}

//! # Sign Formatter
//!
//! Derives and applies the configured text of each sign type.

use crate::domain::color::{red, translate_color_codes};
use crate::domain::config::{PluginConfig, KEY_HEADER, KEY_TYPES};
use crate::domain::surface::SignSurface;
use crate::VALID_SIGN_IDENTIFIER;
use crate::INVALID_SIGN_IDENTIFIER;
use parking_lot::{Mutex, RwLock};
use shared_types::{SignLines, WorldError};
use std::collections::HashSet;
use std::sync::Arc;
use sv_01_sign_storage::SignType;
use tracing::{debug, warn};

/// Lines each template must contribute.
const TEMPLATE_LINES: usize = 2;

/// Renders configured sign text and applies it to signs.
///
/// Holds the current configuration; `reload` swaps it atomically.
pub struct SignFormatter {
    config: RwLock<Arc<PluginConfig>>,
    /// Keys already reported as misconfigured since the last reload.
    warned: Mutex<HashSet<String>>,
}

impl SignFormatter {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
            warned: Mutex::new(HashSet::new()),
        }
    }

    /// Install a new configuration and forget earlier warnings.
    pub fn reload(&self, config: PluginConfig) {
        *self.config.write() = Arc::new(config);
        self.warned.lock().clear();
        debug!("Sign formatter configuration reloaded");
    }

    /// The configuration currently in use.
    #[must_use]
    pub fn config(&self) -> Arc<PluginConfig> {
        self.config.read().clone()
    }

    /// The four lines a sign of `sign_type` must show.
    ///
    /// Never fails: a template that is missing or not exactly two lines long
    /// is replaced by a placeholder, with one warning per key per reload.
    #[must_use]
    pub fn configured_lines(&self, sign_type: SignType) -> SignLines {
        let config = self.config();

        let header = self.template(&config, KEY_HEADER, || {
            [VALID_SIGN_IDENTIFIER.to_string(), String::new()]
        });
        let type_key = format!("{KEY_TYPES}.{}", sign_type.name());
        let body = self.template(&config, &type_key, || {
            [sign_type.name().to_string(), String::new()]
        });

        let [h0, h1] = header;
        let [b0, b1] = body;
        SignLines::from([h0, h1, b0, b1].map(|line| translate_color_codes(&line)))
    }

    /// Keys that would currently fall back to a placeholder.
    #[must_use]
    pub fn misconfigured_keys(&self) -> Vec<String> {
        let config = self.config();
        std::iter::once(KEY_HEADER.to_string())
            .chain(
                SignType::ALL
                    .iter()
                    .map(|sign_type| format!("{KEY_TYPES}.{}", sign_type.name())),
            )
            .filter(|key| {
                config
                    .get_string_list(key)
                    .map_or(true, |lines| lines.len() != TEMPLATE_LINES)
            })
            .collect()
    }

    fn template(
        &self,
        config: &PluginConfig,
        key: &str,
        placeholder: impl FnOnce() -> [String; TEMPLATE_LINES],
    ) -> [String; TEMPLATE_LINES] {
        let lines = config.get_string_list(key);
        if let Some(lines) = &lines {
            if let Ok(pair) = <[String; TEMPLATE_LINES]>::try_from(lines.clone()) {
                return pair;
            }
        }

        if self.warned.lock().insert(key.to_string()) {
            warn!(
                key,
                found = lines.as_ref().map_or(0, Vec::len),
                expected = TEMPLATE_LINES,
                "Sign text misconfigured, using placeholder lines"
            );
        }
        placeholder()
    }

    /// Overwrite every line of `sign` with the configured text.
    pub fn format(&self, sign: &mut dyn SignSurface, sign_type: SignType) -> Result<(), WorldError> {
        sign.set_lines(self.configured_lines(sign_type))
    }

    /// Whether every line of `sign` matches the configured text exactly.
    #[must_use]
    pub fn is_correctly_formatted(&self, sign: &dyn SignSurface, sign_type: SignType) -> bool {
        sign.lines() == self.configured_lines(sign_type)
    }

    /// Mark `sign` as rejected: invalid identifier on line 0, `message` in red
    /// on line 3. Lines 1 and 2 are kept.
    pub fn invalidate(sign: &mut dyn SignSurface, message: &str) -> Result<(), WorldError> {
        let mut lines = sign.lines();
        lines.set_line(0, INVALID_SIGN_IDENTIFIER);
        lines.set_line(3, format!("{}{message}", red()));
        sign.set_lines(lines)
    }
}

impl Default for SignFormatter {
    fn default() -> Self {
        Self::new(PluginConfig::defaults())
    }
}

impl std::fmt::Debug for SignFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignFormatter")
            .field("warned", &self.warned.lock().len())
            .finish_non_exhaustive()
    }
}

//! # SignVault Plugin
//!
//! Lifecycle of the sign features inside one host process.

use crate::errors::PluginError;
use crate::logging::LogHandle;
use shared_bus::EventSubscriber;
use shared_types::{PlayerHandle, WorldDirectory};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use sv_01_sign_storage::{LoadStatus, SignStorage, STORAGE_FILE_NAME};
use sv_02_sign_format::{
    PluginConfig, SignFormatter, SignService, ValidationOptions, ValidationReport,
};
use sv_03_sign_protection::{
    ListenerRegistration, LoggingVirtualInventory, ProtectionController, VirtualInventory,
};
use tracing::{debug, info, warn};


/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Running sign features.
struct ActiveSigns {
    storage: Arc<SignStorage>,
    formatter: Arc<SignFormatter>,
    controller: Arc<ProtectionController>,
    registration: ListenerRegistration,
}

/// The plugin as seen by the host.
pub struct SignVaultPlugin {
    data_dir: PathBuf,
    worlds: Arc<dyn WorldDirectory>,
    bus: Arc<dyn EventSubscriber>,
    inventory: Arc<dyn VirtualInventory>,
    logging: Option<LogHandle>,
    config: PluginConfig,
    active: Option<ActiveSigns>,
}

impl SignVaultPlugin {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        worlds: Arc<dyn WorldDirectory>,
        bus: Arc<dyn EventSubscriber>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            worlds,
            bus,
            inventory: Arc::new(LoggingVirtualInventory::new()),
            logging: None,
            config: PluginConfig::defaults(),
            active: None,
        }
    }

    /// Use `inventory` for deposit and withdraw signs.
    #[must_use]
    pub fn with_inventory(mut self, inventory: Arc<dyn VirtualInventory>) -> Self {
        self.inventory = inventory;
        self
    }

    /// Let `options.general.verboseLogging` drive `logging`.
    #[must_use]
    pub fn with_logging(mut self, logging: LogHandle) -> Self {
        self.logging = Some(logging);
        self
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE_NAME)
    }

    #[must_use]
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The running controller, if sign features are active.
    #[must_use]
    pub fn controller(&self) -> Option<&Arc<ProtectionController>> {
        self.active.as_ref().map(|active| &active.controller)
    }

    /// The live registry, if sign features are active.
    #[must_use]
    pub fn storage(&self) -> Option<&Arc<SignStorage>> {
        self.active.as_ref().map(|active| &active.storage)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start the sign features. Calling it while active is a no-op.
    pub fn enable(&mut self) {
        if self.is_active() {
            debug!("Plugin already enabled");
            return;
        }
        self.reload_config();

        if !self.config.signs_enabled() {
            info!("Signs are disabled in the configuration");
            return;
        }

        let storage = Arc::new(SignStorage::open(self.storage_path(), Arc::clone(&self.worlds)));
        let outcome = storage.load();
        if outcome.status == LoadStatus::Degraded {
            warn!("Sign registry was unreadable; starting empty");
        }

        let formatter = Arc::new(SignFormatter::new(self.config.clone()));
        let service = SignService::new(Arc::clone(&storage), Arc::clone(&formatter));
        let controller = Arc::new(ProtectionController::new(
            service,
            Arc::clone(&self.inventory),
        ));
        let registration = ListenerRegistration::register(&controller, self.bus.as_ref());

        self.active = Some(ActiveSigns {
            storage,
            formatter,
            controller,
            registration,
        });
        info!(
            signs = outcome.loaded,
            dropped = outcome.dropped,
            "SignVault enabled"
        );

        if self.config.validate_on_enable() {
            // Active was set just above.
            let _ = self.validate_signs(
                ValidationOptions {
                    check_formatting: true,
                    log_results: true,
                    ..ValidationOptions::default()
                },
                None,
            );
        }
    }

    /// Re-read `config.toml`, writing the default file first if missing.
    ///
    /// A broken file leaves the built-in defaults in effect.
    pub fn reload_config(&mut self) {
        let path = self.config_path();
        if let Err(e) = PluginConfig::save_default(&path) {
            warn!(error = %e, "Could not write default configuration");
        }

        self.config = match PluginConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Loading configuration failed; using defaults");
                PluginConfig::defaults()
            }
        };

        if let Some(logging) = &self.logging {
            if let Err(e) = logging.set_verbose(self.config.verbose_logging()) {
                warn!(error = %e, "Could not apply log verbosity");
            }
        }

        if let Some(active) = &self.active {
            active.formatter.reload(self.config.clone());
        }
        debug!("Configuration reloaded");
    }

    /// Run the bulk validation protocol over the live registry.
    ///
    /// # Errors
    ///
    /// `PluginError::NotActive` if sign features are not running.
    pub fn validate_signs(
        &self,
        options: ValidationOptions,
        log_target: Option<&PlayerHandle>,
    ) -> Result<ValidationReport, PluginError> {
        let active = self.active.as_ref().ok_or(PluginError::NotActive)?;
        Ok(active.controller.service().validate_all(options, log_target))
    }

    /// Stop listening and flush the registry to disk.
    pub fn disable(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        active.registration.unregister(self.bus.as_ref());
        if active.storage.save().is_ok() {
            info!(signs = active.storage.len(), "SignVault disabled");
        }
    }
}

impl Drop for SignVaultPlugin {
    fn drop(&mut self) {
        self.disable();
    }
}

impl std::fmt::Debug for SignVaultPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignVaultPlugin")
            .field("data_dir", &self.data_dir)
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

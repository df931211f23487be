//! # Sign Lifecycle
//!
//! Creation, removal and bulk validation of registered signs. Every operation
//! keeps the registry and the physical sign consistent: storage is updated and
//! persisted first, text is written only once that succeeded.

use crate::domain::errors::LifecycleError;
use crate::domain::report::{ValidationOptions, ValidationReport};
use crate::domain::surface::{PlacedSign, SignSurface};
use crate::service::formatter::SignFormatter;
use shared_types::{LiveLocation, PlayerHandle};
use std::sync::Arc;
use sv_01_sign_storage::{SignStorage, SignType};
use tracing::{debug, info, warn};

/// Outcome of walking the registry with `SignService::for_each_sign`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Entries visited, valid or not.
    pub visited: usize,
    /// Entries whose block was not a sign.
    pub invalid: usize,
    /// Invalid entries deleted from the registry.
    pub removed: usize,
}

/// Ties the registry to the formatter.
#[derive(Debug, Clone)]
pub struct SignService {
    storage: Arc<SignStorage>,
    formatter: Arc<SignFormatter>,
}

impl SignService {
    pub fn new(storage: Arc<SignStorage>, formatter: Arc<SignFormatter>) -> Self {
        Self { storage, formatter }
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<SignStorage> {
        &self.storage
    }

    #[must_use]
    pub fn formatter(&self) -> &Arc<SignFormatter> {
        &self.formatter
    }

    /// Whether `location` holds a sign that is registered.
    #[must_use]
    pub fn is_registered_sign(&self, location: &LiveLocation) -> bool {
        location.is_sign() && self.storage.contains(location)
    }

    /// Register `sign` as `sign_type`, persist, then write its text.
    ///
    /// # Errors
    ///
    /// If the registry cannot be saved the entry is rolled back and the sign
    /// text is left untouched.
    pub fn handle_creation(
        &self,
        sign: &mut dyn SignSurface,
        sign_type: SignType,
    ) -> Result<(), LifecycleError> {
        let location = sign.location().clone();
        let previous = self.storage.put(location.clone(), sign_type);

        if let Err(e) = self.storage.save() {
            match previous {
                Some(old) => self.storage.put(location, old),
                None => self.storage.remove(&location),
            };
            return Err(e.into());
        }

        self.formatter.format(sign, sign_type)?;
        debug!(%location, %sign_type, "Sign registered");
        Ok(())
    }

    /// Unregister `sign`, persist, then mark it invalid.
    ///
    /// Returns the type it was registered as, if any.
    ///
    /// # Errors
    ///
    /// If the registry cannot be saved the entry is restored and the sign is
    /// left as it was.
    pub fn handle_removal(
        &self,
        sign: &mut dyn SignSurface,
    ) -> Result<Option<SignType>, LifecycleError> {
        let location = sign.location().clone();
        let removed = self.storage.remove(&location);

        if let Err(e) = self.storage.save() {
            if let Some(sign_type) = removed {
                self.storage.put(location, sign_type);
            }
            return Err(e.into());
        }

        SignFormatter::invalidate(sign, "")?;
        debug!(%location, sign_type = ?removed, "Sign unregistered");
        Ok(removed)
    }

    /// Visit every registered sign that still exists.
    ///
    /// Works on a snapshot of the registry, so entries removed during the walk
    /// are neither skipped nor visited twice. Entries whose block is no longer
    /// a sign are counted, and deleted if `remove_invalid`; the registry is
    /// saved once at the end if anything was deleted.
    pub fn for_each_sign<F>(&self, remove_invalid: bool, mut visit: F) -> Traversal
    where
        F: FnMut(&mut PlacedSign, SignType),
    {
        let mut traversal = Traversal::default();

        for (location, sign_type) in self.storage.entries() {
            traversal.visited += 1;
            if location.is_sign() {
                visit(&mut PlacedSign::checked(location), sign_type);
                continue;
            }

            traversal.invalid += 1;
            debug!(%location, %sign_type, "Registered sign is gone");
            if remove_invalid && self.storage.remove(&location).is_some() {
                traversal.removed += 1;
            }
        }

        if traversal.removed > 0 {
            // Failure is logged by save; the entries stay removed in memory.
            let _ = self.storage.save();
        }
        traversal
    }

    /// Check (and optionally repair) every registered sign.
    ///
    /// `log_target` only receives the summary when `options.log_results` is
    /// set; otherwise the summary goes to the debug log alone.
    pub fn validate_all(
        &self,
        options: ValidationOptions,
        log_target: Option<&PlayerHandle>,
    ) -> ValidationReport {
        let total = self.storage.len();
        let mut misformatted = 0usize;

        let traversal = self.for_each_sign(options.remove_invalid, |sign, sign_type| {
            if options.check_formatting && !self.formatter.is_correctly_formatted(&*sign, sign_type) {
                misformatted += 1;
            }
            if options.force_correct_format {
                if let Err(e) = self.formatter.format(sign, sign_type) {
                    warn!(location = %sign.location(), error = %e, "Could not reformat sign");
                }
            }
        });

        let report = ValidationReport {
            total,
            invalid: traversal.invalid,
            misformatted: options.check_formatting.then_some(misformatted),
        };

        if options.log_results {
            info!(
                total = report.total,
                invalid = report.invalid,
                removed = traversal.removed,
                misformatted = ?report.misformatted,
                "All registry entries validated"
            );
            if let Some(player) = log_target {
                player.send_message(&format!("All registry entries validated. {report}"));
            }
        } else {
            debug!(%report, "All registry entries validated");
        }
        report
    }
}

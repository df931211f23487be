//! Bulk validation inputs and results.

use std::fmt;

/// What `SignService::validate_all` should do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Delete entries whose block is no longer a sign.
    pub remove_invalid: bool,
    /// Count signs whose text differs from the configured lines.
    pub check_formatting: bool,
    /// Rewrite signs with the configured lines.
    pub force_correct_format: bool,
    /// Report at info level (and to the target player) instead of debug.
    pub log_results: bool,
}

/// Counts gathered by one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Entries in the registry when the pass started.
    pub total: usize,
    /// Entries whose block was not a sign.
    pub invalid: usize,
    /// Signs with the wrong text; `None` when formatting was not checked.
    pub misformatted: Option<usize>,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries total, {} invalid (not sign), ",
            self.total, self.invalid
        )?;
        match self.misformatted {
            Some(count) => write!(f, "{count} wrong formatting (different text on lines)"),
            None => write!(f, "formatting not checked"),
        }
    }
}

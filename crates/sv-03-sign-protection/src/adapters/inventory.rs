//! Reference inventory adapter.

use crate::ports::outbound::VirtualInventory;
use shared_types::PlayerHandle;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Inventory that only records requests.
///
/// Stands in until an economy backend is attached.
#[derive(Debug, Default)]
pub struct LoggingVirtualInventory {
    deposits: AtomicU64,
    withdrawals: AtomicU64,
}

impl LoggingVirtualInventory {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn deposits(&self) -> u64 {
        self.deposits.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn withdrawals(&self) -> u64 {
        self.withdrawals.load(Ordering::Relaxed)
    }
}

impl VirtualInventory for LoggingVirtualInventory {
    fn deposit(&self, player: &PlayerHandle) {
        self.deposits.fetch_add(1, Ordering::Relaxed);
        info!(player = player.name(), "Deposit requested");
    }

    fn withdraw(&self, player: &PlayerHandle) {
        self.withdrawals.fetch_add(1, Ordering::Relaxed);
        info!(player = player.name(), "Withdrawal requested");
    }
}

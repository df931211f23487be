//! # Outbound Ports (Driven Ports)
//!
//! What a registered sign does when a player uses it.

use shared_types::PlayerHandle;

/// The player's virtual inventory, opened from deposit and withdraw signs.
pub trait VirtualInventory: Send + Sync {
    fn deposit(&self, player: &PlayerHandle);

    fn withdraw(&self, player: &PlayerHandle);
}

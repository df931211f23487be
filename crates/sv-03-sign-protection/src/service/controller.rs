//! # Protection & Interaction Controller
//!
//! One predicate, `would_destroy`, guards every pathway that can remove or
//! move a block. Each pathway only decides which blocks are at risk.
//!
//! | Event | Candidates |
//! |-------|------------|
//! | `BlockBreak` | signs attached to the broken block |
//! | `BlockBurn`, `BlockFade`, `LeavesDecay`, `BlockPhysics`, `EntityChangeBlock` | the block |
//! | `PistonExtend` | the pushed blocks |
//! | `PistonRetract` | the arm head, plus the pulled block if sticky |
//! | `EntityExplode` | every block the explosion removes |
//!
//! A direct break of a registered sign that nothing else protects falls
//! through to the removal protocol.

use crate::domain::attachment::find_attached_signs;
use crate::ports::outbound::VirtualInventory;
use shared_bus::{
    BlockMutationEvent, Cancellable, InteractAction, MutationKind, PlayerInteractEvent,
    SignChangeEvent,
};
use shared_types::{Actor, LiveLocation, PlayerHandle};
use std::collections::HashSet;
use std::sync::Arc;
use sv_01_sign_storage::SignType;
use sv_02_sign_format::domain::color::red;
use sv_02_sign_format::{PlacedSign, SignFormatter, SignService, VALID_SIGN_IDENTIFIER};
use tracing::{debug, info, warn};

pub const CANCELLED_MESSAGE: &str =
    "Event cancelled - remove the sign first if you intended to do that.";

pub struct ProtectionController {
    service: SignService,
    inventory: Arc<dyn VirtualInventory>,
}

impl ProtectionController {
    pub fn new(service: SignService, inventory: Arc<dyn VirtualInventory>) -> Self {
        Self { service, inventory }
    }

    #[must_use]
    pub fn service(&self) -> &SignService {
        &self.service
    }

    // =========================================================================
    // Protection
    // =========================================================================

    /// Whether removing `candidates` would take a registered sign with it.
    ///
    /// The candidates and every sign attached to them are checked. When the
    /// answer is yes and `actor` is a player, they are told why.
    pub fn would_destroy(
        &self,
        candidates: &[LiveLocation],
        actor: Option<&Actor>,
        source: &str,
    ) -> bool {
        let mut at_risk: HashSet<LiveLocation> = candidates.iter().cloned().collect();
        for candidate in candidates {
            at_risk.extend(find_attached_signs(candidate));
        }

        let Some(protected) = at_risk
            .iter()
            .find(|location| self.service.is_registered_sign(location))
        else {
            return false;
        };

        if let Some(player) = actor.and_then(Actor::as_player) {
            player.send_message(CANCELLED_MESSAGE);
        }
        debug!(
            actor = %actor.map(ToString::to_string).unwrap_or_default(),
            source,
            sign = %protected,
            "Would destroy a registered sign; action prevented"
        );
        true
    }

    /// Veto any block mutation that endangers a registered sign.
    pub fn on_block_mutation(&self, event: &mut BlockMutationEvent) {
        if event.is_cancelled() {
            return;
        }

        let candidates = Self::candidates(event);
        if self.would_destroy(&candidates, event.actor.as_ref(), event.kind.label()) {
            event.set_cancelled(true);
            return;
        }

        if event.kind == MutationKind::BlockBreak && self.service.is_registered_sign(&event.block) {
            self.on_registered_sign_break(event);
        }
    }

    fn candidates(event: &BlockMutationEvent) -> Vec<LiveLocation> {
        match event.kind {
            MutationKind::BlockBreak => find_attached_signs(&event.block).into_iter().collect(),
            MutationKind::BlockBurn
            | MutationKind::BlockFade
            | MutationKind::LeavesDecay
            | MutationKind::BlockPhysics
            | MutationKind::EntityChangeBlock => vec![event.block.clone()],
            MutationKind::PistonExtend | MutationKind::EntityExplode => event.affected.clone(),
            MutationKind::PistonRetract { direction, sticky } => {
                let mut blocks = vec![event.block.relative(direction)];
                if sticky {
                    blocks.push(event.block.relative_n(direction, 2));
                }
                blocks
            }
        }
    }

    // =========================================================================
    // Removal protocol
    // =========================================================================

    fn on_registered_sign_break(&self, event: &mut BlockMutationEvent) {
        let Some(player) = event.player().cloned() else {
            event.set_cancelled(true);
            warn!(location = %event.block, "Sign break without a player; cancelled");
            return;
        };

        let permission = self.service.formatter().config().break_permission();
        if !player.has_permission(&permission) {
            event.set_cancelled(true);
            player.send_message(&format!("Sign removal failed:{} insufficient permission", red()));
            info!(
                player = player.name(),
                location = %event.block,
                "Player tried to remove a sign without permission"
            );
            return;
        }

        let mut sign = match PlacedSign::at(event.block.clone()) {
            Ok(sign) => sign,
            Err(e) => {
                warn!(error = %e, "Registered sign vanished during break");
                return;
            }
        };

        match self.service.handle_removal(&mut sign) {
            Ok(_) => info!(
                player = player.name(),
                location = %event.block,
                "Player removed a sign"
            ),
            Err(e) => {
                event.set_cancelled(true);
                player.send_message(&format!(
                    "Sign removal failed:{} the sign registry could not be saved",
                    red()
                ));
                warn!(location = %event.block, error = %e, "Sign removal rolled back");
            }
        }
    }

    // =========================================================================
    // Creation protocol
    // =========================================================================

    /// Turn freshly written `[SignVault]` text into a registered sign, or
    /// mark it invalid.
    pub fn on_sign_change(&self, event: &mut SignChangeEvent) {
        if event.is_cancelled() {
            return;
        }
        debug!(
            line = event.line(0).trim(),
            identifier = VALID_SIGN_IDENTIFIER,
            "Sign text changed"
        );
        if !event.line(0).trim().eq_ignore_ascii_case(VALID_SIGN_IDENTIFIER) {
            return;
        }

        let player = event.player.clone();
        let permission = self.service.formatter().config().place_permission();
        if !player.has_permission(&permission) {
            self.reject(event, &player, "no permission", "insufficient permission");
            info!(
                player = player.name(),
                location = %event.location,
                "Player tried to create a sign without permission"
            );
            return;
        }

        let Some(sign_type) = SignType::from_name(event.line(1)) else {
            self.reject(event, &player, "wrong type", "wrong sign type");
            return;
        };

        match self.service.handle_creation(event, sign_type) {
            Ok(()) => info!(
                player = player.name(),
                %sign_type,
                location = %event.location,
                "Player created a sign"
            ),
            Err(e) => {
                warn!(location = %event.location, error = %e, "Sign creation rolled back");
                self.reject(
                    event,
                    &player,
                    "storage error",
                    "the sign registry could not be saved",
                );
            }
        }
    }

    fn reject(
        &self,
        event: &mut SignChangeEvent,
        player: &PlayerHandle,
        sign_message: &str,
        player_message: &str,
    ) {
        // Pending text cannot fail to update.
        let _ = SignFormatter::invalidate(event, sign_message);
        player.send_message(&format!("Sign creation failed:{} {player_message}", red()));
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Open the virtual inventory behind a right-clicked registered sign.
    ///
    /// Observes only; the event is never changed.
    pub fn on_player_interact(&self, event: &PlayerInteractEvent) {
        if event.action != InteractAction::RightClickBlock {
            return;
        }
        let Some(clicked) = &event.clicked else {
            return;
        };
        if !clicked.is_sign() {
            return;
        }

        match self.service.storage().get(clicked) {
            Some(SignType::Deposit) => self.inventory.deposit(&event.player),
            Some(SignType::Withdraw) => self.inventory.withdraw(&event.player),
            None => {}
        }
    }
}

impl std::fmt::Debug for ProtectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtectionController")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

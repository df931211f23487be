//! Subscribes a `ProtectionController` to the world event bus.

use crate::service::controller::ProtectionController;
use shared_bus::{
    EventFilter, EventPriority, EventSubscriber, EventTopic, HandlerOptions, SubscriptionId,
    WorldEvent,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Handlers installed by `ListenerRegistration::register`.
#[derive(Debug)]
pub struct ListenerRegistration {
    ids: Vec<SubscriptionId>,
}

impl ListenerRegistration {
    /// Attach `controller` to `bus`.
    ///
    /// Mutations and sign text run at `High` priority and skip events another
    /// listener already cancelled. Interaction runs at `Monitor`, after every
    /// other listener had its say.
    pub fn register(controller: &Arc<ProtectionController>, bus: &dyn EventSubscriber) -> Self {
        let guard = |topic| {
            HandlerOptions::new(EventFilter::topics(vec![topic]))
                .priority(EventPriority::High)
                .ignore_cancelled(true)
        };

        let mutation = {
            let controller = Arc::clone(controller);
            bus.subscribe(
                guard(EventTopic::BlockMutation),
                Arc::new(move |event: &mut WorldEvent| {
                    if let WorldEvent::BlockMutation(e) = event {
                        controller.on_block_mutation(e);
                    }
                }),
            )
        };

        let sign_change = {
            let controller = Arc::clone(controller);
            bus.subscribe(
                guard(EventTopic::SignChange),
                Arc::new(move |event: &mut WorldEvent| {
                    if let WorldEvent::SignChange(e) = event {
                        controller.on_sign_change(e);
                    }
                }),
            )
        };

        let interact = {
            let controller = Arc::clone(controller);
            bus.subscribe(
                HandlerOptions::new(EventFilter::topics(vec![EventTopic::PlayerInteract]))
                    .priority(EventPriority::Monitor)
                    .ignore_cancelled(true),
                Arc::new(move |event: &mut WorldEvent| {
                    if let WorldEvent::PlayerInteract(e) = event {
                        controller.on_player_interact(e);
                    }
                }),
            )
        };

        debug!("Sign listeners registered");
        Self {
            ids: vec![mutation, sign_change, interact],
        }
    }

    /// Remove every handler this registration installed.
    pub fn unregister(self, bus: &dyn EventSubscriber) {
        for id in self.ids {
            if let Err(e) = bus.unsubscribe(id) {
                warn!(error = %e, "Listener was already removed");
            }
        }
        debug!("Sign listeners unregistered");
    }

    #[must_use]
    pub fn subscription_ids(&self) -> &[SubscriptionId] {
        &self.ids
    }
}

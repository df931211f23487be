//! # Event Publisher
//!
//! Defines the publishing side of the event bus.

use crate::events::{Cancellable, WorldEvent};
use crate::subscriber::{
    EventHandler, EventSubscriber, HandlerOptions, Subscription, SubscriptionError,
    SubscriptionId,
};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Trait for publishing events to the bus.
pub trait EventPublisher: Send + Sync {
    /// Run every matching handler on `event`, in priority order.
    ///
    /// # Returns
    ///
    /// `true` if the event ended up cancelled.
    fn publish(&self, event: &mut WorldEvent) -> bool;

    /// Get the total number of events published.
    fn events_published(&self) -> u64;
}

/// In-process, synchronous event bus.
///
/// Handlers run on the caller's thread before `publish` returns, so a
/// handler can veto the pending change by cancelling the event. The handler
/// table is snapshotted per dispatch; handlers may subscribe or unsubscribe
/// from inside a callback.
pub struct InMemoryEventBus {
    /// Registered handlers, kept sorted by priority then registration order.
    subscriptions: RwLock<Vec<Subscription>>,

    /// Source of subscription ids.
    next_id: AtomicU64,

    /// Total events published.
    events_published: AtomicU64,
}

impl InMemoryEventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            events_published: AtomicU64::new(0),
        }
    }

    /// Convenience wrapper around `EventSubscriber::subscribe`.
    pub fn on<F>(&self, options: HandlerOptions, handler: F) -> SubscriptionId
    where
        F: Fn(&mut WorldEvent) + Send + Sync + 'static,
    {
        EventSubscriber::subscribe(self, options, std::sync::Arc::new(handler))
    }

    /// Get the number of registered handlers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, options: HandlerOptions, handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let priority = options.priority;

        let mut subs = self.subscriptions.write();
        // Insert after every handler with the same or lower priority.
        let index = subs.partition_point(|s| s.options.priority <= priority);
        subs.insert(
            index,
            Subscription {
                id,
                options,
                handler,
            },
        );

        debug!(subscription = %id, ?priority, "New subscription created");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> Result<(), SubscriptionError> {
        let mut subs = self.subscriptions.write();
        let before = subs.len();
        subs.retain(|s| s.id != id);
        if subs.len() == before {
            return Err(SubscriptionError::UnknownSubscription(id));
        }
        debug!(subscription = %id, "Subscription removed");
        Ok(())
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish(&self, event: &mut WorldEvent) -> bool {
        self.events_published.fetch_add(1, Ordering::Relaxed);

        let snapshot: Vec<Subscription> = self.subscriptions.read().clone();
        let mut delivered = 0usize;
        for sub in &snapshot {
            if sub.accepts(event) {
                (sub.handler)(event);
                delivered += 1;
            }
        }

        let cancelled = event.is_cancelled();
        debug!(
            event = event.name(),
            handlers = delivered,
            cancelled,
            "Event published"
        );
        cancelled
    }

    fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }
}

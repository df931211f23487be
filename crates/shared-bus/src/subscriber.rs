//! # Event Subscriber
//!
//! Defines the subscription side of the event bus.

use crate::events::{EventFilter, WorldEvent};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors from subscription operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// No handler is registered under this id.
    #[error("Unknown subscription: {0}")]
    UnknownSubscription(SubscriptionId),
}

/// Order in which handlers see an event.
///
/// Lower priorities run first, so `Monitor` handlers observe the final
/// outcome. `Monitor` handlers must not change the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EventPriority {
    Lowest,
    Low,
    #[default]
    Normal,
    High,
    Highest,
    Monitor,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a handler wants to be called.
#[derive(Debug, Clone, Default)]
pub struct HandlerOptions {
    pub filter: EventFilter,
    pub priority: EventPriority,
    /// Skip events a lower-priority handler already cancelled.
    pub ignore_cancelled: bool,
}

impl HandlerOptions {
    #[must_use]
    pub fn new(filter: EventFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn priority(mut self, priority: EventPriority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn ignore_cancelled(mut self, ignore: bool) -> Self {
        self.ignore_cancelled = ignore;
        self
    }
}

/// A synchronous event handler.
pub type EventHandler = Arc<dyn Fn(&mut WorldEvent) + Send + Sync>;

/// Trait for subscribing to events from the bus.
pub trait EventSubscriber: Send + Sync {
    /// Register `handler` for events matching `options.filter`.
    fn subscribe(&self, options: HandlerOptions, handler: EventHandler) -> SubscriptionId;

    /// Remove a previously registered handler.
    fn unsubscribe(&self, id: SubscriptionId) -> Result<(), SubscriptionError>;
}

/// A registered handler as stored by the bus.
#[derive(Clone)]
pub(crate) struct Subscription {
    pub(crate) id: SubscriptionId,
    pub(crate) options: HandlerOptions,
    pub(crate) handler: EventHandler,
}

impl Subscription {
    /// Whether this handler should see `event` in its current state.
    pub(crate) fn accepts(&self, event: &WorldEvent) -> bool {
        use crate::events::Cancellable;

        if self.options.ignore_cancelled && event.is_cancelled() {
            return false;
        }
        self.options.filter.matches(event)
    }
}

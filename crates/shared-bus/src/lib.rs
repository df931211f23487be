//! # Shared Bus - World Event Dispatch
//!
//! Delivers host world events to SignVault listeners.
//!
//! ```text
//! ┌──────────────┐   publish(&mut event)   ┌──────────────┐
//! │  Host world  │ ──────────────────────▶ │  Event Bus   │
//! │              │ ◀────── cancelled? ──── │              │
//! └──────────────┘                         └──────┬───────┘
//!                                                 │ priority order
//!                                                 ▼
//!                                     Lowest .. Highest, Monitor
//! ```
//!
//! Dispatch is synchronous: every handler runs before `publish` returns, so
//! a handler vetoes the pending world change by cancelling the event. The
//! host applies the change only when `publish` returns `false`.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{
    BlockMutationEvent, Cancellable, EventFilter, EventTopic, InteractAction, MutationKind,
    PlayerInteractEvent, SignChangeEvent, WorldEvent,
};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{
    EventHandler, EventPriority, EventSubscriber, HandlerOptions, SubscriptionError,
    SubscriptionId,
};

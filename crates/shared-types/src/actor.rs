//! # Actors
//!
//! Whoever (or whatever) originated a world event.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// A connected player, as exposed by the host.
pub trait Player: Send + Sync {
    /// Display name.
    fn name(&self) -> &str;

    /// Opaque capability check.
    fn has_permission(&self, node: &str) -> bool;

    /// Deliver a chat line to this player.
    fn send_message(&self, message: &str);
}

/// Shared handle to a player.
pub type PlayerHandle = Arc<dyn Player>;

/// The originator of a world mutation.
#[derive(Clone)]
pub enum Actor {
    /// A player.
    Player(PlayerHandle),
    /// A non-player entity such as `"enderman"` or `"creeper"`.
    Entity(String),
}

impl Actor {
    /// The player behind this actor, if any.
    #[must_use]
    pub fn as_player(&self) -> Option<&PlayerHandle> {
        match self {
            Actor::Player(player) => Some(player),
            Actor::Entity(_) => None,
        }
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Player(player) => f.debug_tuple("Player").field(&player.name()).finish(),
            Actor::Entity(kind) => f.debug_tuple("Entity").field(kind).finish(),
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Player(player) => write!(f, "PLAYER {{{}}}", player.name()),
            Actor::Entity(kind) => write!(f, "{}", kind.to_uppercase()),
        }
    }
}

/// Player double that records every message it receives.
pub struct TestPlayer {
    name: String,
    permissions: HashSet<String>,
    inbox: Mutex<Vec<String>>,
}

impl TestPlayer {
    /// A player without any permissions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: HashSet::new(),
            inbox: Mutex::new(Vec::new()),
        }
    }

    /// Grant a permission node.
    #[must_use]
    pub fn with_permission(mut self, node: impl Into<String>) -> Self {
        self.permissions.insert(node.into());
        self
    }

    /// Everything sent to this player so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.inbox.lock().clone()
    }
}

impl Player for TestPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.contains(node)
    }

    fn send_message(&self, message: &str) {
        self.inbox.lock().push(message.to_string());
    }
}

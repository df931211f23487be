//! # World Events
//!
//! Every event the host world can raise towards SignVault.
//!
//! Each event carries:
//! - a cancellation flag (the handle a listener uses to veto the change),
//! - an optional originating actor,
//! - the block(s) involved,
//! - a source label used in log lines.

use shared_types::{Actor, BlockFace, LiveLocation, PlayerHandle, SignLines};
use std::fmt;

/// Anything a listener can veto.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;
    fn set_cancelled(&mut self, cancelled: bool);
}

// =============================================================================
// BLOCK MUTATIONS
// =============================================================================

/// The pathway through which a block is about to be destroyed or moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    /// A player breaks the block directly.
    BlockBreak,
    /// Fire consumes the block.
    BlockBurn,
    /// The block fades away (ice melting, snow, coral dying...).
    BlockFade,
    /// Leaves decay naturally.
    LeavesDecay,
    /// A piston pushes `affected` one step.
    PistonExtend,
    /// A piston retracts its arm towards `direction`'s opposite.
    ///
    /// `block` is the piston base; the arm head sits at
    /// `block.relative(direction)`. A sticky piston also pulls the block at
    /// `block.relative_n(direction, 2)`.
    PistonRetract { direction: BlockFace, sticky: bool },
    /// A physics update may pop the block off its support.
    BlockPhysics,
    /// An entity (enderman, falling sand...) changes the block.
    EntityChangeBlock,
    /// An explosion removes every block in `affected`.
    EntityExplode,
}

impl MutationKind {
    /// Source label for log lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MutationKind::BlockBreak => "BlockBreakEvent",
            MutationKind::BlockBurn => "BlockBurnEvent",
            MutationKind::BlockFade => "BlockFadeEvent",
            MutationKind::LeavesDecay => "LeavesDecayEvent",
            MutationKind::PistonExtend => "BlockPistonExtendEvent",
            MutationKind::PistonRetract { .. } => "BlockPistonRetractEvent",
            MutationKind::BlockPhysics => "BlockPhysicsEvent",
            MutationKind::EntityChangeBlock => "EntityChangeBlockEvent",
            MutationKind::EntityExplode => "EntityExplodeEvent",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pending change that may destroy or relocate blocks.
#[derive(Debug, Clone)]
pub struct BlockMutationEvent {
    /// Which pathway raised this event.
    pub kind: MutationKind,
    /// Who caused it, if anyone.
    pub actor: Option<Actor>,
    /// The block the event is about (piston base for piston events).
    pub block: LiveLocation,
    /// Extra blocks moved or removed (piston extension, explosions).
    pub affected: Vec<LiveLocation>,
    cancelled: bool,
}

impl BlockMutationEvent {
    pub fn new(kind: MutationKind, block: LiveLocation) -> Self {
        Self {
            kind,
            actor: None,
            block,
            affected: Vec::new(),
            cancelled: false,
        }
    }

    #[must_use]
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub fn with_affected(mut self, affected: Vec<LiveLocation>) -> Self {
        self.affected = affected;
        self
    }

    /// A player breaking `block`.
    pub fn block_break(player: PlayerHandle, block: LiveLocation) -> Self {
        Self::new(MutationKind::BlockBreak, block).with_actor(Actor::Player(player))
    }

    /// A piston at `base` pushing `pushed`.
    pub fn piston_extend(base: LiveLocation, pushed: Vec<LiveLocation>) -> Self {
        Self::new(MutationKind::PistonExtend, base).with_affected(pushed)
    }

    /// A piston at `base` retracting its arm, which points towards `direction`.
    pub fn piston_retract(base: LiveLocation, direction: BlockFace, sticky: bool) -> Self {
        Self::new(MutationKind::PistonRetract { direction, sticky }, base)
    }

    /// An explosion centred on `origin` removing `blocks`.
    pub fn explosion(source: Option<Actor>, origin: LiveLocation, blocks: Vec<LiveLocation>) -> Self {
        let mut event = Self::new(MutationKind::EntityExplode, origin).with_affected(blocks);
        event.actor = source;
        event
    }

    /// The player behind this event, if any.
    #[must_use]
    pub fn player(&self) -> Option<&PlayerHandle> {
        self.actor.as_ref().and_then(Actor::as_player)
    }
}

impl Cancellable for BlockMutationEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

// =============================================================================
// SIGN TEXT
// =============================================================================

/// A player finished editing the text of a freshly placed sign.
///
/// The lines here are pending: whatever they hold once dispatch completes is
/// what the host writes onto the block.
#[derive(Clone)]
pub struct SignChangeEvent {
    pub player: PlayerHandle,
    pub location: LiveLocation,
    lines: SignLines,
    cancelled: bool,
}

impl SignChangeEvent {
    pub fn new(player: PlayerHandle, location: LiveLocation, lines: SignLines) -> Self {
        Self {
            player,
            location,
            lines,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn line(&self, index: usize) -> &str {
        self.lines.line(index)
    }

    pub fn set_line(&mut self, index: usize, text: impl Into<String>) {
        self.lines.set_line(index, text);
    }

    #[must_use]
    pub fn lines(&self) -> &SignLines {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut SignLines {
        &mut self.lines
    }
}

impl fmt::Debug for SignChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignChangeEvent")
            .field("player", &self.player.name())
            .field("location", &self.location)
            .field("lines", &self.lines)
            .field("cancelled", &self.cancelled)
            .finish()
    }
}

impl Cancellable for SignChangeEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

// =============================================================================
// PLAYER INTERACTION
// =============================================================================

/// How a player interacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAction {
    LeftClickAir,
    LeftClickBlock,
    RightClickAir,
    RightClickBlock,
    Physical,
}

/// A player clicked something.
#[derive(Clone)]
pub struct PlayerInteractEvent {
    pub player: PlayerHandle,
    pub action: InteractAction,
    pub clicked: Option<LiveLocation>,
    cancelled: bool,
}

impl PlayerInteractEvent {
    pub fn new(player: PlayerHandle, action: InteractAction, clicked: Option<LiveLocation>) -> Self {
        Self {
            player,
            action,
            clicked,
            cancelled: false,
        }
    }

    /// A right click on `block`.
    pub fn right_click(player: PlayerHandle, block: LiveLocation) -> Self {
        Self::new(player, InteractAction::RightClickBlock, Some(block))
    }
}

impl fmt::Debug for PlayerInteractEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerInteractEvent")
            .field("player", &self.player.name())
            .field("action", &self.action)
            .field("clicked", &self.clicked)
            .field("cancelled", &self.cancelled)
            .finish()
    }
}

impl Cancellable for PlayerInteractEvent {
    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// All events that can be dispatched on the bus.
#[derive(Debug, Clone)]
pub enum WorldEvent {
    BlockMutation(BlockMutationEvent),
    SignChange(SignChangeEvent),
    PlayerInteract(PlayerInteractEvent),
}

impl WorldEvent {
    /// Get the topic for this event.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            WorldEvent::BlockMutation(_) => EventTopic::BlockMutation,
            WorldEvent::SignChange(_) => EventTopic::SignChange,
            WorldEvent::PlayerInteract(_) => EventTopic::PlayerInteract,
        }
    }

    /// Source label for log lines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WorldEvent::BlockMutation(e) => e.kind.label(),
            WorldEvent::SignChange(_) => "SignChangeEvent",
            WorldEvent::PlayerInteract(_) => "PlayerInteractEvent",
        }
    }
}

impl Cancellable for WorldEvent {
    fn is_cancelled(&self) -> bool {
        match self {
            WorldEvent::BlockMutation(e) => e.is_cancelled(),
            WorldEvent::SignChange(e) => e.is_cancelled(),
            WorldEvent::PlayerInteract(e) => e.is_cancelled(),
        }
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        match self {
            WorldEvent::BlockMutation(e) => e.set_cancelled(cancelled),
            WorldEvent::SignChange(e) => e.set_cancelled(cancelled),
            WorldEvent::PlayerInteract(e) => e.set_cancelled(cancelled),
        }
    }
}

impl From<BlockMutationEvent> for WorldEvent {
    fn from(event: BlockMutationEvent) -> Self {
        WorldEvent::BlockMutation(event)
    }
}

impl From<SignChangeEvent> for WorldEvent {
    fn from(event: SignChangeEvent) -> Self {
        WorldEvent::SignChange(event)
    }
}

impl From<PlayerInteractEvent> for WorldEvent {
    fn from(event: PlayerInteractEvent) -> Self {
        WorldEvent::PlayerInteract(event)
    }
}

/// Event topics for filtering subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTopic {
    BlockMutation,
    SignChange,
    PlayerInteract,
    /// Matches every topic.
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to subscribe to (empty = all).
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self { topics: vec![] }
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &WorldEvent) -> bool {
        self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic())
    }
}

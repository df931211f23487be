//! A host world with SignVault enabled on top of it.

use plugin_runtime::SignVaultPlugin;
use shared_bus::{BlockMutationEvent, EventPublisher, InMemoryEventBus, SignChangeEvent, WorldEvent};
use shared_types::{
    BlockFace, BlockKind, BlockPos, InMemoryWorld, LiveLocation, PlayerHandle, SignLines,
    TestPlayer, WorldHandle, WorldSet,
};
use std::sync::Arc;
use sv_01_sign_storage::SignStorage;
use sv_02_sign_format::VALID_SIGN_IDENTIFIER;
use sv_03_sign_protection::LoggingVirtualInventory;
use tempfile::TempDir;

pub const PLACE: &str = "signvault.signs.modify.place";
pub const BREAK: &str = "signvault.signs.modify.break";

/// One running host: a world directory, a bus and the plugin.
pub struct SignWorld {
    pub dir: TempDir,
    pub worlds: Arc<WorldSet>,
    pub world: Arc<InMemoryWorld>,
    pub handle: WorldHandle,
    pub bus: Arc<InMemoryEventBus>,
    pub inventory: Arc<LoggingVirtualInventory>,
    pub plugin: SignVaultPlugin,
}

impl SignWorld {
    /// Fresh data directory, one world, plugin enabled.
    pub fn start() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let worlds = Arc::new(WorldSet::new());
        let world = Arc::new(InMemoryWorld::new("overworld"));
        let handle = worlds.insert(world.clone());
        let bus = Arc::new(InMemoryEventBus::new());
        let inventory = Arc::new(LoggingVirtualInventory::new());
        let plugin = Self::plugin_for(&dir, &worlds, &bus, &inventory);

        let mut host = Self {
            dir,
            worlds,
            world,
            handle,
            bus,
            inventory,
            plugin,
        };
        host.plugin.enable();
        host
    }

    fn plugin_for(
        dir: &TempDir,
        worlds: &Arc<WorldSet>,
        bus: &Arc<InMemoryEventBus>,
        inventory: &Arc<LoggingVirtualInventory>,
    ) -> SignVaultPlugin {
        SignVaultPlugin::new(dir.path(), worlds.clone(), bus.clone())
            .with_inventory(inventory.clone())
    }

    /// Shut the plugin down and bring a new instance up on the same data.
    pub fn restart(&mut self) {
        self.plugin.disable();
        self.plugin = Self::plugin_for(&self.dir, &self.worlds, &self.bus, &self.inventory);
        self.plugin.enable();
    }

    pub fn storage(&self) -> &Arc<SignStorage> {
        self.plugin.storage().expect("sign features active")
    }

    pub fn at(&self, x: i32, y: i32, z: i32) -> LiveLocation {
        LiveLocation::new(self.handle.clone(), BlockPos::new(x, y, z))
    }

    pub fn dirt(&self, location: &LiveLocation) {
        self.world.set_block(location.pos(), BlockKind::other("dirt"));
    }

    /// A player allowed to place and break signs.
    pub fn builder() -> Arc<TestPlayer> {
        Arc::new(
            TestPlayer::new("builder")
                .with_permission(PLACE)
                .with_permission(BREAK),
        )
    }

    /// A player without any SignVault permission.
    pub fn visitor() -> Arc<TestPlayer> {
        Arc::new(TestPlayer::new("visitor"))
    }

    pub fn publish(&self, event: impl Into<WorldEvent>) -> WorldEvent {
        let mut event = event.into();
        self.bus.publish(&mut event);
        event
    }

    /// Write `lines` onto the sign at `location` and apply the outcome.
    pub fn write_sign(&self, location: &LiveLocation, lines: SignLines, player: PlayerHandle) {
        let event = self.publish(SignChangeEvent::new(player, location.clone(), lines));
        if let WorldEvent::SignChange(change) = event {
            if !shared_bus::Cancellable::is_cancelled(&change) {
                location
                    .set_sign_lines(change.lines())
                    .expect("sign still placed");
            }
        }
    }

    /// Place a sign post and register it as `type_line`.
    pub fn post(&self, location: &LiveLocation, type_line: &str) {
        self.world.place_sign_post(location.pos());
        self.write_sign(
            location,
            SignLines::new([VALID_SIGN_IDENTIFIER, type_line, "", ""]),
            Self::builder(),
        );
    }

    /// Place a wall sign hanging on `facing` of `support` and register it.
    pub fn wall_sign(&self, support: &LiveLocation, facing: BlockFace, type_line: &str) -> LiveLocation {
        let location = support.relative(facing);
        self.world.place_wall_sign(location.pos(), facing);
        self.write_sign(
            &location,
            SignLines::new([VALID_SIGN_IDENTIFIER, type_line, "", ""]),
            Self::builder(),
        );
        location
    }

    /// Have `player` break `location`; the block is cleared if nobody vetoed.
    ///
    /// Returns whether the break went through.
    pub fn break_block(&self, location: &LiveLocation, player: PlayerHandle) -> bool {
        let event = self.publish(BlockMutationEvent::block_break(player, location.clone()));
        let allowed = !shared_bus::Cancellable::is_cancelled(&event);
        if allowed {
            self.world.clear(location.pos());
        }
        allowed
    }
}

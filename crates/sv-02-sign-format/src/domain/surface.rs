//! Something whose four sign lines can be read and written.
//!
//! A sign is written either through the world (an existing block) or through
//! a pending `SignChangeEvent`, whose text the host applies after dispatch.

use shared_bus::SignChangeEvent;
use shared_types::{LiveLocation, SignLines, WorldError};

pub trait SignSurface {
    /// Where the sign is.
    fn location(&self) -> &LiveLocation;

    /// Current text.
    fn lines(&self) -> SignLines;

    /// Replace all four lines.
    fn set_lines(&mut self, lines: SignLines) -> Result<(), WorldError>;

    /// Replace one line, keeping the others.
    fn set_line(&mut self, index: usize, text: String) -> Result<(), WorldError> {
        let mut lines = self.lines();
        lines.set_line(index, text);
        self.set_lines(lines)
    }
}

/// A sign block that exists in the world.
#[derive(Debug, Clone)]
pub struct PlacedSign {
    location: LiveLocation,
}

impl PlacedSign {
    /// Wrap `location` if it currently holds a sign.
    ///
    /// # Errors
    ///
    /// `WorldError::NotASign` if the block is anything else.
    pub fn at(location: LiveLocation) -> Result<Self, WorldError> {
        if location.is_sign() {
            Ok(Self { location })
        } else {
            Err(WorldError::NotASign {
                world: location.world_id(),
                pos: location.pos(),
            })
        }
    }

    /// Wrap a location the caller has just seen holding a sign.
    pub(crate) fn checked(location: LiveLocation) -> Self {
        Self { location }
    }

    #[must_use]
    pub fn into_location(self) -> LiveLocation {
        self.location
    }
}

impl SignSurface for PlacedSign {
    fn location(&self) -> &LiveLocation {
        &self.location
    }

    fn lines(&self) -> SignLines {
        self.location.sign_lines().unwrap_or_default()
    }

    fn set_lines(&mut self, lines: SignLines) -> Result<(), WorldError> {
        self.location.set_sign_lines(&lines)
    }
}

impl SignSurface for SignChangeEvent {
    fn location(&self) -> &LiveLocation {
        &self.location
    }

    fn lines(&self) -> SignLines {
        SignChangeEvent::lines(self).clone()
    }

    fn set_lines(&mut self, lines: SignLines) -> Result<(), WorldError> {
        *self.lines_mut() = lines;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{BlockPos, InMemoryWorld, TestPlayer, World, WorldHandle};
    use std::sync::Arc;

    #[test]
    fn test_placed_sign_requires_sign_block() {
        let world = Arc::new(InMemoryWorld::new("overworld"));
        let handle = WorldHandle::new(world.clone());
        let pos = BlockPos::new(0, 64, 0);

        assert!(matches!(
            PlacedSign::at(LiveLocation::new(handle.clone(), pos)),
            Err(WorldError::NotASign { .. })
        ));

        world.place_sign_post(pos);
        let mut sign = PlacedSign::at(LiveLocation::new(handle, pos)).unwrap();
        sign.set_line(2, "hello".to_string()).unwrap();
        assert_eq!(sign.lines().line(2), "hello");
        assert_eq!(world.sign_lines(pos).unwrap().line(2), "hello");
    }

    #[test]
    fn test_pending_text_is_a_surface() {
        let world = WorldHandle::new(Arc::new(InMemoryWorld::new("overworld")));
        let location = LiveLocation::new(world, BlockPos::new(1, 1, 1));
        let mut event = SignChangeEvent::new(
            Arc::new(TestPlayer::new("alex")),
            location,
            SignLines::new(["[SignVault]", "deposit", "", ""]),
        );

        SignSurface::set_line(&mut event, 3, "x".to_string()).unwrap();
        assert_eq!(event.line(3), "x");
        assert_eq!(event.line(1), "deposit");
    }
}

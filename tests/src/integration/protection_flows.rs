//! # Protection Flows
//!
//! Every world-mutation pathway, raised on the bus against a running plugin.

#[cfg(test)]
mod tests {
    use super::super::fixtures::SignWorld;
    use shared_bus::{
        BlockMutationEvent, Cancellable, MutationKind, PlayerInteractEvent, WorldEvent,
    };
    use shared_types::{Actor, BlockFace, SignLines, TestPlayer};
    use std::collections::HashSet;
    use std::sync::Arc;
    use sv_01_sign_storage::SignType;
    use sv_02_sign_format::{INVALID_SIGN_IDENTIFIER, VALID_SIGN_IDENTIFIER};
    use sv_03_sign_protection::find_attached_signs;

    fn cancelled(event: &WorldEvent) -> bool {
        event.is_cancelled()
    }

    // =========================================================================
    // Attachment and direct breaks
    // =========================================================================

    #[test]
    fn test_attachment_discovery_finds_wall_and_post() {
        let host = SignWorld::start();
        let dirt = host.at(0, 64, 0);
        host.dirt(&dirt);
        let wall = dirt.relative(BlockFace::North);
        host.world.place_wall_sign(wall.pos(), BlockFace::North);
        let post = dirt.relative(BlockFace::Up);
        host.world.place_sign_post(post.pos());

        let attached = find_attached_signs(&dirt);
        assert_eq!(attached, HashSet::from([wall, post]));
    }

    #[test]
    fn test_breaking_support_is_vetoed_and_registry_unchanged() {
        let host = SignWorld::start();
        let dirt = host.at(0, 64, 0);
        host.dirt(&dirt);
        let sign = dirt.relative(BlockFace::Up);
        host.post(&sign, "deposit");
        let before = host.storage().entries();

        let griefer = Arc::new(TestPlayer::new("griefer"));
        assert!(!host.break_block(&dirt, griefer.clone()));

        assert_eq!(host.storage().entries(), before);
        assert!(!griefer.messages().is_empty());
    }

    #[test]
    fn test_breaking_support_of_unregistered_sign_is_allowed() {
        let host = SignWorld::start();
        let dirt = host.at(0, 64, 0);
        host.dirt(&dirt);
        host.world.place_sign_post(dirt.relative(BlockFace::Up).pos());

        assert!(host.break_block(&dirt, SignWorld::visitor()));
    }

    #[test]
    fn test_removal_with_permission_invalidates_and_persists() {
        let mut host = SignWorld::start();
        let sign = host.at(4, 64, 4);
        host.post(&sign, "withdraw");

        let event = host.publish(BlockMutationEvent::block_break(
            SignWorld::builder(),
            sign.clone(),
        ));
        assert!(!cancelled(&event));
        assert!(!host.storage().contains(&sign));
        assert_eq!(
            sign.sign_lines().unwrap().line(0),
            INVALID_SIGN_IDENTIFIER
        );

        host.restart();
        assert!(!host.storage().contains(&sign));
    }

    #[test]
    fn test_removal_without_permission_is_cancelled() {
        let host = SignWorld::start();
        let sign = host.at(4, 64, 4);
        host.post(&sign, "deposit");

        let visitor = SignWorld::visitor();
        assert!(!host.break_block(&sign, visitor.clone()));
        assert_eq!(host.storage().get(&sign), Some(SignType::Deposit));
        assert!(visitor
            .messages()
            .iter()
            .any(|m| m.starts_with("Sign removal failed:")));
    }

    // =========================================================================
    // Environmental pathways
    // =========================================================================

    #[test]
    fn test_environmental_mutations_of_support_are_vetoed() {
        let host = SignWorld::start();
        let support = host.at(10, 64, 10);
        host.dirt(&support);
        host.wall_sign(&support, BlockFace::South, "deposit");

        for kind in [
            MutationKind::BlockBurn,
            MutationKind::BlockFade,
            MutationKind::LeavesDecay,
            MutationKind::BlockPhysics,
            MutationKind::EntityChangeBlock,
        ] {
            let event = host.publish(BlockMutationEvent::new(kind, support.clone()));
            assert!(cancelled(&event), "{kind} was not vetoed");
        }
    }

    #[test]
    fn test_explosion_touching_sign_is_vetoed() {
        let host = SignWorld::start();
        let sign = host.at(0, 64, 0);
        host.post(&sign, "deposit");
        let near = host.at(1, 64, 0);

        let creeper = Actor::Entity("creeper".to_string());
        let event = host.publish(BlockMutationEvent::explosion(
            Some(creeper),
            near.clone(),
            vec![near.clone(), sign.clone()],
        ));
        assert!(cancelled(&event));

        let harmless = host.publish(BlockMutationEvent::explosion(None, near.clone(), vec![near]));
        assert!(!cancelled(&harmless));
    }

    #[test]
    fn test_piston_cannot_push_sign_support() {
        let host = SignWorld::start();
        let base = host.at(0, 64, 0);
        let pushed = host.at(1, 64, 0);
        host.dirt(&pushed);
        host.post(&pushed.relative(BlockFace::Up), "withdraw");

        let event = host.publish(BlockMutationEvent::piston_extend(base, vec![pushed]));
        assert!(cancelled(&event));
    }

    #[test]
    fn test_sticky_piston_cannot_pull_sign_support() {
        let host = SignWorld::start();
        let base = host.at(0, 64, 0);
        let pulled = base.relative_n(BlockFace::East, 2);
        host.dirt(&pulled);
        host.post(&pulled.relative(BlockFace::Up), "deposit");

        let plain = host.publish(BlockMutationEvent::piston_retract(
            base.clone(),
            BlockFace::East,
            false,
        ));
        assert!(!cancelled(&plain));

        let sticky = host.publish(BlockMutationEvent::piston_retract(base, BlockFace::East, true));
        assert!(cancelled(&sticky));
    }

    // =========================================================================
    // Creation and interaction
    // =========================================================================

    #[test]
    fn test_unknown_type_text_is_invalidated() {
        let host = SignWorld::start();
        let sign = host.at(2, 64, 2);
        host.world.place_sign_post(sign.pos());
        host.write_sign(
            &sign,
            SignLines::new([VALID_SIGN_IDENTIFIER, "foo", "", ""]),
            SignWorld::builder(),
        );

        let lines = sign.sign_lines().unwrap();
        assert_eq!(lines.line(0), INVALID_SIGN_IDENTIFIER);
        assert_eq!(lines.line(3), "\u{00A7}cwrong type");
        assert!(!host.storage().contains(&sign));
    }

    #[test]
    fn test_created_sign_shows_configured_text() {
        let host = SignWorld::start();
        let sign = host.at(2, 64, 2);
        host.post(&sign, " Deposit ");

        let lines = sign.sign_lines().unwrap();
        assert_eq!(lines.line(0), "[SignVault]");
        assert_eq!(lines.line(2), "\u{00A7}2Deposit");
        assert_eq!(host.storage().get(&sign), Some(SignType::Deposit));
    }

    #[test]
    fn test_right_click_opens_matching_inventory() {
        let host = SignWorld::start();
        let deposit = host.at(0, 64, 0);
        let withdraw = host.at(2, 64, 0);
        host.post(&deposit, "deposit");
        host.post(&withdraw, "withdraw");
        let trader = Arc::new(TestPlayer::new("trader"));

        host.publish(PlayerInteractEvent::right_click(trader.clone(), deposit));
        host.publish(PlayerInteractEvent::right_click(trader.clone(), withdraw));
        host.publish(PlayerInteractEvent::right_click(trader, host.at(9, 9, 9)));

        assert_eq!(host.inventory.deposits(), 1);
        assert_eq!(host.inventory.withdrawals(), 1);
    }
}

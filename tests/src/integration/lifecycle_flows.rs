//! # Lifecycle Flows
//!
//! Restarts, bulk validation and registry recovery across the whole stack.

#[cfg(test)]
mod tests {
    use super::super::fixtures::SignWorld;
    use shared_types::{BlockPos, InMemoryWorld, LiveLocation, PlayerHandle, TestPlayer};
    use std::collections::HashMap;
    use std::fs;
    use std::sync::Arc;
    use sv_01_sign_storage::{SignType, STORAGE_FILE_NAME};
    use sv_02_sign_format::ValidationOptions;

    #[test]
    fn test_registry_round_trips_through_restart() {
        let mut host = SignWorld::start();
        let signs: Vec<_> = (0..8)
            .map(|i| (host.at(i * 3, 64, -i), if i % 2 == 0 { "deposit" } else { "withdraw" }))
            .collect();
        for (location, type_line) in &signs {
            host.post(location, type_line);
        }
        let before: HashMap<_, _> = host.storage().entries().into_iter().collect();

        host.restart();
        let after: HashMap<_, _> = host.storage().entries().into_iter().collect();
        assert_eq!(after, before);
        assert_eq!(host.storage().len(), 8);
    }

    #[test]
    fn test_entries_of_unloaded_world_are_dropped_on_load() {
        let mut host = SignWorld::start();
        let nether_world = Arc::new(InMemoryWorld::new("nether"));
        let nether = host.worlds.insert(nether_world.clone());
        let remote = LiveLocation::new(nether.clone(), BlockPos::new(0, 40, 0));
        let local = host.at(0, 64, 0);
        host.post(&local, "deposit");

        nether_world.place_sign_post(remote.pos());
        host.write_sign(
            &remote,
            shared_types::SignLines::new([
                sv_02_sign_format::VALID_SIGN_IDENTIFIER,
                "withdraw",
                "",
                "",
            ]),
            SignWorld::builder(),
        );
        assert_eq!(host.storage().len(), 2);

        host.plugin.disable();
        host.worlds.unload(nether.id());
        host.restart();

        assert_eq!(host.storage().len(), 1);
        assert!(host.storage().contains(&local));
    }

    #[test]
    fn test_bulk_validation_removes_missing_signs() {
        let host = SignWorld::start();
        let signs: Vec<_> = (0..5).map(|i| host.at(i, 64, 0)).collect();
        for location in &signs {
            host.post(location, "deposit");
        }
        host.world.clear(signs[1].pos());
        host.world.clear(signs[3].pos());

        let admin = Arc::new(TestPlayer::new("admin"));
        let handle: PlayerHandle = admin.clone();
        let report = host
            .plugin
            .validate_signs(
                ValidationOptions {
                    remove_invalid: true,
                    log_results: true,
                    ..ValidationOptions::default()
                },
                Some(&handle),
            )
            .unwrap();

        assert_eq!(report.total, 5);
        assert_eq!(report.invalid, 2);
        assert_eq!(host.storage().get(&signs[1]), None);
        assert_eq!(host.storage().get(&signs[3]), None);
        for kept in [&signs[0], &signs[2], &signs[4]] {
            assert_eq!(host.storage().get(kept), Some(SignType::Deposit));
        }
        assert_eq!(admin.messages().len(), 1);
        assert!(admin.messages()[0].contains("5 entries total, 2 invalid"));
    }

    #[test]
    fn test_forced_formatting_is_idempotent() {
        let host = SignWorld::start();
        let sign = host.at(0, 64, 0);
        host.post(&sign, "withdraw");
        let mut lines = sign.sign_lines().unwrap();
        lines.set_line(3, "scribbled");
        sign.set_sign_lines(&lines).unwrap();

        let options = ValidationOptions {
            check_formatting: true,
            force_correct_format: true,
            ..ValidationOptions::default()
        };
        let first = host.plugin.validate_signs(options, None).unwrap();
        let after_first = sign.sign_lines().unwrap();
        let second = host.plugin.validate_signs(options, None).unwrap();

        assert_eq!(first.misformatted, Some(1));
        assert_eq!(second.misformatted, Some(0));
        assert_eq!(sign.sign_lines().unwrap(), after_first);
    }

    #[test]
    fn test_corrupt_registry_is_quarantined() {
        let mut host = SignWorld::start();
        let sign = host.at(0, 64, 0);
        host.post(&sign, "deposit");
        host.plugin.disable();

        let path = host.dir.path().join(STORAGE_FILE_NAME);
        let mut bytes = fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        fs::write(&path, &bytes).unwrap();

        host.restart();
        assert!(host.storage().is_empty());
        let quarantined = host.dir.path().join(format!("{STORAGE_FILE_NAME}.corrupt"));
        assert_eq!(fs::read(quarantined).unwrap(), bytes);

        // The registry is usable again after recovery.
        host.post(&sign, "withdraw");
        host.restart();
        assert_eq!(host.storage().get(&sign), Some(SignType::Withdraw));
    }
}

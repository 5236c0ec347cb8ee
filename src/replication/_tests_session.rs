#[cfg(test)]
mod _tests_session {
    use super::super::replicator::Replicator;
    use super::super::session::{Session, SessionState, Sleeper};
    use crate::error::SymmetryError;
    use crate::symmetries::{parse_symmetry_spec, SymmetrySpec};
    use crate::world::{BlockPos, BlockState, HitEvent, MemoryWorld, World};
    use crate::Result;
    use nalgebra::Vector3;
    use std::collections::HashSet;
    use std::time::Duration;

    const QUANTUM: Duration = Duration::from_millis(250);

    #[derive(Debug, Default)]
    struct RecordingSleeper {
        sleeps: Vec<Duration>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
        }
    }

    /// Answers position queries, then fails every poll
    struct UnreachableWorld;

    impl World for UnreachableWorld {
        fn player_position(&mut self) -> Result<Vector3<f64>> {
            Ok(Vector3::zeros())
        }
        fn block_at(&mut self, _position: &BlockPos) -> Result<BlockState> {
            Ok(BlockState::air())
        }
        fn set_block(&mut self, _position: &BlockPos, _state: &BlockState) -> Result<()> {
            Ok(())
        }
        fn poll_block_hits(&mut self) -> Result<Vec<HitEvent>> {
            Err(SymmetryError::CollaboratorUnavailable("connection reset".to_string()))
        }
        fn post_to_chat(&mut self, _message: &str) -> Result<()> {
            Ok(())
        }
        fn restrict_hits_to_sword(&mut self, _restrict: bool) -> Result<()> {
            Ok(())
        }
        fn clear_events(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn default_session(world: MemoryWorld) -> Session<MemoryWorld, RecordingSleeper> {
        Session::start(
            world,
            &SymmetrySpec::default_mirrors(),
            RecordingSleeper::default(),
            QUANTUM,
        )
        .unwrap()
    }

    fn written_at(world: &MemoryWorld) -> HashSet<BlockPos> {
        world.writes.iter().map(|(pos, _)| *pos).collect()
    }

    #[test]
    fn test_activation_sequence() {
        let mut session = default_session(MemoryWorld::new(Vector3::new(10.0, 5.0, 10.0)));
        assert_eq!(session.state(), SessionState::Idle);

        session.activate().unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.world().restrict_to_sword, Some(false));
        assert_eq!(session.world().chat, vec!["Will be drawing 4 copies".to_string()]);
        assert_eq!(session.world().clear_count, 1);

        // Activating again is a no-op
        session.activate().unwrap();
        assert_eq!(session.world().chat.len(), 1);
        assert_eq!(session.world().clear_count, 1);
    }

    #[test]
    fn test_default_mirrors_end_to_end() {
        let mut world = MemoryWorld::new(Vector3::new(10.0, 5.0, 10.0));
        let stone = BlockState::new(1, 0);
        // The hit block was broken (air) and a block was placed on its top face
        world.place(Vector3::new(12, 6, 10), stone.clone());
        world.queue_hits(vec![HitEvent::new(Vector3::new(12, 5, 10), 1)]);

        let mut session = default_session(world);
        assert_eq!(session.replicator().center(), &Vector3::new(10.0, 5.0, 10.0));
        assert_eq!(session.poll_once().unwrap(), 1);

        let world = session.world();
        assert_eq!(world.writes.len(), 6);

        let erased: HashSet<BlockPos> = world
            .writes
            .iter()
            .filter(|(_, state)| state.is_air())
            .map(|(pos, _)| *pos)
            .collect();
        let expected_erased: HashSet<BlockPos> = [
            Vector3::new(12, 5, 9),
            Vector3::new(7, 5, 10),
            Vector3::new(7, 5, 9),
        ]
        .into_iter()
        .collect();
        assert_eq!(erased, expected_erased);

        for pos in [
            Vector3::new(12, 6, 9),
            Vector3::new(7, 6, 10),
            Vector3::new(7, 6, 9),
        ] {
            assert_eq!(world.get(&pos), stone);
        }
    }

    #[test]
    fn test_solid_hit_block_is_not_erased() {
        let mut world = MemoryWorld::new(Vector3::new(0.0, 0.0, 0.0));
        world.place(Vector3::new(3, 0, 0), BlockState::new(4, 0));
        world.queue_hits(vec![HitEvent::new(Vector3::new(3, 0, 0), 0)]);

        let mut session = default_session(world);
        session.poll_once().unwrap();

        // Only the placement copy (air below the block) is written
        let world = session.world();
        assert_eq!(world.writes.len(), 3);
        assert!(world.writes.iter().all(|(pos, state)| state.is_air() && pos.y == -1));
    }

    #[test]
    fn test_extended_metadata_is_copied() {
        let mut world = MemoryWorld::new(Vector3::new(0.0, 0.0, 0.0));
        let sign = BlockState::new(63, 4).with_nbt("{Text1:\"north\"}");
        world.place(Vector3::new(2, 0, 2), sign.clone());
        world.queue_hits(vec![HitEvent::new(Vector3::new(2, 0, 2), 6)]);

        let mut session = default_session(world);
        session.poll_once().unwrap();

        let world = session.world();
        assert_eq!(world.writes.len(), 3);
        assert!(world.writes.iter().all(|(_, state)| *state == sign));
        assert_eq!(
            written_at(world),
            [
                Vector3::new(2, 0, -3),
                Vector3::new(-3, 0, 2),
                Vector3::new(-3, 0, -3)
            ]
            .into_iter()
            .collect::<HashSet<BlockPos>>()
        );
    }

    #[test]
    fn test_unknown_face_skips_placement_copy() {
        let mut world = MemoryWorld::new(Vector3::new(0.0, 0.0, 0.0));
        world.queue_hits(vec![HitEvent::new(Vector3::new(1, 0, 1), 9)]);

        let mut session = default_session(world);
        session.poll_once().unwrap();

        // Erase copy only
        assert_eq!(session.world().writes.len(), 3);
    }

    #[test]
    fn test_whole_batch_is_drained_in_one_poll() {
        let mut world = MemoryWorld::new(Vector3::new(0.0, 0.0, 0.0));
        let batch: Vec<HitEvent> = (0..500)
            .map(|i| HitEvent::new(Vector3::new(i, 0, 3), 1))
            .collect();
        world.queue_hits(batch);

        let mut session = default_session(world);
        assert_eq!(session.poll_once().unwrap(), 500);
        assert_eq!(session.world().polls, 1);
        assert_eq!(session.world().writes.len(), 500 * 2 * 3);
    }

    #[test]
    fn test_sleeps_one_quantum_per_poll() {
        let mut session = default_session(MemoryWorld::new(Vector3::zeros()));
        for _ in 0..3 {
            assert_eq!(session.poll_once().unwrap(), 0);
        }
        assert_eq!(session.world().polls, 3);
        assert_eq!(session.sleeper().sleeps, vec![QUANTUM; 3]);
        assert!(session.world().writes.is_empty());
    }

    #[test]
    fn test_degenerate_group_reports_one_copy() {
        let spec = parse_symmetry_spec(&["t", "1", "1", "0", "0"]).unwrap();
        let mut world = MemoryWorld::new(Vector3::zeros());
        world.queue_hits(vec![HitEvent::new(Vector3::new(5, 5, 5), 1)]);

        let mut session = Session::new(
            world,
            Replicator::new(Vector3::zeros(), &spec),
            RecordingSleeper::default(),
            QUANTUM,
        );
        session.poll_once().unwrap();

        assert_eq!(session.world().chat, vec!["Will be drawing 1 copies".to_string()]);
        assert!(session.world().writes.is_empty());
    }

    #[test]
    fn test_unreachable_world_ends_run() {
        let mut session = Session::start(
            UnreachableWorld,
            &SymmetrySpec::default_mirrors(),
            RecordingSleeper::default(),
            QUANTUM,
        )
        .unwrap();

        match session.run() {
            Err(SymmetryError::CollaboratorUnavailable(_)) => {}
            other => panic!("expected CollaboratorUnavailable, got {:?}", other),
        }
        assert_eq!(session.state(), SessionState::Active);
    }
}

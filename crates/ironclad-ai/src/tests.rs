#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use ironclad_core::components::Orientation;
    use ironclad_core::constants::*;
    use ironclad_core::enums::BehaviorState;
    use ironclad_core::nav::{NavAgentProfile, PathOutcome, Pathfinder};
    use ironclad_core::types::Position;

    use crate::fsm::{AiBrain, TickContext};
    use crate::targeting::{closest_opponent, facing_offset, rotate_to_face};

    /// Pathfinder stub: a straight two-point route to any goal.
    struct StraightPath;

    impl Pathfinder for StraightPath {
        fn find_path(
            &self,
            _agent: &NavAgentProfile,
            start: Position,
            goal: Position,
        ) -> PathOutcome {
            PathOutcome::Found(vec![start, goal])
        }
    }

    /// Pathfinder stub: every goal is unreachable.
    struct NoPath;

    impl Pathfinder for NoPath {
        fn find_path(
            &self,
            _agent: &NavAgentProfile,
            _start: Position,
            _goal: Position,
        ) -> PathOutcome {
            PathOutcome::Unreachable
        }
    }

    fn make_context<'a>(
        position: Position,
        yaw: f64,
        opponent: Option<Position>,
        pathfinder: &'a dyn Pathfinder,
    ) -> TickContext<'a> {
        let orientation = Orientation { yaw, rate: 0.0 };
        TickContext {
            position,
            hull_axis: orientation.hull_axis(),
            now_secs: 10.0,
            opponent,
            agent: NavAgentProfile::default(),
            pathfinder,
        }
    }

    fn fleeing_brain() -> AiBrain {
        AiBrain {
            state: BehaviorState::Fleeing,
            ..AiBrain::default()
        }
    }

    // ---- Facing ----

    #[test]
    fn test_facing_aligned_when_nose_on_target() {
        // Nose north (yaw 0), target due north: offset is zero.
        let orientation = Orientation { yaw: 0.0, rate: 0.0 };
        let from = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(0.0, 500.0, 0.0);

        let offset = facing_offset(orientation.hull_axis(), from, target);
        assert!(offset.abs() < 1e-10);

        let facing = rotate_to_face(orientation.hull_axis(), from, target);
        assert!(facing.aligned);
        assert_eq!(facing.turn, None);
    }

    #[test]
    fn test_facing_turns_clockwise_toward_east() {
        // Nose north, target due east: a positive (clockwise) turn.
        let orientation = Orientation { yaw: 0.0, rate: 0.0 };
        let from = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(500.0, 0.0, 0.0);

        let facing = rotate_to_face(orientation.hull_axis(), from, target);
        assert!(!facing.aligned);
        assert_eq!(facing.turn, Some(AI_TURN_RATE));
    }

    #[test]
    fn test_facing_turns_counterclockwise_toward_west() {
        let orientation = Orientation { yaw: 0.0, rate: 0.0 };
        let from = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(-500.0, 0.0, 0.0);

        let facing = rotate_to_face(orientation.hull_axis(), from, target);
        assert!(!facing.aligned);
        assert_eq!(facing.turn, Some(-AI_TURN_RATE));
    }

    /// Facing is achieved exactly when the offset is inside the 0.05 rad
    /// tolerance, and no turn is issued in that case.
    #[test]
    fn test_facing_tolerance_boundary() {
        let orientation = Orientation { yaw: 0.0, rate: 0.0 };
        let from = Position::new(0.0, 0.0, 0.0);

        // Offsets just inside and just outside the tolerance.
        let inside = Position::new(500.0 * 0.049_f64.sin(), 500.0 * 0.049_f64.cos(), 0.0);
        let outside = Position::new(500.0 * 0.051_f64.sin(), 500.0 * 0.051_f64.cos(), 0.0);

        let facing = rotate_to_face(orientation.hull_axis(), from, inside);
        assert!(facing.aligned);
        assert_eq!(facing.turn, None);

        let facing = rotate_to_face(orientation.hull_axis(), from, outside);
        assert!(!facing.aligned);
        assert!(facing.turn.is_some());
    }

    // ---- Closest opponent ----

    #[test]
    fn test_closest_opponent_returns_true_minimum() {
        let from = Position::new(0.0, 0.0, 0.0);
        let candidates = vec![
            Position::new(0.0, 50.0, 0.0),
            Position::new(30.0, 0.0, 0.0),
            Position::new(-80.0, 0.0, 0.0),
        ];
        assert_eq!(closest_opponent(from, &candidates), Some(1));
    }

    #[test]
    fn test_closest_opponent_empty_and_out_of_range() {
        let from = Position::new(0.0, 0.0, 0.0);
        assert_eq!(closest_opponent(from, &[]), None);

        let too_far = vec![Position::new(OPPONENT_SEARCH_RANGE + 1.0, 0.0, 0.0)];
        assert_eq!(closest_opponent(from, &too_far), None);
    }

    // ---- Re-plan cycle ----

    #[test]
    fn test_replan_rolls_wander_point_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = AiBrain::default();
        for _ in 0..50 {
            brain.replan(&mut rng);
            assert!(brain.wander_point.x.abs() <= WANDER_HALF_EXTENT);
            assert!(brain.wander_point.y.abs() <= WANDER_HALF_EXTENT);
            assert_eq!(brain.wander_point.z, 0.0);
        }
    }

    #[test]
    fn test_replan_toggles_state_exactly_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = AiBrain::default();
        assert_eq!(brain.state, BehaviorState::Fighting);

        brain.replan(&mut rng);
        assert_eq!(brain.state, BehaviorState::Fleeing);

        brain.replan(&mut rng);
        assert_eq!(brain.state, BehaviorState::Fighting);
    }

    // ---- Drive tick (Fleeing) ----

    #[test]
    fn test_drive_tick_reaches_wander_point_and_toggles() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = fleeing_brain();
        brain.pursue_opponent = false;
        brain.wander_point = Position::new(0.0, 150.0, 0.0);

        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, None, &StraightPath);
        let orders = brain.tick(&ctx, &mut rng);

        // Final leg, under the arrival range: state flips to Fighting.
        assert_eq!(brain.state, BehaviorState::Fighting);

        // Close waypoint maps to the slow end of the speed range.
        let drive = orders.drive.expect("should drive along the path");
        assert!((drive - 0.815).abs() < 1e-10);
    }

    #[test]
    fn test_drive_tick_full_speed_at_long_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = fleeing_brain();
        brain.pursue_opponent = false;
        brain.wander_point = Position::new(0.0, 3_000.0, 0.0);

        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, None, &StraightPath);
        let orders = brain.tick(&ctx, &mut rng);

        assert_eq!(brain.state, BehaviorState::Fleeing);
        assert_eq!(orders.drive, Some(DRIVE_SPEED_MAX));
    }

    #[test]
    fn test_drive_tick_path_failure_forces_fighting() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = fleeing_brain();
        brain.wander_point = Position::new(1_000.0, 1_000.0, 0.0);

        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, None, &NoPath);
        let orders = brain.tick(&ctx, &mut rng);

        assert_eq!(brain.state, BehaviorState::Fighting);
        assert_eq!(orders.drive, None);
        assert_eq!(orders.turn, None);
        assert_eq!(orders.fire, None);
    }

    #[test]
    fn test_drive_tick_pursuit_toggles_when_on_top_of_opponent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = fleeing_brain();
        brain.pursue_opponent = true;

        // Opponent well inside the engage range.
        let opponent = Position::new(0.0, 500.0, 0.0);
        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, Some(opponent), &StraightPath);
        let orders = brain.tick(&ctx, &mut rng);

        // Toggled to Fighting, but this tick still drove toward the
        // already-chosen goal.
        assert_eq!(brain.state, BehaviorState::Fighting);
        assert!(orders.drive.is_some());
    }

    #[test]
    fn test_drive_tick_ignores_opponent_when_not_pursuing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = fleeing_brain();
        brain.pursue_opponent = false;
        brain.wander_point = Position::new(0.0, 3_000.0, 0.0);

        // Opponent is close but the pursuit roll said no: keep fleeing.
        let opponent = Position::new(300.0, 400.0, 0.0);
        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, Some(opponent), &StraightPath);
        brain.tick(&ctx, &mut rng);

        assert_eq!(brain.state, BehaviorState::Fleeing);
    }

    #[test]
    fn test_drive_tick_opportunistic_fire_when_lined_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = fleeing_brain();
        brain.pursue_opponent = true;

        // Opponent dead ahead of the nose and beyond the engage range.
        let opponent = Position::new(0.0, 2_000.0, 0.0);
        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, Some(opponent), &StraightPath);
        let orders = brain.tick(&ctx, &mut rng);

        let fire = orders.fire.expect("lined-up opponent should draw fire");
        assert_eq!(fire.target, opponent);
    }

    // ---- Defense tick (Fighting) ----

    #[test]
    fn test_defense_tick_idle_without_opponent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = AiBrain::default();

        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, None, &StraightPath);
        let orders = brain.tick(&ctx, &mut rng);

        assert_eq!(orders.drive, None);
        assert_eq!(orders.turn, None);
        assert_eq!(orders.fire, None);
    }

    #[test]
    fn test_defense_tick_kites_and_fires_when_aligned() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = AiBrain::default();

        let opponent = Position::new(0.0, 800.0, 0.0);
        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, Some(opponent), &StraightPath);
        let orders = brain.tick(&ctx, &mut rng);

        assert_eq!(orders.turn, None);
        assert!(orders.fire.is_some());
        assert_eq!(orders.drive, Some(KITE_DRIVE));
    }

    #[test]
    fn test_defense_tick_turns_before_firing() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = AiBrain::default();

        // Opponent due east while the nose points north.
        let opponent = Position::new(800.0, 0.0, 0.0);
        let ctx = make_context(Position::new(0.0, 0.0, 0.0), 0.0, Some(opponent), &StraightPath);
        let orders = brain.tick(&ctx, &mut rng);

        assert_eq!(orders.turn, Some(AI_TURN_RATE));
        assert_eq!(orders.fire, None);
        assert_eq!(orders.drive, Some(KITE_DRIVE));
    }

    // ---- Fire gating ----

    #[test]
    fn test_request_fire_enforces_min_delay() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut brain = AiBrain::default();
        let from = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(0.0, 1_000.0, 0.0);

        let first = brain.request_fire(from, target, 10.0, &mut rng);
        assert!(first.is_some());

        // Immediately after: inside the re-rolled delay window.
        let second = brain.request_fire(from, target, 10.0, &mut rng);
        assert!(second.is_none());

        // Past the maximum possible delay: granted again.
        let third = brain.request_fire(from, target, 10.0 + AI_SHOT_DELAY_MAX_SECS + 0.01, &mut rng);
        assert!(third.is_some());
    }

    #[test]
    fn test_request_fire_charge_maps_distance() {
        let mut rng = StdRng::seed_from_u64(7);
        let from = Position::new(0.0, 0.0, 0.0);

        // Point blank clamps to the weakest charge.
        let mut brain = AiBrain::default();
        let near = brain
            .request_fire(from, Position::new(0.0, POWER_DISTANCE_MIN, 0.0), 10.0, &mut rng)
            .unwrap();
        assert!((near.charge - AI_CHARGE_MIN).abs() < 1e-10);

        // Beyond the mapping range clamps to the strongest charge.
        let mut brain = AiBrain::default();
        let far = brain
            .request_fire(from, Position::new(0.0, 9_000.0, 0.0), 10.0, &mut rng)
            .unwrap();
        assert!((far.charge - AI_CHARGE_MAX).abs() < 1e-10);
    }

    #[test]
    fn test_request_fire_rerolls_delay_within_bounds() {
        let from = Position::new(0.0, 0.0, 0.0);
        let target = Position::new(0.0, 9_000.0, 0.0);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut brain = AiBrain::default();
            brain.request_fire(from, target, 10.0, &mut rng).unwrap();
            assert!(brain.min_shot_delay <= AI_SHOT_DELAY_MAX_SECS);
            assert!(brain.min_shot_delay >= AI_SHOT_DELAY_FLOOR_MIN);
        }
    }
}

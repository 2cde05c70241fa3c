//! Unit tests for nav-agent.

#[cfg(test)]
mod movement {
    use nav_core::WorldPoint;

    use crate::Movement;

    #[test]
    fn command_then_assign() {
        let mut m = Movement::new(50.0, 2.0);
        assert!(!m.wants_to_move());

        m.command_move(WorldPoint::new(100.0, 0.0));
        assert!(m.wants_to_move());
        assert!(!m.has_path());

        m.assign_path(vec![WorldPoint::new(50.0, 0.0), WorldPoint::new(100.0, 0.0)]);
        assert_eq!(m.current_waypoint(), Some(WorldPoint::new(50.0, 0.0)));
        assert_eq!(m.remaining().len(), 2);
    }

    #[test]
    fn new_command_drops_old_path() {
        let mut m = Movement::default();
        m.command_move(WorldPoint::new(10.0, 0.0));
        m.assign_path(vec![WorldPoint::new(10.0, 0.0)]);
        m.command_move(WorldPoint::new(0.0, 10.0));
        assert!(!m.has_path());
        assert_eq!(m.target, Some(WorldPoint::new(0.0, 10.0)));
    }

    #[test]
    fn stop_clears_intent() {
        let mut m = Movement::default();
        m.command_move(WorldPoint::new(10.0, 0.0));
        m.assign_path(vec![WorldPoint::new(10.0, 0.0)]);
        m.stop();
        assert!(!m.moving);
        assert!(m.target.is_none());
        assert!(m.remaining().is_empty());
        assert_eq!(m.velocity, WorldPoint::ZERO);
    }

    #[test]
    fn empty_path_is_not_moving() {
        let mut m = Movement::default();
        m.command_move(WorldPoint::new(10.0, 0.0));
        m.assign_path(Vec::new());
        assert!(!m.moving);
    }
}

#[cfg(test)]
mod steering {
    use nav_core::WorldPoint;

    use crate::{Movement, SteerOutcome, steer};

    fn following(path: Vec<WorldPoint>) -> Movement {
        let mut m = Movement::new(10.0, 1.0);
        m.command_move(*path.last().unwrap());
        m.assign_path(path);
        m
    }

    #[test]
    fn idle_without_path() {
        let mut m = Movement::default();
        assert_eq!(steer(&mut m, WorldPoint::ZERO, 1.0), SteerOutcome::Idle);
    }

    #[test]
    fn moves_at_speed() {
        let mut m = following(vec![WorldPoint::new(100.0, 0.0)]);
        let out = steer(&mut m, WorldPoint::ZERO, 0.5);
        assert_eq!(out, SteerOutcome::Moved(WorldPoint::new(5.0, 0.0)));
        assert_eq!(m.velocity, WorldPoint::new(10.0, 0.0));
        assert_eq!(m.heading, 0.0);
    }

    #[test]
    fn never_overshoots() {
        let mut m = following(vec![WorldPoint::new(3.0, 0.0)]);
        let out = steer(&mut m, WorldPoint::ZERO, 10.0);
        assert_eq!(out, SteerOutcome::Moved(WorldPoint::new(3.0, 0.0)));
    }

    #[test]
    fn reaching_waypoints_advances_then_arrives() {
        let a = WorldPoint::new(10.0, 0.0);
        let b = WorldPoint::new(10.0, 10.0);
        let mut m = following(vec![a, b]);

        assert_eq!(steer(&mut m, a, 0.1), SteerOutcome::WaypointReached);
        assert_eq!(m.current_waypoint(), Some(b));

        let out = steer(&mut m, a, 0.1);
        assert_eq!(out, SteerOutcome::Moved(WorldPoint::new(10.0, 1.0)));
        assert!((m.heading - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

        assert_eq!(steer(&mut m, WorldPoint::new(10.0, 9.5), 0.1), SteerOutcome::Arrived);
        assert!(!m.moving);
        assert!(m.target.is_none());
    }

    #[test]
    fn bad_dt_does_not_move() {
        let mut m = following(vec![WorldPoint::new(100.0, 0.0)]);
        assert_eq!(steer(&mut m, WorldPoint::ZERO, f32::NAN), SteerOutcome::Moved(WorldPoint::ZERO));
        assert_eq!(steer(&mut m, WorldPoint::ZERO, -1.0), SteerOutcome::Moved(WorldPoint::ZERO));
    }
}

#[cfg(test)]
mod store {
    use nav_core::{AgentId, NavError, WorldPoint};

    use crate::{AgentKind, AgentSpec, AgentStore, AgentWorld, Capabilities};

    #[test]
    fn spawn_assigns_sequential_ids() {
        let mut s = AgentStore::new();
        let a = s.spawn(AgentSpec::unit(WorldPoint::new(1.0, 1.0), 5.0));
        let b = s.spawn(AgentSpec::building(WorldPoint::new(9.0, 9.0), 4.0, 4.0));
        assert_eq!((a, b), (AgentId(0), AgentId(1)));
        assert_eq!(s.count, 2);
        assert_eq!(s.kind(b), Some(AgentKind::Building { width: 4.0, height: 4.0 }));
    }

    #[test]
    fn buildings_have_no_movement() {
        let mut s = AgentStore::new();
        let b = s.spawn(AgentSpec::building(WorldPoint::ZERO, 4.0, 4.0));
        assert!(s.movement(b).is_none());
        assert!(s.movement_mut(b).is_none());
    }

    #[test]
    fn agent_builder_sets_fields() {
        let mut s = AgentStore::new();
        let u = s.spawn(
            AgentSpec::unit(WorldPoint::ZERO, 5.0)
                .speed(42.0)
                .arrival_distance(3.0)
                .selected(true)
                .combat(true),
        );
        let m = s.movement(u).unwrap();
        assert_eq!(m.speed, 42.0);
        assert_eq!(m.arrival_distance, 3.0);
        assert_eq!(s.capabilities(u), Capabilities { selected: true, combat: true });
    }

    #[test]
    fn despawn_hides_agent() {
        let mut s = AgentStore::new();
        let a = s.spawn(AgentSpec::unit(WorldPoint::ZERO, 5.0));
        let b = s.spawn(AgentSpec::unit(WorldPoint::ZERO, 5.0));
        s.despawn(a).unwrap();

        assert!(!s.is_active(a));
        assert!(s.position(a).is_none());
        assert_eq!(s.capabilities(a), Capabilities::default());
        assert!(matches!(s.despawn(a), Err(NavError::AgentInactive(_))));
        assert!(matches!(s.despawn(AgentId(9)), Err(NavError::AgentNotFound(_))));

        let mut ids = Vec::new();
        s.active_agents(&mut ids);
        assert_eq!(ids, vec![b]);
        assert_eq!(s.active_count(), 1);
    }

    #[test]
    fn set_position_ignores_inactive() {
        let mut s = AgentStore::new();
        let a = s.spawn(AgentSpec::unit(WorldPoint::ZERO, 5.0));
        s.set_position(a, WorldPoint::new(3.0, 4.0));
        assert_eq!(s.position(a), Some(WorldPoint::new(3.0, 4.0)));
        s.despawn(a).unwrap();
        s.set_position(a, WorldPoint::new(9.0, 9.0));
        assert_eq!(s.position[a.index()], WorldPoint::new(3.0, 4.0));
    }
}

//! Unit tests for nav-schedule.

#[cfg(test)]
mod helpers {
    use nav_core::GridCoord;

    use crate::CacheKey;

    pub fn key(a: i32, b: i32) -> CacheKey {
        CacheKey::new(GridCoord::new(a, a), GridCoord::new(b, b))
    }
}

// ── RequestQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use nav_core::{AgentId, RequestId, Tick, WorldPoint};

    use super::helpers::key;
    use crate::{EnqueueOutcome, RequestQueue};

    fn push(q: &mut RequestQueue, agent: u32, priority: f32) -> EnqueueOutcome {
        q.push(AgentId(agent), WorldPoint::ZERO, priority, Tick::ZERO, key(0, 1))
    }

    #[test]
    fn pops_by_priority() {
        let mut q = RequestQueue::default();
        push(&mut q, 0, 1.0);
        push(&mut q, 1, 11.0);
        push(&mut q, 2, 6.0);
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|r| r.agent.0).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_are_fifo() {
        let mut q = RequestQueue::default();
        for a in 0..5 {
            push(&mut q, a, 3.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| q.pop()).map(|r| r.agent.0).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn leftovers_keep_order_across_drains() {
        let mut q = RequestQueue::default();
        for a in 0..4 {
            push(&mut q, a, 2.0);
        }
        assert_eq!(q.pop().map(|r| r.agent), Some(AgentId(0)));
        q.finish(AgentId(0));
        push(&mut q, 9, 2.0);
        let rest: Vec<_> = std::iter::from_fn(|| q.pop()).map(|r| r.agent.0).collect();
        assert_eq!(rest, vec![1, 2, 3, 9]);
    }

    #[test]
    fn duplicates_rejected_until_finished() {
        let mut q = RequestQueue::default();
        assert_eq!(push(&mut q, 7, 1.0), EnqueueOutcome::Queued(RequestId(0)));
        assert_eq!(push(&mut q, 7, 50.0), EnqueueOutcome::Duplicate);
        assert_eq!(q.len(), 1);

        q.pop();
        // Popped but unresolved: still in flight.
        assert_eq!(push(&mut q, 7, 1.0), EnqueueOutcome::Duplicate);
        assert!(q.finish(AgentId(7)));
        assert_eq!(push(&mut q, 7, 1.0), EnqueueOutcome::Queued(RequestId(1)));
    }

    #[test]
    fn bounded_queue_rejects_overflow() {
        let mut q = RequestQueue::new(Some(2));
        push(&mut q, 0, 1.0);
        push(&mut q, 1, 1.0);
        assert_eq!(push(&mut q, 2, 100.0), EnqueueOutcome::Full);
        assert_eq!(q.rejected(), 1);
        assert!(!q.is_in_flight(AgentId(2)));
    }

    #[test]
    fn remove_agent_drops_request_and_marker() {
        let mut q = RequestQueue::default();
        push(&mut q, 0, 1.0);
        push(&mut q, 1, 2.0);
        assert!(q.remove_agent(AgentId(1)));
        assert_eq!(q.len(), 1);
        assert!(!q.is_in_flight(AgentId(1)));
        assert_eq!(q.peek().map(|r| r.agent), Some(AgentId(0)));
        assert!(!q.remove_agent(AgentId(1)));
    }
}

// ── PathCache ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cache {
    use nav_core::WorldPoint;

    use super::helpers::key;
    use crate::PathCache;

    fn path(n: usize) -> Vec<WorldPoint> {
        (0..n).map(|i| WorldPoint::new(i as f32, 0.0)).collect()
    }

    #[test]
    fn hit_within_ttl() {
        let mut c = PathCache::new(10, 5.0);
        c.insert(key(0, 1), path(3), 0.0);
        assert_eq!(c.get(&key(0, 1), 4.9).map(<[_]>::len), Some(3));
        assert_eq!(c.hits(), 1);
        assert_eq!(c.misses(), 0);
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let mut c = PathCache::new(10, 5.0);
        c.insert(key(0, 1), path(3), 0.0);
        assert!(c.get(&key(0, 1), 5.0).is_none());
        assert_eq!(c.misses(), 1);
        assert!(c.is_empty());
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut c = PathCache::new(2, 100.0);
        c.insert(key(0, 1), path(1), 0.0);
        c.insert(key(0, 2), path(1), 1.0);
        c.insert(key(0, 3), path(1), 2.0);
        assert_eq!(c.len(), 2);
        assert_eq!(c.evictions(), 1);
        assert!(!c.contains(&key(0, 1), 2.0));
        assert!(c.contains(&key(0, 3), 2.0));
    }

    #[test]
    fn reinsert_refreshes_age() {
        let mut c = PathCache::new(2, 100.0);
        c.insert(key(0, 1), path(1), 0.0);
        c.insert(key(0, 2), path(1), 1.0);
        c.insert(key(0, 1), path(2), 2.0);
        c.insert(key(0, 3), path(1), 3.0);
        // key(0,2) is now the oldest.
        assert!(c.contains(&key(0, 1), 3.0));
        assert!(!c.contains(&key(0, 2), 3.0));
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut c = PathCache::new(7, 100.0);
        for i in 0..100 {
            c.insert(key(0, i), path(1), i as f64);
            assert!(c.len() <= 7);
        }
    }

    #[test]
    fn zero_capacity_disables() {
        let mut c = PathCache::new(0, 100.0);
        c.insert(key(0, 1), path(1), 0.0);
        assert!(c.is_empty());
    }

    #[test]
    fn sweep_drops_only_expired() {
        let mut c = PathCache::new(10, 5.0);
        c.insert(key(0, 1), path(1), 0.0);
        c.insert(key(0, 2), path(1), 3.0);
        assert_eq!(c.sweep_expired(6.0), 1);
        assert!(c.contains(&key(0, 2), 6.0));
        // Freed order slot: a later insert does not evict the survivor early.
        c.insert(key(0, 3), path(1), 6.0);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn invalidate_and_hit_rate() {
        let mut c = PathCache::new(10, 5.0);
        c.insert(key(0, 1), path(1), 0.0);
        assert!(c.invalidate(&key(0, 1)));
        assert!(!c.invalidate(&key(0, 1)));
        assert_eq!(c.hit_rate(), 0.0);
        c.insert(key(0, 1), path(1), 0.0);
        c.get(&key(0, 1), 0.0);
        c.get(&key(0, 9), 0.0);
        assert_eq!(c.hit_rate(), 0.5);
    }
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod spatial {
    use nav_core::{AgentId, GridCoord, WorldPoint};

    use crate::{ScheduleError, SpatialIndex};

    #[test]
    fn rejects_bad_cell_size() {
        assert!(matches!(SpatialIndex::new(0.0), Err(ScheduleError::InvalidCellSize(_))));
    }

    #[test]
    fn update_reports_bucket_changes() {
        let mut idx = SpatialIndex::new(100.0).unwrap();
        let a = AgentId(1);
        assert!(idx.update(a, WorldPoint::new(10.0, 10.0)));
        assert!(!idx.update(a, WorldPoint::new(90.0, 10.0)));
        assert_eq!(idx.position(a), Some(WorldPoint::new(90.0, 10.0)));
        assert!(idx.update(a, WorldPoint::new(110.0, 10.0)));
        assert_eq!(idx.bucket(a), Some(GridCoord::new(1, 0)));
        assert_eq!(idx.bucket_count(), 1);
    }

    #[test]
    fn radius_query_filters_by_distance() {
        let mut idx = SpatialIndex::new(50.0).unwrap();
        idx.update(AgentId(3), WorldPoint::new(0.0, 0.0));
        idx.update(AgentId(1), WorldPoint::new(30.0, 40.0));
        idx.update(AgentId(2), WorldPoint::new(60.0, 0.0));
        idx.update(AgentId(4), WorldPoint::new(500.0, 500.0));
        assert_eq!(idx.query_radius(WorldPoint::ZERO, 50.0), vec![AgentId(1), AgentId(3)]);
        assert!(idx.query_radius(WorldPoint::ZERO, -1.0).is_empty());
    }

    #[test]
    fn huge_radius_scans_everything() {
        let mut idx = SpatialIndex::new(10.0).unwrap();
        for i in 0..5 {
            idx.update(AgentId(i), WorldPoint::new(i as f32 * 1000.0, 0.0));
        }
        assert_eq!(idx.query_radius(WorldPoint::ZERO, 1.0e7).len(), 5);
    }

    #[test]
    fn remove_empties_bucket() {
        let mut idx = SpatialIndex::new(10.0).unwrap();
        idx.update(AgentId(0), WorldPoint::new(5.0, 5.0));
        assert!(idx.remove(AgentId(0)));
        assert!(!idx.remove(AgentId(0)));
        assert!(idx.is_empty());
        assert_eq!(idx.bucket_count(), 0);
    }

    #[test]
    fn matches_brute_force() {
        let mut rng = nav_core::SimRng::new(5);
        let mut idx = SpatialIndex::new(64.0).unwrap();
        let mut pos = vec![WorldPoint::ZERO; 40];
        for _ in 0..5 {
            for (i, p) in pos.iter_mut().enumerate() {
                *p = rng.point_in(1000.0, 1000.0);
                idx.update(AgentId(i as u32), *p);
            }
            let c = rng.point_in(1000.0, 1000.0);
            let expected: Vec<_> = (0..40u32)
                .filter(|&i| pos[i as usize].distance_sq(c) <= 200.0 * 200.0)
                .map(AgentId)
                .collect();
            assert_eq!(idx.query_radius(c, 200.0), expected);
        }
    }
}

// ── Priority ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod priority {
    use nav_agent::Capabilities;
    use nav_core::WorldPoint;

    use crate::PriorityWeights;

    #[test]
    fn flags_add_bonuses() {
        let w = PriorityWeights::default();
        let p = WorldPoint::ZERO;
        let plain = w.score(Capabilities::default(), p, None);
        let sel = w.score(Capabilities { selected: true, combat: false }, p, None);
        let both = w.score(Capabilities { selected: true, combat: true }, p, None);
        assert_eq!(plain, 1.0);
        assert_eq!(sel, 11.0);
        assert_eq!(both, 16.0);
    }

    #[test]
    fn closer_to_viewport_scores_higher() {
        let w = PriorityWeights::default();
        let caps = Capabilities::default();
        let view = Some(WorldPoint::new(500.0, 500.0));
        let near = w.score(caps, WorldPoint::new(510.0, 500.0), view);
        let far = w.score(caps, WorldPoint::new(1500.0, 500.0), view);
        assert!(near > far);
        assert!(far > 1.0);
        // At the centre the full bonus applies.
        assert_eq!(w.score(caps, WorldPoint::new(500.0, 500.0), view), 6.0);
    }
}

// ── Maintenance ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod maintenance {
    use nav_core::{SimRng, Tick};

    use crate::{MaintenanceSchedule, MaintenanceTimer, ScheduleError};

    #[test]
    fn every_fires_on_stride() {
        let t = MaintenanceTimer::new(MaintenanceSchedule::Every { interval: 10 });
        let mut rng = SimRng::new(0);
        let fired: Vec<u64> = (0..30).filter(|&k| t.due(Tick(k), 0, &mut rng)).collect();
        assert_eq!(fired, vec![0, 10, 20]);
    }

    #[test]
    fn salt_staggers() {
        let t = MaintenanceTimer::new(MaintenanceSchedule::Every { interval: 4 });
        let mut rng = SimRng::new(0);
        let due: Vec<u64> = (0..4).filter(|&salt| t.due(Tick(5), salt, &mut rng)).collect();
        assert_eq!(due, vec![3]);
    }

    #[test]
    fn sampled_rate_is_roughly_right() {
        let t = MaintenanceTimer::new(MaintenanceSchedule::Sampled { probability: 0.1 });
        let mut rng = SimRng::new(42);
        let n = (0..10_000).filter(|&k| t.due(Tick(k), 0, &mut rng)).count();
        assert!((800..1200).contains(&n), "{n}");
    }

    #[test]
    fn never_and_validation() {
        let mut rng = SimRng::new(0);
        assert!(!MaintenanceTimer::new(MaintenanceSchedule::Never).due(Tick(0), 0, &mut rng));
        assert!(matches!(
            MaintenanceSchedule::Every { interval: 0 }.validate(),
            Err(ScheduleError::ZeroInterval)
        ));
        assert!(matches!(
            MaintenanceSchedule::Sampled { probability: 1.5 }.validate(),
            Err(ScheduleError::InvalidProbability(_))
        ));
        assert!(MaintenanceSchedule::Every { interval: 10 }.validate().is_ok());
    }
}

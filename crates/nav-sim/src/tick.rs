//! The per-tick update: queue, movement, maintenance.

use std::time::Instant;

use log::{debug, trace};

use nav_agent::{AgentKind, AgentWorld, SteerOutcome, steer};
use nav_core::AgentId;
use nav_search::PathFinder;

use crate::observer::SchedulerObserver;
use crate::scheduler::PathfindingScheduler;

impl<F: PathFinder> PathfindingScheduler<F> {
    /// Advance the scheduler by one tick of `dt` simulated seconds.
    ///
    /// Returns the number of requests resolved this tick.
    pub fn update<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        dt: f32,
        observer: &mut O,
    ) -> usize {
        let tick_start = Instant::now();
        let processed = self.process_path_request_queue(world, observer, tick_start);

        let mut agents = std::mem::take(&mut self.scratch);
        agents.clear();
        world.active_agents(&mut agents);
        for &agent in &agents {
            self.update_agent(world, agent, dt, observer);
        }
        self.scratch = agents;

        let tick = self.clock.current_tick;
        if self.timers.cache_sweep.due(tick, 0, &mut self.rng) {
            self.cache.sweep_expired(self.clock.now_secs());
        }

        observer.on_tick_end(tick, processed);
        self.clock.advance(dt);
        processed
    }

    fn update_agent<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        agent: AgentId,
        dt: f32,
        observer: &mut O,
    ) {
        let Some(mut position) = world.position(agent) else { return };

        let outcome = world
            .movement_mut(agent)
            .filter(|m| m.has_path())
            .map(|m| steer(m, position, dt));
        let arrived = match outcome {
            Some(SteerOutcome::Moved(p)) => {
                position = p;
                world.set_position(agent, p);
                false
            }
            Some(SteerOutcome::Arrived) => {
                trace!("{agent} arrived at {position}");
                observer.on_agent_arrived(agent);
                true
            }
            _ => false,
        };

        self.spatial.update(agent, position);

        let Some(AgentKind::Unit { radius }) = world.kind(agent) else { return };
        let tick = self.clock.current_tick;
        let salt = agent.0 as u64;

        if arrived || self.timers.obstacle_refresh.due(tick, salt, &mut self.rng) {
            self.grid.update_dynamic_obstacle(agent, position, radius);
        }

        let has_path = world.movement(agent).is_some_and(|m| m.has_path());
        if has_path
            && self.timers.obstruction_check.due(tick, salt, &mut self.rng)
            && self.should_recalculate(world, agent)
        {
            self.recalculate(world, agent, observer);
        }
    }

    /// `true` when a cell on the straight lines through the agent's next
    /// `obstruction_lookahead` waypoints is blocked by something other than
    /// the agent itself.
    ///
    /// The cell the agent stands in is not checked.
    pub fn should_recalculate<W: AgentWorld>(&self, world: &W, agent: AgentId) -> bool {
        let (Some(position), Some(m)) = (world.position(agent), world.movement(agent)) else {
            return false;
        };
        let here = self.grid.world_to_grid(position);
        let mut from = here;
        for &waypoint in m.remaining().iter().take(self.config.obstruction_lookahead) {
            let to = self.grid.world_to_grid(waypoint);
            let blocked = self
                .grid
                .line_cells(from, to)
                .any(|c| c != here && !self.grid.is_walkable_for(c, agent));
            if blocked {
                return true;
            }
            from = to;
        }
        false
    }

    /// Drop the agent's current path and its cache entry, then request a new
    /// path to the same target.
    fn recalculate<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        agent: AgentId,
        observer: &mut O,
    ) {
        let Some(position) = world.position(agent) else { return };
        let Some(m) = world.movement_mut(agent) else { return };
        let Some(target) = m.target else { return };
        m.command_move(target);

        let key = self.cache_key(position, target);
        self.cache.invalidate(&key);
        self.counters.recalculations += 1;
        debug!("{agent}: path obstructed, re-requesting {target}");
        self.request_path(world, agent, observer);
    }
}

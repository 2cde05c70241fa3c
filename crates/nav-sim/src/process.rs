//! Request queue draining.
//!
//! # Blocking mode
//!
//! Requests are popped in priority order and each search runs to completion.
//! The count cap and the wall-clock budget are checked only between searches,
//! so one long search can overrun the budget; the node cap bounds it.
//!
//! # Incremental mode
//!
//! At most one search is live at a time.  Each tick it expands up to
//! `nodes_per_tick` nodes; a search that finishes early hands the remaining
//! node budget to the next request.
//!
//! A carried search is re-validated before every slice: it is dropped if the
//! agent was removed, halted, or given a different target by the host.  In
//! the last case a fresh request for the new target is queued.

use std::time::Instant;

use log::debug;

use nav_agent::AgentWorld;
use nav_core::{AgentId, WorldPoint};
use nav_schedule::PathRequest;
use nav_search::{Path, PathFinder, SearchResult, SearchSession, SearchStep};

use crate::config::SliceMode;
use crate::observer::SchedulerObserver;
use crate::scheduler::{ActiveSearch, PathfindingScheduler};

impl<F: PathFinder> PathfindingScheduler<F> {
    /// Drain queued requests for this tick.  Returns the number of requests
    /// resolved (path assigned or agent stopped).
    ///
    /// `tick_start` is the instant the wall-clock budget is measured from.
    pub fn process_path_request_queue<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        observer: &mut O,
        tick_start: Instant,
    ) -> usize {
        let processed = match self.config.slicing {
            SliceMode::Blocking => self.drain_blocking(world, observer, tick_start),
            SliceMode::Incremental { nodes_per_tick } => {
                self.drain_incremental(world, observer, tick_start, nodes_per_tick)
            }
        };
        self.counters.processed_last_tick = processed;
        processed
    }

    fn drain_blocking<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        observer: &mut O,
        tick_start: Instant,
    ) -> usize {
        let budget = self.config.time_budget();
        let mut started = 0;
        while started < self.config.max_paths_per_tick && tick_start.elapsed() < budget {
            let Some(request) = self.queue.pop() else { break };
            let Some((start, target)) = self.prepare(world, &request) else { continue };
            started += 1;

            let agent = request.agent;
            let footprint = self.grid.take_dynamic_obstacle(agent);
            let t0 = Instant::now();
            let result = self.finder.find_path(&self.grid, start, target);
            self.counters.search_time += t0.elapsed();
            if let Some(fp) = footprint {
                self.grid.restore_dynamic_obstacle(agent, fp);
            }

            self.resolve(world, observer, agent, start, target, result);
        }
        started
    }

    fn drain_incremental<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        observer: &mut O,
        tick_start: Instant,
        nodes_per_tick: usize,
    ) -> usize {
        let budget = self.config.time_budget();
        let mut nodes_left = nodes_per_tick;
        let mut started = 0;
        let mut resolved = 0;

        while nodes_left > 0 && tick_start.elapsed() < budget {
            if self.active.is_none() {
                if started >= self.config.max_paths_per_tick {
                    break;
                }
                let Some(request) = self.queue.pop() else { break };
                let Some((start, target)) = self.prepare(world, &request) else { continue };
                started += 1;

                let agent = request.agent;
                let footprint = self.grid.take_dynamic_obstacle(agent);
                let t0 = Instant::now();
                let begun = self.finder.begin(&self.grid, start, target);
                self.counters.search_time += t0.elapsed();
                if let Some(fp) = footprint {
                    self.grid.restore_dynamic_obstacle(agent, fp);
                }

                match begun {
                    Ok(session) => {
                        self.active = Some(ActiveSearch { agent, start, target, session });
                    }
                    Err(err) => {
                        self.resolve(world, observer, agent, start, target, Err(err));
                        resolved += 1;
                        continue;
                    }
                }
            }

            let Some(mut active) = self.active.take() else { break };
            let current = current_target(world, active.agent);
            if current != Some(active.target) {
                debug!("{}: dropping search to {}", active.agent, active.target);
                self.queue.finish(active.agent);
                if current.is_some() {
                    self.request_path(world, active.agent, observer);
                }
                continue;
            }

            let footprint = self.grid.take_dynamic_obstacle(active.agent);
            let before = active.session.nodes_expanded();
            let t0 = Instant::now();
            let step = active.session.advance(&self.grid, nodes_left);
            self.counters.search_time += t0.elapsed();
            if let Some(fp) = footprint {
                self.grid.restore_dynamic_obstacle(active.agent, fp);
            }
            let used = active.session.nodes_expanded().saturating_sub(before);
            nodes_left = nodes_left.saturating_sub(used.max(1));

            let result = match step {
                Ok(SearchStep::Pending) => {
                    self.active = Some(active);
                    continue;
                }
                Ok(SearchStep::Complete(path)) => Ok(path),
                Err(err) => Err(err),
            };
            let ActiveSearch { agent, start, target, .. } = active;
            self.resolve(world, observer, agent, start, target, result);
            resolved += 1;
        }
        resolved
    }

    /// Position and current target of a popped request's agent, or `None`
    /// (with the in-flight marker cleared) when it no longer needs a path.
    fn prepare<W: AgentWorld>(
        &mut self,
        world: &W,
        request: &PathRequest,
    ) -> Option<(WorldPoint, WorldPoint)> {
        let agent = request.agent;
        let wanted = world.position(agent).zip(current_target(world, agent));
        if wanted.is_none() {
            self.queue.finish(agent);
        }
        wanted
    }

    /// Write a search result to the agent and the cache.
    fn resolve<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        observer: &mut O,
        agent: AgentId,
        start: WorldPoint,
        target: WorldPoint,
        result: SearchResult<Path>,
    ) {
        self.queue.finish(agent);
        self.counters.searches += 1;
        match result {
            Ok(path) => {
                let mut waypoints = path.waypoints;
                let here = self.grid.world_to_grid(start);
                if waypoints.len() > 1
                    && waypoints
                        .first()
                        .is_some_and(|&w| self.grid.world_to_grid(w) == here)
                {
                    waypoints.remove(0);
                }
                let key = self.cache_key(start, target);
                self.cache.insert(key, waypoints.clone(), self.clock.now_secs());
                observer.on_path_assigned(agent, &waypoints);
                if let Some(m) = world.movement_mut(agent) {
                    m.assign_path(waypoints);
                }
            }
            Err(err) => {
                debug!("{agent}: no path to {target}: {err}");
                self.counters.failures += 1;
                observer.on_path_failed(agent, &err);
                if let Some(m) = world.movement_mut(agent) {
                    m.stop();
                }
            }
        }
    }
}

/// Target of an active agent that still wants to move.
fn current_target<W: AgentWorld>(world: &W, agent: AgentId) -> Option<WorldPoint> {
    if !world.is_active(agent) {
        return None;
    }
    world.movement(agent).filter(|m| m.wants_to_move()).and_then(|m| m.target)
}

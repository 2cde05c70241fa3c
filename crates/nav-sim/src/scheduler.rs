//! The `PathfindingScheduler` struct: state, requests, lifecycle hooks.
//!
//! Queue draining lives in `process.rs`; the per-tick loop in `tick.rs`.

use std::time::Duration;

use log::debug;

use nav_agent::{AgentKind, AgentWorld};
use nav_core::{AgentId, NavError, SimClock, SimRng, Tick, WorldPoint};
use nav_grid::NavigationGrid;
use nav_schedule::{
    CacheKey, EnqueueOutcome, MaintenanceTimer, PathCache, RequestQueue, SpatialIndex,
};
use nav_search::{PathFinder, PathSearch};

use crate::config::SchedulerConfig;
use crate::error::{SchedulerError, SchedulerResult};
use crate::observer::SchedulerObserver;
use crate::stats::SchedulerStats;

// ── RequestOutcome ────────────────────────────────────────────────────────────

/// What [`PathfindingScheduler::request_path`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A fresh cached path was assigned immediately.
    CacheHit,
    Queued,
    /// The agent already has a request in flight.
    AlreadyQueued,
    /// The queue is full.
    Rejected,
    /// The agent is unknown, cannot move, or has no target.
    Ignored,
}

// ── Internal state ────────────────────────────────────────────────────────────

/// A search carried across ticks in incremental mode.
pub(crate) struct ActiveSearch<S> {
    pub agent:   AgentId,
    pub start:   WorldPoint,
    pub target:  WorldPoint,
    pub session: S,
}

#[derive(Default)]
pub(crate) struct Counters {
    pub searches:       u64,
    pub failures:       u64,
    pub recalculations: u64,
    pub search_time:    Duration,
    pub processed_last_tick: usize,
}

pub(crate) struct Timers {
    pub obstacle_refresh:  MaintenanceTimer,
    pub cache_sweep:       MaintenanceTimer,
    pub obstruction_check: MaintenanceTimer,
}

// ── PathfindingScheduler ──────────────────────────────────────────────────────

/// Turns per-agent path needs into budgeted searches and drives path
/// following.
///
/// The scheduler owns the navigation grid, the path cache, the request queue
/// and the spatial index.  Agents stay with the host and are reached through
/// an [`AgentWorld`] passed into each call.
///
/// Per `update`:
///
/// 1. drain queued requests, highest priority first, bounded by
///    `max_paths_per_tick` and the wall-clock budget;
/// 2. advance every agent with a path, refresh the spatial index, and run
///    the staggered obstacle refresh and obstruction check;
/// 3. sweep expired cache entries when due.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct PathfindingScheduler<F: PathFinder = PathSearch> {
    pub(crate) config:   SchedulerConfig,
    pub(crate) grid:     NavigationGrid,
    pub(crate) finder:   F,
    pub(crate) queue:    RequestQueue,
    pub(crate) cache:    PathCache,
    pub(crate) spatial:  SpatialIndex,
    pub(crate) clock:    SimClock,
    pub(crate) rng:      SimRng,
    pub(crate) timers:   Timers,
    pub(crate) viewport: Option<WorldPoint>,
    pub(crate) active:   Option<ActiveSearch<F::Session>>,
    pub(crate) counters: Counters,
    /// Reused agent-id buffer for the per-tick pass.
    pub(crate) scratch:  Vec<AgentId>,
}

impl<F: PathFinder> PathfindingScheduler<F> {
    pub(crate) fn from_parts(
        config: SchedulerConfig,
        grid: NavigationGrid,
        finder: F,
        viewport: Option<WorldPoint>,
    ) -> SchedulerResult<Self> {
        config.validate()?;
        let spatial = SpatialIndex::new(config.spatial_cell_size)?;
        Ok(Self {
            queue: RequestQueue::new(config.max_queue_len),
            cache: PathCache::new(config.cache_capacity, config.cache_ttl_secs),
            spatial,
            clock: SimClock::new(),
            rng: SimRng::new(config.seed),
            timers: Timers {
                obstacle_refresh:  MaintenanceTimer::new(config.obstacle_refresh),
                cache_sweep:       MaintenanceTimer::new(config.cache_sweep),
                obstruction_check: MaintenanceTimer::new(config.obstruction_check),
            },
            viewport,
            active: None,
            counters: Counters::default(),
            scratch: Vec::new(),
            config,
            grid,
            finder,
        })
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Ask for a path from `agent`'s position to its movement target.
    ///
    /// A fresh cache entry is assigned on the spot, replacing any request or
    /// search already pending for the agent.  Otherwise the request is queued
    /// with a priority score unless the agent already has one in flight.
    pub fn request_path<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        agent: AgentId,
        observer: &mut O,
    ) -> RequestOutcome {
        let Some(position) = world.position(agent) else { return RequestOutcome::Ignored };
        let Some(target) = world.movement(agent).and_then(|m| m.target) else {
            return RequestOutcome::Ignored;
        };

        let key = self.cache_key(position, target);
        if let Some(cached) = self.cache.get(&key, self.clock.now_secs()) {
            let path = cached.to_vec();
            self.queue.remove_agent(agent);
            self.cancel_active(agent);
            observer.on_path_assigned(agent, &path);
            if let Some(m) = world.movement_mut(agent) {
                m.assign_path(path);
            }
            return RequestOutcome::CacheHit;
        }

        let priority = self
            .config
            .priority
            .score(world.capabilities(agent), position, self.viewport);
        match self.queue.push(agent, target, priority, self.clock.current_tick, key) {
            EnqueueOutcome::Queued(_) => RequestOutcome::Queued,
            EnqueueOutcome::Duplicate => RequestOutcome::AlreadyQueued,
            EnqueueOutcome::Full => RequestOutcome::Rejected,
        }
    }

    /// Order `agent` to move to `target` and request a path.
    ///
    /// Cancels a search already running for `agent` in incremental mode; a
    /// request still waiting in the queue is kept and will use the new
    /// target.
    pub fn command_move<W: AgentWorld, O: SchedulerObserver>(
        &mut self,
        world: &mut W,
        agent: AgentId,
        target: WorldPoint,
        observer: &mut O,
    ) -> SchedulerResult<RequestOutcome> {
        if !world.is_active(agent) {
            return Err(NavError::AgentNotFound(agent).into());
        }
        let Some(m) = world.movement_mut(agent) else {
            return Err(SchedulerError::NotMobile(agent));
        };
        m.command_move(target);
        if self.cancel_active(agent) {
            self.queue.finish(agent);
        }
        Ok(self.request_path(world, agent, observer))
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Register a newly spawned agent: buildings become static obstacles,
    /// units dynamic ones.
    pub fn on_agent_added<W: AgentWorld>(&mut self, world: &W, agent: AgentId) -> SchedulerResult<()> {
        let (Some(kind), Some(p)) = (world.kind(agent), world.position(agent)) else {
            return Err(NavError::AgentNotFound(agent).into());
        };
        match kind {
            AgentKind::Building { width, height } => {
                self.grid
                    .add_static_obstacle(p.x - width / 2.0, p.y - height / 2.0, width, height);
            }
            AgentKind::Unit { radius } => {
                self.grid.add_dynamic_obstacle(agent, p, radius);
            }
        }
        self.spatial.update(agent, p);
        debug!("{agent} added ({kind:?}) at {p}");
        Ok(())
    }

    /// Forget an agent: its dynamic obstacle, queued request, in-flight
    /// marker, running search, and spatial entry.  Building cells stay
    /// blocked.
    pub fn on_agent_removed(&mut self, agent: AgentId) {
        self.grid.remove_dynamic_obstacle(agent);
        self.queue.remove_agent(agent);
        self.spatial.remove(agent);
        self.cancel_active(agent);
        debug!("{agent} removed");
    }

    /// Drop the incremental search running for `agent`, if any.
    fn cancel_active(&mut self, agent: AgentId) -> bool {
        let running = self.active.as_ref().is_some_and(|a| a.agent == agent);
        if running {
            self.active = None;
        }
        running
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Read-only grid for renderers and queries.
    pub fn grid(&self) -> &NavigationGrid {
        &self.grid
    }

    /// Mutable grid, for map setup (terrain, pre-placed walls).
    pub fn grid_mut(&mut self) -> &mut NavigationGrid {
        &mut self.grid
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    /// Reference point for the distance term of request priority.
    pub fn set_viewport_center(&mut self, center: Option<WorldPoint>) {
        self.viewport = center;
    }

    pub fn viewport_center(&self) -> Option<WorldPoint> {
        self.viewport
    }

    /// Agents whose last indexed position is within `radius` of `center`.
    pub fn agents_in_radius(&self, center: WorldPoint, radius: f32) -> Vec<AgentId> {
        self.spatial.query_radius(center, radius)
    }

    /// `true` while an incremental search is carried over to the next tick.
    pub fn has_active_search(&self) -> bool {
        self.active.is_some()
    }

    pub fn stats(&self) -> SchedulerStats {
        let c = &self.counters;
        SchedulerStats {
            tick:                self.clock.current_tick,
            cache_hits:          self.cache.hits(),
            cache_misses:        self.cache.misses(),
            cache_entries:       self.cache.len(),
            cache_evictions:     self.cache.evictions(),
            queue_len:           self.queue.len(),
            in_flight:           self.queue.in_flight_len(),
            rejected:            self.queue.rejected(),
            searches:            c.searches,
            failures:            c.failures,
            recalculations:      c.recalculations,
            avg_search_time:     if c.searches == 0 {
                Duration::ZERO
            } else {
                c.search_time.div_f64(c.searches as f64)
            },
            processed_last_tick: c.processed_last_tick,
            blocked_cells:       self.grid.blocked_cell_count(),
            occupancy:           self.grid.occupancy(),
            tracked_agents:      self.spatial.len(),
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    pub(crate) fn cache_key(&self, from: WorldPoint, to: WorldPoint) -> CacheKey {
        CacheKey::new(self.grid.world_to_grid(from), self.grid.world_to_grid(to))
    }
}

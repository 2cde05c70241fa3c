//! `nav-sim`: the pathfinding scheduler for the rts_nav framework.
//!
//! # Per-tick loop
//!
//! ```text
//! update(world, dt):
//!   ① Drain:    pop requests by priority while under max_paths_per_tick and
//!               the wall-clock budget; for each, lift the agent's own
//!               footprint, search, restore, assign or stop.
//!   ② Move:     steer every agent with a path toward its current waypoint.
//!   ③ Upkeep:   refresh spatial buckets; on staggered timers, move unit
//!               footprints and re-check upcoming waypoints for obstruction.
//!   ④ Sweep:    drop expired cache entries when due.
//! ```
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | `builder`    | [`SchedulerBuilder`]                             |
//! | `config`     | [`SchedulerConfig`], [`SliceMode`]               |
//! | `error`      | [`SchedulerError`], [`SchedulerResult`]          |
//! | `observer`   | [`SchedulerObserver`], [`NoopObserver`]          |
//! | `scheduler`  | [`PathfindingScheduler`], [`RequestOutcome`]     |
//! | `stats`      | [`SchedulerStats`]                               |
//!
//! # Cargo features
//!
//! | Feature | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all config types.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_agent::{AgentSpec, AgentStore};
//! use nav_core::WorldPoint;
//! use nav_sim::{NoopObserver, SchedulerBuilder, SchedulerConfig};
//!
//! let mut agents = AgentStore::new();
//! let mut scheduler = SchedulerBuilder::new(SchedulerConfig::default()).build()?;
//!
//! let unit = agents.spawn(AgentSpec::unit(WorldPoint::new(48.0, 48.0), 12.0));
//! scheduler.on_agent_added(&agents, unit)?;
//! scheduler.command_move(&mut agents, unit, WorldPoint::new(900.0, 600.0), &mut NoopObserver)?;
//!
//! for _ in 0..600 {
//!     scheduler.update(&mut agents, 1.0 / 60.0, &mut NoopObserver);
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod stats;

mod process;
mod tick;


pub use builder::SchedulerBuilder;
pub use config::{SchedulerConfig, SliceMode};
pub use error::{SchedulerError, SchedulerResult};
pub use observer::{NoopObserver, SchedulerObserver};
pub use scheduler::{PathfindingScheduler, RequestOutcome};
pub use stats::SchedulerStats;

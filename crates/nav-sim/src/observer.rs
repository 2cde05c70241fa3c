//! Scheduler observer trait for diagnostics and host integration.

use nav_core::{AgentId, Tick, WorldPoint};
use nav_search::SearchError;

/// Callbacks invoked by [`PathfindingScheduler`][crate::PathfindingScheduler]
/// as requests resolve and agents move.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: failure logger
///
/// ```rust,ignore
/// struct Failures(Vec<AgentId>);
///
/// impl SchedulerObserver for Failures {
///     fn on_path_failed(&mut self, agent: AgentId, _error: &SearchError) {
///         self.0.push(agent);
///     }
/// }
/// ```
pub trait SchedulerObserver {
    /// A path (search result or cache hit) was written to `agent`.
    fn on_path_assigned(&mut self, _agent: AgentId, _waypoints: &[WorldPoint]) {}

    /// The search for `agent` failed and the agent was stopped.
    fn on_path_failed(&mut self, _agent: AgentId, _error: &SearchError) {}

    /// `agent` reached its final waypoint.
    fn on_agent_arrived(&mut self, _agent: AgentId) {}

    /// Called at the end of each `update`.  `processed` is the number of
    /// requests taken off the queue this tick.
    fn on_tick_end(&mut self, _tick: Tick, _processed: usize) {}
}

/// A [`SchedulerObserver`] that does nothing.
pub struct NoopObserver;

impl SchedulerObserver for NoopObserver {}

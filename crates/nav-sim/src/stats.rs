//! Diagnostic snapshot.

use std::time::Duration;

use nav_core::Tick;

/// Point-in-time counters for monitoring.  Cumulative fields count from
/// scheduler construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchedulerStats {
    pub tick: Tick,

    pub cache_hits:      u64,
    pub cache_misses:    u64,
    pub cache_entries:   usize,
    pub cache_evictions: u64,

    /// Requests waiting in the queue.
    pub queue_len: usize,
    /// Agents with an unresolved request (queued or being searched).
    pub in_flight: usize,
    /// Requests refused because the queue was full.
    pub rejected:  u64,

    /// Searches resolved, successful or not.
    pub searches:       u64,
    pub failures:       u64,
    /// Paths re-requested after the obstruction check.
    pub recalculations: u64,
    pub avg_search_time: Duration,
    pub processed_last_tick: usize,

    pub blocked_cells: usize,
    pub occupancy:     f32,
    pub tracked_agents: usize,
}

impl std::fmt::Display for SchedulerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: cache {}/{} ({} entries), queue {} ({} in flight), {} searches, {} failed, \
             avg {:.3} ms, {:.1}% blocked",
            self.tick,
            self.cache_hits,
            self.cache_hits + self.cache_misses,
            self.cache_entries,
            self.queue_len,
            self.in_flight,
            self.searches,
            self.failures,
            self.avg_search_time.as_secs_f64() * 1000.0,
            self.occupancy * 100.0,
        )
    }
}

//! Scheduler configuration.

use std::time::Duration;

use nav_grid::GridConfig;
use nav_schedule::{MaintenanceSchedule, PriorityWeights};
use nav_search::SearchConfig;

use crate::error::{SchedulerError, SchedulerResult};

/// How searches are spread over ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum SliceMode {
    /// Each drained request runs its search to completion.  The time budget
    /// is checked only between searches.
    Blocking,
    /// One search at a time is carried across ticks, expanding at most
    /// `nodes_per_tick` nodes per tick in total.
    Incremental { nodes_per_tick: usize },
}

/// Everything the scheduler needs besides the agents themselves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchedulerConfig {
    pub grid:   GridConfig,
    pub search: SearchConfig,

    /// Requests drained per tick at most.
    pub max_paths_per_tick: usize,

    /// Wall-clock budget per tick for starting new searches, in milliseconds.
    pub time_budget_ms: f64,

    /// Lifetime of a cached path in simulated seconds.
    pub cache_ttl_secs: f64,
    pub cache_capacity: usize,

    /// `None` leaves the request queue unbounded.
    pub max_queue_len: Option<usize>,

    /// Bucket size of the agent spatial index, in world units.
    pub spatial_cell_size: f32,

    /// When a unit's dynamic obstacle is moved to its current position.
    pub obstacle_refresh: MaintenanceSchedule,
    /// When expired cache entries are swept.
    pub cache_sweep: MaintenanceSchedule,
    /// When a moving unit's upcoming waypoints are checked for obstruction.
    pub obstruction_check: MaintenanceSchedule,
    /// Waypoints ahead of the cursor inspected by the obstruction check.
    pub obstruction_lookahead: usize,

    pub slicing:  SliceMode,
    pub priority: PriorityWeights,

    /// Seed for `MaintenanceSchedule::Sampled`.
    pub seed: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            grid:                  GridConfig::default(),
            search:                SearchConfig::default(),
            max_paths_per_tick:    3,
            time_budget_ms:        8.0,
            cache_ttl_secs:        5.0,
            cache_capacity:        500,
            max_queue_len:         Some(1024),
            spatial_cell_size:     128.0,
            obstacle_refresh:      MaintenanceSchedule::Every { interval: 10 },
            cache_sweep:           MaintenanceSchedule::Every { interval: 10 },
            obstruction_check:     MaintenanceSchedule::Every { interval: 15 },
            obstruction_lookahead: 3,
            slicing:               SliceMode::Blocking,
            priority:              PriorityWeights::default(),
            seed:                  0,
        }
    }
}

impl SchedulerConfig {
    /// The per-tick wall-clock budget.  Budgets too large for a `Duration`
    /// saturate to `Duration::MAX`.
    pub fn time_budget(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_budget_ms.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
    }

    /// Reject settings that would make the scheduler useless or panic.
    pub fn validate(&self) -> SchedulerResult<()> {
        if self.max_paths_per_tick == 0 {
            return Err(SchedulerError::Config("max_paths_per_tick must be non-zero".into()));
        }
        if !(self.time_budget_ms.is_finite() && self.time_budget_ms >= 0.0) {
            return Err(SchedulerError::Config(format!(
                "time_budget_ms must be finite and non-negative (got {})",
                self.time_budget_ms
            )));
        }
        if !(self.cache_ttl_secs.is_finite() && self.cache_ttl_secs >= 0.0) {
            return Err(SchedulerError::Config(format!(
                "cache_ttl_secs must be finite and non-negative (got {})",
                self.cache_ttl_secs
            )));
        }
        if let SliceMode::Incremental { nodes_per_tick: 0 } = self.slicing {
            return Err(SchedulerError::Config("nodes_per_tick must be non-zero".into()));
        }
        self.obstacle_refresh.validate()?;
        self.cache_sweep.validate()?;
        self.obstruction_check.validate()?;
        Ok(())
    }
}

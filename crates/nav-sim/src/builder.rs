//! Fluent builder for constructing a [`PathfindingScheduler`].

use nav_core::WorldPoint;
use nav_grid::NavigationGrid;
use nav_search::{PathFinder, PathSearch};

use crate::config::SchedulerConfig;
use crate::error::SchedulerResult;
use crate::scheduler::PathfindingScheduler;

/// Fluent builder for [`PathfindingScheduler<F>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.grid(g)`      | Empty grid built from `config.grid`       |
/// | `.finder(f)`    | [`PathSearch`] with `config.search`       |
/// | `.viewport(p)`  | No viewport; priority ignores distance    |
///
/// # Example
///
/// ```rust,ignore
/// let mut scheduler = SchedulerBuilder::new(SchedulerConfig::default())
///     .viewport(WorldPoint::new(640.0, 360.0))
///     .build()?;
/// scheduler.update(&mut agents, 1.0 / 60.0, &mut NoopObserver);
/// ```
pub struct SchedulerBuilder<F: PathFinder = PathSearch> {
    config:   SchedulerConfig,
    grid:     Option<NavigationGrid>,
    finder:   F,
    viewport: Option<WorldPoint>,
}

impl SchedulerBuilder<PathSearch> {
    pub fn new(config: SchedulerConfig) -> Self {
        let finder = PathSearch::new(config.search.clone());
        Self { config, grid: None, finder, viewport: None }
    }
}

impl<F: PathFinder> SchedulerBuilder<F> {
    /// Use a pre-built grid (with terrain already placed) instead of an
    /// empty one.
    pub fn grid(mut self, grid: NavigationGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Replace the search engine.
    pub fn finder<G: PathFinder>(self, finder: G) -> SchedulerBuilder<G> {
        SchedulerBuilder {
            config:   self.config,
            grid:     self.grid,
            finder,
            viewport: self.viewport,
        }
    }

    pub fn viewport(mut self, center: WorldPoint) -> Self {
        self.viewport = Some(center);
        self
    }

    /// Validate the configuration and assemble the scheduler.
    pub fn build(self) -> SchedulerResult<PathfindingScheduler<F>> {
        let grid = match self.grid {
            Some(g) => g,
            None => NavigationGrid::new(&self.config.grid)?,
        };
        PathfindingScheduler::from_parts(self.config, grid, self.finder, self.viewport)
    }
}

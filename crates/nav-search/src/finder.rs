//! Search traits.

use nav_core::{GridCoord, WorldPoint};
use nav_grid::NavigationGrid;

use crate::config::SearchConfig;
use crate::error::SearchResult;
use crate::path::Path;

/// Outcome of one [`SearchSession::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStep {
    /// Budget used up; call `advance` again.
    Pending,
    Complete(Path),
}

/// An in-progress search.
///
/// The grid passed to `advance` should be the grid the session was begun on.
/// It may change between calls; the session sees the current walkability of
/// cells it has not yet expanded.
pub trait SearchSession: Send {
    /// Expand at most `budget` nodes (at least one).
    ///
    /// Returns `Err` once the search has definitively failed.  A session that
    /// has returned `Complete` or `Err` keeps returning `Err`.
    fn advance(&mut self, grid: &NavigationGrid, budget: usize) -> SearchResult<SearchStep>;

    /// Total node expansions so far.
    fn nodes_expanded(&self) -> usize;

    fn start(&self) -> GridCoord;

    /// Goal cell after relaxation.
    fn goal(&self) -> GridCoord;
}

/// Pluggable path search engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one finder can be shared by
/// several schedulers.
pub trait PathFinder: Send + Sync {
    type Session: SearchSession;

    fn config(&self) -> &SearchConfig;

    /// Validate endpoints and prepare a session.
    ///
    /// Fails immediately when the start cell is not walkable or when no
    /// walkable cell lies within the relaxation radius of the goal.
    fn begin(
        &self,
        grid: &NavigationGrid,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> SearchResult<Self::Session>;

    /// Run a search to completion.
    fn find_path(
        &self,
        grid: &NavigationGrid,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> SearchResult<Path> {
        let mut session = self.begin(grid, start, goal)?;
        loop {
            if let SearchStep::Complete(path) = session.advance(grid, usize::MAX)? {
                return Ok(path);
            }
        }
    }
}

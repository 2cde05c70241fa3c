//! Search failure modes.
//!
//! Every variant means "no route available now".  None is fatal: callers stop
//! the requesting agent and may retry once obstacles change.

use nav_core::GridCoord;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("start cell {0} is not walkable")]
    StartBlocked(GridCoord),

    #[error("no walkable cell within {radius} of goal {goal}")]
    GoalUnreachable { goal: GridCoord, radius: i32 },

    #[error("node budget exhausted after {expanded} expansions")]
    NodeBudgetExceeded { expanded: usize },

    #[error("open set exhausted after {expanded} expansions: goal not connected")]
    Exhausted { expanded: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;

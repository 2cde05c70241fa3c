//! `nav-search`: A* path search over a [`NavigationGrid`].
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`finder`]    | `PathFinder` / `SearchSession` traits, `SearchStep`       |
//! | [`astar`]     | `PathSearch` (default finder), `AStarSearch` session      |
//! | [`relax`]     | Bounded breadth-first goal relaxation                     |
//! | [`smoothing`] | String-pulling over line of sight                         |
//! | [`path`]      | `Path` result type                                        |
//! | [`config`]    | `SearchConfig`                                            |
//! | [`error`]     | `SearchError`, `SearchResult<T>`                          |
//!
//! # Pluggability
//!
//! The scheduler calls search through the [`PathFinder`] trait.  A finder
//! produces a [`SearchSession`] that can be run to completion in one call
//! ([`PathFinder::find_path`]) or advanced a bounded number of node
//! expansions at a time, so a long search can be spread over several ticks.
//!
//! Searches are cache-free: two identical queries on an unchanged grid do the
//! same work and return equal paths.  Result caching belongs to the caller.
//!
//! [`NavigationGrid`]: nav_grid::NavigationGrid

pub mod astar;
pub mod config;
pub mod error;
pub mod finder;
pub mod path;
pub mod relax;
pub mod smoothing;


pub use astar::{AStarSearch, PathSearch};
pub use config::SearchConfig;
pub use error::{SearchError, SearchResult};
pub use finder::{PathFinder, SearchSession, SearchStep};
pub use path::Path;
pub use relax::relax_goal;
pub use smoothing::smooth;

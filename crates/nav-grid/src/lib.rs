//! `nav-grid`: the navigation grid: canonical spatial truth for walkability.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`grid`]     | `NavigationGrid`, coordinate mapping, walkability, neighbours |
//! | [`obstacle`] | Static rectangles and dynamic circular `Footprint`s         |
//! | [`cost`]     | `movement_cost`, octile `heuristic`                          |
//! | [`line`]     | `LineWalk` (Bresenham cell walk) used for line of sight     |
//! | [`config`]   | `GridConfig`                                                 |
//! | [`error`]    | `GridError`, `GridResult<T>`                                 |
//!
//! # Cell model
//!
//! A cell is walkable iff it is inside the grid, not covered by any static
//! obstacle, and not covered by any dynamic obstacle.  Static coverage is a
//! permanent flag; dynamic coverage is a per-cell reference count so that
//! overlapping footprints release a cell only when the last one leaves.
//!
//! All queries are total: out-of-range coordinates are "blocked" and have no
//! neighbours.  Only construction can fail.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GridConfig`.           |

pub mod config;
pub mod cost;
pub mod error;
pub mod grid;
pub mod line;
pub mod obstacle;


pub use config::GridConfig;
pub use cost::{heuristic, movement_cost};
pub use error::{GridError, GridResult};
pub use grid::{CellState, NavigationGrid};
pub use line::LineWalk;
pub use obstacle::Footprint;

//! `nav-schedule`: data structures behind the pathfinding scheduler.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`queue`]       | `RequestQueue`, `PathRequest`, `EnqueueOutcome`          |
//! | [`cache`]       | `PathCache`, `CacheKey` (TTL + capacity, oldest-first)   |
//! | [`spatial`]     | `SpatialIndex` (uniform bucket grid, radius queries)     |
//! | [`priority`]    | `PriorityWeights` scoring                                |
//! | [`maintenance`] | `MaintenanceSchedule`, `MaintenanceTimer`                |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                     |
//!
//! Nothing here runs a search or touches the navigation grid; `nav-sim`
//! composes these pieces into the tick loop.

pub mod cache;
pub mod error;
pub mod maintenance;
pub mod priority;
pub mod queue;
pub mod spatial;

#[cfg(test)]
mod tests;

pub use cache::{CacheKey, PathCache};
pub use error::{ScheduleError, ScheduleResult};
pub use maintenance::{MaintenanceSchedule, MaintenanceTimer};
pub use priority::PriorityWeights;
pub use queue::{EnqueueOutcome, PathRequest, RequestQueue};
pub use spatial::SpatialIndex;

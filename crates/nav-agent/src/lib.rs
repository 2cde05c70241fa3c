//! `nav-agent`: what the pathfinding scheduler knows about an agent.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`descriptor`] | `AgentKind` (unit / building), `Capabilities` flags        |
//! | [`movement`]   | `Movement`: path, cursor, target, speed, velocity          |
//! | [`steering`]   | `steer`: one tick of path following                        |
//! | [`world`]      | `AgentWorld` trait: the host's agent container             |
//! | [`store`]      | `AgentStore`: Structure-of-Arrays `AgentWorld`             |
//! | [`builder`]    | `AgentSpec`: fluent per-agent construction                 |
//!
//! The scheduler never inspects a host's entity framework directly.  It sees
//! agents only through [`AgentWorld`], which hands out a kind tag, optional
//! capability flags, a position, and a [`Movement`] record.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on descriptor types.      |

pub mod builder;
pub mod descriptor;
pub mod movement;
pub mod steering;
pub mod store;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::AgentSpec;
pub use descriptor::{AgentKind, Capabilities};
pub use movement::Movement;
pub use steering::{SteerOutcome, steer};
pub use store::AgentStore;
pub use world::AgentWorld;

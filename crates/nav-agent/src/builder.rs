//! Fluent per-agent construction.
//!
//! # Usage
//!
//! ```rust
//! use nav_agent::{AgentSpec, AgentStore, AgentWorld};
//! use nav_core::WorldPoint;
//!
//! let mut store = AgentStore::new();
//! let tank = store.spawn(
//!     AgentSpec::unit(WorldPoint::new(40.0, 40.0), 12.0)
//!         .speed(90.0)
//!         .combat(true),
//! );
//! let depot = store.spawn(AgentSpec::building(WorldPoint::new(200.0, 200.0), 96.0, 64.0));
//!
//! assert!(store.movement(tank).is_some());
//! assert!(store.movement(depot).is_none());
//! ```

use nav_core::WorldPoint;

use crate::descriptor::{AgentKind, Capabilities};

/// Everything needed to spawn one agent.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentSpec {
    pub kind:             AgentKind,
    pub position:         WorldPoint,
    pub speed:            f32,
    pub arrival_distance: f32,
    pub capabilities:     Capabilities,
}

impl AgentSpec {
    /// A mobile unit with the given footprint radius.
    pub fn unit(position: WorldPoint, radius: f32) -> Self {
        Self {
            kind: AgentKind::Unit { radius },
            position,
            speed: 100.0,
            arrival_distance: 4.0,
            capabilities: Capabilities::default(),
        }
    }

    /// A building of `width × height` centred on `position`.
    pub fn building(position: WorldPoint, width: f32, height: f32) -> Self {
        Self {
            kind: AgentKind::Building { width, height },
            position,
            speed: 0.0,
            arrival_distance: 0.0,
            capabilities: Capabilities::default(),
        }
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn arrival_distance(mut self, d: f32) -> Self {
        self.arrival_distance = d;
        self
    }

    pub fn selected(mut self, on: bool) -> Self {
        self.capabilities.selected = on;
        self
    }

    pub fn combat(mut self, on: bool) -> Self {
        self.capabilities.combat = on;
        self
    }
}

//! Per-agent movement state.

use nav_core::WorldPoint;

/// Movement intent and path-following state for one agent.
///
/// An agent is **idle** (`moving == false`), **waiting** for a path
/// (`moving` with a target but no waypoints), or **following** a path
/// (`cursor < path.len()`).
#[derive(Clone, Debug, PartialEq)]
pub struct Movement {
    /// Waypoints in world space.  Only `path[cursor..]` is still ahead.
    pub path: Vec<WorldPoint>,

    /// Index of the waypoint currently being steered towards.
    pub cursor: usize,

    /// `true` from a move command until arrival or a failed search.
    pub moving: bool,

    /// Where the agent was ordered to go.
    pub target: Option<WorldPoint>,

    /// World units per second.
    pub speed: f32,

    /// A waypoint counts as reached within this distance.
    pub arrival_distance: f32,

    /// Last applied velocity (world units per second).  Zero when idle.
    pub velocity: WorldPoint,

    /// Facing in radians, `atan2(dy, dx)` of the last movement.
    pub heading: f32,
}

impl Movement {
    pub fn new(speed: f32, arrival_distance: f32) -> Self {
        Self {
            path:             Vec::new(),
            cursor:           0,
            moving:           false,
            target:           None,
            speed,
            arrival_distance,
            velocity:         WorldPoint::ZERO,
            heading:          0.0,
        }
    }

    /// Record a move order.  Any current path is dropped; a new one must be
    /// requested.
    pub fn command_move(&mut self, target: WorldPoint) {
        self.target = Some(target);
        self.moving = true;
        self.path.clear();
        self.cursor = 0;
    }

    /// Replace the path and restart following from its first waypoint.
    pub fn assign_path(&mut self, path: Vec<WorldPoint>) {
        self.moving = !path.is_empty();
        self.path = path;
        self.cursor = 0;
    }

    /// Halt in place and forget the order.
    pub fn stop(&mut self) {
        self.path.clear();
        self.cursor = 0;
        self.moving = false;
        self.target = None;
        self.velocity = WorldPoint::ZERO;
    }

    #[inline]
    pub fn current_waypoint(&self) -> Option<WorldPoint> {
        self.path.get(self.cursor).copied()
    }

    /// Waypoints not yet reached.
    pub fn remaining(&self) -> &[WorldPoint] {
        &self.path[self.cursor.min(self.path.len())..]
    }

    #[inline]
    pub fn has_path(&self) -> bool {
        self.cursor < self.path.len()
    }

    /// Ordered to move and not yet arrived.
    #[inline]
    pub fn wants_to_move(&self) -> bool {
        self.moving && self.target.is_some()
    }
}

impl Default for Movement {
    fn default() -> Self {
        Self::new(100.0, 4.0)
    }
}

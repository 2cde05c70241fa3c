//! Path following.

use nav_core::WorldPoint;

use crate::movement::Movement;

/// What one [`steer`] call did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SteerOutcome {
    /// No waypoint ahead.
    Idle,
    /// Moved to the contained position.
    Moved(WorldPoint),
    /// Within arrival distance of an intermediate waypoint; cursor advanced.
    WaypointReached,
    /// Reached the final waypoint; movement stopped.
    Arrived,
}

/// Advance `movement` by `dt` seconds from `position`.
///
/// A waypoint within `arrival_distance` is consumed without moving that tick.
/// Otherwise the agent moves towards it at `speed`, never overshooting.
/// Non-positive or non-finite `dt` moves nothing.
pub fn steer(movement: &mut Movement, position: WorldPoint, dt: f32) -> SteerOutcome {
    let Some(waypoint) = movement.current_waypoint() else {
        return SteerOutcome::Idle;
    };

    let delta = waypoint - position;
    let dist = delta.length();
    if dist <= movement.arrival_distance {
        movement.cursor += 1;
        if movement.has_path() {
            return SteerOutcome::WaypointReached;
        }
        movement.stop();
        return SteerOutcome::Arrived;
    }

    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
    let dir = delta * (1.0 / dist);
    let step = movement.speed.max(0.0) * dt;
    let next = if step >= dist { waypoint } else { position + dir * step };

    movement.velocity = dir * movement.speed;
    movement.heading = delta.y.atan2(delta.x);
    SteerOutcome::Moved(next)
}

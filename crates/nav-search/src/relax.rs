//! Goal relaxation: nearest walkable cell to a blocked goal.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use nav_core::GridCoord;
use nav_grid::NavigationGrid;

const RING: [(i32, i32); 8] = [
    (0, -1), (1, 0), (0, 1), (-1, 0),
    (1, -1), (1, 1), (-1, 1), (-1, -1),
];

/// Breadth-first search from `goal` for the nearest walkable cell within
/// Chebyshev distance `radius`.
///
/// Returns `goal` itself when it is walkable.  The search crosses blocked
/// and out-of-bounds cells, so a goal just outside the map relaxes onto the
/// map edge.
pub fn relax_goal(grid: &NavigationGrid, goal: GridCoord, radius: i32) -> Option<GridCoord> {
    if grid.is_walkable(goal) {
        return Some(goal);
    }
    if radius <= 0 {
        return None;
    }

    let mut seen: FxHashSet<GridCoord> = FxHashSet::default();
    let mut queue = VecDeque::new();
    seen.insert(goal);
    queue.push_back(goal);

    while let Some(cell) = queue.pop_front() {
        for (dc, dr) in RING {
            let n = cell.offset(dc, dr);
            if n.chebyshev(goal) > radius || !seen.insert(n) {
                continue;
            }
            if grid.is_walkable(n) {
                return Some(n);
            }
            queue.push_back(n);
        }
    }
    None
}

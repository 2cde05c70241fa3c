//! 64×64 synthetic battlefield.
//!
//! ```text
//!  col:  0 … 3          (buildings in a loose checkerboard)          60 … 63
//!       west spawn                                                   east rally
//! ```
//!
//! A north-south river of static cells splits the map at column 31, with
//! three fords.  Buildings are spawned as agents so the scheduler registers
//! them the same way a running game would.

use nav_core::WorldPoint;
use nav_grid::NavigationGrid;

pub const COLS: u32 = 64;
pub const ROWS: u32 = 64;
pub const CELL: f32 = 32.0;

const RIVER_COL: i32 = 31;
const FORDS: [i32; 3] = [10, 32, 53];

/// Centre of cell `(col, row)`.
pub fn cell_center(col: i32, row: i32) -> WorldPoint {
    WorldPoint::new((col as f32 + 0.5) * CELL, (row as f32 + 0.5) * CELL)
}

/// Carve the river into `grid`, leaving the fords open.
pub fn add_terrain(grid: &mut NavigationGrid) {
    let mut start = 0;
    for ford in FORDS.into_iter().chain([ROWS as i32]) {
        if ford > start {
            grid.add_static_obstacle(
                RIVER_COL as f32 * CELL,
                start as f32 * CELL,
                CELL,
                (ford - start) as f32 * CELL,
            );
        }
        start = ford + 1;
    }
}

/// Building centres and sizes `(center, width, height)`.
pub fn buildings() -> Vec<(WorldPoint, f32, f32)> {
    let mut out = Vec::new();
    for (i, col) in (8..56).step_by(8).enumerate() {
        if col == RIVER_COL + 1 {
            continue;
        }
        for row in (6..60).step_by(12) {
            let row = row + if i % 2 == 0 { 0 } else { 6 };
            if row >= ROWS as i32 - 2 {
                continue;
            }
            out.push((cell_center(col, row), 3.0 * CELL, 2.0 * CELL));
        }
    }
    out
}

/// Spawn cells on the west edge, one unit every other row.
pub fn west_spawns(count: usize) -> Vec<WorldPoint> {
    (0..count)
        .map(|i| cell_center(1 + (i / 30) as i32 * 2, 2 + (i % 30) as i32 * 2))
        .collect()
}

/// Rally point on the east edge for the `i`-th unit.
pub fn east_rally(i: usize) -> WorldPoint {
    cell_center(COLS as i32 - 3, 2 + (i % 30) as i32 * 2)
}

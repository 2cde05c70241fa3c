//! Step costs and the search heuristic.
//!
//! Costs are in cell units: 1 for an orthogonal step, √2 for a diagonal one.
//! The octile distance is exactly the cost of the cheapest obstacle-free
//! 8-connected route, so it never overestimates (admissible) and satisfies
//! the triangle inequality against single steps (consistent).

use std::f32::consts::SQRT_2;

use nav_core::GridCoord;

/// Cost of stepping from `from` to an adjacent cell `to`.
#[inline]
pub fn movement_cost(from: GridCoord, to: GridCoord) -> f32 {
    if from.col != to.col && from.row != to.row {
        SQRT_2
    } else {
        1.0
    }
}

/// Octile distance between two cells.
#[inline]
pub fn heuristic(a: GridCoord, b: GridCoord) -> f32 {
    let dx = (a.col - b.col).abs() as f32;
    let dy = (a.row - b.row).abs() as f32;
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    lo * SQRT_2 + (hi - lo)
}

//! String-pulling.

use nav_core::GridCoord;
use nav_grid::NavigationGrid;

/// Drop intermediate cells that are reachable in a straight line.
///
/// From each kept cell, jump to the furthest later cell with line of sight.
/// Paths of two or fewer cells are returned unchanged.  Endpoints are always
/// kept.
pub fn smooth(grid: &NavigationGrid, cells: &[GridCoord]) -> Vec<GridCoord> {
    if cells.len() <= 2 {
        return cells.to_vec();
    }

    let last = cells.len() - 1;
    let mut out = vec![cells[0]];
    let mut i = 0;
    while i < last {
        let mut j = last;
        while j > i + 1 && !grid.has_line_of_sight(cells[i], cells[j]) {
            j -= 1;
        }
        out.push(cells[j]);
        i = j;
    }
    out
}

//! Discrete line walk between two cells (Bresenham).

use nav_core::GridCoord;

/// Iterator over every cell on the Bresenham line from `start` to `end`,
/// both inclusive.
///
/// Consecutive cells are 8-adjacent.  No allocation.
#[derive(Clone, Debug)]
pub struct LineWalk {
    cur:  GridCoord,
    end:  GridCoord,
    dx:   i32,
    dy:   i32,
    sx:   i32,
    sy:   i32,
    err:  i32,
    done: bool,
}

impl LineWalk {
    pub fn new(start: GridCoord, end: GridCoord) -> Self {
        let dx = (end.col - start.col).abs();
        let dy = -(end.row - start.row).abs();
        Self {
            cur: start,
            end,
            dx,
            dy,
            sx: if start.col < end.col { 1 } else { -1 },
            sy: if start.row < end.row { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LineWalk {
    type Item = GridCoord;

    fn next(&mut self) -> Option<GridCoord> {
        if self.done {
            return None;
        }
        let out = self.cur;
        if self.cur == self.end {
            self.done = true;
            return Some(out);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.cur.col += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.cur.row += self.sy;
        }
        Some(out)
    }
}

//! Obstacle registration on the navigation grid.
//!
//! Static obstacles are axis-aligned rectangles, permanent once added.
//! Dynamic obstacles are circles keyed by agent id; each agent owns at most
//! one, and removing it releases exactly the cells it covered.

use log::{debug, trace};

use nav_core::{AgentId, GridCoord, WorldPoint};

use crate::grid::NavigationGrid;

// ── Footprint ─────────────────────────────────────────────────────────────────

/// A registered dynamic obstacle: the circle as given plus the in-bounds
/// cells it was rasterised to.
#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
    pub center: WorldPoint,
    pub radius: f32,
    pub cells:  Vec<GridCoord>,
}

impl NavigationGrid {
    // ── Static ────────────────────────────────────────────────────────────

    /// Permanently block every cell the rectangle with top-left corner
    /// `(x, y)` and size `width × height` overlaps with positive area.
    ///
    /// A rectangle with zero or negative extent on an axis blocks the single
    /// cell row/column containing its corner on that axis.  Cells outside the
    /// grid are ignored.  Idempotent.  Returns the number of newly blocked
    /// cells.
    pub fn add_static_obstacle(&mut self, x: f32, y: f32, width: f32, height: f32) -> usize {
        let Some((c0, c1)) = self.rect_span(x, width, self.cols) else { return 0 };
        let Some((r0, r1)) = self.rect_span(y, height, self.rows) else { return 0 };

        let mut added = 0;
        for row in r0..=r1 {
            for col in c0..=c1 {
                let i = row as usize * self.cols as usize + col as usize;
                if !self.static_cells[i] {
                    self.static_cells[i] = true;
                    added += 1;
                }
            }
        }
        if added > 0 {
            self.static_count += added;
            self.revision += 1;
        }
        debug!("static obstacle ({x}, {y}) {width}×{height}: {added} new cells");
        added
    }

    /// Inclusive in-bounds cell range covered by `[start, start + len)` on one
    /// axis, or `None` if it lies entirely outside `[0, limit)`.
    fn rect_span(&self, start: f32, len: f32, limit: i32) -> Option<(i32, i32)> {
        if !start.is_finite() {
            return None;
        }
        let lo = (start / self.cell_size).floor();
        let hi = if len.is_finite() && len > 0.0 {
            ((start + len) / self.cell_size).ceil() - 1.0
        } else {
            lo
        };
        let hi = hi.max(lo);
        if hi < 0.0 || lo >= limit as f32 {
            return None;
        }
        Some((lo.max(0.0) as i32, hi.min((limit - 1) as f32) as i32))
    }

    // ── Dynamic ───────────────────────────────────────────────────────────

    /// Register a circular obstacle owned by `agent`.
    ///
    /// Covers every in-bounds cell whose centre lies within `radius` of
    /// `center`, plus the cell containing `center`.  Replaces any obstacle
    /// `agent` already owns.  Returns the number of cells covered.
    pub fn add_dynamic_obstacle(&mut self, agent: AgentId, center: WorldPoint, radius: f32) -> usize {
        self.release(agent);
        let radius = if radius.is_finite() && radius > 0.0 { radius } else { 0.0 };
        let cells = self.rasterise(center, radius);
        let n = cells.len();
        self.claim(agent, Footprint { center, radius, cells });
        trace!("{agent} dynamic obstacle at {center} r={radius}: {n} cells");
        n
    }

    /// Remove `agent`'s obstacle.  Cells still covered by another static or
    /// dynamic obstacle stay blocked.  Returns `false` if there was none.
    pub fn remove_dynamic_obstacle(&mut self, agent: AgentId) -> bool {
        let removed = self.release(agent).is_some();
        if removed {
            trace!("{agent} dynamic obstacle removed");
        }
        removed
    }

    /// Move `agent`'s obstacle; equivalent to remove followed by add.
    pub fn update_dynamic_obstacle(&mut self, agent: AgentId, center: WorldPoint, radius: f32) -> usize {
        self.add_dynamic_obstacle(agent, center, radius)
    }

    /// Detach `agent`'s obstacle and hand it to the caller, leaving the grid
    /// as if it had been removed.  Pair with [`restore_dynamic_obstacle`].
    ///
    /// [`restore_dynamic_obstacle`]: NavigationGrid::restore_dynamic_obstacle
    pub fn take_dynamic_obstacle(&mut self, agent: AgentId) -> Option<Footprint> {
        self.release(agent)
    }

    /// Re-attach a footprint previously returned by `take_dynamic_obstacle`.
    pub fn restore_dynamic_obstacle(&mut self, agent: AgentId, footprint: Footprint) {
        self.release(agent);
        self.claim(agent, footprint);
    }

    pub fn dynamic_footprint(&self, agent: AgentId) -> Option<&Footprint> {
        self.footprints.get(&agent)
    }

    pub fn has_dynamic_obstacle(&self, agent: AgentId) -> bool {
        self.footprints.contains_key(&agent)
    }

    pub fn dynamic_obstacle_count(&self) -> usize {
        self.footprints.len()
    }

    /// Agents that currently own a dynamic obstacle, in arbitrary order.
    pub fn dynamic_owners(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.footprints.keys().copied()
    }

    // ── Bookkeeping ───────────────────────────────────────────────────────

    fn rasterise(&self, center: WorldPoint, radius: f32) -> Vec<GridCoord> {
        let home = self.world_to_grid(center);
        let lo = self.world_to_grid(WorldPoint::new(center.x - radius, center.y - radius));
        let hi = self.world_to_grid(WorldPoint::new(center.x + radius, center.y + radius));
        let r2 = radius * radius;

        let mut cells = Vec::new();
        for row in lo.row.max(0)..=hi.row.min(self.rows - 1) {
            for col in lo.col.max(0)..=hi.col.min(self.cols - 1) {
                let c = GridCoord::new(col, row);
                if c == home || self.grid_to_world(c).distance_sq(center) <= r2 {
                    cells.push(c);
                }
            }
        }
        cells
    }

    fn claim(&mut self, agent: AgentId, footprint: Footprint) {
        for &c in &footprint.cells {
            if let Some(i) = self.index(c) {
                self.dynamic_refs[i] = self.dynamic_refs[i].saturating_add(1);
            }
        }
        self.footprints.insert(agent, footprint);
        self.revision += 1;
    }

    fn release(&mut self, agent: AgentId) -> Option<Footprint> {
        let footprint = self.footprints.remove(&agent)?;
        for &c in &footprint.cells {
            if let Some(i) = self.index(c) {
                self.dynamic_refs[i] = self.dynamic_refs[i].saturating_sub(1);
            }
        }
        self.revision += 1;
        Some(footprint)
    }
}

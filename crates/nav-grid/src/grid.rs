//! `NavigationGrid`: cell storage, coordinate mapping, and walkability queries.

use log::debug;
use rustc_hash::FxHashMap;

use nav_core::{AgentId, GridCoord, WorldPoint};

use crate::config::GridConfig;
use crate::error::{GridError, GridResult};
use crate::line::LineWalk;
use crate::obstacle::Footprint;

/// Upper bound on `cols * rows`.  Keeps cell indices comfortably in `usize`
/// and coordinates far from `i32` overflow during neighbour arithmetic.
const MAX_CELLS: u64 = 1 << 26;

/// World coordinates are clamped to this many cells outside the grid before
/// conversion, so far-away points still map to (blocked) cells without
/// saturating `i32`.
const FAR_OUTSIDE: f32 = 1_048_576.0;

// ── Neighbour offsets ─────────────────────────────────────────────────────────

const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

// ── CellState ─────────────────────────────────────────────────────────────────

/// What occupies a cell, for renderers and debugging overlays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellState {
    Open,
    /// Permanently blocked.  Takes precedence over dynamic coverage.
    Static,
    /// Covered by this many dynamic footprints.
    Dynamic(u16),
    OutOfBounds,
}

impl CellState {
    #[inline]
    pub fn is_walkable(self) -> bool {
        matches!(self, CellState::Open)
    }
}

// ── NavigationGrid ────────────────────────────────────────────────────────────

/// Fixed-size rectangular grid of square cells.
///
/// Owns all obstacle bookkeeping.  Every mutation bumps [`revision`], which
/// callers may use to detect that cached data derived from the grid is stale.
///
/// [`revision`]: NavigationGrid::revision
pub struct NavigationGrid {
    pub(crate) cols:          i32,
    pub(crate) rows:          i32,
    pub(crate) cell_size:     f32,
    /// Row-major permanent blockage flags.
    pub(crate) static_cells:  Vec<bool>,
    /// Row-major count of dynamic footprints covering each cell.
    pub(crate) dynamic_refs:  Vec<u16>,
    pub(crate) footprints:    FxHashMap<AgentId, Footprint>,
    pub(crate) static_count:  usize,
    pub(crate) revision:      u64,
}

impl NavigationGrid {
    pub fn new(config: &GridConfig) -> GridResult<Self> {
        let GridConfig { cols, rows, cell_size } = *config;
        if cols == 0 || rows == 0 {
            return Err(GridError::InvalidDimensions { cols, rows });
        }
        if u64::from(cols) * u64::from(rows) > MAX_CELLS {
            return Err(GridError::TooLarge { cols, rows });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        let n = cols as usize * rows as usize;
        debug!("navigation grid {cols}×{rows}, cell size {cell_size}");
        Ok(Self {
            cols: cols as i32,
            rows: rows as i32,
            cell_size,
            static_cells: vec![false; n],
            dynamic_refs: vec![0; n],
            footprints: FxHashMap::default(),
            static_count: 0,
            revision: 0,
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.static_cells.len()
    }

    /// Monotonic counter bumped by every obstacle mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn in_bounds(&self, c: GridCoord) -> bool {
        c.col >= 0 && c.row >= 0 && c.col < self.cols && c.row < self.rows
    }

    #[inline]
    pub(crate) fn index(&self, c: GridCoord) -> Option<usize> {
        if self.in_bounds(c) {
            Some(c.row as usize * self.cols as usize + c.col as usize)
        } else {
            None
        }
    }

    /// Clamp a cell to the nearest in-bounds cell.
    pub fn clamp(&self, c: GridCoord) -> GridCoord {
        GridCoord::new(c.col.clamp(0, self.cols - 1), c.row.clamp(0, self.rows - 1))
    }

    // ── Coordinate mapping ────────────────────────────────────────────────

    /// Cell containing `p` (`floor(p / cell_size)` per axis).
    ///
    /// Points outside the world map to out-of-bounds cells.  Non-finite
    /// components map to `-1`, which is always out of bounds.
    pub fn world_to_grid(&self, p: WorldPoint) -> GridCoord {
        GridCoord::new(self.axis_to_cell(p.x), self.axis_to_cell(p.y))
    }

    fn axis_to_cell(&self, v: f32) -> i32 {
        if v.is_nan() {
            return -1;
        }
        (v / self.cell_size).floor().clamp(-FAR_OUTSIDE, FAR_OUTSIDE) as i32
    }

    /// World-space centre of cell `c`.  Defined for any `c`, in bounds or not.
    pub fn grid_to_world(&self, c: GridCoord) -> WorldPoint {
        WorldPoint::new(
            (c.col as f32 + 0.5) * self.cell_size,
            (c.row as f32 + 0.5) * self.cell_size,
        )
    }

    // ── Walkability ───────────────────────────────────────────────────────

    /// `true` iff `c` is in bounds and covered by no obstacle of either kind.
    #[inline]
    pub fn is_walkable(&self, c: GridCoord) -> bool {
        match self.index(c) {
            Some(i) => !self.static_cells[i] && self.dynamic_refs[i] == 0,
            None => false,
        }
    }

    pub fn is_walkable_world(&self, p: WorldPoint) -> bool {
        self.is_walkable(self.world_to_grid(p))
    }

    /// Walkability as seen by `agent`: its own dynamic footprint is ignored.
    pub fn is_walkable_for(&self, c: GridCoord, agent: AgentId) -> bool {
        let Some(i) = self.index(c) else { return false };
        if self.static_cells[i] {
            return false;
        }
        let own = self
            .footprints
            .get(&agent)
            .is_some_and(|fp| fp.cells.contains(&c));
        self.dynamic_refs[i] <= u16::from(own)
    }

    /// `true` iff `c` is in bounds and permanently blocked.
    pub fn is_static(&self, c: GridCoord) -> bool {
        self.index(c).is_some_and(|i| self.static_cells[i])
    }

    pub fn cell_state(&self, c: GridCoord) -> CellState {
        match self.index(c) {
            None => CellState::OutOfBounds,
            Some(i) if self.static_cells[i] => CellState::Static,
            Some(i) if self.dynamic_refs[i] > 0 => CellState::Dynamic(self.dynamic_refs[i]),
            Some(_) => CellState::Open,
        }
    }

    // ── Neighbours ────────────────────────────────────────────────────────

    /// Walkable neighbours of `c`.  See [`neighbors_into`].
    ///
    /// [`neighbors_into`]: NavigationGrid::neighbors_into
    pub fn neighbors(&self, c: GridCoord, allow_diagonal: bool) -> Vec<GridCoord> {
        let mut out = Vec::with_capacity(8);
        self.neighbors_into(c, allow_diagonal, &mut out);
        out
    }

    /// Clear `out` and fill it with the walkable neighbours of `c`:
    /// orthogonal first, then diagonal.
    ///
    /// A diagonal neighbour is included only when both orthogonal cells
    /// sharing its corner are walkable, so paths never cut blocked corners.
    /// An out-of-bounds `c` has no neighbours.
    pub fn neighbors_into(&self, c: GridCoord, allow_diagonal: bool, out: &mut Vec<GridCoord>) {
        out.clear();
        if !self.in_bounds(c) {
            return;
        }
        for (dc, dr) in ORTHOGONAL {
            let n = c.offset(dc, dr);
            if self.is_walkable(n) {
                out.push(n);
            }
        }
        if !allow_diagonal {
            return;
        }
        for (dc, dr) in DIAGONAL {
            let n = c.offset(dc, dr);
            if self.is_walkable(n)
                && self.is_walkable(c.offset(dc, 0))
                && self.is_walkable(c.offset(0, dr))
            {
                out.push(n);
            }
        }
    }

    // ── Line of sight ─────────────────────────────────────────────────────

    /// Cells on the discrete line from `a` to `b`, both inclusive.
    pub fn line_cells(&self, a: GridCoord, b: GridCoord) -> LineWalk {
        LineWalk::new(a, b)
    }

    /// `true` iff every cell on the line from `a` to `b` is walkable.
    ///
    /// Diagonal steps along the line also require both corner cells to be
    /// walkable, matching the corner rule of [`neighbors_into`].
    ///
    /// [`neighbors_into`]: NavigationGrid::neighbors_into
    pub fn has_line_of_sight(&self, a: GridCoord, b: GridCoord) -> bool {
        let mut prev: Option<GridCoord> = None;
        for c in LineWalk::new(a, b) {
            if !self.is_walkable(c) {
                return false;
            }
            if let Some(p) = prev
                && p.is_diagonal_to(c)
                && !(self.is_walkable(GridCoord::new(c.col, p.row))
                    && self.is_walkable(GridCoord::new(p.col, c.row)))
            {
                return false;
            }
            prev = Some(c);
        }
        true
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// All in-bounds cells that are currently not walkable, row-major.
    pub fn blocked_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        let cols = self.cols as usize;
        self.static_cells
            .iter()
            .zip(&self.dynamic_refs)
            .enumerate()
            .filter(|(_, (s, d))| **s || **d > 0)
            .map(move |(i, _)| GridCoord::new((i % cols) as i32, (i / cols) as i32))
    }

    pub fn blocked_cell_count(&self) -> usize {
        self.blocked_cells().count()
    }

    pub fn static_cell_count(&self) -> usize {
        self.static_count
    }

    /// Fraction of cells that are blocked, in `[0, 1]`.
    pub fn occupancy(&self) -> f32 {
        self.blocked_cell_count() as f32 / self.cell_count() as f32
    }
}

impl std::fmt::Debug for NavigationGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationGrid")
            .field("cols", &self.cols)
            .field("rows", &self.rows)
            .field("cell_size", &self.cell_size)
            .field("static_cells", &self.static_count)
            .field("dynamic_obstacles", &self.footprints.len())
            .field("revision", &self.revision)
            .finish()
    }
}

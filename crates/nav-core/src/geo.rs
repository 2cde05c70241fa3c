//! World-space points and grid-space cell coordinates.
//!
//! `WorldPoint` uses `f32`; world extents of an RTS map are a few thousand
//! units, well inside single-precision range.  `GridCoord` is signed so that
//! coordinates left of / above the map are representable (they are simply
//! out of bounds, never a fault).

use std::ops::{Add, Mul, Sub};

// ── WorldPoint ────────────────────────────────────────────────────────────────

/// A point (or displacement) in world units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length when used as a displacement.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(self, other: WorldPoint) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_sq(self, other: WorldPoint) -> f32 {
        let d = other - self;
        d.x * d.x + d.y * d.y
    }

    /// Unit vector in the same direction, or `ZERO` for a zero-length input.
    #[inline]
    pub fn normalized(self) -> WorldPoint {
        let len = self.length();
        if len <= f32::EPSILON {
            WorldPoint::ZERO
        } else {
            WorldPoint::new(self.x / len, self.y / len)
        }
    }
}

impl Add for WorldPoint {
    type Output = WorldPoint;
    #[inline]
    fn add(self, rhs: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for WorldPoint {
    type Output = WorldPoint;
    #[inline]
    fn sub(self, rhs: WorldPoint) -> WorldPoint {
        WorldPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for WorldPoint {
    type Output = WorldPoint;
    #[inline]
    fn mul(self, rhs: f32) -> WorldPoint {
        WorldPoint::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── GridCoord ─────────────────────────────────────────────────────────────────

/// A navigation-grid cell, addressed by column and row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub col: i32,
    pub row: i32,
}

impl GridCoord {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[inline]
    pub const fn offset(self, dc: i32, dr: i32) -> GridCoord {
        GridCoord::new(self.col + dc, self.row + dr)
    }

    /// King-move distance: the number of 8-connected steps between two cells
    /// on an empty grid.
    #[inline]
    pub fn chebyshev(self, other: GridCoord) -> i32 {
        (self.col - other.col).abs().max((self.row - other.row).abs())
    }

    /// `true` if `other` is a diagonal neighbour of `self`.
    #[inline]
    pub fn is_diagonal_to(self, other: GridCoord) -> bool {
        (self.col - other.col).abs() == 1 && (self.row - other.row).abs() == 1
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.col, self.row)
    }
}

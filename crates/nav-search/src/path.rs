//! Search result.

use nav_core::{GridCoord, WorldPoint};

/// A computed path: world-space waypoints from the start cell's centre to
/// the (possibly relaxed) goal cell's centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub waypoints: Vec<WorldPoint>,
    /// Goal cell actually reached.  Differs from the requested goal when the
    /// goal was relaxed.
    pub goal: GridCoord,
    /// Grid cost of the unsmoothed route (1 per orthogonal step, √2 per
    /// diagonal).
    pub cost: f32,
    /// Diagnostic: node expansions the search performed.
    pub nodes_expanded: usize,
}

impl Path {
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn first(&self) -> Option<WorldPoint> {
        self.waypoints.first().copied()
    }

    pub fn last(&self) -> Option<WorldPoint> {
        self.waypoints.last().copied()
    }

    /// Euclidean length of the polyline in world units.
    pub fn world_length(&self) -> f32 {
        self.waypoints.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

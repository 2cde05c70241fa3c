//! Grid dimensions.

/// Size of the navigation grid.
///
/// The world spans `[0, cols * cell_size) × [0, rows * cell_size)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of columns.  Must be non-zero.
    pub cols: u32,
    /// Number of rows.  Must be non-zero.
    pub rows: u32,
    /// Edge length of one square cell in world units.  Must be positive.
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: 100, rows: 100, cell_size: 32.0 }
    }
}

impl GridConfig {
    pub fn new(cols: u32, rows: u32, cell_size: f32) -> Self {
        Self { cols, rows, cell_size }
    }

    /// World width in world units.
    pub fn world_width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    /// World height in world units.
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }
}

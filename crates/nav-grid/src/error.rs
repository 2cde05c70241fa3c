//! Grid error type.  Only construction can fail; queries are total.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {cols}×{rows})")]
    InvalidDimensions { cols: u32, rows: u32 },

    #[error("grid is too large: {cols}×{rows} cells")]
    TooLarge { cols: u32, rows: u32 },

    #[error("cell size must be positive and finite (got {0})")]
    InvalidCellSize(f32),
}

pub type GridResult<T> = Result<T, GridError>;

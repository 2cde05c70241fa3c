//! Error type for scheduler building blocks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("spatial index cell size must be positive and finite (got {0})")]
    InvalidCellSize(f32),

    #[error("maintenance probability must be within [0, 1] (got {0})")]
    InvalidProbability(f64),

    #[error("maintenance interval must be non-zero")]
    ZeroInterval,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

use nav_core::{AgentId, NavError};
use nav_grid::GridError;
use nav_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler configuration error: {0}")]
    Config(String),

    #[error("navigation grid: {0}")]
    Grid(#[from] GridError),

    #[error("scheduler component: {0}")]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Agent(#[from] NavError),

    #[error("agent {0} cannot move")]
    NotMobile(AgentId),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;

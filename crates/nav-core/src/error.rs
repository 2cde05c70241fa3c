//! Framework error type.
//!
//! Sub-crates define their own error enums (`GridError`, `SearchError`,
//! `SchedulerError`) and may wrap `NavError` as one variant.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("agent {0} is no longer active")]
    AgentInactive(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;

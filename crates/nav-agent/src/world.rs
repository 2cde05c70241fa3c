//! The host's agent container, as seen by the scheduler.

use nav_core::{AgentId, WorldPoint};

use crate::descriptor::{AgentKind, Capabilities};
use crate::movement::Movement;

/// Read/write access to agents owned by the host application.
///
/// Lookups for unknown or inactive ids return `None` (or do nothing); the
/// scheduler treats such agents as gone.
pub trait AgentWorld {
    /// Clear `out` and fill it with every active agent id, in a stable order.
    fn active_agents(&self, out: &mut Vec<AgentId>);

    fn is_active(&self, agent: AgentId) -> bool;

    fn kind(&self, agent: AgentId) -> Option<AgentKind>;

    fn position(&self, agent: AgentId) -> Option<WorldPoint>;

    fn set_position(&mut self, agent: AgentId, position: WorldPoint);

    /// `None` for agents that cannot move (buildings).
    fn movement(&self, agent: AgentId) -> Option<&Movement>;

    fn movement_mut(&mut self, agent: AgentId) -> Option<&mut Movement>;

    /// Priority flags.  Agents without any report the default (all false).
    fn capabilities(&self, _agent: AgentId) -> Capabilities {
        Capabilities::default()
    }
}

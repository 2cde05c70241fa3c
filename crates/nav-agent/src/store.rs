//! `AgentStore`: Structure-of-Arrays agent container.

use log::debug;

use nav_core::{AgentId, NavError, NavResult, WorldPoint};

use crate::builder::AgentSpec;
use crate::descriptor::{AgentKind, Capabilities};
use crate::movement::Movement;
use crate::world::AgentWorld;

/// Structure-of-Arrays storage for agents.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them.  Despawned slots stay allocated with
/// `active == false` so ids are never reused.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    /// Number of slots ever spawned.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub active:       Vec<bool>,
    pub kind:         Vec<AgentKind>,
    pub position:     Vec<WorldPoint>,
    /// Meaningless for buildings.
    pub movement:     Vec<Movement>,
    pub capabilities: Vec<Capabilities>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            count:        0,
            active:       Vec::with_capacity(n),
            kind:         Vec::with_capacity(n),
            position:     Vec::with_capacity(n),
            movement:     Vec::with_capacity(n),
            capabilities: Vec::with_capacity(n),
        }
    }

    /// Append an agent and return its id.
    pub fn spawn(&mut self, spec: AgentSpec) -> AgentId {
        let id = AgentId(self.count as u32);
        self.active.push(true);
        self.kind.push(spec.kind);
        self.position.push(spec.position);
        self.movement.push(Movement::new(spec.speed, spec.arrival_distance));
        self.capabilities.push(spec.capabilities);
        self.count += 1;
        debug!("spawned {id} {:?} at {}", spec.kind, spec.position);
        id
    }

    /// Mark an agent inactive.  Its slot is kept.
    pub fn despawn(&mut self, agent: AgentId) -> NavResult<()> {
        let i = self.slot(agent)?;
        self.active[i] = false;
        self.movement[i].stop();
        debug!("despawned {agent}");
        Ok(())
    }

    /// Number of active agents.
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order, active or not.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Index of an active agent.
    pub fn slot(&self, agent: AgentId) -> NavResult<usize> {
        let i = agent.index();
        match self.active.get(i) {
            None => Err(NavError::AgentNotFound(agent)),
            Some(false) => Err(NavError::AgentInactive(agent)),
            Some(true) => Ok(i),
        }
    }

    pub fn set_capabilities(&mut self, agent: AgentId, caps: Capabilities) -> NavResult<()> {
        let i = self.slot(agent)?;
        self.capabilities[i] = caps;
        Ok(())
    }

    #[inline]
    fn active_slot(&self, agent: AgentId) -> Option<usize> {
        self.slot(agent).ok()
    }

    #[inline]
    fn unit_slot(&self, agent: AgentId) -> Option<usize> {
        self.active_slot(agent).filter(|&i| self.kind[i].is_unit())
    }
}

impl AgentWorld for AgentStore {
    fn active_agents(&self, out: &mut Vec<AgentId>) {
        out.clear();
        out.extend(self.agent_ids().filter(|a| self.active[a.index()]));
    }

    fn is_active(&self, agent: AgentId) -> bool {
        self.active_slot(agent).is_some()
    }

    fn kind(&self, agent: AgentId) -> Option<AgentKind> {
        self.active_slot(agent).map(|i| self.kind[i])
    }

    fn position(&self, agent: AgentId) -> Option<WorldPoint> {
        self.active_slot(agent).map(|i| self.position[i])
    }

    fn set_position(&mut self, agent: AgentId, position: WorldPoint) {
        if let Some(i) = self.active_slot(agent) {
            self.position[i] = position;
        }
    }

    fn movement(&self, agent: AgentId) -> Option<&Movement> {
        self.unit_slot(agent).map(|i| &self.movement[i])
    }

    fn movement_mut(&mut self, agent: AgentId) -> Option<&mut Movement> {
        self.unit_slot(agent).map(|i| &mut self.movement[i])
    }

    fn capabilities(&self, agent: AgentId) -> Capabilities {
        self.active_slot(agent)
            .map(|i| self.capabilities[i])
            .unwrap_or_default()
    }
}

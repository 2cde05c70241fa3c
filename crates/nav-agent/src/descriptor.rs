//! Tagged agent descriptor.

/// Physical shape of an agent, which decides how it blocks the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    /// Moves; registered as a circular dynamic obstacle.
    Unit { radius: f32 },
    /// Never moves; registered as a static rectangle centred on its position.
    Building { width: f32, height: f32 },
}

impl AgentKind {
    #[inline]
    pub fn is_unit(self) -> bool {
        matches!(self, AgentKind::Unit { .. })
    }

    #[inline]
    pub fn is_building(self) -> bool {
        matches!(self, AgentKind::Building { .. })
    }
}

/// Optional flags consulted only for request priority.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    /// Currently selected by the player.
    pub selected: bool,
    /// Has a combat role.
    pub combat:   bool,
}

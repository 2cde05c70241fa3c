//! Request priority scoring.

use nav_agent::Capabilities;
use nav_core::WorldPoint;

/// Additive priority terms.  Higher scores are served first.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PriorityWeights {
    pub base:     f32,
    pub selected: f32,
    pub combat:   f32,
    /// Maximum bonus, earned at the viewport centre.
    pub viewport: f32,
    /// Distance (world units) at which the viewport bonus has halved.
    pub viewport_falloff: f32,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            base:             1.0,
            selected:         10.0,
            combat:           5.0,
            viewport:         5.0,
            viewport_falloff: 256.0,
        }
    }
}

impl PriorityWeights {
    /// Score a request from an agent at `position`.  Without a viewport the
    /// distance term is zero.
    pub fn score(&self, caps: Capabilities, position: WorldPoint, viewport: Option<WorldPoint>) -> f32 {
        let mut score = self.base;
        if caps.selected {
            score += self.selected;
        }
        if caps.combat {
            score += self.combat;
        }
        if let Some(center) = viewport {
            let d = position.distance(center);
            let falloff = self.viewport_falloff.max(f32::EPSILON);
            if d.is_finite() {
                score += self.viewport * falloff / (falloff + d);
            }
        }
        score
    }
}

//! Search tuning.

/// Parameters of a single A* search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// 8-connected when `true`, 4-connected otherwise.
    pub allow_diagonal: bool,

    /// Maximum node expansions before the search gives up.  A search that
    /// hits the cap fails; it never returns a partial path.
    pub max_nodes: usize,

    /// Chebyshev radius (in cells) searched around a blocked goal for the
    /// nearest walkable cell.  `0` disables relaxation.
    pub goal_search_radius: i32,

    /// Apply string-pulling to the raw cell path.
    pub smoothing: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_diagonal:     true,
            max_nodes:          1000,
            goal_search_radius: 5,
            smoothing:          true,
        }
    }
}

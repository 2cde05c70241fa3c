//! Default A* finder and its resumable session.
//!
//! # Ordering
//!
//! The open set is a binary heap keyed on `f = g + h`, ties broken by push
//! order (earlier push wins).  Stale heap entries are skipped on pop via the
//! closed set; with a consistent heuristic the first pop of a cell is optimal.
//!
//! # Budget
//!
//! `SearchConfig::max_nodes` caps total expansions.  The goal test runs on
//! pop before the cap is checked, so a goal reached on the last permitted
//! pop still succeeds.
//!
//! # Grid changes between calls
//!
//! A session may be advanced across ticks while obstacles move.  Popped cells
//! that have since become blocked are dropped, and a blocked goal fails the
//! search with `GoalUnreachable`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};

use nav_core::{GridCoord, WorldPoint};
use nav_grid::{NavigationGrid, heuristic, movement_cost};

use crate::config::SearchConfig;
use crate::error::{SearchError, SearchResult};
use crate::finder::{PathFinder, SearchSession, SearchStep};
use crate::path::Path;
use crate::relax::relax_goal;
use crate::smoothing::smooth;

// ── PathSearch ────────────────────────────────────────────────────────────────

/// The default [`PathFinder`]: A* with octile heuristic.
#[derive(Clone, Debug, Default)]
pub struct PathSearch {
    config: SearchConfig,
}

impl PathSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Begin a search between two cells rather than world points.
    pub fn begin_cells(
        &self,
        grid: &NavigationGrid,
        start: GridCoord,
        goal: GridCoord,
    ) -> SearchResult<AStarSearch> {
        if !grid.is_walkable(start) {
            trace!("search {start} → {goal}: start blocked");
            return Err(SearchError::StartBlocked(start));
        }
        let radius = self.config.goal_search_radius;
        let Some(relaxed) = relax_goal(grid, goal, radius) else {
            trace!("search {start} → {goal}: no walkable cell within {radius}");
            return Err(SearchError::GoalUnreachable { goal, radius });
        };
        if relaxed != goal {
            trace!("search goal {goal} relaxed to {relaxed}");
        }
        Ok(AStarSearch::new(start, goal, relaxed, &self.config))
    }
}

impl PathFinder for PathSearch {
    type Session = AStarSearch;

    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn begin(
        &self,
        grid: &NavigationGrid,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> SearchResult<AStarSearch> {
        self.begin_cells(grid, grid.world_to_grid(start), grid.world_to_grid(goal))
    }
}

// ── Open-set entry ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug)]
struct OpenNode {
    f:    f32,
    seq:  u64,
    cell: GridCoord,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap; lowest f, then lowest seq, on top.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── AStarSearch ───────────────────────────────────────────────────────────────

/// Resumable A* state for one (start, goal) pair.
pub struct AStarSearch {
    start:          GridCoord,
    requested:      GridCoord,
    goal:           GridCoord,
    goal_radius:    i32,
    allow_diagonal: bool,
    max_nodes:      usize,
    smoothing:      bool,

    open:     BinaryHeap<OpenNode>,
    g:        FxHashMap<GridCoord, f32>,
    parent:   FxHashMap<GridCoord, GridCoord>,
    closed:   FxHashSet<GridCoord>,
    seq:      u64,
    expanded: usize,
    scratch:  Vec<GridCoord>,
    finished: bool,
}

impl AStarSearch {
    fn new(start: GridCoord, requested: GridCoord, goal: GridCoord, config: &SearchConfig) -> Self {
        let mut s = Self {
            start,
            requested,
            goal,
            goal_radius: config.goal_search_radius,
            allow_diagonal: config.allow_diagonal,
            max_nodes: config.max_nodes,
            smoothing: config.smoothing,
            open: BinaryHeap::new(),
            g: FxHashMap::default(),
            parent: FxHashMap::default(),
            closed: FxHashSet::default(),
            seq: 0,
            expanded: 0,
            scratch: Vec::with_capacity(8),
            finished: false,
        };
        s.g.insert(start, 0.0);
        s.push(start, heuristic(start, goal));
        s
    }

    fn push(&mut self, cell: GridCoord, f: f32) {
        self.open.push(OpenNode { f, seq: self.seq, cell });
        self.seq += 1;
    }

    fn finish(&self, grid: &NavigationGrid) -> Path {
        let mut cells = vec![self.goal];
        let mut cur = self.goal;
        while let Some(&p) = self.parent.get(&cur) {
            cells.push(p);
            cur = p;
        }
        cells.reverse();

        let cost = self.g.get(&self.goal).copied().unwrap_or(0.0);
        let cells = if self.smoothing { smooth(grid, &cells) } else { cells };
        trace!(
            "search {} → {}: cost {cost:.2}, {} expansions, {} waypoints",
            self.start,
            self.goal,
            self.expanded,
            cells.len()
        );
        Path {
            waypoints: cells.into_iter().map(|c| grid.grid_to_world(c)).collect(),
            goal: self.goal,
            cost,
            nodes_expanded: self.expanded,
        }
    }
}

impl SearchSession for AStarSearch {
    fn advance(&mut self, grid: &NavigationGrid, budget: usize) -> SearchResult<SearchStep> {
        if self.finished {
            return Err(SearchError::Exhausted { expanded: self.expanded });
        }
        let mut steps = 0usize;
        while steps < budget.max(1) {
            let Some(node) = self.open.pop() else {
                self.finished = true;
                return Err(SearchError::Exhausted { expanded: self.expanded });
            };
            if self.closed.contains(&node.cell) {
                continue;
            }
            if node.cell == self.goal {
                self.finished = true;
                if !grid.is_walkable(self.goal) {
                    trace!("search {} → {}: goal blocked mid-search", self.start, self.goal);
                    return Err(SearchError::GoalUnreachable {
                        goal:   self.requested,
                        radius: self.goal_radius,
                    });
                }
                return Ok(SearchStep::Complete(self.finish(grid)));
            }
            if node.cell != self.start && !grid.is_walkable(node.cell) {
                continue;
            }
            if self.expanded >= self.max_nodes {
                self.finished = true;
                return Err(SearchError::NodeBudgetExceeded { expanded: self.expanded });
            }

            self.expanded += 1;
            steps += 1;
            self.closed.insert(node.cell);
            let g_cur = self.g.get(&node.cell).copied().unwrap_or(f32::INFINITY);

            let mut neighbours = std::mem::take(&mut self.scratch);
            grid.neighbors_into(node.cell, self.allow_diagonal, &mut neighbours);
            for &n in &neighbours {
                if self.closed.contains(&n) {
                    continue;
                }
                let tentative = g_cur + movement_cost(node.cell, n);
                if self.g.get(&n).is_none_or(|&old| tentative < old) {
                    self.g.insert(n, tentative);
                    self.parent.insert(n, node.cell);
                    self.push(n, tentative + heuristic(n, self.goal));
                }
            }
            self.scratch = neighbours;
        }
        Ok(SearchStep::Pending)
    }

    fn nodes_expanded(&self) -> usize {
        self.expanded
    }

    fn start(&self) -> GridCoord {
        self.start
    }

    fn goal(&self) -> GridCoord {
        self.goal
    }
}

//! `SpatialIndex`: uniform bucket grid over agent positions.
//!
//! Independent of (and usually coarser than) the navigation grid.  Updated
//! incrementally: an agent moves between buckets only when its bucket changes.

use rustc_hash::FxHashMap;

use nav_core::{AgentId, GridCoord, WorldPoint};

use crate::error::{ScheduleError, ScheduleResult};

/// Bucket coordinates are clamped to this magnitude.
const MAX_BUCKET: f32 = 1_048_576.0;

#[derive(Copy, Clone, Debug)]
struct Slot {
    bucket:   GridCoord,
    position: WorldPoint,
}

#[derive(Debug)]
pub struct SpatialIndex {
    cell_size: f32,
    buckets:   FxHashMap<GridCoord, Vec<AgentId>>,
    slots:     FxHashMap<AgentId, Slot>,
}

impl SpatialIndex {
    pub fn new(cell_size: f32) -> ScheduleResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(ScheduleError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cell_size,
            buckets: FxHashMap::default(),
            slots: FxHashMap::default(),
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn bucket_of_point(&self, p: WorldPoint) -> GridCoord {
        let axis = |v: f32| (v / self.cell_size).floor().clamp(-MAX_BUCKET, MAX_BUCKET) as i32;
        GridCoord::new(axis(p.x), axis(p.y))
    }

    /// Record `agent` at `position`.  Returns `true` if the agent was newly
    /// inserted or changed bucket.
    pub fn update(&mut self, agent: AgentId, position: WorldPoint) -> bool {
        let bucket = self.bucket_of_point(position);
        match self.slots.get_mut(&agent) {
            Some(slot) if slot.bucket == bucket => {
                slot.position = position;
                false
            }
            Some(slot) => {
                let old = slot.bucket;
                *slot = Slot { bucket, position };
                self.detach(agent, old);
                self.buckets.entry(bucket).or_default().push(agent);
                true
            }
            None => {
                self.slots.insert(agent, Slot { bucket, position });
                self.buckets.entry(bucket).or_default().push(agent);
                true
            }
        }
    }

    pub fn remove(&mut self, agent: AgentId) -> bool {
        match self.slots.remove(&agent) {
            Some(slot) => {
                self.detach(agent, slot.bucket);
                true
            }
            None => false,
        }
    }

    fn detach(&mut self, agent: AgentId, bucket: GridCoord) {
        if let Some(list) = self.buckets.get_mut(&bucket) {
            list.retain(|a| *a != agent);
            if list.is_empty() {
                self.buckets.remove(&bucket);
            }
        }
    }

    /// Agents within `radius` of `center`, sorted by id.
    pub fn query_radius(&self, center: WorldPoint, radius: f32) -> Vec<AgentId> {
        let mut out = Vec::new();
        if radius.is_nan() || radius < 0.0 {
            return out;
        }
        let r2 = radius * radius;
        let lo = self.bucket_of_point(WorldPoint::new(center.x - radius, center.y - radius));
        let hi = self.bucket_of_point(WorldPoint::new(center.x + radius, center.y + radius));
        let span = (hi.col as i64 - lo.col as i64 + 1) * (hi.row as i64 - lo.row as i64 + 1);

        let within = |slot: &Slot| slot.position.distance_sq(center) <= r2;
        if span > self.buckets.len() as i64 {
            // Query box covers more buckets than exist: scan occupied ones.
            out.extend(self.slots.iter().filter(|&(_, s)| within(s)).map(|(a, _)| *a));
        } else {
            for row in lo.row..=hi.row {
                for col in lo.col..=hi.col {
                    let Some(list) = self.buckets.get(&GridCoord::new(col, row)) else { continue };
                    for a in list {
                        if self.slots.get(a).is_some_and(within) {
                            out.push(*a);
                        }
                    }
                }
            }
        }
        out.sort_unstable();
        out
    }

    pub fn bucket(&self, agent: AgentId) -> Option<GridCoord> {
        self.slots.get(&agent).map(|s| s.bucket)
    }

    pub fn position(&self, agent: AgentId) -> Option<WorldPoint> {
        self.slots.get(&agent).map(|s| s.position)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Occupied buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

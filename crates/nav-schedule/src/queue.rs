//! `RequestQueue`: priority-ordered, de-duplicated path requests.
//!
//! # Ordering
//!
//! Highest priority first.  Equal priorities pop in enqueue order because
//! `RequestId`s are handed out monotonically and the lower id wins.  Requests
//! left in the queue at the end of a tick keep that order into the next.
//!
//! # In-flight set
//!
//! An agent is in flight from `push` until `finish` (or `remove_agent`).
//! Popping a request does not clear the marker: the caller clears it once
//! the request is resolved.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::warn;
use rustc_hash::FxHashSet;

use nav_core::{AgentId, RequestId, Tick, WorldPoint};

use crate::cache::CacheKey;

// ── PathRequest ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PathRequest {
    pub id:          RequestId,
    pub agent:       AgentId,
    /// Target at enqueue time.
    pub target:      WorldPoint,
    pub priority:    f32,
    pub enqueued_at: Tick,
    /// Cache key at enqueue time.
    pub key:         CacheKey,
}

/// Heap wrapper: max-heap on priority, then min on id.
#[derive(Debug)]
struct Queued(PathRequest);

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .priority
            .total_cmp(&other.0.priority)
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── RequestQueue ──────────────────────────────────────────────────────────────

/// Result of [`RequestQueue::push`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EnqueueOutcome {
    Queued(RequestId),
    /// The agent already has a request in flight.
    Duplicate,
    /// The queue is at its maximum length.
    Full,
}

#[derive(Debug)]
pub struct RequestQueue {
    heap:      BinaryHeap<Queued>,
    in_flight: FxHashSet<AgentId>,
    next_id:   RequestId,
    max_len:   Option<usize>,
    rejected:  u64,
}

impl Default for RequestQueue {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RequestQueue {
    /// `max_len = None` leaves the queue unbounded.
    pub fn new(max_len: Option<usize>) -> Self {
        Self {
            heap:      BinaryHeap::new(),
            in_flight: FxHashSet::default(),
            next_id:   RequestId(0),
            max_len,
            rejected:  0,
        }
    }

    pub fn push(
        &mut self,
        agent: AgentId,
        target: WorldPoint,
        priority: f32,
        now: Tick,
        key: CacheKey,
    ) -> EnqueueOutcome {
        if self.in_flight.contains(&agent) {
            return EnqueueOutcome::Duplicate;
        }
        if self.max_len.is_some_and(|max| self.heap.len() >= max) {
            self.rejected += 1;
            warn!("path request queue full ({}); rejecting {agent}", self.heap.len());
            return EnqueueOutcome::Full;
        }
        let id = self.next_id;
        self.next_id = id.next();
        self.in_flight.insert(agent);
        self.heap.push(Queued(PathRequest {
            id,
            agent,
            target,
            priority,
            enqueued_at: now,
            key,
        }));
        EnqueueOutcome::Queued(id)
    }

    /// Remove the highest-priority request.  Its agent stays in flight.
    pub fn pop(&mut self) -> Option<PathRequest> {
        self.heap.pop().map(|q| q.0)
    }

    pub fn peek(&self) -> Option<&PathRequest> {
        self.heap.peek().map(|q| &q.0)
    }

    /// Clear `agent`'s in-flight marker.
    pub fn finish(&mut self, agent: AgentId) -> bool {
        self.in_flight.remove(&agent)
    }

    /// Drop every trace of `agent`: queued requests and in-flight marker.
    pub fn remove_agent(&mut self, agent: AgentId) -> bool {
        let before = self.heap.len();
        self.heap.retain(|q| q.0.agent != agent);
        let dropped = self.heap.len() != before;
        self.in_flight.remove(&agent) || dropped
    }

    #[inline]
    pub fn is_in_flight(&self, agent: AgentId) -> bool {
        self.in_flight.contains(&agent)
    }

    /// Queued (not yet popped) requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn in_flight_len(&self) -> usize {
        self.in_flight.len()
    }

    /// Requests refused because the queue was full.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}

//! `PathCache`: TTL-bounded, capacity-bounded path cache.
//!
//! Keys are (start cell, goal cell) pairs.  Entries expire `ttl_secs` of
//! simulated time after insertion and are evicted oldest-first once the
//! cache is full.  Only successful searches are ever inserted.

use std::collections::BTreeMap;

use log::debug;
use rustc_hash::FxHashMap;

use nav_core::{GridCoord, WorldPoint};

/// (start, goal) in navigation-grid cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheKey {
    pub start: GridCoord,
    pub goal:  GridCoord,
}

impl CacheKey {
    #[inline]
    pub const fn new(start: GridCoord, goal: GridCoord) -> Self {
        Self { start, goal }
    }
}

#[derive(Debug)]
struct Entry {
    waypoints:   Vec<WorldPoint>,
    inserted_at: f64,
    seq:         u64,
}

#[derive(Debug)]
pub struct PathCache {
    entries:   FxHashMap<CacheKey, Entry>,
    /// Insertion sequence → key; first entry is the oldest.
    order:     BTreeMap<u64, CacheKey>,
    next_seq:  u64,
    capacity:  usize,
    ttl_secs:  f64,
    hits:      u64,
    misses:    u64,
    evictions: u64,
}

impl PathCache {
    /// `capacity == 0` disables caching.
    pub fn new(capacity: usize, ttl_secs: f64) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: BTreeMap::new(),
            next_seq: 0,
            capacity,
            ttl_secs,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Look up a fresh entry.  Counts a hit or a miss; an expired entry is
    /// dropped and counts as a miss.
    pub fn get(&mut self, key: &CacheKey, now_secs: f64) -> Option<&[WorldPoint]> {
        let fresh = self.entries.get(key).map(|e| self.is_fresh(e, now_secs));
        match fresh {
            Some(true) => {
                self.hits += 1;
                self.entries.get(key).map(|e| e.waypoints.as_slice())
            }
            Some(false) => {
                self.invalidate(key);
                self.misses += 1;
                None
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Peek without touching counters or expiring anything.
    pub fn contains(&self, key: &CacheKey, now_secs: f64) -> bool {
        self.entries.get(key).is_some_and(|e| self.is_fresh(e, now_secs))
    }

    /// Insert or replace, evicting the oldest entries to stay within capacity.
    pub fn insert(&mut self, key: CacheKey, waypoints: Vec<WorldPoint>, now_secs: f64) {
        if self.capacity == 0 {
            return;
        }
        self.invalidate(&key);
        while self.entries.len() >= self.capacity {
            let Some((_, oldest)) = self.order.pop_first() else { break };
            self.entries.remove(&oldest);
            self.evictions += 1;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, key);
        self.entries.insert(key, Entry { waypoints, inserted_at: now_secs, seq });
    }

    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        match self.entries.remove(key) {
            Some(e) => {
                self.order.remove(&e.seq);
                true
            }
            None => false,
        }
    }

    /// Drop every expired entry.  Returns how many were dropped.
    pub fn sweep_expired(&mut self, now_secs: f64) -> usize {
        let ttl = self.ttl_secs;
        let before = self.entries.len();
        let order = &mut self.order;
        self.entries.retain(|_, e| {
            let keep = now_secs - e.inserted_at < ttl;
            if !keep {
                order.remove(&e.seq);
            }
            keep
        });
        let dropped = before - self.entries.len();
        if dropped > 0 {
            debug!("path cache sweep: {dropped} expired, {} left", self.entries.len());
        }
        dropped
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    #[inline]
    fn is_fresh(&self, e: &Entry, now_secs: f64) -> bool {
        now_secs - e.inserted_at < self.ttl_secs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl_secs(&self) -> f64 {
        self.ttl_secs
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// `hits / (hits + misses)`, or 0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 { 0.0 } else { self.hits as f64 / total as f64 }
    }
}

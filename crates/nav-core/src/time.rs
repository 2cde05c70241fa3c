//! Simulation time model.
//!
//! # Design
//!
//! The host game calls the scheduler once per frame with a variable
//! `delta_time`.  Two clocks matter:
//!
//! - a monotonically increasing `Tick` counter, used for deterministic
//!   maintenance cadences (every N ticks) and request bookkeeping;
//! - accumulated *simulated* seconds, used for cache TTLs so that expiry is
//!   reproducible under a fixed timestep and unaffected by wall-clock stalls.
//!
//! Wall-clock time (`std::time::Instant`) is only used for the per-tick
//! search budget, which is inherently about real latency.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self` (zero if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tick counter plus accumulated simulated seconds.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by [`SimClock::advance`] each frame.
    pub current_tick: Tick,
    /// Simulated seconds elapsed since tick 0.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick covering `delta_secs` of simulated time.
    ///
    /// Negative or non-finite deltas are treated as zero.
    #[inline]
    pub fn advance(&mut self, delta_secs: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        if delta_secs.is_finite() && delta_secs > 0.0 {
            self.elapsed_secs += delta_secs as f64;
        }
    }

    /// Current simulated time in seconds.
    #[inline]
    pub fn now_secs(&self) -> f64 {
        self.elapsed_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs)
    }
}

//! Periodic maintenance triggers.
//!
//! `Every` fires on a fixed tick stride and is fully reproducible.  `Sampled`
//! fires with a fixed probability per tick using the scheduler's seeded RNG.
//! A `salt` staggers per-agent work across the stride so that refreshes for
//! many agents do not all land on the same tick.

use nav_core::{SimRng, Tick};

use crate::error::{ScheduleError, ScheduleResult};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum MaintenanceSchedule {
    Every { interval: u64 },
    Sampled { probability: f64 },
    Never,
}

impl MaintenanceSchedule {
    pub fn validate(&self) -> ScheduleResult<()> {
        match *self {
            MaintenanceSchedule::Every { interval: 0 } => Err(ScheduleError::ZeroInterval),
            MaintenanceSchedule::Sampled { probability } if !(0.0..=1.0).contains(&probability) => {
                Err(ScheduleError::InvalidProbability(probability))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaintenanceTimer {
    schedule: MaintenanceSchedule,
}

impl MaintenanceTimer {
    pub fn new(schedule: MaintenanceSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> MaintenanceSchedule {
        self.schedule
    }

    /// Whether work keyed by `salt` is due on `tick`.
    pub fn due(&self, tick: Tick, salt: u64, rng: &mut SimRng) -> bool {
        match self.schedule {
            MaintenanceSchedule::Every { interval } => {
                tick.0.wrapping_add(salt) % interval.max(1) == 0
            }
            MaintenanceSchedule::Sampled { probability } => rng.gen_bool(probability),
            MaintenanceSchedule::Never => false,
        }
    }
}

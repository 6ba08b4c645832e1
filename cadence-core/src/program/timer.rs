//! Per-step runtime timers
//!
//! Each configured step becomes a timer. A positive duration counts down to
//! zero and advances on its own; anything else counts up until the user
//! moves on.

use alloc::vec::Vec;

use crate::config::Step;
use crate::format::MS_PER_SECOND;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime timer for one step
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Timer {
    /// Counts remaining time down from `duration_ms`
    Countdown { duration_ms: f64 },
    /// Counts elapsed time up without bound
    CountUp,
}

impl Timer {
    /// Timer for a step duration given in seconds
    pub fn from_seconds(duration_s: f64) -> Self {
        if duration_s > 0.0 {
            Timer::Countdown {
                duration_ms: duration_s * MS_PER_SECOND,
            }
        } else {
            Timer::CountUp
        }
    }

    pub fn from_step(step: &Step) -> Self {
        Self::from_seconds(step.duration)
    }

    /// Initial clock value when the step is entered (ms)
    pub fn duration_ms(&self) -> f64 {
        match self {
            Timer::Countdown { duration_ms } => *duration_ms,
            Timer::CountUp => 0.0,
        }
    }

    /// Whether the clock counts down
    pub fn decrements(&self) -> bool {
        matches!(self, Timer::Countdown { .. })
    }
}

/// Build one timer per step, in order
pub fn build_timers(steps: &[Step]) -> Vec<Timer> {
    steps.iter().map(Timer::from_step).collect()
}

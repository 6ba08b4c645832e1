//! Configuration type definitions
//!
//! These types describe a workout and the engine parameters it runs with.
//! Hosts own persistence; the engine only reads step durations.

use alloc::vec::Vec;
use heapless::String;

use super::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 32;

/// Remaining time below which a countdown step is reported as elapsing (ms)
pub const DEFAULT_ELAPSING_THRESHOLD_MS: f64 = 5200.0;

/// Step type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepType {
    Warmup,
    #[default]
    Work,
    Rest,
    Cooldown,
}

impl StepType {
    /// Short display name
    pub fn as_str(&self) -> &'static str {
        match self {
            StepType::Warmup => "warmup",
            StepType::Work => "work",
            StepType::Rest => "rest",
            StepType::Cooldown => "cooldown",
        }
    }
}

/// A single configured phase of a workout
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// Step identifier
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String<MAX_LABEL_LEN>,
    /// Step type
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub step_type: StepType,
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String<MAX_LABEL_LEN>>,
    /// Duration in seconds (0 = open-ended, counts up until advanced)
    pub duration: f64,
}

impl Step {
    /// Create an unnamed work step
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    /// Set the step type
    pub fn with_type(mut self, step_type: StepType) -> Self {
        self.step_type = step_type;
        self
    }

    /// Set the display name, truncated to `MAX_LABEL_LEN` bytes
    pub fn with_name(mut self, name: &str) -> Self {
        let mut label = String::new();
        for c in name.chars() {
            if label.push(c).is_err() {
                break;
            }
        }
        self.name = Some(label);
        self
    }

    /// Display label: the name if set, otherwise the step type
    pub fn label(&self) -> &str {
        match &self.name {
            Some(name) => name.as_str(),
            None => self.step_type.as_str(),
        }
    }

    /// Whether this step runs until the user advances it
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_open_ended(&self) -> bool {
        !(self.duration > 0.0)
    }
}

/// An ordered list of steps
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Workout {
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String<MAX_LABEL_LEN>,
    /// Steps in execution order
    #[cfg_attr(feature = "serde", serde(default))]
    pub steps: Vec<Step>,
}

impl Workout {
    /// Sum of all timed step durations (seconds); open-ended steps count as 0
    pub fn timed_duration_s(&self) -> f64 {
        self.steps
            .iter()
            .filter(|s| !s.is_open_ended())
            .map(|s| s.duration)
            .sum()
    }

    /// Reject durations the engine cannot run meaningfully
    ///
    /// Negative and non-finite durations are data errors; an exact 0 is an
    /// intentional open-ended step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (step, s) in self.steps.iter().enumerate() {
            if !s.duration.is_finite() || s.duration < 0.0 {
                return Err(ConfigError::InvalidDuration { step });
            }
        }
        Ok(())
    }
}

/// Engine parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Remaining time (ms) below which a countdown reports `elapsing`
    pub elapsing_threshold_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            elapsing_threshold_ms: DEFAULT_ELAPSING_THRESHOLD_MS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elapsing_threshold_ms.is_finite() && self.elapsing_threshold_ms > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidThreshold)
        }
    }
}

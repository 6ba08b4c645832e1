//! TOML workout loader
//!
//! A workout file has an optional `[engine]` table and a `[workout]` table
//! whose steps are listed as `[[workout.steps]]`:
//!
//! ```toml
//! [engine]
//! elapsing_threshold_ms = 5200
//!
//! [workout]
//! name = "Tabata"
//!
//! [[workout.steps]]
//! type = "work"
//! name = "Squats"
//! duration = 20
//!
//! [[workout.steps]]
//! type = "rest"
//! duration = 0   # open-ended, advance manually
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::types::{EngineConfig, Workout};

/// Parsed workout file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutFile {
    #[serde(default)]
    pub engine: EngineConfig,
    pub workout: Workout,
}

/// Parse and validate a workout file
pub fn parse_workout(input: &str) -> Result<WorkoutFile, ConfigError> {
    let file: WorkoutFile = toml::from_str(input).map_err(ConfigError::syntax)?;
    file.engine.validate()?;
    file.workout.validate()?;

    debug!(
        "parsed workout with {} steps, threshold {} ms",
        file.workout.steps.len(),
        file.engine.elapsing_threshold_ms
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{StepType, DEFAULT_ELAPSING_THRESHOLD_MS};

    const TABATA: &str = r#"
[engine]
elapsing_threshold_ms = 3000

[workout]
name = "Tabata"

[[workout.steps]]
id = "warmup"
type = "warmup"
duration = 60

[[workout.steps]]
name = "Squats"
duration = 20.5

[[workout.steps]]
type = "rest"
duration = 0
"#;

    #[test]
    fn test_parse_full_file() {
        let file = parse_workout(TABATA).unwrap();

        assert_eq!(file.engine.elapsing_threshold_ms, 3000.0);
        assert_eq!(file.workout.name.as_str(), "Tabata");
        assert_eq!(file.workout.steps.len(), 3);

        let warmup = &file.workout.steps[0];
        assert_eq!(warmup.id.as_str(), "warmup");
        assert_eq!(warmup.step_type, StepType::Warmup);
        assert_eq!(warmup.duration, 60.0);

        let squats = &file.workout.steps[1];
        assert_eq!(squats.step_type, StepType::Work);
        assert_eq!(squats.label(), "Squats");
        assert_eq!(squats.duration, 20.5);

        assert!(file.workout.steps[2].is_open_ended());
    }

    #[test]
    fn test_engine_table_optional() {
        let file = parse_workout("[workout]\nname = \"Empty\"\n").unwrap();
        assert_eq!(
            file.engine.elapsing_threshold_ms,
            DEFAULT_ELAPSING_THRESHOLD_MS
        );
        assert!(file.workout.steps.is_empty());
    }

    #[test]
    fn test_missing_workout_table() {
        let result = parse_workout("[engine]\nelapsing_threshold_ms = 1000\n");
        assert!(matches!(result, Err(ConfigError::Syntax(_))));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let input = "[workout]\n[[workout.steps]]\nduration = 10\n[[workout.steps]]\nduration = -3\n";
        assert_eq!(
            parse_workout(input),
            Err(ConfigError::InvalidDuration { step: 1 })
        );
    }

    #[test]
    fn test_bad_threshold_rejected() {
        let input = "[engine]\nelapsing_threshold_ms = -1\n[workout]\n";
        assert_eq!(parse_workout(input), Err(ConfigError::InvalidThreshold));
    }

    #[test]
    fn test_unknown_step_type() {
        let input = "[workout]\n[[workout.steps]]\ntype = \"sprint\"\nduration = 10\n";
        assert!(matches!(parse_workout(input), Err(ConfigError::Syntax(_))));
    }
}

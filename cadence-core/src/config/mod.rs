//! Configuration types
//!
//! Workout definitions and engine parameters. With the `toml` feature,
//! workout files can be parsed from TOML.

pub mod error;
#[cfg(feature = "toml")]
pub mod loader;
pub mod types;

pub use error::*;
#[cfg(feature = "toml")]
pub use loader::{parse_workout, WorkoutFile};
pub use types::*;

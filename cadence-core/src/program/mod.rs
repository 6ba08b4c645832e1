//! Interval program engine
//!
//! A [`Program`] walks through a list of step timers, one frame at a time.

mod engine;
mod timer;
mod watch;

pub use engine::Program;
pub use timer::{build_timers, Timer};
pub use watch::Watched;

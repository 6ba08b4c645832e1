//! Board-agnostic core logic for the interval workout timer
//!
//! This crate contains all timing logic that does not depend on a specific
//! host or frame source:
//!
//! - Program engine (countdown and count-up steps, change notifications)
//! - Program state machine
//! - Observer and frame source traits
//! - Frame loop with an explicit dispose hook
//! - Clock formatting
//! - Workout and engine configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod config;
pub mod format;
pub mod frame;
pub mod program;
pub mod state;
pub mod traits;

pub use config::{EngineConfig, Step, StepType, Workout};
pub use frame::FrameLoop;
pub use program::{Program, Timer};
pub use state::{Event, ProgramState};
pub use traits::{Callbacks, FrameSource, Notification, ProgramObserver};

//! Program state machine and events

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::ProgramState;

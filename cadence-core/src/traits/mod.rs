//! Host abstraction traits
//!
//! These traits define the interface between the engine and whatever hosts
//! it: who receives change notifications, and where frames come from.

pub mod frame_source;
pub mod observer;

pub use frame_source::FrameSource;
pub use observer::{Callbacks, Notification, ProgramObserver};

//! Cross-task communication
//!
//! The stdin reader runs on its own OS thread, so everything here uses
//! `CriticalSectionRawMutex` (backed by the `critical-section` std
//! implementation).

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use cadence_core::Event;

/// Command inbox capacity
pub const COMMAND_CHANNEL_SIZE: usize = 8;

/// User commands waiting for the frame loop
pub static COMMANDS: Channel<CriticalSectionRawMutex, Event, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Ends the frame loop (quit key or finished workout)
pub static DISPOSE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

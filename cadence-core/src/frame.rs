//! Frame loop
//!
//! Drives a [`Program`] from a [`FrameSource`]: every frame is fed to
//! [`Program::tick`], queued commands are dispatched between frames, and the
//! dispose signal ends the loop. The loop keeps running in every program
//! state; stopping or finishing the program only stops time accumulation.

use embassy_futures::select::{select3, Either3};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::program::Program;
use crate::state::Event;
use crate::traits::{FrameSource, ProgramObserver};

/// Frame loop over a command inbox and a dispose signal
///
/// Both are borrowed so the host can keep them in statics and reach them from
/// other tasks or from the program observer.
pub struct FrameLoop<'a, M: RawMutex, const N: usize> {
    commands: &'a Channel<M, Event, N>,
    dispose: &'a Signal<M, ()>,
}

impl<'a, M: RawMutex, const N: usize> FrameLoop<'a, M, N> {
    pub const fn new(commands: &'a Channel<M, Event, N>, dispose: &'a Signal<M, ()>) -> Self {
        Self { commands, dispose }
    }

    /// Ask a running loop to exit
    ///
    /// A dispose requested before [`FrameLoop::run`] ends that run as soon as
    /// it starts waiting.
    pub fn dispose(&self) {
        self.dispose.signal(());
    }

    /// Run until disposed, returning the number of frames processed
    pub async fn run<O, F>(&self, program: &mut Program<O>, frames: &mut F) -> u64
    where
        O: ProgramObserver,
        F: FrameSource,
    {
        program.reset_clock(frames.now_ms());
        let mut frame_count: u64 = 0;

        loop {
            match select3(
                frames.next_frame(),
                self.commands.receive(),
                self.dispose.wait(),
            )
            .await
            {
                Either3::First(timestamp_ms) => {
                    program.tick(timestamp_ms);
                    frame_count += 1;
                }

                Either3::Second(event) => {
                    debug!("command: {:?}", event);
                    program.dispatch(event);
                }

                Either3::Third(()) => {
                    info!("frame loop disposed after {} frames", frame_count);
                    return frame_count;
                }
            }
        }
    }
}

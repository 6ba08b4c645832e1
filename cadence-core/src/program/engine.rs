//! Program engine
//!
//! Owns the step timers and the current timing state, turns frame intervals
//! into countdown/count-up progress, and reports every observed change to a
//! [`ProgramObserver`].

use alloc::vec::Vec;

use super::timer::{build_timers, Timer};
use super::watch::Watched;
use crate::config::{EngineConfig, Step};
use crate::state::{Event, ProgramState};
use crate::traits::ProgramObserver;

/// Clamp a frame interval to a usable value
///
/// Frames may stall (hidden window, debugger) and produce huge intervals;
/// those pass through untouched. Negative or non-finite intervals count as 0.
fn sanitize_interval(interval_ms: f64) -> f64 {
    if interval_ms.is_finite() && interval_ms > 0.0 {
        interval_ms
    } else {
        if interval_ms != 0.0 {
            warn!("ignoring frame interval {}", interval_ms);
        }
        0.0
    }
}

/// Interval timer program
///
/// Observed fields are `state`, `time`, `step index` and `elapsing`. Every
/// write goes through a [`Watched`] cell, and the observer hears about it only
/// if the value changed. Within one operation, fields are written in that
/// order, so notifications arrive as state, time, step index, elapsing.
/// Once an operation has reported its last change, the observer gets
/// [`ProgramObserver::on_settled`].
pub struct Program<O: ProgramObserver = ()> {
    /// One timer per step, fixed at construction
    timers: Vec<Timer>,
    /// Engine parameters
    config: EngineConfig,
    /// Current program state
    state: Watched<ProgramState>,
    /// Remaining (countdown) or elapsed (count-up) time on the current step (ms)
    time: Watched<f64>,
    /// Current step, `None` while inactive
    index: Watched<Option<usize>>,
    /// Current countdown is below the elapsing threshold
    elapsing: Watched<bool>,
    /// Time spent running since the last start (ms)
    elapsed_ms: f64,
    /// Timestamp of the previous frame (ms)
    prev_timestamp: f64,
    /// A change was reported since the last `on_settled`
    changed: bool,
    /// Change receiver
    observer: O,
}

impl<O: ProgramObserver> Program<O> {
    /// Create a program with the default engine configuration
    pub fn new(steps: &[Step], observer: O) -> Self {
        Self::with_config(steps, observer, EngineConfig::default())
    }

    /// Create a program with explicit engine parameters
    pub fn with_config(steps: &[Step], observer: O, config: EngineConfig) -> Self {
        Self::from_timers(build_timers(steps), observer, config)
    }

    /// Create a program from prebuilt timers
    pub fn from_timers(timers: Vec<Timer>, observer: O, config: EngineConfig) -> Self {
        let first = timers.first().map_or(0.0, Timer::duration_ms);
        Self {
            timers,
            config,
            state: Watched::new(ProgramState::Stopped),
            time: Watched::new(first),
            index: Watched::new(None),
            elapsing: Watched::new(false),
            elapsed_ms: 0.0,
            prev_timestamp: 0.0,
            changed: false,
            observer,
        }
    }

    /// Get current program state
    pub fn state(&self) -> ProgramState {
        self.state.get()
    }

    /// Remaining time (countdown) or elapsed time (count-up) on the current step (ms)
    ///
    /// Never negative.
    pub fn time(&self) -> f64 {
        self.time.get()
    }

    /// Current step index, `None` while stopped or finished
    pub fn step_index(&self) -> Option<usize> {
        self.index.get()
    }

    /// Whether the current countdown is in its final stretch
    pub fn elapsing(&self) -> bool {
        self.elapsing.get()
    }

    /// Time spent running since the last start (ms)
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_ms
    }

    /// Same as [`Program::elapsed_time`]
    pub fn total_time(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn is_active(&self) -> bool {
        self.state.get().is_active()
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn step_count(&self) -> usize {
        self.timers.len()
    }

    /// Timer of the current step (if active)
    pub fn current_timer(&self) -> Option<&Timer> {
        self.index.get().and_then(|i| self.timers.get(i))
    }

    /// Sum of all countdown durations (ms); count-up steps add nothing
    pub fn program_duration_ms(&self) -> f64 {
        self.timers.iter().map(Timer::duration_ms).sum()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the program, returning its observer
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Start from the first step
    ///
    /// Legal in every state. Resets elapsed time and clears `elapsing`.
    /// A program without steps runs with no step index, so no index change
    /// is reported.
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.apply(Event::Start);
        self.set_time(self.first_duration());
        self.set_index(if self.timers.is_empty() { None } else { Some(0) });
        self.set_elapsing(false);
        self.settle();
    }

    /// Return to the inactive state
    ///
    /// Legal in every state.
    pub fn stop(&mut self) {
        self.apply(Event::Stop);
        self.reset();
        self.set_elapsing(false);
        self.settle();
    }

    /// Resume a paused program (no-op while inactive)
    pub fn play(&mut self) {
        if !self.is_active() {
            return;
        }
        self.apply(Event::Play);
        self.settle();
    }

    /// Pause a running program (no-op while inactive)
    pub fn pause(&mut self) {
        if !self.is_active() {
            return;
        }
        self.apply(Event::Pause);
        self.settle();
    }

    /// Advance one step, finishing the program after the last one
    ///
    /// No-op while inactive. Always cancels `elapsing`.
    pub fn next_step(&mut self) {
        if !self.is_active() {
            return;
        }

        let next = self.index.get().map_or(0, |i| i + 1);
        if let Some(timer) = self.timers.get(next).copied() {
            self.set_time(timer.duration_ms());
            self.set_index(Some(next));
        } else {
            // All steps complete
            self.apply(Event::StepsExhausted);
            self.reset();
        }

        self.set_elapsing(false);
        self.settle();
    }

    /// Go back one step
    ///
    /// No-op while inactive or on the first step. Otherwise cancels
    /// `elapsing` like [`Program::next_step`].
    pub fn previous_step(&mut self) {
        if !self.is_active() {
            return;
        }

        let Some(prev) = self.index.get().and_then(|i| i.checked_sub(1)) else {
            return;
        };
        if let Some(timer) = self.timers.get(prev).copied() {
            self.set_time(timer.duration_ms());
            self.set_index(Some(prev));
            self.set_elapsing(false);
            self.settle();
        }
    }

    /// Apply a user command
    pub fn dispatch(&mut self, event: Event) {
        if event.requires_active() && !self.is_active() {
            debug!("ignoring {:?} while {:?}", event, self.state());
            return;
        }

        match event {
            Event::Start => self.start(),
            Event::Stop => self.stop(),
            Event::Play => self.play(),
            Event::Pause => self.pause(),
            Event::NextStep => self.next_step(),
            Event::PreviousStep => self.previous_step(),
            Event::StepsExhausted => {
                warn!("ignoring engine event {:?} from outside", event);
            }
        }
    }

    /// Set the timestamp the next frame interval is measured from (ms)
    pub fn reset_clock(&mut self, now_ms: f64) {
        self.prev_timestamp = now_ms;
    }

    /// Process one frame
    ///
    /// Measures the interval since the previous frame and feeds it to
    /// [`Program::update_time`]. Runs in every state; only `Running`
    /// accumulates time.
    pub fn tick(&mut self, timestamp_ms: f64) {
        let interval = timestamp_ms - self.prev_timestamp;
        self.prev_timestamp = timestamp_ms;
        self.update_time(interval);
    }

    /// Advance the clock by one frame interval (ms)
    ///
    /// Countdown steps that reach zero advance to the next step; overshoot is
    /// discarded. Count-up steps grow until the user advances.
    pub fn update_time(&mut self, interval_ms: f64) {
        if !self.state.get().accumulates_time() {
            return;
        }

        let interval = sanitize_interval(interval_ms);
        self.elapsed_ms += interval;

        let decrements = self.current_timer().map_or(false, Timer::decrements);
        if !decrements {
            // Open-ended step (or empty program): count up
            self.set_time(self.time.get() + interval);
            self.settle();
            return;
        }

        let remaining = self.time.get() - interval;
        self.set_time(if remaining < 0.0 { 0.0 } else { remaining });

        // Checked before the zero clamp so the warning can fire on the
        // completing frame
        if !self.elapsing.get() && remaining < self.config.elapsing_threshold_ms {
            self.set_elapsing(true);
        }

        if remaining < 0.0 {
            // Reports the whole frame once the step change is done
            self.next_step();
        } else {
            self.settle();
        }
    }

    /// Initial time of the first step (ms)
    fn first_duration(&self) -> f64 {
        self.timers.first().map_or(0.0, Timer::duration_ms)
    }

    /// Clear the step pointer and reload the first step's time
    fn reset(&mut self) {
        self.set_time(self.first_duration());
        self.set_index(None);
    }

    /// Close one operation's batch of notifications
    fn settle(&mut self) {
        if core::mem::take(&mut self.changed) {
            self.observer.on_settled();
        }
    }

    /// Perform state transition
    fn apply(&mut self, event: Event) {
        let next = self.state.get().transition(event);
        self.set_state(next);
    }

    fn set_state(&mut self, state: ProgramState) {
        if self.state.set(state) {
            debug!("program state -> {:?}", state);
            self.changed = true;
            self.observer.on_state(state);
        }
    }

    fn set_time(&mut self, time_ms: f64) {
        if self.time.set(time_ms) {
            self.changed = true;
            self.observer.on_time(time_ms);
        }
    }

    fn set_index(&mut self, index: Option<usize>) {
        if self.index.set(index) {
            debug!("step index -> {:?}", index);
            self.changed = true;
            self.observer.on_step_index(index);
        }
    }

    fn set_elapsing(&mut self, elapsing: bool) {
        if self.elapsing.set(elapsing) {
            trace!("elapsing -> {}", elapsing);
            self.changed = true;
            self.observer.on_elapsing(elapsing);
        }
    }
}

impl<O: ProgramObserver> core::fmt::Debug for Program<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Program")
            .field("timers", &self.timers)
            .field("config", &self.config)
            .field("state", &self.state.get())
            .field("time", &self.time.get())
            .field("index", &self.index.get())
            .field("elapsing", &self.elapsing.get())
            .field("elapsed_ms", &self.elapsed_ms)
            .finish_non_exhaustive()
    }
}

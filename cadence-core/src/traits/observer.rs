//! Program observer trait
//!
//! The engine reports every observed field change through this trait. Each
//! method is called once per actual change, never for a write that leaves the
//! value unchanged.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::state::ProgramState;

/// A single observed change
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    State(ProgramState),
    /// Remaining (countdown) or elapsed (count-up) time in ms
    Time(f64),
    /// Current step, `None` while inactive
    StepIndex(Option<usize>),
    Elapsing(bool),
}

/// Receiver for program changes
///
/// All methods default to no-ops, so an observer only implements what it
/// consumes. Calls arrive synchronously in field order: state, time, step
/// index, elapsing.
pub trait ProgramObserver {
    /// Program state changed
    fn on_state(&mut self, _state: ProgramState) {}

    /// Displayed time changed (ms)
    fn on_time(&mut self, _time_ms: f64) {}

    /// Step index changed
    fn on_step_index(&mut self, _index: Option<usize>) {}

    /// Current countdown entered or left its final seconds
    fn on_elapsing(&mut self, _elapsing: bool) {}

    /// All changes from one operation (command or frame) have been reported
    ///
    /// Not called for operations that changed nothing. Observers that render
    /// a whole view should draw here, where every field is consistent.
    fn on_settled(&mut self) {}

    /// Route a notification to the matching method
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::State(state) => self.on_state(state),
            Notification::Time(time_ms) => self.on_time(time_ms),
            Notification::StepIndex(index) => self.on_step_index(index),
            Notification::Elapsing(elapsing) => self.on_elapsing(elapsing),
        }
    }
}

/// Ignores everything
impl ProgramObserver for () {}

impl<T: ProgramObserver + ?Sized> ProgramObserver for &mut T {
    fn on_state(&mut self, state: ProgramState) {
        (**self).on_state(state)
    }

    fn on_time(&mut self, time_ms: f64) {
        (**self).on_time(time_ms)
    }

    fn on_step_index(&mut self, index: Option<usize>) {
        (**self).on_step_index(index)
    }

    fn on_elapsing(&mut self, elapsing: bool) {
        (**self).on_elapsing(elapsing)
    }

    fn on_settled(&mut self) {
        (**self).on_settled()
    }
}

/// Records every notification in arrival order
impl ProgramObserver for Vec<Notification> {
    fn on_state(&mut self, state: ProgramState) {
        self.push(Notification::State(state));
    }

    fn on_time(&mut self, time_ms: f64) {
        self.push(Notification::Time(time_ms));
    }

    fn on_step_index(&mut self, index: Option<usize>) {
        self.push(Notification::StepIndex(index));
    }

    fn on_elapsing(&mut self, elapsing: bool) {
        self.push(Notification::Elapsing(elapsing));
    }
}

type Callback<'a, T> = Option<Box<dyn FnMut(T) + 'a>>;

/// Observer assembled from optional closures
///
/// Slots left empty are no-ops.
#[derive(Default)]
pub struct Callbacks<'a> {
    on_state: Callback<'a, ProgramState>,
    on_time: Callback<'a, f64>,
    on_step_index: Callback<'a, Option<usize>>,
    on_elapsing: Callback<'a, bool>,
}

impl<'a> Callbacks<'a> {
    /// Create an observer with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, f: impl FnMut(ProgramState) + 'a) -> Self {
        self.on_state = Some(Box::new(f));
        self
    }

    pub fn with_time(mut self, f: impl FnMut(f64) + 'a) -> Self {
        self.on_time = Some(Box::new(f));
        self
    }

    pub fn with_step_index(mut self, f: impl FnMut(Option<usize>) + 'a) -> Self {
        self.on_step_index = Some(Box::new(f));
        self
    }

    pub fn with_elapsing(mut self, f: impl FnMut(bool) + 'a) -> Self {
        self.on_elapsing = Some(Box::new(f));
        self
    }
}

impl ProgramObserver for Callbacks<'_> {
    fn on_state(&mut self, state: ProgramState) {
        if let Some(f) = self.on_state.as_mut() {
            f(state);
        }
    }

    fn on_time(&mut self, time_ms: f64) {
        if let Some(f) = self.on_time.as_mut() {
            f(time_ms);
        }
    }

    fn on_step_index(&mut self, index: Option<usize>) {
        if let Some(f) = self.on_step_index.as_mut() {
            f(index);
        }
    }

    fn on_elapsing(&mut self, elapsing: bool) {
        if let Some(f) = self.on_elapsing.as_mut() {
            f(elapsing);
        }
    }
}

impl core::fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_state", &self.on_state.is_some())
            .field("on_time", &self.on_time.is_some())
            .field("on_step_index", &self.on_step_index.is_some())
            .field("on_elapsing", &self.on_elapsing.is_some())
            .finish()
    }
}

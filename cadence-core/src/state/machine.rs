//! Program state machine
//!
//! Time accumulation and the meaning of every command depend on the current
//! state and an event.

use super::events::Event;

/// Program states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgramState {
    /// No step selected; initial state
    #[default]
    Stopped,
    /// Time is accumulating on the current step
    Running,
    /// Step selected, time frozen
    Paused,
    /// All steps completed
    Finished,
}

impl ProgramState {
    /// Check if a step is selected (play, pause and navigation allowed)
    pub fn is_active(&self) -> bool {
        matches!(self, ProgramState::Running | ProgramState::Paused)
    }

    /// Check if frame intervals advance the clock in this state
    pub fn accumulates_time(&self) -> bool {
        matches!(self, ProgramState::Running)
    }

    /// Check if this is a terminal state requiring `Start`
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgramState::Finished)
    }

    /// Process an event and return the next state
    ///
    /// Navigation events never change state on their own; running off the
    /// end is reported separately as `StepsExhausted`.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use ProgramState::*;

        match (self, event) {
            // Always legal
            (_, Start) => Running,
            (_, Stop) => Stopped,

            // Execution control
            (Paused, Play) => Running,
            (Running, Pause) => Paused,

            // Completion
            (Running | Paused, StepsExhausted) => Finished,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ProgramState; 4] = [
        ProgramState::Stopped,
        ProgramState::Running,
        ProgramState::Paused,
        ProgramState::Finished,
    ];

    #[test]
    fn test_initial_state() {
        assert_eq!(ProgramState::default(), ProgramState::Stopped);
    }

    #[test]
    fn test_start_and_stop_from_any_state() {
        for state in ALL {
            assert_eq!(state.transition(Event::Start), ProgramState::Running);
            assert_eq!(state.transition(Event::Stop), ProgramState::Stopped);
        }
    }

    #[test]
    fn test_pause_play_flow() {
        let paused = ProgramState::Running.transition(Event::Pause);
        assert_eq!(paused, ProgramState::Paused);

        let running = paused.transition(Event::Play);
        assert_eq!(running, ProgramState::Running);

        // Repeats are idempotent
        assert_eq!(running.transition(Event::Play), ProgramState::Running);
        assert_eq!(paused.transition(Event::Pause), ProgramState::Paused);
    }

    #[test]
    fn test_inactive_states_ignore_controls() {
        for state in [ProgramState::Stopped, ProgramState::Finished] {
            for event in [
                Event::Play,
                Event::Pause,
                Event::NextStep,
                Event::PreviousStep,
                Event::StepsExhausted,
            ] {
                assert_eq!(state.transition(event), state);
            }
        }
    }

    #[test]
    fn test_steps_exhausted_finishes() {
        assert_eq!(
            ProgramState::Running.transition(Event::StepsExhausted),
            ProgramState::Finished
        );
        assert_eq!(
            ProgramState::Paused.transition(Event::StepsExhausted),
            ProgramState::Finished
        );
    }

    #[test]
    fn test_activity() {
        assert!(ProgramState::Running.is_active());
        assert!(ProgramState::Paused.is_active());
        assert!(!ProgramState::Stopped.is_active());
        assert!(!ProgramState::Finished.is_active());

        assert!(ProgramState::Running.accumulates_time());
        assert!(!ProgramState::Paused.accumulates_time());
        assert!(ProgramState::Finished.is_terminal());
    }
}

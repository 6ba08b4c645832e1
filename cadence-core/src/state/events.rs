//! Events that trigger program transitions

/// Events that can change a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle commands
    /// Begin at the first step, resetting elapsed time
    Start,
    /// Return to the inactive state
    Stop,

    // Execution control commands
    /// Resume a paused program
    Play,
    /// Pause a running program
    Pause,

    // Navigation commands
    /// Advance to the following step (finishes after the last one)
    NextStep,
    /// Go back one step (no-op on the first)
    PreviousStep,

    // Engine events
    /// Advanced past the last step
    StepsExhausted,
}

impl Event {
    /// Check if this event is user-initiated
    pub fn is_user_event(&self) -> bool {
        !matches!(self, Event::StepsExhausted)
    }

    /// Check if this event is ignored while the program is inactive
    pub fn requires_active(&self) -> bool {
        !matches!(self, Event::Start | Event::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_events() {
        assert!(Event::Start.is_user_event());
        assert!(Event::Pause.is_user_event());
        assert!(Event::PreviousStep.is_user_event());
        assert!(!Event::StepsExhausted.is_user_event());
    }

    #[test]
    fn test_guarded_events() {
        assert!(!Event::Start.requires_active());
        assert!(!Event::Stop.requires_active());
        assert!(Event::Play.requires_active());
        assert!(Event::NextStep.requires_active());
    }
}

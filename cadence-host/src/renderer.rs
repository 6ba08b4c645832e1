//! Console renderer
//!
//! Prints a line on every state change, a header on every step change, and
//! keeps one live clock line underneath, rewritten in place once per
//! displayed second. Notifications only update the model; drawing happens
//! when the program reports an operation as settled, so the clock is never
//! drawn against a stale step.

use std::io::{self, Write};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use heapless::String;
use log::info;

use cadence_core::config::{Step, Workout, MAX_LABEL_LEN};
use cadence_core::format::TimeParts;
use cadence_core::{ProgramObserver, ProgramState};

use crate::channels::DISPOSE;

/// Program observer that renders to a terminal
pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    /// Signalled when the workout finishes
    dispose: &'static Signal<CriticalSectionRawMutex, ()>,
    name: String<MAX_LABEL_LEN>,
    steps: Vec<Step>,

    // Latest reported values
    state: ProgramState,
    time_ms: f64,
    index: Option<usize>,
    elapsing: bool,

    // What is on screen
    shown_state: ProgramState,
    shown_index: Option<usize>,
    /// Whole second last drawn on the clock line
    shown_second: Option<u64>,
}

impl ConsoleRenderer {
    /// Render to stdout, closing the frame loop on finish
    pub fn new(workout: &Workout) -> Self {
        Self::with_output(workout, io::stdout(), &DISPOSE)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn with_output(
        workout: &Workout,
        out: W,
        dispose: &'static Signal<CriticalSectionRawMutex, ()>,
    ) -> Self {
        Self {
            out,
            dispose,
            name: workout.name.clone(),
            steps: workout.steps.clone(),
            state: ProgramState::Stopped,
            time_ms: 0.0,
            index: None,
            elapsing: false,
            shown_state: ProgramState::Stopped,
            shown_index: None,
            shown_second: None,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Header for a step, e.g. `[2/9] Squats (work, 20 s)`
    pub fn step_header(&self, index: usize) -> std::string::String {
        let Some(step) = self.steps.get(index) else {
            return format!("[{}/{}]", index + 1, self.steps.len());
        };

        let length = if step.is_open_ended() {
            "open".to_string()
        } else {
            format!("{} s", step.duration)
        };
        format!(
            "[{}/{}] {} ({}, {})",
            index + 1,
            self.steps.len(),
            step.label(),
            step.step_type.as_str(),
            length
        )
    }

    /// Clock line contents
    pub fn clock_line(&self, parts: &TimeParts) -> std::string::String {
        let marker = if self.elapsing { " <<" } else { "" };
        format!("  {}{}", parts, marker)
    }

    fn state_line(&self) -> std::string::String {
        match self.state {
            ProgramState::Running => "> running".to_string(),
            ProgramState::Paused => "|| paused".to_string(),
            ProgramState::Stopped => "[] stopped".to_string(),
            ProgramState::Finished => format!("{} complete", self.name),
        }
    }

    fn draw_clock(&mut self) {
        let parts = TimeParts::from_ms(self.time_ms);
        let second = parts.whole_seconds();
        if self.shown_second == Some(second) {
            return;
        }
        self.shown_second = Some(second);

        let line = self.clock_line(&parts);
        let _ = write!(self.out, "\r{:<24}", line);
        let _ = self.out.flush();
    }

    fn println(&mut self, line: &str) {
        let _ = writeln!(self.out, "\r\n{}", line);
        let _ = self.out.flush();
    }
}

impl<W: Write> ProgramObserver for ConsoleRenderer<W> {
    fn on_state(&mut self, state: ProgramState) {
        self.state = state;
    }

    fn on_time(&mut self, time_ms: f64) {
        self.time_ms = time_ms;
    }

    fn on_step_index(&mut self, index: Option<usize>) {
        self.index = index;
    }

    fn on_elapsing(&mut self, elapsing: bool) {
        self.elapsing = elapsing;
        // Redraw with or without the marker
        self.shown_second = None;
    }

    fn on_settled(&mut self) {
        if self.shown_state != self.state {
            self.shown_state = self.state;
            let line = self.state_line();
            self.println(&line);

            if self.state.is_terminal() {
                info!("workout finished, closing");
                self.dispose.signal(());
            }
        }

        if self.shown_index != self.index {
            self.shown_index = self.index;
            self.shown_second = None;
            if let Some(index) = self.index {
                let header = self.step_header(index);
                self.println(&header);
            }
        }

        if self.index.is_some() {
            self.draw_clock();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::{Program, StepType};

    static TEST_DISPOSE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

    fn workout(name: &str, steps: Vec<Step>) -> Workout {
        Workout {
            name: String::try_from(name).unwrap(),
            steps,
        }
    }

    fn renderer(workout: &Workout) -> ConsoleRenderer<Vec<u8>> {
        ConsoleRenderer::with_output(workout, Vec::new(), &TEST_DISPOSE)
    }

    /// Everything drawn, one entry per line or clock redraw
    fn drawn(program: &Program<ConsoleRenderer<Vec<u8>>>) -> Vec<std::string::String> {
        std::str::from_utf8(program.observer().output())
            .unwrap()
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_step_header() {
        let workout = workout(
            "Test",
            vec![
                Step::new(20.0).with_name("Squats"),
                Step::new(0.0).with_type(StepType::Rest),
            ],
        );
        let renderer = renderer(&workout);
        assert_eq!(renderer.step_header(0), "[1/2] Squats (work, 20 s)");
        assert_eq!(renderer.step_header(1), "[2/2] rest (rest, open)");
        assert_eq!(renderer.step_header(5), "[6/2]");
    }

    #[test]
    fn test_clock_line_marks_elapsing() {
        let workout = workout("Test", vec![Step::new(20.0)]);
        let mut renderer = renderer(&workout);
        let parts = TimeParts::from_ms(4_500.0);
        assert_eq!(renderer.clock_line(&parts), "  00:00:04.50");

        renderer.on_elapsing(true);
        assert_eq!(renderer.clock_line(&parts), "  00:00:04.50 <<");
    }

    #[test]
    fn test_clock_drawn_under_current_step() {
        let workout = workout("W", vec![Step::new(60.0), Step::new(2.0)]);
        let mut program = Program::new(&workout.steps, renderer(&workout));

        program.start();
        program.next_step();
        program.update_time(2100.0);

        assert_eq!(
            drawn(&program),
            [
                "> running",
                "[1/2] work (work, 60 s)",
                "00:01:00.00",
                "[2/2] work (work, 2 s)",
                "00:00:02.00",
                "W complete",
            ]
        );
        assert_eq!(program.state(), ProgramState::Finished);
    }

    #[test]
    fn test_stop_leaves_no_stale_clock() {
        let workout = workout("W", vec![Step::new(6.0)]);
        let mut program = Program::new(&workout.steps, renderer(&workout));

        program.start();
        program.update_time(1000.0);
        program.stop();

        assert_eq!(
            drawn(&program),
            [
                "> running",
                "[1/1] work (work, 6 s)",
                "00:00:06.00",
                "00:00:05.00 <<",
                "[] stopped",
            ]
        );
    }

    #[test]
    fn test_clock_throttled_to_seconds() {
        let workout = workout("W", vec![Step::new(20.0)]);
        let mut program = Program::new(&workout.steps, renderer(&workout));
        program.start();

        program.update_time(10.0);
        program.update_time(900.0);
        program.update_time(100.0);

        assert_eq!(
            drawn(&program),
            [
                "> running",
                "[1/1] work (work, 20 s)",
                "00:00:20.00",
                "00:00:19.99",
                "00:00:18.99",
            ]
        );
    }

    #[test]
    fn test_finish_disposes_loop() {
        static DONE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

        let workout = workout("W", vec![Step::new(1.0)]);
        let renderer = ConsoleRenderer::with_output(&workout, Vec::new(), &DONE);
        let mut program = Program::new(&workout.steps, renderer);

        program.start();
        assert!(!DONE.signaled());

        program.update_time(1500.0);
        assert!(DONE.signaled());
    }
}

//! Cadence - Interval Workout Timer
//!
//! Console runner: loads a workout file, starts it immediately, and drives
//! the program from a ~60 Hz ticker until the workout finishes or the user
//! quits.
//!
//! Usage: `cadence <workout.toml>`

use std::fmt;
use std::io;

use embassy_executor::Spawner;
use log::{debug, error, info};

use cadence_core::config::{parse_workout, ConfigError, WorkoutFile};
use cadence_core::format::format_clock;
use cadence_core::{FrameLoop, Program};

mod channels;
mod frames;
mod input;
mod logging;
mod renderer;

use crate::channels::{COMMANDS, DISPOSE};
use crate::frames::TickerFrames;
use crate::logging::{init_logging, LoggingConfig};
use crate::renderer::ConsoleRenderer;

/// Startup failures
#[derive(Debug)]
enum RunError {
    /// No workout path given
    Usage,
    /// Workout file could not be read
    Read { path: String, source: io::Error },
    /// Workout file is malformed
    Config { path: String, source: ConfigError },
    /// Input thread could not be started
    Input(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Usage => write!(f, "usage: cadence <workout.toml>"),
            RunError::Read { path, source } => write!(f, "cannot read {}: {}", path, source),
            RunError::Config { path, source } => write!(f, "invalid workout {}: {}", path, source),
            RunError::Input(source) => write!(f, "cannot start input thread: {}", source),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Usage => None,
            RunError::Read { source, .. } => Some(source),
            RunError::Config { source, .. } => Some(source),
            RunError::Input(source) => Some(source),
        }
    }
}

/// Read and parse a workout file
fn load_workout(path: &str) -> Result<WorkoutFile, RunError> {
    let text = std::fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.to_string(),
        source,
    })?;
    parse_workout(&text).map_err(|source| RunError::Config {
        path: path.to_string(),
        source,
    })
}

async fn run() -> Result<(), RunError> {
    let path = std::env::args().nth(1).ok_or(RunError::Usage)?;
    let file = load_workout(&path)?;
    let workout = &file.workout;

    info!(
        "loaded \"{}\": {} steps, {} timed",
        workout.name,
        workout.steps.len(),
        format_clock(workout.timed_duration_s() * 1000.0)
    );

    let renderer = ConsoleRenderer::new(workout);
    let mut program = Program::with_config(&workout.steps, renderer, file.engine);

    let _reader = input::spawn_reader().map_err(RunError::Input)?;
    println!("{}", input::HELP);

    let frame_loop = FrameLoop::new(&COMMANDS, &DISPOSE);
    let mut frames = TickerFrames::new();

    program.start();
    let frame_count = frame_loop.run(&mut program, &mut frames).await;

    println!();
    debug!("frame loop ran {} frames", frame_count);
    info!(
        "{} ended {:?} after {}",
        workout.name,
        program.state(),
        format_clock(program.elapsed_time())
    );
    Ok(())
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    init_logging(LoggingConfig::default());

    let code = match run().await {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err);
            1
        }
    };
    std::process::exit(code);
}

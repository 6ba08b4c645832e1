//! Ticker-backed frame source

use embassy_time::{Duration, Instant, Ticker};

use cadence_core::FrameSource;

/// Frame interval in milliseconds (~60 Hz)
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Frames from an embassy-time ticker
///
/// Timestamps are measured from construction with microsecond resolution.
pub struct TickerFrames {
    ticker: Ticker,
    start: Instant,
}

impl TickerFrames {
    pub fn new() -> Self {
        Self {
            ticker: Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS)),
            start: Instant::now(),
        }
    }
}

impl Default for TickerFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for TickerFrames {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_micros() as f64 / 1000.0
    }

    async fn next_frame(&mut self) -> f64 {
        self.ticker.next().await;
        self.now_ms()
    }
}

//! Frame source trait
//!
//! Abstracts the host's monotonic clock and per-frame scheduling so the frame
//! loop can run against a real ticker or a scripted sequence of timestamps.

/// Monotonic frame timestamps
///
/// Timestamps are milliseconds on an arbitrary but fixed origin. They must
/// not go backwards; the engine treats a negative frame interval as zero.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    /// Current timestamp (ms)
    fn now_ms(&self) -> f64;

    /// Wait for the next frame and return its timestamp (ms)
    ///
    /// Must be cancel-safe: the frame loop drops this future whenever a
    /// command or the dispose signal wins the race.
    async fn next_frame(&mut self) -> f64;
}

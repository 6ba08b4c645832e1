//! Clock formatting
//!
//! Each component is computed independently from a millisecond count and
//! wraps within its natural period, so `format_seconds(60_000)` is `"00"`:
//! the carry lives in the minutes component. Values below 10 are padded to
//! two digits; hours may grow to three or more digits.
//!
//! Inputs are expected to be finite and non-negative. Negative and NaN
//! inputs render as zero.

use core::fmt::{self, Write};

use heapless::String;

pub const MS_PER_HOUR: f64 = 3_600_000.0;
pub const MS_PER_MINUTE: f64 = 60_000.0;
pub const MS_PER_SECOND: f64 = 1_000.0;
pub const MS_PER_CENTISECOND: f64 = 10.0;

/// Rendered component (fits any `u64`)
pub type Digits = String<20>;

/// Rendered `HH:MM:SS.cc` clock
pub type Clock = String<32>;

/// Whole units of `unit_ms` in `ms`
///
/// The float-to-int cast truncates toward zero, which is floor for the
/// non-negative inputs accepted here.
fn whole(ms: f64, unit_ms: f64) -> u64 {
    (ms / unit_ms) as u64
}

fn pad(value: u64) -> Digits {
    let mut out = Digits::new();
    let _ = write!(out, "{:02}", value);
    out
}

/// Whole hours, unbounded
pub fn format_hours(ms: f64) -> Digits {
    pad(whole(ms, MS_PER_HOUR))
}

/// Minutes within the hour
pub fn format_minutes(ms: f64) -> Digits {
    pad(whole(ms, MS_PER_MINUTE) % 60)
}

/// Seconds within the minute
pub fn format_seconds(ms: f64) -> Digits {
    pad(whole(ms, MS_PER_SECOND) % 60)
}

/// Centiseconds within the second
pub fn format_centiseconds(ms: f64) -> Digits {
    pad(whole(ms, MS_PER_CENTISECOND) % 100)
}

/// Clock components of a millisecond count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub centiseconds: u8,
}

impl TimeParts {
    pub fn from_ms(ms: f64) -> Self {
        Self {
            hours: whole(ms, MS_PER_HOUR),
            minutes: (whole(ms, MS_PER_MINUTE) % 60) as u8,
            seconds: (whole(ms, MS_PER_SECOND) % 60) as u8,
            centiseconds: (whole(ms, MS_PER_CENTISECOND) % 100) as u8,
        }
    }

    /// Total whole seconds represented (used to throttle per-second output)
    ///
    /// Saturates at `u64::MAX` for hour counts too large to convert.
    pub fn whole_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(u64::from(self.minutes) * 60 + u64::from(self.seconds))
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.centiseconds
        )
    }
}

/// Render `ms` as `HH:MM:SS.cc`
pub fn format_clock(ms: f64) -> Clock {
    let mut out = Clock::new();
    let _ = write!(out, "{}", TimeParts::from_ms(ms));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_boundaries() {
        assert_eq!(format_seconds(59_999.0), "59");
        assert_eq!(format_seconds(60_000.0), "00");
        assert_eq!(format_seconds(5_000.0), "05");
        assert_eq!(format_seconds(0.0), "00");
    }

    #[test]
    fn test_minutes_wrap() {
        assert_eq!(format_minutes(3_540_000.0), "59");
        assert_eq!(format_minutes(3_600_000.0), "00");
        assert_eq!(format_minutes(3_660_000.0), "01");
    }

    #[test]
    fn test_hours_unbounded() {
        assert_eq!(format_hours(3_599_999.0), "00");
        assert_eq!(format_hours(7_200_000.0), "02");
        assert_eq!(format_hours(100.0 * MS_PER_HOUR), "100");
    }

    #[test]
    fn test_centiseconds() {
        assert_eq!(format_centiseconds(1_234.0), "23");
        assert_eq!(format_centiseconds(1_009.0), "00");
        assert_eq!(format_centiseconds(90.0), "09");
    }

    #[test]
    fn test_fractional_input_floors() {
        assert_eq!(format_seconds(4_999.9), "04");
        assert_eq!(format_centiseconds(19.99), "01");
    }

    #[test]
    fn test_invalid_input_renders_zero() {
        assert_eq!(format_seconds(-1_500.0), "00");
        assert_eq!(format_hours(f64::NAN), "00");
    }

    #[test]
    fn test_time_parts() {
        let parts = TimeParts::from_ms(3_723_040.0);
        assert_eq!(
            parts,
            TimeParts {
                hours: 1,
                minutes: 2,
                seconds: 3,
                centiseconds: 4,
            }
        );
        assert_eq!(parts.whole_seconds(), 3723);
    }

    #[test]
    fn test_whole_seconds_saturates() {
        let parts = TimeParts::from_ms(f64::MAX);
        assert_eq!(parts.hours, u64::MAX);
        assert_eq!(parts.whole_seconds(), u64::MAX);

        let parts = TimeParts::from_ms(1.0e23);
        assert_eq!(parts.whole_seconds(), u64::MAX);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(3_723_040.0), "01:02:03.04");
        assert_eq!(format_clock(0.0), "00:00:00.00");
        assert_eq!(format_clock(20_000.0), "00:00:20.00");
    }
}

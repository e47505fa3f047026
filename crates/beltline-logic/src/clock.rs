//! Shift clock — elapsed time, expiry latching, and time-of-day display.
//!
//! A shift always displays as the six hours from midnight to 6 AM, mapped
//! onto the configured real-time duration. Expiry is latched so the
//! shift-end transition can never double-fire: `tick` reports
//! [`ClockTick::JustExpired`] exactly once per clock.

use crate::constants::SHIFT_DISPLAY_HOURS;

/// Outcome of advancing the clock by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// Shift still in progress.
    Running,
    /// Elapsed time crossed the duration on this tick. Reported once.
    JustExpired,
    /// The clock had already expired before this tick.
    Expired,
}

/// Per-shift wall clock.
#[derive(Debug, Clone)]
pub struct ShiftClock {
    duration: f32,
    elapsed: f32,
    expired: bool,
}

impl ShiftClock {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            expired: false,
        }
    }

    /// Advance by `delta_seconds` and report whether the shift just ended.
    pub fn tick(&mut self, delta_seconds: f32) -> ClockTick {
        if self.expired {
            return ClockTick::Expired;
        }
        self.elapsed += delta_seconds.max(0.0);
        if self.elapsed >= self.duration {
            self.expired = true;
            ClockTick::JustExpired
        } else {
            ClockTick::Running
        }
    }

    /// Elapsed time, clamped to `[0, duration]`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed.clamp(0.0, self.duration)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Shift progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn has_expired(&self) -> bool {
        self.expired
    }

    /// Displayed hour on the 12-hour dial: midnight start, 6 AM end.
    /// Hour 13 wraps to 1, so the sequence runs 12, 1, 2, ... 6.
    pub fn display_hour(&self) -> u32 {
        let hour = 12 + (self.progress() * SHIFT_DISPLAY_HOURS as f32).floor() as u32;
        if hour > 12 {
            hour - 12
        } else {
            hour
        }
    }

    /// Full clock-face label, e.g. `"3 AM"`. The shift never leaves AM.
    pub fn display_label(&self) -> String {
        format!("{} AM", self.display_hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_bounded() {
        let mut clock = ShiftClock::new(10.0);
        clock.tick(4.0);
        assert_eq!(clock.elapsed(), 4.0);
        clock.tick(100.0);
        assert_eq!(clock.elapsed(), 10.0);
        assert_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn test_expiry_fires_exactly_once() {
        let mut clock = ShiftClock::new(5.0);
        assert_eq!(clock.tick(2.0), ClockTick::Running);
        assert_eq!(clock.tick(4.0), ClockTick::JustExpired);
        assert_eq!(clock.tick(1.0), ClockTick::Expired);
        assert_eq!(clock.tick(1.0), ClockTick::Expired);
        assert!(clock.has_expired());
    }

    #[test]
    fn test_expiry_at_exact_duration() {
        let mut clock = ShiftClock::new(5.0);
        assert_eq!(clock.tick(5.0), ClockTick::JustExpired);
    }

    #[test]
    fn test_display_hours() {
        let mut clock = ShiftClock::new(180.0);
        assert_eq!(clock.display_label(), "12 AM");

        clock.tick(90.0); // progress 0.5 -> hour 15 -> wraps to 3
        assert_eq!(clock.display_label(), "3 AM");

        clock.tick(90.0); // progress 1.0
        assert_eq!(clock.display_label(), "6 AM");
    }

    #[test]
    fn test_display_hour_wraps_past_twelve() {
        let mut clock = ShiftClock::new(60.0);
        clock.tick(15.0); // progress 0.25 -> hour 13 -> displays 1
        assert_eq!(clock.display_hour(), 1);
    }

    #[test]
    fn test_zero_duration_is_immediately_expired() {
        let mut clock = ShiftClock::new(0.0);
        assert_eq!(clock.progress(), 1.0);
        assert_eq!(clock.tick(0.0), ClockTick::JustExpired);
    }

    #[test]
    fn test_negative_delta_does_not_rewind() {
        let mut clock = ShiftClock::new(10.0);
        clock.tick(3.0);
        clock.tick(-5.0);
        assert_eq!(clock.elapsed(), 3.0);
    }
}

//! Time of day for a session.

use std::fmt;

const HOURS_PER_DAY: f64 = 24.0;

/// Time of day as fractional hours in `0.0..24.0`, wrapping at midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameClock {
    hour: f64,
}

impl GameClock {
    /// Create a clock at the given hour (wrapped into range).
    pub fn new(hour: f64) -> Self {
        Self { hour: wrap(hour) }
    }

    /// Advance by `hours`. Returns the new hour of day.
    pub fn advance(&mut self, hours: f64) -> f64 {
        self.hour = wrap(self.hour + hours);
        self.hour
    }

    /// Current hour of day (0.0..24.0).
    pub fn hour(&self) -> f64 {
        self.hour
    }

    /// Hours and minutes, rounded to the nearest minute.
    pub fn hours_minutes(&self) -> (u32, u32) {
        let total = (self.hour * 60.0).round() as u32 % (24 * 60);
        (total / 60, total % 60)
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = self.hours_minutes();
        write!(f, "{hours}:{minutes:02}")
    }
}

// rem_euclid may round up to exactly 24.0
fn wrap(hour: f64) -> f64 {
    let wrapped = hour.rem_euclid(HOURS_PER_DAY);
    if wrapped >= HOURS_PER_DAY { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn advance_within_day() {
        let mut clock = GameClock::new(8.0);
        clock.advance(0.25);
        assert!((clock.hour() - 8.25).abs() < 1e-9);
    }

    #[test]
    fn advance_wraps_past_midnight() {
        let mut clock = GameClock::new(23.9);
        clock.advance(0.5);
        assert!((clock.hour() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn exactly_midnight_is_zero() {
        let mut clock = GameClock::new(23.75);
        clock.advance(0.25);
        assert!(clock.hour().abs() < 1e-9);
    }

    #[test]
    fn new_wraps_out_of_range() {
        assert!((GameClock::new(25.5).hour() - 1.5).abs() < 1e-9);
        assert!((GameClock::new(-1.0).hour() - 23.0).abs() < 1e-9);
    }

    #[test]
    fn display_pads_minutes() {
        assert_eq!(GameClock::new(8.0).to_string(), "8:00");
        assert_eq!(GameClock::new(8.25).to_string(), "8:15");
        assert_eq!(GameClock::new(21.75).to_string(), "21:45");
        assert_eq!(GameClock::new(23.9999).to_string(), "0:00");
    }

    proptest! {
        #[test]
        fn advance_stays_in_range(start in 0.0f64..24.0, hours in 0.0f64..1000.0) {
            let mut clock = GameClock::new(start);
            let hour = clock.advance(hours);
            prop_assert!((0.0..24.0).contains(&hour));
        }
    }
}

// --- File: crates/campusbook_core/src/time.rs ---
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Exclusive upper bound for a minute-of-day value.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Invalid time format (expected HH:MM): {0}")]
    Format(String),
    #[error("Time out of range: {0}")]
    Range(String),
}

/// A time of day stored as minutes since midnight.
///
/// The wire format is a zero-padded "HH:MM" string. Comparing those strings
/// lexicographically happens to work while every value stays zero-padded;
/// the integer representation removes that trap and makes interval
/// arithmetic direct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    pub fn from_minutes(minutes: u16) -> Option<TimeOfDay> {
        if minutes < MINUTES_PER_DAY {
            Some(TimeOfDay(minutes))
        } else {
            None
        }
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<TimeOfDay> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay(hour * 60 + minute))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Minutes from `self` to `later`; zero when `later` is not after `self`.
    pub fn minutes_until(self, later: TimeOfDay) -> u16 {
        later.0.saturating_sub(self.0)
    }

    /// The time `minutes` after `self`, or None once past the end of the day.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<TimeOfDay> {
        TimeOfDay::from_minutes(self.0.checked_add(minutes)?)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour_str, minute_str) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError::Format(s.to_string()))?;
        let hour: u16 = hour_str
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        let minute: u16 = minute_str
            .parse()
            .map_err(|_| TimeParseError::Format(s.to_string()))?;
        TimeOfDay::from_hm(hour, minute).ok_or_else(|| TimeParseError::Range(s.to_string()))
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(t: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        // NaiveTime guarantees hour < 24 and minute < 60
        TimeOfDay((t.hour() as u16) * 60 + t.minute() as u16)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_hh_mm() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.to_string(), "09:30");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("0930".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("09:60".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn integer_ordering_matches_time_ordering() {
        let early: TimeOfDay = "06:00".parse().unwrap();
        let late: TimeOfDay = "19:00".parse().unwrap();
        assert!(early < late);
        assert_eq!(early.minutes_until(late), 13 * 60);
        assert_eq!(late.minutes_until(early), 0);
    }

    #[test]
    fn add_minutes_stops_at_end_of_day() {
        let t: TimeOfDay = "23:45".parse().unwrap();
        assert_eq!(t.checked_add_minutes(14).map(|t| t.to_string()), Some("23:59".to_string()));
        assert_eq!(t.checked_add_minutes(15), None);
    }

    #[test]
    fn serde_round_trips_as_string() {
        let t: TimeOfDay = "07:05".parse().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"07:05\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}

//! Wall-clock time of day.
//!
//! This module defines [`ClockTime`], the minute-resolution time of day used
//! for entry times and fixed exit times. It carries no date; callers anchor it
//! to a calendar day when simulating.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A wall-clock time of day with minute resolution.
///
/// Hours range over 0–23 and minutes over 0–59. Values are validated on
/// construction, so every `ClockTime` names an existing time of day.
///
/// # Example
///
/// ```
/// use clt_shift_engine::models::ClockTime;
///
/// let entry: ClockTime = "08:30".parse().unwrap();
/// assert_eq!(entry.hour(), 8);
/// assert_eq!(entry.minute(), 30);
/// assert_eq!(entry.to_string(), "08:30");
///
/// let night: ClockTime = "22".parse().unwrap();
/// assert_eq!(night, ClockTime::new(22, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Creates a clock time, rejecting non-existent hours or minutes.
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour > 23 {
            return Err(EngineError::invalid_input(
                "clock_time",
                format!("hour {} is outside 0-23", hour),
            ));
        }
        if minute > 59 {
            return Err(EngineError::invalid_input(
                "clock_time",
                format!("minute {} is outside 0-59", minute),
            ));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Returns the hour component (0–23).
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// Returns the minute component (0–59).
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Returns the number of minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Converts to a [`NaiveTime`] with zero seconds.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::default()
            + chrono::Duration::minutes(i64::from(self.minutes_since_midnight()))
    }

    /// Truncates a [`NaiveTime`] to minute resolution.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parses `"HH"` or `"HH:MM"`.
impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let malformed = || {
            EngineError::invalid_input(
                "clock_time",
                format!("'{}' is not a time in HH or HH:MM format", s),
            )
        };

        let (hour_part, minute_part) = match raw.split_once(':') {
            Some((hour, minute)) => (hour, Some(minute)),
            None => (raw, None),
        };

        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        if !is_digits(hour_part) || hour_part.len() > 2 {
            return Err(malformed());
        }
        let hour: u32 = hour_part.parse().map_err(|_| malformed())?;

        let minute = match minute_part {
            Some(part) if is_digits(part) && part.len() == 2 => {
                part.parse().map_err(|_| malformed())?
            }
            Some(_) => return Err(malformed()),
            None => 0,
        };

        ClockTime::new(hour, minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

//! Date-anchored virtual clock shared by both simulators.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::models::{ClockTime, ShiftInstant};

/// A minute-stepping clock anchored to a fixed calendar day.
///
/// Clock times carry no date, so the entry is placed on an arbitrary anchor
/// day; the distance from that day tells whether an instant rolled over.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VirtualClock {
    anchor: NaiveDate,
    now: NaiveDateTime,
}

impl VirtualClock {
    pub(crate) fn start_at(entry: ClockTime) -> Self {
        let anchor = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
        Self {
            anchor,
            now: anchor.and_time(entry.to_naive_time()),
        }
    }

    /// Places `time` on the anchor day, or on the following day when it is
    /// not strictly after the entry.
    pub(crate) fn resolve_exit(&self, time: ClockTime) -> NaiveDateTime {
        let same_day = self.anchor.and_time(time.to_naive_time());
        if same_day <= self.now {
            same_day + Duration::days(1)
        } else {
            same_day
        }
    }

    pub(crate) fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub(crate) fn hour(&self) -> u32 {
        self.now.hour()
    }

    pub(crate) fn advance(&mut self, minutes: u32) {
        self.now += Duration::minutes(i64::from(minutes));
    }

    pub(crate) fn instant(&self) -> ShiftInstant {
        Self::instant_of(self.anchor, self.now)
    }

    pub(crate) fn instant_of(anchor: NaiveDate, at: NaiveDateTime) -> ShiftInstant {
        let day_offset = (at.date() - anchor).num_days().max(0) as u32;
        ShiftInstant::new(ClockTime::from_naive_time(at.time()), day_offset)
    }

    pub(crate) fn anchor(&self) -> NaiveDate {
        self.anchor
    }
}

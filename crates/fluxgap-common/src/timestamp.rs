//! Row ↔ timestamp arithmetic for sub-daily series.
//!
//! A timestamp labels the *end* of its sampling slot: half-hourly row 0 of a
//! year ends at January 1 00:30, and January 1 00:00 is the end of the
//! previous year's final slot. `Timestamp::row` and `Timestamp::from_row`
//! encode that convention; everything here is pure and returns by value.

use core::fmt;
use std::error::Error;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::TimeRes;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gregorian leap rule: divisible by 4 and not by 100, or divisible by 400.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Whether a row index denotes the start or the end boundary of its slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlotEdge {
    Start,
    End,
}

/// Errors from parsing a compact `YYYYMMDD[hhmm[ss]]` timestamp string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TimestampError {
    /// Length must be even and between 4 and 14 characters.
    BadLength(usize),
    /// A field held something other than ASCII digits.
    BadField { field: &'static str },
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::BadLength(len) => {
                write!(f, "bad length {len} for timestamp")
            }
            TimestampError::BadField { field } => {
                write!(f, "bad value for field '{field}'")
            }
        }
    }
}

impl Error for TimestampError {}

/// A calendar timestamp with one-based month and day.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Timestamp {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Parse the compact archive form `YYYYMMDD[hhmm[ss]]`.
    ///
    /// Trailing fields may be omitted in pairs; a bare `YYYY` is accepted
    /// too. Ranges are not checked here; see [`Timestamp::is_valid`].
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        const FIELDS: [(&str, usize); 6] = [
            ("year", 4),
            ("month", 2),
            ("day", 2),
            ("hour", 2),
            ("minute", 2),
            ("second", 2),
        ];

        let len = s.len();
        if !(4..=14).contains(&len) || len % 2 != 0 {
            return Err(TimestampError::BadLength(len));
        }

        let bytes = s.as_bytes();
        let mut out = Self::new(0, 0, 0, 0, 0, 0);
        let mut pos = 0;
        for (idx, (field, width)) in FIELDS.into_iter().enumerate() {
            if pos == len {
                break;
            }
            let chunk = &bytes[pos..pos + width];
            if !chunk.iter().all(u8::is_ascii_digit) {
                return Err(TimestampError::BadField { field });
            }
            let value = chunk.iter().fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'));
            match idx {
                0 => out.year = value as i32,
                1 => out.month = value,
                2 => out.day = value,
                3 => out.hour = value,
                4 => out.minute = value,
                _ => out.second = value,
            }
            pos += width;
        }
        Ok(out)
    }

    /// Range-check every field: positive year, real month/day (leap-aware
    /// February), hour below 24, minute and second below 60.
    pub fn is_valid(&self) -> bool {
        self.year > 0
            && NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some()
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }

    /// Zero-based index of the row whose slot *ends* at this timestamp.
    ///
    /// January 1 00:00 closes the previous year's final slot and maps to
    /// `rows_in_year(year - 1) - 1`. Returns `None` for invalid timestamps.
    pub fn row(&self, res: TimeRes) -> Option<usize> {
        if !self.is_valid() {
            return None;
        }
        if self.month == 1 && self.day == 1 && self.hour == 0 && self.minute == 0 {
            return Some(res.rows_in_year(self.year - 1) - 1);
        }
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?;
        // Inverse of `from_row`'s minute derivation: the slot-within-hour
        // index is the minute divided by the slot width.
        let i = date.ordinal0() as usize * res.rows_per_day()
            + self.hour as usize * res.rows_per_hour()
            + self.minute as usize / (60 / res.rows_per_hour());
        // Zero only for timestamps strictly inside the year's first slot,
        // which are no slot boundary at all.
        i.checked_sub(1)
    }

    /// Timestamp of the start or end boundary of `row` within `year`.
    ///
    /// The end of a year's final row rolls over to January 1 of the next
    /// year. Quarter-hourly minutes derive from the slot-within-hour index,
    /// `(row % 4) * 15`.
    pub fn from_row(row: usize, year: i32, res: TimeRes, edge: SlotEdge) -> Self {
        let row = match edge {
            SlotEdge::Start => row,
            SlotEdge::End => row + 1,
        };
        let rpd = res.rows_per_day();
        let rph = res.rows_per_hour();

        let mut year = year;
        let mut day0 = row / rpd;
        let mut len = days_in_year(year);
        while day0 >= len {
            day0 -= len;
            year += 1;
            len = days_in_year(year);
        }
        let date = NaiveDate::from_yo_opt(year, day0 as u32 + 1).expect("ordinal within year");

        Self {
            year,
            month: date.month(),
            day: date.day(),
            hour: ((row % rpd) / rph) as u32,
            minute: ((row % rph) * (60 / rph)) as u32,
            second: 0,
        }
    }

    /// Boundary timestamp of one of the 52 weekly slots of `year`.
    ///
    /// Weeks are seven days each; the last week absorbs the remainder of the
    /// year, so its end is January 1 of the next year.
    ///
    /// # Panics
    ///
    /// Panics when `week >= 52`.
    pub fn from_week(week: usize, year: i32, res: TimeRes, edge: SlotEdge) -> Self {
        assert!(week < 52, "week {week} out of range");
        let week_rows = 7 * res.rows_per_day();
        match edge {
            SlotEdge::Start => Self::from_row(week * week_rows, year, res, SlotEdge::Start),
            SlotEdge::End => {
                let end = if week == 52 - 1 {
                    res.rows_in_year(year)
                } else {
                    (week + 1) * week_rows
                };
                Self::from_row(end - 1, year, res, SlotEdge::End)
            }
        }
    }

    /// Signed difference `self - other` in seconds, or `None` when either
    /// side is not a real calendar instant.
    pub fn seconds_since(&self, other: &Timestamp) -> Option<i64> {
        let a = self.to_naive()?;
        let b = other.to_naive()?;
        Some(a.signed_duration_since(b).num_seconds())
    }

    fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }
}

impl fmt::Display for Timestamp {
    /// The compact `YYYYMMDDhhmm` rendering used in archive headers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

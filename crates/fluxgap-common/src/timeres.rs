//! Time-resolution codes for regularly sampled sub-daily series.

use core::fmt;

use crate::timestamp::is_leap_year;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rows in a common half-hourly year.
pub const HALFHOURLY_YEAR_ROWS: usize = 17_520;
/// Rows in a leap half-hourly year.
pub const HALFHOURLY_LEAP_YEAR_ROWS: usize = 17_568;

/// Sampling cadence of a series.
///
/// The wire codes follow the archive convention `0 = spot, 1 = quarter-hourly,
/// 2 = half-hourly, 3 = hourly, 4 = daily, 5 = monthly`; the gap-filling
/// engine accepts only the sub-daily codes `{1, 2, 3}`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimeRes {
    QuarterHourly,
    HalfHourly,
    Hourly,
}

impl TimeRes {
    /// Decode a wire code. Returns `None` for spot/daily/monthly and for
    /// anything unknown; callers surface that as a usage error.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::QuarterHourly),
            2 => Some(Self::HalfHourly),
            3 => Some(Self::Hourly),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::QuarterHourly => 1,
            Self::HalfHourly => 2,
            Self::Hourly => 3,
        }
    }

    /// Rows covering one day: 96, 48, or 24.
    #[inline]
    pub fn rows_per_day(self) -> usize {
        match self {
            Self::QuarterHourly => 96,
            Self::HalfHourly => 48,
            Self::Hourly => 24,
        }
    }

    /// Rows covering one hour: 4, 2, or 1.
    #[inline]
    pub fn rows_per_hour(self) -> usize {
        match self {
            Self::QuarterHourly => 4,
            Self::HalfHourly => 2,
            Self::Hourly => 1,
        }
    }

    /// Rows covering the given calendar year, leap-aware.
    pub fn rows_in_year(self, year: i32) -> usize {
        let halfhourly = if is_leap_year(year) {
            HALFHOURLY_LEAP_YEAR_ROWS
        } else {
            HALFHOURLY_YEAR_ROWS
        };
        match self {
            Self::QuarterHourly => halfhourly * 2,
            Self::HalfHourly => halfhourly,
            Self::Hourly => halfhourly / 2,
        }
    }
}

impl fmt::Display for TimeRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::QuarterHourly => "quarterhourly",
            Self::HalfHourly => "halfhourly",
            Self::Hourly => "hourly",
        })
    }
}

use fluxgap_common::{INVALID_VALUE, INVALID_VALUE_INT};

use crate::mask::RowFlags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a row's value was produced. Wire codes 0..=3.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FillMethod {
    /// Nothing imputed: the observation was already present, or every
    /// attempt failed.
    #[default]
    Unfilled,
    /// Look-alikes similar in all three drivers.
    AllDrivers,
    /// Look-alikes similar in the main driver only.
    MainDriver,
    /// Same time-of-day samples, no driver condition.
    TargetOnly,
}

impl FillMethod {
    pub fn code(self) -> u8 {
        match self {
            Self::Unfilled => 0,
            Self::AllDrivers => 1,
            Self::MainDriver => 2,
            Self::TargetOnly => 3,
        }
    }
}

/// One output record.
///
/// Statistics hold the sentinel where not applicable: an unfilled row has
/// sentinel `filled`/`stddev`/`quality`, zero `samples_count`, and zero
/// `time_window`. `time_window` encodes `2W` for the driver methods and
/// `2W + 1` for the target-only method, `W` being the successful half-width
/// in days.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledRow {
    /// Validity of {target, driver1..3} after QC filtering.
    pub mask: RowFlags,
    /// Imputed value, or the original one when it was present.
    pub filled: f64,
    /// Sample standard deviation over the look-alikes used.
    pub stddev: f64,
    /// Trust tier 1..=3, or the sentinel when unfilled.
    pub quality: i32,
    pub time_window: u32,
    pub samples_count: u32,
    pub method: FillMethod,
}

impl FilledRow {
    pub(crate) fn sentinel() -> Self {
        Self {
            mask: RowFlags::empty(),
            filled: INVALID_VALUE,
            stddev: INVALID_VALUE,
            quality: INVALID_VALUE_INT,
            time_window: 0,
            samples_count: 0,
            method: FillMethod::Unfilled,
        }
    }

    /// Whether the engine imputed this row.
    pub fn is_filled(&self) -> bool {
        self.method != FillMethod::Unfilled
    }
}

/// Everything a call returns: one record per input row (rows outside the
/// processing range keep sentinel records) plus the count of rows no
/// attempt could fill.
#[derive(Debug, Clone, PartialEq)]
pub struct FillReport {
    pub rows: Vec<FilledRow>,
    pub no_gaps_filled_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_wire_codes() {
        assert_eq!(FillMethod::Unfilled.code(), 0);
        assert_eq!(FillMethod::AllDrivers.code(), 1);
        assert_eq!(FillMethod::MainDriver.code(), 2);
        assert_eq!(FillMethod::TargetOnly.code(), 3);
    }

    #[test]
    fn sentinel_record() {
        let row = FilledRow::sentinel();
        assert!(!row.is_filled());
        assert_eq!(row.filled, INVALID_VALUE);
        assert_eq!(row.stddev, INVALID_VALUE);
        assert_eq!(row.quality, INVALID_VALUE_INT);
        assert_eq!(row.samples_count, 0);
        assert_eq!(row.time_window, 0);
    }
}

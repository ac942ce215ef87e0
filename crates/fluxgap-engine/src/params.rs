//! Caller-facing configuration for a gap-filling call.

use fluxgap_common::{INVALID_VALUE_INT, TimeRes};

use crate::tolerance::DriverTolerance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to fill and how.
///
/// Columns are indices into the caller's table. Up to three drivers may be
/// designated; an absent driver never gets a validity flag, so the methods
/// that require it fail over to the next rung of the escalation ladder.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FillParams {
    pub timeres: TimeRes,
    /// Column of the variable to fill.
    pub target_col: usize,
    /// Driver columns, most important first.
    pub driver_cols: [Option<usize>; 3],
    /// Tolerance bounds per driver; unset pairs take the built-in defaults.
    pub tolerances: [DriverTolerance; 3],
    /// Minimum number of usable target rows in the processing range;
    /// fewer fails the call with `TooFewValues`.
    pub values_min: usize,
    /// Re-fill rows whose observation is already present (the original
    /// value is still copied to `filled` first, then overwritten on
    /// success).
    pub compute_hat: bool,
}

impl FillParams {
    pub fn new(timeres: TimeRes, target_col: usize) -> Self {
        Self {
            timeres,
            target_col,
            driver_cols: [None; 3],
            tolerances: [DriverTolerance::UNSET; 3],
            values_min: 0,
            compute_hat: false,
        }
    }
}

/// Quality-control filtering of driver observations.
///
/// A driver observation is dropped when its QC indicator is present and
/// strictly greater than `threshold`. Absent QC columns are silently
/// skipped; a sentinel threshold disables the filter entirely.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QcFilter {
    /// QC columns in driver order.
    pub columns: [Option<usize>; 3],
    /// Highest acceptable QC value.
    pub threshold: i32,
}

impl QcFilter {
    pub fn new(columns: [Option<usize>; 3], threshold: i32) -> Self {
        Self { columns, threshold }
    }

    pub(crate) fn enabled(&self) -> bool {
        self.threshold != INVALID_VALUE_INT
    }
}

/// Half-open row range to process. `None` ends mean "from the first row"
/// and "to the last row"; an end beyond the table clamps to it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowRange {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl RowRange {
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self { start, end }
    }

    pub(crate) fn resolve(self, rows: usize) -> (usize, usize) {
        let start = self.start.unwrap_or(0);
        let end = self.end.map_or(rows, |end| end.min(rows));
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_defaults_cover_the_table() {
        assert_eq!(RowRange::default().resolve(100), (0, 100));
        assert_eq!(RowRange::new(Some(10), None).resolve(100), (10, 100));
        assert_eq!(RowRange::new(None, Some(40)).resolve(100), (0, 40));
        assert_eq!(RowRange::new(Some(10), Some(400)).resolve(100), (10, 100));
    }

    #[test]
    fn sentinel_threshold_disables_qc() {
        assert!(!QcFilter::new([Some(4), None, None], INVALID_VALUE_INT).enabled());
        assert!(QcFilter::new([Some(4), None, None], 1).enabled());
    }
}

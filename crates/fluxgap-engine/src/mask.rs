//! Per-row validity flags and the validity pass.

use bitflags::bitflags;
use fluxgap_common::is_valid;

use crate::params::{FillParams, QcFilter};
use crate::result::FilledRow;
use crate::table::SeriesView;

bitflags! {
    /// Which designated columns hold usable observations in a row, after QC
    /// filtering. Computed once per call and never recomputed mid-fill.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RowFlags: u8 {
        const TARGET  = 1 << 0;
        const DRIVER1 = 1 << 1;
        const DRIVER2 = 1 << 2;
        const DRIVER3 = 1 << 3;
        const ALL = Self::TARGET.bits()
            | Self::DRIVER1.bits()
            | Self::DRIVER2.bits()
            | Self::DRIVER3.bits();
    }
}

pub(crate) const DRIVER_FLAGS: [RowFlags; 3] = [RowFlags::DRIVER1, RowFlags::DRIVER2, RowFlags::DRIVER3];

/// One pass over `[start, end)`: set flags for non-sentinel cells of the
/// designated columns, then clear driver flags whose QC indicator exceeds
/// the threshold. Returns the number of rows with a usable target. Rows
/// outside the range keep empty flags and therefore never match.
pub(crate) fn build_masks(
    view: &SeriesView,
    params: &FillParams,
    qc: Option<&QcFilter>,
    rows: &mut [FilledRow],
    start: usize,
    end: usize,
) -> usize {
    let mut valids = 0;
    for r in start..end {
        let mut flags = RowFlags::empty();
        if is_valid(view.get(r, params.target_col)) {
            flags |= RowFlags::TARGET;
        }
        for (d, col) in params.driver_cols.iter().enumerate() {
            if let Some(col) = *col {
                if is_valid(view.get(r, col)) {
                    flags |= DRIVER_FLAGS[d];
                }
            }
        }

        if let Some(qc) = qc {
            if qc.enabled() {
                for (d, col) in qc.columns.iter().enumerate() {
                    if let Some(col) = *col {
                        let indicator = view.get(r, col);
                        if is_valid(indicator) && indicator > f64::from(qc.threshold) {
                            flags -= DRIVER_FLAGS[d];
                        }
                    }
                }
            }
        }

        rows[r].mask = flags;
        if flags.contains(RowFlags::TARGET) {
            valids += 1;
        }
    }
    valids
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxgap_common::{INVALID_VALUE, TimeRes};

    fn rows(n: usize) -> Vec<FilledRow> {
        vec![FilledRow::sentinel(); n]
    }

    fn params() -> FillParams {
        let mut p = FillParams::new(TimeRes::HalfHourly, 0);
        p.driver_cols = [Some(1), Some(2), Some(3)];
        p
    }

    #[test]
    fn flags_follow_cell_validity() {
        #[rustfmt::skip]
        let values = [
            1.0,           2.0, 3.0,           4.0,
            INVALID_VALUE, 2.0, f64::NAN,      4.0,
            1.0,           2.0, f64::INFINITY, INVALID_VALUE,
        ];
        let view = SeriesView::new(&values, 3, 4);
        let mut out = rows(3);
        let valids = build_masks(&view, &params(), None, &mut out, 0, 3);
        assert_eq!(valids, 2);
        assert_eq!(out[0].mask, RowFlags::ALL);
        assert_eq!(out[1].mask, RowFlags::DRIVER1 | RowFlags::DRIVER3);
        assert_eq!(out[2].mask, RowFlags::TARGET | RowFlags::DRIVER1);
    }

    #[test]
    fn qc_above_threshold_clears_the_driver() {
        #[rustfmt::skip]
        let values = [
            1.0, 2.0, 3.0, 4.0, 2.0,
            1.0, 2.0, 3.0, 4.0, 1.0,
            1.0, 2.0, 3.0, 4.0, INVALID_VALUE,
        ];
        let view = SeriesView::new(&values, 3, 5);
        let qc = QcFilter::new([Some(4), None, None], 1);
        let mut out = rows(3);
        build_masks(&view, &params(), Some(&qc), &mut out, 0, 3);
        assert_eq!(out[0].mask, RowFlags::ALL - RowFlags::DRIVER1);
        assert_eq!(out[1].mask, RowFlags::ALL);
        // A missing QC indicator never invalidates the driver.
        assert_eq!(out[2].mask, RowFlags::ALL);

        // A sentinel threshold disables the filter entirely.
        let disabled = QcFilter::new([Some(4), None, None], fluxgap_common::INVALID_VALUE_INT);
        let mut out = rows(3);
        build_masks(&view, &params(), Some(&disabled), &mut out, 0, 3);
        assert_eq!(out[0].mask, RowFlags::ALL);
    }

    #[test]
    fn pass_is_idempotent() {
        let values: Vec<f64> = (0..40).map(|i| if i % 7 == 0 { INVALID_VALUE } else { i as f64 }).collect();
        let view = SeriesView::new(&values, 10, 4);
        let mut first = rows(10);
        let mut second = rows(10);
        let a = build_masks(&view, &params(), None, &mut first, 0, 10);
        let b = build_masks(&view, &params(), None, &mut second, 0, 10);
        assert_eq!(a, b);
        let masks: Vec<_> = first.iter().map(|r| r.mask).collect();
        let again: Vec<_> = second.iter().map(|r| r.mask).collect();
        assert_eq!(masks, again);
    }

    #[test]
    fn rows_outside_the_range_stay_empty() {
        let values = vec![1.0; 20];
        let view = SeriesView::new(&values, 5, 4);
        let mut out = rows(5);
        let valids = build_masks(&view, &params(), None, &mut out, 1, 4);
        assert_eq!(valids, 3);
        assert_eq!(out[0].mask, RowFlags::empty());
        assert_eq!(out[4].mask, RowFlags::empty());
        assert_eq!(out[2].mask, RowFlags::ALL);
    }
}

//! Orchestration: the validity pass, the per-row escalation loop, and the
//! public entry points.

use fluxgap_common::{INVALID_VALUE, TimeRes, is_invalid, is_valid};
use tracing::{debug, trace};

use crate::error::FillError;
use crate::ladder;
use crate::mask::build_masks;
use crate::params::{FillParams, QcFilter, RowRange};
use crate::quality::quality_code;
use crate::result::{FillReport, FilledRow};
use crate::table::SeriesView;
use crate::tolerance::DriverTolerance;
use crate::window::KernelCtx;

/* ───────────────────────── Entry points ───────────────────────── */

/// Decode a wire time-resolution code, rejecting everything outside the
/// sub-daily set the engine accepts.
pub fn timeres_from_code(code: i32) -> Result<TimeRes, FillError> {
    TimeRes::from_code(code).ok_or(FillError::InvalidTimeres(code))
}

/// Fill the whole series.
pub fn gap_fill(view: &SeriesView, params: &FillParams) -> Result<FillReport, FillError> {
    gap_fill_with_bounds(view, params, None, RowRange::default())
}

/// Fill the whole series, dropping driver observations whose QC indicator
/// exceeds the filter's threshold.
pub fn gap_fill_with_qc(
    view: &SeriesView,
    params: &FillParams,
    qc: &QcFilter,
) -> Result<FillReport, FillError> {
    gap_fill_with_bounds(view, params, Some(qc), RowRange::default())
}

/// Fill the rows of `range`. The report still carries one record per input
/// row; records outside the range stay sentinel.
pub fn gap_fill_with_bounds(
    view: &SeriesView,
    params: &FillParams,
    qc: Option<&QcFilter>,
    range: RowRange,
) -> Result<FillReport, FillError> {
    let (start_row, end_row) = range.resolve(view.rows());

    let mut rows: Vec<FilledRow> = Vec::new();
    rows.try_reserve_exact(view.rows())
        .map_err(|_| FillError::OutOfMemory)?;
    rows.resize(view.rows(), FilledRow::sentinel());

    let valids = build_masks(view, params, qc, &mut rows, start_row, end_row);
    debug!(valids, start_row, end_row, "validity pass complete");
    if valids < params.values_min {
        return Err(FillError::TooFewValues {
            valid: valids,
            required: params.values_min,
        });
    }

    let mut tolerances = [DriverTolerance::UNSET; 3];
    for (d, bounds) in params.tolerances.iter().enumerate() {
        tolerances[d] = bounds.normalized(DriverTolerance::DEFAULTS[d]);
    }

    let ctx = KernelCtx {
        view,
        timeres: params.timeres,
        target_col: params.target_col,
        driver_cols: params.driver_cols,
        tolerances,
        start_row,
        end_row,
    };

    let mut scratch: Vec<f64> = Vec::new();
    scratch
        .try_reserve_exact(end_row.saturating_sub(start_row))
        .map_err(|_| FillError::OutOfMemory)?;

    let mut no_gaps_filled_count = 0;
    for r in start_row..end_row {
        rows[r].filled = view.get(r, params.target_col);
        if is_valid(rows[r].filled) && !params.compute_hat {
            continue;
        }

        if ladder::run(&ctx, &mut rows, &mut scratch, r) {
            rows[r].quality = quality_code(rows[r].method, rows[r].time_window);
            trace!(
                row = r,
                method = rows[r].method.code(),
                time_window = rows[r].time_window,
                samples = rows[r].samples_count,
                "gap filled"
            );
        } else {
            // Unfilled rows emit the canonical sentinel, never a raw NaN,
            // infinity, or truncation-only invalid cell. A present value
            // that compute_hat failed to re-fill stays as it is.
            if is_invalid(rows[r].filled) {
                rows[r].filled = INVALID_VALUE;
            }
            no_gaps_filled_count += 1;
        }
    }
    debug!(no_gaps_filled_count, "gap filling complete");

    Ok(FillReport {
        rows,
        no_gaps_filled_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeres_codes_outside_the_subdaily_set_are_rejected() {
        assert!(timeres_from_code(1).is_ok());
        assert!(timeres_from_code(2).is_ok());
        assert!(timeres_from_code(3).is_ok());
        for code in [-1, 0, 4, 5, 42] {
            assert_eq!(timeres_from_code(code), Err(FillError::InvalidTimeres(code)));
        }
    }
}

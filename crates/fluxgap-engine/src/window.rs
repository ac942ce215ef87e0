//! One gap-fill attempt: scan symmetric windows of growing half-width for
//! look-alike samples.
//!
//! The driver methods scan every row of a `±W`-day window (lower bound
//! shifted up by one, then clamped to the series bounds). The target-only
//! method strides a day at a time over an unclamped `±W`-day window padded
//! by one hour, probing the `2H + 1` rows around each same-time-of-day
//! anchor. Acceptance is strict: a driver difference equal to the tolerance
//! does not match.

use fluxgap_common::{INVALID_VALUE, TimeRes};

use crate::mask::RowFlags;
use crate::result::{FillMethod, FilledRow};
use crate::stats;
use crate::table::SeriesView;
use crate::tolerance::DriverTolerance;

/// Call-wide inputs shared by every attempt.
pub(crate) struct KernelCtx<'a> {
    pub view: &'a SeriesView<'a>,
    pub timeres: TimeRes,
    pub target_col: usize,
    pub driver_cols: [Option<usize>; 3],
    /// Normalized tolerance bounds per driver.
    pub tolerances: [DriverTolerance; 3],
    pub start_row: usize,
    pub end_row: usize,
}

impl KernelCtx<'_> {
    #[inline]
    fn driver(&self, row: usize, d: usize) -> f64 {
        self.driver_cols[d].map_or(INVALID_VALUE, |col| self.view.get(row, col))
    }
}

/// Widen the half-width from `w_start` to `w_end` (inclusive) in `w_step`
/// day steps, scanning each window for look-alikes accepted by `method`.
/// The first window with at least two of them writes the row's result and
/// wins. Widening stops early once the window already covers the whole
/// processing range.
pub(crate) fn fill_attempt(
    ctx: &KernelCtx,
    rows: &mut [FilledRow],
    scratch: &mut Vec<f64>,
    r: usize,
    method: FillMethod,
    w_start: usize,
    w_end: usize,
    w_step: usize,
) -> bool {
    debug_assert!(method != FillMethod::Unfilled);

    let day = ctx.timeres.rows_per_day() as i64;
    let hour = ctx.timeres.rows_per_hour() as i64;
    let start = ctx.start_row as i64;
    let end = ctx.end_row as i64;
    let center = r as i64;

    // Tolerances depend only on the center row, not on the window size.
    let tol = [
        ctx.tolerances[0].resolve(ctx.driver(r, 0)),
        ctx.tolerances[1].resolve(ctx.driver(r, 1)),
        ctx.tolerances[2].resolve(ctx.driver(r, 2)),
    ];

    let mut w = w_start;
    while w <= w_end {
        scratch.clear();
        let window = day * w as i64;
        let lo;
        let hi;

        if method == FillMethod::TargetOnly {
            // Unclamped, padded by one hour on both sides; the probes below
            // do the bounds checking.
            lo = center - window - hour;
            hi = center + window + hour + 1;
            let mut anchor = lo;
            while anchor < hi {
                for probe in anchor..=anchor + 2 * hour {
                    if probe < 0 || probe >= end {
                        continue;
                    }
                    let probe = probe as usize;
                    if rows[probe].mask.contains(RowFlags::TARGET) {
                        scratch.push(ctx.view.get(probe, ctx.target_col));
                    }
                }
                anchor += day;
            }
        } else {
            // The +1 shift predates the clamp, so a window reaching past the
            // series head still scans row 0.
            lo = (center - window + 1).max(0);
            hi = (center + window).min(end);
            let required = if method == FillMethod::AllDrivers {
                RowFlags::ALL
            } else {
                RowFlags::TARGET | RowFlags::DRIVER1
            };
            for c in lo..hi {
                let c = c as usize;
                if !rows[c].mask.contains(required) {
                    continue;
                }
                let similar = if method == FillMethod::AllDrivers {
                    (0..3).all(|d| (ctx.driver(c, d) - ctx.driver(r, d)).abs() < tol[d])
                } else {
                    (ctx.driver(c, 0) - ctx.driver(r, 0)).abs() < tol[0]
                };
                if similar {
                    scratch.push(ctx.view.get(c, ctx.target_col));
                }
            }
        }

        if scratch.len() >= 2 {
            let out = &mut rows[r];
            out.filled = stats::mean(scratch);
            out.stddev = stats::sample_stddev(scratch);
            out.method = method;
            out.samples_count = scratch.len() as u32;
            out.time_window = 2 * w as u32 + u32::from(method == FillMethod::TargetOnly);
            return true;
        }

        w += w_step;

        // Wider windows cannot see anything new.
        if lo < start && hi > end {
            break;
        }
    }

    false
}

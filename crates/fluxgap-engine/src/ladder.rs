//! The fixed escalation order of gap-fill attempts.

use crate::result::{FillMethod, FilledRow};
use crate::window::{KernelCtx, fill_attempt};

/// Run the attempts in escalation order until one fills the row. The first
/// success wins; later attempts never overwrite it.
///
/// The final target-only attempt is bounded by the series length and relies
/// on the kernel's early termination once its window covers the whole
/// processing range.
pub(crate) fn run(ctx: &KernelCtx, rows: &mut [FilledRow], scratch: &mut Vec<f64>, r: usize) -> bool {
    let attempts: [(FillMethod, usize, usize, usize); 6] = [
        (FillMethod::AllDrivers, 7, 14, 7),
        (FillMethod::MainDriver, 7, 7, 7),
        (FillMethod::TargetOnly, 0, 2, 1),
        (FillMethod::AllDrivers, 21, 77, 7),
        (FillMethod::MainDriver, 14, 77, 7),
        (FillMethod::TargetOnly, 3, ctx.end_row + 1, 3),
    ];

    for (method, w_start, w_end, w_step) in attempts {
        if fill_attempt(ctx, rows, scratch, r, method, w_start, w_end, w_step) {
            return true;
        }
    }
    false
}

//! Quality tier derived from method and final window width.

use crate::result::FillMethod;

/// `1` = tight, `2` = moderate, `3` = loose.
///
/// The driver methods tier up past a 14-day window; the target-only method
/// past a 1-day window. The loose tier starts at 56, 28, and 5 days
/// respectively.
pub(crate) fn quality_code(method: FillMethod, time_window: u32) -> i32 {
    let moderate = match method {
        FillMethod::AllDrivers | FillMethod::MainDriver => time_window > 14,
        FillMethod::TargetOnly => time_window > 1,
        FillMethod::Unfilled => false,
    };
    let loose = match method {
        FillMethod::AllDrivers => time_window > 56,
        FillMethod::MainDriver => time_window > 28,
        FillMethod::TargetOnly => time_window > 5,
        FillMethod::Unfilled => false,
    };
    i32::from(method != FillMethod::Unfilled) + i32::from(moderate) + i32::from(loose)
}

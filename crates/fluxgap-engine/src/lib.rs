//! Marginal Distribution Sampling (MDS) gap-filling for sub-daily
//! environmental time series.
//!
//! A missing target sample is imputed from the average of nearby samples of
//! the same variable whose co-occurring drivers are within tolerance,
//! widening the temporal window and relaxing the required driver set in a
//! fixed escalation order until enough look-alikes are found. Each filled
//! row reports the imputed value, the neighborhood standard deviation, the
//! sample count, the window width, the method, and a quality tier.
//!
//! Entry points are [`gap_fill`], [`gap_fill_with_qc`], and
//! [`gap_fill_with_bounds`]; inputs are a borrowed [`SeriesView`] plus
//! [`FillParams`], and the result is an owned [`FillReport`].

pub mod engine;
pub mod error;
pub mod mask;
pub mod params;
pub mod result;
pub mod stats;
pub mod table;
pub mod tolerance;

mod ladder;
mod quality;
mod window;

pub use engine::{gap_fill, gap_fill_with_bounds, gap_fill_with_qc, timeres_from_code};
pub use error::FillError;
pub use mask::RowFlags;
pub use params::{FillParams, QcFilter, RowRange};
pub use result::{FillMethod, FillReport, FilledRow};
pub use table::SeriesView;
pub use tolerance::DriverTolerance;

// Re-export the shared vocabulary for convenience.
pub use fluxgap_common::{INVALID_VALUE, INVALID_VALUE_INT, TimeRes, Timestamp, is_invalid, is_valid};

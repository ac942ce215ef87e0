//! Typed failures surfaced to the caller.
//!
//! These cover the call as a whole. An individual row that no attempt can
//! fill is *not* an error: it keeps sentinel fields and is counted in
//! [`FillReport::no_gaps_filled_count`](crate::FillReport::no_gaps_filled_count).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FillError {
    /// Fewer usable target rows than `values_min` in the processing range.
    #[error("too few valid values to apply gapfilling ({valid} < {required})")]
    TooFewValues { valid: usize, required: usize },

    /// The result table or the look-alike scratch buffer could not be
    /// allocated.
    #[error("out of memory")]
    OutOfMemory,

    /// A wire time-resolution code outside the accepted sub-daily set
    /// `{1 quarter-hourly, 2 half-hourly, 3 hourly}`.
    #[error("unsupported time resolution code {0}")]
    InvalidTimeres(i32),
}

//! Per-driver similarity tolerances.
//!
//! Two samples are "similar" in a driver when their absolute difference is
//! strictly below that driver's tolerance. A tolerance is described by a
//! `[min, max]` pair in which either bound may be the sentinel ("unset"):
//! with both bounds set, the tolerance follows the driver's observation at
//! the row being filled, clamped into the pair; with only one bound set,
//! that bound is a constant tolerance.

use fluxgap_common::{INVALID_VALUE, is_invalid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower/upper bounds of one driver's tolerance; sentinel means unset.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DriverTolerance {
    pub min: f64,
    pub max: f64,
}

impl DriverTolerance {
    /// Both bounds unset; the engine substitutes the per-driver default.
    pub const UNSET: Self = Self {
        min: INVALID_VALUE,
        max: INVALID_VALUE,
    };

    /// Main-driver default: follow the observation, clamped into [20, 50].
    pub const DRIVER1_DEFAULT: Self = Self {
        min: 20.0,
        max: 50.0,
    };

    /// Second-driver default: a constant 2.5.
    pub const DRIVER2_DEFAULT: Self = Self {
        min: 2.5,
        max: INVALID_VALUE,
    };

    /// Third-driver default: a constant 5.0.
    pub const DRIVER3_DEFAULT: Self = Self {
        min: 5.0,
        max: INVALID_VALUE,
    };

    /// Defaults in driver order.
    pub const DEFAULTS: [Self; 3] = [
        Self::DRIVER1_DEFAULT,
        Self::DRIVER2_DEFAULT,
        Self::DRIVER3_DEFAULT,
    ];

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A fixed tolerance, independent of the observation.
    pub fn constant(value: f64) -> Self {
        Self {
            min: value,
            max: INVALID_VALUE,
        }
    }

    /// Fill unset bounds from the per-driver default: a fully unset pair
    /// becomes the default pair, an unset minimum takes the default minimum,
    /// and an unset maximum stays unset so the minimum acts as a constant.
    pub(crate) fn normalized(self, default: Self) -> Self {
        match (is_invalid(self.min), is_invalid(self.max)) {
            (true, true) => default,
            (true, false) => Self {
                min: default.min,
                max: self.max,
            },
            _ => self,
        }
    }

    /// Tolerance for one comparison around `center`, the driver value at the
    /// row being filled. Callers normalize first, so the minimum is set.
    pub(crate) fn resolve(self, center: f64) -> f64 {
        match (is_invalid(self.min), is_invalid(self.max)) {
            (false, true) => self.min,
            (true, false) => self.max,
            (true, true) => self.min,
            (false, false) => {
                if center < self.min {
                    self.min
                } else if center > self.max {
                    self.max
                } else {
                    center
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        let d1 = DriverTolerance::DRIVER1_DEFAULT;
        assert_eq!(DriverTolerance::UNSET.normalized(d1), d1);
        assert_eq!(
            DriverTolerance::new(INVALID_VALUE, 40.0).normalized(d1),
            DriverTolerance::new(20.0, 40.0)
        );
        assert_eq!(
            DriverTolerance::new(30.0, INVALID_VALUE).normalized(d1),
            DriverTolerance::new(30.0, INVALID_VALUE)
        );
        assert_eq!(
            DriverTolerance::new(25.0, 45.0).normalized(d1),
            DriverTolerance::new(25.0, 45.0)
        );
    }

    #[test]
    fn resolution_clamps_the_center_value() {
        let tol = DriverTolerance::new(20.0, 50.0);
        assert_eq!(tol.resolve(10.0), 20.0);
        assert_eq!(tol.resolve(35.0), 35.0);
        assert_eq!(tol.resolve(80.0), 50.0);
        // The sentinel itself clamps to the lower bound.
        assert_eq!(tol.resolve(INVALID_VALUE), 20.0);
    }

    #[test]
    fn one_sided_pairs_are_constant() {
        assert_eq!(DriverTolerance::constant(2.5).resolve(99.0), 2.5);
        assert_eq!(DriverTolerance::new(INVALID_VALUE, 7.0).resolve(99.0), 7.0);
    }
}

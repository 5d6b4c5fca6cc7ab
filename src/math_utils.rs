/// Mathematical helpers for the interpolation pipeline
///
/// Weighting kernels, the linear curve used by confidence scoring, and a
/// percentage-deviation assertion for tests.

use crate::constants::IDW_DISTANCE_OFFSET;

/// Assert that the percentage deviation between two values is below a threshold
///
/// Computes `deviation(actual, expected)` and panics with both values if it is
/// not strictly less than `max_deviation` (in percent).
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Straight line through two points, kept in point-slope form
///
/// The caller guarantees `x1 != x2`.
///
/// # Examples
/// ```
/// use hex_interpolation::math_utils::LinearFn;
///
/// let line = LinearFn::through_points(6.0, 0.25, 4.0, 1.0);
/// assert_eq!(line.eval(6.0), 0.25);
/// assert_eq!(line.eval(4.0), 1.0);
/// assert_eq!(line.eval(5.0), 0.625);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFn {
    pub slope: f64,
    pub x1: f64,
    pub y1: f64,
}

impl LinearFn {
    pub fn through_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            slope: (y2 - y1) / (x2 - x1),
            x1,
            y1,
        }
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.slope * (x - self.x1) + self.y1
    }
}

/// Inverse distance weight for a contribution `ring_distance` rings away
///
/// `1 / (d + 0.5)^power`; always positive and finite for finite powers,
/// so the origin cell never divides by zero.
pub fn idw_weight(ring_distance: u32, power: f64) -> f64 {
    1.0 / (ring_distance as f64 + IDW_DISTANCE_OFFSET).powf(power)
}

/// Calculate the percentage deviation between actual and expected values
///
/// # Examples
/// ```
/// use hex_interpolation::math_utils::deviation;
///
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// assert_eq!(deviation(95.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        // expected 0: only an actual 0 matches
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}

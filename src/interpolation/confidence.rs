/// Confidence falloff by distance to the nearest sample
///
/// A straight line runs through `(draw_ring_radius, min_confidence^(1/p))` and
/// `(confidence_radius, 1)`; confidence is that line raised to `p`. Cells past
/// the draw radius have no confidence at all.

use super::config::InterpolatorConfig;
use crate::math_utils::LinearFn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceCurve {
    line: LinearFn,
    draw_ring_radius: u32,
    confidence_radius: u32,
    power: f64,
    saturate: bool,
}

impl ConfidenceCurve {
    /// Expects a validated config (`confidence_radius < draw_ring_radius`).
    pub fn from_config(config: &InterpolatorConfig) -> Self {
        let line = LinearFn::through_points(
            config.draw_ring_radius as f64,
            config.min_confidence.powf(1.0 / config.confidence_power),
            config.confidence_radius as f64,
            1.0,
        );
        Self {
            line,
            draw_ring_radius: config.draw_ring_radius,
            confidence_radius: config.confidence_radius,
            power: config.confidence_power,
            saturate: config.saturate_confidence,
        }
    }

    /// `None` when `min_distance` is beyond the draw radius
    pub fn confidence(&self, min_distance: u32) -> Option<f64> {
        if min_distance > self.draw_ring_radius {
            return None;
        }
        if self.saturate && min_distance <= self.confidence_radius {
            return Some(1.0);
        }
        Some(self.line.eval(min_distance as f64).powf(self.power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use more_asserts::{assert_ge, assert_le};

    fn curve(config: InterpolatorConfig) -> ConfidenceCurve {
        config.validate().unwrap();
        ConfidenceCurve::from_config(&config)
    }

    #[test]
    fn test_default_curve_calibration_points() {
        let curve = curve(InterpolatorConfig::default());
        assert_abs_diff_eq!(curve.confidence(6).unwrap(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.confidence(5).unwrap(), 0.625, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.confidence(4).unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(curve.confidence(7), None);
        assert_eq!(curve.confidence(12), None);
    }

    #[test]
    fn test_saturates_inside_confidence_radius() {
        let curve = curve(InterpolatorConfig::default());
        for d in 0..=4 {
            assert_eq!(curve.confidence(d), Some(1.0));
        }
    }

    #[test]
    fn test_unsaturated_curve_extrapolates() {
        let curve = curve(InterpolatorConfig {
            saturate_confidence: false,
            ..Default::default()
        });
        assert_abs_diff_eq!(curve.confidence(0).unwrap(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.confidence(4).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.confidence(6).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_power_shapes_falloff() {
        let curve = curve(InterpolatorConfig {
            confidence_power: 2.0,
            ..Default::default()
        });
        // endpoints unchanged
        assert_abs_diff_eq!(curve.confidence(6).unwrap(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.confidence(4).unwrap(), 1.0, epsilon = 1e-12);
        // line through (6, 0.5) and (4, 1) gives 0.75 at 5
        assert_abs_diff_eq!(curve.confidence(5).unwrap(), 0.5625, epsilon = 1e-12);
    }

    #[test]
    fn test_confidence_never_increases_with_distance() {
        for power in [0.5, 1.0, 2.0, 3.0] {
            for saturate in [true, false] {
                let curve = curve(InterpolatorConfig {
                    confidence_power: power,
                    saturate_confidence: saturate,
                    ..Default::default()
                });
                let mut previous = f64::INFINITY;
                for d in 0..=6 {
                    let c = curve.confidence(d).unwrap();
                    assert_le!(c, previous, "power {} distance {}", power, d);
                    previous = c;
                }
            }
        }
    }

    #[test]
    fn test_draw_radius_gets_min_confidence() {
        let cases = vec![
            (3, 0, 0.25, 1.0),
            (3, 2, 0.25, 1.0),
            (6, 4, 0.1, 2.0),
            (9, 1, 0.5, 0.5),
            (12, 11, 0.75, 3.0),
        ];

        for (draw_ring_radius, confidence_radius, min_confidence, confidence_power) in cases {
            for saturate_confidence in [true, false] {
                let curve = curve(InterpolatorConfig {
                    draw_ring_radius,
                    confidence_radius,
                    min_confidence,
                    confidence_power,
                    saturate_confidence,
                    ..Default::default()
                });
                let at_draw = curve.confidence(draw_ring_radius).unwrap();
                crate::assert_deviation!(
                    at_draw,
                    min_confidence,
                    1e-9,
                    "draw radius {} confidence radius {}",
                    draw_ring_radius,
                    confidence_radius
                );
                assert_eq!(curve.confidence(draw_ring_radius + 1), None);
            }
        }
    }

    #[test]
    fn test_drawn_confidence_in_unit_range() {
        let curve = curve(InterpolatorConfig::default());
        for d in 0..=6 {
            let c = curve.confidence(d).unwrap();
            assert_ge!(c, 0.25);
            assert_le!(c, 1.0);
        }
    }
}

/// Interpolator configuration
///
/// Every field is fixed for the lifetime of an interpolator. `validate` runs at
/// construction so a bad configuration never reaches `compute`.

use crate::constants::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolatorConfig {
    /// H3 resolution level used to index sample positions
    pub hex_resolution: u8,
    /// Rings a sample spreads its value into
    pub interpolation_ring_radius: u32,
    /// Cells farther than this from every sample get no result
    pub draw_ring_radius: u32,
    /// Exponent of the inverse distance weight
    pub idw_power: f64,
    /// Confidence at exactly `draw_ring_radius`
    pub min_confidence: f64,
    /// Confidence is 1 at and within this ring distance
    pub confidence_radius: u32,
    /// Shape of the confidence falloff
    pub confidence_power: f64,
    /// Clamp confidence to 1 inside `confidence_radius`. When off, the falloff
    /// line is extrapolated and can exceed 1 near samples.
    /// `false` matches the original hexagon interpolation layer.
    pub saturate_confidence: bool,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            hex_resolution: HEX_RESOLUTION,
            interpolation_ring_radius: INTERPOLATION_RING_RADIUS,
            draw_ring_radius: DRAW_RING_RADIUS,
            idw_power: IDW_POWER,
            min_confidence: MIN_CONFIDENCE,
            confidence_radius: CONFIDENCE_RADIUS,
            confidence_power: CONFIDENCE_POWER,
            saturate_confidence: true,
        }
    }
}

impl InterpolatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hex_resolution > MAX_H3_RESOLUTION {
            return Err(Error::InvalidParameter {
                name: "hex_resolution",
                value: self.hex_resolution.to_string(),
                reason: format!("must be 0..={MAX_H3_RESOLUTION}"),
            });
        }

        if self.interpolation_ring_radius > MAX_RING_RADIUS {
            return Err(Error::InvalidParameter {
                name: "interpolation_ring_radius",
                value: self.interpolation_ring_radius.to_string(),
                reason: format!("must be at most {MAX_RING_RADIUS}"),
            });
        }

        // nothing past the interpolation radius is ever aggregated
        if self.draw_ring_radius > self.interpolation_ring_radius {
            return Err(Error::DrawRadiusExceedsInterpolation {
                draw_ring_radius: self.draw_ring_radius,
                interpolation_ring_radius: self.interpolation_ring_radius,
            });
        }

        if self.draw_ring_radius == self.confidence_radius {
            return Err(Error::DegenerateConfidenceCurve(self.draw_ring_radius));
        }

        // saturation would swallow the draw radius and its min_confidence
        if self.confidence_radius > self.draw_ring_radius {
            return Err(Error::ConfidenceRadiusBeyondDraw {
                confidence_radius: self.confidence_radius,
                draw_ring_radius: self.draw_ring_radius,
            });
        }

        if !self.idw_power.is_finite() {
            return Err(Error::InvalidParameter {
                name: "idw_power",
                value: self.idw_power.to_string(),
                reason: "must be finite".to_string(),
            });
        }

        if !(self.confidence_power.is_finite() && self.confidence_power > 0.0) {
            return Err(Error::InvalidParameter {
                name: "confidence_power",
                value: self.confidence_power.to_string(),
                reason: "must be finite and positive".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(Error::InvalidParameter {
                name: "min_confidence",
                value: self.min_confidence.to_string(),
                reason: "must be within [0, 1]".to_string(),
            });
        }

        Ok(())
    }
}

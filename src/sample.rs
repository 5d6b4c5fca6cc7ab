/// Point samples fed into the interpolator
///
/// A sample is a geolocated scalar. Positions serialize as `[longitude, latitude]`
/// in degrees, the order map renderers use.

use serde::{Deserialize, Serialize};

/// Longitude/latitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl From<[f64; 2]> for Position {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        [position.longitude, position.latitude]
    }
}

/// One known value at one position.
///
/// Values are not validated: a NaN or infinite value spreads into every
/// estimate it contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub position: Position,
    pub value: f64,
}

impl Sample {
    pub fn new(longitude: f64, latitude: f64, value: f64) -> Self {
        Self {
            position: Position::new(longitude, latitude),
            value,
        }
    }

    /// Equality on the raw float bits, so a NaN value matches itself
    pub fn bitwise_eq(&self, other: &Sample) -> bool {
        self.position.longitude.to_bits() == other.position.longitude.to_bits()
            && self.position.latitude.to_bits() == other.position.latitude.to_bits()
            && self.value.to_bits() == other.value.to_bits()
    }
}

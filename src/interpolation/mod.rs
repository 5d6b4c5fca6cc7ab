/// Hex-grid inverse distance weighted interpolation
///
/// Turns geolocated samples into per-cell estimates with a confidence score,
/// ready for a renderer to map to color and opacity.

pub mod cell_accumulator;
pub mod confidence;
pub mod config;
pub mod hex_interpolator;
pub mod interpolated_surface;

pub use cell_accumulator::CellAccumulator;
pub use confidence::ConfidenceCurve;
pub use config::InterpolatorConfig;
pub use hex_interpolator::{Accumulators, CellResult, CellResults, HexInterpolator};
pub use interpolated_surface::InterpolatedSurface;

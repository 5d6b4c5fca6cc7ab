pub mod constants;
pub mod error;
pub mod hex_grid;
pub mod interpolation;
pub mod json_parser;
pub mod math_utils;
pub mod sample;

pub use error::{Error, Result};
pub use hex_grid::{H3Grid, HexGrid};
pub use interpolation::{CellResult, CellResults, HexInterpolator, InterpolatedSurface, InterpolatorConfig};
pub use sample::{Position, Sample};

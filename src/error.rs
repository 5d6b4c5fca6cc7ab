//! Error types for hex interpolation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "draw ring radius {draw_ring_radius} exceeds interpolation ring radius {interpolation_ring_radius}"
    )]
    DrawRadiusExceedsInterpolation {
        draw_ring_radius: u32,
        interpolation_ring_radius: u32,
    },

    #[error("draw ring radius and confidence radius are both {0}, confidence curve is undefined")]
    DegenerateConfidenceCurve(u32),

    #[error(
        "confidence radius {confidence_radius} exceeds draw ring radius {draw_ring_radius}, cells at the draw radius would not get the minimum confidence"
    )]
    ConfidenceRadiusBeyondDraw {
        confidence_radius: u32,
        draw_ring_radius: u32,
    },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid position for sample {index}: {source}")]
    InvalidPosition {
        index: usize,
        #[source]
        source: InvalidPosition,
    },
}

/// A position the hex grid cannot index.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("({longitude}, {latitude}) {reason}")]
pub struct InvalidPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub reason: String,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Hex grid geometry consumed by the interpolator
///
/// The interpolator only needs two things from a grid: which cell a position
/// falls in, and which cells lie exactly `d` hops from a cell. `H3Grid` answers
/// both with h3o at a fixed resolution.

use crate::constants::MAX_H3_RESOLUTION;
use crate::error::{Error, InvalidPosition, Result};
use crate::sample::Position;
use h3o::{CellIndex, LatLng, Resolution};
use std::fmt::Debug;
use std::hash::Hash;

pub trait HexGrid {
    type Cell: Copy + Eq + Hash + Debug;

    /// Cell containing `position` at the grid's resolution
    fn position_to_cell(&self, position: Position) -> std::result::Result<Self::Cell, InvalidPosition>;

    /// Cells grouped by hop count from `origin`, for `d` in `0..=max_distance`.
    ///
    /// Index `d` holds the cells exactly `d` hops away. Every cell appears at
    /// exactly one distance, and index 0 is `[origin]`.
    fn rings_by_distance(&self, origin: Self::Cell, max_distance: u32) -> Vec<Vec<Self::Cell>>;
}

/// H3 grid at a single resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct H3Grid {
    pub resolution: Resolution,
}

impl H3Grid {
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    /// Build from a raw resolution number (0-15)
    pub fn from_level(level: u8) -> Result<Self> {
        let resolution = Resolution::try_from(level).map_err(|err| Error::InvalidParameter {
            name: "hex_resolution",
            value: level.to_string(),
            reason: format!("must be 0..={MAX_H3_RESOLUTION}: {err}"),
        })?;
        Ok(Self::new(resolution))
    }
}

impl HexGrid for H3Grid {
    type Cell = CellIndex;

    fn position_to_cell(&self, position: Position) -> std::result::Result<CellIndex, InvalidPosition> {
        let lat_lng = LatLng::new(position.latitude, position.longitude).map_err(|err| InvalidPosition {
            longitude: position.longitude,
            latitude: position.latitude,
            reason: err.to_string(),
        })?;
        Ok(lat_lng.to_cell(self.resolution))
    }

    fn rings_by_distance(&self, origin: CellIndex, max_distance: u32) -> Vec<Vec<CellIndex>> {
        let mut rings = vec![Vec::new(); max_distance as usize + 1];
        for (cell, distance) in origin.grid_disk_distances::<Vec<_>>(max_distance) {
            rings[distance as usize].push(cell);
        }
        rings
    }
}

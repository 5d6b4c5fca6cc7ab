/// Recompute-on-change holder for interpolated cells
///
/// Keeps the last accepted sample set and the cells computed from it. A new
/// mapping replaces the old one only after it is fully computed; readers that
/// took an `Arc` keep the mapping they were given.

use super::hex_interpolator::{CellResults, HexInterpolator};
use crate::error::Result;
use crate::hex_grid::{H3Grid, HexGrid};
use crate::sample::Sample;
use std::sync::Arc;
use tracing::debug;

pub struct InterpolatedSurface<G: HexGrid = H3Grid> {
    interpolator: HexInterpolator<G>,
    samples: Option<Vec<Sample>>,
    cells: Arc<CellResults<G::Cell>>,
    generation: u64,
}

impl<G: HexGrid> InterpolatedSurface<G> {
    pub fn new(interpolator: HexInterpolator<G>) -> Self {
        Self {
            interpolator,
            samples: None,
            cells: Arc::new(CellResults::new()),
            generation: 0,
        }
    }

    pub fn interpolator(&self) -> &HexInterpolator<G> {
        &self.interpolator
    }

    /// Recompute if `samples` differ from the last accepted set.
    ///
    /// Samples are compared bit for bit, so a set holding NaN values still
    /// counts as unchanged. Returns whether a new mapping was published. On
    /// error nothing changes.
    pub fn update(&mut self, samples: &[Sample]) -> Result<bool> {
        if self.is_unchanged(samples) {
            debug!(generation = self.generation, "samples unchanged, keeping cells");
            return Ok(false);
        }

        let cells = self.interpolator.compute(samples)?;
        self.cells = Arc::new(cells);
        self.samples = Some(samples.to_vec());
        self.generation += 1;
        debug!(
            generation = self.generation,
            cells = self.cells.len(),
            "published interpolated cells"
        );
        Ok(true)
    }

    fn is_unchanged(&self, samples: &[Sample]) -> bool {
        self.samples.as_deref().is_some_and(|previous| {
            previous.len() == samples.len()
                && previous.iter().zip(samples).all(|(a, b)| a.bitwise_eq(b))
        })
    }

    /// Currently published mapping
    pub fn cells(&self) -> Arc<CellResults<G::Cell>> {
        Arc::clone(&self.cells)
    }

    /// Number of successful recomputes
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

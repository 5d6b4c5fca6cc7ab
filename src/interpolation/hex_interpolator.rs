/// Inverse distance weighted interpolation over hexagonal rings
///
/// Every sample spreads its value into the cells up to
/// `interpolation_ring_radius` rings around the cell it falls in. Each reached
/// cell then gets a weighted estimate from everything it collected and a
/// confidence from its nearest contribution. Cells beyond `draw_ring_radius`
/// from every sample are dropped.

use super::cell_accumulator::CellAccumulator;
use super::confidence::ConfidenceCurve;
use super::config::InterpolatorConfig;
use crate::error::{Error, Result};
use crate::hex_grid::{H3Grid, HexGrid};
use crate::sample::{Position, Sample};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, trace};

/// Accumulators for every cell reached during aggregation
pub type Accumulators<C> = HashMap<C, CellAccumulator>;

/// Interpolated cells keyed by cell id
pub type CellResults<C> = HashMap<C, CellResult<C>>;

/// Estimate for one covered cell. `cell_id` serializes as its display string
/// (the H3 hex index for `H3Grid`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C: Display",
    deserialize = "C: FromStr, <C as FromStr>::Err: Display"
))]
pub struct CellResult<C> {
    #[serde(serialize_with = "serialize_cell_id", deserialize_with = "deserialize_cell_id")]
    pub cell_id: C,
    pub estimated_value: f64,
    pub confidence: f64,
}

fn serialize_cell_id<C, S>(cell_id: &C, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    C: Display,
    S: Serializer,
{
    serializer.collect_str(cell_id)
}

fn deserialize_cell_id<'de, C, D>(deserializer: D) -> std::result::Result<C, D::Error>
where
    C: FromStr,
    C::Err: Display,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone)]
pub struct HexInterpolator<G: HexGrid = H3Grid> {
    config: InterpolatorConfig,
    grid: G,
    confidence: ConfidenceCurve,
}

impl HexInterpolator<H3Grid> {
    /// Interpolator over the H3 grid at `config.hex_resolution`
    pub fn new(config: InterpolatorConfig) -> Result<Self> {
        config.validate()?;
        let grid = H3Grid::from_level(config.hex_resolution)?;
        Self::with_grid(config, grid)
    }
}

impl<G: HexGrid> HexInterpolator<G> {
    /// Interpolator over a caller-supplied grid. The grid's own resolution wins
    /// over `config.hex_resolution`.
    pub fn with_grid(config: InterpolatorConfig, grid: G) -> Result<Self> {
        config.validate()?;
        let confidence = ConfidenceCurve::from_config(&config);
        Ok(Self {
            config,
            grid,
            confidence,
        })
    }

    pub fn config(&self) -> &InterpolatorConfig {
        &self.config
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Estimate value and confidence for every cell covered by `samples`.
    ///
    /// Empty input gives an empty map. Fails only if a sample position cannot
    /// be indexed by the grid.
    pub fn compute(&self, samples: &[Sample]) -> Result<CellResults<G::Cell>> {
        self.compute_by(samples, |sample| sample.position, |sample| sample.value)
    }

    /// `compute` over arbitrary records, reading each through accessors
    pub fn compute_by<T, P, V>(&self, records: &[T], get_position: P, get_value: V) -> Result<CellResults<G::Cell>>
    where
        P: Fn(&T) -> Position,
        V: Fn(&T) -> f64,
    {
        let cells = self.aggregate_by(records, get_position, get_value)?;

        let results: CellResults<G::Cell> = cells
            .iter()
            .filter_map(|(&cell_id, accumulator)| {
                self.estimate_cell(cell_id, accumulator)
                    .map(|result| (cell_id, result))
            })
            .collect();

        debug!(
            samples = records.len(),
            reached = cells.len(),
            emitted = results.len(),
            "interpolated hex cells"
        );
        Ok(results)
    }

    /// Aggregation pass only: every reached cell with its contributions
    pub fn aggregate(&self, samples: &[Sample]) -> Result<Accumulators<G::Cell>> {
        self.aggregate_by(samples, |sample| sample.position, |sample| sample.value)
    }

    /// `aggregate` over arbitrary records, reading each through accessors
    pub fn aggregate_by<T, P, V>(&self, records: &[T], get_position: P, get_value: V) -> Result<Accumulators<G::Cell>>
    where
        P: Fn(&T) -> Position,
        V: Fn(&T) -> f64,
    {
        let mut cells = Accumulators::new();
        for (index, record) in records.iter().enumerate() {
            self.spread_sample(&mut cells, index, get_position(record), get_value(record))?;
        }
        Ok(cells)
    }

    fn spread_sample(
        &self,
        cells: &mut Accumulators<G::Cell>,
        index: usize,
        position: Position,
        value: f64,
    ) -> Result<()> {
        let origin = self
            .grid
            .position_to_cell(position)
            .map_err(|source| Error::InvalidPosition { index, source })?;
        trace!(index, ?origin, value, "spreading sample");

        let rings = self
            .grid
            .rings_by_distance(origin, self.config.interpolation_ring_radius);
        for (distance, ring) in rings.into_iter().enumerate() {
            for cell in ring {
                cells.entry(cell).or_default().push(distance as u32, value);
            }
        }
        Ok(())
    }

    fn estimate_cell(&self, cell_id: G::Cell, accumulator: &CellAccumulator) -> Option<CellResult<G::Cell>> {
        let min_distance = accumulator.min_distance()?;
        let confidence = self.confidence.confidence(min_distance)?;
        if !(confidence > 0.0) {
            return None;
        }
        Some(CellResult {
            cell_id,
            estimated_value: accumulator.idw_estimate(self.config.idw_power),
            confidence,
        })
    }
}

impl<G> HexInterpolator<G>
where
    G: HexGrid + Sync,
    G::Cell: Send + Sync,
{
    /// Parallel `compute`: samples are spread into per-thread partial maps that
    /// are merged before estimation. Matches `compute` up to summation order.
    pub fn compute_par(&self, samples: &[Sample]) -> Result<CellResults<G::Cell>> {
        let cells = samples
            .par_iter()
            .enumerate()
            .try_fold(Accumulators::new, |mut cells, (index, sample)| {
                self.spread_sample(&mut cells, index, sample.position, sample.value)?;
                Ok::<_, Error>(cells)
            })
            .try_reduce(Accumulators::new, |mut left, mut right| {
                if left.len() < right.len() {
                    std::mem::swap(&mut left, &mut right);
                }
                for (cell, accumulator) in right {
                    left.entry(cell).or_default().merge(accumulator);
                }
                Ok(left)
            })?;

        let reached = cells.len();
        let results: CellResults<G::Cell> = cells
            .into_par_iter()
            .filter_map(|(cell_id, accumulator)| {
                self.estimate_cell(cell_id, &accumulator)
                    .map(|result| (cell_id, result))
            })
            .collect();

        debug!(
            samples = samples.len(),
            reached,
            emitted = results.len(),
            "interpolated hex cells in parallel"
        );
        Ok(results)
    }
}

/// Per-cell contributions bucketed by ring distance
///
/// Each bucket holds the values of every sample whose ring expansion reached
/// the cell at that distance. A bucket exists only once something was pushed
/// into it, so an absent distance is never confused with an empty one.

use crate::math_utils::idw_weight;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellAccumulator {
    buckets: BTreeMap<u32, Vec<f64>>,
}

impl CellAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ring_distance: u32, value: f64) {
        self.buckets.entry(ring_distance).or_default().push(value);
    }

    /// Smallest ring distance with at least one contribution
    pub fn min_distance(&self) -> Option<u32> {
        self.buckets
            .iter()
            .find(|(_, values)| !values.is_empty())
            .map(|(&distance, _)| distance)
    }

    /// Values contributed at exactly `ring_distance`, if any bucket exists there
    pub fn values_at(&self, ring_distance: u32) -> Option<&[f64]> {
        self.buckets.get(&ring_distance).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    pub fn contribution_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Inverse distance weighted mean over every contribution at every distance
    ///
    /// Returns NaN for an empty accumulator.
    pub fn idw_estimate(&self, power: f64) -> f64 {
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (&distance, values) in &self.buckets {
            let weight = idw_weight(distance, power);
            for value in values {
                numerator += value * weight;
                denominator += weight;
            }
        }

        numerator / denominator
    }

    /// Fold another accumulator for the same cell into this one
    pub fn merge(&mut self, other: CellAccumulator) {
        for (distance, values) in other.buckets {
            self.buckets.entry(distance).or_default().extend(values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_absent_buckets_stay_absent() {
        let mut acc = CellAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.min_distance(), None);

        acc.push(3, 1.0);
        acc.push(7, 2.0);
        assert_eq!(acc.values_at(3), Some(&[1.0][..]));
        assert_eq!(acc.values_at(7), Some(&[2.0][..]));
        assert_eq!(acc.values_at(0), None);
        assert_eq!(acc.values_at(5), None);
        assert_eq!(acc.min_distance(), Some(3));
        assert_eq!(acc.contribution_count(), 2);
    }

    #[test]
    fn test_single_contribution_estimate_is_that_value() {
        let mut acc = CellAccumulator::new();
        acc.push(5, 42.0);
        assert_abs_diff_eq!(acc.idw_estimate(3.0), 42.0, epsilon = 1e-12);
    }

    #[test]
    fn test_estimate_uses_all_distances() {
        let mut acc = CellAccumulator::new();
        acc.push(0, 0.0);
        acc.push(1, 20.0);

        let w0 = 1.0 / 0.5_f64.powi(3);
        let w1 = 1.0 / 1.5_f64.powi(3);
        let expected = (20.0 * w1) / (w0 + w1);
        assert_abs_diff_eq!(acc.idw_estimate(3.0), expected, epsilon = 1e-12);

        // closer ring dominates but the farther one still pulls
        let estimate = acc.idw_estimate(3.0);
        assert!(estimate > 0.0 && estimate < 10.0);
    }

    #[test]
    fn test_equal_distance_estimate_is_mean() {
        let mut acc = CellAccumulator::new();
        acc.push(2, 0.0);
        acc.push(2, 20.0);
        acc.push(2, 40.0);
        assert_abs_diff_eq!(acc.idw_estimate(3.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_value_propagates() {
        let mut acc = CellAccumulator::new();
        acc.push(0, 1.0);
        acc.push(4, f64::NAN);
        assert!(acc.idw_estimate(3.0).is_nan());

        let mut acc = CellAccumulator::new();
        acc.push(1, f64::INFINITY);
        assert!(acc.idw_estimate(3.0).is_infinite() || acc.idw_estimate(3.0).is_nan());
    }

    #[test]
    fn test_merge_combines_buckets() {
        let mut a = CellAccumulator::new();
        a.push(2, 1.0);
        let mut b = CellAccumulator::new();
        b.push(2, 3.0);
        b.push(1, 5.0);

        a.merge(b);
        assert_eq!(a.min_distance(), Some(1));
        assert_eq!(a.values_at(2), Some(&[1.0, 3.0][..]));
        assert_eq!(a.contribution_count(), 3);
    }
}

//! Weighted average over `(value, weight)` pairs.

use crate::error::ReduceResult;
use crate::reducer::{LiftableReducer, Reducer};
use serde::{Deserialize, Serialize};

/// Accumulator for [`WeightedAverage`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedAverageState {
    /// Sum of `value * weight`.
    pub weighted_sum: f64,
    /// Sum of weights.
    pub total_weight: f64,
}

impl WeightedAverageState {
    /// Add one weighted value.
    pub fn accept(&mut self, value: f64, weight: f64) {
        self.weighted_sum += value * weight;
        self.total_weight += weight;
    }

    /// Current weighted average, `0.0` when the total weight is zero.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.total_weight == 0.0 {
            0.0
        } else {
            self.weighted_sum / self.total_weight
        }
    }
}

/// Weighted average of `(value, weight)` pairs.
///
/// - Accumulator: [`WeightedAverageState`]
/// - Output: `f64`
///
/// A zero total weight is not an error and yields `0.0`.
///
/// ```
/// use ironfold::{reduce, WeightedAverage};
///
/// let scores = vec![(85.0, 0.2), (92.0, 0.2), (78.0, 0.3), (88.0, 0.3)];
/// let avg = reduce(&WeightedAverage, scores)?;
/// assert!((avg - 85.2).abs() < 1e-9);
/// # Ok::<_, ironfold::ReduceError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedAverage;

impl Reducer<(f64, f64), WeightedAverageState, f64> for WeightedAverage {
    fn initial(&self) -> WeightedAverageState {
        WeightedAverageState::default()
    }

    fn accumulate(&self, acc: &mut WeightedAverageState, (value, weight): (f64, f64)) {
        acc.accept(value, weight);
    }

    fn combine(&self, acc: &mut WeightedAverageState, other: WeightedAverageState) {
        acc.weighted_sum += other.weighted_sum;
        acc.total_weight += other.total_weight;
    }

    fn finish(&self, acc: WeightedAverageState) -> ReduceResult<f64> {
        Ok(acc.average())
    }
}

impl LiftableReducer<(f64, f64), WeightedAverageState, f64> for WeightedAverage {
    fn build_from_slice(&self, items: &[(f64, f64)]) -> WeightedAverageState {
        let mut state = WeightedAverageState::default();
        for &(value, weight) in items {
            state.accept(value, weight);
        }
        state
    }
}

//! Statistical reducers: `Statistics` and `AverageF64`

use crate::error::ReduceResult;
use crate::reducer::{LiftableReducer, Reducer};
use serde::{Deserialize, Serialize};
use std::fmt;

/* ===================== Stats ===================== */

/// Running count, sum, minimum and maximum of a sequence of `f64` values.
///
/// The average is derived on read. With `count == 0`, [`average`](Stats::average)
/// is `0.0` and `min`/`max` hold the sentinels `+inf`/`-inf`; check `count`
/// before trusting them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of values seen.
    pub count: u64,
    /// Sum of values seen.
    pub sum: f64,
    /// Smallest value seen (`+inf` when empty).
    pub min: f64,
    /// Largest value seen (`-inf` when empty).
    pub max: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    /// Empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Record one value.
    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Fold another set of statistics into this one.
    pub fn combine(&mut self, other: &Self) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Mean of the values, or `0.0` when no values were recorded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// `true` if no values were recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats{{count={}, sum={:.2}, min={:.2}, max={:.2}, avg={:.2}}}",
            self.count,
            self.sum,
            self.min,
            self.max,
            self.average()
        )
    }
}

/* ===================== Statistics ===================== */

/// Summary statistics over values convertible into `f64`.
///
/// - Accumulator: [`Stats`]
/// - Output: [`Stats`]
///
/// Empty input is not an error; it yields `Stats::new()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Statistics;

impl<V> Reducer<V, Stats, Stats> for Statistics
where
    V: Into<f64>,
{
    fn initial(&self) -> Stats {
        Stats::new()
    }

    fn accumulate(&self, acc: &mut Stats, v: V) {
        acc.accept(v.into());
    }

    fn combine(&self, acc: &mut Stats, other: Stats) {
        acc.combine(&other);
    }

    fn finish(&self, acc: Stats) -> ReduceResult<Stats> {
        Ok(acc)
    }
}

impl<V> LiftableReducer<V, Stats, Stats> for Statistics
where
    V: Into<f64> + Clone,
{
    fn build_from_slice(&self, items: &[V]) -> Stats {
        let mut stats = Stats::new();
        for v in items {
            stats.accept(v.clone().into());
        }
        stats
    }
}

/* ===================== AverageF64 ===================== */

/// Mean of values convertible into `f64`; `0.0` for empty input.
///
/// Shares the [`Stats`] accumulator with [`Statistics`] and only reads its
/// average in `finish`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V> Reducer<V, Stats, f64> for AverageF64
where
    V: Into<f64>,
{
    fn initial(&self) -> Stats {
        Stats::new()
    }

    fn accumulate(&self, acc: &mut Stats, v: V) {
        acc.accept(v.into());
    }

    fn combine(&self, acc: &mut Stats, other: Stats) {
        acc.combine(&other);
    }

    fn finish(&self, acc: Stats) -> ReduceResult<f64> {
        Ok(acc.average())
    }
}

impl<V> LiftableReducer<V, Stats, f64> for AverageF64
where
    V: Into<f64> + Clone,
{
    fn build_from_slice(&self, items: &[V]) -> Stats {
        Statistics.build_from_slice(items)
    }
}

//! Exact median over buffered values.

use crate::error::{ReduceError, ReduceResult};
use crate::reducer::{LiftableReducer, Reducer};

/// Exact median of values convertible into `f64`.
///
/// Values are buffered unordered and sorted once in `finish`. For an even
/// number of values the result is the mean of the two middle elements of the
/// sorted buffer; for an odd number it is the middle element.
///
/// - Accumulator: `Vec<f64>`
/// - Output: `f64`
///
/// `combine` concatenates buffers, so the median itself is only ever computed
/// over the complete value set.
///
/// # Errors
/// `finish` fails with [`ReduceError::EmptyInput`] when no values were seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct Median;

impl Median {
    /// Median of `values`, sorting them in place first.
    ///
    /// # Errors
    /// Returns [`ReduceError::EmptyInput`] for an empty slice.
    pub fn of_unsorted(values: &mut [f64]) -> ReduceResult<f64> {
        if values.is_empty() {
            return Err(ReduceError::empty("Median"));
        }
        values.sort_unstable_by(f64::total_cmp);
        let n = values.len();
        if n % 2 == 0 {
            Ok((values[n / 2 - 1] + values[n / 2]) / 2.0)
        } else {
            Ok(values[n / 2])
        }
    }
}

impl<V> Reducer<V, Vec<f64>, f64> for Median
where
    V: Into<f64>,
{
    fn initial(&self) -> Vec<f64> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<f64>, v: V) {
        acc.push(v.into());
    }

    fn combine(&self, acc: &mut Vec<f64>, other: Vec<f64>) {
        if acc.is_empty() {
            *acc = other;
        } else {
            acc.extend(other);
        }
    }

    fn finish(&self, mut acc: Vec<f64>) -> ReduceResult<f64> {
        Self::of_unsorted(&mut acc)
    }
}

impl<V> LiftableReducer<V, Vec<f64>, f64> for Median
where
    V: Into<f64> + Clone,
{
    fn build_from_slice(&self, items: &[V]) -> Vec<f64> {
        items.iter().map(|v| v.clone().into()).collect()
    }
}

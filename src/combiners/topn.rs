//! Top-N selector for picking the highest-ranked members of a group

use crate::error::ReduceResult;
use crate::reducer::Reducer;
use std::marker::PhantomData;

/* ===================== TopN ===================== */

/// The `n` members with the largest ranking key, largest first.
///
/// All members are buffered in arrival order; `finish` performs a **stable**
/// descending sort by `key_fn` and keeps the first `n`. Members with equal
/// keys therefore keep their relative input order.
///
/// - Accumulator: `Vec<T>`
/// - Output: `Vec<T>` sorted descending, at most `n` long.
///
/// # Notes
/// - `n == 0` always produces an empty vector.
/// - Floating point ranks can be wrapped in
///   [`OrderedFloat`](ordered_float::OrderedFloat) to satisfy `Ord`.
///
/// ```
/// use ironfold::{reduce, TopN};
/// use ordered_float::OrderedFloat;
///
/// let ratings = vec![4.5, 4.3, 3.1, 4.8];
/// let top = reduce(&TopN::new(2, |r: &f64| OrderedFloat(*r)), ratings)?;
/// assert_eq!(top, vec![4.8, 4.5]);
/// # Ok::<_, ironfold::ReduceError>(())
/// ```
pub struct TopN<F, K> {
    /// Number of members to keep.
    pub n: usize,
    key_fn: F,
    _m: PhantomData<fn() -> K>,
}

impl<F, K> TopN<F, K> {
    /// Keep the `n` members ranked highest by `key_fn`.
    #[must_use]
    pub const fn new(n: usize, key_fn: F) -> Self {
        Self {
            n,
            key_fn,
            _m: PhantomData,
        }
    }
}

impl<T, K, F> Reducer<T, Vec<T>, Vec<T>> for TopN<F, K>
where
    F: Fn(&T) -> K + Send + Sync + 'static,
    K: Ord + 'static,
{
    fn initial(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn combine(&self, acc: &mut Vec<T>, other: Vec<T>) {
        acc.extend(other);
    }

    fn finish(&self, mut acc: Vec<T>) -> ReduceResult<Vec<T>> {
        // sort_by_cached_key is stable, so equal keys keep arrival order
        acc.sort_by_cached_key(|v| std::cmp::Reverse((self.key_fn)(v)));
        acc.truncate(self.n);
        Ok(acc)
    }
}

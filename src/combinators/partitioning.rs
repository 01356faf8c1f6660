//! Boolean partitioning: grouping specialized to a predicate.

use crate::error::ReduceResult;
use crate::reducer::Reducer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A value for each side of a boolean predicate.
///
/// Used both as the accumulator and as the finished result of
/// [`PartitioningBy`], so both sides always exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partitioned<X> {
    /// Value for elements matching the predicate.
    pub on_true: X,
    /// Value for elements not matching the predicate.
    pub on_false: X,
}

impl<X> Partitioned<X> {
    /// The side selected by `key`.
    pub const fn get(&self, key: bool) -> &X {
        if key { &self.on_true } else { &self.on_false }
    }

    /// Mutable access to the side selected by `key`.
    pub fn get_mut(&mut self, key: bool) -> &mut X {
        if key {
            &mut self.on_true
        } else {
            &mut self.on_false
        }
    }

    /// Both sides as `(true, ..)` then `(false, ..)`.
    pub fn iter(&self) -> impl Iterator<Item = (bool, &X)> {
        [(true, &self.on_true), (false, &self.on_false)].into_iter()
    }

    /// Convert into a two-entry map keyed by the predicate value.
    #[must_use]
    pub fn into_map(self) -> HashMap<bool, X> {
        HashMap::from([(true, self.on_true), (false, self.on_false)])
    }
}

/// Split elements by `predicate` and reduce each side with `downstream`.
///
/// - Accumulator: `Partitioned<A>`
/// - Output: `Partitioned<O>`
///
/// A side that received no elements still finishes its initial accumulator,
/// so `finish` always yields both entries.
///
/// ```
/// use ironfold::{reduce, PartitioningBy, ToVec};
///
/// let parts = reduce(&PartitioningBy::new(|n: &i32| n % 2 == 0, ToVec), vec![1, 2, 3, 4])?;
/// assert_eq!(parts.on_true, vec![2, 4]);
/// assert_eq!(parts.on_false, vec![1, 3]);
/// # Ok::<_, ironfold::ReduceError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PartitioningBy<P, R> {
    predicate: P,
    downstream: R,
}

impl<P, R> PartitioningBy<P, R> {
    /// Partition by `predicate`, reducing each side with `downstream`.
    pub const fn new(predicate: P, downstream: R) -> Self {
        Self {
            predicate,
            downstream,
        }
    }
}

impl<T, A, O, P, R> Reducer<T, Partitioned<A>, Partitioned<O>> for PartitioningBy<P, R>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
    R: Reducer<T, A, O>,
{
    fn initial(&self) -> Partitioned<A> {
        Partitioned {
            on_true: self.downstream.initial(),
            on_false: self.downstream.initial(),
        }
    }

    fn accumulate(&self, acc: &mut Partitioned<A>, item: T) {
        let side = (self.predicate)(&item);
        self.downstream.accumulate(acc.get_mut(side), item);
    }

    fn combine(&self, acc: &mut Partitioned<A>, other: Partitioned<A>) {
        self.downstream.combine(&mut acc.on_true, other.on_true);
        self.downstream.combine(&mut acc.on_false, other.on_false);
    }

    fn finish(&self, acc: Partitioned<A>) -> ReduceResult<Partitioned<O>> {
        Ok(Partitioned {
            on_true: self.downstream.finish(acc.on_true)?,
            on_false: self.downstream.finish(acc.on_false)?,
        })
    }
}

/// Build a [`PartitioningBy`] combinator.
pub const fn partitioning_by<P, R>(predicate: P, downstream: R) -> PartitioningBy<P, R> {
    PartitioningBy::new(predicate, downstream)
}

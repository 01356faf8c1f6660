//! Reducers over the set of distinct values.

use crate::error::ReduceResult;
use crate::reducer::{LiftableReducer, Reducer};
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;
use std::mem::swap;

/// Union `other` into `acc`, always extending the larger of the two sets.
fn union_into<T: Eq + Hash>(acc: &mut HashSet<T>, mut other: HashSet<T>) {
    if other.len() > acc.len() {
        swap(acc, &mut other);
    }
    acc.extend(other);
}

/// How many different values were seen.
///
/// ```
/// use ironfold::{reduce, DistinctCount};
///
/// let n = reduce(&DistinctCount::<&str>::new(), vec!["a", "b", "a"])?;
/// assert_eq!(n, 2);
/// # Ok::<_, ironfold::ReduceError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DistinctCount<T>(pub PhantomData<fn() -> T>);

impl<T> DistinctCount<T> {
    /// Convenience constructor (same as `Default`).
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Reducer<T, HashSet<T>, u64> for DistinctCount<T>
where
    T: Eq + Hash + 'static,
{
    fn initial(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn accumulate(&self, seen: &mut HashSet<T>, v: T) {
        seen.insert(v);
    }

    fn combine(&self, seen: &mut HashSet<T>, other: HashSet<T>) {
        union_into(seen, other);
    }

    fn finish(&self, seen: HashSet<T>) -> ReduceResult<u64> {
        Ok(seen.len() as u64)
    }
}

impl<T> LiftableReducer<T, HashSet<T>, u64> for DistinctCount<T>
where
    T: Eq + Hash + Clone + 'static,
{
    fn build_from_slice(&self, items: &[T]) -> HashSet<T> {
        HashSet::from_iter(items.iter().cloned())
    }
}

/// The distinct values themselves, as a `HashSet<T>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToSet<T>(pub PhantomData<fn() -> T>);

impl<T> ToSet<T> {
    /// Convenience constructor (same as `Default`).
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Reducer<T, HashSet<T>, HashSet<T>> for ToSet<T>
where
    T: Eq + Hash + 'static,
{
    fn initial(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn accumulate(&self, seen: &mut HashSet<T>, v: T) {
        seen.insert(v);
    }

    fn combine(&self, seen: &mut HashSet<T>, other: HashSet<T>) {
        union_into(seen, other);
    }

    fn finish(&self, seen: HashSet<T>) -> ReduceResult<HashSet<T>> {
        Ok(seen)
    }
}

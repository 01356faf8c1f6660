//! Counting, summing and comparator-based extremes.

use crate::error::ReduceResult;
use crate::reducer::{LiftableReducer, Reducer};
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::Add;

/// Number of elements, whatever their type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> Reducer<V, u64, u64> for Count {
    fn initial(&self) -> u64 {
        0
    }

    fn accumulate(&self, n: &mut u64, _item: V) {
        *n += 1;
    }

    fn combine(&self, n: &mut u64, other: u64) {
        *n += other;
    }

    fn finish(&self, n: u64) -> ReduceResult<u64> {
        Ok(n)
    }
}

impl<V> LiftableReducer<V, u64, u64> for Count {
    fn build_from_slice(&self, items: &[V]) -> u64 {
        items.len() as u64
    }
}

/// Sum of values, starting from `T::default()`.
///
/// ```
/// use ironfold::{reduce, Sum};
///
/// assert_eq!(reduce(&Sum::<u32>::new(), vec![1, 2, 3])?, 6);
/// # Ok::<_, ironfold::ReduceError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<fn() -> T>);

impl<T> Sum<T> {
    /// Convenience constructor (same as `Default`).
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Sum<T>
where
    T: Add<Output = T> + Default,
{
    fn add_into(total: &mut T, v: T) {
        let prior = std::mem::take(total);
        *total = prior + v;
    }
}

impl<T> Reducer<T, T, T> for Sum<T>
where
    T: Add<Output = T> + Default + 'static,
{
    fn initial(&self) -> T {
        T::default()
    }

    fn accumulate(&self, total: &mut T, v: T) {
        Self::add_into(total, v);
    }

    fn combine(&self, total: &mut T, other: T) {
        Self::add_into(total, other);
    }

    fn finish(&self, total: T) -> ReduceResult<T> {
        Ok(total)
    }
}

impl<T> LiftableReducer<T, T, T> for Sum<T>
where
    T: Add<Output = T> + Default + Clone + 'static,
{
    fn build_from_slice(&self, items: &[T]) -> T {
        let mut total = T::default();
        for v in items {
            Self::add_into(&mut total, v.clone());
        }
        total
    }
}

/// Store `candidate` in `best` if it is empty or `cmp(candidate, best)` is `wanted`.
///
/// Equal elements never replace the stored one, so the earliest wins ties.
fn replace_if<T, F>(best: &mut Option<T>, candidate: T, cmp: &F, wanted: Ordering)
where
    F: Fn(&T, &T) -> Ordering,
{
    let replace = best
        .as_ref()
        .is_none_or(|cur| cmp(&candidate, cur) == wanted);
    if replace {
        *best = Some(candidate);
    }
}

/// Smallest element under `cmp`, or `None` for empty input.
///
/// On ties the element that arrived first wins.
#[derive(Clone, Copy, Debug)]
pub struct MinBy<F> {
    cmp: F,
}

impl<F> MinBy<F> {
    /// Create a `MinBy` that orders elements with `cmp`.
    pub const fn new(cmp: F) -> Self {
        Self { cmp }
    }
}

impl<T, F> Reducer<T, Option<T>, Option<T>> for MinBy<F>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    fn initial(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, best: &mut Option<T>, v: T) {
        replace_if(best, v, &self.cmp, Ordering::Less);
    }

    fn combine(&self, best: &mut Option<T>, other: Option<T>) {
        if let Some(v) = other {
            replace_if(best, v, &self.cmp, Ordering::Less);
        }
    }

    fn finish(&self, best: Option<T>) -> ReduceResult<Option<T>> {
        Ok(best)
    }
}

/// Largest element under `cmp`, or `None` for empty input.
///
/// On ties the element that arrived first wins.
#[derive(Clone, Copy, Debug)]
pub struct MaxBy<F> {
    cmp: F,
}

impl<F> MaxBy<F> {
    /// Create a `MaxBy` that orders elements with `cmp`.
    pub const fn new(cmp: F) -> Self {
        Self { cmp }
    }
}

impl<T, F> Reducer<T, Option<T>, Option<T>> for MaxBy<F>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    fn initial(&self) -> Option<T> {
        None
    }

    fn accumulate(&self, best: &mut Option<T>, v: T) {
        replace_if(best, v, &self.cmp, Ordering::Greater);
    }

    fn combine(&self, best: &mut Option<T>, other: Option<T>) {
        if let Some(v) = other {
            replace_if(best, v, &self.cmp, Ordering::Greater);
        }
    }

    fn finish(&self, best: Option<T>) -> ReduceResult<Option<T>> {
        Ok(best)
    }
}

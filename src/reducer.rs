//! The reduction contract every reducer and combinator implements.
//!
//! A [`Reducer`] is described by four operations over an accumulator `A`:
//!
//! - [`initial`](Reducer::initial) creates an empty accumulator,
//! - [`accumulate`](Reducer::accumulate) folds one input element into it,
//! - [`combine`](Reducer::combine) merges a second, independently built
//!   accumulator into the first,
//! - [`finish`](Reducer::finish) consumes the accumulator and produces the result.
//!
//! `combine` must be associative so that chunks of the input can be reduced on
//! separate threads and merged afterwards. Combinators such as
//! [`GroupingBy`](crate::GroupingBy) and [`Teeing`](crate::Teeing) implement
//! the same trait, which is what allows arbitrary nesting.

use crate::error::ReduceResult;

/// A reduction from elements of type `T` through accumulator `A` to output `O`.
///
/// Implementations must only touch the accumulator they are handed; two
/// accumulators never share mutable state.
pub trait Reducer<T, A, O>: Send + Sync + 'static {
    /// Create an empty accumulator.
    fn initial(&self) -> A;

    /// Fold one element into `acc`.
    fn accumulate(&self, acc: &mut A, item: T);

    /// Merge `other` into `acc`. `other` holds elements that arrived after
    /// those already in `acc`.
    fn combine(&self, acc: &mut A, other: A);

    /// Consume the accumulator and produce the final result.
    ///
    /// # Errors
    /// Returns a [`ReduceError`](crate::ReduceError) when the accumulated
    /// state has no meaningful result (for example, a median over no values).
    fn finish(&self, acc: A) -> ReduceResult<O>;
}

/// Optional fast path: build an accumulator from a whole slice at once.
///
/// Used by [`Runner::run_lifted`](crate::Runner::run_lifted) to skip the
/// per-element `accumulate` calls inside each chunk.
pub trait LiftableReducer<T, A, O>: Reducer<T, A, O> {
    /// Build the accumulator for `items` directly.
    fn build_from_slice(&self, items: &[T]) -> A;
}

/// Fold every element of `items` through `reducer` and finish the result.
///
/// The iterator is fully consumed.
///
/// # Errors
/// Propagates the error returned by [`Reducer::finish`].
///
/// # Example
/// ```
/// use ironfold::{reduce, Count};
///
/// let n = reduce(&Count, vec!["a", "b", "c"])?;
/// assert_eq!(n, 3);
/// # Ok::<_, ironfold::ReduceError>(())
/// ```
pub fn reduce<T, A, O, R, I>(reducer: &R, items: I) -> ReduceResult<O>
where
    R: Reducer<T, A, O>,
    I: IntoIterator<Item = T>,
{
    let acc = accumulate_all::<T, A, O, R, I>(reducer, items);
    reducer.finish(acc)
}

/// Fold `items` into a fresh accumulator without finishing it.
pub(crate) fn accumulate_all<T, A, O, R, I>(reducer: &R, items: I) -> A
where
    R: Reducer<T, A, O>,
    I: IntoIterator<Item = T>,
{
    let mut acc = reducer.initial();
    for item in items {
        reducer.accumulate(&mut acc, item);
    }
    acc
}

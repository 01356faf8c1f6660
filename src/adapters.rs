//! Reducer adapters: transform inputs before, or results after, a downstream reducer.
//!
//! - [`Mapping`] applies a value extractor to each element.
//! - [`Filtering`] drops elements that fail a predicate.
//! - [`FlatMapping`] expands each element into zero or more elements.
//! - [`AndThen`] applies a finishing transform to the downstream result.
//!
//! The free functions [`mapping`], [`filtering`], [`flat_mapping`] and
//! [`and_then`] build them without naming the phantom type parameters.
//!
//! ```ignore
//! use ironfold::*;
//!
//! // Average grade of students, reading the grade out of each record.
//! let avg = reduce(&mapping(|s: Student| s.grade, AverageF64), students)?;
//! ```

use crate::error::ReduceResult;
use crate::reducer::Reducer;
use std::marker::PhantomData;

/* ===================== Mapping ===================== */

/// Feed `f(item)` to the downstream reducer instead of `item`.
pub struct Mapping<F, R, U> {
    f: F,
    downstream: R,
    _m: PhantomData<fn() -> U>,
}

impl<F, R, U> Mapping<F, R, U> {
    /// Wrap `downstream` so it sees `f(item)` for every item.
    pub const fn new(f: F, downstream: R) -> Self {
        Self {
            f,
            downstream,
            _m: PhantomData,
        }
    }
}

impl<T, U, A, O, F, R> Reducer<T, A, O> for Mapping<F, R, U>
where
    F: Fn(T) -> U + Send + Sync + 'static,
    R: Reducer<U, A, O>,
    U: 'static,
{
    fn initial(&self) -> A {
        self.downstream.initial()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        self.downstream.accumulate(acc, (self.f)(item));
    }

    fn combine(&self, acc: &mut A, other: A) {
        self.downstream.combine(acc, other);
    }

    fn finish(&self, acc: A) -> ReduceResult<O> {
        self.downstream.finish(acc)
    }
}

/// Build a [`Mapping`] adapter.
pub const fn mapping<F, R, U>(f: F, downstream: R) -> Mapping<F, R, U> {
    Mapping::new(f, downstream)
}

/* ===================== Filtering ===================== */

/// Only feed items matching `predicate` to the downstream reducer.
pub struct Filtering<P, R> {
    predicate: P,
    downstream: R,
}

impl<P, R> Filtering<P, R> {
    /// Wrap `downstream` so it only sees items for which `predicate` holds.
    pub const fn new(predicate: P, downstream: R) -> Self {
        Self {
            predicate,
            downstream,
        }
    }
}

impl<T, A, O, P, R> Reducer<T, A, O> for Filtering<P, R>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
    R: Reducer<T, A, O>,
{
    fn initial(&self) -> A {
        self.downstream.initial()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        if (self.predicate)(&item) {
            self.downstream.accumulate(acc, item);
        }
    }

    fn combine(&self, acc: &mut A, other: A) {
        self.downstream.combine(acc, other);
    }

    fn finish(&self, acc: A) -> ReduceResult<O> {
        self.downstream.finish(acc)
    }
}

/// Build a [`Filtering`] adapter.
pub const fn filtering<P, R>(predicate: P, downstream: R) -> Filtering<P, R> {
    Filtering::new(predicate, downstream)
}

/* ===================== FlatMapping ===================== */

/// Expand each item into a `Vec<U>` and feed every element downstream, in order.
pub struct FlatMapping<F, R, U> {
    f: F,
    downstream: R,
    _m: PhantomData<fn() -> U>,
}

impl<F, R, U> FlatMapping<F, R, U> {
    /// Wrap `downstream` so it sees every element of `f(item)`.
    pub const fn new(f: F, downstream: R) -> Self {
        Self {
            f,
            downstream,
            _m: PhantomData,
        }
    }
}

impl<T, U, A, O, F, R> Reducer<T, A, O> for FlatMapping<F, R, U>
where
    F: Fn(T) -> Vec<U> + Send + Sync + 'static,
    R: Reducer<U, A, O>,
    U: 'static,
{
    fn initial(&self) -> A {
        self.downstream.initial()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        for u in (self.f)(item) {
            self.downstream.accumulate(acc, u);
        }
    }

    fn combine(&self, acc: &mut A, other: A) {
        self.downstream.combine(acc, other);
    }

    fn finish(&self, acc: A) -> ReduceResult<O> {
        self.downstream.finish(acc)
    }
}

/// Build a [`FlatMapping`] adapter.
pub const fn flat_mapping<F, R, U>(f: F, downstream: R) -> FlatMapping<F, R, U> {
    FlatMapping::new(f, downstream)
}

/* ===================== AndThen ===================== */

/// Apply `f` to the downstream result after it finishes.
pub struct AndThen<R, F, O1> {
    downstream: R,
    f: F,
    _m: PhantomData<fn() -> O1>,
}

impl<R, F, O1> AndThen<R, F, O1> {
    /// Post-process the result of `downstream` with `f`.
    pub const fn new(downstream: R, f: F) -> Self {
        Self {
            downstream,
            f,
            _m: PhantomData,
        }
    }
}

impl<T, A, O1, O, R, F> Reducer<T, A, O> for AndThen<R, F, O1>
where
    R: Reducer<T, A, O1>,
    F: Fn(O1) -> O + Send + Sync + 'static,
    O1: 'static,
{
    fn initial(&self) -> A {
        self.downstream.initial()
    }

    fn accumulate(&self, acc: &mut A, item: T) {
        self.downstream.accumulate(acc, item);
    }

    fn combine(&self, acc: &mut A, other: A) {
        self.downstream.combine(acc, other);
    }

    fn finish(&self, acc: A) -> ReduceResult<O> {
        self.downstream.finish(acc).map(&self.f)
    }
}

/// Build an [`AndThen`] adapter.
pub const fn and_then<R, F, O1>(downstream: R, f: F) -> AndThen<R, F, O1> {
    AndThen::new(downstream, f)
}

//! Teeing: two independent reductions over one sequence, merged at the end.

use crate::error::ReduceResult;
use crate::reducer::Reducer;
use std::marker::PhantomData;

/// Feed every element to two reducers and merge their finished results.
///
/// The two branch accumulators live side by side in a tuple and never see
/// each other's state. Each element is cloned for the first branch and moved
/// into the second.
///
/// - Accumulator: `(A1, A2)`
/// - Output: `merger(O1, O2)`
///
/// ```
/// use ironfold::{reduce, Count, Sum, Teeing};
///
/// let mean = Teeing::new(Sum::<f64>::new(), Count, |sum: f64, n: u64| sum / n as f64);
/// assert_eq!(reduce(&mean, vec![1.0, 2.0, 6.0])?, 3.0);
/// # Ok::<_, ironfold::ReduceError>(())
/// ```
///
/// # Errors
/// `finish` fails if either branch fails; the merger is not called then.
pub struct Teeing<R1, R2, F, O1, O2> {
    first: R1,
    second: R2,
    merger: F,
    _m: PhantomData<fn() -> (O1, O2)>,
}

impl<R1, R2, F, O1, O2> Teeing<R1, R2, F, O1, O2> {
    /// Run `first` and `second` side by side, merging results with `merger`.
    pub const fn new(first: R1, second: R2, merger: F) -> Self {
        Self {
            first,
            second,
            merger,
            _m: PhantomData,
        }
    }
}

impl<T, A1, A2, O1, O2, O, R1, R2, F> Reducer<T, (A1, A2), O> for Teeing<R1, R2, F, O1, O2>
where
    T: Clone,
    R1: Reducer<T, A1, O1>,
    R2: Reducer<T, A2, O2>,
    F: Fn(O1, O2) -> O + Send + Sync + 'static,
    O1: 'static,
    O2: 'static,
{
    fn initial(&self) -> (A1, A2) {
        (self.first.initial(), self.second.initial())
    }

    fn accumulate(&self, acc: &mut (A1, A2), item: T) {
        self.first.accumulate(&mut acc.0, item.clone());
        self.second.accumulate(&mut acc.1, item);
    }

    fn combine(&self, acc: &mut (A1, A2), other: (A1, A2)) {
        self.first.combine(&mut acc.0, other.0);
        self.second.combine(&mut acc.1, other.1);
    }

    fn finish(&self, acc: (A1, A2)) -> ReduceResult<O> {
        let r1 = self.first.finish(acc.0)?;
        let r2 = self.second.finish(acc.1)?;
        Ok((self.merger)(r1, r2))
    }
}

/// Build a [`Teeing`] combinator.
pub const fn teeing<R1, R2, F, O1, O2>(first: R1, second: R2, merger: F) -> Teeing<R1, R2, F, O1, O2> {
    Teeing::new(first, second, merger)
}

//! Two-level grouping keyed by `(outer, inner)`.
//!
//! Nested `GroupingBy` keeps one inner map per outer key in every accumulator,
//! so merging chunk results walks maps of maps. [`CompositeGroupingBy`]
//! accumulates into one flat `HashMap<(K1, K2), _>` instead (a single hash
//! probe per element and per merged cell) and only indexes the finished
//! cells by outer key once, in `finish`.

use crate::error::ReduceResult;
use crate::reducer::Reducer;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Finished result of [`CompositeGroupingBy`].
///
/// Cells are indexed by outer key, so [`get`](Self::get) and
/// [`inner`](Self::inner) borrow the keys they are given and never clone
/// them. Equality compares cell contents only and does not depend on
/// iteration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeGroups<K1, K2, O>
where
    K1: Eq + Hash,
    K2: Eq + Hash,
{
    rows: HashMap<K1, HashMap<K2, O>>,
    cells: usize,
}

impl<K1, K2, O> CompositeGroups<K1, K2, O>
where
    K1: Eq + Hash,
    K2: Eq + Hash,
{
    fn from_cells(flat: HashMap<(K1, K2), O>) -> Self {
        let cells = flat.len();
        let mut rows: HashMap<K1, HashMap<K2, O>> = HashMap::new();
        for ((k1, k2), o) in flat {
            rows.entry(k1).or_default().insert(k2, o);
        }
        Self { rows, cells }
    }

    /// Result for the `(outer, inner)` cell, if any element landed there.
    pub fn get(&self, outer: &K1, inner: &K2) -> Option<&O> {
        self.rows.get(outer)?.get(inner)
    }

    /// All outer keys, in unspecified order.
    pub fn outer_keys(&self) -> impl Iterator<Item = &K1> {
        self.rows.keys()
    }

    /// `(inner key, result)` pairs under `outer`, in unspecified order.
    pub fn inner<'a>(&'a self, outer: &K1) -> impl Iterator<Item = (&'a K2, &'a O)> + 'a {
        self.rows.get(outer).into_iter().flatten()
    }

    /// Every `((outer, inner), result)` cell, in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = ((&K1, &K2), &O)> {
        self.rows
            .iter()
            .flat_map(|(k1, row)| row.iter().map(move |(k2, o)| ((k1, k2), o)))
    }

    /// Number of populated cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells
    }

    /// `true` if no element was grouped.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells == 0
    }

    /// Convert to the nested-map shape produced by two nested `GroupingBy`s.
    #[must_use]
    pub fn into_nested(self) -> HashMap<K1, HashMap<K2, O>> {
        self.rows
    }
}

/// Group by an `(outer, inner)` key pair and reduce each cell with `downstream`.
///
/// - Accumulator: `HashMap<(K1, K2), A>`
/// - Output: [`CompositeGroups<K1, K2, O>`]
pub struct CompositeGroupingBy<OF, IF, R> {
    outer_fn: OF,
    inner_fn: IF,
    downstream: R,
}

impl<OF, IF, R> CompositeGroupingBy<OF, IF, R> {
    /// Group by `(outer_fn(t), inner_fn(t))`, reducing each cell with `downstream`.
    pub const fn new(outer_fn: OF, inner_fn: IF, downstream: R) -> Self {
        Self {
            outer_fn,
            inner_fn,
            downstream,
        }
    }
}

impl<T, K1, K2, A, O, OF, IF, R> Reducer<T, HashMap<(K1, K2), A>, CompositeGroups<K1, K2, O>>
    for CompositeGroupingBy<OF, IF, R>
where
    K1: Eq + Hash,
    K2: Eq + Hash,
    OF: Fn(&T) -> K1 + Send + Sync + 'static,
    IF: Fn(&T) -> K2 + Send + Sync + 'static,
    R: Reducer<T, A, O>,
{
    fn initial(&self) -> HashMap<(K1, K2), A> {
        HashMap::new()
    }

    fn accumulate(&self, acc: &mut HashMap<(K1, K2), A>, item: T) {
        let key = ((self.outer_fn)(&item), (self.inner_fn)(&item));
        let slot = acc
            .entry(key)
            .or_insert_with(|| self.downstream.initial());
        self.downstream.accumulate(slot, item);
    }

    fn combine(&self, acc: &mut HashMap<(K1, K2), A>, other: HashMap<(K1, K2), A>) {
        for (k, a) in other {
            match acc.entry(k) {
                Entry::Occupied(mut e) => self.downstream.combine(e.get_mut(), a),
                Entry::Vacant(e) => {
                    e.insert(a);
                }
            }
        }
    }

    fn finish(&self, acc: HashMap<(K1, K2), A>) -> ReduceResult<CompositeGroups<K1, K2, O>> {
        let cells = acc
            .into_iter()
            .map(|(k, a)| self.downstream.finish(a).map(|o| (k, o)))
            .collect::<ReduceResult<HashMap<_, _>>>()?;
        Ok(CompositeGroups::from_cells(cells))
    }
}

//! Grouping by key: route each element to a per-key downstream accumulator.
//!
//! ## Example
//! ```ignore
//! use ironfold::*;
//!
//! // word -> occurrences
//! let freq = reduce(&grouping_by(|w: &String| w.clone(), Count), words)?;
//!
//! // category -> year -> total revenue (multi-level)
//! let summary = reduce(
//!     &grouping_by(
//!         |s: &Sale| s.category.clone(),
//!         grouping_by(|s: &Sale| s.year, mapping(|s: Sale| s.revenue, Sum::<f64>::new())),
//!     ),
//!     sales,
//! )?;
//! ```

use crate::error::ReduceResult;
use crate::reducer::Reducer;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Group elements by `key_fn` and reduce each group with `downstream`.
///
/// - Accumulator: `HashMap<K, A>`, one downstream accumulator per key, created
///   with `downstream.initial()` when the key is first seen.
/// - Output: `HashMap<K, O>`.
///
/// Nesting another `GroupingBy` as `downstream` yields multi-level grouping.
/// Key order in the output is unspecified.
///
/// # Errors
/// `finish` fails with the first error reported by a downstream `finish`; no
/// partial map is returned.
#[derive(Clone, Copy, Debug)]
pub struct GroupingBy<KF, R> {
    key_fn: KF,
    downstream: R,
}

impl<KF, R> GroupingBy<KF, R> {
    /// Group by `key_fn`, reducing each group with `downstream`.
    pub const fn new(key_fn: KF, downstream: R) -> Self {
        Self { key_fn, downstream }
    }
}

impl<T, K, A, O, KF, R> Reducer<T, HashMap<K, A>, HashMap<K, O>> for GroupingBy<KF, R>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K + Send + Sync + 'static,
    R: Reducer<T, A, O>,
{
    fn initial(&self) -> HashMap<K, A> {
        HashMap::new()
    }

    fn accumulate(&self, acc: &mut HashMap<K, A>, item: T) {
        let key = (self.key_fn)(&item);
        let slot = acc
            .entry(key)
            .or_insert_with(|| self.downstream.initial());
        self.downstream.accumulate(slot, item);
    }

    fn combine(&self, acc: &mut HashMap<K, A>, other: HashMap<K, A>) {
        if acc.is_empty() {
            *acc = other;
            return;
        }
        for (k, a) in other {
            match acc.entry(k) {
                Entry::Occupied(mut e) => self.downstream.combine(e.get_mut(), a),
                Entry::Vacant(e) => {
                    e.insert(a);
                }
            }
        }
    }

    fn finish(&self, acc: HashMap<K, A>) -> ReduceResult<HashMap<K, O>> {
        acc.into_iter()
            .map(|(k, a)| self.downstream.finish(a).map(|o| (k, o)))
            .collect()
    }
}

/// Build a [`GroupingBy`] combinator.
pub const fn grouping_by<KF, R>(key_fn: KF, downstream: R) -> GroupingBy<KF, R> {
    GroupingBy::new(key_fn, downstream)
}

//! Assertion helpers for testing reducers.
//!
//! - [`assert_f64_near`]: float comparison with an absolute tolerance
//! - [`assert_split_invariant`]: every split of the input, reduced separately
//!   and combined, matches reducing the whole input
//! - [`assert_groups_cover`]: grouped output is a partition of the input
//! - [`sorted_entries`]: a map's entries sorted by key, for stable comparisons
//!
//! ```
//! use ironfold::testing::*;
//! use ironfold::Statistics;
//!
//! assert_split_invariant(&Statistics, &[1.0, 2.0, 3.0, 4.0]);
//! ```

use crate::reducer::{Reducer, accumulate_all};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert that `actual` is within `eps` of `expected`.
///
/// # Panics
///
/// Panics if `|actual - expected| > eps` or `actual` is NaN.
///
/// # Example
///
/// ```
/// use ironfold::testing::assert_f64_near;
///
/// assert_f64_near(0.1 + 0.2, 0.3, 1e-12);
/// ```
pub fn assert_f64_near(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() <= eps,
        "Float mismatch:\n  Expected: {expected}\n  Actual: {actual}\n  Tolerance: {eps}"
    );
}

/// Assert that `combine(acc(items[..k]), acc(items[k..]))` finishes to the
/// same result as reducing `items` in one pass, for every split point `k`.
///
/// Errors are compared too, so a reducer that fails on the whole input must
/// fail the same way after combining.
///
/// # Panics
///
/// Panics at the first split point whose result differs.
pub fn assert_split_invariant<T, A, O, R>(reducer: &R, items: &[T])
where
    T: Clone,
    O: PartialEq + Debug,
    R: Reducer<T, A, O>,
{
    let whole = reducer.finish(accumulate_all::<T, A, O, R, _>(
        reducer,
        items.iter().cloned(),
    ));
    for k in 0..=items.len() {
        let (left, right) = items.split_at(k);
        let mut acc = accumulate_all::<T, A, O, R, _>(reducer, left.iter().cloned());
        reducer.combine(
            &mut acc,
            accumulate_all::<T, A, O, R, _>(reducer, right.iter().cloned()),
        );
        let split = reducer.finish(acc);
        assert_eq!(
            split, whole,
            "Split mismatch at index {k} of {}:\n  Whole: {whole:?}\n  Split: {split:?}",
            items.len()
        );
    }
}

/// Assert that `groups` is a partition of `input`: every input element lands
/// in exactly one group, and nothing else does.
///
/// Compares multisets, so duplicates must be accounted for exactly.
///
/// # Panics
///
/// Panics if the total group size differs from `input.len()` or the
/// multisets differ.
///
/// # Example
///
/// ```
/// use ironfold::testing::assert_groups_cover;
/// use std::collections::HashMap;
///
/// let groups = HashMap::from([(true, vec![2, 4]), (false, vec![1, 3])]);
/// assert_groups_cover(&groups, &[1, 2, 3, 4]);
/// ```
pub fn assert_groups_cover<K, V, S>(groups: &HashMap<K, Vec<V>, S>, input: &[V])
where
    K: Debug,
    V: Debug + Eq + Hash,
    S: BuildHasher,
{
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(
        total,
        input.len(),
        "Group sizes do not add up:\n  Input length: {}\n  Total grouped: {total}\n  Groups: {groups:?}",
        input.len()
    );

    let mut remaining: HashMap<&V, usize> = HashMap::new();
    for v in input {
        *remaining.entry(v).or_default() += 1;
    }
    for (k, members) in groups {
        for v in members {
            match remaining.get_mut(v) {
                Some(n) if *n > 0 => *n -= 1,
                _ => panic!("Group {k:?} holds {v:?}, which is not (or no longer) in the input"),
            }
        }
    }
}

/// Entries of `map` sorted by key.
///
/// # Example
///
/// ```
/// use ironfold::testing::sorted_entries;
/// use std::collections::HashMap;
///
/// let m = HashMap::from([("b", 2), ("a", 1)]);
/// assert_eq!(sorted_entries(m), vec![("a", 1), ("b", 2)]);
/// ```
#[must_use]
pub fn sorted_entries<K: Ord, V, S>(map: HashMap<K, V, S>) -> Vec<(K, V)> {
    let mut entries: Vec<(K, V)> = map.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

//! Collecting reducers: `ToVec`, `Joining`, `ToMap`

use crate::error::ReduceResult;
use crate::reducer::Reducer;
use std::collections::HashMap;
use std::hash::Hash;

/* ===================== ToVec ===================== */

/// Collect every element in arrival order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToVec;

impl<T> Reducer<T, Vec<T>, Vec<T>> for ToVec {
    fn initial(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<T>, v: T) {
        acc.push(v);
    }

    fn combine(&self, acc: &mut Vec<T>, other: Vec<T>) {
        acc.extend(other);
    }

    fn finish(&self, acc: Vec<T>) -> ReduceResult<Vec<T>> {
        Ok(acc)
    }
}

/* ===================== Joining ===================== */

/// Concatenate strings with a delimiter, wrapped in an optional prefix and suffix.
///
/// ```
/// use ironfold::{reduce, Joining};
///
/// let s = reduce(&Joining::new("; "), vec!["a: x", "b: y"])?;
/// assert_eq!(s, "a: x; b: y");
/// # Ok::<_, ironfold::ReduceError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Joining {
    delimiter: String,
    prefix: String,
    suffix: String,
}

impl Joining {
    /// Join with `delimiter` and no prefix or suffix.
    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Wrap the joined string in `prefix` and `suffix`.
    #[must_use]
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }
}

impl<S> Reducer<S, Vec<String>, String> for Joining
where
    S: Into<String>,
{
    fn initial(&self) -> Vec<String> {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Vec<String>, v: S) {
        acc.push(v.into());
    }

    fn combine(&self, acc: &mut Vec<String>, other: Vec<String>) {
        acc.extend(other);
    }

    fn finish(&self, acc: Vec<String>) -> ReduceResult<String> {
        Ok(format!(
            "{}{}{}",
            self.prefix,
            acc.join(&self.delimiter),
            self.suffix
        ))
    }
}

/* ===================== ToMap ===================== */

/// Build a key→value map directly, resolving key collisions with `merge`.
///
/// `merge(existing, incoming)` is applied in arrival order, both while
/// accumulating and when combining chunk results (the left chunk's value is
/// `existing`).
pub struct ToMap<KF, VF, MF> {
    key_fn: KF,
    value_fn: VF,
    merge: MF,
}

impl<KF, VF, MF> ToMap<KF, VF, MF> {
    /// Map each element to `(key_fn(&t), value_fn(t))`, merging collisions with `merge`.
    pub const fn new(key_fn: KF, value_fn: VF, merge: MF) -> Self {
        Self {
            key_fn,
            value_fn,
            merge,
        }
    }

    fn insert<K, V>(&self, acc: &mut HashMap<K, V>, k: K, v: V)
    where
        K: Eq + Hash,
        MF: Fn(V, V) -> V,
    {
        let merged = match acc.remove(&k) {
            Some(existing) => (self.merge)(existing, v),
            None => v,
        };
        acc.insert(k, merged);
    }
}

impl<T, K, V, KF, VF, MF> Reducer<T, HashMap<K, V>, HashMap<K, V>> for ToMap<KF, VF, MF>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K + Send + Sync + 'static,
    VF: Fn(T) -> V + Send + Sync + 'static,
    MF: Fn(V, V) -> V + Send + Sync + 'static,
{
    fn initial(&self) -> HashMap<K, V> {
        HashMap::new()
    }

    fn accumulate(&self, acc: &mut HashMap<K, V>, item: T) {
        let k = (self.key_fn)(&item);
        let v = (self.value_fn)(item);
        self.insert(acc, k, v);
    }

    fn combine(&self, acc: &mut HashMap<K, V>, other: HashMap<K, V>) {
        for (k, v) in other {
            self.insert(acc, k, v);
        }
    }

    fn finish(&self, acc: HashMap<K, V>) -> ReduceResult<HashMap<K, V>> {
        Ok(acc)
    }
}

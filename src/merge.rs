//! Key-collision merge resolution with Set/Append semantics.
//!
//! [`MergeConflictResolver`] folds `(key, Change)` pairs straight into a
//! key→value map. Each key moves through a small state machine:
//!
//! - unseen + `Set(v)` or `Append(v)` → `v`, remembering the operation;
//! - any state + `Set(v)` → `v` (overwrite);
//! - resolved `p` + `Append(v)` → `p` followed by `v` (for strings, `"p,v"`).
//!
//! The operation is carried as an explicit [`Change`] variant next to the
//! value, never packed into the value itself.
//!
//! ## Parallel use
//!
//! Chunk accumulators merge as if the right chunk's updates were replayed
//! after the left chunk's. That is associative but not commutative: chunk
//! results must be combined in input order, which
//! [`Runner`](crate::Runner) guarantees.
//!
//! ## Example
//! ```
//! use ironfold::{reduce, Change, MergeConflictResolver};
//!
//! let updates = vec![
//!     ("A", Change::Set("val1".to_string())),
//!     ("A", Change::Append("val2".to_string())),
//!     ("B", Change::Set("valB1".to_string())),
//!     ("B", Change::Set("valB2".to_string())),
//! ];
//! let map = reduce(&MergeConflictResolver, updates)?;
//! assert_eq!(map["A"], "val1,val2");
//! assert_eq!(map["B"], "valB2");
//! # Ok::<_, ironfold::ReduceError>(())
//! ```

use crate::error::{ReduceError, ReduceResult};
use crate::reducer::Reducer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use tracing::{debug, trace};

/* ===================== Operation / Change ===================== */

/// How an update affects the value already stored for its key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Overwrite the stored value.
    Set,
    /// Append to the stored value.
    Append,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set => f.write_str("SET"),
            Self::Append => f.write_str("APPEND"),
        }
    }
}

impl FromStr for Operation {
    type Err = ReduceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SET" => Ok(Self::Set),
            "APPEND" => Ok(Self::Append),
            other => Err(ReduceError::MalformedState(format!(
                "unknown operation {other:?}"
            ))),
        }
    }
}

/// One update for a key: the new value tagged with its operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change<V> {
    /// Replace whatever is stored.
    Set(V),
    /// Append to whatever is stored.
    Append(V),
}

impl<V> Change<V> {
    /// The operation this change performs.
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Set(_) => Operation::Set,
            Self::Append(_) => Operation::Append,
        }
    }

    /// The carried value.
    pub fn into_value(self) -> V {
        match self {
            Self::Set(v) | Self::Append(v) => v,
        }
    }
}

impl Change<String> {
    /// Parse the legacy `"OPERATION value"` text form, e.g. `"APPEND val2"`.
    ///
    /// Everything after the first space is the value, so values may contain
    /// spaces.
    ///
    /// # Errors
    /// [`ReduceError::MalformedState`] if the separator or value is missing or
    /// the operation is not `SET`/`APPEND`.
    pub fn decode(encoded: &str) -> ReduceResult<Self> {
        let (op, value) = split_encoded(encoded)?;
        Ok(match op {
            Operation::Set => Self::Set(value.to_string()),
            Operation::Append => Self::Append(value.to_string()),
        })
    }
}

fn split_encoded(encoded: &str) -> ReduceResult<(Operation, &str)> {
    let Some((op, value)) = encoded.split_once(' ') else {
        return Err(ReduceError::MalformedState(format!(
            "missing separator in {encoded:?}"
        )));
    };
    if value.is_empty() {
        return Err(ReduceError::MalformedState(format!(
            "missing value in {encoded:?}"
        )));
    }
    Ok((op.parse()?, value))
}

/* ===================== Appendable ===================== */

/// Values that an `Append` change can extend.
pub trait Appendable {
    /// Append `next` after `self`.
    fn append(&mut self, next: Self);
}

impl Appendable for String {
    /// Joins with a comma: `"a"` + `"b"` → `"a,b"`.
    fn append(&mut self, next: Self) {
        self.push(',');
        self.push_str(&next);
    }
}

impl<T> Appendable for Vec<T> {
    fn append(&mut self, next: Self) {
        self.extend(next);
    }
}

/* ===================== MergeEntry ===================== */

/// The resolved value for one key together with the operation that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeEntry<V> {
    /// Current value.
    pub value: V,
    /// Operation of the most recent change.
    pub operation: Operation,
}

impl<V: Appendable> MergeEntry<V> {
    /// Apply `change` to the entry currently stored for a key (`None` if unseen).
    #[must_use]
    pub fn resolve(prior: Option<Self>, change: Change<V>) -> Self {
        match prior {
            Some(mut entry) => {
                entry.apply(change);
                entry
            }
            None => Self {
                operation: change.operation(),
                value: change.into_value(),
            },
        }
    }

    /// Apply `change` to this resolved entry in place.
    pub fn apply(&mut self, change: Change<V>) {
        match change {
            Change::Set(value) => {
                self.value = value;
                self.operation = Operation::Set;
            }
            Change::Append(value) => {
                self.value.append(value);
                self.operation = Operation::Append;
            }
        }
    }
}

impl MergeEntry<String> {
    /// Legacy text form, `"OPERATION value"`.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{} {}", self.operation, self.value)
    }

    /// Parse the legacy text form produced by [`encode`](Self::encode).
    ///
    /// # Errors
    /// [`ReduceError::MalformedState`] if the text cannot be split into a
    /// known operation and a value.
    pub fn decode(encoded: &str) -> ReduceResult<Self> {
        let (operation, value) = split_encoded(encoded)?;
        Ok(Self {
            value: value.to_string(),
            operation,
        })
    }
}

/* ===================== MergeState ===================== */

/// Per-key accumulator of [`MergeConflictResolver`].
///
/// `anchored` records whether the key saw a `Set` in this accumulator's
/// history. An unanchored state is a pure run of appends and can be appended
/// onto an earlier chunk's value when accumulators are combined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeState<V> {
    /// Resolved entry so far.
    pub entry: MergeEntry<V>,
    /// Whether a `Set` occurred in this history.
    pub anchored: bool,
}

impl<V: Appendable> MergeState<V> {
    fn start(change: Change<V>) -> Self {
        let anchored = change.operation() == Operation::Set;
        Self {
            entry: MergeEntry::resolve(None, change),
            anchored,
        }
    }

    fn apply(&mut self, change: Change<V>) {
        if change.operation() == Operation::Set {
            self.anchored = true;
        }
        self.entry.apply(change);
    }

    /// Fold a later chunk's state for the same key into this one.
    fn absorb(&mut self, later: Self) {
        if later.anchored {
            *self = later;
        } else {
            self.entry.value.append(later.entry.value);
            self.entry.operation = Operation::Append;
        }
    }
}

/* ===================== MergeConflictResolver ===================== */

/// Build a key→value map from `(key, Change)` pairs with Set/Append semantics.
///
/// - Input: `(K, Change<V>)`
/// - Accumulator: `HashMap<K, MergeState<V>>`
/// - Output: `HashMap<K, V>`
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeConflictResolver;

impl MergeConflictResolver {
    /// Resolve `(key, "OPERATION value")` pairs in the legacy text form.
    ///
    /// # Errors
    /// [`ReduceError::MalformedState`] for the first value that cannot be
    /// decoded; no partial map is returned.
    pub fn resolve_encoded<K, S, I>(&self, updates: I) -> ReduceResult<HashMap<K, String>>
    where
        K: Eq + Hash,
        S: AsRef<str>,
        I: IntoIterator<Item = (K, S)>,
    {
        let mut acc: HashMap<K, MergeState<String>> = HashMap::new();
        for (key, encoded) in updates {
            let change = Change::decode(encoded.as_ref())?;
            self.accumulate(&mut acc, (key, change));
        }
        self.finish(acc)
    }
}

impl<K, V> Reducer<(K, Change<V>), HashMap<K, MergeState<V>>, HashMap<K, V>>
    for MergeConflictResolver
where
    K: Eq + Hash,
    V: Appendable,
{
    fn initial(&self) -> HashMap<K, MergeState<V>> {
        HashMap::new()
    }

    fn accumulate(&self, acc: &mut HashMap<K, MergeState<V>>, (key, change): (K, Change<V>)) {
        trace!(operation = %change.operation(), "merge update");
        match acc.entry(key) {
            Entry::Occupied(mut e) => e.get_mut().apply(change),
            Entry::Vacant(e) => {
                e.insert(MergeState::start(change));
            }
        }
    }

    fn combine(&self, acc: &mut HashMap<K, MergeState<V>>, other: HashMap<K, MergeState<V>>) {
        for (key, later) in other {
            match acc.entry(key) {
                Entry::Occupied(mut e) => e.get_mut().absorb(later),
                Entry::Vacant(e) => {
                    e.insert(later);
                }
            }
        }
    }

    fn finish(&self, acc: HashMap<K, MergeState<V>>) -> ReduceResult<HashMap<K, V>> {
        debug!(keys = acc.len(), "merge resolved");
        Ok(acc
            .into_iter()
            .map(|(k, state)| (k, state.entry.value))
            .collect())
    }
}

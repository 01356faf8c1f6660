//! Execution of one composed reducer over a materialized input.
//!
//! - [`ExecMode::Sequential`] folds every element into a single accumulator.
//! - [`ExecMode::Parallel`] splits the input into contiguous chunks, reduces
//!   each chunk into its own accumulator on the rayon pool, and merges the
//!   accumulators in rounds of at most `fanout`.
//!
//! Merging always combines adjacent accumulators left to right, so the
//! input order is preserved. Order-sensitive reducers such as
//! [`MergeConflictResolver`](crate::MergeConflictResolver) therefore give the
//! same answer in both modes.
//!
//! ```no_run
//! use ironfold::{Median, Runner};
//!
//! let median = Runner::parallel(4).run(&Median, vec![3.0, 1.0, 2.0])?;
//! assert_eq!(median, 2.0);
//! # Ok::<_, anyhow::Error>(())
//! ```

use crate::reducer::{LiftableReducer, Reducer, accumulate_all};
use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How a [`Runner`] executes a reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecMode {
    /// Single accumulator, in-order, on the calling thread.
    Sequential,
    /// Chunked reduction on rayon.
    Parallel {
        /// Size of a dedicated thread pool; `None` uses the global pool.
        threads: Option<usize>,
        /// Number of chunks; `None` uses [`Runner::default_partitions`].
        partitions: Option<usize>,
    },
}

/// Runs reducers over in-memory inputs.
///
/// All fields can be loaded from JSON with [`Runner::from_json`]; missing
/// fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Runner {
    /// Execution mode.
    pub mode: ExecMode,
    /// Chunk count for parallel runs when the mode does not set one.
    pub default_partitions: usize,
    /// Maximum number of accumulators merged together per round; `None`
    /// merges all chunk accumulators in a single round.
    pub fanout: Option<usize>,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            mode: ExecMode::Parallel {
                threads: None,
                partitions: None,
            },
            default_partitions: 2 * num_cpus::get().max(2),
            fanout: None,
        }
    }
}

impl Runner {
    /// A runner that reduces on the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            mode: ExecMode::Sequential,
            ..Self::default()
        }
    }

    /// A parallel runner splitting the input into `partitions` chunks.
    #[must_use]
    pub fn parallel(partitions: usize) -> Self {
        Self {
            mode: ExecMode::Parallel {
                threads: None,
                partitions: Some(partitions),
            },
            ..Self::default()
        }
    }

    /// Set the merge fanout.
    #[must_use]
    pub const fn with_fanout(mut self, fanout: usize) -> Self {
        self.fanout = Some(fanout);
        self
    }

    /// Load a runner configuration from JSON.
    ///
    /// ```
    /// use ironfold::{ExecMode, Runner};
    ///
    /// let r = Runner::from_json(r#"{ "mode": "Sequential" }"#)?;
    /// assert_eq!(r.mode, ExecMode::Sequential);
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    ///
    /// # Errors
    /// Fails if `json` is not a valid runner configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid runner configuration")
    }

    /// Reduce `items` with `reducer` and return the finished result.
    ///
    /// # Errors
    /// Propagates the reducer's [`ReduceError`](crate::ReduceError) (which can
    /// be recovered with `downcast_ref`), or a thread-pool build failure.
    pub fn run<T, A, O, R>(&self, reducer: &R, items: Vec<T>) -> Result<O>
    where
        T: Send,
        A: Send,
        R: Reducer<T, A, O>,
    {
        self.execute(reducer, items, |chunk: Vec<T>| {
            accumulate_all::<T, A, O, R, _>(reducer, chunk)
        })
    }

    /// Like [`run`](Self::run), but builds each chunk's accumulator with
    /// [`LiftableReducer::build_from_slice`].
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_lifted<T, A, O, R>(&self, reducer: &R, items: Vec<T>) -> Result<O>
    where
        T: Send + Sync,
        A: Send,
        R: LiftableReducer<T, A, O>,
    {
        self.execute(reducer, items, |chunk: Vec<T>| reducer.build_from_slice(&chunk))
    }

    fn execute<T, A, O, R, L>(&self, reducer: &R, items: Vec<T>, local: L) -> Result<O>
    where
        T: Send,
        A: Send,
        R: Reducer<T, A, O>,
        L: Fn(Vec<T>) -> A + Send + Sync,
    {
        let acc = match self.mode {
            ExecMode::Sequential => {
                debug!(items = items.len(), "sequential reduce");
                local(items)
            }
            ExecMode::Parallel {
                threads,
                partitions,
            } => {
                let parts = partitions.unwrap_or(self.default_partitions);
                let fanout = self.fanout;
                let work = || reduce_chunks::<T, A, O, R, L>(reducer, items, parts, fanout, &local);
                match threads {
                    Some(t) => rayon::ThreadPoolBuilder::new()
                        .num_threads(t)
                        .build()
                        .context("failed to build rayon thread pool")?
                        .install(work),
                    None => work(),
                }
            }
        };
        Ok(reducer.finish(acc)?)
    }
}

/// Reduce `items` sequentially (convenience for `Runner::sequential().run`).
///
/// # Errors
/// Propagates the reducer's error.
pub fn reduce_seq<T, A, O, R>(reducer: &R, items: Vec<T>) -> Result<O>
where
    T: Send,
    A: Send,
    R: Reducer<T, A, O>,
{
    Runner::sequential().run(reducer, items)
}

/// Reduce `items` in parallel over `partitions` chunks.
///
/// # Errors
/// Propagates the reducer's error.
pub fn reduce_par<T, A, O, R>(reducer: &R, items: Vec<T>, partitions: usize) -> Result<O>
where
    T: Send,
    A: Send,
    R: Reducer<T, A, O>,
{
    Runner::parallel(partitions).run(reducer, items)
}

/// Split, reduce per chunk, and merge in order.
fn reduce_chunks<T, A, O, R, L>(
    reducer: &R,
    items: Vec<T>,
    partitions: usize,
    fanout: Option<usize>,
    local: &L,
) -> A
where
    T: Send,
    A: Send,
    R: Reducer<T, A, O>,
    L: Fn(Vec<T>) -> A + Send + Sync,
{
    let chunks = split_owned(items, partitions);
    debug!(chunks = chunks.len(), "parallel reduce");

    // indexed collect keeps chunk order
    let accs: Vec<A> = chunks.into_par_iter().map(local).collect();
    merge_in_order::<T, A, O, R>(reducer, accs, fanout)
}

/// Merge accumulators left to right, `fanout` at a time per round.
fn merge_in_order<T, A, O, R>(reducer: &R, mut accs: Vec<A>, fanout: Option<usize>) -> A
where
    A: Send,
    R: Reducer<T, A, O>,
{
    let width = fanout.unwrap_or(usize::MAX).max(2);
    let mut round = 0usize;
    while accs.len() > 1 {
        trace!(round, accumulators = accs.len(), width, "merge round");
        accs = group_adjacent(accs, width)
            .into_par_iter()
            .map(|group| {
                let mut it = group.into_iter();
                let mut acc = it.next().unwrap_or_else(|| reducer.initial());
                for next in it {
                    reducer.combine(&mut acc, next);
                }
                acc
            })
            .collect();
        round += 1;
    }
    accs.pop().unwrap_or_else(|| reducer.initial())
}

/// Split `items` into up to `n` contiguous owned chunks of near-equal size.
///
/// `n <= 1` or a single element yields one chunk; an empty input yields one
/// empty chunk so every run finishes exactly one accumulator.
fn split_owned<T>(items: Vec<T>, n: usize) -> Vec<Vec<T>> {
    let len = items.len();
    if n <= 1 || len <= 1 {
        return vec![items];
    }
    let chunk = len.div_ceil(n);
    group_adjacent(items, chunk)
}

/// Group `items` into consecutive runs of `size` (the last may be shorter).
fn group_adjacent<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    let size = size.max(1);
    let mut out = Vec::with_capacity(items.len().div_ceil(size));
    let mut it = items.into_iter().peekable();
    while it.peek().is_some() {
        out.push(it.by_ref().take(size).collect());
    }
    out
}

//! # Ironfold
//!
//! A **composable reduction engine** for Rust. Ironfold folds a finite sequence
//! of typed records into summary values (counts, statistics, medians, top-N
//! lists, conflict-resolved maps) optionally grouped by one or more keys, and
//! runs the same reduction sequentially or in parallel with identical results.
//!
//! ## Key Features
//!
//! - **One contract** - every reducer and combinator implements [`Reducer`]
//! - **Arbitrary nesting** - grouping, partitioning and teeing take any reducer as downstream
//! - **Built-in reducers** - Count, Sum, MinBy/MaxBy, Statistics, Median, WeightedAverage, TopN, and more
//! - **Conflict-resolving merges** - Set/Append key updates via [`MergeConflictResolver`]
//! - **Sequential and parallel execution** - chunked rayon execution with ordered merges
//!
//! ## Quick Start
//!
//! ```ignore
//! use ironfold::*;
//!
//! let words = vec!["the", "cat", "the", "hat"];
//! let freq = reduce(&grouping_by(|w: &&str| w.to_string(), Count), words)?;
//! assert_eq!(freq["the"], 2);
//! # anyhow::Result::<()>::Ok(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Reducer
//!
//! A [`Reducer<T, A, O>`] folds elements `T` into an accumulator `A` and
//! finishes it into an output `O`. Its `combine` must be associative so
//! independently built accumulators can be merged.
//!
//! ### Adapters
//!
//! The [`adapters`] reshape what a downstream reducer sees or returns:
//! - [`mapping`] - extract a value from each element
//! - [`filtering`] - drop elements failing a predicate
//! - [`flat_mapping`] - expand each element into many
//! - [`and_then`] - post-process the finished result
//!
//! ### Combinators
//!
//! The [`combinators`] route elements to downstream reducers:
//! - [`GroupingBy`] - one downstream per key; nest for multi-level summaries
//! - [`CompositeGroupingBy`] - flat `(outer, inner)` table with an outer index
//! - [`PartitioningBy`] - both sides of a predicate, always present
//! - [`Teeing`] - two reductions over one sequence, merged at the end
//!
//! ### Execution Modes
//!
//! - [`reduce`] - single pass over any iterator, on the calling thread
//! - [`Runner`] - sequential or parallel over a `Vec<T>`, configurable from JSON
//!
//! ## Examples
//!
//! ### Multi-Level Summary
//! ```ignore
//! use ironfold::*;
//!
//! // category -> year -> (total revenue, distinct products)
//! let summary = reduce(
//!     &grouping_by(
//!         |s: &Sale| s.category.clone(),
//!         grouping_by(
//!             |s: &Sale| s.year,
//!             teeing(
//!                 mapping(|s: Sale| s.revenue, Sum::<f64>::new()),
//!                 mapping(|s: Sale| s.product, DistinctCount::<String>::new()),
//!                 |revenue: f64, products: u64| (revenue, products),
//!             ),
//!         ),
//!     ),
//!     sales,
//! )?;
//! ```
//!
//! ### Parallel Median per Subject
//! ```ignore
//! use ironfold::*;
//!
//! let medians = Runner::parallel(8).run(
//!     &grouping_by(|g: &Grade| g.subject.clone(), mapping(|g: Grade| g.score, Median)),
//!     grades,
//! )?;
//! ```
//!
//! ## Module Overview
//!
//! - [`reducer`] - The `Reducer` contract and the `reduce` driver
//! - [`adapters`] - Mapping, filtering, flat-mapping and finishing adapters
//! - [`combiners`] - Built-in leaf reducers
//! - [`combinators`] - Grouping, partitioning and teeing
//! - [`merge`] - Set/Append key-collision resolution
//! - [`runner`] - Execution engine (sequential and parallel modes)
//! - [`testing`] - Assertion helpers for reducer tests

pub mod adapters;
pub mod combinators;
pub mod combiners;
pub mod error;
pub mod merge;
pub mod reducer;
pub mod runner;
pub mod testing;

// General re-exports
pub use adapters::{
    AndThen, Filtering, FlatMapping, Mapping, and_then, filtering, flat_mapping, mapping,
};
pub use combinators::{
    CompositeGroupingBy, CompositeGroups, GroupingBy, Partitioned, PartitioningBy, Teeing,
    grouping_by, partitioning_by, teeing,
};
pub use combiners::{
    AverageF64, Count, DistinctCount, Joining, MaxBy, Median, MinBy, Stats, Statistics, Sum,
    ToMap, ToSet, ToVec, TopN, WeightedAverage, WeightedAverageState,
};
pub use error::{ReduceError, ReduceResult};
pub use merge::{Appendable, Change, MergeConflictResolver, MergeEntry, MergeState, Operation};
pub use reducer::{LiftableReducer, Reducer, reduce};
pub use runner::{ExecMode, Runner, reduce_par, reduce_seq};

// Float wrapper for `TopN` keys and other `Ord`-requiring extractors
pub use ordered_float::OrderedFloat;

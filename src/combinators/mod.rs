//! Combinators: reducers built from other reducers.
//!
//! - [`GroupingBy`] -- one downstream accumulator per key; nest for multi-level.
//! - [`CompositeGroupingBy`] -- two-level grouping into a flat `(outer, inner)` table.
//! - [`PartitioningBy`] -- grouping by a predicate, both sides always present.
//! - [`Teeing`] -- two independent reductions merged at the end.
//!
//! Every combinator implements [`Reducer`](crate::Reducer) itself, so any of
//! them can be used as the downstream of another.

mod composite;
mod grouping;
mod partitioning;
mod teeing;

pub use composite::{CompositeGroupingBy, CompositeGroups};
pub use grouping::{GroupingBy, grouping_by};
pub use partitioning::{Partitioned, PartitioningBy, partitioning_by};
pub use teeing::{Teeing, teeing};

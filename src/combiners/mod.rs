//! Leaf reducers: the ones that actually look at element values.
//!
//! | Reducer | Accumulator | Output |
//! |---|---|---|
//! | [`Count`] | `u64` | `u64` |
//! | [`Sum<T>`] | `T` | `T` |
//! | [`MinBy`] / [`MaxBy`] | `Option<T>` | `Option<T>` |
//! | [`Statistics`] | [`Stats`] | [`Stats`] |
//! | [`AverageF64`] | [`Stats`] | `f64` |
//! | [`Median`] | `Vec<f64>` | `f64` |
//! | [`WeightedAverage`] | [`WeightedAverageState`] | `f64` |
//! | [`TopN`] | `Vec<T>` | `Vec<T>` |
//! | [`DistinctCount<T>`] | `HashSet<T>` | `u64` |
//! | [`ToSet<T>`] | `HashSet<T>` | `HashSet<T>` |
//! | [`ToVec`] | `Vec<T>` | `Vec<T>` |
//! | [`Joining`] | `Vec<String>` | `String` |
//! | [`ToMap`] | `HashMap<K, V>` | `HashMap<K, V>` |
//!
//! Only [`Median`] can fail (on empty input). Most of the numeric reducers
//! also implement [`LiftableReducer`](crate::LiftableReducer).
//!
//! ```ignore
//! use ironfold::*;
//!
//! let grades = vec![97.0, 77.0, 87.0, 47.0, 83.0];
//!
//! let stats = reduce(&Statistics, grades.clone())?;      // count=5, sum=391
//! let median = reduce(&Median, grades.clone())?;         // 83.0
//! let avg = reduce(&AverageF64, grades.clone())?;        // 78.2
//! let top = reduce(&TopN::new(2, |g: &f64| OrderedFloat(*g)), grades)?; // [97, 87]
//! ```

mod basic;
mod collect;
mod distinct;
mod median;
mod statistics;
mod topn;
mod weighted;

pub use basic::{Count, MaxBy, MinBy, Sum};
pub use collect::{Joining, ToMap, ToVec};
pub use distinct::{DistinctCount, ToSet};
pub use median::Median;
pub use statistics::{AverageF64, Stats, Statistics};
pub use topn::TopN;
pub use weighted::{WeightedAverage, WeightedAverageState};

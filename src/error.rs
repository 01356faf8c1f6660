//! Error types raised while finishing a reduction.

use thiserror::Error;

/// Convenience alias for `Result<T, ReduceError>`.
pub type ReduceResult<T> = Result<T, ReduceError>;

/// Failures a reducer can report from `finish`.
///
/// Reducers that have a natural default for empty input (statistics, averages)
/// never produce these; they exist for reducers whose result is undefined
/// without data, and for decoding the legacy text form of merge entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// The reducer needs at least one element to produce a result.
    #[error("empty input: {reducer} requires at least one element")]
    EmptyInput {
        /// Name of the reducer that rejected the empty input.
        reducer: &'static str,
    },

    /// An encoded `"OPERATION value"` merge entry could not be parsed.
    #[error("malformed merge state: {0}")]
    MalformedState(String),
}

impl ReduceError {
    pub(crate) const fn empty(reducer: &'static str) -> Self {
        Self::EmptyInput { reducer }
    }
}

//! Error types for schedule generation.
//!
//! Only configuration problems and exhausted retry budgets reach callers.
//! Routine dead-ends of the randomized search (a round slot with no
//! conflict-free candidate, an unsatisfiable matrix row) are absorbed by
//! the retry loops and never appear here.

use thiserror::Error;

/// Errors returned by roster construction and schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Malformed roster, home team set, or scheduler configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A round could not be built within its attempt budget and no
    /// further restarts were allowed.
    #[error(
        "schedule generation failed: round {round} not built after {attempts} attempts \
         ({restarts} restarts)"
    )]
    ScheduleGenerationFailed {
        /// Zero-based index of the round that could not be built.
        round: usize,
        /// Partition attempts spent on that round.
        attempts: usize,
        /// Whole-schedule restarts performed before giving up.
        restarts: usize,
    },

    /// The home/away matrix builder hit its configured restart ceiling.
    #[error("home/away matrix generation failed after {attempts} attempts")]
    MatrixGenerationFailed {
        /// Number of full matrix attempts made.
        attempts: usize,
    },
}

impl ScheduleError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

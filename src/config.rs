//! Scheduler configuration.
//!
//! Retry budgets for the randomized parts of schedule generation. The
//! defaults retry each round [`ROUND_ATTEMPTS`] times and restart the
//! whole season or matrix as often as needed.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Partition attempts per round before the season attempt is abandoned.
pub const ROUND_ATTEMPTS: usize = 10;

/// Retry policy for [`RoundRobinScheduler`](crate::scheduler::RoundRobinScheduler).
///
/// # Example
///
/// ```
/// use u_roundrobin::config::SchedulerConfig;
///
/// let config = SchedulerConfig::default().with_max_restarts(50);
/// assert_eq!(config.round_attempts, 10);
/// assert_eq!(config.max_restarts, Some(50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Partition attempts per round (must be at least 1).
    pub round_attempts: usize,
    /// Whole-schedule restart ceiling. `None` = unbounded.
    pub max_restarts: Option<usize>,
    /// Home/away matrix restart ceiling. `None` = unbounded.
    pub max_matrix_attempts: Option<usize>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            round_attempts: ROUND_ATTEMPTS,
            max_restarts: None,
            max_matrix_attempts: None,
        }
    }
}

impl SchedulerConfig {
    /// Sets the per-round attempt budget.
    pub fn with_round_attempts(mut self, attempts: usize) -> Self {
        self.round_attempts = attempts;
        self
    }

    /// Caps the number of whole-schedule restarts.
    pub fn with_max_restarts(mut self, restarts: usize) -> Self {
        self.max_restarts = Some(restarts);
        self
    }

    /// Caps the number of home/away matrix attempts.
    pub fn with_max_matrix_attempts(mut self, attempts: usize) -> Self {
        self.max_matrix_attempts = Some(attempts);
        self
    }

    /// Checks that the budgets allow at least one attempt.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.round_attempts == 0 {
            return Err(ScheduleError::invalid("round_attempts must be at least 1"));
        }
        if self.max_matrix_attempts == Some(0) {
            return Err(ScheduleError::invalid(
                "max_matrix_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}

//! Round-robin season scheduling.
//!
//! Generates seasons in which every pair of participants meets a fixed
//! number of times, with each round a conflict-free set of matches and
//! home/away duties split as evenly as the meeting count allows.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `Roster`, `Match`, `Round`,
//!   `Schedule`, `HomeAwayMatrix`
//! - **`scheduler`**: Match multiset construction, home/away matrix,
//!   greedy round partitioning, season orchestration, statistics
//! - **`validation`**: Structural checks for schedules and matrices
//! - **`config`**: Retry policy (`SchedulerConfig`)
//! - **`error`**: `ScheduleError`
//!
//! # Randomness
//!
//! Every randomized operation takes `&mut impl Rng`. Seed a generator to
//! reproduce a season exactly.
//!
//! # References
//!
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"
//! - de Werra (1981), "Scheduling in sports"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::ScheduleError;
pub use scheduler::RoundRobinScheduler;

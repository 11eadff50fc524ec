//! Round-robin generation and season statistics.
//!
//! # Pipeline
//!
//! 1. [`pairings`]: the multiset of matches a season must contain.
//! 2. [`matrix`]: balanced home/away orientation for odd meeting counts.
//! 3. [`round`]: randomized greedy extraction of one conflict-free round.
//! 4. [`RoundRobinScheduler`]: drives the above with retries and restarts.
//!
//! [`ScheduleStats`] summarizes a finished season.
//!
//! # References
//!
//! - Rasmussen & Trick (2008), "Round robin scheduling: a survey"

pub mod matrix;
pub mod pairings;
pub mod round;
mod round_robin;
mod stats;

pub use matrix::{build_matrix, designation_mask, select_home_teams};
pub use pairings::{count_matches, matrix_matches, symmetric_matches};
pub use round::generate_round;
pub use round_robin::RoundRobinScheduler;
pub use stats::{ParticipantStats, ScheduleStats};

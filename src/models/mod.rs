//! Round-robin domain models.
//!
//! Provides the data types shared by match generation, round
//! partitioning and validation. Every type is serde-serializable so
//! generated seasons can be stored or handed to other services.
//!
//! # Domain Mappings
//!
//! | u-roundrobin | Ice hockey | Chess | Esports |
//! |--------------|-----------|-------|---------|
//! | Participant | Team | Player | Roster |
//! | Match | Game | Board pairing | Series |
//! | Round | Matchday | Round | Week |
//! | Schedule | Regular season | Tournament | Split |

mod matchup;
mod matrix;
mod participant;
mod roster;
mod schedule;

pub use matchup::Match;
pub use matrix::HomeAwayMatrix;
pub use participant::Participant;
pub use roster::Roster;
pub use schedule::{Round, Schedule};

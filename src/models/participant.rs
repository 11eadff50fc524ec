//! Participant model.
//!
//! A participant is either a caller-supplied team token or the synthetic
//! bye slot used to pad odd rosters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A roster slot.
///
/// `T` is any caller-defined identifier (an integer, a name, a key into
/// the caller's own tables). The scheduler only needs equality, hashing
/// and cloning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Participant<T> {
    /// A real team.
    Team(T),
    /// Placeholder for an odd roster. Playing the bye means sitting out.
    Bye,
}

impl<T> Participant<T> {
    /// Whether this is the bye placeholder.
    #[inline]
    pub fn is_bye(&self) -> bool {
        matches!(self, Self::Bye)
    }

    /// The team token, or `None` for the bye.
    pub fn team(&self) -> Option<&T> {
        match self {
            Self::Team(team) => Some(team),
            Self::Bye => None,
        }
    }
}

impl<T> From<T> for Participant<T> {
    fn from(team: T) -> Self {
        Self::Team(team)
    }
}

impl<T: fmt::Display> fmt::Display for Participant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team(team) => write!(f, "{team}"),
            Self::Bye => f.write_str("bye"),
        }
    }
}

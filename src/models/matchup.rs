//! Match model.
//!
//! A match is an ordered (home, away) pair. `(A, B)` and `(B, A)` are
//! different matches.

use serde::{Deserialize, Serialize};

use super::Participant;

/// One game between two distinct participants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Match<T> {
    /// Hosting side.
    pub home: Participant<T>,
    /// Visiting side.
    pub away: Participant<T>,
}

impl<T: PartialEq> Match<T> {
    /// Creates a match. `home` and `away` must differ.
    pub fn new(home: Participant<T>, away: Participant<T>) -> Self {
        debug_assert!(home != away, "a participant cannot play itself");
        Self { home, away }
    }

    /// Whether the participant plays in this match, on either side.
    #[inline]
    pub fn involves(&self, participant: &Participant<T>) -> bool {
        self.home == *participant || self.away == *participant
    }

    /// Whether the two matches have a participant in common.
    #[inline]
    pub fn shares_participant(&self, other: &Self) -> bool {
        other.involves(&self.home) || other.involves(&self.away)
    }

    /// The other side of the match, if `participant` plays in it.
    pub fn opponent_of(&self, participant: &Participant<T>) -> Option<&Participant<T>> {
        if self.home == *participant {
            Some(&self.away)
        } else if self.away == *participant {
            Some(&self.home)
        } else {
            None
        }
    }
}

impl<T> Match<T> {
    /// Whether one side is the bye (the other side sits out).
    #[inline]
    pub fn is_bye(&self) -> bool {
        self.home.is_bye() || self.away.is_bye()
    }
}

impl<T> From<(T, T)> for Match<T> {
    fn from((home, away): (T, T)) -> Self {
        Self {
            home: Participant::Team(home),
            away: Participant::Team(away),
        }
    }
}

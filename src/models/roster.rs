//! Roster normalization.
//!
//! Turns a team count or an explicit team list into the canonical,
//! even-length roster the scheduler works on. Odd rosters get a trailing
//! [`Participant::Bye`], so the bye (when present) is always the last slot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::Participant;
use crate::error::ScheduleError;

/// An ordered, even-length list of participants.
///
/// Deserialization runs the same checks as construction, so a stored
/// roster can never come back odd, empty, duplicated or with the bye
/// anywhere but the last slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RosterRepr<T>",
    bound(deserialize = "T: Deserialize<'de> + Clone + Eq + Hash + Debug")
)]
pub struct Roster<T> {
    participants: Vec<Participant<T>>,
}

/// Wire form of [`Roster`], validated on the way in.
#[derive(Deserialize)]
struct RosterRepr<T> {
    participants: Vec<Participant<T>>,
}

impl<T: Clone + Eq + Hash + Debug> TryFrom<RosterRepr<T>> for Roster<T> {
    type Error = ScheduleError;

    fn try_from(repr: RosterRepr<T>) -> Result<Self, Self::Error> {
        let participants = repr.participants;
        if participants.is_empty() {
            return Err(ScheduleError::invalid("roster is empty"));
        }
        if participants.len() % 2 == 1 {
            return Err(ScheduleError::invalid(format!(
                "roster must have an even number of slots, got {}",
                participants.len()
            )));
        }

        let last = participants.len() - 1;
        let mut seen = HashSet::with_capacity(participants.len());
        for (idx, participant) in participants.iter().enumerate() {
            if participant.is_bye() && idx != last {
                return Err(ScheduleError::invalid(format!(
                    "bye must be the last roster slot, found at {idx}"
                )));
            }
            if !seen.insert(participant) {
                return Err(ScheduleError::invalid(format!(
                    "duplicate participant in roster: {participant:?}"
                )));
            }
        }
        Ok(Self { participants })
    }
}

impl Roster<u32> {
    /// Builds the roster `1..=count`, padded with a bye when `count` is odd.
    ///
    /// # Errors
    /// `InvalidConfiguration` when `count` is zero.
    pub fn from_count(count: u32) -> Result<Self, ScheduleError> {
        if count == 0 {
            return Err(ScheduleError::invalid("team count must be positive"));
        }
        Roster::new((1..=count).collect())
    }
}

impl<T: Clone + Eq + Hash + Debug> Roster<T> {
    /// Builds a roster from an explicit team list, keeping its order.
    ///
    /// # Errors
    /// `InvalidConfiguration` when the list is empty or contains duplicates.
    pub fn new(teams: Vec<T>) -> Result<Self, ScheduleError> {
        if teams.is_empty() {
            return Err(ScheduleError::invalid("roster is empty"));
        }

        let mut seen = HashSet::with_capacity(teams.len());
        for team in &teams {
            if !seen.insert(team) {
                return Err(ScheduleError::invalid(format!(
                    "duplicate team in roster: {team:?}"
                )));
            }
        }

        let mut participants: Vec<Participant<T>> =
            teams.into_iter().map(Participant::Team).collect();
        if participants.len() % 2 == 1 {
            participants.push(Participant::Bye);
        }
        Ok(Self { participants })
    }

    /// Index of a participant in roster order.
    pub fn position(&self, participant: &Participant<T>) -> Option<usize> {
        self.participants.iter().position(|p| p == participant)
    }

    /// Whether the participant is on this roster.
    pub fn contains(&self, participant: &Participant<T>) -> bool {
        self.position(participant).is_some()
    }
}

impl<T> Roster<T> {
    /// Number of slots, bye included. Always even.
    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always false: construction and deserialization reject empty
    /// rosters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// All slots in roster order.
    pub fn participants(&self) -> &[Participant<T>] {
        &self.participants
    }

    /// Participant at a roster index.
    pub fn get(&self, index: usize) -> Option<&Participant<T>> {
        self.participants.get(index)
    }

    /// Whether a bye was appended.
    pub fn has_bye(&self) -> bool {
        self.participants.last().is_some_and(Participant::is_bye)
    }

    /// Real participants only, in roster order.
    pub fn teams(&self) -> impl Iterator<Item = &Participant<T>> {
        self.participants.iter().filter(|p| !p.is_bye())
    }

    /// Iterates over all slots.
    pub fn iter(&self) -> std::slice::Iter<'_, Participant<T>> {
        self.participants.iter()
    }
}

impl<'a, T> IntoIterator for &'a Roster<T> {
    type Item = &'a Participant<T>;
    type IntoIter = std::slice::Iter<'a, Participant<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_even_count() {
        let roster = Roster::from_count(4).unwrap();
        assert_eq!(roster.len(), 4);
        assert!(!roster.has_bye());
        assert_eq!(roster.get(0), Some(&Participant::Team(1)));
        assert_eq!(roster.get(3), Some(&Participant::Team(4)));
    }

    #[test]
    fn test_from_odd_count_appends_bye() {
        let roster = Roster::from_count(3).unwrap();
        assert_eq!(
            roster.participants(),
            &[
                Participant::Team(1),
                Participant::Team(2),
                Participant::Team(3),
                Participant::Bye
            ]
        );
        assert!(roster.has_bye());
        assert_eq!(roster.teams().count(), 3);
    }

    #[test]
    fn test_single_team() {
        let roster = Roster::from_count(1).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.has_bye());
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(matches!(
            Roster::from_count(0),
            Err(ScheduleError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_explicit_list_keeps_order() {
        let roster = Roster::new(vec!["HIFK", "Tappara", "Ilves"]).unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.position(&Participant::Team("Tappara")), Some(1));
        assert_eq!(roster.position(&Participant::Bye), Some(3));
        assert!(roster.contains(&Participant::Team("Ilves")));
        assert!(!roster.contains(&Participant::Team("Lukko")));
    }

    #[test]
    fn test_empty_list_rejected() {
        let result = Roster::<String>::new(Vec::new());
        assert!(matches!(result, Err(ScheduleError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Roster::new(vec![1, 2, 2]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let roster = Roster::from_count(3).unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roster);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        for json in [
            r#"{"participants":[]}"#,
            r#"{"participants":[{"Team":1},{"Team":2},{"Team":3}]}"#,
            r#"{"participants":[{"Team":1},{"Team":1}]}"#,
            r#"{"participants":["Bye",{"Team":1},{"Team":2},{"Team":3}]}"#,
        ] {
            let result: Result<Roster<u32>, _> = serde_json::from_str(json);
            assert!(result.is_err(), "accepted {json}");
        }

        let ok: Roster<u32> =
            serde_json::from_str(r#"{"participants":[{"Team":1},"Bye"]}"#).unwrap();
        assert!(ok.has_bye());
        assert_eq!(ok.len(), 2);
    }
}

//! Round and season schedule models.
//!
//! A round is one time slot of simultaneous matches; a schedule is the
//! ordered list of rounds that makes up a season.

use serde::{Deserialize, Serialize};

use super::{Match, Participant};

/// Matches played in the same time slot. No participant appears twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round<T> {
    /// Matches in this round (order carries no meaning).
    pub matches: Vec<Match<T>>,
}

/// A complete season: rounds in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule<T> {
    /// Rounds in play order.
    pub rounds: Vec<Round<T>>,
}

impl<T> Round<T> {
    /// Wraps a list of matches.
    pub fn new(matches: Vec<Match<T>>) -> Self {
        Self { matches }
    }

    /// Number of matches.
    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the round has no matches.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterates over the matches.
    pub fn iter(&self) -> std::slice::Iter<'_, Match<T>> {
        self.matches.iter()
    }
}

impl<T: PartialEq> Round<T> {
    /// The match a participant plays in this round.
    pub fn match_for(&self, participant: &Participant<T>) -> Option<&Match<T>> {
        self.matches.iter().find(|m| m.involves(participant))
    }

    /// Whether the participant plays in this round.
    pub fn involves(&self, participant: &Participant<T>) -> bool {
        self.match_for(participant).is_some()
    }
}

impl<T> Schedule<T> {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Appends a round.
    pub fn add_round(&mut self, round: Round<T>) {
        self.rounds.push(round);
    }

    /// Number of rounds.
    #[inline]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the schedule has no rounds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Iterates over rounds in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, Round<T>> {
        self.rounds.iter()
    }

    /// All matches of the season, round by round.
    pub fn matches(&self) -> impl Iterator<Item = &Match<T>> {
        self.rounds.iter().flat_map(|r| r.matches.iter())
    }

    /// Total number of matches (bye matches included).
    pub fn match_total(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }
}

impl<T: PartialEq> Schedule<T> {
    /// A participant's fixtures as `(round index, match)`, in play order.
    pub fn fixtures_for<'a>(
        &'a self,
        participant: &'a Participant<T>,
    ) -> impl Iterator<Item = (usize, &'a Match<T>)> + 'a {
        self.rounds
            .iter()
            .enumerate()
            .filter_map(move |(idx, round)| round.match_for(participant).map(|m| (idx, m)))
    }
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Schedule<T> {
    type Item = &'a Round<T>;
    type IntoIter = std::slice::Iter<'a, Round<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule<u32> {
        let mut schedule = Schedule::new();
        schedule.add_round(Round::new(vec![(1, 2).into(), (3, 4).into()]));
        schedule.add_round(Round::new(vec![(4, 1).into(), (2, 3).into()]));
        schedule
    }

    #[test]
    fn test_round_lookup() {
        let round = Round::new(vec![(1, 2).into(), (3, 4).into()]);
        assert_eq!(round.len(), 2);
        assert_eq!(round.match_for(&Participant::Team(4)), Some(&Match::from((3, 4))));
        assert!(!round.involves(&Participant::Team(5)));
    }

    #[test]
    fn test_schedule_totals() {
        let schedule = sample_schedule();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.match_total(), 4);
        assert_eq!(schedule.matches().count(), 4);
    }

    #[test]
    fn test_fixtures_for() {
        let schedule = sample_schedule();
        let team = Participant::Team(1);
        let fixtures: Vec<_> = schedule.fixtures_for(&team).collect();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0], (0, &Match::from((1, 2))));
        assert_eq!(fixtures[1], (1, &Match::from((4, 1))));
    }

    #[test]
    fn test_empty_schedule() {
        let schedule: Schedule<u32> = Schedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.match_total(), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let schedule = sample_schedule();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: Schedule<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}

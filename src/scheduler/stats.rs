//! Season statistics.
//!
//! Tallies, per participant, how a generated schedule splits its games.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Home | Real games hosted |
//! | Away | Real games visited |
//! | Byes | Rounds spent paired with the bye |
//! | Imbalance | \|home − away\| |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{Participant, Roster, Schedule};

/// Game counts for one participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// Real games hosted.
    pub home: usize,
    /// Real games visited.
    pub away: usize,
    /// Rounds sat out.
    pub byes: usize,
}

impl ParticipantStats {
    /// Real games played.
    #[inline]
    pub fn games(&self) -> usize {
        self.home + self.away
    }

    /// Home minus away.
    #[inline]
    pub fn home_away_difference(&self) -> i64 {
        self.home as i64 - self.away as i64
    }
}

/// Per-participant tallies for a schedule.
#[derive(Debug, Clone)]
pub struct ScheduleStats<T> {
    /// Tallies keyed by real participant.
    pub by_participant: HashMap<Participant<T>, ParticipantStats>,
    /// Real games in the season (bye matches excluded).
    pub total_games: usize,
}

impl<T: Clone + Eq + Hash> ScheduleStats<T> {
    /// Counts games for every real participant on the roster.
    ///
    /// Matches against the bye count as a bye for the real side, whichever
    /// side of the match it sits on.
    pub fn calculate(schedule: &Schedule<T>, roster: &Roster<T>) -> Self {
        let mut by_participant: HashMap<Participant<T>, ParticipantStats> = roster
            .teams()
            .map(|p| (p.clone(), ParticipantStats::default()))
            .collect();
        let mut total_games = 0;

        for m in schedule.matches() {
            if m.is_bye() {
                let sitting = if m.home.is_bye() { &m.away } else { &m.home };
                if let Some(stats) = by_participant.get_mut(sitting) {
                    stats.byes += 1;
                }
                continue;
            }

            total_games += 1;
            if let Some(stats) = by_participant.get_mut(&m.home) {
                stats.home += 1;
            }
            if let Some(stats) = by_participant.get_mut(&m.away) {
                stats.away += 1;
            }
        }

        Self {
            by_participant,
            total_games,
        }
    }

    /// Tallies for one participant.
    pub fn get(&self, participant: &Participant<T>) -> Option<&ParticipantStats> {
        self.by_participant.get(participant)
    }

    /// Largest |home − away| over all participants.
    pub fn max_home_away_imbalance(&self) -> u64 {
        self.by_participant
            .values()
            .map(|s| s.home_away_difference().unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Whether every participant is within `max_imbalance` of even.
    pub fn is_balanced(&self, max_imbalance: u64) -> bool {
        self.max_home_away_imbalance() <= max_imbalance
    }
}

//! Required match multiset for a season.
//!
//! A season with `meetings = 2k` is `k` copies of every ordered pair. An
//! odd meeting count adds one more block with a single match per
//! unordered pair, oriented by a [`HomeAwayMatrix`].
//!
//! Bye pairs are generated like any other pair: the match with the bye
//! fills the sitting-out participant's round slot.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{HomeAwayMatrix, Match, Roster};

/// Every ordered pair of distinct participants, `copies` times, in roster
/// order.
pub fn symmetric_matches<T: Clone + PartialEq>(roster: &Roster<T>, copies: usize) -> Vec<Match<T>> {
    let n = roster.len();
    let mut block = Vec::with_capacity(n * (n - 1));
    for home in roster {
        for away in roster {
            if home != away {
                block.push(Match::new(home.clone(), away.clone()));
            }
        }
    }

    let mut matches = Vec::with_capacity(block.len() * copies);
    for _ in 0..copies {
        matches.extend(block.iter().cloned());
    }
    matches
}

/// One match per unordered pair, hosted by whichever side the matrix
/// marks as home.
pub fn matrix_matches<T: Clone + PartialEq>(
    roster: &Roster<T>,
    matrix: &HomeAwayMatrix,
) -> Vec<Match<T>> {
    let participants = roster.participants();
    let n = participants.len();
    let mut matches = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let (home, away) = if matrix.hosts(i, j) { (i, j) } else { (j, i) };
            matches.push(Match::new(
                participants[home].clone(),
                participants[away].clone(),
            ));
        }
    }
    matches
}

/// Counts how often each ordered pair occurs in a match list.
pub fn count_matches<T: Eq + Hash>(
    matches: impl IntoIterator<Item = Match<T>>,
) -> HashMap<Match<T>, usize> {
    let mut counts = HashMap::new();
    for m in matches {
        *counts.entry(m).or_insert(0) += 1;
    }
    counts
}

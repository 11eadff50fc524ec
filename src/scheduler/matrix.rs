//! Balanced home/away matrix construction.
//!
//! # Algorithm
//!
//! 1. Designate exactly N/2 roster slots as home teams (caller-supplied or
//!    sampled from the real participants).
//! 2. Walk the rows in roster order, skipping the last. Row `i` needs
//!    `N/2` home games if designated, `N/2 - 1` otherwise, minus the home
//!    games it already received from earlier rows.
//! 3. The bye column is fixed: a row hosts the bye iff it is designated.
//!    The remaining home games are sampled uniformly from the unassigned
//!    columns `j > i`, and every column `j > i` is filled with its mirror.
//! 4. When a row cannot be satisfied the grid is discarded and rebuilt
//!    from row 0 with the same designation.
//!
//! Each row has an odd number of opponents, so a completed grid leaves
//! every slot exactly one game off even, with designated slots on the
//! home side. The last row needs no sampling: the targets sum to the
//! number of pairs, so symmetry completes it exactly.

use rand::prelude::IndexedRandom;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ScheduleError;
use crate::models::{HomeAwayMatrix, Participant, Roster};

/// A row whose home quota cannot be met from its free columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SamplingExhausted {
    row: usize,
}

/// Samples `|roster| / 2` real participants as home teams.
///
/// The bye is never sampled, so with an odd team count every designated
/// team hosts its bye game.
pub fn select_home_teams<T, R>(roster: &Roster<T>, rng: &mut R) -> Vec<Participant<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let teams: Vec<&Participant<T>> = roster.teams().collect();
    teams
        .choose_multiple(rng, roster.len() / 2)
        .map(|p| (*p).clone())
        .collect()
}

/// Maps a home team set onto roster indices.
///
/// # Errors
/// `InvalidConfiguration` unless the set holds exactly `|roster| / 2`
/// distinct roster members.
pub fn designation_mask<T>(
    roster: &Roster<T>,
    home_teams: &[Participant<T>],
) -> Result<Vec<bool>, ScheduleError>
where
    T: Clone + Eq + Hash + Debug,
{
    let expected = roster.len() / 2;
    if home_teams.len() != expected {
        return Err(ScheduleError::invalid(format!(
            "home team set must contain {expected} participants, got {}",
            home_teams.len()
        )));
    }

    let mut seen = HashSet::with_capacity(home_teams.len());
    let mut mask = vec![false; roster.len()];
    for participant in home_teams {
        if !seen.insert(participant) {
            return Err(ScheduleError::invalid(format!(
                "duplicate home team: {participant:?}"
            )));
        }
        match roster.position(participant) {
            Some(idx) => mask[idx] = true,
            None => {
                return Err(ScheduleError::invalid(format!(
                    "home team not on roster: {participant:?}"
                )))
            }
        }
    }
    Ok(mask)
}

/// Builds a balanced matrix for the given home team designation.
///
/// Restarts until a grid completes. With `max_attempts` set, gives up
/// after that many full attempts.
///
/// # Errors
/// - `InvalidConfiguration` for a malformed home team set.
/// - `MatrixGenerationFailed` when `max_attempts` is exhausted.
pub fn build_matrix<T, R>(
    roster: &Roster<T>,
    home_teams: &[Participant<T>],
    max_attempts: Option<usize>,
    rng: &mut R,
) -> Result<HomeAwayMatrix, ScheduleError>
where
    T: Clone + Eq + Hash + Debug,
    R: Rng + ?Sized,
{
    let designated = designation_mask(roster, home_teams)?;
    let bye = roster.has_bye().then(|| roster.len() - 1);

    let mut attempts = 0;
    loop {
        attempts += 1;
        match fill_matrix(&designated, bye, rng) {
            Ok(matrix) => return Ok(matrix),
            Err(SamplingExhausted { row }) => {
                log::trace!("matrix row {row} unsatisfiable on attempt {attempts}, restarting");
                if max_attempts.is_some_and(|max| attempts >= max) {
                    return Err(ScheduleError::MatrixGenerationFailed { attempts });
                }
            }
        }
    }
}

/// One pass over the rows. Draws exactly one index sample per row.
fn fill_matrix<R: Rng + ?Sized>(
    designated: &[bool],
    bye: Option<usize>,
    rng: &mut R,
) -> Result<HomeAwayMatrix, SamplingExhausted> {
    let n = designated.len();
    let mut matrix = HomeAwayMatrix::new(n);

    for i in 0..n.saturating_sub(1) {
        let target = if designated[i] { n / 2 } else { n / 2 - 1 };
        let mut needed = target as isize - matrix.home_count(i) as isize;

        if let Some(b) = bye {
            matrix.set(i, b, designated[i]);
            if designated[i] {
                needed -= 1;
            }
        }

        let free: Vec<usize> = (i + 1..n).filter(|&j| Some(j) != bye).collect();
        if needed < 0 || needed as usize > free.len() {
            return Err(SamplingExhausted { row: i });
        }

        let mut hosts = vec![false; free.len()];
        for k in index::sample(rng, free.len(), needed as usize).iter() {
            hosts[k] = true;
        }
        for (k, &j) in free.iter().enumerate() {
            matrix.set(i, j, hosts[k]);
        }
    }

    Ok(matrix)
}

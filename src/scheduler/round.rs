//! Randomized greedy round partitioning.
//!
//! # Algorithm
//!
//! 1. Shuffle the pool.
//! 2. Seed the round with the first pooled match.
//! 3. For each remaining slot, scan the rest of the pool front to back.
//!    Candidates that share a participant with a placed match are dropped
//!    for this attempt; the first one that does not is placed.
//! 4. If the scan runs dry before the round is full, the attempt fails and
//!    the pool keeps every match. Otherwise the placed matches leave the
//!    pool.
//!
//! Removals are committed only on success, so a failed attempt never
//! loses or duplicates a match.
//!
//! # Complexity
//! O(p · m) per attempt, p = pool size, m = matches per round.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use crate::models::{Match, Round};

/// Outcome of scanning the candidate queue for one round slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CandidateScan {
    /// Pool index of the first candidate free of conflicts.
    Found(usize),
    /// No candidate left for this slot.
    Exhausted,
}

/// Pops candidates until one shares no participant with the placed
/// matches. Rejected candidates stay consumed.
pub(crate) fn find_unique_match<T: PartialEq>(
    pool: &[Match<T>],
    placed: &[usize],
    candidates: &mut VecDeque<usize>,
) -> CandidateScan {
    while let Some(idx) = candidates.pop_front() {
        let candidate = &pool[idx];
        if placed
            .iter()
            .all(|&p| !pool[p].shares_participant(candidate))
        {
            return CandidateScan::Found(idx);
        }
    }
    CandidateScan::Exhausted
}

/// Makes one attempt at extracting a conflict-free round of
/// `match_count` matches from `pool`.
///
/// On success the round's matches are removed from the pool. On failure
/// `None` is returned and the pool holds the same multiset as before
/// (in shuffled order).
pub fn generate_round<T, R>(
    pool: &mut Vec<Match<T>>,
    match_count: usize,
    rng: &mut R,
) -> Option<Round<T>>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    pool.shuffle(rng);
    if pool.is_empty() || match_count == 0 {
        return None;
    }

    let mut placed: Vec<usize> = Vec::with_capacity(match_count);
    placed.push(0);
    let mut candidates: VecDeque<usize> = (1..pool.len()).collect();

    while placed.len() < match_count {
        match find_unique_match(pool, &placed, &mut candidates) {
            CandidateScan::Found(idx) => placed.push(idx),
            CandidateScan::Exhausted => return None,
        }
    }

    let round = Round::new(placed.iter().map(|&idx| pool[idx].clone()).collect());

    let mut taken = vec![false; pool.len()];
    for &idx in &placed {
        taken[idx] = true;
    }
    let mut position = 0;
    pool.retain(|_| {
        let keep = !taken[position];
        position += 1;
        keep
    });

    Some(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Participant, Roster};
    use crate::scheduler::pairings::{count_matches, symmetric_matches};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn assert_conflict_free(round: &Round<u32>) {
        for (i, a) in round.matches.iter().enumerate() {
            for b in &round.matches[i + 1..] {
                assert!(!a.shares_participant(b), "{a:?} conflicts with {b:?}");
            }
        }
    }

    #[test]
    fn test_find_unique_match() {
        let pool: Vec<Match<u32>> =
            vec![(1, 2).into(), (2, 3).into(), (1, 4).into(), (3, 4).into()];
        let mut candidates: VecDeque<usize> = (1..4).collect();
        assert_eq!(
            find_unique_match(&pool, &[0], &mut candidates),
            CandidateScan::Found(3)
        );
        // Rejected candidates were consumed.
        assert!(candidates.is_empty());
        assert_eq!(
            find_unique_match(&pool, &[0], &mut candidates),
            CandidateScan::Exhausted
        );
    }

    #[test]
    fn test_round_from_full_pool() {
        let roster = Roster::from_count(6).unwrap();
        let mut pool = symmetric_matches(&roster, 1);
        let mut rng = SmallRng::seed_from_u64(42);

        let round = loop {
            if let Some(round) = generate_round(&mut pool, 3, &mut rng) {
                break round;
            }
        };
        assert_eq!(round.len(), 3);
        assert_conflict_free(&round);
        assert_eq!(pool.len(), 30 - 3);
        for team in roster.iter() {
            assert!(round.involves(team));
        }
    }

    #[test]
    fn test_impossible_round_restores_pool() {
        // Every match involves team 1: no two can share a round.
        let mut pool: Vec<Match<u32>> =
            vec![(1, 2).into(), (1, 3).into(), (1, 4).into(), (2, 1).into()];
        let before = count_matches(pool.clone());
        let mut rng = SmallRng::seed_from_u64(1);

        for _ in 0..10 {
            assert!(generate_round(&mut pool, 2, &mut rng).is_none());
            assert_eq!(count_matches(pool.clone()), before);
        }
    }

    #[test]
    fn test_empty_pool() {
        let mut pool: Vec<Match<u32>> = Vec::new();
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(generate_round(&mut pool, 2, &mut rng).is_none());
    }

    #[test]
    fn test_drains_single_round_pool() {
        let mut pool: Vec<Match<u32>> = vec![(1, 2).into(), (3, 4).into()];
        let mut rng = SmallRng::seed_from_u64(3);
        let round = generate_round(&mut pool, 2, &mut rng).unwrap();
        assert!(pool.is_empty());
        assert_eq!(round.len(), 2);
    }

    #[test]
    fn test_bye_match_fills_slot() {
        let mut pool = vec![
            Match::new(Participant::Team(1), Participant::Bye),
            Match::new(Participant::Team(2), Participant::Team(3)),
        ];
        let mut rng = SmallRng::seed_from_u64(8);
        let round = generate_round(&mut pool, 2, &mut rng).unwrap();
        assert_eq!(round.matches.iter().filter(|m| m.is_bye()).count(), 1);
    }
}

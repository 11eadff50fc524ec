//! Round-robin season scheduler.
//!
//! # Algorithm
//!
//! 1. Build the required match multiset (symmetric blocks, plus one
//!    matrix-oriented block when the meeting count is odd).
//! 2. Extract rounds one at a time with the randomized greedy partitioner,
//!    giving each round `round_attempts` tries.
//! 3. If a round exhausts its tries, discard the whole season and start
//!    over from step 1 with fresh random draws, unless `try_once` is set
//!    or the restart ceiling is reached.
//!
//! Restarts are an explicit loop; there is no recursion.

use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

use super::matrix::{build_matrix, designation_mask, select_home_teams};
use super::pairings::{matrix_matches, symmetric_matches};
use super::round::generate_round;
use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::models::{HomeAwayMatrix, Match, Participant, Roster, Round, Schedule};
use crate::validation::validate_schedule;

/// Result of one pass over the season.
enum SeasonAttempt<T> {
    Complete(Schedule<T>),
    Exhausted { round: usize },
}

/// Generates round-robin schedules for a fixed roster and meeting count.
///
/// Every pair of participants meets `meetings` times. With an even count
/// each side hosts half the meetings; with an odd count the extra meeting
/// is oriented by a balanced home/away matrix.
///
/// Randomness is always passed in, so a seeded generator reproduces a
/// season exactly.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use u_roundrobin::scheduler::RoundRobinScheduler;
///
/// let mut scheduler = RoundRobinScheduler::from_count(4, 2).unwrap();
/// assert_eq!(scheduler.match_count(), 2);
/// assert_eq!(scheduler.round_count(), 6);
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let schedule = scheduler.generate_schedule(false, None, &mut rng).unwrap();
/// assert_eq!(schedule.len(), 6);
/// assert!(schedule.iter().all(|round| round.len() == 2));
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler<T> {
    roster: Roster<T>,
    meetings: u32,
    config: SchedulerConfig,
    home_teams: Vec<Participant<T>>,
}

impl RoundRobinScheduler<u32> {
    /// Scheduler for teams `1..=count`.
    ///
    /// # Errors
    /// `InvalidConfiguration` when `count` is zero.
    pub fn from_count(count: u32, meetings: u32) -> Result<Self, ScheduleError> {
        Ok(Self::new(Roster::from_count(count)?, meetings))
    }
}

impl<T> RoundRobinScheduler<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Creates a scheduler with the default retry policy.
    pub fn new(roster: Roster<T>, meetings: u32) -> Self {
        Self {
            roster,
            meetings,
            config: SchedulerConfig::default(),
            home_teams: Vec::new(),
        }
    }

    /// Scheduler for an explicit team list.
    ///
    /// # Errors
    /// `InvalidConfiguration` when the list is empty or has duplicates.
    pub fn from_teams(teams: Vec<T>, meetings: u32) -> Result<Self, ScheduleError> {
        Ok(Self::new(Roster::new(teams)?, meetings))
    }

    /// Single round-robin: every pair meets once.
    pub fn single(roster: Roster<T>) -> Self {
        Self::new(roster, 1)
    }

    /// Double round-robin: every pair meets twice, once at each venue.
    pub fn double(roster: Roster<T>) -> Self {
        Self::new(roster, 2)
    }

    /// Triple round-robin.
    pub fn triple(roster: Roster<T>) -> Self {
        Self::new(roster, 3)
    }

    /// Quadruple round-robin.
    pub fn quadruple(roster: Roster<T>) -> Self {
        Self::new(roster, 4)
    }

    /// Replaces the retry policy.
    ///
    /// # Errors
    /// `InvalidConfiguration` if the config allows no attempts.
    pub fn with_config(mut self, config: SchedulerConfig) -> Result<Self, ScheduleError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The normalized roster.
    pub fn roster(&self) -> &Roster<T> {
        &self.roster
    }

    /// Meetings per pair.
    pub fn meetings(&self) -> u32 {
        self.meetings
    }

    /// Active retry policy.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Matches per round.
    #[inline]
    pub fn match_count(&self) -> usize {
        self.roster.len() / 2
    }

    /// Rounds per season.
    #[inline]
    pub fn round_count(&self) -> usize {
        (self.roster.len() - 1) * self.meetings as usize
    }

    /// Home teams of the most recent matrix. Empty until one is built.
    pub fn home_teams(&self) -> &[Participant<T>] {
        &self.home_teams
    }

    /// Builds a balanced home/away matrix.
    ///
    /// Uses `home_teams` when given; otherwise samples a fresh set. The
    /// set in use is cached and readable through [`home_teams`](Self::home_teams).
    ///
    /// # Errors
    /// - `InvalidConfiguration` for a malformed home team set.
    /// - `MatrixGenerationFailed` when `max_matrix_attempts` is exhausted.
    pub fn generate_matrix<R: Rng + ?Sized>(
        &mut self,
        home_teams: Option<&[Participant<T>]>,
        rng: &mut R,
    ) -> Result<HomeAwayMatrix, ScheduleError> {
        let home = match home_teams {
            Some(home) => home.to_vec(),
            None => select_home_teams(&self.roster, rng),
        };
        designation_mask(&self.roster, &home)?;
        self.home_teams = home;
        build_matrix(
            &self.roster,
            &self.home_teams,
            self.config.max_matrix_attempts,
            rng,
        )
    }

    /// Builds the full multiset of matches the season must contain.
    ///
    /// `meetings / 2` copies of every ordered pair, plus one
    /// matrix-oriented match per pair when `meetings` is odd. Further odd
    /// increments never add a second matrix block.
    ///
    /// # Errors
    /// Whatever [`generate_matrix`](Self::generate_matrix) reports.
    pub fn generate_matches<R: Rng + ?Sized>(
        &mut self,
        home_teams: Option<&[Participant<T>]>,
        rng: &mut R,
    ) -> Result<Vec<Match<T>>, ScheduleError> {
        let evens = (self.meetings / 2) as usize;
        let mut matches = symmetric_matches(&self.roster, evens);
        if self.meetings % 2 == 1 {
            let matrix = self.generate_matrix(home_teams, rng)?;
            matches.extend(matrix_matches(&self.roster, &matrix));
        }
        Ok(matches)
    }

    /// One attempt at extracting a round from `pool`.
    ///
    /// See [`round::generate_round`](super::round::generate_round).
    pub fn generate_round<R: Rng + ?Sized>(
        &self,
        pool: &mut Vec<Match<T>>,
        rng: &mut R,
    ) -> Option<Round<T>> {
        generate_round(pool, self.match_count(), rng)
    }

    /// Generates a complete season.
    ///
    /// Restarts from scratch whenever a round cannot be built within
    /// `round_attempts` tries. Pinned `home_teams` are reused on every
    /// restart; otherwise each restart draws a new set.
    ///
    /// # Errors
    /// - `ScheduleGenerationFailed` when a round is exhausted and either
    ///   `try_once` is set or `max_restarts` has been reached.
    /// - `InvalidConfiguration` / `MatrixGenerationFailed` from matrix
    ///   generation.
    pub fn generate_schedule<R: Rng + ?Sized>(
        &mut self,
        try_once: bool,
        home_teams: Option<&[Participant<T>]>,
        rng: &mut R,
    ) -> Result<Schedule<T>, ScheduleError> {
        let mut restarts = 0;
        loop {
            match self.attempt_season(home_teams, rng)? {
                SeasonAttempt::Complete(schedule) => {
                    log::info!(
                        "generated {} rounds for {} participants ({} restarts)",
                        schedule.len(),
                        self.roster.len(),
                        restarts
                    );
                    return Ok(schedule);
                }
                SeasonAttempt::Exhausted { round } => {
                    let ceiling = self.config.max_restarts.is_some_and(|max| restarts >= max);
                    if try_once || ceiling {
                        return Err(ScheduleError::ScheduleGenerationFailed {
                            round,
                            attempts: self.config.round_attempts,
                            restarts,
                        });
                    }
                    restarts += 1;
                    log::debug!(
                        "round {round} exhausted {} attempts, restarting season ({restarts})",
                        self.config.round_attempts
                    );
                }
            }
        }
    }

    fn attempt_season<R: Rng + ?Sized>(
        &mut self,
        home_teams: Option<&[Participant<T>]>,
        rng: &mut R,
    ) -> Result<SeasonAttempt<T>, ScheduleError> {
        let mut pool = self.generate_matches(home_teams, rng)?;
        let required = cfg!(debug_assertions).then(|| pool.clone());
        let match_count = self.match_count();
        let mut schedule = Schedule::new();

        for round in 0..self.round_count() {
            let mut built = None;
            for attempt in 1..=self.config.round_attempts {
                built = generate_round(&mut pool, match_count, rng);
                if built.is_some() {
                    break;
                }
                log::trace!("round {round}: attempt {attempt} found no conflict-free set");
            }
            match built {
                Some(r) => schedule.add_round(r),
                None => return Ok(SeasonAttempt::Exhausted { round }),
            }
        }

        if let Some(required) = required {
            debug_assert!(
                validate_schedule(&schedule, &self.roster, &required, self.round_count()).is_ok(),
                "generated schedule violates round-robin invariants"
            );
        }
        Ok(SeasonAttempt::Complete(schedule))
    }
}

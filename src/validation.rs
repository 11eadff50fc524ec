//! Structural validation for generated seasons.
//!
//! Checks a schedule or home/away matrix against the invariants every
//! generated season must satisfy. Detects:
//! - Wrong season length or round size
//! - Participants playing twice in a round, or missing from it
//! - A season whose matches differ from the required multiset
//! - Asymmetric, incomplete or unbalanced home/away matrices
//! - Home designations not reflected in the matrix

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::models::{HomeAwayMatrix, Match, Participant, Roster, Schedule};
use crate::scheduler::count_matches;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Schedule has the wrong number of rounds.
    ScheduleLength,
    /// A round has the wrong number of matches.
    RoundSize,
    /// A participant plays twice in one round.
    RepeatedParticipant,
    /// A participant has no match in a round.
    MissingParticipant,
    /// A match references a participant not on the roster.
    UnknownParticipant,
    /// The season's matches differ from the required multiset.
    MatchSetMismatch,
    /// Matrix dimensions differ from the roster.
    MatrixSize,
    /// A pair has no home/away assignment, or the diagonal is assigned.
    MatrixUnassigned,
    /// `cell[i][j]` equals `cell[j][i]`.
    MatrixAsymmetric,
    /// A row is not exactly one game off even.
    Unbalanced,
    /// A row's home/away excess contradicts its designation.
    DesignationViolated,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generated schedule.
///
/// Checks:
/// 1. The schedule has `round_count` rounds
/// 2. Every round has `|roster| / 2` matches
/// 3. No participant appears twice in a round
/// 4. Every roster participant appears in every round
/// 5. Every match uses roster participants only
/// 6. The season's matches equal `expected` as a multiset
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule<T>(
    schedule: &Schedule<T>,
    roster: &Roster<T>,
    expected: &[Match<T>],
    round_count: usize,
) -> ValidationResult
where
    T: Clone + Eq + Hash + Debug,
{
    let mut errors = Vec::new();
    let match_count = roster.len() / 2;

    if schedule.len() != round_count {
        errors.push(ValidationError::new(
            ValidationErrorKind::ScheduleLength,
            format!("Expected {round_count} rounds, found {}", schedule.len()),
        ));
    }

    for (idx, round) in schedule.iter().enumerate() {
        if round.len() != match_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::RoundSize,
                format!(
                    "Round {idx} has {} matches, expected {match_count}",
                    round.len()
                ),
            ));
        }

        let mut seen: HashSet<&Participant<T>> = HashSet::new();
        for m in round.iter() {
            for side in [&m.home, &m.away] {
                if !roster.contains(side) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownParticipant,
                        format!("Round {idx} references unknown participant {side:?}"),
                    ));
                }
                if !seen.insert(side) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::RepeatedParticipant,
                        format!("Participant {side:?} plays twice in round {idx}"),
                    ));
                }
            }
        }

        for participant in roster {
            if !seen.contains(participant) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingParticipant,
                    format!("Participant {participant:?} has no match in round {idx}"),
                ));
            }
        }
    }

    let scheduled = count_matches(schedule.matches().cloned());
    let required = count_matches(expected.iter().cloned());
    if scheduled != required {
        let mut diff: Vec<String> = Vec::new();
        for (m, &want) in &required {
            let got = scheduled.get(m).copied().unwrap_or(0);
            if got != want {
                diff.push(format!("{m:?}: scheduled {got}, required {want}"));
            }
        }
        for (m, &got) in &scheduled {
            if !required.contains_key(m) {
                diff.push(format!("{m:?}: scheduled {got}, required 0"));
            }
        }
        errors.push(ValidationError::new(
            ValidationErrorKind::MatchSetMismatch,
            format!("Match multiset differs: {}", diff.join("; ")),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a home/away matrix against its roster and home designation.
///
/// Checks:
/// 1. The matrix is `|roster|` × `|roster|`
/// 2. Every off-diagonal cell is assigned and the diagonal is not
/// 3. `cell[i][j] != cell[j][i]`
/// 4. Every row is exactly one game off even
/// 5. Designated rows are home-heavy, the rest away-heavy
/// 6. A real participant hosts the bye iff it is designated
///
/// Checks 5 and 6 are skipped when `home_teams` is empty.
pub fn validate_matrix<T>(
    matrix: &HomeAwayMatrix,
    roster: &Roster<T>,
    home_teams: &[Participant<T>],
) -> ValidationResult
where
    T: Clone + Eq + Hash + Debug,
{
    let n = roster.len();
    if matrix.size() != n {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::MatrixSize,
            format!("Matrix covers {} slots, roster has {n}", matrix.size()),
        )]);
    }

    let mut errors = Vec::new();
    for i in 0..n {
        for j in 0..n {
            let cell = matrix.get(i, j);
            if (i == j) != cell.is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MatrixUnassigned,
                    format!("Cell ({i}, {j}) is {cell:?}"),
                ));
            } else if i < j && cell == matrix.get(j, i) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MatrixAsymmetric,
                    format!("Cells ({i}, {j}) and ({j}, {i}) agree"),
                ));
            }
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let bye = roster.has_bye().then(|| n - 1);
    for (i, participant) in roster.iter().enumerate() {
        let balance = matrix.balance(i);
        if balance.abs() != 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::Unbalanced,
                format!("Participant {participant:?} has home/away difference {balance}"),
            ));
        }

        if home_teams.is_empty() {
            continue;
        }
        let designated = home_teams.contains(participant);
        if (balance > 0) != designated {
            errors.push(ValidationError::new(
                ValidationErrorKind::DesignationViolated,
                format!(
                    "Participant {participant:?} is {} but has home/away difference {balance}",
                    if designated { "home" } else { "away" }
                ),
            ));
        }
        if let Some(b) = bye {
            if i != b && matrix.hosts(i, b) != designated {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DesignationViolated,
                    format!("Participant {participant:?} bye hosting contradicts designation"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Round;
    use crate::scheduler::symmetric_matches;

    fn four_team_roster() -> Roster<u32> {
        Roster::from_count(4).unwrap()
    }

    fn single_round_robin() -> (Schedule<u32>, Vec<Match<u32>>) {
        let rounds = vec![
            Round::new(vec![(1, 2).into(), (3, 4).into()]),
            Round::new(vec![(1, 3).into(), (2, 4).into()]),
            Round::new(vec![(1, 4).into(), (2, 3).into()]),
        ];
        let expected = rounds.iter().flat_map(|r| r.matches.clone()).collect();
        (Schedule { rounds }, expected)
    }

    fn balanced_matrix() -> HomeAwayMatrix {
        // 1 and 2 are home-heavy.
        let mut m = HomeAwayMatrix::new(4);
        m.set(0, 1, true);
        m.set(0, 2, true);
        m.set(0, 3, false);
        m.set(1, 2, true);
        m.set(1, 3, true);
        m.set(2, 3, true);
        m
    }

    #[test]
    fn test_valid_schedule() {
        let (schedule, expected) = single_round_robin();
        assert!(validate_schedule(&schedule, &four_team_roster(), &expected, 3).is_ok());
    }

    #[test]
    fn test_wrong_length() {
        let (mut schedule, expected) = single_round_robin();
        schedule.rounds.pop();
        let errors = validate_schedule(&schedule, &four_team_roster(), &expected, 3).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ScheduleLength));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MatchSetMismatch));
    }

    #[test]
    fn test_repeated_participant() {
        let (mut schedule, expected) = single_round_robin();
        schedule.rounds[0] = Round::new(vec![(1, 2).into(), (2, 4).into()]);
        let errors = validate_schedule(&schedule, &four_team_roster(), &expected, 3).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RepeatedParticipant));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingParticipant));
    }

    #[test]
    fn test_round_size_and_unknown() {
        let (mut schedule, expected) = single_round_robin();
        schedule.rounds[2].matches.push((5, 6).into());
        let errors = validate_schedule(&schedule, &four_team_roster(), &expected, 3).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::RoundSize));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownParticipant));
    }

    #[test]
    fn test_flipped_match_detected() {
        let (mut schedule, expected) = single_round_robin();
        schedule.rounds[1] = Round::new(vec![(3, 1).into(), (2, 4).into()]);
        let errors = validate_schedule(&schedule, &four_team_roster(), &expected, 3).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MatchSetMismatch);
    }

    #[test]
    fn test_empty_season() {
        let roster = four_team_roster();
        let expected = symmetric_matches(&roster, 0);
        assert!(validate_schedule(&Schedule::new(), &roster, &expected, 0).is_ok());
    }

    #[test]
    fn test_valid_matrix() {
        let roster = four_team_roster();
        let home = vec![Participant::Team(1), Participant::Team(2)];
        assert!(validate_matrix(&balanced_matrix(), &roster, &home).is_ok());
        assert!(validate_matrix(&balanced_matrix(), &roster, &[]).is_ok());
    }

    #[test]
    fn test_matrix_designation_violated() {
        let roster = four_team_roster();
        let home = vec![Participant::Team(3), Participant::Team(4)];
        let errors = validate_matrix(&balanced_matrix(), &roster, &home).unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::DesignationViolated));
    }

    #[test]
    fn test_matrix_unbalanced() {
        let roster = four_team_roster();
        let mut m = balanced_matrix();
        m.set(0, 3, true);
        let errors = validate_matrix(&m, &roster, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::Unbalanced));
    }

    #[test]
    fn test_matrix_incomplete_and_size() {
        let roster = four_team_roster();
        let errors = validate_matrix(&HomeAwayMatrix::new(4), &roster, &[]).unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MatrixUnassigned));

        let errors = validate_matrix(&HomeAwayMatrix::new(6), &roster, &[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MatrixSize);
    }

    #[test]
    fn test_matrix_bye_hosting() {
        // Slot 3 is the bye; 1 is designated but visits the bye.
        let roster = Roster::from_count(3).unwrap();
        let mut m = HomeAwayMatrix::new(4);
        m.set(0, 1, true);
        m.set(0, 2, true);
        m.set(0, 3, false);
        m.set(1, 2, true);
        m.set(1, 3, true);
        m.set(2, 3, true);
        let home = vec![Participant::Team(1), Participant::Team(2)];
        let errors = validate_matrix(&m, &roster, &home).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("bye hosting")));
    }
}

//! Property tests for part number validation

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Echoes the part it was asked for; answers `N` parts
struct EchoSolver<const N: u8>;

impl<const N: u8> AocParser for EchoSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for EchoSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(max_parts: u8, part: u8) -> (u8, Result<String, SolveError>) {
    match max_parts {
        1 => (1, EchoSolver::<1>::solve_part_checked_range(&mut (), part)),
        2 => (2, EchoSolver::<2>::solve_part_checked_range(&mut (), part)),
        _ => (25, EchoSolver::<25>::solve_part_checked_range(&mut (), part)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parts outside `1..=PARTS` come back as `PartOutOfRange` with the same number
    #[test]
    fn out_of_range_parts_are_rejected(max_parts in 1u8..=3, part in 0u8..=255) {
        let (effective_max, result) = checked(max_parts, part);

        if part == 0 || part > effective_max {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    /// In-range parts give exactly what the unchecked call gives
    #[test]
    fn in_range_parts_are_delegated(part in 1u8..=25) {
        let checked = EchoSolver::<25>::solve_part_checked_range(&mut (), part).unwrap();
        let direct = EchoSolver::<25>::solve_part(&mut (), part).unwrap();
        prop_assert_eq!(checked, direct);
    }
}

#[test]
fn part_zero_rejected() {
    let result = EchoSolver::<2>::solve_part_checked_range(&mut (), 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn single_part_puzzle_rejects_part_two() {
    let result = EchoSolver::<1>::solve_part_checked_range(&mut (), 2);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(2))));
}

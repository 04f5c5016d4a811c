//! 2024 day 2: Red-Nosed Reports

use crate::utils::parse::{ints, lines_with};
use anyhow::ensure;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["sequences"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let levels = ints(line);
            ensure!(!levels.is_empty(), "empty report");
            Ok(levels)
        })
    }
}

/// Strictly monotonic with steps of one to three
fn is_safe(levels: impl Iterator<Item = i32> + Clone) -> bool {
    let diffs = levels.tuple_windows().map(|(a, b)| b - a);
    diffs.clone().all(|d| (1..=3).contains(&d)) || diffs.clone().all(|d| (-3..=-1).contains(&d))
}

/// Safe once at most one level is removed
fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            is_safe(
                levels
                    .iter()
                    .enumerate()
                    .filter(move |&(i, _)| i != skip)
                    .map(|(_, &l)| l),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared.iter().filter(|r| is_safe(r.iter().copied())).count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared.iter().filter(|r| is_safe_dampened(r)).count();
        Ok(safe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn dampener_can_drop_either_end() {
        assert!(is_safe_dampened(&[9, 1, 2, 3]));
        assert!(is_safe_dampened(&[1, 2, 3, 9]));
        assert!(!is_safe_dampened(&[1, 5, 9, 13]));
    }
}

//! 2023 day 9: Mirage Maintenance

use crate::utils::parse::{ints, lines_with};
use anyhow::ensure;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["sequences"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let values = ints(line);
            ensure!(!values.is_empty(), "empty history");
            Ok(values)
        })
    }
}

/// Next value: the sum of the last entry of every difference row
fn extrapolate(history: &[i64]) -> i64 {
    let mut row = history.to_vec();
    let mut next = 0;
    while row.iter().any(|&v| v != 0) {
        next += row[row.len() - 1];
        row = row.iter().tuple_windows().map(|(a, b)| b - a).collect();
        if row.is_empty() {
            break;
        }
    }
    next
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|h| extrapolate(h)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i64 = shared
            .iter()
            .map(|h| {
                let reversed: Vec<i64> = h.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";

    #[test]
    fn forwards_and_backwards() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "114");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }

    #[test]
    fn single_histories() {
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
        assert_eq!(extrapolate(&[5]), 5);
        assert_eq!(extrapolate(&[-1, -2, -3]), -4);
    }
}

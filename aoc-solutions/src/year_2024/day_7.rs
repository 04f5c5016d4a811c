//! 2024 day 7: Bridge Repair
//!
//! Operators are undone right to left, pruning whenever the target cannot
//! be the result of the last operation.

use crate::utils::parse::{ints, lines_with, number};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["search", "recursion"])]
pub struct Solver;

#[derive(Debug)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let (target, operands) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("expected `target: operands`"))?;
            let operands = ints(operands);
            ensure!(!operands.is_empty(), "no operands");
            Ok(Equation {
                target: number(target)?,
                operands,
            })
        })
    }
}

/// `target` with the digits of `suffix` removed from its end
fn strip_suffix(target: u64, suffix: u64) -> Option<u64> {
    let mut scale = 10;
    while scale <= suffix {
        scale *= 10;
    }
    (target > suffix && (target - suffix) % scale == 0).then(|| target / scale)
}

fn solvable(target: u64, operands: &[u64], concat: bool) -> bool {
    match operands {
        [] => false,
        [only] => *only == target,
        [rest @ .., last] => {
            (target >= *last && solvable(target - last, rest, concat))
                || (*last != 0 && target % last == 0 && solvable(target / last, rest, concat))
                || (concat
                    && strip_suffix(target, *last).is_some_and(|t| solvable(t, rest, concat)))
        }
    }
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .iter()
        .filter(|e| solvable(e.target, &e.operands, concat))
        .map(|e| e.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3749");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "11387");
    }

    #[test]
    fn suffix_stripping() {
        assert_eq!(strip_suffix(156, 6), Some(15));
        assert_eq!(strip_suffix(1510, 10), Some(15));
        assert_eq!(strip_suffix(156, 56), Some(1));
        assert_eq!(strip_suffix(156, 156), None);
        assert_eq!(strip_suffix(156, 7), None);
    }
}

//! 2025 day 3: Lobby

use crate::utils::parse::lines_with;
use anyhow::ensure;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

const SMALL_PICK: usize = 2;
const LARGE_PICK: usize = 12;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let line = line.trim();
            ensure!(line.bytes().all(|b| b.is_ascii_digit()), "not a battery bank: {line:?}");
            Ok(line.bytes().map(|b| b - b'0').collect())
        })
    }
}

/// Largest number formed by keeping `count` batteries in order.
/// Each digit is the leftmost maximum that still leaves room for the rest.
fn joltage(bank: &[u8], count: usize) -> Option<u64> {
    if bank.len() < count {
        return None;
    }
    let mut start = 0;
    let mut value = 0;
    for left in (0..count).rev() {
        let window = &bank[start..bank.len() - left];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, d)| d)?;
        value = value * 10 + u64::from(digit);
        start += offset + 1;
    }
    Some(value)
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> Result<u64, SolveError> {
    banks
        .iter()
        .map(|bank| {
            joltage(bank, count).ok_or_else(|| {
                SolveError::failed(format!("a bank of {} batteries cannot supply {count}", bank.len()))
            })
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(shared, SMALL_PICK)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(shared, LARGE_PICK)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "357");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3121910778619");
    }

    #[test]
    fn single_banks() {
        let bank = |s: &str| s.bytes().map(|b| b - b'0').collect::<Vec<_>>();
        assert_eq!(joltage(&bank("987654321111111"), 2), Some(98));
        assert_eq!(joltage(&bank("811111111111119"), 2), Some(89));
        assert_eq!(joltage(&bank("234234234234278"), 12), Some(434_234_234_278));
        assert_eq!(joltage(&bank("12"), 3), None);
    }
}

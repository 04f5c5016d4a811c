//! 2025 day 2: Gift Shop

use crate::utils::parse::{invalid, number};
use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;
use std::ops::RangeInclusive;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["strings", "brute-force"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|range| -> anyhow::Result<RangeInclusive<u64>> {
                let (lo, hi) = range
                    .trim()
                    .split_once('-')
                    .with_context(|| format!("expected `first-last`, found {range:?}"))?;
                let (lo, hi) = (number(lo)?, number(hi)?);
                ensure!(lo <= hi, "empty range {range:?}");
                Ok(lo..=hi)
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

/// Some digit block repeated exactly twice
fn is_doubled(id: &str) -> bool {
    let (front, back) = id.split_at(id.len() / 2);
    id.len() % 2 == 0 && front == back
}

/// Some digit block repeated at least twice: the id reappears inside its
/// own doubling with the first and last characters dropped
fn is_repeated(id: &str) -> bool {
    let doubled = id.repeat(2);
    id.len() > 1 && doubled[1..doubled.len() - 1].contains(id)
}

fn invalid_id_sum(ranges: &[RangeInclusive<u64>], rule: fn(&str) -> bool) -> u64 {
    ranges
        .par_iter()
        .flat_map_iter(|r| r.clone())
        .filter(|id| rule(&id.to_string()))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(invalid_id_sum(shared, is_doubled).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(invalid_id_sum(shared, is_repeated).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.len(), 11);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1227775554");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4174379265");
    }

    #[test]
    fn repetition_rules() {
        assert!(is_doubled("6464"));
        assert!(!is_doubled("111"));
        assert!(is_repeated("111"));
        assert!(is_repeated("12341234"));
        assert!(is_repeated("1212121212"));
        assert!(!is_repeated("7"));
        assert!(!is_repeated("1231"));
    }
}

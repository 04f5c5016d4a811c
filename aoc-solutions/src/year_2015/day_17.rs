//! 2015 day 17: No Such Thing as Too Much

use crate::utils::parse::{lines_with, number};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 17, tags = ["combinatorics"])]
pub struct Solver;

const EGGNOG_LITRES: u32 = 150;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, number)
    }
}

/// `ways[k]`: combinations of exactly `k` containers holding `target`
fn ways_by_count(containers: &[u32], target: u32) -> Vec<usize> {
    (0..=containers.len())
        .map(|k| {
            containers
                .iter()
                .combinations(k)
                .filter(|combo| combo.iter().copied().sum::<u32>() == target)
                .count()
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = ways_by_count(shared, EGGNOG_LITRES).iter().sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        ways_by_count(shared, EGGNOG_LITRES)
            .into_iter()
            .find(|&w| w > 0)
            .map(|w| w.to_string())
            .ok_or_else(|| SolveError::failed("no combination holds the eggnog"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_litres() {
        let containers = Solver::parse("20\n15\n10\n5\n5").unwrap();
        let ways = ways_by_count(&containers, 25);
        assert_eq!(ways.iter().sum::<usize>(), 4);
        assert_eq!(ways.iter().find(|&&w| w > 0), Some(&3));
    }
}

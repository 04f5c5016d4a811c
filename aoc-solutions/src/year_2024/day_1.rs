//! 2024 day 1: Historian Hysteria

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["sorting"])]
pub struct Solver;

/// Both location lists, sorted
pub struct Lists {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = lines_with(input, ints_n::<u64, 2>)?;
        let (mut left, mut right): (Vec<u64>, Vec<u64>) = pairs.into_iter().map(|[l, r]| (l, r)).unzip();
        left.sort_unstable();
        right.sort_unstable();
        Ok(Lists { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| l.abs_diff(*r))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let counts = shared.right.iter().counts();
        let similarity: u64 = shared
            .left
            .iter()
            .map(|l| l * counts.get(l).copied().unwrap_or(0) as u64)
            .sum();
        Ok(similarity.to_string())
    }
}

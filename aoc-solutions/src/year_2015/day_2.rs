//! 2015 day 2: I Was Told There Would Be No Math

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, tags = ["arithmetic"])]
pub struct Solver;

/// Box dimensions, sorted ascending
type Present = [u64; 3];

impl AocParser for Solver {
    type SharedData<'a> = Vec<Present>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let mut dims = ints_n::<u64, 3>(line)?;
            dims.sort_unstable();
            Ok(dims)
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let paper: u64 = shared
            .iter()
            .map(|&[a, b, c]| 2 * (a * b + b * c + a * c) + a * b)
            .sum();
        Ok(paper.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ribbon: u64 = shared.iter().map(|&[a, b, c]| 2 * (a + b) + a * b * c).sum();
        Ok(ribbon.to_string())
    }
}

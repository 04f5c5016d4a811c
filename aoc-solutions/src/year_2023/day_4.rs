//! 2023 day 4: Scratchcards

use crate::utils::parse::{ints, lines_with};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["arithmetic"])]
pub struct Solver;

impl AocParser for Solver {
    /// Winning numbers on each card
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let (_, numbers) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("missing ':'"))?;
            let (winning, have) = numbers
                .split_once('|')
                .ok_or_else(|| anyhow!("missing '|'"))?;
            let winning: HashSet<u32> = ints(winning).into_iter().collect();
            Ok(ints::<u32>(have)
                .into_iter()
                .filter(|n| winning.contains(n))
                .count())
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let points: u64 = shared
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| 1u64 << (m - 1))
            .sum();
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut copies = vec![1u64; shared.len()];
        for (i, &matches) in shared.iter().enumerate() {
            let end = (i + 1 + matches).min(copies.len());
            for j in i + 1..end {
                copies[j] += copies[i];
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}

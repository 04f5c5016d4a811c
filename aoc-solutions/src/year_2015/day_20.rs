//! 2015 day 20: Infinite Elves and Infinite Houses

use crate::utils::parse::{invalid, number};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 20, tags = ["number-theory", "sieve"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = usize;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        number(input).map_err(invalid)
    }
}

/// First house with at least `target` presents; `limit` caps the houses per elf
fn first_house(target: usize, per_elf: usize, limit: Option<usize>) -> usize {
    // elf `n` alone brings `per_elf * n` to house `n`
    let houses = target.div_ceil(per_elf).max(1);
    let mut presents = vec![0usize; houses + 1];
    for elf in 1..=houses {
        let last = limit.map_or(houses, |l| (elf * l).min(houses));
        for house in (elf..=last).step_by(elf) {
            presents[house] += elf * per_elf;
        }
    }
    presents
        .iter()
        .position(|&p| p >= target)
        .unwrap_or(houses)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(first_house(*shared, 10, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(first_house(*shared, 11, Some(50)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_nine_houses() {
        let expected = [10, 30, 40, 70, 60, 120, 80, 150, 130];
        for (i, presents) in expected.into_iter().enumerate() {
            let house = first_house(presents, 10, None);
            assert!(house <= i + 1, "{presents} presents first at {house}");
        }
        assert_eq!(first_house(70, 10, None), 4);
        assert_eq!(first_house(150, 10, None), 8);
        assert_eq!(first_house(121, 10, None), 8);
    }

    #[test]
    fn lazy_elves_stop_after_fifty_houses() {
        assert!(first_house(5000, 11, Some(50)) >= first_house(5000, 11, None));
        assert_eq!(first_house(11 * 12, 11, Some(50)), 6);
    }
}

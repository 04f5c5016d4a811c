//! 2023 day 2: Cube Conundrum

use crate::utils::parse::{lines_with, number};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["arithmetic"])]
pub struct Solver;

/// red, green, blue
type Cubes = [u32; 3];

const BAG: Cubes = [12, 13, 14];

pub struct Game {
    id: u32,
    /// Most cubes of each colour shown in any one handful
    most: Cubes,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let (head, draws) = line
                .split_once(": ")
                .ok_or_else(|| anyhow!("missing ':'"))?;
            let id = number(head.trim_start_matches("Game "))?;
            let mut most = [0; 3];
            for cubes in draws.split([';', ',']) {
                let (count, colour) = cubes
                    .trim()
                    .split_once(' ')
                    .ok_or_else(|| anyhow!("bad cube count {cubes:?}"))?;
                let slot = match colour {
                    "red" => 0,
                    "green" => 1,
                    "blue" => 2,
                    other => bail!("unknown colour {other:?}"),
                };
                most[slot] = most[slot].max(number(count)?);
            }
            Ok(Game { id, most })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|g| g.most.iter().zip(BAG).all(|(&seen, have)| seen <= have))
            .map(|g| g.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let power: u32 = shared.iter().map(|g| g.most.iter().product::<u32>()).sum();
        Ok(power.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn example_games() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn unknown_colour() {
        assert!(Solver::parse("Game 1: 3 purple").is_err());
    }
}

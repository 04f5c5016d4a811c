//! 2016 day 1: No Time for a Taxicab

use crate::utils::grid::Direction;
use crate::utils::parse::{invalid, number};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 1, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub enum Turn {
    Left,
    Right,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Turn, i64)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(", ")
            .map(|step| -> anyhow::Result<(Turn, i64)> {
                let turn = match step.as_bytes().first() {
                    Some(b'L') => Turn::Left,
                    Some(b'R') => Turn::Right,
                    _ => bail!("bad instruction {step:?}"),
                };
                let blocks = number(step.get(1..).ok_or_else(|| anyhow!("no distance"))?)?;
                Ok((turn, blocks))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

/// Every block walked through, starting at the origin
fn walk(steps: &[(Turn, i64)]) -> impl Iterator<Item = (i64, i64)> + '_ {
    let mut facing = Direction::North;
    let mut pos = (0i64, 0i64);
    std::iter::once(pos).chain(steps.iter().flat_map(move |&(turn, blocks)| {
        facing = match turn {
            Turn::Left => facing.turn_left(),
            Turn::Right => facing.turn_right(),
        };
        let (dr, dc) = facing.delta();
        (0..blocks)
            .map(|_| {
                pos = (pos.0 + dr as i64, pos.1 + dc as i64);
                pos
            })
            .collect::<Vec<_>>()
    }))
}

fn distance((r, c): (i64, i64)) -> i64 {
    r.abs() + c.abs()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let end = walk(shared).last().unwrap_or((0, 0));
        Ok(distance(end).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut seen = HashSet::new();
        walk(shared)
            .find(|&p| !seen.insert(p))
            .map(|p| distance(p).to_string())
            .ok_or_else(|| SolveError::failed("no location is visited twice"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn final_distance() {
        assert_eq!(solve("R2, L3", 1), "5");
        assert_eq!(solve("R2, R2, R2", 1), "2");
        assert_eq!(solve("R5, L5, R5, R3", 1), "12");
    }

    #[test]
    fn first_repeat() {
        assert_eq!(solve("R8, R4, R4, R8", 2), "4");
    }

    #[test]
    fn bad_instruction() {
        assert!(Solver::parse("F3").is_err());
        assert!(Solver::parse("Rx").is_err());
    }
}

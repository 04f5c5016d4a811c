//! 2015 day 3: Perfectly Spherical Houses in a Vacuum

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<(i32, i32)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .bytes()
            .map(|b| match b {
                b'^' => Ok((0, 1)),
                b'v' => Ok((0, -1)),
                b'>' => Ok((1, 0)),
                b'<' => Ok((-1, 0)),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected move {:?}",
                    other as char
                ))),
            })
            .collect()
    }
}

/// Houses visited when `carriers` deliverers take turns following the moves
fn visited(moves: &[(i32, i32)], carriers: usize) -> usize {
    let mut positions = vec![(0, 0); carriers];
    let mut houses = HashSet::from([(0, 0)]);
    for (i, (dx, dy)) in moves.iter().enumerate() {
        let pos = &mut positions[i % carriers];
        pos.0 += dx;
        pos.1 += dy;
        houses.insert(*pos);
    }
    houses.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(visited(shared, 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn houses(input: &str, carriers: usize) -> usize {
        visited(&Solver::parse(input).unwrap(), carriers)
    }

    #[test]
    fn santa_alone() {
        assert_eq!(houses(">", 1), 2);
        assert_eq!(houses("^>v<", 1), 4);
        assert_eq!(houses("^v^v^v^v^v", 1), 2);
    }

    #[test]
    fn with_robo_santa() {
        assert_eq!(houses("^v", 2), 3);
        assert_eq!(houses("^>v<", 2), 3);
        assert_eq!(houses("^v^v^v^v^v", 2), 11);
    }
}

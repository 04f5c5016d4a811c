//! 2025 day 1: Secret Entrance

use crate::utils::parse::{lines_with, number};
use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["simulation", "modular-arithmetic"])]
pub struct Solver;

const DIAL_START: i32 = 50;
const DIAL_SIZE: i32 = 100;

#[derive(Debug)]
pub struct SharedData {
    /// Signed rotations, left negative
    rotations: Vec<i32>,
    common_result: Option<CommonResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonResult {
    /// Rotations that leave the dial on zero
    zero_stops: u32,
    /// Clicks that land on zero, mid-rotation included
    zero_passes: u32,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rotations = lines_with(input, |line| {
            let line = line.trim();
            let sign = match line.as_bytes().first() {
                Some(b'L') => -1,
                Some(b'R') => 1,
                _ => bail!("rotation must start with 'L' or 'R'"),
            };
            let clicks: i32 = number(&line[1..])?;
            if clicks < 0 {
                bail!("rotation must be non-negative");
            }
            Ok(sign * clicks)
        })?;
        Ok(SharedData {
            rotations,
            common_result: None,
        })
    }
}

fn turn_dial(rotations: &[i32]) -> CommonResult {
    let mut dial = DIAL_START;
    let mut result = CommonResult {
        zero_stops: 0,
        zero_passes: 0,
    };
    for &rotation in rotations {
        let (laps, rest) = (rotation.abs() / DIAL_SIZE, rotation.abs() % DIAL_SIZE);
        result.zero_passes += laps.unsigned_abs();
        let crosses = if rotation < 0 {
            dial != 0 && dial - rest <= 0
        } else {
            dial + rest >= DIAL_SIZE
        };
        result.zero_passes += u32::from(crosses);
        dial = (dial + rotation).rem_euclid(DIAL_SIZE);
        result.zero_stops += u32::from(dial == 0);
    }
    result
}

fn solve_once_for_both(shared: &mut SharedData) -> CommonResult {
    *shared
        .common_result
        .get_or_insert_with(|| turn_dial(&shared.rotations))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_stops.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_passes.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
        assert!(shared.common_result.is_some());
    }

    #[test]
    fn full_laps_count_every_pass() {
        let result = turn_dial(&[1000]);
        assert_eq!(result.zero_passes, 10);
        assert_eq!(result.zero_stops, 0);
        // leaving zero to the left is not a pass
        let result = turn_dial(&[-50, -5]);
        assert_eq!(result, CommonResult { zero_stops: 1, zero_passes: 1 });
    }

    #[test]
    fn clicks_match_single_steps() {
        let rotations: [i32; 12] = [
            -68, -30, 48, -5, 60, -55, -1, -99, 14, -82, 250, -301,
        ];
        let mut dial = DIAL_START;
        let mut passes = 0;
        for &rotation in &rotations {
            for _ in 0..rotation.abs() {
                dial = (dial + rotation.signum()).rem_euclid(DIAL_SIZE);
                passes += u32::from(dial == 0);
            }
        }
        assert_eq!(turn_dial(&rotations).zero_passes, passes);
    }

    #[test]
    fn rejects_unknown_directions() {
        let err = Solver::parse("L1\nX5\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}

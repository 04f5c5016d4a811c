//! 2024 day 11: Plutonian Pebbles

use crate::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
use crate::utils::parse::ints;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["memoization"])]
pub struct Solver;

const SHORT_BLINKS: u32 = 25;
const LONG_BLINKS: u32 = 75;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = ints(input);
        if stones.is_empty() {
            return Err(ParseError::MissingData("no stones".into()));
        }
        Ok(stones)
    }
}

/// One stone after a single blink
fn blink(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        vec![stone / half, stone % half]
    } else {
        vec![stone * 2024]
    }
}

/// Stones after `blinks`, memoised on `(stone, blinks left)`
fn stones_after(stones: &[u64], blinks: u32) -> u64 {
    let problem = ClosureProblem::new(
        |&(stone, left): &(u64, u32)| {
            if left == 0 {
                vec![]
            } else {
                blink(stone).into_iter().map(|s| (s, left - 1)).collect()
            }
        },
        |&(_, left): &(u64, u32), deps: Vec<u64>| if left == 0 { 1 } else { deps.iter().sum() },
    );
    let cache = DpCache::with_problem(HashMapBackend::new(), problem);
    let total: u64 = stones.iter().map(|&s| cache.get(&(s, blinks))).sum();
    tracing::debug!(states = cache.cached(), "stones memoised");
    total
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones_after(shared, SHORT_BLINKS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones_after(shared, LONG_BLINKS).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn single_blinks() {
        assert_eq!(blink(0), vec![1]);
        assert_eq!(blink(1000), vec![10, 0]);
        assert_eq!(blink(99), vec![9, 9]);
        assert_eq!(blink(999), vec![2_021_976]);
    }

    #[test]
    fn example() {
        assert_eq!(stones_after(&[125, 17], 6), 22);
        let mut shared = Solver::parse("125 17\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "55312");
    }

    #[test]
    fn memo_matches_expansion() {
        let mut stones = vec![0, 1, 10, 99, 999];
        for blinks in 1..=12 {
            stones = stones.into_iter().flat_map(blink).collect();
            assert_eq!(stones_after(&[0, 1, 10, 99, 999], blinks), stones.len() as u64);
        }
    }
}

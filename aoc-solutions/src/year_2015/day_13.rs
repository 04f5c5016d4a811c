//! 2015 day 13: Knights of the Dinner Table

use crate::utils::parse::{invalid, lines_with, number};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 13, tags = ["graph", "brute-force"])]
pub struct Solver;

/// `pair[a][b]`: combined happiness change when `a` and `b` sit together
pub struct Table {
    pair: Vec<Vec<i32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Table;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(
            r"^(\w+) would (gain|lose) (\d+) happiness units? by sitting next to (\w+)\.$",
        )
        .map_err(|e| invalid(e.into()))?;
        let rules = lines_with(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("unrecognised rule {line:?}"))?;
            let amount: i32 = number(&caps[3])?;
            let delta = if &caps[2] == "gain" { amount } else { -amount };
            Ok((caps[1].to_string(), caps[4].to_string(), delta))
        })?;

        let mut guests: HashMap<String, usize> = HashMap::new();
        for (who, other, _) in &rules {
            for name in [who, other] {
                let next = guests.len();
                guests.entry(name.clone()).or_insert(next);
            }
        }
        let mut pair = vec![vec![0; guests.len()]; guests.len()];
        for (who, other, delta) in &rules {
            let (a, b) = (guests[who], guests[other]);
            pair[a][b] += delta;
            pair[b][a] += delta;
        }
        Ok(Table { pair })
    }
}

fn best_seating(pair: &[Vec<i32>]) -> i32 {
    let n = pair.len();
    if n < 2 {
        return 0;
    }
    // rotations are equivalent, so guest 0 stays put
    (1..n)
        .permutations(n - 1)
        .map(|rest| {
            let seats: Vec<usize> = std::iter::once(0).chain(rest).collect();
            seats
                .iter()
                .circular_tuple_windows()
                .map(|(&a, &b)| pair[a][b])
                .sum::<i32>()
        })
        .max()
        .unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_seating(&shared.pair).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut pair = shared.pair.clone();
        for row in &mut pair {
            row.push(0);
        }
        pair.push(vec![0; pair.len() + 1]);
        Ok(best_seating(&pair).to_string())
    }
}

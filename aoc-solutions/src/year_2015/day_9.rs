//! 2015 day 9: All in a Single Night

use crate::utils::parse::{lines_with, number};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, MinMaxResult};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 9, tags = ["graph", "brute-force"])]
pub struct Solver;

pub struct Routes {
    /// Total length of every full route
    lengths: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = Routes;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut cities: HashMap<&str, usize> = HashMap::new();
        let edges = lines_with(input, |line| {
            let (route, dist) = line
                .split_once(" = ")
                .ok_or_else(|| anyhow!("missing distance"))?;
            let (from, to) = route
                .split_once(" to ")
                .ok_or_else(|| anyhow!("missing 'to'"))?;
            Ok((from, to, number::<u32>(dist)?))
        })?;

        for &(from, to, _) in &edges {
            for city in [from, to] {
                let next = cities.len();
                cities.entry(city).or_insert(next);
            }
        }
        let n = cities.len();
        let mut dist = vec![vec![None; n]; n];
        for (from, to, d) in edges {
            let (a, b) = (cities[from], cities[to]);
            dist[a][b] = Some(d);
            dist[b][a] = Some(d);
        }

        let lengths = (0..n)
            .permutations(n)
            .filter_map(|order| {
                order
                    .iter()
                    .tuple_windows()
                    .map(|(&a, &b)| dist[a][b])
                    .sum::<Option<u32>>()
            })
            .collect();
        Ok(Routes { lengths })
    }
}

fn extremes(routes: &Routes) -> Result<(u32, u32), SolveError> {
    match routes.lengths.iter().minmax() {
        MinMaxResult::NoElements => Err(SolveError::failed("no route visits every city")),
        MinMaxResult::OneElement(&d) => Ok((d, d)),
        MinMaxResult::MinMax(&lo, &hi) => Ok((lo, hi)),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(extremes(shared)?.0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(extremes(shared)?.1.to_string())
    }
}

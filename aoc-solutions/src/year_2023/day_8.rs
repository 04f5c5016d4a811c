//! 2023 day 8: Haunted Wasteland

use crate::utils::math::lcm_all;
use crate::utils::parse::{invalid, sections};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["graph", "math"])]
pub struct Solver;

pub struct Network<'a> {
    /// `true` for a right turn
    turns: Vec<bool>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (turns, body) = sections(input).map_err(invalid)?;
        let turns = turns
            .trim()
            .bytes()
            .map(|b| match b {
                b'L' => Ok(false),
                b'R' => Ok(true),
                _ => Err(invalid(anyhow!("bad turn {:?}", b as char))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if turns.is_empty() {
            return Err(ParseError::MissingData("no turns".into()));
        }

        let re = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$").map_err(|e| invalid(e.into()))?;
        let mut nodes = HashMap::new();
        for (i, line) in body.lines().enumerate().filter(|(_, l)| !l.trim().is_empty()) {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| ParseError::at_line(i + 1, format!("bad node {line:?}")))?;
            let (_, [name, left, right]) = caps.extract();
            nodes.insert(name, (left, right));
        }
        Ok(Network { turns, nodes })
    }
}

/// Steps from `start` until `done` holds
fn steps(
    net: &Network<'_>,
    start: &str,
    done: impl Fn(&str) -> bool,
) -> Result<u64, SolveError> {
    // a walk longer than this is stuck in a loop
    let limit = net.turns.len() * net.nodes.len().max(1);
    let mut at = start;
    for (n, &right) in net.turns.iter().cycle().take(limit + 1).enumerate() {
        if done(at) {
            return Ok(n as u64);
        }
        let &(left, r) = net
            .nodes
            .get(at)
            .ok_or_else(|| SolveError::failed(format!("unknown node {at}")))?;
        at = if right { r } else { left };
    }
    Err(SolveError::failed(format!("{start} never reaches a goal")))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(steps(shared, "AAA", |n| n == "ZZZ")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // each ghost reaches its Z node on a fixed cycle
        let net: &Network<'_> = shared;
        let cycles = net
            .nodes
            .keys()
            .filter(|n| n.ends_with('A'))
            .map(|start| steps(net, start, |n| n.ends_with('Z')))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lcm_all(cycles).to_string())
    }
}

//! 2025 day 11: Reactor

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::parse::lines_with;
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 11, tags = ["graph", "memoization"])]
pub struct Solver;

/// Device wiring with names interned to dense ids
#[derive(Debug, Default)]
pub struct Rack<'a> {
    ids: HashMap<&'a str, usize>,
    outputs: Vec<Vec<usize>>,
}

impl<'a> Rack<'a> {
    fn intern(&mut self, name: &'a str) -> usize {
        let next = self.ids.len();
        let id = *self.ids.entry(name).or_insert(next);
        if id == next {
            self.outputs.push(Vec::new());
        }
        id
    }

    fn id(&self, name: &str) -> Result<usize, SolveError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| SolveError::failed(format!("no device named {name:?}")))
    }

    /// Number of paths from `from` to `to`
    fn paths(&self, from: &str, to: &str) -> Result<u64, SolveError> {
        let (from, to) = (self.id(from)?, self.id(to)?);
        let cache = DpCache::with_problem(
            VecBackend::with_capacity(self.outputs.len()),
            PathsTo { rack: self, to },
        );
        Ok(cache.get(&from))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Rack<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rack = Rack::default();
        let lines = lines_with(input, |line| {
            let (device, outputs) = line.split_once(':').context("expected `device: outputs`")?;
            Ok((device.trim(), outputs.split_whitespace().collect::<Vec<_>>()))
        })?;
        for (device, outputs) in lines {
            let id = rack.intern(device);
            let outputs: Vec<usize> = outputs.into_iter().map(|o| rack.intern(o)).collect();
            rack.outputs[id].extend(outputs);
        }
        Ok(rack)
    }
}

/// Paths from each device to a fixed one; the wiring must not loop
struct PathsTo<'r, 'a> {
    rack: &'r Rack<'a>,
    to: usize,
}

impl DpProblem<usize, u64> for PathsTo<'_, '_> {
    fn deps(&self, device: &usize) -> Vec<usize> {
        if *device == self.to {
            vec![]
        } else {
            self.rack.outputs[*device].clone()
        }
    }

    fn compute(&self, device: &usize, deps: Vec<u64>) -> u64 {
        if *device == self.to { 1 } else { deps.iter().sum() }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.paths("you", "out")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let via = |first: &str, second: &str| -> Result<u64, SolveError> {
            Ok(shared.paths("svr", first)?
                * shared.paths(first, second)?
                * shared.paths(second, "out")?)
        };
        let total = via("fft", "dac")? + via("dac", "fft")?;
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const YOU_EXAMPLE: &str = "\
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    const SERVER_EXAMPLE: &str = "\
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    #[test]
    fn paths_from_you() {
        let mut shared = Solver::parse(YOU_EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
    }

    #[test]
    fn paths_through_dac_and_fft() {
        let mut shared = Solver::parse(SERVER_EXAMPLE).unwrap();
        assert_eq!(shared.paths("svr", "out").unwrap(), 8);
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }

    #[test]
    fn unknown_device_fails() {
        let mut shared = Solver::parse(YOU_EXAMPLE).unwrap();
        assert!(Solver::solve_part(&mut shared, 2).is_err());
        assert_eq!(shared.paths("out", "you").unwrap(), 0);
    }
}

//! 2025 day 10: Factory
//!
//! Pressing a button twice is the same as not pressing it, so the indicator
//! lights only care about which subset of buttons is pressed once. The same
//! subsets drive the joltage counters: a subset whose effect has the parity of
//! the remaining target fixes the low bit, after which every counter is even and
//! the rest of the presses come in pairs, halving the target.

use crate::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
use crate::utils::parse::{invalid, lines_with};
use anyhow::{Context, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 10, tags = ["bitmask", "memoization"])]
pub struct Solver;

/// Enumerating every button subset stays cheap below this
const MAX_BUTTONS: usize = 16;

#[derive(Debug)]
pub struct Machine {
    lights: u32,
    buttons: Vec<Vec<usize>>,
    joltage: Vec<u16>,
}

/// One subset of buttons, each pressed once
#[derive(Debug)]
struct Pattern {
    presses: u64,
    effect: Vec<u16>,
    parity: u32,
}

fn parity(counters: &[u16]) -> u32 {
    counters
        .iter()
        .enumerate()
        .filter(|(_, c)| *c % 2 == 1)
        .fold(0, |mask, (i, _)| mask | 1 << i)
}

/// Subsets that leave every remaining counter even and non-negative
fn usable<'a>(patterns: &'a [Pattern], target: &'a [u16]) -> impl Iterator<Item = &'a Pattern> {
    let wanted = parity(target);
    patterns.iter().filter(move |p| {
        p.parity == wanted && p.effect.iter().zip(target).all(|(e, t)| e <= t)
    })
}

fn strip(token: &str, open: char, close: char) -> anyhow::Result<&str> {
    token
        .strip_prefix(open)
        .and_then(|t| t.strip_suffix(close))
        .with_context(|| format!("expected {open}...{close}, found {token:?}"))
}

fn parse_machine(line: &str) -> anyhow::Result<Machine> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [first, middle @ .., last] = tokens.as_slice() else {
        bail!("expected lights, buttons and joltage");
    };

    let diagram = strip(first, '[', ']')?;
    let lights = diagram
        .bytes()
        .enumerate()
        .try_fold(0u32, |mask, (i, b)| match b {
            b'#' => Ok(mask | 1 << i),
            b'.' => Ok(mask),
            _ => bail!("unexpected light {:?}", b as char),
        })?;

    let joltage = strip(last, '{', '}')?
        .split(',')
        .map(|n| n.parse::<u16>().with_context(|| format!("bad joltage {n:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if joltage.len() != diagram.len() || joltage.len() > 32 {
        bail!("{} lights but {} joltage counters", diagram.len(), joltage.len());
    }

    let buttons = middle
        .iter()
        .map(|token| -> anyhow::Result<Vec<usize>> {
            strip(token, '(', ')')?
                .split(',')
                .map(|n| match n.parse::<usize>() {
                    Ok(i) if i < joltage.len() => Ok(i),
                    _ => bail!("button wires unknown counter {n:?}"),
                })
                .collect()
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    if buttons.len() > MAX_BUTTONS {
        bail!("{} buttons, at most {MAX_BUTTONS} supported", buttons.len());
    }

    Ok(Machine {
        lights,
        buttons,
        joltage,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let machines = lines_with(input, parse_machine)?;
        if machines.is_empty() {
            return Err(invalid(anyhow::anyhow!("no machines")));
        }
        Ok(machines)
    }
}

impl Machine {
    fn patterns(&self) -> Vec<Pattern> {
        (0u32..1 << self.buttons.len())
            .map(|subset| {
                let mut effect = vec![0u16; self.joltage.len()];
                self.buttons
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| subset & 1 << i != 0)
                    .flat_map(|(_, wires)| wires)
                    .for_each(|&w| effect[w] += 1);
                Pattern {
                    presses: u64::from(subset.count_ones()),
                    parity: parity(&effect),
                    effect,
                }
            })
            .collect()
    }

    fn fewest_for_lights(&self) -> Option<u64> {
        self.patterns()
            .iter()
            .filter(|p| p.parity == self.lights)
            .map(|p| p.presses)
            .min()
    }

    fn fewest_for_joltage(&self) -> Option<u64> {
        let patterns = self.patterns();
        let problem = ClosureProblem::new(
            |target: &Vec<u16>| -> Vec<Vec<u16>> {
                if target.iter().all(|&t| t == 0) {
                    return vec![];
                }
                usable(&patterns, target)
                    .map(|p| {
                        target
                            .iter()
                            .zip(&p.effect)
                            .map(|(t, e)| (t - e) / 2)
                            .collect()
                    })
                    .collect()
            },
            |target: &Vec<u16>, halves: Vec<Option<u64>>| {
                if target.iter().all(|&t| t == 0) {
                    return Some(0);
                }
                usable(&patterns, target)
                    .zip(halves)
                    .filter_map(|(p, half)| Some(p.presses + 2 * half?))
                    .min()
            },
        );
        let cache = DpCache::with_problem(HashMapBackend::new(), problem);
        let fewest = cache.get(&self.joltage);
        tracing::debug!(states = cache.cached(), ?fewest, "joltage configured");
        fewest
    }
}

fn total_presses(
    machines: &[Machine],
    fewest: impl Fn(&Machine) -> Option<u64> + Send + Sync,
) -> Result<u64, SolveError> {
    machines
        .par_iter()
        .enumerate()
        .map(|(i, m)| {
            fewest(m).ok_or_else(|| {
                SolveError::failed(format!("machine {} cannot be configured", i + 1))
            })
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_presses(shared, Machine::fewest_for_lights)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_presses(shared, Machine::fewest_for_joltage)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "33");
    }

    #[test]
    fn per_machine_counts() {
        let machines = Solver::parse(EXAMPLE).unwrap();
        let lights: Vec<_> = machines.iter().map(Machine::fewest_for_lights).collect();
        let joltage: Vec<_> = machines.iter().map(Machine::fewest_for_joltage).collect();
        assert_eq!(lights, [Some(2), Some(3), Some(2)]);
        assert_eq!(joltage, [Some(10), Some(12), Some(11)]);
    }

    #[test]
    fn unreachable_joltage_fails() {
        let mut shared = Solver::parse("[#.] (0) {1,1}").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }

    #[test]
    fn malformed_machines_are_rejected() {
        assert!(Solver::parse("[.#] (2) {1,1}").is_err());
        assert!(Solver::parse("[.#] (0) {1}").is_err());
        assert!(Solver::parse("(0) {1}").is_err());
    }
}

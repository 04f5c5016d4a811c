//! 2023 day 20: Pulse Propagation

use crate::utils::math::lcm_all;
use crate::utils::parse::lines_with;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 20, tags = ["simulation", "math"])]
pub struct Solver;

const PRESSES: usize = 1000;
const PRESS_LIMIT: u64 = 1 << 20;
const BROADCASTER: &str = "broadcaster";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Broadcast,
    FlipFlop,
    Conjunction,
    /// Named only as a destination
    Sink,
}

#[derive(Debug, Clone)]
struct Module {
    kind: Kind,
    outputs: Vec<usize>,
    inputs: Vec<usize>,
}

pub struct Network<'a> {
    names: Vec<&'a str>,
    modules: Vec<Module>,
}

#[derive(Clone)]
struct State {
    flip_on: Vec<bool>,
    /// Last pulse remembered per (conjunction, input slot)
    memory: Vec<Vec<bool>>,
}

/// A pulse `from -> to`, `true` for high
type Pulse = (usize, usize, bool);

impl Network<'_> {
    fn id(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&n| n == name)
    }

    fn fresh_state(&self) -> State {
        State {
            flip_on: vec![false; self.modules.len()],
            memory: self
                .modules
                .iter()
                .map(|m| vec![false; m.inputs.len()])
                .collect(),
        }
    }

    /// Presses the button once, reporting every pulse in order
    fn press(
        &self,
        state: &mut State,
        mut on_pulse: impl FnMut(Pulse),
    ) -> Result<(), SolveError> {
        let broadcaster = self
            .id(BROADCASTER)
            .ok_or_else(|| SolveError::failed("no broadcaster"))?;
        let mut queue = VecDeque::from([(usize::MAX, broadcaster, false)]);
        while let Some(pulse @ (from, to, high)) = queue.pop_front() {
            on_pulse(pulse);
            let module = &self.modules[to];
            let out = match module.kind {
                Kind::Broadcast => Some(high),
                Kind::FlipFlop if !high => {
                    state.flip_on[to] = !state.flip_on[to];
                    Some(state.flip_on[to])
                }
                Kind::Conjunction => {
                    if let Some(slot) = module.inputs.iter().position(|&i| i == from) {
                        state.memory[to][slot] = high;
                    }
                    Some(!state.memory[to].iter().all(|&h| h))
                }
                _ => None,
            };
            if let Some(out) = out {
                queue.extend(module.outputs.iter().map(|&next| (to, next, out)));
            }
        }
        Ok(())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines = lines_with(input, |line| {
            let (name, outputs) = line
                .split_once(" -> ")
                .ok_or_else(|| anyhow!("missing '->'"))?;
            let (kind, name) = match name.as_bytes().first() {
                Some(b'%') => (Kind::FlipFlop, &name[1..]),
                Some(b'&') => (Kind::Conjunction, &name[1..]),
                _ if name == BROADCASTER => (Kind::Broadcast, name),
                _ => return Err(anyhow!("untyped module {name:?}")),
            };
            Ok((kind, name, outputs.split(", ").collect::<Vec<_>>()))
        })?;

        let mut names: Vec<&'a str> = lines.iter().map(|(_, n, _)| *n).collect();
        for (_, _, outputs) in &lines {
            for &out in outputs {
                if !names.contains(&out) {
                    names.push(out);
                }
            }
        }
        let id = |name: &str| names.iter().position(|&n| n == name);
        let mut modules: Vec<Module> = names
            .iter()
            .map(|_| Module {
                kind: Kind::Sink,
                outputs: Vec::new(),
                inputs: Vec::new(),
            })
            .collect();
        for (i, (kind, _, outputs)) in lines.iter().enumerate() {
            modules[i].kind = *kind;
            modules[i].outputs = outputs.iter().filter_map(|o| id(o)).collect();
        }
        for i in 0..modules.len() {
            for o in modules[i].outputs.clone() {
                modules[o].inputs.push(i);
            }
        }
        Ok(Network { names, modules })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut state = shared.fresh_state();
        let (mut low, mut high) = (0u64, 0u64);
        for _ in 0..PRESSES {
            shared.press(&mut state, |(_, _, h)| {
                if h {
                    high += 1;
                } else {
                    low += 1;
                }
            })?;
        }
        Ok((low * high).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // rx hangs off a single conjunction whose inputs are independent counters
        let rx = shared
            .id("rx")
            .ok_or_else(|| SolveError::failed("no rx module"))?;
        let [hub] = shared.modules[rx].inputs[..] else {
            return Err(SolveError::failed("rx must have exactly one input"));
        };
        if shared.modules[hub].kind != Kind::Conjunction {
            return Err(SolveError::failed("rx must be fed by a conjunction"));
        }
        let feeders = &shared.modules[hub].inputs;
        let mut first_high: Vec<Option<u64>> = vec![None; feeders.len()];
        let mut state = shared.fresh_state();

        for presses in 1..=PRESS_LIMIT {
            shared.press(&mut state, |(from, to, high)| {
                if high && to == hub {
                    if let Some(slot) = feeders.iter().position(|&f| f == from) {
                        first_high[slot].get_or_insert(presses);
                    }
                }
            })?;
            if first_high.iter().all(Option::is_some) {
                tracing::debug!(?first_high, "every feeder has fired high");
                return Ok(lcm_all(first_high.into_iter().flatten()).to_string());
            }
        }
        Err(SolveError::failed("rx never receives a low pulse"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const LOOP: &str = "\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a";

    const WITH_OUTPUT: &str = "\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output";

    /// Two counters feeding `hub`: one fires on press 3, the other on press 1
    const COUNTERS: &str = "\
broadcaster -> a1, b1
%a1 -> a2, c1
%a2 -> c1
&c1 -> x1
&x1 -> hub
%b1 -> d1
&d1 -> y1
&y1 -> hub
&hub -> rx";

    #[test]
    fn pulse_products() {
        let mut shared = Solver::parse(LOOP).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "32000000");
        let mut shared = Solver::parse(WITH_OUTPUT).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11687500");
    }

    #[test]
    fn first_low_pulse_to_rx() {
        let mut shared = Solver::parse(COUNTERS).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");

        // confirm by direct simulation
        let net = Solver::parse(COUNTERS).unwrap();
        let rx = net.id("rx").unwrap();
        let mut state = net.fresh_state();
        let mut presses = 0;
        let mut hit = false;
        while !hit {
            presses += 1;
            net.press(&mut state, |(_, to, high)| hit |= to == rx && !high)
                .unwrap();
        }
        assert_eq!(presses, 3);
    }

    #[test]
    fn missing_rx() {
        let mut shared = Solver::parse(LOOP).unwrap();
        assert!(Solver::solve_part(&mut shared, 2).is_err());
    }
}

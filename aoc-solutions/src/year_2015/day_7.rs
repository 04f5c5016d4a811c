//! 2015 day 7: Some Assembly Required

use crate::utils::parse::lines_with;
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 7, tags = ["graph", "bitwise"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
enum Operand<'a> {
    Signal(u16),
    Wire(&'a str),
}

#[derive(Debug, Clone, Copy)]
enum Gate<'a> {
    Copy(Operand<'a>),
    Not(Operand<'a>),
    And(Operand<'a>, Operand<'a>),
    Or(Operand<'a>, Operand<'a>),
    LShift(Operand<'a>, Operand<'a>),
    RShift(Operand<'a>, Operand<'a>),
}

pub struct Circuit<'a> {
    gates: HashMap<&'a str, Gate<'a>>,
    signal_a: Option<u16>,
}

fn operand(s: &str) -> Operand<'_> {
    s.parse().map_or(Operand::Wire(s), Operand::Signal)
}

impl AocParser for Solver {
    type SharedData<'a> = Circuit<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let gates = lines_with(input, |line| {
            let (expr, target) = line
                .split_once(" -> ")
                .ok_or_else(|| anyhow!("missing '->' in {line:?}"))?;
            let words: Vec<&str> = expr.split_whitespace().collect();
            let gate = match words[..] {
                [a] => Gate::Copy(operand(a)),
                ["NOT", a] => Gate::Not(operand(a)),
                [a, "AND", b] => Gate::And(operand(a), operand(b)),
                [a, "OR", b] => Gate::Or(operand(a), operand(b)),
                [a, "LSHIFT", b] => Gate::LShift(operand(a), operand(b)),
                [a, "RSHIFT", b] => Gate::RShift(operand(a), operand(b)),
                _ => bail!("unknown gate {expr:?}"),
            };
            Ok((target.trim(), gate))
        })?;
        Ok(Circuit {
            gates: gates.into_iter().collect(),
            signal_a: None,
        })
    }
}

struct Evaluator<'c, 'a> {
    gates: &'c HashMap<&'a str, Gate<'a>>,
    overrides: HashMap<&'a str, u16>,
    memo: HashMap<&'a str, u16>,
}

impl<'c, 'a> Evaluator<'c, 'a> {
    fn new(gates: &'c HashMap<&'a str, Gate<'a>>) -> Self {
        Self {
            gates,
            overrides: HashMap::new(),
            memo: HashMap::new(),
        }
    }

    fn operand(&mut self, op: Operand<'a>) -> Result<u16, SolveError> {
        match op {
            Operand::Signal(v) => Ok(v),
            Operand::Wire(w) => self.wire(w),
        }
    }

    fn wire(&mut self, wire: &'a str) -> Result<u16, SolveError> {
        if let Some(&v) = self.overrides.get(wire).or_else(|| self.memo.get(wire)) {
            return Ok(v);
        }
        let gate = *self
            .gates
            .get(wire)
            .ok_or_else(|| SolveError::failed(format!("wire {wire} has no source")))?;
        let value = match gate {
            Gate::Copy(a) => self.operand(a)?,
            Gate::Not(a) => !self.operand(a)?,
            Gate::And(a, b) => self.operand(a)? & self.operand(b)?,
            Gate::Or(a, b) => self.operand(a)? | self.operand(b)?,
            // shifting every bit out leaves zero
            Gate::LShift(a, b) => {
                let (value, by) = (self.operand(a)?, self.operand(b)?);
                value.checked_shl(by.into()).unwrap_or(0)
            }
            Gate::RShift(a, b) => {
                let (value, by) = (self.operand(a)?, self.operand(b)?);
                value.checked_shr(by.into()).unwrap_or(0)
            }
        };
        self.memo.insert(wire, value);
        Ok(value)
    }
}

fn signal_a(circuit: &mut Circuit<'_>) -> Result<u16, SolveError> {
    if let Some(a) = circuit.signal_a {
        return Ok(a);
    }
    let a = Evaluator::new(&circuit.gates).wire("a")?;
    circuit.signal_a = Some(a);
    Ok(a)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(signal_a(shared)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let a = signal_a(shared)?;
        let mut eval = Evaluator::new(&shared.gates);
        eval.overrides.insert("b", a);
        Ok(eval.wire("a")?.to_string())
    }
}

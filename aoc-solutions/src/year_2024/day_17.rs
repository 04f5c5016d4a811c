//! 2024 day 17: Chronospatial Computer
//!
//! Every program of interest shifts register A by three bits per output, so
//! the quine search builds A one octal digit at a time from the last output
//! backwards, keeping only prefixes whose output matches the program tail.

use crate::utils::parse::{ints, invalid, number, sections};
use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 17, tags = ["vm", "reverse-engineering"])]
pub struct Solver;

/// Instructions executed before a run is declared runaway
const STEP_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cpu {
    a: u64,
    b: u64,
    c: u64,
}

pub struct Computer {
    cpu: Cpu,
    program: Vec<u8>,
}

impl AocParser for Solver {
    type SharedData<'a> = Computer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let parse = || -> anyhow::Result<Computer> {
            let (registers, program) = sections(input)?;
            let [a, b, c]: [u64; 3] = registers
                .lines()
                .map(|line| -> anyhow::Result<u64> {
                    let (_, value) = line
                        .split_once(':')
                        .ok_or_else(|| anyhow!("expected `Register X: value`"))?;
                    number(value)
                })
                .collect::<anyhow::Result<Vec<_>>>()?
                .try_into()
                .map_err(|v: Vec<u64>| anyhow!("expected 3 registers, found {}", v.len()))?;
            let program: Vec<u8> = ints(program.split_once(':').context("missing program")?.1);
            ensure!(
                !program.is_empty() && program.iter().all(|&x| x < 8),
                "program must be a list of 3-bit numbers"
            );
            Ok(Computer {
                cpu: Cpu { a, b, c },
                program,
            })
        };
        parse().map_err(invalid)
    }
}

impl Cpu {
    fn combo(&self, operand: u8) -> Result<u64, SolveError> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.a),
            5 => Ok(self.b),
            6 => Ok(self.c),
            _ => Err(SolveError::failed(format!("invalid combo operand {operand}"))),
        }
    }

    /// `A >> combo`, zero once every bit is shifted out
    fn shifted(&self, operand: u8) -> Result<u64, SolveError> {
        let shift = u32::try_from(self.combo(operand)?).unwrap_or(u32::MAX);
        Ok(self.a.checked_shr(shift).unwrap_or(0))
    }

    /// Runs `program` to completion, returning everything it printed
    fn run(&mut self, program: &[u8]) -> Result<Vec<u8>, SolveError> {
        let mut out = Vec::new();
        let mut ip = 0;
        for _ in 0..STEP_LIMIT {
            let (Some(&opcode), Some(&operand)) = (program.get(ip), program.get(ip + 1)) else {
                return Ok(out);
            };
            ip += 2;
            match opcode {
                0 => self.a = self.shifted(operand)?,
                1 => self.b ^= u64::from(operand),
                2 => self.b = self.combo(operand)? % 8,
                3 if self.a != 0 => ip = usize::from(operand),
                3 => {}
                4 => self.b ^= self.c,
                5 => out.push((self.combo(operand)? % 8) as u8),
                6 => self.b = self.shifted(operand)?,
                7 => self.c = self.shifted(operand)?,
                _ => return Err(SolveError::failed(format!("invalid opcode {opcode}"))),
            }
        }
        Err(SolveError::failed("program did not halt"))
    }
}

fn output(computer: &Computer, a: u64) -> Result<Vec<u8>, SolveError> {
    Cpu { a, ..computer.cpu }.run(&computer.program)
}

/// Smallest A whose output matches `program[from..]`, extending `prefix`
fn quine(computer: &Computer, from: usize, prefix: u64) -> Result<Option<u64>, SolveError> {
    let tail = &computer.program[from..];
    for digit in 0..8 {
        let a = prefix << 3 | digit;
        if output(computer, a)? != tail {
            continue;
        }
        if from == 0 {
            return Ok(Some(a));
        }
        if let Some(found) = quine(computer, from - 1, a)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut cpu = shared.cpu;
        Ok(cpu.run(&shared.program)?.iter().join(","))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let last = shared.program.len() - 1;
        quine(shared, last, 0)?
            .map(|a| a.to_string())
            .ok_or_else(|| SolveError::failed("no register value reproduces the program"))
    }
}

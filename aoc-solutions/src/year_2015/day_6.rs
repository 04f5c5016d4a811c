//! 2015 day 6: Probably a Fire Hazard

use crate::utils::parse::{invalid, lines_with, number};
use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

const SIDE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    On,
    Off,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    action: Action,
    from: (usize, usize),
    to: (usize, usize),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"^(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)$")
            .map_err(|e| invalid(e.into()))?;
        lines_with(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("unrecognised instruction {line:?}"))?;
            let action = match &caps[1] {
                "turn on" => Action::On,
                "turn off" => Action::Off,
                _ => Action::Toggle,
            };
            let from = (number(&caps[2])?, number(&caps[3])?);
            let to = (number(&caps[4])?, number(&caps[5])?);
            if to.0 >= SIDE || to.1 >= SIDE || from.0 > to.0 || from.1 > to.1 {
                bail!("rectangle {from:?}..{to:?} outside the grid");
            }
            Ok(Instruction { action, from, to })
        })
    }
}

fn run(instructions: &[Instruction], apply: impl Fn(Action, u32) -> u32) -> u32 {
    let mut lights = vec![0u32; SIDE * SIDE];
    for ins in instructions {
        for x in ins.from.0..=ins.to.0 {
            let row = &mut lights[x * SIDE..(x + 1) * SIDE];
            for light in &mut row[ins.from.1..=ins.to.1] {
                *light = apply(ins.action, *light);
            }
        }
    }
    lights.iter().sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lit = run(shared, |action, light| match action {
            Action::On => 1,
            Action::Off => 0,
            Action::Toggle => 1 - light,
        });
        Ok(lit.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let brightness = run(shared, |action, light| match action {
            Action::On => light + 1,
            Action::Off => light.saturating_sub(1),
            Action::Toggle => light + 2,
        });
        Ok(brightness.to_string())
    }
}

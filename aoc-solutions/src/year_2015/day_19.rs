//! 2015 day 19: Medicine for Rudolph
//!
//! Part 2 relies on the shape every real replacement list has: each rule
//! turns one atom into two, optionally wrapped as `X Rn .. (Y ..)* Ar`.
//! Counting atoms then gives the step count without any search.

use crate::utils::parse::{invalid, sections};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 19, tags = ["strings", "grammar"])]
pub struct Solver;

pub struct Machine<'a> {
    replacements: Vec<(&'a str, &'a str)>,
    molecule: &'a str,
}

impl AocParser for Solver {
    type SharedData<'a> = Machine<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (rules, molecule) = sections(input).map_err(invalid)?;
        let replacements = rules
            .lines()
            .map(|line| {
                line.trim()
                    .split_once(" => ")
                    .ok_or_else(|| anyhow!("bad replacement {line:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)?;
        let molecule = molecule.trim();
        if molecule.is_empty() {
            return Err(ParseError::MissingData("medicine molecule".into()));
        }
        Ok(Machine {
            replacements,
            molecule,
        })
    }
}

/// Atoms are an uppercase letter plus any trailing lowercase ones
fn atoms(molecule: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in molecule.char_indices().skip(1) {
        if c.is_ascii_uppercase() {
            out.push(&molecule[start..i]);
            start = i;
        }
    }
    if !molecule.is_empty() {
        out.push(&molecule[start..]);
    }
    out
}

fn calibrate(machine: &Machine<'_>) -> usize {
    let atoms = atoms(machine.molecule);
    let mut seen = HashSet::new();
    for (i, atom) in atoms.iter().enumerate() {
        for &(from, to) in &machine.replacements {
            if from == *atom {
                seen.insert(format!(
                    "{}{to}{}",
                    atoms[..i].concat(),
                    atoms[i + 1..].concat()
                ));
            }
        }
    }
    seen.len()
}

fn fabrication_steps(molecule: &str) -> usize {
    let atoms = atoms(molecule);
    let count = |name| atoms.iter().filter(|&&a| a == name).count();
    (atoms.len() - count("Rn") - count("Ar") - 2 * count("Y")).saturating_sub(1)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibrate(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fabrication_steps(shared.molecule).to_string())
    }
}

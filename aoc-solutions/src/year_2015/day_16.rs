//! 2015 day 16: Aunt Sue

use crate::utils::parse::{lines_with, number};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 16, tags = ["matching"])]
pub struct Solver;

/// What the MFCSAM read off the gift
const TICKER: [(&str, u32); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

pub struct Aunt<'a> {
    number: u32,
    things: Vec<(&'a str, u32)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Aunt<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let (name, rest) = line
                .split_once(": ")
                .ok_or_else(|| anyhow!("missing ':' after the name"))?;
            let id = number(name.trim_start_matches("Sue "))?;
            let things = rest
                .split(", ")
                .map(|thing| -> anyhow::Result<(&str, u32)> {
                    let (key, value) = thing
                        .split_once(": ")
                        .ok_or_else(|| anyhow!("bad property {thing:?}"))?;
                    Ok((key, number(value)?))
                })
                .collect::<anyhow::Result<_>>()?;
            Ok(Aunt { number: id, things })
        })
    }
}

fn find_aunt(
    aunts: &[Aunt<'_>],
    matches: impl Fn(&str, u32, u32) -> bool,
) -> Result<String, SolveError> {
    aunts
        .iter()
        .find(|aunt| {
            aunt.things.iter().all(|&(key, have)| {
                TICKER
                    .iter()
                    .find(|(k, _)| *k == key)
                    .is_none_or(|&(_, seen)| matches(key, have, seen))
            })
        })
        .map(|aunt| aunt.number.to_string())
        .ok_or_else(|| SolveError::failed("no aunt matches the ticker tape"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_aunt(shared, |_, have, seen| have == seen)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_aunt(shared, |key, have, seen| match key {
            "cats" | "trees" => have > seen,
            "pomeranians" | "goldfish" => have < seen,
            _ => have == seen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const AUNTS: &str = "\
Sue 1: cars: 9, akitas: 3, goldfish: 0
Sue 2: children: 3, cats: 7, goldfish: 5
Sue 3: cats: 8, trees: 4, goldfish: 2
Sue 4: perfumes: 1, vizslas: 1, cars: 2";

    #[test]
    fn exact_and_ranged_matches() {
        let mut shared = Solver::parse(AUNTS).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");
    }

    #[test]
    fn no_match_is_an_error() {
        let mut shared = Solver::parse("Sue 1: cars: 9").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}

//! 2015 day 5: Doesn't He Have Intern-Elves For This?

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::as_bytes)
            .collect())
    }
}

fn nice_old(s: &[u8]) -> bool {
    let vowels = s.iter().filter(|b| b"aeiou".contains(*b)).count();
    let double = s.iter().tuple_windows().any(|(a, b)| a == b);
    let forbidden = s
        .windows(2)
        .any(|w| matches!(w, b"ab" | b"cd" | b"pq" | b"xy"));
    vowels >= 3 && double && !forbidden
}

fn nice_new(s: &[u8]) -> bool {
    let repeated_pair = (0..s.len().saturating_sub(1))
        .any(|i| s[i + 2..].windows(2).any(|w| w == &s[i..i + 2]));
    let sandwich = s.windows(3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| nice_old(s)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| nice_new(s)).count().to_string())
    }
}

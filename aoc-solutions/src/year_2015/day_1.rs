//! 2015 day 1: Not Quite Lisp

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let steps = input.trim().as_bytes();
        match steps.iter().position(|b| !matches!(b, b'(' | b')')) {
            Some(i) => Err(ParseError::InvalidFormat(format!(
                "unexpected {:?} at offset {i}",
                steps[i] as char
            ))),
            None => Ok(steps),
        }
    }
}

fn floors(steps: &[u8]) -> impl Iterator<Item = i64> + '_ {
    steps.iter().scan(0i64, |floor, &b| {
        *floor += if b == b'(' { 1 } else { -1 };
        Some(*floor)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(floors(shared).last().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        floors(shared)
            .position(|floor| floor < 0)
            .map(|i| (i + 1).to_string())
            .ok_or_else(|| SolveError::failed("Santa never enters the basement"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn run(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn final_floor() {
        assert_eq!(run("(())", 1), "0");
        assert_eq!(run("))(((((", 1), "3");
        assert_eq!(run(")())())", 1), "-3");
    }

    #[test]
    fn first_basement_step() {
        assert_eq!(run(")", 2), "1");
        assert_eq!(run("()())", 2), "5");
        assert!(Solver::solve_part(&mut Solver::parse("((").unwrap(), 2).is_err());
    }

    #[test]
    fn rejects_other_characters() {
        assert!(Solver::parse("(x)").is_err());
    }
}

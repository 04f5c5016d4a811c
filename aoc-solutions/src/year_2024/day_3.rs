//! 2024 day 3: Mull It Over

use crate::utils::parse::{invalid, number};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["regex"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")
            .map_err(|e| invalid(e.into()))?;
        re.captures_iter(input)
            .map(|caps| -> anyhow::Result<Instruction> {
                Ok(match (caps.get(1), caps.get(2)) {
                    (Some(a), Some(b)) => {
                        Instruction::Mul(number(a.as_str())?, number(b.as_str())?)
                    }
                    _ if &caps[0] == "do()" => Instruction::Do,
                    _ => Instruction::Dont,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(invalid)
    }
}

fn sum_products(program: &[Instruction], conditionals: bool) -> u64 {
    let mut enabled = true;
    let mut sum = 0;
    for ins in program {
        match *ins {
            Instruction::Mul(a, b) if enabled => sum += a * b,
            Instruction::Mul(..) => {}
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = !conditionals,
        }
    }
    sum
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_products(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_products(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn plain_multiplications() {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(shared.len(), 4);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "161");
    }

    #[test]
    fn conditionals() {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "161");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "48");
    }

    #[test]
    fn operands_have_at_most_three_digits() {
        assert_eq!(Solver::parse("mul(1234,5)mul(123,4)").unwrap(), vec![Instruction::Mul(123, 4)]);
    }
}

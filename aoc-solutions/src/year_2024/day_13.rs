//! 2024 day 13: Claw Contraption
//!
//! Each machine is two linear equations in the press counts, solved with
//! Cramer's rule.

use crate::utils::parse::{ints_n, invalid};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["math", "linear-algebra"])]
pub struct Solver;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Clone, Copy)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .replace("\r\n", "\n")
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .enumerate()
            .map(|(i, block)| -> anyhow::Result<Machine> {
                let [ax, ay, bx, by, px, py] = ints_n::<i64, 6>(block)
                    .map_err(|e| e.context(format!("machine {}", i + 1)))?;
                Ok(Machine {
                    a: (ax, ay),
                    b: (bx, by),
                    prize: (px, py),
                })
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid)
    }
}

/// Tokens for the unique non-negative press counts reaching the prize
fn tokens(m: &Machine, offset: i64) -> Option<i64> {
    let (px, py) = (m.prize.0 + offset, m.prize.1 + offset);
    let det = m.a.0 * m.b.1 - m.a.1 * m.b.0;
    if det == 0 {
        return None;
    }
    let a_num = px * m.b.1 - py * m.b.0;
    let b_num = m.a.0 * py - m.a.1 * px;
    if a_num % det != 0 || b_num % det != 0 {
        return None;
    }
    let (a, b) = (a_num / det, b_num / det);
    (a >= 0 && b >= 0).then_some(3 * a + b)
}

fn total_tokens(machines: &[Machine], offset: i64) -> i64 {
    machines.iter().filter_map(|m| tokens(m, offset)).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared, PRIZE_OFFSET).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.len(), 4);
        assert_eq!(tokens(&shared[0], 0), Some(280));
        assert_eq!(tokens(&shared[1], 0), None);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "480");
    }

    #[test]
    fn far_prizes() {
        let machines = Solver::parse(EXAMPLE).unwrap();
        let winnable: Vec<bool> = machines
            .iter()
            .map(|m| tokens(m, PRIZE_OFFSET).is_some())
            .collect();
        assert_eq!(winnable, vec![false, true, false, true]);
    }

    #[test]
    fn short_blocks_are_rejected() {
        let err = Solver::parse("Button A: X+1, Y+2\nPrize: X=3, Y=4\n").unwrap_err();
        assert!(err.to_string().contains("machine 1"), "{err}");
    }
}

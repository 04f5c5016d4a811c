//! 2015 day 8: Matchsticks

use crate::utils::parse::lines_with;
use anyhow::{bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 8, tags = ["strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let line = line.trim().as_bytes();
            ensure!(
                line.len() >= 2 && line[0] == b'"' && line[line.len() - 1] == b'"',
                "string literal must be quoted"
            );
            Ok(line)
        })
    }
}

/// Characters the literal occupies in memory
fn memory_len(literal: &[u8]) -> anyhow::Result<usize> {
    let body = &literal[1..literal.len() - 1];
    let mut len = 0;
    let mut i = 0;
    while i < body.len() {
        i += match (body[i], body.get(i + 1)) {
            (b'\\', Some(b'\\' | b'"')) => 2,
            (b'\\', Some(b'x')) if i + 3 < body.len() => 4,
            (b'\\', _) => bail!("dangling escape at offset {i}"),
            _ => 1,
        };
        len += 1;
    }
    Ok(len)
}

fn encoded_len(literal: &[u8]) -> usize {
    2 + literal.len() + literal.iter().filter(|&&b| b == b'"' || b == b'\\').count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut overhead = 0;
        for literal in shared.iter() {
            let memory = memory_len(literal).map_err(|e| SolveError::SolveFailed(e.into()))?;
            overhead += literal.len() - memory;
        }
        Ok(overhead.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let growth: usize = shared.iter().map(|l| encoded_len(l) - l.len()).sum();
        Ok(growth.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = r#"""
"abc"
"aaa\"aaa"
"\x27"
"#;

    #[test]
    fn lengths() {
        assert_eq!(memory_len(br#""aaa\"aaa""#).unwrap(), 7);
        assert_eq!(memory_len(br#""\x27""#).unwrap(), 1);
        assert_eq!(encoded_len(br#""\x27""#), 11);
    }

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "12");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "19");
    }
}

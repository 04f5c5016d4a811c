//! 2016 day 2: Bathroom Security

use crate::utils::grid::{Direction, Grid};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 2, tags = ["grid", "simulation"])]
pub struct Solver;

const SQUARE: &str = "123\n456\n789";
const DIAMOND: &str = "  1  \n 234 \n56789\n ABC \n  D  ";

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<Direction>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.bytes()
                    .map(|b| {
                        Direction::from_byte(b).ok_or_else(|| {
                            ParseError::at_line(i + 1, format!("bad move {:?}", b as char))
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

fn code(layout: &str, moves: &[Vec<Direction>]) -> Result<String, SolveError> {
    let keypad = Grid::parse(layout).map_err(|e| SolveError::SolveFailed(e.into()))?;
    let mut at = keypad
        .find_byte(b'5')
        .ok_or_else(|| SolveError::failed("keypad has no 5"))?;
    let mut code = String::new();
    for line in moves {
        for &d in line {
            if let Some(next) = keypad.step(at, d).filter(|&p| keypad[p] != b' ') {
                at = next;
            }
        }
        code.push(keypad[at] as char);
    }
    Ok(code)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        code(SQUARE, shared)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        code(DIAMOND, shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn both_keypads() {
        let mut shared = Solver::parse("ULL\nRRDDD\nLURDL\nUUUUD\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1985");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "5DB3");
    }
}

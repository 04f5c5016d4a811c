//! 2016 day 3: Squares With Three Sides

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 3, tags = ["arithmetic"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<[u32; 3]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, ints_n::<u32, 3>)
    }
}

fn is_triangle([a, b, c]: [u32; 3]) -> bool {
    a + b > c && a + c > b && b + c > a
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|&&t| is_triangle(t)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::failed("row count is not a multiple of three"));
        }
        let valid = shared
            .chunks_exact(3)
            .flat_map(|rows| (0..3).map(move |col| [rows[0][col], rows[1][col], rows[2][col]]))
            .filter(|&t| is_triangle(t))
            .count();
        Ok(valid.to_string())
    }
}

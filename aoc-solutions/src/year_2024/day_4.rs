//! 2024 day 4: Ceres Search

use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["grid", "search"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input)
    }
}

/// Whether `word` reads from `start` in direction `(dr, dc)`
fn reads(grid: &Grid<u8>, start: Point, (dr, dc): (isize, isize), word: &[u8]) -> bool {
    word.iter().enumerate().all(|(i, &letter)| {
        let i = i as isize;
        grid.offset(start, dr * i, dc * i)
            .is_some_and(|p| grid[p] == letter)
    })
}

fn xmas_count(grid: &Grid<u8>) -> usize {
    const DIRECTIONS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
    grid.points()
        .filter(|&p| grid[p] == b'X')
        .map(|p| DIRECTIONS.iter().filter(|&&d| reads(grid, p, d, b"XMAS")).count())
        .sum()
}

/// `A` centres with `MAS` on both diagonals, either way round
fn x_mas_count(grid: &Grid<u8>) -> usize {
    let diagonal = |p: Point, a: (isize, isize), b: (isize, isize)| {
        match (grid.offset(p, a.0, a.1), grid.offset(p, b.0, b.1)) {
            (Some(x), Some(y)) => matches!((grid[x], grid[y]), (b'M', b'S') | (b'S', b'M')),
            _ => false,
        }
    };
    grid.points()
        .filter(|&p| grid[p] == b'A')
        .filter(|&p| diagonal(p, (-1, -1), (1, 1)) && diagonal(p, (-1, 1), (1, -1)))
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(xmas_count(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(x_mas_count(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "18");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }

    #[test]
    fn words_may_end_at_the_edge() {
        let grid = Solver::parse("XMAS\n....\n").unwrap();
        assert_eq!(xmas_count(&grid), 1);
        let grid = Solver::parse("SAMX\n").unwrap();
        assert_eq!(xmas_count(&grid), 1);
    }
}

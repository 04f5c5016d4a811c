//! 2023 day 13: Point of Incidence

use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 13, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Grid<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .replace("\r\n", "\n")
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(Grid::parse)
            .collect()
    }
}

/// Rows above a horizontal mirror whose reflection differs in exactly `smudges` cells
fn mirror_row(grid: &Grid<u8>, smudges: usize) -> Option<usize> {
    (1..grid.height()).find(|&split| {
        let span = split.min(grid.height() - split);
        let diff: usize = (0..span)
            .map(|k| {
                let (above, below) = (grid.row(split - 1 - k), grid.row(split + k));
                above.iter().zip(below).filter(|(a, b)| a != b).count()
            })
            .sum();
        diff == smudges
    })
}

fn transpose(grid: &Grid<u8>) -> Grid<u8> {
    let mut t = Grid::new(grid.height(), grid.width(), b'.');
    for (p, &b) in grid.iter() {
        t[Point::new(p.col, p.row)] = b;
    }
    t
}

fn summarize(patterns: &[Grid<u8>], smudges: usize) -> Result<usize, SolveError> {
    patterns
        .iter()
        .enumerate()
        .map(|(i, grid)| {
            if let Some(rows) = mirror_row(grid, smudges) {
                return Ok(100 * rows);
            }
            mirror_row(&transpose(grid), smudges)
                .ok_or_else(|| SolveError::failed(format!("pattern {} has no mirror", i + 1)))
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(summarize(shared, 0)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(summarize(shared, 1)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#";

    #[test]
    fn example_patterns() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.len(), 2);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "405");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "400");
    }

    #[test]
    fn no_mirror() {
        let mut shared = Solver::parse("#.\n..").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}

//! 2023 day 11: Cosmic Expansion

use crate::utils::grid::Grid;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["grid", "math"])]
pub struct Solver;

const OLDER_FACTOR: u64 = 1_000_000;

pub struct Image {
    rows: Vec<u64>,
    cols: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let galaxies: Vec<_> = grid
            .iter()
            .filter(|(_, b)| **b == b'#')
            .map(|(p, _)| p)
            .collect();
        let mut rows: Vec<u64> = galaxies.iter().map(|p| p.row as u64).collect();
        let mut cols: Vec<u64> = galaxies.iter().map(|p| p.col as u64).collect();
        rows.sort_unstable();
        cols.sort_unstable();
        Ok(Image { rows, cols })
    }
}

/// Sum of pairwise gaps along one sorted axis, empty lines stretched by `factor`
fn axis_distance(sorted: &[u64], factor: u64) -> u64 {
    let mut total = 0;
    let mut prefix = 0;
    let mut stretched_prev = 0;
    let mut prev = None;
    for (i, &c) in sorted.iter().enumerate() {
        let stretched = match prev {
            None => c,
            Some(p) => stretched_prev + (c - p) + c.saturating_sub(p + 1) * (factor - 1),
        };
        total += stretched * i as u64 - prefix;
        prefix += stretched;
        stretched_prev = stretched;
        prev = Some(c);
    }
    total
}

fn total_distance(image: &Image, factor: u64) -> u64 {
    axis_distance(&image.rows, factor) + axis_distance(&image.cols, factor)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_distance(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_distance(shared, OLDER_FACTOR).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....";

    #[test]
    fn expansion_factors() {
        let image = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(total_distance(&image, 2), 374);
        assert_eq!(total_distance(&image, 10), 1030);
        assert_eq!(total_distance(&image, 100), 8410);
    }

    #[test]
    fn gaps_between_galaxies() {
        assert_eq!(axis_distance(&[0, 0, 3], 1), 6);
        assert_eq!(axis_distance(&[0, 3], 2), 5);
    }
}

//! 2023 day 3: Gear Ratios

use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["grid"])]
pub struct Solver;

pub struct PartNumber {
    value: u32,
    /// Symbols touching the number, with the symbol byte
    symbols: Vec<(Point, u8)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<PartNumber>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let is_symbol = |b: u8| b != b'.' && !b.is_ascii_digit();
        let mut numbers = Vec::new();

        for row in 0..grid.height() {
            let mut col = 0;
            while col < grid.width() {
                if !grid.row(row)[col].is_ascii_digit() {
                    col += 1;
                    continue;
                }
                let start = col;
                let mut value = 0u32;
                while col < grid.width() && grid.row(row)[col].is_ascii_digit() {
                    value = value * 10 + u32::from(grid.row(row)[col] - b'0');
                    col += 1;
                }
                let mut symbols: Vec<(Point, u8)> = (start..col)
                    .flat_map(|c| grid.neighbours8(Point::new(row, c)))
                    .filter(|&p| is_symbol(grid[p]))
                    .map(|p| (p, grid[p]))
                    .collect();
                symbols.sort_unstable();
                symbols.dedup();
                numbers.push(PartNumber { value, symbols });
            }
        }
        Ok(numbers)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|n| !n.symbols.is_empty())
            .map(|n| n.value)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears: HashMap<Point, Vec<u32>> = HashMap::new();
        for n in shared.iter() {
            for &(p, _) in n.symbols.iter().filter(|(_, b)| *b == b'*') {
                gears.entry(p).or_default().push(n.value);
            }
        }
        let ratio: u64 = gears
            .values()
            .filter(|parts| parts.len() == 2)
            .map(|parts| u64::from(parts[0]) * u64::from(parts[1]))
            .sum();
        Ok(ratio.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    #[test]
    fn example_schematic() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4361");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "467835");
    }
}

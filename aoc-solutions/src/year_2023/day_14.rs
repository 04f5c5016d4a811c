//! 2023 day 14: Parabolic Reflector Dish
//!
//! A spin cycle is four tilts. The platform state repeats after a short
//! prefix, so the billionth state is found by skipping whole cycles.

use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 14, tags = ["grid", "simulation", "cycle-detection"])]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((p, &b)) = grid.iter().find(|(_, b)| !matches!(b, b'O' | b'#' | b'.')) {
            return Err(ParseError::at_line(
                p.row + 1,
                format!("unexpected {:?}", b as char),
            ));
        }
        Ok(grid)
    }
}

fn tilt_north(grid: &mut Grid<u8>) {
    for col in 0..grid.width() {
        let mut free = 0;
        for row in 0..grid.height() {
            let p = Point::new(row, col);
            match grid[p] {
                b'#' => free = row + 1,
                b'O' => {
                    grid[p] = b'.';
                    grid[Point::new(free, col)] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

/// Quarter turn clockwise, so the next tilt north tilts the old west
fn rotate(grid: &Grid<u8>) -> Grid<u8> {
    let mut out = Grid::new(grid.height(), grid.width(), b'.');
    for (p, &b) in grid.iter() {
        out[Point::new(p.col, grid.height() - 1 - p.row)] = b;
    }
    out
}

fn spin(grid: &Grid<u8>) -> Grid<u8> {
    let mut g = grid.clone();
    for _ in 0..4 {
        tilt_north(&mut g);
        g = rotate(&g);
    }
    g
}

fn north_load(grid: &Grid<u8>) -> usize {
    grid.iter()
        .filter(|(_, b)| **b == b'O')
        .map(|(p, _)| grid.height() - p.row)
        .sum()
}

/// Load after `cycles` spins, skipping ahead once a state repeats
fn load_after(grid: &Grid<u8>, cycles: usize) -> usize {
    let mut seen: HashMap<Grid<u8>, usize> = HashMap::new();
    let mut history = vec![grid.clone()];
    let mut current = grid.clone();
    for n in 1..=cycles {
        current = spin(&current);
        if let Some(&first) = seen.get(&current) {
            let period = n - first;
            tracing::debug!(first, period, "spin cycle repeats");
            let target = first + (cycles - first) % period;
            return north_load(&history[target]);
        }
        seen.insert(current.clone(), n);
        history.push(current.clone());
    }
    north_load(&current)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        tilt_north(&mut grid);
        Ok(north_load(&grid).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(load_after(shared, SPIN_CYCLES).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....";

    #[test]
    fn example_loads() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "136");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "64");
    }

    #[test]
    fn one_spin_matches_the_worked_example() {
        let after = "\
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....";
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(spin(&grid), Grid::parse(after).unwrap());
    }

    #[test]
    fn cycle_skip_matches_direct_simulation() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        let mut direct = grid.clone();
        for cycles in 0..40 {
            assert_eq!(load_after(&grid, cycles), north_load(&direct), "after {cycles}");
            direct = spin(&direct);
        }
    }
}

//! 2023 day 21: Step Counter
//!
//! On the real map the start row and column are open, so the reachable
//! count grows quadratically in whole map widths. Three breadth-first
//! samples pin down the quadratic.

use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 21, tags = ["grid", "bfs", "math"])]
pub struct Solver;

const GARDEN_STEPS: usize = 64;
const INFINITE_STEPS: usize = 26_501_365;

pub struct Garden {
    rocks: Grid<bool>,
    start: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find_byte(b'S')
            .ok_or_else(|| ParseError::MissingData("no starting position".into()))?;
        Ok(Garden {
            rocks: grid.map(|&b| b == b'#'),
            start,
        })
    }
}

/// Plots reachable in exactly `steps` steps on the map tiled forever
fn reachable(garden: &Garden, steps: usize) -> u64 {
    let (w, h) = (garden.rocks.width() as i64, garden.rocks.height() as i64);
    let is_rock = |r: i64, c: i64| {
        garden.rocks[Point::new(r.rem_euclid(h) as usize, c.rem_euclid(w) as usize)]
    };
    let start = (garden.start.row as i64, garden.start.col as i64);
    let mut seen = HashSet::from([start]);
    let mut frontier = vec![start];
    // plots at an even or odd distance, matching the parity of `steps`
    let mut count = u64::from(steps % 2 == 0);
    for step in 1..=steps {
        let mut next = Vec::new();
        for (r, c) in frontier {
            for (nr, nc) in [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)] {
                if !is_rock(nr, nc) && seen.insert((nr, nc)) {
                    next.push((nr, nc));
                }
            }
        }
        if step % 2 == steps % 2 {
            count += next.len() as u64;
        }
        frontier = next;
    }
    count
}

/// Quadratic extrapolation from samples at `rem`, `rem + size` and `rem + 2 * size`
fn extrapolated(garden: &Garden, steps: usize) -> Result<u64, SolveError> {
    let size = garden.rocks.width();
    if size != garden.rocks.height() {
        return Err(SolveError::failed("the garden must be square"));
    }
    let (n, rem) = ((steps / size) as u64, steps % size);
    if n < 2 {
        return Ok(reachable(garden, steps));
    }
    let [f0, f1, f2] = [0, 1, 2].map(|k| reachable(garden, rem + k * size) as i128);
    let n = i128::from(n);
    let value = f0 + n * (f1 - f0) + n * (n - 1) / 2 * (f2 - 2 * f1 + f0);
    u64::try_from(value).map_err(|e| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(reachable(shared, GARDEN_STEPS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(extrapolated(shared, INFINITE_STEPS)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........";

    #[test]
    fn example_garden() {
        let garden = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(reachable(&garden, 6), 16);
        assert_eq!(reachable(&garden, 10), 50);
        assert_eq!(reachable(&garden, 50), 1594);
        assert_eq!(reachable(&garden, 100), 6536);
    }

    #[test]
    fn extrapolation_matches_walking() {
        let open = Solver::parse(".....\n.....\n..S..\n.....\n.....").unwrap();
        for steps in [2 + 5 * 2, 2 + 5 * 6, 2 + 5 * 9] {
            let walked = reachable(&open, steps);
            assert_eq!(walked, (steps as u64 + 1).pow(2));
            assert_eq!(extrapolated(&open, steps).unwrap(), walked);
        }
    }
}

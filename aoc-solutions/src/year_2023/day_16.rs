//! 2023 day 16: The Floor Will Be Lava

use crate::utils::grid::{Direction, Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 16, tags = ["grid", "bfs", "parallel"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((p, &b)) = grid
            .iter()
            .find(|(_, b)| !matches!(b, b'.' | b'/' | b'\\' | b'|' | b'-'))
        {
            return Err(ParseError::at_line(
                p.row + 1,
                format!("unexpected {:?}", b as char),
            ));
        }
        Ok(grid)
    }
}

/// Directions a beam leaves `tile` in when it arrives heading `d`
fn redirect(tile: u8, d: Direction) -> (Direction, Option<Direction>) {
    use Direction::*;
    match (tile, d) {
        (b'/', North) => (East, None),
        (b'/', East) => (North, None),
        (b'/', South) => (West, None),
        (b'/', West) => (South, None),
        (b'\\', North) => (West, None),
        (b'\\', West) => (North, None),
        (b'\\', South) => (East, None),
        (b'\\', East) => (South, None),
        (b'|', East | West) => (North, Some(South)),
        (b'-', North | South) => (East, Some(West)),
        _ => (d, None),
    }
}

/// Every `(tile, heading)` the beam passes through, in visiting order.
/// A per-tile direction mask stops the beam from re-entering a state.
fn trace(grid: &Grid<u8>, start: Point, heading: Direction) -> Vec<(Point, Direction)> {
    let mut seen = Grid::new(grid.width(), grid.height(), 0u8);
    let mut visits = Vec::new();
    let mut stack = vec![(start, heading)];
    while let Some((p, d)) = stack.pop() {
        let bit = 1 << d.index();
        if seen[p] & bit != 0 {
            continue;
        }
        seen[p] |= bit;
        visits.push((p, d));
        let (first, second) = redirect(grid[p], d);
        for out in std::iter::once(first).chain(second) {
            if let Some(next) = grid.step(p, out) {
                stack.push((next, out));
            }
        }
    }
    visits
}

fn energized(grid: &Grid<u8>, start: Point, heading: Direction) -> usize {
    let mut lit = Grid::new(grid.width(), grid.height(), false);
    for (p, _) in trace(grid, start, heading) {
        lit[p] = true;
    }
    lit.cells().iter().filter(|&&on| on).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(energized(shared, Point::new(0, 0), Direction::East).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<u8> = shared;
        let (w, h) = (grid.width(), grid.height());
        let mut entries = Vec::with_capacity(2 * (w + h));
        for col in 0..w {
            entries.push((Point::new(0, col), Direction::South));
            entries.push((Point::new(h - 1, col), Direction::North));
        }
        for row in 0..h {
            entries.push((Point::new(row, 0), Direction::East));
            entries.push((Point::new(row, w - 1), Direction::West));
        }
        let best = entries
            .into_par_iter()
            .map(|(p, d)| energized(grid, p, d))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

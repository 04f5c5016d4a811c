//! 2015 day 18: Like a GIF For Your Yard

use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 18, tags = ["grid", "simulation"])]
pub struct Solver;

const STEPS: usize = 100;

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((p, &b)) = grid.iter().find(|(_, b)| !matches!(b, b'#' | b'.')) {
            return Err(ParseError::at_line(
                p.row + 1,
                format!("unexpected {:?}", b as char),
            ));
        }
        Ok(grid.map(|&b| b == b'#'))
    }
}

fn light_corners(grid: &mut Grid<bool>) {
    let (h, w) = (grid.height() - 1, grid.width() - 1);
    for p in [(0, 0), (0, w), (h, 0), (h, w)] {
        grid[Point::new(p.0, p.1)] = true;
    }
}

fn animate(start: &Grid<bool>, steps: usize, stuck_corners: bool) -> usize {
    let mut grid = start.clone();
    if stuck_corners {
        light_corners(&mut grid);
    }
    for _ in 0..steps {
        let mut next = Grid::new(grid.width(), grid.height(), false);
        for p in grid.points() {
            let on = grid.neighbours8(p).filter(|&n| grid[n]).count();
            next[p] = matches!((grid[p], on), (true, 2 | 3) | (false, 3));
        }
        if stuck_corners {
            light_corners(&mut next);
        }
        grid = next;
    }
    grid.cells().iter().filter(|&&on| on).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
.#.#.#
...##.
#....#
..#...
#.#..#
####..";

    #[test]
    fn example_animation() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(animate(&grid, 0, false), 15);
        assert_eq!(animate(&grid, 4, false), 4);
        assert_eq!(animate(&grid, 5, true), 17);
    }

    #[test]
    fn rejects_unknown_cells() {
        assert!(Solver::parse(".#\n#x").is_err());
    }
}

//! 2024 day 6: Guard Gallivant

use crate::utils::grid::{Direction, Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

pub struct Lab {
    obstacles: Grid<bool>,
    guard: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = Lab;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let guard = grid
            .find_byte(b'^')
            .ok_or_else(|| ParseError::MissingData("no guard on the map".into()))?;
        Ok(Lab {
            obstacles: grid.map(|&b| b == b'#'),
            guard,
        })
    }
}

enum Patrol {
    /// Cells visited before walking off the map
    Leaves(Vec<Point>),
    Loops,
}

/// Walks the guard, optionally with one extra obstacle
fn patrol(lab: &Lab, extra: Option<Point>) -> Patrol {
    let blocked = |p: Point| lab.obstacles[p] || extra == Some(p);
    // per-cell bitmask of headings already walked
    let mut seen = lab.obstacles.map(|_| 0u8);
    let mut order = Vec::new();
    let (mut at, mut dir) = (lab.guard, Direction::North);
    loop {
        let mask = 1 << dir.index();
        if seen[at] & mask != 0 {
            return Patrol::Loops;
        }
        if seen[at] == 0 {
            order.push(at);
        }
        seen[at] |= mask;
        match lab.obstacles.step(at, dir) {
            None => return Patrol::Leaves(order),
            Some(next) if blocked(next) => dir = dir.turn_right(),
            Some(next) => at = next,
        }
    }
}

fn route(lab: &Lab) -> Result<Vec<Point>, SolveError> {
    match patrol(lab, None) {
        Patrol::Leaves(cells) => Ok(cells),
        Patrol::Loops => Err(SolveError::failed("the guard never leaves the lab")),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(route(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lab: &Lab = shared;
        // Only cells on the original route can change it
        let loops = route(lab)?
            .into_par_iter()
            .filter(|&p| p != lab.guard)
            .filter(|&p| matches!(patrol(lab, Some(p)), Patrol::Loops))
            .count();
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "41");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn boxed_in_guard_loops() {
        let lab = Solver::parse(".#.\n#^#\n.#.\n").unwrap();
        assert!(matches!(patrol(&lab, None), Patrol::Loops));
        let mut shared = lab;
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}

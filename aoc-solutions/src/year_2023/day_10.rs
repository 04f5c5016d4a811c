//! 2023 day 10: Pipe Maze
//!
//! The loop is a lattice polygon, so the shoelace area and Pick's theorem
//! give the enclosed tile count without flood filling.

use crate::utils::grid::{Direction, Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["grid", "geometry"])]
pub struct Solver;

fn connects(pipe: u8, d: Direction) -> bool {
    use Direction::*;
    matches!(
        (pipe, d),
        (b'|', North | South)
            | (b'-', East | West)
            | (b'L', North | East)
            | (b'J', North | West)
            | (b'7', South | West)
            | (b'F', South | East)
    )
}

impl AocParser for Solver {
    /// Tiles of the main loop in walking order
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find_byte(b'S')
            .ok_or_else(|| ParseError::MissingData("no start tile".into()))?;
        let mut heading = Direction::ALL
            .into_iter()
            .find(|&d| {
                grid.step(start, d)
                    .is_some_and(|p| connects(grid[p], d.opposite()))
            })
            .ok_or_else(|| ParseError::InvalidFormat("start connects to nothing".into()))?;

        let mut path = vec![start];
        let mut at = start;
        loop {
            at = grid
                .step(at, heading)
                .ok_or_else(|| ParseError::InvalidFormat(format!("loop leaves the map at {at:?}")))?;
            if at == start {
                return Ok(path);
            }
            let came_from = heading.opposite();
            if !connects(grid[at], came_from) {
                return Err(ParseError::InvalidFormat(format!("loop breaks at {at:?}")));
            }
            heading = Direction::ALL
                .into_iter()
                .find(|&d| d != came_from && connects(grid[at], d))
                .ok_or_else(|| ParseError::InvalidFormat(format!("loop breaks at {at:?}")))?;
            path.push(at);
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((shared.len() / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let twice_area: i64 = shared
            .iter()
            .zip(shared.iter().cycle().skip(1))
            .map(|(a, b)| a.col as i64 * b.row as i64 - b.col as i64 * a.row as i64)
            .sum();
        let boundary = shared.len() as i64;
        let interior = twice_area.abs() / 2 - boundary / 2 + 1;
        Ok(interior.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn farthest_tile() {
        assert_eq!(solve(".....\n.S-7.\n.|.|.\n.L-J.\n.....", 1), "4");
        assert_eq!(solve("..F7.\n.FJ|.\nSJ.L7\n|F--J\nLJ...", 1), "8");
    }

    #[test]
    fn enclosed_tiles() {
        let squeezed = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........";
        assert_eq!(solve(squeezed, 2), "4");

        let larger = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";
        assert_eq!(solve(larger, 2), "8");
    }

    #[test]
    fn broken_loop() {
        assert!(Solver::parse("S-.\n...").is_err());
    }
}

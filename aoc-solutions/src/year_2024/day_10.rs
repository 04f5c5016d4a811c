//! 2024 day 10: Hoof It

use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "dfs"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((p, &b)) = grid.iter().find(|(_, b)| !b.is_ascii_digit() && **b != b'.') {
            return Err(ParseError::at_line(p.row + 1, format!("bad height {:?}", b as char)));
        }
        // impassable `.` cells never match a height
        Ok(grid.map(|&b| if b == b'.' { u8::MAX } else { b - b'0' }))
    }
}

/// Every summit reached by a uphill trail from `head`, once per trail
fn summits(map: &Grid<u8>, head: Point) -> Vec<Point> {
    let mut stack = vec![head];
    let mut ends = Vec::new();
    while let Some(p) = stack.pop() {
        if map[p] == 9 {
            ends.push(p);
            continue;
        }
        stack.extend(map.neighbours4(p).filter(|&n| map[n] == map[p] + 1));
    }
    ends
}

fn trailheads(map: &Grid<u8>) -> impl Iterator<Item = Vec<Point>> + '_ {
    map.iter()
        .filter(|&(_, &h)| h == 0)
        .map(|(p, _)| summits(map, p))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: usize = trailheads(shared).map(|ends| ends.iter().unique().count()).sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rating: usize = trailheads(shared).map(|ends| ends.len()).sum();
        Ok(rating.to_string())
    }
}

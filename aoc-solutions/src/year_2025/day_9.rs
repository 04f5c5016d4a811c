//! 2025 day 9: Movie Theater
//!
//! For the polygon part, coordinates are compressed so that every red tile
//! gets its own row and column with a gap row or column between neighbours.
//! Flooding from the border marks tiles outside the loop, and a prefix sum
//! over that mask tests each candidate rectangle in constant time.

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["geometry", "coordinate-compression"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<(u64, u64)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let tiles = lines_with(input, |line| ints_n::<u64, 2>(line).map(|[x, y]| (x, y)))?;
        if tiles.len() < 2 {
            return Err(ParseError::MissingData("need at least two red tiles".into()));
        }
        Ok(tiles)
    }
}

fn area((ax, ay): (u64, u64), (bx, by): (u64, u64)) -> u64 {
    (ax.abs_diff(bx) + 1) * (ay.abs_diff(by) + 1)
}

fn largest_rectangle(tiles: &[(u64, u64)]) -> u64 {
    tiles
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| area(a, b))
        .max()
        .unwrap_or(0)
}

/// Red tiles on a compressed grid, with outside cells counted by prefix sums
struct Floor {
    xs: Vec<u64>,
    ys: Vec<u64>,
    /// `outside[r][c]`: outside cells in rows `..r` and columns `..c`
    outside: Vec<Vec<u32>>,
}

impl Floor {
    fn new(tiles: &[(u64, u64)]) -> Self {
        let xs: Vec<u64> = tiles.iter().map(|t| t.0).sorted_unstable().dedup().collect();
        let ys: Vec<u64> = tiles.iter().map(|t| t.1).sorted_unstable().dedup().collect();
        let mut floor = Self {
            xs,
            ys,
            outside: Vec::new(),
        };

        // 0 unknown, 1 on the loop, 2 outside
        let mut cells = Grid::new(2 * floor.xs.len() + 1, 2 * floor.ys.len() + 1, 0u8);
        for (&a, &b) in tiles.iter().circular_tuple_windows() {
            let (from, to) = (floor.compress(a), floor.compress(b));
            for row in from.row.min(to.row)..=from.row.max(to.row) {
                for col in from.col.min(to.col)..=from.col.max(to.col) {
                    cells[Point::new(row, col)] = 1;
                }
            }
        }
        let mut stack = vec![Point::new(0, 0)];
        cells[Point::new(0, 0)] = 2;
        while let Some(p) = stack.pop() {
            let next: Vec<Point> = cells.neighbours4(p).filter(|&n| cells[n] == 0).collect();
            for n in next {
                cells[n] = 2;
                stack.push(n);
            }
        }

        let mut outside = vec![vec![0u32; cells.width() + 1]; cells.height() + 1];
        for row in 0..cells.height() {
            for col in 0..cells.width() {
                outside[row + 1][col + 1] = outside[row][col + 1] + outside[row + 1][col]
                    - outside[row][col]
                    + u32::from(cells[Point::new(row, col)] == 2);
            }
        }
        floor.outside = outside;
        floor
    }

    /// Compressed position of a red tile; tiles always sit on odd indices
    fn compress(&self, (x, y): (u64, u64)) -> Point {
        let col = self.xs.partition_point(|&v| v < x);
        let row = self.ys.partition_point(|&v| v < y);
        Point::new(2 * row + 1, 2 * col + 1)
    }

    fn is_inside(&self, a: (u64, u64), b: (u64, u64)) -> bool {
        let (p, q) = (self.compress(a), self.compress(b));
        let (r0, r1) = (p.row.min(q.row), p.row.max(q.row) + 1);
        let (c0, c1) = (p.col.min(q.col), p.col.max(q.col) + 1);
        let o = &self.outside;
        o[r1][c1] + o[r0][c0] == o[r0][c1] + o[r1][c0]
    }
}

fn largest_inside(tiles: &[(u64, u64)]) -> u64 {
    let floor = Floor::new(tiles);
    tiles
        .iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| floor.is_inside(a, b))
        .map(|(&a, &b)| area(a, b))
        .max()
        .unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_rectangle(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_inside(shared).to_string())
    }
}

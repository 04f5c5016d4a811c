//! 2023 day 23: A Long Walk
//!
//! Corridors collapse into weighted edges between junctions, then a
//! depth-first search over a visited bitmask finds the longest route.

use crate::utils::grid::{Direction, Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 23, tags = ["grid", "graph", "dfs"])]
pub struct Solver;

pub struct Trails {
    map: Grid<u8>,
    start: Point,
    end: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = Trails;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse(input)?;
        let gap = |row: usize| {
            map.row(row)
                .iter()
                .position(|&b| b == b'.')
                .map(|col| Point::new(row, col))
        };
        let start = gap(0).ok_or_else(|| ParseError::MissingData("no gap in top row".into()))?;
        let end = gap(map.height() - 1)
            .ok_or_else(|| ParseError::MissingData("no gap in bottom row".into()))?;
        Ok(Trails { map, start, end })
    }
}

struct Graph {
    /// `(node, steps)` reachable from each node
    edges: Vec<Vec<(usize, u32)>>,
    start: usize,
    end: usize,
}

impl Trails {
    fn open(&self, p: Point) -> bool {
        self.map[p] != b'#'
    }

    fn may_leave(&self, p: Point, d: Direction, slippery: bool) -> bool {
        match Direction::from_byte(self.map[p]) {
            Some(slope) if slippery => slope == d,
            _ => true,
        }
    }

    fn is_junction(&self, p: Point) -> bool {
        p == self.start
            || p == self.end
            || (self.open(p) && self.map.neighbours4(p).filter(|&n| self.open(n)).count() > 2)
    }

    fn graph(&self, slippery: bool) -> Result<Graph, SolveError> {
        let junctions: Vec<Point> = self.map.points().filter(|&p| self.is_junction(p)).collect();
        if junctions.len() > 64 {
            return Err(SolveError::failed(format!(
                "{} junctions do not fit a 64-bit visited set",
                junctions.len()
            )));
        }
        let index: HashMap<Point, usize> =
            junctions.iter().enumerate().map(|(i, &p)| (p, i)).collect();

        let edges = junctions
            .iter()
            .map(|&from| {
                Direction::ALL
                    .into_iter()
                    .filter_map(|d| self.follow(from, d, slippery))
                    .filter_map(|(to, steps)| index.get(&to).map(|&i| (i, steps)))
                    .collect()
            })
            .collect();
        Ok(Graph {
            edges,
            start: index[&self.start],
            end: index[&self.end],
        })
    }

    /// Walks a corridor from a junction until the next one
    fn follow(&self, from: Point, d: Direction, slippery: bool) -> Option<(Point, u32)> {
        if !self.may_leave(from, d, slippery) {
            return None;
        }
        let (mut prev, mut cur) = (from, self.map.step(from, d).filter(|&p| self.open(p))?);
        let mut steps = 1;
        while !self.is_junction(cur) {
            let (dir, next) = Direction::ALL
                .into_iter()
                .filter_map(|d| self.map.step(cur, d).map(|n| (d, n)))
                .find(|&(_, n)| n != prev && self.open(n))?;
            if !self.may_leave(cur, dir, slippery) {
                return None;
            }
            (prev, cur) = (cur, next);
            steps += 1;
        }
        Some((cur, steps))
    }
}

impl Graph {
    fn longest(&self) -> Option<u32> {
        // The last junction before the exit must head straight for it
        let penultimate: Vec<usize> = (0..self.edges.len())
            .filter(|&n| self.edges[n].iter().any(|&(to, _)| to == self.end))
            .collect();
        let exit = match penultimate.as_slice() {
            &[only] => only,
            _ => self.end,
        };
        let finish = self.edges[exit]
            .iter()
            .find(|&&(to, _)| to == self.end)
            .map_or(0, |&(_, steps)| steps);
        self.search(self.start, exit, 1 << self.start)
            .map(|len| len + finish)
    }

    fn search(&self, at: usize, exit: usize, visited: u64) -> Option<u32> {
        if at == exit {
            return Some(0);
        }
        self.edges[at]
            .iter()
            .filter(|&&(to, _)| visited & (1 << to) == 0)
            .filter_map(|&(to, steps)| {
                self.search(to, exit, visited | (1 << to))
                    .map(|rest| rest + steps)
            })
            .max()
    }
}

fn longest_hike(trails: &Trails, slippery: bool) -> Result<u32, SolveError> {
    trails
        .graph(slippery)?
        .longest()
        .ok_or_else(|| SolveError::failed("no route to the exit"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(longest_hike(shared, true)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(longest_hike(shared, false)?.to_string())
    }
}

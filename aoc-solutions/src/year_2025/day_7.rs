//! 2025 day 7: Laboratories

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["grid", "memoization"])]
pub struct Solver;

pub struct Manifold {
    splitters: Grid<bool>,
    start: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = Manifold;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        let start = grid
            .find_byte(b'S')
            .ok_or_else(|| ParseError::MissingData("no beam source `S`".into()))?;
        Ok(Manifold {
            splitters: grid.map(|&b| b == b'^'),
            start,
        })
    }
}

impl Manifold {
    /// First splitter strictly below `row` in `col`; `None` also for
    /// columns off the manifold, where the beam simply leaves
    fn next_splitter(&self, row: usize, col: isize) -> Option<usize> {
        let col = usize::try_from(col).ok().filter(|&c| c < self.splitters.width())?;
        (row + 1..self.splitters.height()).find(|&r| self.splitters[Point::new(r, col)])
    }

    /// Beams leaving a splitter at `(row, col)`
    fn split(row: usize, col: isize) -> [(usize, isize); 2] {
        [(row, col - 1), (row, col + 1)]
    }
}

fn splitters_hit(manifold: &Manifold) -> usize {
    let mut hit = HashSet::new();
    let mut seen = HashSet::new();
    let mut beams = vec![(manifold.start.row, manifold.start.col as isize)];
    while let Some((row, col)) = beams.pop() {
        if !seen.insert((row, col)) {
            continue;
        }
        if let Some(split_row) = manifold.next_splitter(row, col) {
            hit.insert((split_row, col));
            beams.extend(Manifold::split(split_row, col));
        }
    }
    hit.len()
}

/// Timelines from a beam heading down from `(row, col)`.
/// Columns are shifted by one so a beam just off either edge still has an index.
struct Timelines<'m> {
    manifold: &'m Manifold,
}

impl Timelines<'_> {
    fn stride(&self) -> usize {
        self.manifold.splitters.width() + 2
    }

    fn index(&self, row: usize, col: isize) -> usize {
        row * self.stride() + (col + 1) as usize
    }

    fn split_index(&self, index: usize) -> (usize, isize) {
        (index / self.stride(), (index % self.stride()) as isize - 1)
    }
}

impl DpProblem<usize, u64> for Timelines<'_> {
    fn deps(&self, index: &usize) -> Vec<usize> {
        let (row, col) = self.split_index(*index);
        match self.manifold.next_splitter(row, col) {
            Some(split_row) => Manifold::split(split_row, col)
                .into_iter()
                .map(|(r, c)| self.index(r, c))
                .collect(),
            None => vec![],
        }
    }

    fn compute(&self, _index: &usize, deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

fn timelines(manifold: &Manifold) -> u64 {
    let problem = Timelines { manifold };
    let start = problem.index(manifold.start.row, manifold.start.col as isize);
    let cache = DpCache::builder()
        .backend(VecBackend::with_capacity(problem.stride() * manifold.splitters.height()))
        .problem(problem)
        .build();
    cache.get(&start)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(splitters_hit(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(timelines(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "21");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "40");
    }

    #[test]
    fn beams_leaving_the_edge() {
        let manifold = Solver::parse("S.\n..\n^.\n..\n").unwrap();
        assert_eq!(splitters_hit(&manifold), 1);
        assert_eq!(timelines(&manifold), 2);
    }

    #[test]
    fn no_splitters() {
        let manifold = Solver::parse("..S..\n.....\n").unwrap();
        assert_eq!(splitters_hit(&manifold), 0);
        assert_eq!(timelines(&manifold), 1);
    }
}

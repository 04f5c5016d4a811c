//! 2023 day 17: Clumsy Crucible
//!
//! Dijkstra over `(tile, axis of the last run)`. Every edge is a whole
//! straight run followed by a turn, so run-length limits hold by
//! construction.

use crate::utils::grid::{Direction, Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["grid", "dijkstra"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((p, &b)) = grid.iter().find(|(_, b)| !b.is_ascii_digit()) {
            return Err(ParseError::at_line(
                p.row + 1,
                format!("expected a digit, found {:?}", b as char),
            ));
        }
        Ok(grid.map(|b| b - b'0'))
    }
}

/// A straight run of `len` tiles heading `dir`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    dir: Direction,
    len: usize,
}

#[derive(Debug, Clone, Copy)]
struct Crucible {
    min_run: usize,
    max_run: usize,
}

const CRUCIBLE: Crucible = Crucible {
    min_run: 1,
    max_run: 3,
};

const ULTRA_CRUCIBLE: Crucible = Crucible {
    min_run: 4,
    max_run: 10,
};

/// Least heat loss from the top-left to the bottom-right, with the runs taken
fn least_heat_loss(grid: &Grid<u8>, crucible: Crucible) -> Option<(u32, Vec<Run>)> {
    let (w, h) = (grid.width(), grid.height());
    let goal = Point::new(h - 1, w - 1);
    // state: cell index * 2 + (last run was vertical)
    let state = |p: Point, vertical: bool| (p.row * w + p.col) * 2 + usize::from(vertical);
    let mut dist = vec![u32::MAX; w * h * 2];
    let mut prev: Vec<Option<(usize, Run)>> = vec![None; w * h * 2];
    let mut queue = BinaryHeap::new();

    let start = Point::new(0, 0);
    for vertical in [false, true] {
        dist[state(start, vertical)] = 0;
        queue.push(Reverse((0u32, start, vertical)));
    }

    while let Some(Reverse((cost, p, vertical))) = queue.pop() {
        let from = state(p, vertical);
        if cost > dist[from] {
            continue;
        }
        if p == goal {
            let mut runs = Vec::new();
            let mut at = from;
            while let Some((before, run)) = prev[at] {
                runs.push(run);
                at = before;
            }
            runs.reverse();
            return Some((cost, runs));
        }
        // turn onto the other axis
        let turns = if vertical {
            [Direction::East, Direction::West]
        } else {
            [Direction::North, Direction::South]
        };
        for dir in turns {
            let mut at = p;
            let mut loss = cost;
            for len in 1..=crucible.max_run {
                let Some(next) = grid.step(at, dir) else {
                    break;
                };
                at = next;
                loss += u32::from(grid[at]);
                if len < crucible.min_run {
                    continue;
                }
                let to = state(at, dir.is_vertical());
                if loss < dist[to] {
                    dist[to] = loss;
                    prev[to] = Some((from, Run { dir, len }));
                    queue.push(Reverse((loss, at, dir.is_vertical())));
                }
            }
        }
    }
    None
}

fn solve_with(grid: &Grid<u8>, crucible: Crucible) -> Result<String, SolveError> {
    least_heat_loss(grid, crucible)
        .map(|(loss, _)| loss.to_string())
        .ok_or_else(|| SolveError::failed("the factory is unreachable"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, CRUCIBLE)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, ULTRA_CRUCIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    const UNFORTUNATE: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991";

    #[test]
    fn example_city() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "102");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "94");
    }

    #[test]
    fn ultra_crucible_cannot_stop_early() {
        let mut shared = Solver::parse(UNFORTUNATE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "71");
    }

    /// Replays the runs, checking limits, turns and the reported loss
    fn check_path(grid: &Grid<u8>, crucible: Crucible) -> Result<(), TestCaseError> {
        let Some((loss, runs)) = least_heat_loss(grid, crucible) else {
            return Ok(());
        };
        let mut at = Point::new(0, 0);
        let mut total = 0u32;
        for (i, run) in runs.iter().enumerate() {
            prop_assert!((crucible.min_run..=crucible.max_run).contains(&run.len));
            if i > 0 {
                prop_assert_ne!(run.dir.is_vertical(), runs[i - 1].dir.is_vertical());
            }
            for _ in 0..run.len {
                at = grid.step(at, run.dir).ok_or_else(|| TestCaseError::fail("left the map"))?;
                total += u32::from(grid[at]);
            }
        }
        prop_assert_eq!(at, Point::new(grid.height() - 1, grid.width() - 1));
        prop_assert_eq!(total, loss);
        Ok(())
    }

    #[test]
    fn example_paths_respect_run_limits() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        check_path(&grid, CRUCIBLE).unwrap();
        check_path(&grid, ULTRA_CRUCIBLE).unwrap();
    }

    proptest! {
        #[test]
        fn runs_stay_within_limits(
            (w, h, cells) in (2usize..9, 2usize..9)
                .prop_flat_map(|(w, h)| (Just(w), Just(h), prop::collection::vec(1u8..10, w * h))),
        ) {
            let text = cells
                .chunks(w)
                .map(|row| row.iter().map(|d| char::from(b'0' + d)).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
            let grid = Solver::parse(&text).unwrap();
            prop_assert_eq!(grid.height(), h);
            check_path(&grid, CRUCIBLE)?;
            check_path(&grid, ULTRA_CRUCIBLE)?;
        }
    }
}

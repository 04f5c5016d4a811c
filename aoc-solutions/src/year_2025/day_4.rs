//! 2025 day 4: Printing Department

use crate::utils::grid::Grid;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid", "simulation"])]
pub struct Solver;

/// A forklift reaches a roll with fewer neighbouring rolls than this
const CROWDED: usize = 4;

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input)?;
        if let Some((p, &b)) = grid.iter().find(|(_, b)| !matches!(b, b'@' | b'.')) {
            return Err(ParseError::at_line(p.row + 1, format!("unexpected {:?}", b as char)));
        }
        Ok(grid.map(|&b| b == b'@'))
    }
}

fn neighbour_counts(rolls: &Grid<bool>) -> Grid<usize> {
    let mut counts = rolls.map(|_| 0);
    for p in rolls.points() {
        counts[p] = rolls.neighbours8(p).filter(|&n| rolls[n]).count();
    }
    counts
}

fn accessible(rolls: &Grid<bool>) -> usize {
    let counts = neighbour_counts(rolls);
    rolls
        .iter()
        .filter(|&(p, &roll)| roll && counts[p] < CROWDED)
        .count()
}

/// Removes accessible rolls until none are left; each removal may free its
/// neighbours, so they are re-checked as their counts drop
fn removable(rolls: &Grid<bool>) -> usize {
    let mut rolls = rolls.clone();
    let mut counts = neighbour_counts(&rolls);
    let mut queue: Vec<_> = rolls
        .iter()
        .filter(|&(p, &roll)| roll && counts[p] < CROWDED)
        .map(|(p, _)| p)
        .collect();
    let mut removed = 0;
    while let Some(p) = queue.pop() {
        if !rolls[p] {
            continue;
        }
        rolls[p] = false;
        removed += 1;
        let neighbours: Vec<_> = rolls.neighbours8(p).filter(|&n| rolls[n]).collect();
        for n in neighbours {
            counts[n] -= 1;
            if counts[n] == CROWDED - 1 {
                queue.push(n);
            }
        }
    }
    removed
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(accessible(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(removable(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "43");
    }

    /// Removes every accessible roll at once, round after round
    fn removable_by_rounds(rolls: &Grid<bool>) -> usize {
        let mut rolls = rolls.clone();
        let mut removed = 0;
        loop {
            let counts = neighbour_counts(&rolls);
            let round: Vec<_> = rolls
                .iter()
                .filter(|&(p, &roll)| roll && counts[p] < CROWDED)
                .map(|(p, _)| p)
                .collect();
            if round.is_empty() {
                return removed;
            }
            removed += round.len();
            for p in round {
                rolls[p] = false;
            }
        }
    }

    #[test]
    fn queue_matches_rounds() {
        let rolls = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(removable(&rolls), removable_by_rounds(&rolls));
        let solid = Solver::parse("@@@@@\n@@@@@\n@@@@@\n").unwrap();
        assert_eq!(removable(&solid), 15);
        assert_eq!(accessible(&solid), 4);
    }
}

//! 2023 day 12: Hot Springs
//!
//! Counting is a memoised walk over `(position, groups placed)`. Each state
//! either leaves the current spring operational or starts the next damaged
//! group there.

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};
use crate::utils::parse::{ints, lines_with};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 12, tags = ["dynamic-programming", "memoization"])]
pub struct Solver;

const UNFOLD: usize = 5;

#[derive(Debug, Clone)]
pub struct Row {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Row {
    fn unfolded(&self) -> Row {
        Row {
            springs: std::iter::repeat_n(self.springs.as_slice(), UNFOLD)
                .collect_vec()
                .join(&b'?'),
            groups: self.groups.repeat(UNFOLD),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Row>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let (springs, groups) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("missing group list"))?;
            ensure!(
                springs.bytes().all(|b| matches!(b, b'.' | b'#' | b'?')),
                "unexpected spring in {springs:?}"
            );
            Ok(Row {
                springs: springs.as_bytes().to_vec(),
                groups: ints(groups),
            })
        })
    }
}

/// State `pos * (groups + 1) + placed`
struct Arrangements<'r> {
    row: &'r Row,
}

impl Arrangements<'_> {
    fn index(&self, pos: usize, placed: usize) -> usize {
        pos * (self.row.groups.len() + 1) + placed
    }

    fn split(&self, index: usize) -> (usize, usize) {
        let stride = self.row.groups.len() + 1;
        (index / stride, index % stride)
    }

    /// Whether the next group fits starting at `pos`
    fn fits(&self, pos: usize, placed: usize) -> Option<usize> {
        let springs = &self.row.springs;
        let len = *self.row.groups.get(placed)?;
        let end = pos + len;
        let fits = end <= springs.len()
            && !springs[pos..end].contains(&b'.')
            && springs.get(end) != Some(&b'#');
        fits.then_some(end)
    }
}

impl DpProblem<usize, u64> for Arrangements<'_> {
    fn deps(&self, index: &usize) -> Vec<usize> {
        let (pos, placed) = self.split(*index);
        let springs = &self.row.springs;
        let Some(&spring) = springs.get(pos) else {
            return vec![];
        };
        let mut deps = Vec::with_capacity(2);
        if spring != b'#' {
            deps.push(self.index(pos + 1, placed));
        }
        if spring != b'.' {
            if let Some(end) = self.fits(pos, placed) {
                // the spring after a group must be operational
                deps.push(self.index((end + 1).min(springs.len()), placed + 1));
            }
        }
        deps
    }

    fn compute(&self, index: &usize, deps: Vec<u64>) -> u64 {
        let (pos, placed) = self.split(*index);
        if pos >= self.row.springs.len() {
            u64::from(placed == self.row.groups.len())
        } else {
            deps.iter().sum()
        }
    }
}

fn arrangements(row: &Row) -> u64 {
    let problem = Arrangements { row };
    let start = problem.index(0, 0);
    let cache = DpCache::builder()
        .backend(VecBackend::with_capacity(
            (row.springs.len() + 1) * (row.groups.len() + 1),
        ))
        .problem(problem)
        .build();
    cache.get(&start)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(arrangements).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(|r| arrangements(&r.unfolded())).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1";

    #[test]
    fn example_rows() {
        let rows = Solver::parse(EXAMPLE).unwrap();
        let counts: Vec<u64> = rows.iter().map(arrangements).collect();
        assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);
        let unfolded: Vec<u64> = rows.iter().map(|r| arrangements(&r.unfolded())).collect();
        assert_eq!(unfolded, vec![1, 16384, 1, 16, 2500, 506250]);
    }

    #[test]
    fn example_totals() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "21");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "525152");
    }

    #[test]
    fn unfolding_joins_with_unknowns() {
        let row = Solver::parse(".# 1").unwrap().remove(0);
        let unfolded = row.unfolded();
        assert_eq!(unfolded.springs, b".#?.#?.#?.#?.#".to_vec());
        assert_eq!(unfolded.groups, vec![1; 5]);
    }

    fn group_sizes(springs: &[u8]) -> Vec<usize> {
        springs
            .split(|&b| b == b'.')
            .filter(|run| !run.is_empty())
            .map(<[u8]>::len)
            .collect()
    }

    /// Tries every assignment of the unknown springs
    fn brute_force(row: &Row) -> u64 {
        let unknown: Vec<usize> = row.springs.iter().positions(|&b| b == b'?').collect();
        (0u32..1 << unknown.len())
            .filter(|mask| {
                let mut springs = row.springs.clone();
                for (bit, &i) in unknown.iter().enumerate() {
                    springs[i] = if mask & (1 << bit) != 0 { b'#' } else { b'.' };
                }
                group_sizes(&springs) == row.groups
            })
            .count() as u64
    }

    proptest! {
        #[test]
        fn memo_matches_brute_force(
            springs in prop::collection::vec(prop::sample::select(vec![b'.', b'#', b'?']), 0..12),
            groups in prop::collection::vec(1usize..4, 0..4),
        ) {
            let row = Row { springs, groups };
            prop_assert_eq!(arrangements(&row), brute_force(&row));
        }

        #[test]
        fn consistent_groups_count_at_least_once(
            springs in prop::collection::vec(prop::sample::select(vec![b'.', b'#']), 1..12),
            hide in prop::collection::vec(any::<bool>(), 12),
        ) {
            // hiding springs behind `?` never loses the literal arrangement
            let groups = group_sizes(&springs);
            let hidden = springs
                .iter()
                .zip(&hide)
                .map(|(&b, &h)| if h { b'?' } else { b })
                .collect();
            let literal = Row { springs, groups: groups.clone() };
            prop_assert_eq!(arrangements(&literal), 1);
            let row = Row { springs: hidden, groups };
            prop_assert!(arrangements(&row) >= 1);
            prop_assert_eq!(arrangements(&row), brute_force(&row));
        }
    }
}

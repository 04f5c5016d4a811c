//! 2025 day 5: Cafeteria

use crate::utils::parse::{invalid, number, sections};
use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::ops::RangeInclusive;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["ranges"])]
pub struct Solver;

pub struct Inventory {
    /// Fresh ranges, sorted and merged so none overlap or touch
    fresh: Vec<RangeInclusive<u64>>,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let parse = || -> anyhow::Result<Inventory> {
            let (ranges, ids) = sections(input)?;
            let ranges = ranges
                .lines()
                .map(|line| -> anyhow::Result<RangeInclusive<u64>> {
                    let (lo, hi) = line
                        .split_once('-')
                        .with_context(|| format!("expected `first-last`, found {line:?}"))?;
                    let (lo, hi) = (number(lo)?, number(hi)?);
                    ensure!(lo <= hi, "empty range {line:?}");
                    Ok(lo..=hi)
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            let available = ids
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(number)
                .collect::<anyhow::Result<_>>()?;
            Ok(Inventory {
                fresh: merge(ranges),
                available,
            })
        };
        parse().map_err(invalid)
    }
}

fn merge(mut ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges.sort_unstable_by_key(|r| *r.start());
    let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                *last = *last.start()..=*last.end().max(range.end());
            }
            _ => merged.push(range),
        }
    }
    merged
}

impl Inventory {
    fn is_fresh(&self, id: u64) -> bool {
        let i = self.fresh.partition_point(|r| *r.end() < id);
        self.fresh.get(i).is_some_and(|r| r.contains(&id))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fresh = shared.available.iter().filter(|&&id| shared.is_fresh(id)).count();
        Ok(fresh.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.fresh.iter().map(|r| r.end() - r.start() + 1).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.fresh, vec![3..=5, 10..=20]);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "14");
    }

    #[test]
    fn merging() {
        assert_eq!(merge(vec![5..=8, 1..=4, 20..=20, 2..=3]), vec![1..=8, 20..=20]);
        assert_eq!(merge(vec![1..=10, 2..=3]), vec![1..=10]);
        assert_eq!(merge(vec![]), Vec::<RangeInclusive<u64>>::new());
    }
}

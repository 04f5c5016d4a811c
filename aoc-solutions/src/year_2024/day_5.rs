//! 2024 day 5: Print Queue

use crate::utils::parse::{ints, ints_n, invalid, sections};
use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["sorting"])]
pub struct Solver;

pub struct Queue {
    /// `(before, after)` page pairs
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Queue;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let parse = || -> anyhow::Result<Queue> {
            let (rules, updates) = sections(input)?;
            let rules = rules
                .lines()
                .map(|line| ints_n::<u32, 2>(line).map(|[a, b]| (a, b)))
                .collect::<anyhow::Result<_>>()
                .context("ordering rules")?;
            let updates = updates
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| -> anyhow::Result<Vec<u32>> {
                    let pages = ints::<u32>(line);
                    ensure!(pages.len() % 2 == 1, "update {line:?} has no middle page");
                    Ok(pages)
                })
                .collect::<anyhow::Result<_>>()?;
            Ok(Queue { rules, updates })
        };
        parse().map_err(invalid)
    }
}

impl Queue {
    fn order(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, pages: &[u32]) -> bool {
        pages.is_sorted_by(|&a, &b| self.order(a, b) != Ordering::Greater)
    }
}

fn middle(pages: &[u32]) -> u32 {
    pages[pages.len() / 2]
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .updates
            .iter()
            .filter(|u| shared.is_ordered(u))
            .map(|u| middle(u))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .updates
            .iter()
            .filter(|u| !shared.is_ordered(u))
            .map(|u| {
                let mut fixed = u.clone();
                fixed.sort_by(|&a, &b| shared.order(a, b));
                middle(&fixed)
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "143");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "123");
    }

    #[test]
    fn fixing_an_update() {
        let queue = Solver::parse(EXAMPLE).unwrap();
        let mut pages = vec![97, 13, 75, 29, 47];
        assert!(!queue.is_ordered(&pages));
        pages.sort_by(|&a, &b| queue.order(a, b));
        assert_eq!(pages, vec![97, 75, 47, 29, 13]);
    }
}

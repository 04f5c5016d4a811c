//! 2023 day 7: Camel Cards

use crate::utils::parse::{lines_with, number};
use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["sorting"])]
pub struct Solver;

const JACK: u8 = 11;
const JOKER: u8 = 1;

#[derive(Debug, Clone)]
pub struct Hand {
    /// Card ranks 2..=14, jacks as 11
    cards: [u8; 5],
    bid: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let (cards, bid) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("missing bid"))?;
            ensure!(cards.len() == 5, "a hand has five cards");
            let mut ranks = [0; 5];
            for (slot, c) in ranks.iter_mut().zip(cards.bytes()) {
                *slot = match c {
                    b'2'..=b'9' => c - b'0',
                    b'T' => 10,
                    b'J' => JACK,
                    b'Q' => 12,
                    b'K' => 13,
                    b'A' => 14,
                    _ => bail!("unknown card {:?}", c as char),
                };
            }
            Ok(Hand {
                cards: ranks,
                bid: number(bid)?,
            })
        })
    }
}

/// Sorted group sizes, largest first, with jokers joining the largest group
fn shape(cards: &[u8; 5]) -> Vec<usize> {
    let jokers = cards.iter().filter(|&&c| c == JOKER).count();
    let mut groups: Vec<usize> = cards
        .iter()
        .filter(|&&c| c != JOKER)
        .counts()
        .into_values()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect();
    match groups.first_mut() {
        Some(largest) => *largest += jokers,
        None => groups.push(jokers),
    }
    groups
}

fn winnings(hands: &[Hand], jokers: bool) -> u64 {
    hands
        .iter()
        .map(|hand| {
            let cards = hand
                .cards
                .map(|c| if jokers && c == JACK { JOKER } else { c });
            ((shape(&cards), cards), hand.bid)
        })
        .sorted_unstable_by(|a, b| a.0.cmp(&b.0))
        .enumerate()
        .map(|(rank, (_, bid))| (rank as u64 + 1) * bid)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winnings(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483";

    #[test]
    fn example_hands() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6440");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "5905");
    }

    #[test]
    fn jokers_join_the_largest_group() {
        assert_eq!(shape(&[JOKER; 5]), vec![5]);
        assert_eq!(shape(&[13, 10, JOKER, JOKER, 10]), vec![4, 1]);
        assert_eq!(shape(&[2, 3, 4, 5, 6]), vec![1, 1, 1, 1, 1]);
    }
}

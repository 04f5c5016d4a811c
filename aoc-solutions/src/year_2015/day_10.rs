//! 2015 day 10: Elves Look, Elves Say

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 10, tags = ["strings", "simulation"])]
pub struct Solver;

pub struct Sequence {
    digits: Vec<u8>,
    /// Rounds already applied to `digits`
    rounds: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Sequence;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(format!(
                "expected a digit string, got {trimmed:?}"
            )));
        }
        Ok(Sequence {
            digits: trimmed.bytes().map(|b| b - b'0').collect(),
            rounds: 0,
        })
    }
}

fn look_and_say(digits: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(digits.len() * 2);
    for (count, digit) in digits.iter().dedup_with_count() {
        next.extend(count.to_string().bytes().map(|b| b - b'0'));
        next.push(*digit);
    }
    next
}

/// Length after `rounds` rounds; later calls continue from earlier ones
fn length_after(seq: &mut Sequence, rounds: usize) -> usize {
    while seq.rounds < rounds {
        seq.digits = look_and_say(&seq.digits);
        seq.rounds += 1;
    }
    seq.digits.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(length_after(shared, 40).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(length_after(shared, 50).to_string())
    }
}

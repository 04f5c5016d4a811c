//! 2023 day 6: Wait For It

use crate::utils::parse::{ints, invalid};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["math"])]
pub struct Solver;

pub struct Races<'a> {
    times: &'a str,
    records: &'a str,
}

impl AocParser for Solver {
    type SharedData<'a> = Races<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().filter(|l| !l.trim().is_empty());
        let times = lines.next().ok_or_else(|| invalid(anyhow!("missing times")))?;
        let records = lines
            .next()
            .ok_or_else(|| invalid(anyhow!("missing distances")))?;
        let check = || -> anyhow::Result<()> {
            ensure!(times.starts_with("Time:"), "first line must be times");
            ensure!(records.starts_with("Distance:"), "second line must be distances");
            ensure!(
                ints::<u64>(times).len() == ints::<u64>(records).len(),
                "every race needs a record"
            );
            Ok(())
        };
        check().map_err(invalid)?;
        Ok(Races { times, records })
    }
}

/// Hold times `t` in `0..=time` with `t * (time - t) > record`
fn ways_to_win(time: u64, record: u64) -> u64 {
    let disc = (time * time).checked_sub(4 * record);
    let Some(disc) = disc else { return 0 };
    let root = (disc as f64).sqrt();
    let mut lo = ((time as f64 - root) / 2.0).floor() as u64;
    let mut hi = ((time as f64 + root) / 2.0).ceil() as u64;
    // float rounding can land a step off either way
    while lo <= time && lo * (time - lo) <= record {
        lo += 1;
    }
    while hi > 0 && (hi > time || hi * (time - hi) <= record) {
        hi -= 1;
    }
    if hi >= lo { hi - lo + 1 } else { 0 }
}

fn joined(line: &str) -> Result<u64, SolveError> {
    line.chars()
        .filter(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .map_err(|e: std::num::ParseIntError| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = ints::<u64>(shared.times)
            .into_iter()
            .zip(ints::<u64>(shared.records))
            .map(|(t, d)| ways_to_win(t, d))
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(ways_to_win(joined(shared.times)?, joined(shared.records)?).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200\n";

    #[test]
    fn single_races() {
        assert_eq!(ways_to_win(7, 9), 4);
        assert_eq!(ways_to_win(15, 40), 8);
        assert_eq!(ways_to_win(30, 200), 9);
        assert_eq!(ways_to_win(4, 4), 0);
        assert_eq!(ways_to_win(3, 100), 0);
    }

    #[test]
    fn example_races() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "288");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "71503");
    }

    #[test]
    fn matches_brute_force() {
        for time in 0..60 {
            for record in 0..400 {
                let brute = (0..=time).filter(|t| t * (time - t) > record).count() as u64;
                assert_eq!(ways_to_win(time, record), brute, "time {time} record {record}");
            }
        }
    }
}

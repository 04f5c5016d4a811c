//! 2015 day 14: Reindeer Olympics

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 14, tags = ["simulation"])]
pub struct Solver;

pub const RACE_SECONDS: u32 = 2503;

#[derive(Debug, Clone, Copy)]
pub struct Reindeer {
    speed: u32,
    fly: u32,
    rest: u32,
}

impl Reindeer {
    fn distance_at(&self, t: u32) -> u32 {
        let period = self.fly + self.rest;
        let flying = (t / period) * self.fly + (t % period).min(self.fly);
        flying * self.speed
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Reindeer>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let [speed, fly, rest] = ints_n::<u32, 3>(line)?;
            anyhow::ensure!(fly + rest > 0, "reindeer never moves");
            Ok(Reindeer { speed, fly, rest })
        })
    }
}

fn furthest(herd: &[Reindeer], seconds: u32) -> u32 {
    herd.iter().map(|r| r.distance_at(seconds)).max().unwrap_or(0)
}

fn most_points(herd: &[Reindeer], seconds: u32) -> u32 {
    let mut points = vec![0; herd.len()];
    for t in 1..=seconds {
        let positions: Vec<u32> = herd.iter().map(|r| r.distance_at(t)).collect();
        let lead = positions.iter().copied().max().unwrap_or(0);
        for (score, _) in points.iter_mut().zip(&positions).filter(|(_, p)| **p == lead) {
            *score += 1;
        }
    }
    points.into_iter().max().unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(furthest(shared, RACE_SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(most_points(shared, RACE_SECONDS).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.
Dancer can fly 16 km/s for 11 seconds, but then must rest for 162 seconds.";

    #[test]
    fn race_of_one_thousand_seconds() {
        let herd = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(herd[0].distance_at(1000), 1120);
        assert_eq!(herd[1].distance_at(1000), 1056);
        assert_eq!(furthest(&herd, 1000), 1120);
        assert_eq!(most_points(&herd, 1000), 689);
    }
}

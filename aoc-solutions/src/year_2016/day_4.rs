//! 2016 day 4: Security Through Obscurity

use crate::utils::parse::{invalid, lines_with, number};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 4, tags = ["strings"])]
pub struct Solver;

const TARGET_ROOM: &str = "northpole object storage";

pub struct Room<'a> {
    name: &'a str,
    sector: u32,
    checksum: &'a str,
}

impl Room<'_> {
    fn is_real(&self) -> bool {
        let counts = self.name.bytes().filter(|&b| b != b'-').counts();
        let expected: String = counts
            .into_iter()
            .sorted_by(|(a, ca), (b, cb)| cb.cmp(ca).then(a.cmp(b)))
            .take(5)
            .map(|(b, _)| b as char)
            .collect();
        expected == self.checksum
    }

    fn decrypt(&self) -> String {
        let shift = (self.sector % 26) as u8;
        self.name
            .bytes()
            .map(|b| match b {
                b'-' => ' ',
                _ => ((b - b'a' + shift) % 26 + b'a') as char,
            })
            .collect()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Room<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"^([a-z-]+)-(\d+)\[([a-z]{5})\]$").map_err(|e| invalid(e.into()))?;
        lines_with(input, |line| {
            let caps = re
                .captures(line.trim())
                .ok_or_else(|| anyhow!("bad room {line:?}"))?;
            let (_, [name, sector, checksum]) = caps.extract();
            Ok(Room {
                name,
                sector: number(sector)?,
                checksum,
            })
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared.iter().filter(|r| r.is_real()).map(|r| r.sector).sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .filter(|r| r.is_real())
            .find(|r| r.decrypt() == TARGET_ROOM)
            .map(|r| r.sector.to_string())
            .ok_or_else(|| SolveError::failed("no room holds the North Pole objects"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
aaaaa-bbb-z-y-x-123[abxyz]
a-b-c-d-e-f-g-h-987[abcde]
not-a-real-room-404[oarel]
totally-real-room-200[decoy]";

    #[test]
    fn real_sector_sum() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1514");
    }

    #[test]
    fn shift_cipher() {
        let rooms = Solver::parse("qzmt-zixmtkozy-ivhz-343[zimth]").unwrap();
        assert_eq!(rooms[0].decrypt(), "very encrypted name");
    }
}

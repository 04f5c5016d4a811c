//! 2015 day 4: The Ideal Stocking Stuffer
//!
//! Brute-force MD5 search, fanned out over rayon in fixed-size chunks so the
//! lowest match still wins.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 4, tags = ["hashing", "brute-force", "parallel"])]
pub struct Solver;

pub struct SharedData<'a> {
    key: &'a str,
    five_zeros: Option<u64>,
}

const CHUNK: u64 = 1 << 14;

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("secret key".into()));
        }
        Ok(SharedData {
            key,
            five_zeros: None,
        })
    }
}

fn has_leading_zeros(key: &str, n: u64, zeros: usize) -> bool {
    let digest = md5::compute(format!("{key}{n}"));
    let bytes = digest.0;
    bytes[..zeros / 2].iter().all(|&b| b == 0) && (zeros % 2 == 0 || bytes[zeros / 2] < 0x10)
}

fn lowest_number(key: &str, zeros: usize, from: u64) -> Option<u64> {
    (from..u64::MAX).step_by(CHUNK as usize).find_map(|start| {
        (start..start.saturating_add(CHUNK))
            .into_par_iter()
            .find_first(|&n| has_leading_zeros(key, n, zeros))
    })
}

fn five_zeros(shared: &mut SharedData<'_>) -> Result<u64, SolveError> {
    if let Some(n) = shared.five_zeros {
        return Ok(n);
    }
    let n = lowest_number(shared.key, 5, 1).ok_or_else(|| SolveError::failed("no hash found"))?;
    shared.five_zeros = Some(n);
    Ok(n)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(five_zeros(shared)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // six zeros imply five, so the search can resume there
        let start = five_zeros(shared)?;
        lowest_number(shared.key, 6, start)
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::failed("no hash found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_prefix_check() {
        assert!(has_leading_zeros("abcdef", 609043, 5));
        assert!(!has_leading_zeros("abcdef", 609042, 5));
        assert!(!has_leading_zeros("abcdef", 609043, 6));
    }

    #[test]
    fn lowest_five_zero_hash() {
        assert_eq!(lowest_number("abcdef", 5, 609_000), Some(609043));
        assert_eq!(lowest_number("pqrstuv", 5, 1_048_000), Some(1048970));
    }
}

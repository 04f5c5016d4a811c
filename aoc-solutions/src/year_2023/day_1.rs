//! 2023 day 1: Trebuchet?!

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["strings"])]
pub struct Solver;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.lines().map(str::trim).filter(|l| !l.is_empty()).collect())
    }
}

/// Digit starting at byte `i`; spelled-out words only when `words` is set.
/// Words may overlap, so `eightwo` holds both 8 and 2.
fn digit_at(line: &str, i: usize, words: bool) -> Option<u32> {
    let rest = &line.as_bytes()[i..];
    if rest[0].is_ascii_digit() {
        return Some(u32::from(rest[0] - b'0'));
    }
    if !words {
        return None;
    }
    WORDS
        .iter()
        .position(|w| rest.starts_with(w.as_bytes()))
        .map(|d| d as u32 + 1)
}

fn calibration(lines: &[&str], words: bool) -> Result<u32, SolveError> {
    lines
        .iter()
        .map(|line| -> Result<u32, SolveError> {
            let mut digits = (0..line.len()).filter_map(|i| digit_at(line, i, words));
            let first = digits
                .next()
                .ok_or_else(|| SolveError::failed(format!("no digit in {line:?}")))?;
            let last = digits.last().unwrap_or(first);
            Ok(first * 10 + last)
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const DIGITS: &str = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet";

    const SPELLED: &str = "\
two1nine
eightwo3
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen";

    #[test]
    fn digits_only() {
        let mut shared = Solver::parse(DIGITS).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "142");
    }

    #[test]
    fn spelled_out_digits() {
        let mut shared = Solver::parse(SPELLED).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "281");
        let mut no_digits = Solver::parse("abc").unwrap();
        assert!(Solver::solve_part(&mut no_digits, 1).is_err());
    }

    #[test]
    fn overlapping_words() {
        assert_eq!(calibration(&["eightwo"], true).unwrap(), 82);
        assert_eq!(calibration(&["oneight"], true).unwrap(), 18);
    }
}

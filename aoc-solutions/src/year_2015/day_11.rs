//! 2015 day 11: Corporate Policy

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 11, tags = ["strings"])]
pub struct Solver;

pub struct Password {
    current: Vec<u8>,
    /// Part 1's answer, the starting point for part 2
    first: Option<Vec<u8>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Password;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pw = input.trim();
        if pw.is_empty() || !pw.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "password must be lowercase letters: {pw:?}"
            )));
        }
        Ok(Password {
            current: pw.as_bytes().to_vec(),
            first: None,
        })
    }
}

fn is_confusing(b: u8) -> bool {
    matches!(b, b'i' | b'o' | b'l')
}

fn is_valid(pw: &[u8]) -> bool {
    let straight = pw.windows(3).any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1);
    let mut pairs = Vec::new();
    let mut i = 0;
    while i + 1 < pw.len() {
        if pw[i] == pw[i + 1] {
            if !pairs.contains(&pw[i]) {
                pairs.push(pw[i]);
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    straight && pairs.len() >= 2 && !pw.iter().copied().any(is_confusing)
}

fn increment(pw: &mut [u8]) {
    // jump past a confusing letter in one go
    if let Some(pos) = pw.iter().position(|&b| is_confusing(b)) {
        pw[pos] += 1;
        pw[pos + 1..].fill(b'a');
        return;
    }
    for b in pw.iter_mut().rev() {
        if *b == b'z' {
            *b = b'a';
        } else {
            *b += 1;
            if is_confusing(*b) {
                *b += 1;
            }
            return;
        }
    }
}

fn next_password(pw: &[u8]) -> Vec<u8> {
    let mut next = pw.to_vec();
    loop {
        increment(&mut next);
        if is_valid(&next) {
            return next;
        }
    }
}

fn first(shared: &mut Password) -> Vec<u8> {
    shared
        .first
        .get_or_insert_with(|| next_password(&shared.current))
        .clone()
}

fn render(pw: Vec<u8>) -> Result<String, SolveError> {
    String::from_utf8(pw).map_err(|e| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        render(first(shared))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        render(next_password(&first(shared)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn validity_rules() {
        assert!(!is_valid(b"hijklmmn"));
        assert!(!is_valid(b"abbceffg"));
        assert!(!is_valid(b"abbcegjk"));
        assert!(is_valid(b"abcdffaa"));
    }

    #[test]
    fn next_valid_passwords() {
        assert_eq!(next_password(b"abcdefgh"), b"abcdffaa");
        assert_eq!(next_password(b"ghijklmn"), b"ghjaabcc");
    }

    #[test]
    fn second_password_follows_the_first() {
        let mut shared = Solver::parse("abcdefgh").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "abcdffaa");
        assert_eq!(
            Solver::solve_part(&mut shared, 2).unwrap(),
            String::from_utf8(next_password(b"abcdffaa")).unwrap()
        );
    }
}

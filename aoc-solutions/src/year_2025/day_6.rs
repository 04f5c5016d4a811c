//! 2025 day 6: Trash Compactor
//!
//! Problems are separated by columns of spaces. Humans read each problem's
//! numbers along the rows; cephalopods read them down the columns.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing", "strings"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

#[derive(Debug)]
struct Problem {
    op: Op,
    columns: std::ops::Range<usize>,
}

#[derive(Debug)]
pub struct Worksheet {
    /// Digit rows padded with spaces to a common width
    rows: Vec<Vec<u8>>,
    problems: Vec<Problem>,
}

impl AocParser for Solver {
    type SharedData<'a> = Worksheet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines: Vec<&[u8]> = input
            .lines()
            .map(|l| l.trim_end_matches('\r').as_bytes())
            .filter(|l| !l.iter().all(u8::is_ascii_whitespace))
            .collect();
        let ops = lines
            .pop()
            .ok_or_else(|| ParseError::MissingData("empty worksheet".into()))?;
        if lines.is_empty() {
            return Err(ParseError::MissingData("no numbers on the worksheet".into()));
        }
        let width = lines.iter().chain([&ops]).map(|l| l.len()).max().unwrap_or(0);
        let rows: Vec<Vec<u8>> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                match line.iter().find(|b| !b.is_ascii_digit() && **b != b' ') {
                    Some(&b) => Err(ParseError::at_line(i + 1, format!("unexpected {:?}", b as char))),
                    None => {
                        let mut row = line.to_vec();
                        row.resize(width, b' ');
                        Ok(row)
                    }
                }
            })
            .collect::<Result<_, _>>()?;

        let blank = |col: usize| rows.iter().all(|r| r[col] == b' ');
        let mut problems = Vec::new();
        let mut col = 0;
        while col < width {
            if blank(col) {
                col += 1;
                continue;
            }
            let start = col;
            while col < width && !blank(col) {
                col += 1;
            }
            let under = ops.get(start..col.min(ops.len())).unwrap_or_default();
            let op = match under.iter().find(|b| **b != b' ') {
                Some(b'+') => Op::Add,
                Some(b'*') => Op::Mul,
                other => {
                    return Err(ParseError::at_line(
                        rows.len() + 1,
                        format!("no operator under columns {start}..{col}, found {other:?}"),
                    ));
                }
            };
            problems.push(Problem {
                op,
                columns: start..col,
            });
        }
        Ok(Worksheet { rows, problems })
    }
}

fn digits_value(digits: impl Iterator<Item = u8>) -> Option<u64> {
    digits
        .filter(u8::is_ascii_digit)
        .fold(None, |acc, d| Some(acc.unwrap_or(0) * 10 + u64::from(d - b'0')))
}

impl Problem {
    fn apply(&self, values: impl Iterator<Item = u64>) -> u64 {
        match self.op {
            Op::Add => values.sum(),
            Op::Mul => values.product(),
        }
    }
}

fn grand_total(sheet: &Worksheet, by_column: bool) -> u64 {
    sheet
        .problems
        .iter()
        .map(|p| {
            if by_column {
                p.apply(p.columns.clone().filter_map(|col| {
                    digits_value(sheet.rows.iter().map(|r| r[col]))
                }))
            } else {
                p.apply(sheet.rows.iter().filter_map(|r| {
                    digits_value(r[p.columns.clone()].iter().copied())
                }))
            }
        })
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grand_total(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grand_total(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    // rows keep their trailing spaces
    const EXAMPLE: &str = concat!(
        "123 328  51 64 \n",
        " 45 64  387 23 \n",
        "  6 98  215 314\n",
        "*   +   *   +  \n",
    );

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.problems.len(), 4);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4277556");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3263827");
    }

    #[test]
    fn trimmed_rows_are_padded() {
        let sheet = Solver::parse("12 3\n4  56\n+  *").unwrap();
        assert_eq!(sheet.problems[1].columns, 3..5);
        assert_eq!(grand_total(&sheet, false), 12 + 4 + 3 * 56);
        assert_eq!(grand_total(&sheet, true), 14 + 2 + 35 * 6);
    }

    #[test]
    fn missing_operator() {
        assert!(Solver::parse("1 2\n+").is_err());
    }
}

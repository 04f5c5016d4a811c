//! 2023 day 15: Lens Library

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 15, tags = ["hashing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Remove,
    Insert(u8),
}

#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    raw: &'a str,
    label: &'a str,
    op: Op,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|raw| {
                let raw = raw.trim();
                if let Some(label) = raw.strip_suffix('-') {
                    return Ok(Step {
                        raw,
                        label,
                        op: Op::Remove,
                    });
                }
                let (label, focal) = raw
                    .split_once('=')
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad step {raw:?}")))?;
                let focal = focal
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad focal length in {raw:?}")))?;
                Ok(Step {
                    raw,
                    label,
                    op: Op::Insert(focal),
                })
            })
            .collect()
    }
}

fn hash(s: &str) -> usize {
    s.bytes().fold(0, |h, b| (h + b as usize) * 17 % 256)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|s| hash(s.raw)).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
        for step in shared.iter() {
            let lenses = &mut boxes[hash(step.label)];
            let slot = lenses.iter().position(|(l, _)| *l == step.label);
            match (step.op, slot) {
                (Op::Remove, Some(i)) => {
                    lenses.remove(i);
                }
                (Op::Remove, None) => {}
                (Op::Insert(f), Some(i)) => lenses[i].1 = f,
                (Op::Insert(f), None) => lenses.push((step.label, f)),
            }
        }
        let power: usize = boxes
            .iter()
            .enumerate()
            .flat_map(|(b, lenses)| {
                lenses
                    .iter()
                    .enumerate()
                    .map(move |(slot, &(_, f))| (b + 1) * (slot + 1) * f as usize)
            })
            .sum();
        Ok(power.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

    #[test]
    fn hash_of_hash() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn"), 0);
        assert_eq!(hash("qp"), 1);
    }

    #[test]
    fn example_sequence() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1320");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "145");
    }

    #[test]
    fn rejects_bad_steps() {
        assert!(Solver::parse("rn=x").is_err());
        assert!(Solver::parse("rn").is_err());
    }
}

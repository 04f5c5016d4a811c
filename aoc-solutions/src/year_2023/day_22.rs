//! 2023 day 22: Sand Slabs

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashMap, VecDeque};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 22, tags = ["simulation", "graph"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
struct Brick {
    lo: [u32; 3],
    hi: [u32; 3],
}

/// Who rests on whom once every brick has settled
#[derive(Debug)]
pub struct Stack {
    supports: Vec<Vec<usize>>,
    supported_by: Vec<Vec<usize>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Stack;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut bricks = lines_with(input, |line| {
            let (a, b) = line
                .split_once('~')
                .ok_or_else(|| anyhow::anyhow!("expected `x,y,z~x,y,z`"))?;
            let (a, b) = (ints_n::<u32, 3>(a)?, ints_n::<u32, 3>(b)?);
            Ok(Brick {
                lo: [0, 1, 2].map(|i| a[i].min(b[i])),
                hi: [0, 1, 2].map(|i| a[i].max(b[i])),
            })
        })?;
        bricks.sort_by_key(|b| b.lo[2]);
        Ok(settle(&bricks))
    }
}

/// Drops bricks lowest first onto a height map of `(top z, brick)` columns
fn settle(bricks: &[Brick]) -> Stack {
    let mut tops: HashMap<(u32, u32), (u32, usize)> = HashMap::new();
    let mut supports = vec![Vec::new(); bricks.len()];
    let mut supported_by = vec![Vec::new(); bricks.len()];

    for (id, brick) in bricks.iter().enumerate() {
        let columns: Vec<(u32, u32)> = (brick.lo[0]..=brick.hi[0])
            .flat_map(|x| (brick.lo[1]..=brick.hi[1]).map(move |y| (x, y)))
            .collect();
        let floor = columns
            .iter()
            .filter_map(|c| tops.get(c).map(|&(z, _)| z))
            .max()
            .unwrap_or(0);

        let mut below: Vec<usize> = columns
            .iter()
            .filter_map(|c| tops.get(c))
            .filter(|&&(z, _)| z == floor)
            .map(|&(_, other)| other)
            .collect();
        below.sort_unstable();
        below.dedup();
        for &other in &below {
            supports[other].push(id);
        }
        supported_by[id] = below;

        let top = floor + 1 + brick.hi[2] - brick.lo[2];
        for c in columns {
            tops.insert(c, (top, id));
        }
    }
    Stack {
        supports,
        supported_by,
    }
}

impl Stack {
    fn is_safe(&self, brick: usize) -> bool {
        self.supports[brick]
            .iter()
            .all(|&above| self.supported_by[above].len() > 1)
    }

    /// Bricks other than `brick` that fall once it is gone
    fn chain_reaction(&self, brick: usize) -> usize {
        let mut fallen = vec![false; self.supports.len()];
        fallen[brick] = true;
        let mut queue = VecDeque::from([brick]);
        let mut count = 0;
        while let Some(current) = queue.pop_front() {
            for &above in &self.supports[current] {
                if !fallen[above] && self.supported_by[above].iter().all(|&s| fallen[s]) {
                    fallen[above] = true;
                    count += 1;
                    queue.push_back(above);
                }
            }
        }
        count
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = (0..shared.supports.len()).filter(|&b| shared.is_safe(b)).count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = (0..shared.supports.len())
            .map(|b| shared.chain_reaction(b))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "7");
    }

    #[test]
    fn safe_bricks_cause_no_chain_reaction() {
        let stack = Solver::parse(EXAMPLE).unwrap();
        for brick in 0..stack.supports.len() {
            assert_eq!(stack.is_safe(brick), stack.chain_reaction(brick) == 0);
        }
    }

    #[test]
    fn vertical_tower_collapses() {
        let stack = Solver::parse("0,0,1~0,0,1\n0,0,5~0,0,6\n0,0,9~0,0,9\n").unwrap();
        assert_eq!(stack.supported_by[1], vec![0]);
        assert_eq!(stack.chain_reaction(0), 2);
        assert_eq!(stack.chain_reaction(2), 0);
    }
}

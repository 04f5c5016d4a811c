//! 2025 day 8: Playground
//!
//! Kruskal-style: junction box pairs are connected shortest first, with a
//! disjoint-set forest tracking circuits.

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["graph", "union-find"])]
pub struct Solver;

const CONNECTIONS: usize = 1000;

pub struct Playground {
    boxes: Vec<[i64; 3]>,
    /// Box index pairs, shortest straight-line distance first
    pairs: Vec<(usize, usize)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Playground;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let boxes = lines_with(input, ints_n::<i64, 3>)?;
        let dist = |(a, b): (usize, usize)| -> i64 {
            (0..3).map(|k| (boxes[a][k] - boxes[b][k]).pow(2)).sum()
        };
        let pairs = (0..boxes.len())
            .tuple_combinations()
            .sorted_by_cached_key(|&pair| dist(pair))
            .collect();
        Ok(Playground { boxes, pairs })
    }
}

struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Circuits {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Whether `a` and `b` were on different circuits
    fn connect(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.root(a), self.root(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.count -= 1;
        true
    }
}

/// Product of the three largest circuits after `connections` pairs
fn largest_circuits(playground: &Playground, connections: usize) -> usize {
    let mut circuits = Circuits::new(playground.boxes.len());
    for &(a, b) in playground.pairs.iter().take(connections) {
        circuits.connect(a, b);
    }
    let roots: Vec<usize> = (0..playground.boxes.len()).filter(|&x| circuits.root(x) == x).collect();
    roots
        .into_iter()
        .map(|r| circuits.size[r])
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .product()
}

/// The pair whose connection joins everything into one circuit
fn final_connection(playground: &Playground) -> Option<(usize, usize)> {
    let mut circuits = Circuits::new(playground.boxes.len());
    playground
        .pairs
        .iter()
        .copied()
        .find(|&(a, b)| circuits.connect(a, b) && circuits.count == 1)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_circuits(shared, CONNECTIONS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b) = final_connection(shared)
            .ok_or_else(|| SolveError::failed("fewer than two junction boxes"))?;
        Ok((shared.boxes[a][0] * shared.boxes[b][0]).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.pairs[0], (0, 19));
        assert_eq!(largest_circuits(&shared, 10), 40);
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "25272");
    }

    #[test]
    fn circuits_merge() {
        let mut circuits = Circuits::new(4);
        assert!(circuits.connect(0, 1));
        assert!(circuits.connect(2, 3));
        assert!(!circuits.connect(1, 0));
        assert!(circuits.connect(1, 3));
        assert_eq!(circuits.count, 1);
        let root = circuits.root(2);
        assert_eq!(circuits.size[root], 4);
    }
}

//! 2024 day 8: Resonant Collinearity

use crate::utils::grid::{Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["grid", "geometry"])]
pub struct Solver;

pub struct City {
    map: Grid<u8>,
    /// Antenna positions per frequency
    antennas: HashMap<u8, Vec<Point>>,
}

impl AocParser for Solver {
    type SharedData<'a> = City;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse(input)?;
        let antennas = map
            .iter()
            .filter(|(_, b)| b.is_ascii_alphanumeric())
            .map(|(p, &b)| (b, p))
            .into_group_map();
        Ok(City { map, antennas })
    }
}

fn gcd(a: isize, b: isize) -> isize {
    crate::utils::math::gcd(a.unsigned_abs() as u64, b.unsigned_abs() as u64) as isize
}

/// Antinodes of every ordered antenna pair `(a, b)` of one frequency.
/// Plain antinodes sit one spacing beyond `b`; harmonics cover the whole
/// line from `a` through `b` to the edge.
fn antinodes(city: &City, harmonics: bool) -> usize {
    let mut found = HashSet::new();
    for positions in city.antennas.values() {
        for (&a, &b) in positions.iter().tuple_combinations() {
            for (from, to) in [(a, b), (b, a)] {
                let dr = to.row as isize - from.row as isize;
                let dc = to.col as isize - from.col as isize;
                if harmonics {
                    let g = gcd(dr, dc);
                    let (sr, sc) = (dr / g, dc / g);
                    let mut at = Some(from);
                    while let Some(p) = at {
                        found.insert(p);
                        at = city.map.offset(p, sr, sc);
                    }
                } else if let Some(p) = city.map.offset(to, dr, dc) {
                    found.insert(p);
                }
            }
        }
    }
    found.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(antinodes(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(antinodes(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "34");
    }

    #[test]
    fn harmonics_fill_gaps_between_distant_antennas() {
        let city = Solver::parse("a....\n.....\n....a\n").unwrap();
        assert_eq!(antinodes(&city, false), 0);
        let city = Solver::parse("a...a\n").unwrap();
        assert_eq!(antinodes(&city, true), 5);
    }
}

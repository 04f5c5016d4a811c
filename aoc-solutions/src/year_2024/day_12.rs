//! 2024 day 12: Garden Groups
//!
//! A region has as many sides as it has corners, so the bulk discount
//! price counts corners instead of tracing edges.

use crate::utils::grid::{Direction, Grid, Point};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    area: usize,
    perimeter: usize,
    sides: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Region>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(regions(&Grid::parse(input)?))
    }
}

fn regions(garden: &Grid<u8>) -> Vec<Region> {
    let same = |p: Point, dr: isize, dc: isize| {
        garden.offset(p, dr, dc).is_some_and(|q| garden[q] == garden[p])
    };
    let mut seen = garden.map(|_| false);
    let mut regions = Vec::new();
    for start in garden.points() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut region = Region::default();
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            region.area += 1;
            for d in Direction::ALL {
                let (dr, dc) = d.delta();
                match garden.step(p, d).filter(|&q| garden[q] == garden[p]) {
                    Some(q) if !seen[q] => {
                        seen[q] = true;
                        stack.push(q);
                    }
                    Some(_) => {}
                    None => region.perimeter += 1,
                }
                // corner between `d` and the next direction clockwise
                let (er, ec) = d.turn_right().delta();
                let (a, b) = (same(p, dr, dc), same(p, er, ec));
                if (!a && !b) || (a && b && !same(p, dr + er, dc + ec)) {
                    region.sides += 1;
                }
            }
        }
        regions.push(region);
    }
    regions
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.iter().map(|r| r.area * r.sides).sum();
        Ok(price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn small_garden() {
        let mut shared = Solver::parse("AAAA\nBBCD\nBBCC\nEEEC\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "140");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "80");
    }

    #[test]
    fn nested_regions() {
        let mut shared = Solver::parse("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "772");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "436");
    }

    #[test]
    fn e_shape_sides() {
        let regions = Solver::parse("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE\n").unwrap();
        assert_eq!(regions[0], Region { area: 17, perimeter: 36, sides: 12 });
        let price: usize = regions.iter().map(|r| r.area * r.sides).sum();
        assert_eq!(price, 236);
    }

    #[test]
    fn larger_example() {
        let input = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1930");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1206");
    }
}

//! 2024 day 15: Warehouse Woes

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::parse::{invalid, sections};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, tags = ["grid", "simulation"])]
pub struct Solver;

pub struct Warehouse {
    map: Grid<u8>,
    moves: Vec<Direction>,
}

impl AocParser for Solver {
    type SharedData<'a> = Warehouse;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (map, moves) = sections(input).map_err(invalid)?;
        let map = Grid::parse(map)?;
        if map.find_byte(b'@').is_none() {
            return Err(ParseError::MissingData("no robot in the warehouse".into()));
        }
        let moves = moves
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| {
                match b {
                    b'^' | b'>' | b'v' | b'<' => Direction::from_byte(b),
                    _ => None,
                }
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad move {:?}", b as char)))
            })
            .collect::<Result<_, _>>()?;
        Ok(Warehouse { map, moves })
    }
}

/// Every box doubles in width, and so does everything else
fn widen(map: &Grid<u8>) -> Result<Grid<u8>, ParseError> {
    let text: String = (0..map.height())
        .map(|row| {
            let mut line: String = map
                .row(row)
                .iter()
                .map(|&b| match b {
                    b'O' => "[]",
                    b'@' => "@.",
                    b'#' => "##",
                    _ => "..",
                })
                .collect();
            line.push('\n');
            line
        })
        .collect();
    Grid::parse(&text)
}

/// Pushes the robot once; the move is dropped when anything hits a wall
fn push(map: &mut Grid<u8>, robot: Point, dir: Direction) -> Point {
    let mut moving = vec![robot];
    let mut queued = HashSet::from([robot]);
    let mut i = 0;
    while i < moving.len() {
        let p = moving[i];
        i += 1;
        let Some(next) = map.step(p, dir) else {
            return robot;
        };
        let mut ahead = vec![next];
        // a wide box moves as one piece when pushed up or down
        if dir.is_vertical() {
            match map[next] {
                b'[' => ahead.extend(map.step(next, Direction::East)),
                b']' => ahead.extend(map.step(next, Direction::West)),
                _ => {}
            }
        }
        for q in ahead {
            match map[q] {
                b'#' => return robot,
                b'.' => {}
                _ => {
                    if queued.insert(q) {
                        moving.push(q);
                    }
                }
            }
        }
    }

    let contents: Vec<u8> = moving.iter().map(|&p| map[p]).collect();
    for &p in &moving {
        map[p] = b'.';
    }
    for (&p, &b) in moving.iter().zip(&contents) {
        if let Some(to) = map.step(p, dir) {
            map[to] = b;
        }
    }
    map.step(robot, dir).unwrap_or(robot)
}

fn gps_after_moves(mut map: Grid<u8>, moves: &[Direction]) -> Result<usize, SolveError> {
    let mut robot = map
        .find_byte(b'@')
        .ok_or_else(|| SolveError::failed("no robot in the warehouse"))?;
    for &dir in moves {
        robot = push(&mut map, robot, dir);
    }
    Ok(map
        .iter()
        .filter(|(_, b)| matches!(b, b'O' | b'['))
        .map(|(p, _)| 100 * p.row + p.col)
        .sum())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(gps_after_moves(shared.map.clone(), &shared.moves)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let wide = widen(&shared.map).map_err(|e| SolveError::SolveFailed(e.into()))?;
        Ok(gps_after_moves(wide, &shared.moves)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const WIDE: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

    #[test]
    fn small_warehouse() {
        let mut shared = Solver::parse(SMALL).unwrap();
        assert_eq!(shared.moves.len(), 15);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2028");
    }

    #[test]
    fn wide_warehouse() {
        let shared = Solver::parse(WIDE).unwrap();
        let mut map = widen(&shared.map).unwrap();
        assert_eq!(map.width(), 14);
        let mut robot = map.find_byte(b'@').unwrap();
        for &dir in &shared.moves {
            robot = push(&mut map, robot, dir);
        }
        let expected = Grid::parse(
            "\
##############
##...[].##..##
##...@.[]...##
##....[]....##
##..........##
##..........##
##############
",
        )
        .unwrap();
        assert_eq!(map, expected);
        assert_eq!(robot, Point::new(2, 5));
    }

    #[test]
    fn wide_warehouse_gps() {
        let mut shared = Solver::parse(WIDE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "908");
        // boxes end with their left halves at (1, 5), (2, 7) and (3, 6)
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "618");
    }

    #[test]
    fn blocked_pushes_leave_everything_in_place() {
        let mut map = Grid::parse("#####\n#@O##\n#####\n").unwrap();
        let before = map.clone();
        assert_eq!(push(&mut map, Point::new(1, 1), Direction::East), Point::new(1, 1));
        assert_eq!(map, before);
    }

    #[test]
    fn bad_moves_are_rejected() {
        assert!(Solver::parse("###\n#@#\n###\n\n<x>\n").is_err());
    }
}

//! 2024 day 14: Restroom Redoubt

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, tags = ["simulation", "modular-arithmetic"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Room {
    width: i64,
    height: i64,
}

const ROOM: Room = Room {
    width: 101,
    height: 103,
};
const SECONDS: i64 = 100;

#[derive(Debug, Clone, Copy)]
pub struct Robot {
    pos: (i64, i64),
    vel: (i64, i64),
}

impl Robot {
    fn after(&self, room: Room, seconds: i64) -> (i64, i64) {
        (
            (self.pos.0 + self.vel.0 * seconds).rem_euclid(room.width),
            (self.pos.1 + self.vel.1 * seconds).rem_euclid(room.height),
        )
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Robot>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let [px, py, vx, vy] = ints_n::<i64, 4>(line)?;
            Ok(Robot {
                pos: (px, py),
                vel: (vx, vy),
            })
        })
    }
}

/// Product of the robot counts per quadrant; the middle lines count for none
fn safety_factor(robots: &[Robot], room: Room, seconds: i64) -> usize {
    let (mx, my) = (room.width / 2, room.height / 2);
    let mut quadrants = [0; 4];
    for robot in robots {
        let (x, y) = robot.after(room, seconds);
        if x == mx || y == my {
            continue;
        }
        quadrants[usize::from(x > mx) + 2 * usize::from(y > my)] += 1;
    }
    quadrants.iter().product()
}

/// First second at which no two robots share a tile
fn first_distinct(robots: &[Robot], room: Room) -> Option<i64> {
    // positions repeat with period width * height
    (0..room.width * room.height).find(|&t| {
        let mut occupied = HashSet::with_capacity(robots.len());
        robots.iter().all(|r| occupied.insert(r.after(room, t)))
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safety_factor(shared, ROOM, SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_distinct(shared, ROOM)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::failed("robots never spread out"))
    }
}

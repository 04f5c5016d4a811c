//! 2023 day 24: Never Tell Me The Odds
//!
//! Part 2 searches rock velocities in growing rings. In the rock's frame
//! every hailstone passes through the single throwing position, so a
//! candidate velocity is checked with exact integer arithmetic.

use crate::utils::parse::{ints_n, lines_with};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::ops::RangeInclusive;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 24, tags = ["math", "geometry"])]
pub struct Solver;

const TEST_AREA: RangeInclusive<i128> = 200_000_000_000_000..=400_000_000_000_000;
const VELOCITY_RANGE: i128 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hailstone {
    pos: [i128; 3],
    vel: [i128; 3],
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hailstone>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let [px, py, pz, vx, vy, vz] = ints_n::<i128, 6>(line)?;
            Ok(Hailstone {
                pos: [px, py, pz],
                vel: [vx, vy, vz],
            })
        })
    }
}

fn cross(a: [i128; 2], b: [i128; 2]) -> i128 {
    a[0] * b[1] - a[1] * b[0]
}

/// Whether the paths of `a` and `b` cross inside `area` on the XY plane,
/// at a time still ahead of both stones
fn paths_cross(a: &Hailstone, b: &Hailstone, area: &RangeInclusive<i128>) -> bool {
    let (va, vb) = ([a.vel[0], a.vel[1]], [b.vel[0], b.vel[1]]);
    let det = cross(va, vb);
    if det == 0 {
        return false;
    }
    let gap = [b.pos[0] - a.pos[0], b.pos[1] - a.pos[1]];
    // times are t = t_num / det and s = s_num / det
    let (t_num, s_num) = (cross(gap, vb), cross(gap, va));
    let (t_num, s_num, det) = if det < 0 { (-t_num, -s_num, -det) } else { (t_num, s_num, det) };
    if t_num < 0 || s_num < 0 {
        return false;
    }
    (0..2).all(|axis| {
        let scaled = a.pos[axis] * det + t_num * a.vel[axis];
        *area.start() * det <= scaled && scaled <= *area.end() * det
    })
}

fn crossings(hail: &[Hailstone], area: &RangeInclusive<i128>) -> usize {
    hail.iter()
        .enumerate()
        .flat_map(|(i, a)| hail[i + 1..].iter().map(move |b| (a, b)))
        .filter(|(a, b)| paths_cross(a, b, area))
        .count()
}

/// Velocities with `max(|vx|, |vy|) == r`
fn ring(r: i128) -> impl Iterator<Item = [i128; 2]> {
    let sides = (-r..=r).flat_map(move |v| [[-r, v], [r, v]]);
    let caps = (-r + 1..r).flat_map(move |v| [[v, -r], [v, r]]);
    sides.chain(caps).take(if r == 0 { 1 } else { usize::MAX })
}

fn exact_div(num: i128, den: i128) -> Option<i128> {
    (den != 0 && num % den == 0).then(|| num / den)
}

/// Throwing position for a rock moving at `vel` in XY, if every stone is hit
fn throw_with(hail: &[Hailstone], vel: [i128; 2]) -> Option<i128> {
    let rel = |h: &Hailstone| [h.vel[0] - vel[0], h.vel[1] - vel[1]];

    // Any two stones whose relative paths are not parallel pin down the XY position
    let (i, j, det) = (0..hail.len())
        .flat_map(|i| (i + 1..hail.len()).map(move |j| (i, j)))
        .map(|(i, j)| (i, j, cross(rel(&hail[i]), rel(&hail[j]))))
        .find(|&(_, _, det)| det != 0)?;
    let gap = [hail[j].pos[0] - hail[i].pos[0], hail[j].pos[1] - hail[i].pos[1]];
    let t = exact_div(cross(gap, rel(&hail[j])), det).filter(|&t| t >= 0)?;
    let (ri, hi) = (rel(&hail[i]), &hail[i]);
    let throw = [hi.pos[0] + t * ri[0], hi.pos[1] + t * ri[1]];

    // Hit time of every stone; `None` when a stone sits still on the rock's path
    let mut times = Vec::with_capacity(hail.len());
    for h in hail {
        let r = rel(h);
        let d = [throw[0] - h.pos[0], throw[1] - h.pos[1]];
        let time = match r {
            [0, 0] if d == [0, 0] => None,
            [0, 0] => return None,
            [0, ry] if d[0] == 0 => Some(exact_div(d[1], ry)?),
            [rx, 0] if d[1] == 0 => Some(exact_div(d[0], rx)?),
            [rx, ry] if rx != 0 && ry != 0 => {
                let t = exact_div(d[0], rx)?;
                (t * ry == d[1]).then_some(t)
            }
            _ => return None,
        };
        if time.is_some_and(|t| t < 0) {
            return None;
        }
        times.push(time);
    }

    // Two distinct hit times fix the Z velocity
    let timed: Vec<(&Hailstone, i128)> = hail
        .iter()
        .zip(&times)
        .filter_map(|(h, t)| t.map(|t| (h, t)))
        .collect();
    let (a, ta) = *timed.first()?;
    let &(b, tb) = timed.iter().find(|&&(_, t)| t != ta)?;
    let vz = exact_div(
        (a.pos[2] + ta * a.vel[2]) - (b.pos[2] + tb * b.vel[2]),
        ta - tb,
    )?;
    let z = a.pos[2] + ta * (a.vel[2] - vz);
    timed
        .iter()
        .all(|&(h, t)| h.pos[2] + t * h.vel[2] == z + t * vz)
        .then(|| throw[0] + throw[1] + z)
}

fn rock_throw(hail: &[Hailstone], max_speed: i128) -> Option<i128> {
    (0..=max_speed)
        .flat_map(ring)
        .find_map(|vel| throw_with(hail, vel))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(crossings(shared, &TEST_AREA).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rock_throw(shared, VELOCITY_RANGE)
            .map(|sum| sum.to_string())
            .ok_or_else(|| SolveError::failed("no rock velocity hits every hailstone"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

    #[test]
    fn example_crossings() {
        let hail = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(crossings(&hail, &(7..=27)), 2);
    }

    #[test]
    fn past_crossings_are_ignored() {
        let hail = Solver::parse(EXAMPLE).unwrap();
        assert!(!paths_cross(&hail[0], &hail[4], &(7..=27)));
        assert!(!paths_cross(&hail[1], &hail[2], &(0..=100)));
    }

    #[test]
    fn example_throw() {
        let hail = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(rock_throw(&hail, 10), Some(24 + 13 + 10));
    }

    #[test]
    fn rings_cover_the_square() {
        let all: Vec<[i128; 2]> = (0..=3).flat_map(ring).collect();
        assert_eq!(all.len(), 49);
        assert_eq!(ring(0).collect::<Vec<_>>(), vec![[0, 0]]);
    }
}

//! 2023 day 5: If You Give A Seed A Fertilizer
//!
//! Part 2 pushes whole seed ranges through each map, splitting a range
//! wherever it straddles a mapping boundary.

use crate::utils::parse::{ints, ints_n, invalid};
use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["ranges"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
struct Mapping {
    dst: u64,
    src: u64,
    len: u64,
}

pub struct Almanac {
    seeds: Vec<u64>,
    /// Each stage's mappings, sorted by source start
    stages: Vec<Vec<Mapping>>,
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut blocks = input.trim().split("\n\n");
    let seeds_line = blocks.next().ok_or_else(|| anyhow!("empty almanac"))?;
    ensure!(seeds_line.starts_with("seeds:"), "first block must list seeds");
    let seeds = ints(seeds_line);

    let stages = blocks
        .map(|block| {
            let mut mappings = block
                .lines()
                .skip(1)
                .map(|line| {
                    let [dst, src, len] = ints_n::<u64, 3>(line)?;
                    Ok(Mapping { dst, src, len })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            mappings.sort_by_key(|m| m.src);
            Ok(mappings)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Almanac { seeds, stages })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_almanac(&input.replace("\r\n", "\n")).map_err(invalid)
    }
}

/// Map the half-open ranges through one stage
fn map_ranges(ranges: Vec<(u64, u64)>, stage: &[Mapping]) -> Vec<(u64, u64)> {
    let mut out = Vec::with_capacity(ranges.len());
    for (mut start, end) in ranges {
        for m in stage {
            if start >= end {
                break;
            }
            let (m_start, m_end) = (m.src, m.src + m.len);
            if m_end <= start {
                continue;
            }
            if m_start >= end {
                break;
            }
            if start < m_start {
                out.push((start, m_start));
                start = m_start;
            }
            let overlap_end = end.min(m_end);
            out.push((start - m.src + m.dst, overlap_end - m.src + m.dst));
            start = overlap_end;
        }
        if start < end {
            out.push((start, end));
        }
    }
    out
}

fn lowest_location(almanac: &Almanac, ranges: Vec<(u64, u64)>) -> Result<String, SolveError> {
    almanac
        .stages
        .iter()
        .fold(ranges, |ranges, stage| map_ranges(ranges, stage))
        .into_iter()
        .map(|(start, _)| start)
        .min()
        .map(|l| l.to_string())
        .ok_or_else(|| SolveError::failed("no seeds"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ranges = shared.seeds.iter().map(|&s| (s, s + 1)).collect();
        lowest_location(shared, ranges)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::failed("seed ranges must come in pairs"));
        }
        let ranges = shared
            .seeds
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[0] + pair[1]))
            .collect();
        lowest_location(shared, ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn example_almanac() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.stages.len(), 7);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "35");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "46");
    }

    #[test]
    fn range_split_keeps_every_value() {
        let stage = [Mapping {
            dst: 100,
            src: 5,
            len: 3,
        }];
        let mapped = map_ranges(vec![(0, 10)], &stage);
        assert_eq!(mapped, vec![(0, 5), (100, 103), (8, 10)]);
    }
}

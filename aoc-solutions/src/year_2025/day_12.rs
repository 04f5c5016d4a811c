//! 2025 day 12: Christmas Tree Farm
//!
//! Most regions are settled by counting alone: either the presents cover more
//! cells than the region has, or the region tiles into enough 3x3 blocks to
//! give every present its own. The rest go to an exact search that fills the
//! region cell by cell, either covering the first free cell with some present
//! or leaving it empty while spare cells remain.

use crate::utils::parse::{invalid, ints};
use anyhow::{Context, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 12, tags = ["packing", "backtracking"])]
pub struct Solver;

/// Every present fits in a 3x3 box
const BOX: usize = 3;
/// Search nodes allowed per region before giving up
const NODE_BUDGET: u64 = 50_000_000;

/// A present in every distinct orientation. Offsets are relative to the
/// orientation's first cell in reading order, so rows never go negative.
#[derive(Debug)]
pub struct Shape {
    cells: usize,
    orientations: Vec<Vec<(usize, isize)>>,
}

#[derive(Debug)]
pub struct Region {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

#[derive(Debug)]
pub struct Farm {
    shapes: Vec<Shape>,
    regions: Vec<Region>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    TooSmall,
    Roomy,
    Packed,
    Impossible,
}

impl Verdict {
    fn fits(self) -> bool {
        matches!(self, Verdict::Roomy | Verdict::Packed)
    }
}

impl Shape {
    fn parse(rows: &[&str]) -> anyhow::Result<Self> {
        let cells: Vec<(isize, isize)> = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'#')
                    .map(move |(c, _)| (r as isize, c as isize))
            })
            .collect();
        ensure!(!cells.is_empty(), "present has no cells");
        ensure!(
            rows.len() <= BOX && rows.iter().all(|r| r.len() <= BOX),
            "present larger than {BOX}x{BOX}"
        );

        let mut orientations = Vec::new();
        let mut current = cells.clone();
        for _ in 0..2 {
            for _ in 0..4 {
                current = current.iter().map(|&(r, c)| (c, -r)).collect();
                orientations.push(anchored(&current));
            }
            current = current.iter().map(|&(r, c)| (r, -c)).collect();
        }
        Ok(Self {
            cells: cells.len(),
            orientations: orientations.into_iter().sorted().dedup().collect(),
        })
    }
}

/// Offsets from the first cell in reading order
fn anchored(cells: &[(isize, isize)]) -> Vec<(usize, isize)> {
    let sorted: Vec<_> = cells.iter().copied().sorted().collect();
    let (r0, c0) = sorted[0];
    sorted
        .into_iter()
        .map(|(r, c)| ((r - r0) as usize, c - c0))
        .collect()
}

fn parse_region(line: &str, shapes: usize) -> anyhow::Result<Region> {
    let (size, counts) = line.split_once(':').context("expected `WxH: counts`")?;
    let (width, height) = size
        .trim()
        .split_once('x')
        .and_then(|(w, h)| Some((w.parse().ok()?, h.parse().ok()?)))
        .with_context(|| format!("bad region size {size:?}"))?;
    let counts = ints::<usize>(counts);
    ensure!(
        counts.len() == shapes,
        "{} present counts for {shapes} presents",
        counts.len()
    );
    Ok(Region {
        width,
        height,
        counts,
    })
}

fn parse_farm(input: &str) -> anyhow::Result<Farm> {
    let mut shapes = Vec::new();
    let mut regions = Vec::new();
    let lines: Vec<&str> = input.lines().map(str::trim_end).collect();
    for block in lines.split(|l| l.is_empty()).filter(|b| !b.is_empty()) {
        let header = block[0];
        if let Some(index) = header.strip_suffix(':') {
            let index: usize = index
                .parse()
                .with_context(|| format!("bad header {header:?}"))?;
            ensure!(index == shapes.len(), "present {index} out of order");
            shapes.push(Shape::parse(&block[1..]).with_context(|| format!("present {index}"))?);
        } else {
            for line in block {
                let region = parse_region(line, shapes.len())
                    .with_context(|| format!("region {line:?}"))?;
                regions.push(region);
            }
        }
    }
    if shapes.is_empty() || regions.is_empty() {
        bail!("expected presents followed by regions");
    }
    Ok(Farm { shapes, regions })
}

impl AocParser for Solver {
    type SharedData<'a> = Farm;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_farm(input).map_err(invalid)
    }
}

struct Packer<'f> {
    shapes: &'f [Shape],
    width: usize,
    height: usize,
    filled: Vec<bool>,
    left: Vec<usize>,
    remaining: usize,
    nodes: u64,
}

/// The search ran out of nodes
struct Exhausted;

impl<'f> Packer<'f> {
    fn new(shapes: &'f [Shape], region: &Region) -> Self {
        Self {
            shapes,
            width: region.width,
            height: region.height,
            filled: vec![false; region.width * region.height],
            left: region.counts.clone(),
            remaining: region.counts.iter().sum(),
            nodes: 0,
        }
    }

    /// Index of the cell `offset` away from `pos`, if it is on the region
    fn cell(&self, pos: usize, (dr, dc): (usize, isize)) -> Option<usize> {
        let row = pos / self.width + dr;
        let col = (pos % self.width)
            .checked_add_signed(dc)
            .filter(|&c| c < self.width)?;
        (row < self.height).then_some(row * self.width + col)
    }

    fn fits(&self, pos: usize, orientation: &[(usize, isize)]) -> bool {
        orientation
            .iter()
            .all(|&offset| self.cell(pos, offset).is_some_and(|i| !self.filled[i]))
    }

    fn set(&mut self, pos: usize, orientation: &[(usize, isize)], value: bool) {
        for &offset in orientation {
            if let Some(i) = self.cell(pos, offset) {
                self.filled[i] = value;
            }
        }
    }

    fn pack(&mut self, mut pos: usize, slack: usize) -> Result<bool, Exhausted> {
        self.nodes += 1;
        if self.nodes > NODE_BUDGET {
            return Err(Exhausted);
        }
        if self.remaining == 0 {
            return Ok(true);
        }
        while pos < self.filled.len() && self.filled[pos] {
            pos += 1;
        }
        if pos == self.filled.len() {
            return Ok(false);
        }

        let shapes = self.shapes;
        for (index, shape) in shapes.iter().enumerate() {
            if self.left[index] == 0 {
                continue;
            }
            for orientation in &shape.orientations {
                if !self.fits(pos, orientation) {
                    continue;
                }
                self.set(pos, orientation, true);
                self.left[index] -= 1;
                self.remaining -= 1;
                let packed = self.pack(pos + 1, slack);
                self.left[index] += 1;
                self.remaining += 1;
                self.set(pos, orientation, false);
                if packed? {
                    return Ok(true);
                }
            }
        }

        if slack > 0 {
            self.filled[pos] = true;
            let packed = self.pack(pos + 1, slack - 1);
            self.filled[pos] = false;
            return packed;
        }
        Ok(false)
    }
}

fn verdict(shapes: &[Shape], region: &Region) -> Result<Verdict, Exhausted> {
    let area = region.width * region.height;
    let needed: usize = region
        .counts
        .iter()
        .zip(shapes)
        .map(|(n, s)| n * s.cells)
        .sum();
    if needed > area {
        return Ok(Verdict::TooSmall);
    }
    let presents: usize = region.counts.iter().sum();
    if (region.width / BOX) * (region.height / BOX) >= presents {
        return Ok(Verdict::Roomy);
    }

    let mut packer = Packer::new(shapes, region);
    let packed = packer.pack(0, area - needed);
    tracing::debug!(
        width = region.width,
        height = region.height,
        nodes = packer.nodes,
        "searched region"
    );
    Ok(if packed? {
        Verdict::Packed
    } else {
        Verdict::Impossible
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let verdicts = shared
            .regions
            .par_iter()
            .map(|region| {
                verdict(&shared.shapes, region).map_err(|Exhausted| {
                    SolveError::failed(format!(
                        "gave up on {}x{} region after {NODE_BUDGET} nodes",
                        region.width, region.height
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let fitting = verdicts.iter().filter(|v| v.fits()).count();
        Ok(fitting.to_string())
    }
}

//! 2024 day 9: Disk Fragmenter

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

/// File spans indexed by file id, and the free gaps between them
#[derive(Debug, Clone)]
pub struct Disk {
    files: Vec<Span>,
    gaps: Vec<Span>,
}

impl AocParser for Solver {
    type SharedData<'a> = Disk;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = input.trim();
        if map.is_empty() {
            return Err(ParseError::MissingData("empty disk map".into()));
        }
        let mut disk = Disk {
            files: Vec::new(),
            gaps: Vec::new(),
        };
        let mut start = 0;
        for (i, b) in map.bytes().enumerate() {
            if !b.is_ascii_digit() {
                return Err(ParseError::InvalidFormat(format!(
                    "unexpected {:?} at offset {i}",
                    b as char
                )));
            }
            let span = Span {
                start,
                len: usize::from(b - b'0'),
            };
            if i % 2 == 0 {
                disk.files.push(span);
            } else {
                disk.gaps.push(span);
            }
            start += span.len;
        }
        Ok(disk)
    }
}

fn block_checksum(id: usize, span: Span) -> usize {
    (span.start..span.start + span.len).sum::<usize>() * id
}

/// Moves single blocks from the end into the leftmost free block
fn compact_blocks(disk: &Disk) -> usize {
    let mut blocks: Vec<Option<usize>> = Vec::new();
    for (id, file) in disk.files.iter().enumerate() {
        blocks.extend(std::iter::repeat_n(Some(id), file.len));
        if let Some(gap) = disk.gaps.get(id) {
            blocks.extend(std::iter::repeat_n(None, gap.len));
        }
    }
    let (mut left, mut right) = (0, blocks.len());
    loop {
        while left < right && blocks[left].is_some() {
            left += 1;
        }
        while right > left && blocks[right - 1].is_none() {
            right -= 1;
        }
        if left + 1 >= right {
            break;
        }
        blocks.swap(left, right - 1);
    }
    blocks
        .iter()
        .enumerate()
        .filter_map(|(i, id)| id.map(|id| i * id))
        .sum()
}

/// Moves whole files, highest id first, into the leftmost gap that fits
fn compact_files(disk: &Disk) -> usize {
    let mut files = disk.files.clone();
    let mut gaps = disk.gaps.clone();
    for file in files.iter_mut().rev() {
        let Span { start, len } = *file;
        if let Some(gap) = gaps
            .iter_mut()
            .take_while(|g| g.start < start)
            .find(|g| g.len >= len)
        {
            file.start = gap.start;
            gap.start += len;
            gap.len -= len;
        }
    }
    files
        .iter()
        .enumerate()
        .map(|(id, &span)| block_checksum(id, span))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(compact_blocks(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(compact_files(shared).to_string())
    }
}

//! 2023 day 18: Lavaduct Lagoon

use crate::utils::grid::Direction;
use crate::utils::parse::{lines_with, number};
use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 18, tags = ["geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Dig {
    plain: (Direction, i64),
    /// The instruction hidden in the colour code
    hex: (Direction, i64),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Dig>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let mut fields = line.split_whitespace();
            let (Some(dir), Some(len), Some(colour)) = (fields.next(), fields.next(), fields.next())
            else {
                bail!("expected direction, length and colour");
            };
            let dir = dir
                .bytes()
                .next()
                .and_then(Direction::from_byte)
                .ok_or_else(|| anyhow!("bad direction {dir:?}"))?;
            let code = colour.trim_start_matches("(#").trim_end_matches(')');
            ensure!(
                code.len() == 6 && code.is_ascii(),
                "colour must have six hex digits"
            );
            let hex_len = i64::from_str_radix(&code[..5], 16)?;
            let hex_dir = match &code[5..] {
                "0" => Direction::East,
                "1" => Direction::South,
                "2" => Direction::West,
                "3" => Direction::North,
                other => bail!("bad hex direction {other:?}"),
            };
            Ok(Dig {
                plain: (dir, number(len)?),
                hex: (hex_dir, hex_len),
            })
        })
    }
}

/// Tiles dug out: shoelace interior plus the trench itself (Pick's theorem)
fn lagoon(steps: impl Iterator<Item = (Direction, i64)>) -> i64 {
    let (mut row, mut col) = (0i64, 0i64);
    let mut twice_area = 0;
    let mut perimeter = 0;
    for (dir, len) in steps {
        let (dr, dc) = dir.delta();
        let (nr, nc) = (row + dr as i64 * len, col + dc as i64 * len);
        twice_area += col * nr - nc * row;
        perimeter += len;
        (row, col) = (nr, nc);
    }
    twice_area.abs() / 2 + perimeter / 2 + 1
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lagoon(shared.iter().map(|d| d.plain)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lagoon(shared.iter().map(|d| d.hex)).to_string())
    }
}

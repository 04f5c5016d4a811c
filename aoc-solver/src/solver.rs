//! Traits a puzzle implements: one parser, one solver per part

use crate::error::{ParseError, SolveError};

/// Turns the raw puzzle input into the data every part works on.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a [u8];
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim().as_bytes())
///     }
/// }
/// ```
pub trait AocParser {
    /// Parsed input plus anything a later part wants to reuse.
    ///
    /// The lifetime lets a puzzle borrow from the input instead of copying it.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a [u8];
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim().as_bytes())
///     }
/// }
///
/// impl PartSolver<1> for Floors {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let floor: i64 = shared.iter().map(|&b| if b == b'(' { 1 } else { -1 }).sum();
///         Ok(floor.to_string())
///     }
/// }
///
/// let mut data = Floors::parse("(()(()(").unwrap();
/// assert_eq!(<Floors as PartSolver<1>>::solve(&mut data).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A whole puzzle: parsing plus dispatch over its parts.
///
/// Usually generated with `#[derive(AocSolver)]`, which forwards each part to the
/// matching [`PartSolver`] implementation.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(i, l)| l.parse().map_err(|e| ParseError::at_line(i + 1, e)))
///             .collect()
///     }
/// }
///
/// impl Solver for Depths {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<u32>().to_string()),
///             2 => Ok(shared.iter().max().copied().unwrap_or_default().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts; part numbers run from 1 to `PARTS`
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but parts outside `1..=PARTS` never reach the puzzle.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

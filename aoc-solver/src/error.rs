//! Error types shared by every puzzle solver

use thiserror::Error;

/// Error raised while turning raw puzzle input into shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not have the expected shape
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// A section or value the puzzle needs is absent
    #[error("missing data: {0}")]
    MissingData(String),
    #[error("parse error: {0}")]
    Other(String),
}

impl ParseError {
    /// Invalid format pinned to a 1-based input line
    pub fn at_line(line: usize, msg: impl std::fmt::Display) -> Self {
        Self::InvalidFormat(format!("line {line}: {msg}"))
    }
}

/// Error raised while solving one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is outside `1..=PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap a plain message, used when the input admits no answer
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::SolveFailed(msg.into().into())
    }
}

/// Error returned by registry lookups
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("no solver registered for {0} day {1}")]
    NotFound(u16, u8),
    #[error("year {0} day {1} is outside the supported calendar")]
    InvalidYearDay(u16, u8),
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    SolveError(#[from] SolveError),
}

/// Error returned while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Two solvers claim the same calendar slot
    #[error("duplicate solver registration for {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("year {0} day {1} is outside the supported calendar")]
    InvalidYearDay(u16, u8),
}

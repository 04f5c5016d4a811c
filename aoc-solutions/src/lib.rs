//! Advent of Code puzzle solutions.
//!
//! Every `year_YYYY::day_D` module exposes a `Solver` registered through
//! `#[derive(AutoRegisterSolver)]`; linking this crate is enough for the runner
//! to find them. Each year sits behind a `year-YYYY` feature, all on by default.

pub mod utils;

#[cfg(feature = "year-2015")]
pub mod year_2015;

#[cfg(feature = "year-2016")]
pub mod year_2016;

#[cfg(feature = "year-2023")]
pub mod year_2023;

#[cfg(feature = "year-2024")]
pub mod year_2024;

#[cfg(feature = "year-2025")]
pub mod year_2025;

//! Framework for Advent of Code puzzle solvers.
//!
//! A puzzle implements [`AocParser`] once and [`PartSolver<N>`] for each of its
//! parts; `#[derive(AocSolver)]` stitches the parts into a [`Solver`] and
//! `#[derive(AutoRegisterSolver)]` makes it discoverable through
//! [`SolverRegistryBuilder::register_all_plugins`].
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//! use aoc_solver_macros::AocSolver;
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Floors;
//!
//! impl AocParser for Floors {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .trim()
//!             .bytes()
//!             .map(|b| match b {
//!                 b'(' => Ok(1),
//!                 b')' => Ok(-1),
//!                 other => Err(ParseError::InvalidFormat(format!("unexpected {:?}", other as char))),
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Floors {
//!     fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(steps.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Floors {
//!     fn solve(steps: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let mut floor = 0;
//!         for (i, step) in steps.iter().enumerate() {
//!             floor += step;
//!             if floor < 0 {
//!                 return Ok((i + 1).to_string());
//!             }
//!         }
//!         Err(SolveError::failed("never reaches the basement"))
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register::<Floors>(2015, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2015, 1, "()())").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "-1");
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code `AutoRegisterSolver` expands to
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

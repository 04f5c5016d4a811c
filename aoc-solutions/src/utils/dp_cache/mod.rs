//! Memoisation over a DAG of sub-problems.
//!
//! A [`DpProblem`] names the sub-problems an index depends on and combines their
//! values; [`DpCache`] resolves dependencies recursively and computes every index
//! at most once. Storage is pluggable through [`Backend`].
//!
//! Dependencies must form a DAG. A cycle recurses until the stack overflows.
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! /// Ways to climb `n` stairs taking one or two steps at a time
//! struct Stairs;
//!
//! impl DpProblem<usize, u64> for Stairs {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!
//!     fn compute(&self, _n: &usize, deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(VecBackend::new())
//!     .problem(Stairs)
//!     .build();
//! assert_eq!(cache.get(&10), 89);
//! ```
//!
//! For one-off recurrences a [`ClosureProblem`] avoids the struct:
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
//!
//! let paths = ClosureProblem::new(
//!     |&(r, c): &(u32, u32)| match (r, c) {
//!         (0, _) | (_, 0) => vec![],
//!         _ => vec![(r - 1, c), (r, c - 1)],
//!     },
//!     |_: &(u32, u32), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
//! );
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), paths);
//! assert_eq!(cache.get(&(4, 4)), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;

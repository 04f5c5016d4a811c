use std::cell::Cell;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Counts how often `compute` runs
struct Diamond {
    computed: Cell<u32>,
}

impl DpProblem<usize, i64> for Diamond {
    fn deps(&self, n: &usize) -> Vec<usize> {
        match *n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        }
    }

    fn compute(&self, n: &usize, deps: Vec<i64>) -> i64 {
        self.computed.set(self.computed.get() + 1);
        match *n {
            0 => deps[0] + deps[1],
            1 => deps[0] * 2,
            2 => deps[0] * 3,
            _ => 5,
        }
    }
}

#[test]
fn fibonacci_chain_resolves() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
    assert_eq!(cache.cached(), 91);
}

#[test]
fn shared_dependency_is_computed_once() {
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            computed: Cell::new(0),
        },
    );

    assert_eq!(cache.get(&0), 25);
    assert_eq!(cache.problem().computed.get(), 4);

    assert_eq!(cache.get(&0), 25);
    assert_eq!(cache.get(&3), 5);
    assert_eq!(cache.problem().computed.get(), 4);
}

#[test]
fn builder_accepts_problem_first() {
    let cache = DpCache::builder()
        .problem(Fibonacci)
        .backend(VecBackend::with_capacity(16))
        .build();
    assert_eq!(cache.get(&15), 610);
}

#[test]
fn hashmap_backend_handles_tuple_indices() {
    let binomial = ClosureProblem::new(
        |&(n, k): &(u64, u64)| {
            if k == 0 || k == n { vec![] } else { vec![(n - 1, k - 1), (n - 1, k)] }
        },
        |_: &(u64, u64), deps: Vec<u128>| if deps.is_empty() { 1 } else { deps[0] + deps[1] },
    );
    let cache = DpCache::with_problem(HashMapBackend::new(), binomial);

    assert_eq!(cache.get(&(10, 3)), 120);
    assert_eq!(cache.get(&(60, 30)), 118_264_581_564_861_424);
}

#[test]
fn vec_backend_reports_only_filled_slots() {
    let mut backend: VecBackend<u8> = VecBackend::new();
    assert!(backend.is_empty());
    backend.insert(10, 1);
    assert_eq!(backend.len(), 1);
    assert_eq!(backend.get(&10), Some(&1));
    assert_eq!(backend.get(&3), None);
    assert_eq!(backend.get(&11), None);
}

fn fib_iterative(n: usize) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

proptest! {
    #[test]
    fn memo_matches_iteration(n in 0usize..90) {
        let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
        prop_assert_eq!(cache.get(&n), fib_iterative(n));
    }

    #[test]
    fn backends_agree(n in 0usize..60) {
        let dense = DpCache::with_problem(VecBackend::new(), Fibonacci);
        let sparse = DpCache::with_problem(HashMapBackend::new(), Fibonacci);
        prop_assert_eq!(dense.get(&n), sparse.get(&n));
    }
}

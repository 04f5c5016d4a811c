//! Puts results arriving from worker threads back into calendar order.
//!
//! Two min-heaps: the keys still expected, and results received ahead of their turn.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy, Hash)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Heap entry ordered smallest key first
struct Pending(SolverResult);

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Pending {}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Pending>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Accept one result; returns every result that is now next in line
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(Pending(result));

        let mut ready = Vec::new();
        while let Some(Reverse(next)) = self.expected.peek() {
            match self.pending.peek() {
                Some(top) if ResultKey::from(&top.0) == *next => {
                    self.expected.pop();
                    ready.extend(self.pending.pop().map(|p| p.0));
                }
                _ => break,
            }
        }
        ready
    }

    /// Whatever is still buffered, in key order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|p| p.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn result(k: ResultKey) -> SolverResult {
        SolverResult {
            year: k.year,
            day: k.day,
            part: k.part,
            answer: Ok(format!("{}-{}-{}", k.year, k.day, k.part)),
            parse_duration: None,
            solve_duration: TimeDelta::milliseconds(1),
        }
    }

    #[test]
    fn in_order_results_pass_straight_through() {
        let mut agg = ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2)]);
        assert_eq!(agg.add(result(key(2015, 1, 1))).len(), 1);
        assert_eq!(agg.add(result(key(2015, 1, 2)))[0].part, 2);
        assert!(agg.is_complete());
    }

    #[test]
    fn early_results_wait_for_their_turn() {
        let mut agg =
            ResultAggregator::new([key(2015, 1, 1), key(2015, 1, 2), key(2016, 4, 1)]);

        assert!(agg.add(result(key(2016, 4, 1))).is_empty());
        assert!(agg.add(result(key(2015, 1, 2))).is_empty());

        let ready = agg.add(result(key(2015, 1, 1)));
        let keys: Vec<_> = ready.iter().map(ResultKey::from).collect();
        assert_eq!(keys, vec![key(2015, 1, 1), key(2015, 1, 2), key(2016, 4, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn drain_returns_stragglers_sorted() {
        let mut agg = ResultAggregator::new([key(2023, 1, 1), key(2023, 1, 2), key(2023, 2, 1)]);
        agg.add(result(key(2023, 2, 1)));
        agg.add(result(key(2023, 1, 2)));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 2);
        assert_eq!(ResultKey::from(&remaining[0]), key(2023, 1, 2));
        assert!(!agg.is_complete());
    }

    proptest! {
        #[test]
        fn any_arrival_order_comes_out_sorted(
            keys in prop::collection::btree_set((2015u16..2026, 1u8..=25, 1u8..=2), 1..30)
                .prop_map(|s| s.into_iter().map(|(y, d, p)| key(y, d, p)).collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let mut agg = ResultAggregator::new(keys.clone());
            let mut emitted = Vec::new();
            for k in &keys {
                emitted.extend(agg.add(result(*k)).iter().map(ResultKey::from));
            }
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(emitted, sorted);
            prop_assert!(agg.is_complete());
        }
    }
}
